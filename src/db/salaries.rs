//! Salary records, one per member and month.

use crate::{
    core::period::Period,
    entities::{Salary, salary},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{Set, prelude::*};
use tracing::{debug, instrument};

/// Sets a member's salary for a month, replacing any existing record for that month.
///
/// `current_amount` defaults to `default_amount` when no bonus or deduction applies.
#[instrument(skip(db))]
pub async fn set_salary<C>(
    db: &C,
    user_id: &str,
    period: Period,
    default_amount: Decimal,
    current_amount: Option<Decimal>,
) -> Result<salary::Model>
where
    C: ConnectionTrait,
{
    let current_amount = current_amount.unwrap_or(default_amount);
    for amount in [default_amount, current_amount] {
        if amount.is_sign_negative() {
            return Err(Error::invalid_amount(amount));
        }
    }

    let existing = get_salary(db, user_id, period).await?;
    let now = chrono::Utc::now();

    let saved = if let Some(record) = existing {
        debug!("Updating salary {} for {period}", record.id);
        let mut active: salary::ActiveModel = record.into();
        active.default_amount = Set(default_amount);
        active.current_amount = Set(current_amount);
        active.updated_at = Set(now);
        active.update(db).await?
    } else {
        salary::ActiveModel {
            user_id: Set(user_id.to_string()),
            month: Set(period.month_column()),
            year: Set(period.year()),
            default_amount: Set(default_amount),
            current_amount: Set(current_amount),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?
    };

    Ok(saved)
}

/// A member's salary record for a month, if any.
pub async fn get_salary<C>(db: &C, user_id: &str, period: Period) -> Result<Option<salary::Model>>
where
    C: ConnectionTrait,
{
    Salary::find()
        .filter(salary::Column::UserId.eq(user_id))
        .filter(salary::Column::Month.eq(period.month_column()))
        .filter(salary::Column::Year.eq(period.year()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Salary records of the given users for a month.
pub async fn get_salaries_for_period<C>(
    db: &C,
    user_ids: &[String],
    period: Period,
) -> Result<Vec<salary::Model>>
where
    C: ConnectionTrait,
{
    Salary::find()
        .filter(salary::Column::UserId.is_in(user_ids.iter().map(String::as_str)))
        .filter(salary::Column::Month.eq(period.month_column()))
        .filter(salary::Column::Year.eq(period.year()))
        .all(db)
        .await
        .map_err(Into::into)
}
