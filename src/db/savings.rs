//! Saving contributions recorded by members.

use crate::{
    core::period::Period,
    entities::{Saving, saving},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::instrument;

/// Records a saving contribution for a month. The amount must be positive.
#[instrument(skip(db, description))]
pub async fn add_saving<C>(
    db: &C,
    household_id: i64,
    user_id: &str,
    amount: Decimal,
    is_shared: bool,
    period: Period,
    description: Option<String>,
) -> Result<saving::Model>
where
    C: ConnectionTrait,
{
    if amount <= Decimal::ZERO {
        return Err(Error::invalid_amount(amount));
    }

    let saving = saving::ActiveModel {
        household_id: Set(household_id),
        user_id: Set(user_id.to_string()),
        amount: Set(amount),
        is_shared: Set(is_shared),
        month: Set(period.month_column()),
        year: Set(period.year()),
        description: Set(description),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    Ok(saving.insert(db).await?)
}

/// All savings recorded in a household for a month, oldest first.
pub async fn get_savings_for_period<C>(
    db: &C,
    household_id: i64,
    period: Period,
) -> Result<Vec<saving::Model>>
where
    C: ConnectionTrait,
{
    Saving::find()
        .filter(saving::Column::HouseholdId.eq(household_id))
        .filter(saving::Column::Month.eq(period.month_column()))
        .filter(saving::Column::Year.eq(period.year()))
        .order_by_asc(saving::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
