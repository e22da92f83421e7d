//! Settlement records.
//!
//! A settlement row marks a month as settled and keeps who paid whom. The amount is always
//! computed from the household's shared expenses at the time of recording.

use crate::{
    core::{dashboard::build_dashboard, period::Period},
    db::{households::get_household_by_id, snapshot::load_snapshot},
    entities::{Settlement, settlement},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// The settlement recorded for a household and month, if any.
pub async fn get_settlement<C>(
    db: &C,
    household_id: i64,
    period: Period,
) -> Result<Option<settlement::Model>>
where
    C: ConnectionTrait,
{
    Settlement::find()
        .filter(settlement::Column::HouseholdId.eq(household_id))
        .filter(settlement::Column::Month.eq(period.month_column()))
        .filter(settlement::Column::Year.eq(period.year()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// All settlement records of a household for a month.
pub async fn get_settlements_for_period<C>(
    db: &C,
    household_id: i64,
    period: Period,
) -> Result<Vec<settlement::Model>>
where
    C: ConnectionTrait,
{
    Settlement::find()
        .filter(settlement::Column::HouseholdId.eq(household_id))
        .filter(settlement::Column::Month.eq(period.month_column()))
        .filter(settlement::Column::Year.eq(period.year()))
        .order_by_asc(settlement::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Records the current settlement of `period` as paid.
///
/// Fails with [`Error::HouseholdNotFound`] for an unknown household,
/// [`Error::AlreadySettled`] if the month already has a record and
/// [`Error::NothingToSettle`] if the shared expenses are balanced. The check and the insert
/// run in one transaction.
#[instrument(skip(db))]
pub async fn record_settlement(
    db: &DatabaseConnection,
    household_id: i64,
    requesting_user_id: &str,
    period: Period,
) -> Result<settlement::Model> {
    let txn = db.begin().await?;

    if get_household_by_id(&txn, household_id).await?.is_none() {
        return Err(Error::HouseholdNotFound {
            household_id: household_id.to_string(),
        });
    }

    let snapshot = load_snapshot(&txn, household_id, period).await?;
    let dashboard = build_dashboard(&snapshot, requesting_user_id, period)?;
    let summary = dashboard.settlement;

    if summary.is_settled {
        return Err(Error::AlreadySettled {
            month: period.month(),
            year: period.year(),
        });
    }

    let (Some(paid_by), Some(paid_to)) = (summary.owed_by_user_id, summary.owed_to_user_id) else {
        return Err(Error::NothingToSettle {
            month: period.month(),
            year: period.year(),
        });
    };

    let record = settlement::ActiveModel {
        household_id: Set(household_id),
        month: Set(period.month_column()),
        year: Set(period.year()),
        amount: Set(summary.amount),
        paid_by_user_id: Set(paid_by),
        paid_to_user_id: Set(paid_to),
        settled_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let saved = record.insert(&txn).await?;
    txn.commit().await?;

    info!(
        "Recorded settlement of {} from {} to {} for {period}",
        saved.amount, saved.paid_by_user_id, saved.paid_to_user_id
    );
    Ok(saved)
}
