//! Loads everything the dashboard calculators need for one household and month.

use crate::{
    core::{dashboard::HouseholdSnapshot, period::Period},
    db::{expenses, members, payments, salaries, savings, settlements},
    errors::Result,
};
use sea_orm::ConnectionTrait;
use tracing::{debug, instrument};

/// Reads the members, salaries, active expenses, payment statuses, savings and settlement
/// records of a household for `period`.
///
/// Works on a plain connection or inside a transaction, so callers that need a consistent
/// view while writing (such as recording a settlement) can pass their transaction.
#[instrument(skip(db))]
pub async fn load_snapshot<C>(db: &C, household_id: i64, period: Period) -> Result<HouseholdSnapshot>
where
    C: ConnectionTrait,
{
    let members = members::get_household_members(db, household_id).await?;
    let user_ids: Vec<String> = members.iter().map(|m| m.user_id.clone()).collect();
    let salaries = salaries::get_salaries_for_period(db, &user_ids, period).await?;

    let expenses = expenses::get_active_expenses(db, household_id).await?;
    let expense_ids: Vec<i64> = expenses.iter().map(|e| e.id).collect();
    let payment_statuses =
        payments::get_payment_statuses_for_period(db, &expense_ids, period).await?;

    let savings = savings::get_savings_for_period(db, household_id, period).await?;
    let settlements = settlements::get_settlements_for_period(db, household_id, period).await?;

    debug!(
        members = members.len(),
        expenses = expenses.len(),
        "Loaded household snapshot for {period}"
    );

    Ok(HouseholdSnapshot {
        household_id,
        members,
        salaries,
        expenses,
        payment_statuses,
        savings,
        settlements,
    })
}
