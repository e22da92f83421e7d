//! Per-month payment status of expenses.

use crate::{
    core::period::Period,
    entities::{PaymentStatus, payment_status},
    errors::Result,
};
use sea_orm::{Set, prelude::*};
use tracing::instrument;

/// Marks an expense as paid for a month. Marking twice keeps a single row.
#[instrument(skip(db))]
pub async fn mark_paid<C>(db: &C, expense_id: i64, period: Period) -> Result<payment_status::Model>
where
    C: ConnectionTrait,
{
    set_status(
        db,
        expense_id,
        period,
        payment_status::STATUS_PAID,
        Some(chrono::Utc::now()),
    )
    .await
}

/// Marks an expense as unpaid for a month.
#[instrument(skip(db))]
pub async fn mark_unpaid<C>(
    db: &C,
    expense_id: i64,
    period: Period,
) -> Result<payment_status::Model>
where
    C: ConnectionTrait,
{
    set_status(db, expense_id, period, payment_status::STATUS_PENDING, None).await
}

async fn set_status<C>(
    db: &C,
    expense_id: i64,
    period: Period,
    status: &str,
    paid_at: Option<DateTimeUtc>,
) -> Result<payment_status::Model>
where
    C: ConnectionTrait,
{
    let existing = PaymentStatus::find()
        .filter(payment_status::Column::ExpenseId.eq(expense_id))
        .filter(payment_status::Column::Month.eq(period.month_column()))
        .filter(payment_status::Column::Year.eq(period.year()))
        .one(db)
        .await?;

    let saved = if let Some(row) = existing {
        let mut active: payment_status::ActiveModel = row.into();
        active.status = Set(status.to_string());
        active.paid_at = Set(paid_at);
        active.update(db).await?
    } else {
        payment_status::ActiveModel {
            expense_id: Set(expense_id),
            month: Set(period.month_column()),
            year: Set(period.year()),
            status: Set(status.to_string()),
            paid_at: Set(paid_at),
            ..Default::default()
        }
        .insert(db)
        .await?
    };

    Ok(saved)
}

/// Payment statuses of the given expenses for a month.
pub async fn get_payment_statuses_for_period<C>(
    db: &C,
    expense_ids: &[i64],
    period: Period,
) -> Result<Vec<payment_status::Model>>
where
    C: ConnectionTrait,
{
    PaymentStatus::find()
        .filter(payment_status::Column::ExpenseId.is_in(expense_ids.iter().copied()))
        .filter(payment_status::Column::Month.eq(period.month_column()))
        .filter(payment_status::Column::Year.eq(period.year()))
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mark_paid_then_unpaid() -> Result<()> {
        let (db, household, alice, _) = setup_with_household().await?;
        let rent = insert_monthly_expense(&db, household.id, &alice.user_id, "Rent", dec!(900)).await?;
        let march = Period::new(3, 2026)?;

        let paid = mark_paid(&db, rent.id, march).await?;
        assert!(paid.is_paid());
        assert!(paid.paid_at.is_some());

        let unpaid = mark_unpaid(&db, rent.id, march).await?;
        assert!(!unpaid.is_paid());
        assert!(unpaid.paid_at.is_none());
        assert_eq!(paid.id, unpaid.id);

        assert_eq!(PaymentStatus::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_statuses_filtered_by_expense_and_month() -> Result<()> {
        let (db, household, alice, _) = setup_with_household().await?;
        let rent = insert_monthly_expense(&db, household.id, &alice.user_id, "Rent", dec!(900)).await?;
        let gym = insert_monthly_expense(&db, household.id, &alice.user_id, "Gym", dec!(30)).await?;
        let march = Period::new(3, 2026)?;
        mark_paid(&db, rent.id, march).await?;
        mark_paid(&db, gym.id, march).await?;
        mark_paid(&db, rent.id, Period::new(4, 2026)?).await?;

        let statuses = get_payment_statuses_for_period(&db, &[rent.id], march).await?;

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].expense_id, rent.id);
        assert_eq!(statuses[0].month, 3);
        Ok(())
    }
}
