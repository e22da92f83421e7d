//! Expense creation, lookup and soft deletion.
//!
//! New expenses are described with [`NewExpense`] and an [`ExpensePlan`], which only
//! allows valid combinations of schedule fields. The plan is flattened into the expense
//! row's optional columns on insert.

use crate::{
    core::{money::round_money, period::Period, schedule::Schedule},
    db::members,
    entities::{
        Expense,
        expense::{
            self, ExpenseCategory, ExpenseType, Frequency, InstallmentFrequency,
            YearlyPaymentStrategy,
        },
    },
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{IntoActiveModel, NotSet, QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// How a new expense is paid over time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpensePlan {
    /// Every month
    Monthly,
    /// Once a year in `payment_month`
    YearlyFull {
        /// Month of payment (1-12)
        payment_month: u32,
    },
    /// Once a year in installments, starting from the creation month
    YearlyInstallments {
        /// Spacing between installments
        frequency: InstallmentFrequency,
    },
    /// Once, in `period`
    OneTime {
        /// Month of payment
        period: Period,
    },
    /// Once, spread over `count` installments starting at `start`
    OneTimeInstallments {
        /// First installment month
        start: Period,
        /// Spacing between installments
        frequency: InstallmentFrequency,
        /// Number of installments
        count: u32,
    },
}

/// Everything needed to create an expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Household the expense belongs to
    pub household_id: i64,
    /// Owner (and creator) of the expense
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Nominal full amount
    pub amount: Decimal,
    /// Personal or shared
    pub expense_type: ExpenseType,
    /// For shared expenses, the member who fronted the whole amount
    pub paid_by_user_id: Option<String>,
    /// Payment schedule
    pub plan: ExpensePlan,
    /// Creation time; anchors yearly installments
    pub created_at: DateTimeUtc,
}

fn to_column(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl NewExpense {
    fn into_model(self) -> expense::Model {
        let (category, frequency, strategy, payment_month, installment_frequency, count, due) =
            match self.plan {
                ExpensePlan::Monthly => (
                    ExpenseCategory::Recurring,
                    Some(Frequency::Monthly),
                    None,
                    None,
                    None,
                    None,
                    None,
                ),
                ExpensePlan::YearlyFull { payment_month } => (
                    ExpenseCategory::Recurring,
                    Some(Frequency::Yearly),
                    Some(YearlyPaymentStrategy::Full),
                    Some(to_column(payment_month)),
                    None,
                    None,
                    None,
                ),
                ExpensePlan::YearlyInstallments { frequency } => (
                    ExpenseCategory::Recurring,
                    Some(Frequency::Yearly),
                    Some(YearlyPaymentStrategy::Installments),
                    None,
                    Some(frequency),
                    None,
                    None,
                ),
                ExpensePlan::OneTime { period } => (
                    ExpenseCategory::OneTime,
                    None,
                    None,
                    None,
                    None,
                    None,
                    Some(period),
                ),
                ExpensePlan::OneTimeInstallments {
                    start,
                    frequency,
                    count,
                } => (
                    ExpenseCategory::OneTime,
                    None,
                    Some(YearlyPaymentStrategy::Installments),
                    None,
                    Some(frequency),
                    Some(to_column(count)),
                    Some(start),
                ),
            };

        expense::Model {
            id: 0,
            household_id: self.household_id,
            user_id: self.user_id,
            name: self.name.trim().to_string(),
            amount: round_money(self.amount),
            expense_type: self.expense_type.as_str().to_string(),
            category: category.as_str().to_string(),
            frequency: frequency.map(|f| f.as_str().to_string()),
            paid_by_user_id: self.paid_by_user_id,
            yearly_payment_strategy: strategy.map(|s| s.as_str().to_string()),
            payment_month,
            installment_frequency: installment_frequency.map(|f| f.as_str().to_string()),
            installment_count: count,
            month: due.map(Period::month_column),
            year: due.map(Period::year),
            created_at: self.created_at,
            deleted_at: None,
        }
    }
}

/// Creates an expense after validating it.
///
/// Rejects empty names, non-positive amounts, a payer on a personal expense, a payer who is
/// not a member of the household, and schedules the resolver would not accept.
#[instrument(skip(db, new_expense), fields(name = %new_expense.name))]
pub async fn create_expense(db: &DatabaseConnection, new_expense: NewExpense) -> Result<expense::Model> {
    if new_expense.name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Expense name cannot be empty".to_string(),
        });
    }
    if new_expense.amount <= Decimal::ZERO {
        return Err(Error::invalid_amount(new_expense.amount));
    }

    if let Some(paid_by) = &new_expense.paid_by_user_id {
        if new_expense.expense_type == ExpenseType::Personal {
            return Err(Error::InvalidInput {
                message: "Only shared expenses can be fronted by a member".to_string(),
            });
        }
        let payer = members::get_member_by_user_id(db, paid_by).await?;
        if payer.is_none_or(|m| m.household_id != new_expense.household_id) {
            return Err(Error::MemberNotFound {
                user_id: paid_by.clone(),
            });
        }
    }

    // Run the row through the same parser the calculators use before storing it
    let candidate = new_expense.into_model();
    Schedule::from_expense(&candidate)?;

    let mut active = candidate.into_active_model().reset_all();
    active.id = NotSet;
    let saved = active.insert(db).await?;
    info!("Created expense {} ({})", saved.id, saved.name);
    Ok(saved)
}

/// All non-deleted expenses of a household, oldest first.
pub async fn get_active_expenses<C>(db: &C, household_id: i64) -> Result<Vec<expense::Model>>
where
    C: ConnectionTrait,
{
    Expense::find()
        .filter(expense::Column::HouseholdId.eq(household_id))
        .filter(expense::Column::DeletedAt.is_null())
        .order_by_asc(expense::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a non-deleted expense of a household by name.
pub async fn get_expense_by_name(
    db: &DatabaseConnection,
    household_id: i64,
    name: &str,
) -> Result<Option<expense::Model>> {
    Expense::find()
        .filter(expense::Column::HouseholdId.eq(household_id))
        .filter(expense::Column::Name.eq(name))
        .filter(expense::Column::DeletedAt.is_null())
        .order_by_asc(expense::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Soft deletes an expense so it no longer counts in any month.
#[instrument(skip(db))]
pub async fn soft_delete_expense(db: &DatabaseConnection, expense_id: i64) -> Result<expense::Model> {
    let existing = Expense::find_by_id(expense_id)
        .one(db)
        .await?
        .filter(expense::Model::is_active)
        .ok_or_else(|| Error::ExpenseNotFound {
            name: expense_id.to_string(),
        })?;

    let mut active: expense::ActiveModel = existing.into();
    active.deleted_at = Set(Some(chrono::Utc::now()));
    Ok(active.update(db).await?)
}
