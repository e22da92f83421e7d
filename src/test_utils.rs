//! Shared test utilities for `HouseholdBuddy`.
//!
//! Database helpers set up an in-memory `SQLite` database, optionally seeded with a two
//! member household. The plain builders create entity models with sensible defaults for the
//! pure calculators in `core`, which never touch the database.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use crate::{
    config::household::parse_config,
    db::{
        expenses::{ExpensePlan, NewExpense, create_expense},
        households::seed_household,
        members::require_member,
    },
    entities::{
        expense::{self, ExpenseType},
        household, household_member, payment_status, salary, saving, settlement,
    },
    errors::Result,
};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Household used by [`setup_with_household`]
const TEST_HOUSEHOLD: &str = r#"
    [household]
    name = "Test Home"

    [[members]]
    user_id = "111"
    first_name = "Alice"
    last_name = "Martin"

    [[members]]
    user_id = "222"
    first_name = "Bob"
    last_name = "Durand"
"#;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all database tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test database with a seeded household of two members.
///
/// # Returns
/// The connection, the household, and the members Alice (`"111"`, owner) and Bob (`"222"`).
pub async fn setup_with_household() -> Result<(
    DatabaseConnection,
    household::Model,
    household_member::Model,
    household_member::Model,
)> {
    let db = setup_test_db().await?;
    let household = seed_household(&db, &parse_config(TEST_HOUSEHOLD)?).await?;
    let alice = require_member(&db, "111").await?;
    let bob = require_member(&db, "222").await?;
    Ok((db, household, alice, bob))
}

/// Stores a personal monthly expense owned by `user_id`.
pub async fn insert_monthly_expense(
    db: &DatabaseConnection,
    household_id: i64,
    user_id: &str,
    name: &str,
    amount: Decimal,
) -> Result<expense::Model> {
    create_expense(
        db,
        NewExpense {
            household_id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            amount,
            expense_type: ExpenseType::Personal,
            paid_by_user_id: None,
            plan: ExpensePlan::Monthly,
            created_at: created_at(2025, 1),
        },
    )
    .await
}

/// Stores a shared monthly expense, optionally fronted by `paid_by`.
pub async fn insert_shared_expense(
    db: &DatabaseConnection,
    household_id: i64,
    user_id: &str,
    name: &str,
    amount: Decimal,
    paid_by: Option<&str>,
) -> Result<expense::Model> {
    create_expense(
        db,
        NewExpense {
            household_id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            amount,
            expense_type: ExpenseType::Shared,
            paid_by_user_id: paid_by.map(str::to_string),
            plan: ExpensePlan::Monthly,
            created_at: created_at(2025, 1),
        },
    )
    .await
}

/// Mid-month timestamp, handy as an expense creation date.
pub fn created_at(year: i32, month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap()
}

/// Member of household 1.
pub fn member(user_id: &str, first_name: &str) -> household_member::Model {
    household_member::Model {
        id: 0,
        user_id: user_id.to_string(),
        household_id: 1,
        role: household_member::ROLE_MEMBER.to_string(),
        first_name: first_name.to_string(),
        last_name: String::new(),
        joined_at: created_at(2025, 1),
    }
}

/// Personal monthly expense of household 1, created in January 2025.
pub fn monthly_expense(id: i64, user_id: &str, amount: Decimal) -> expense::Model {
    expense::Model {
        id,
        household_id: 1,
        user_id: user_id.to_string(),
        name: format!("Expense {id}"),
        amount,
        expense_type: "PERSONAL".to_string(),
        category: "RECURRING".to_string(),
        frequency: Some("MONTHLY".to_string()),
        paid_by_user_id: None,
        yearly_payment_strategy: None,
        payment_month: None,
        installment_frequency: None,
        installment_count: None,
        month: None,
        year: None,
        created_at: created_at(2025, 1),
        deleted_at: None,
    }
}

/// Yearly expense paid in full in `payment_month`.
pub fn yearly_full_expense(
    id: i64,
    user_id: &str,
    amount: Decimal,
    payment_month: i32,
) -> expense::Model {
    expense::Model {
        frequency: Some("YEARLY".to_string()),
        yearly_payment_strategy: Some("FULL".to_string()),
        payment_month: Some(payment_month),
        ..monthly_expense(id, user_id, amount)
    }
}

/// Yearly expense paid in installments of `frequency`, anchored on its creation month.
pub fn yearly_installment_expense(
    id: i64,
    user_id: &str,
    amount: Decimal,
    frequency: &str,
    created_year: i32,
    created_month: u32,
) -> expense::Model {
    expense::Model {
        frequency: Some("YEARLY".to_string()),
        yearly_payment_strategy: Some("INSTALLMENTS".to_string()),
        installment_frequency: Some(frequency.to_string()),
        created_at: created_at(created_year, created_month),
        ..monthly_expense(id, user_id, amount)
    }
}

/// One-time expense due in `month`/`year`.
pub fn one_time_expense(
    id: i64,
    user_id: &str,
    amount: Decimal,
    month: i32,
    year: i32,
) -> expense::Model {
    expense::Model {
        category: "ONE_TIME".to_string(),
        frequency: None,
        month: Some(month),
        year: Some(year),
        ..monthly_expense(id, user_id, amount)
    }
}

/// One-time expense spread over `count` installments starting in `month`/`year`.
pub fn one_time_installment_expense(
    id: i64,
    user_id: &str,
    amount: Decimal,
    month: i32,
    year: i32,
    count: i32,
    frequency: &str,
) -> expense::Model {
    expense::Model {
        yearly_payment_strategy: Some("INSTALLMENTS".to_string()),
        installment_frequency: Some(frequency.to_string()),
        installment_count: Some(count),
        ..one_time_expense(id, user_id, amount, month, year)
    }
}

/// Turns an expense into a shared one, optionally fronted by `paid_by`.
pub fn shared(expense: expense::Model, paid_by: Option<&str>) -> expense::Model {
    expense::Model {
        expense_type: "SHARED".to_string(),
        paid_by_user_id: paid_by.map(str::to_string),
        ..expense
    }
}

/// Salary record for one month.
pub fn salary(
    user_id: &str,
    month: i32,
    year: i32,
    default_amount: Decimal,
    current_amount: Decimal,
) -> salary::Model {
    salary::Model {
        id: 0,
        user_id: user_id.to_string(),
        month,
        year,
        default_amount,
        current_amount,
        updated_at: created_at(2025, 1),
    }
}

/// Saving contribution in household 1.
pub fn saving(
    user_id: &str,
    amount: Decimal,
    is_shared: bool,
    month: i32,
    year: i32,
) -> saving::Model {
    saving::Model {
        id: 0,
        household_id: 1,
        user_id: user_id.to_string(),
        amount,
        is_shared,
        month,
        year,
        description: None,
        created_at: created_at(2025, 1),
    }
}

/// Paid marker of an expense for one month.
pub fn paid(expense_id: i64, month: i32, year: i32) -> payment_status::Model {
    payment_status::Model {
        id: 0,
        expense_id,
        month,
        year,
        status: payment_status::STATUS_PAID.to_string(),
        paid_at: Some(created_at(2025, 1)),
    }
}

/// Settlement record for a household and month.
pub fn settlement_record(household_id: i64, month: i32, year: i32) -> settlement::Model {
    settlement::Model {
        id: 0,
        household_id,
        month,
        year,
        amount: Decimal::ZERO,
        paid_by_user_id: "bob".to_string(),
        paid_to_user_id: "alice".to_string(),
        settled_at: created_at(2025, 1),
    }
}
