//! Database configuration module for `HouseholdBuddy`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.

use crate::entities::{
    Expense, Household, HouseholdMember, PaymentStatus, Salary, Saving, Settlement, salary,
    settlement,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema, sea_query::Index};

/// Default database location when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/household_buddy.sqlite?mode=rwc";

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    tracing::info!("Connecting to database at {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions, skipping tables that already exist.
///
/// Also adds the composite unique indexes that keep one salary per member and month and one
/// settlement per household and month.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(Household),
        schema.create_table_from_entity(HouseholdMember),
        schema.create_table_from_entity(Salary),
        schema.create_table_from_entity(Expense),
        schema.create_table_from_entity(PaymentStatus),
        schema.create_table_from_entity(Saving),
        schema.create_table_from_entity(Settlement),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    let indexes = [
        Index::create()
            .name("idx_salaries_user_period")
            .table(Salary)
            .col(salary::Column::UserId)
            .col(salary::Column::Month)
            .col(salary::Column::Year)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_settlements_household_period")
            .table(Settlement)
            .col(settlement::Column::HouseholdId)
            .col(settlement::Column::Month)
            .col(settlement::Column::Year)
            .unique()
            .if_not_exists()
            .to_owned(),
    ];

    for index in &indexes {
        db.execute(builder.build(index)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        expense::Model as ExpenseModel, household::Model as HouseholdModel,
        settlement::Model as SettlementModel,
    };
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QuerySelect, Set};

    fn salary_row(user_id: &str, amount: Decimal) -> salary::ActiveModel {
        salary::ActiveModel {
            user_id: Set(user_id.to_string()),
            month: Set(3),
            year: Set(2026),
            default_amount: Set(amount),
            current_amount: Set(amount),
            updated_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    fn settlement_row(household_id: i64, month: i32) -> settlement::ActiveModel {
        settlement::ActiveModel {
            household_id: Set(household_id),
            month: Set(month),
            year: Set(2026),
            amount: Set(Decimal::new(2500, 2)),
            paid_by_user_id: Set("222".to_string()),
            paid_to_user_id: Set("111".to_string()),
            settled_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<HouseholdModel> = Household::find().limit(1).all(&db).await?;
        let _: Vec<ExpenseModel> = Expense::find().limit(1).all(&db).await?;
        let _: Vec<SettlementModel> = Settlement::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_salary_for_month_is_rejected() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        salary_row("111", Decimal::from(1000)).insert(&db).await?;
        let duplicate = salary_row("111", Decimal::from(5000)).insert(&db).await;

        assert!(duplicate.is_err());
        assert_eq!(Salary::find().count(&db).await?, 1);

        // Another member in the same month is fine
        salary_row("222", Decimal::from(5000)).insert(&db).await?;
        assert_eq!(Salary::find().count(&db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_settlement_for_month_is_rejected() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        let household = crate::db::households::create_household(&db, "Home").await?;

        settlement_row(household.id, 3).insert(&db).await?;
        let duplicate = settlement_row(household.id, 3).insert(&db).await;

        assert!(duplicate.is_err());
        settlement_row(household.id, 4).insert(&db).await?;
        assert_eq!(Settlement::find().count(&db).await?, 2);
        Ok(())
    }
}
