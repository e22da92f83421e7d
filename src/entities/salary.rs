//! Salary entity - One member's income for one month.
//!
//! At most one row exists per (`user_id`, `month`, `year`); `db::salaries::set_salary`
//! upserts on that triple, and a unique index on it rejects duplicate inserts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Salary database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salaries")]
pub struct Model {
    /// Unique identifier for the salary row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID the salary belongs to
    pub user_id: String,
    /// Calendar month (1-12)
    pub month: i32,
    /// Four-digit year
    pub year: i32,
    /// Baseline salary
    pub default_amount: Decimal,
    /// Actual salary for the month, including bonuses or deductions
    pub current_amount: Decimal,
    /// Last modification time
    pub updated_at: DateTimeUtc,
}

/// `Salary` rows are looked up by user and period, not joined
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
