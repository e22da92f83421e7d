//! Payment status entity - Per-month paid marker for a single expense.
//!
//! A `"PAID"` row for (`expense_id`, `month`, `year`) removes that expense from the
//! month's remaining totals.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Status value marking the expense as paid for the month
pub const STATUS_PAID: &str = "PAID";
/// Status value for an explicitly unpaid expense
pub const STATUS_PENDING: &str = "PENDING";

/// Payment status database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment_statuses")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Expense the status applies to
    pub expense_id: i64,
    /// Calendar month (1-12)
    pub month: i32,
    /// Four-digit year
    pub year: i32,
    /// `"PAID"` or `"PENDING"`
    pub status: String,
    /// When the status was last changed to paid
    pub paid_at: Option<DateTimeUtc>,
}

impl Model {
    /// Returns true if this row marks its expense as paid
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.status == STATUS_PAID
    }
}

/// Defines relationships between `PaymentStatus` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each status belongs to one expense
    #[sea_orm(
        belongs_to = "super::expense::Entity",
        from = "Column::ExpenseId",
        to = "super::expense::Column::Id"
    )]
    Expense,
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expense.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
