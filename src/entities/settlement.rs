//! Settlement entity - Records that a household settled a month.
//!
//! The presence of a row for (`household_id`, `month`, `year`) marks the month as settled; a
//! unique index on that triple keeps it to one row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Settlement database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settlements")]
pub struct Model {
    /// Unique identifier for the settlement
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household that settled
    pub household_id: i64,
    /// Settled calendar month (1-12)
    pub month: i32,
    /// Settled year
    pub year: i32,
    /// Amount transferred
    pub amount: Decimal,
    /// Member who paid the settlement
    pub paid_by_user_id: String,
    /// Member who received the settlement
    pub paid_to_user_id: String,
    /// When the settlement was recorded
    pub settled_at: DateTimeUtc,
}

/// `Settlement` rows are looked up by household and period, not joined
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
