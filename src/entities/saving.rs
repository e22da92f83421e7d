//! Saving entity - An actual saving contribution recorded by a member for a month.
//!
//! `is_shared` separates personal savings from contributions to the household pool.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Saving database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "savings")]
pub struct Model {
    /// Unique identifier for the saving row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household the saving was recorded in
    pub household_id: i64,
    /// Discord user ID of the contributing member
    pub user_id: String,
    /// Amount saved
    pub amount: Decimal,
    /// `true` for household-pool savings, `false` for personal savings
    pub is_shared: bool,
    /// Calendar month (1-12)
    pub month: i32,
    /// Four-digit year
    pub year: i32,
    /// Optional note
    pub description: Option<String>,
    /// When the saving was recorded
    pub created_at: DateTimeUtc,
}

/// `Saving` rows are looked up by user and period, not joined
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
