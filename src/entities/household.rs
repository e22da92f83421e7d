//! Household entity - The shared-budget group that members, expenses and settlements belong to.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Household database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "households")]
pub struct Model {
    /// Unique identifier for the household
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, unique across the database
    #[sea_orm(unique)]
    pub name: String,
    /// When the household was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Household and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One household has many members
    #[sea_orm(has_many = "super::household_member::Entity")]
    Members,
    /// One household has many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
}

impl Related<super::household_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
