//! Household member entity - Links a Discord user to exactly one household.
//!
//! The `user_id` column is unique, so a user can belong to at most one household at a time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role value for the member who created the household
pub const ROLE_OWNER: &str = "OWNER";
/// Role value for every other member
pub const ROLE_MEMBER: &str = "MEMBER";
/// Most members a household may have
pub const MAX_MEMBERS: usize = 2;

/// Household member database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "household_members")]
pub struct Model {
    /// Unique identifier for the membership row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the member
    #[sea_orm(unique)]
    pub user_id: String,
    /// Household this member belongs to
    pub household_id: i64,
    /// `"OWNER"` or `"MEMBER"`
    pub role: String,
    /// First name, used in settlement messages
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// When the member joined the household
    pub joined_at: DateTimeUtc,
}

/// Defines relationships between `HouseholdMember` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each member belongs to one household
    #[sea_orm(
        belongs_to = "super::household::Entity",
        from = "Column::HouseholdId",
        to = "super::household::Column::Id"
    )]
    Household,
}

impl Related<super::household::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Household.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
