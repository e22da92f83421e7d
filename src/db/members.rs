//! Household membership lookups.

use crate::{
    entities::{HouseholdMember, household_member},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::instrument;

/// Adds a user to a household.
///
/// A user can belong to only one household, and a household holds at most
/// [`household_member::MAX_MEMBERS`] members; breaking either rule is a configuration error.
#[instrument(skip(db))]
pub async fn add_member<C>(
    db: &C,
    household_id: i64,
    user_id: &str,
    first_name: &str,
    last_name: &str,
    role: &str,
) -> Result<household_member::Model>
where
    C: ConnectionTrait,
{
    if first_name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Member first name cannot be empty".to_string(),
        });
    }
    if get_member_by_user_id(db, user_id).await?.is_some() {
        return Err(Error::Config {
            message: format!("User {user_id} already belongs to a household"),
        });
    }
    let count = HouseholdMember::find()
        .filter(household_member::Column::HouseholdId.eq(household_id))
        .count(db)
        .await?;
    if count >= household_member::MAX_MEMBERS as u64 {
        return Err(Error::Config {
            message: format!(
                "Household {household_id} already has {count} members, cannot add {user_id}"
            ),
        });
    }

    let member = household_member::ActiveModel {
        user_id: Set(user_id.to_string()),
        household_id: Set(household_id),
        role: Set(role.to_string()),
        first_name: Set(first_name.trim().to_string()),
        last_name: Set(last_name.trim().to_string()),
        joined_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    Ok(member.insert(db).await?)
}

/// Finds the membership of a user, if they belong to a household.
pub async fn get_member_by_user_id<C>(
    db: &C,
    user_id: &str,
) -> Result<Option<household_member::Model>>
where
    C: ConnectionTrait,
{
    HouseholdMember::find()
        .filter(household_member::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Like [`get_member_by_user_id`], but a missing membership is an error.
pub async fn require_member<C>(db: &C, user_id: &str) -> Result<household_member::Model>
where
    C: ConnectionTrait,
{
    get_member_by_user_id(db, user_id)
        .await?
        .ok_or_else(|| Error::MemberNotFound {
            user_id: user_id.to_string(),
        })
}

/// All members of a household in join order.
pub async fn get_household_members<C>(
    db: &C,
    household_id: i64,
) -> Result<Vec<household_member::Model>>
where
    C: ConnectionTrait,
{
    HouseholdMember::find()
        .filter(household_member::Column::HouseholdId.eq(household_id))
        .order_by_asc(household_member::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
