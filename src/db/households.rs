//! Household creation, lookup, and seeding from configuration.

use crate::{
    config::household::HouseholdConfig,
    db::members,
    entities::{Household, household, household_member},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Creates a new household, rejecting empty names.
#[instrument(skip(db))]
pub async fn create_household<C>(db: &C, name: &str) -> Result<household::Model>
where
    C: ConnectionTrait,
{
    if name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Household name cannot be empty".to_string(),
        });
    }

    let household = household::ActiveModel {
        name: Set(name.trim().to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    Ok(household.insert(db).await?)
}

/// Finds a household by its unique name.
pub async fn get_household_by_name<C>(db: &C, name: &str) -> Result<Option<household::Model>>
where
    C: ConnectionTrait,
{
    Household::find()
        .filter(household::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a household by primary key.
pub async fn get_household_by_id<C>(db: &C, household_id: i64) -> Result<Option<household::Model>>
where
    C: ConnectionTrait,
{
    Household::find_by_id(household_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates the configured household and members if they do not exist yet.
///
/// The first configured member is the owner. Members that already exist are left as they
/// are; a configured user who belongs to a different household is an error, and so is a
/// configuration that would push the household past two members.
#[instrument(skip(db, config), fields(household = %config.household.name))]
pub async fn seed_household(
    db: &DatabaseConnection,
    config: &HouseholdConfig,
) -> Result<household::Model> {
    config.validate()?;
    let txn = db.begin().await?;

    let household = match get_household_by_name(&txn, &config.household.name).await? {
        Some(existing) => existing,
        None => {
            info!("Creating household '{}'", config.household.name);
            create_household(&txn, &config.household.name).await?
        }
    };

    let existing = members::get_household_members(&txn, household.id).await?;
    let missing = config
        .members
        .iter()
        .filter(|m| !existing.iter().any(|e| e.user_id == m.user_id))
        .count();
    if existing.len() + missing > household_member::MAX_MEMBERS {
        return Err(Error::Config {
            message: format!(
                "Household '{}' has {} members and the configuration adds {missing}; \
                 at most {} are allowed",
                household.name,
                existing.len(),
                household_member::MAX_MEMBERS
            ),
        });
    }

    for (i, member) in config.members.iter().enumerate() {
        match members::get_member_by_user_id(&txn, &member.user_id).await? {
            Some(existing) if existing.household_id == household.id => {}
            Some(_) => {
                return Err(Error::Config {
                    message: format!(
                        "User {} already belongs to another household",
                        member.user_id
                    ),
                });
            }
            None => {
                let role = if i == 0 {
                    household_member::ROLE_OWNER
                } else {
                    household_member::ROLE_MEMBER
                };
                info!("Adding {} to household '{}'", member.first_name, household.name);
                members::add_member(
                    &txn,
                    household.id,
                    &member.user_id,
                    &member.first_name,
                    &member.last_name,
                    role,
                )
                .await?;
            }
        }
    }

    txn.commit().await?;
    Ok(household)
}
