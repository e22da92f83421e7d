//! Household configuration loading from household.toml
//!
//! The household and its members are declared in a TOML file and seeded into the database
//! on startup. Seeding is idempotent: an existing household keeps its rows and only missing
//! members are added.

use crate::{
    entities::household_member::MAX_MEMBERS,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Default location of the household configuration file
pub const DEFAULT_CONFIG_PATH: &str = "household.toml";

/// Configuration structure representing the entire household.toml file
#[derive(Debug, Deserialize, Clone)]
pub struct HouseholdConfig {
    /// The household itself
    pub household: HouseholdSection,
    /// Members to seed, in join order; the first one becomes the owner
    pub members: Vec<MemberConfig>,
}

/// The `[household]` table
#[derive(Debug, Deserialize, Clone)]
pub struct HouseholdSection {
    /// Household display name
    pub name: String,
}

/// Configuration for a single member
#[derive(Debug, Deserialize, Clone)]
pub struct MemberConfig {
    /// Discord user ID
    pub user_id: String,
    /// First name used in settlement messages
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
}

impl HouseholdConfig {
    /// Checks the constraints the rest of the application relies on.
    pub fn validate(&self) -> Result<()> {
        if self.household.name.trim().is_empty() {
            return Err(Error::Config {
                message: "Household name cannot be empty".to_string(),
            });
        }
        if self.members.len() > MAX_MEMBERS {
            return Err(Error::Config {
                message: format!(
                    "A household has at most two members, {} configured",
                    self.members.len()
                ),
            });
        }
        for (i, member) in self.members.iter().enumerate() {
            if member.user_id.trim().is_empty() || member.first_name.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Member #{} needs a user_id and a first_name", i + 1),
                });
            }
            if self.members[..i].iter().any(|m| m.user_id == member.user_id) {
                return Err(Error::Config {
                    message: format!("Member {} is listed twice", member.user_id),
                });
            }
        }
        Ok(())
    }
}

/// Loads and validates the household configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or required fields are missing
/// - The configuration violates a household constraint
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<HouseholdConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading household configuration from {:?}", path_ref);

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses and validates household configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<HouseholdConfig> {
    let config: HouseholdConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse household.toml: {e}"),
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads the household configuration from `HOUSEHOLD_CONFIG` or `./household.toml`
pub fn load_default_config() -> Result<HouseholdConfig> {
    let path =
        std::env::var("HOUSEHOLD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}
