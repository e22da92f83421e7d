/// Database configuration and connection management
pub mod database;

/// Household and member configuration loading from household.toml
pub mod household;
