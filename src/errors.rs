//! Unified error type for `HouseholdBuddy`.
//!
//! Every fallible operation in the crate returns [`Result`], so `?` works across the
//! database, configuration, and Discord layers without conversion boilerplate.

use rust_decimal::Decimal;
use thiserror::Error;

/// All errors that can occur in the application
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any `SeaORM` database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A money amount was rejected (negative, zero where not allowed, or not finite)
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount as entered
        amount: String,
    },

    /// User-supplied data failed validation (empty name, payer on a personal expense)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// A month/year pair outside the calendar
    #[error("Invalid period: month {month}, year {year}")]
    InvalidPeriod {
        /// Month as given (valid range 1-12)
        month: u32,
        /// Year as given
        year: i32,
    },

    /// An expense row whose fields do not describe a valid payment schedule
    #[error("Invalid schedule for expense {expense_id}: {reason}")]
    InvalidSchedule {
        /// Primary key of the offending expense
        expense_id: i64,
        /// Which field combination was rejected
        reason: String,
    },

    /// No active expense with the given name exists in the household
    #[error("Expense not found: {name}")]
    ExpenseNotFound {
        /// Name (or id) that was looked up
        name: String,
    },

    /// The user is not a member of any household
    #[error("Member not found: {user_id}")]
    MemberNotFound {
        /// Discord user id that was looked up
        user_id: String,
    },

    /// The household does not exist
    #[error("Household not found: {household_id}")]
    HouseholdNotFound {
        /// Household primary key or name
        household_id: String,
    },

    /// Pairwise settlement was requested for a household with more than two members
    #[error("Settlement needs a two-member household, found {count} members")]
    UnsupportedHouseholdSize {
        /// Number of members in the household
        count: usize,
    },

    /// A settlement was already recorded for the month
    #[error("Month {month}/{year} is already settled")]
    AlreadySettled {
        /// Settled month
        month: u32,
        /// Settled year
        year: i32,
    },

    /// The month balances out, so there is nothing to record
    #[error("Nothing to settle for {month}/{year}")]
    NothingToSettle {
        /// Balanced month
        month: u32,
        /// Balanced year
        year: i32,
    },

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Formatting failure while building a message
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// A number could not be represented as a decimal money amount
    #[error("Decimal conversion error: {0}")]
    Decimal(#[from] rust_decimal::Error),

    /// Serenity/Poise framework failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

impl Error {
    /// Shorthand for an [`Error::InvalidAmount`] built from a decimal
    #[must_use]
    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount {
            amount: amount.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
