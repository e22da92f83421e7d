//! Data access layer - async `SeaORM` queries for every household table.
//!
//! These functions fetch and store rows; all budget arithmetic lives in `core`.
//! [`snapshot::load_snapshot`] gathers everything `core::dashboard` needs for one month.

/// Expense creation, lookup and soft deletion
pub mod expenses;
/// Household creation and seeding
pub mod households;
/// Household membership lookups
pub mod members;
/// Per-month paid markers for expenses
pub mod payments;
/// Salary upserts and lookups
pub mod salaries;
/// Saving contributions
pub mod savings;
/// Settlement records
pub mod settlements;
/// Loading a full household snapshot for one period
pub mod snapshot;
