//! Core business logic - the household dashboard and settlement engine.
//!
//! Everything in this module is pure and synchronous: callers pass in already loaded
//! entity rows plus an explicit [`period::Period`], and get plain data back. No function
//! here touches the database or reads the clock.

/// Household dashboard composition over a loaded snapshot
pub mod dashboard;
/// Personal, shared and remaining expense totals
pub mod expenses;
/// Per-member salary lookup
pub mod income;
/// Rounding and formatting of money amounts
pub mod money;
/// Calendar month value type
pub mod period;
/// Savings and remaining budget per member
pub mod savings;
/// Expense schedules and the monthly amount resolver
pub mod schedule;
/// Pairwise settlement between household members
pub mod settlement;
