//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Monthly dashboard and settlement commands
pub mod dashboard;

/// Expense management and payment tracking commands
pub mod expense;

/// General utility commands
pub mod general;

/// Salary and savings commands
pub mod income;

// Export commands
pub use dashboard::*;
pub use expense::*;
pub use general::*;
pub use income::*;
