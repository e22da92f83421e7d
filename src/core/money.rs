//! Money helpers.
//!
//! Amounts are `rust_decimal::Decimal` throughout the engine and are rounded to cents
//! (half away from zero) at every calculation boundary.

use crate::errors::{Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places, half away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Divides and rounds to cents. Division by zero yields zero.
#[must_use]
pub fn divide_money(amount: Decimal, divisor: Decimal) -> Decimal {
    if divisor.is_zero() {
        return Decimal::ZERO;
    }
    round_money(amount / divisor)
}

/// Converts a user-entered amount to cents, rejecting non-finite and negative input.
pub fn amount_from_input(amount: f64) -> Result<Decimal> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount {
            amount: amount.to_string(),
        });
    }
    Ok(round_money(Decimal::try_from(amount)?))
}

/// Formats an amount as euros with two decimals, e.g. `€60.00`.
#[must_use]
pub fn format_euros(amount: Decimal) -> String {
    format!("€{:.2}", round_money(amount))
}
