//! Calendar month arithmetic.
//!
//! Every calculation in the dashboard engine is scoped to a [`Period`]: one calendar month of
//! one year. The engine never reads the clock; callers build the period from explicit input
//! or from a date they already hold.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// A calendar month of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Creates a period, rejecting months outside 1-12.
    pub const fn new(month: u32, year: i32) -> Result<Self> {
        if month < 1 || month > 12 {
            return Err(Error::InvalidPeriod { month, year });
        }
        Ok(Self { year, month })
    }

    /// Builds a period from the stored `i32` month/year columns.
    pub fn from_columns(month: i32, year: i32) -> Result<Self> {
        let month = u32::try_from(month).map_err(|_| Error::InvalidPeriod { month: 0, year })?;
        Self::new(month, year)
    }

    /// The period containing `date`
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar month (1-12)
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Year
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month as stored in integer columns
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // month is always 1-12
    pub const fn month_column(self) -> i32 {
        self.month as i32
    }

    /// Months elapsed since the start of year 0, used for ordering and differences
    const fn ordinal(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    /// Signed number of months from `earlier` to `self` (negative if `self` comes first)
    #[must_use]
    pub const fn months_since(self, earlier: Self) -> i64 {
        self.ordinal() - earlier.ordinal()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
