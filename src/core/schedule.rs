//! Monthly amount resolution for expenses.
//!
//! An expense row carries several optional schedule columns whose meaning depends on its
//! category, frequency and payment strategy. [`Schedule`] is the checked form of those
//! columns: building it rejects combinations that make no sense, and [`Schedule::amount_for`]
//! answers how much of the expense falls into a given month.
//!
//! | Schedule | Amount in a month |
//! |----------|-------------------|
//! | recurring monthly | full amount, every month |
//! | recurring yearly, paid in full | full amount in the payment month only |
//! | recurring yearly, installments | `amount / installments_per_year` on installment months |
//! | recurring yearly, no strategy | `amount / 12`, every month |
//! | one-time | full amount in its month only |
//! | one-time, installments | `amount / count` on each of the `count` installment months |

use crate::{
    core::{
        money::{divide_money, round_money},
        period::Period,
    },
    entities::expense::{
        self, ExpenseCategory, Frequency, InstallmentFrequency, YearlyPaymentStrategy,
    },
    errors::{Error, Result},
};
use chrono::Datelike;
use rust_decimal::Decimal;

/// The payment schedule of an expense, with only the fields that schedule needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Paid every month
    Monthly,
    /// Paid once a year, in full, in `payment_month`
    YearlyFull {
        /// Month of payment (1-12)
        payment_month: u32,
    },
    /// Paid once a year in equal installments, counted from `anchor_month`
    YearlyInstallments {
        /// Spacing between installments
        frequency: InstallmentFrequency,
        /// Month the installment cycle starts from (the creation month)
        anchor_month: u32,
    },
    /// Legacy yearly expense without a strategy: spread evenly over twelve months
    YearlySpread,
    /// Paid once, in `period`
    OneTime {
        /// Month of payment
        period: Period,
    },
    /// Paid once, spread over `count` installments starting at `start`
    OneTimeInstallments {
        /// First installment month
        start: Period,
        /// Spacing between installments
        frequency: InstallmentFrequency,
        /// Total number of installments
        count: u32,
    },
}

impl Schedule {
    /// Reads the schedule columns of an expense row.
    ///
    /// Unknown installment frequencies fall back to monthly installments. Every other
    /// inconsistency (unknown category, a yearly payment month outside 1-12, a one-time
    /// expense without a month, a non-positive installment count) is an
    /// [`Error::InvalidSchedule`].
    pub fn from_expense(expense: &expense::Model) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidSchedule {
            expense_id: expense.id,
            reason: reason.to_string(),
        };

        match ExpenseCategory::from_column(&expense.category) {
            Some(ExpenseCategory::Recurring) => {
                match expense.frequency.as_deref().and_then(Frequency::from_column) {
                    Some(Frequency::Monthly) => Ok(Self::Monthly),
                    Some(Frequency::Yearly) => Self::yearly(expense, invalid),
                    None => Err(invalid("recurring expense without a valid frequency")),
                }
            }
            Some(ExpenseCategory::OneTime) => {
                let (Some(month), Some(year)) = (expense.month, expense.year) else {
                    return Err(invalid("one-time expense without month and year"));
                };
                let period = Period::from_columns(month, year)
                    .map_err(|_| invalid("one-time expense month outside 1-12"))?;

                match strategy_of(expense) {
                    Some(YearlyPaymentStrategy::Installments) => {
                        let count = expense
                            .installment_count
                            .and_then(|count| u32::try_from(count).ok())
                            .filter(|&count| count > 0)
                            .ok_or_else(|| invalid("installment count must be positive"))?;
                        Ok(Self::OneTimeInstallments {
                            start: period,
                            frequency: installment_frequency_of(expense),
                            count,
                        })
                    }
                    _ => Ok(Self::OneTime { period }),
                }
            }
            None => Err(invalid("unknown category")),
        }
    }

    fn yearly(expense: &expense::Model, invalid: impl Fn(&str) -> Error) -> Result<Self> {
        match expense.yearly_payment_strategy.as_deref() {
            None => Ok(Self::YearlySpread),
            Some(_) => match strategy_of(expense) {
                Some(YearlyPaymentStrategy::Full) => {
                    let payment_month = expense
                        .payment_month
                        .and_then(|month| u32::try_from(month).ok())
                        .filter(|month| (1..=12).contains(month))
                        .ok_or_else(|| invalid("yearly payment month outside 1-12"))?;
                    Ok(Self::YearlyFull { payment_month })
                }
                Some(YearlyPaymentStrategy::Installments) => Ok(Self::YearlyInstallments {
                    frequency: installment_frequency_of(expense),
                    anchor_month: expense.created_at.month(),
                }),
                None => Err(invalid("unknown yearly payment strategy")),
            },
        }
    }

    /// The amount of `total` attributable to `period`, rounded to cents.
    #[must_use]
    pub fn amount_for(self, total: Decimal, period: Period) -> Decimal {
        match self {
            Self::Monthly => round_money(total),
            Self::YearlyFull { payment_month } => {
                if period.month() == payment_month {
                    round_money(total)
                } else {
                    Decimal::ZERO
                }
            }
            Self::YearlyInstallments {
                frequency,
                anchor_month,
            } => {
                if is_installment_month(period.month(), anchor_month, frequency.step_months()) {
                    divide_money(total, Decimal::from(frequency.installments_per_year()))
                } else {
                    Decimal::ZERO
                }
            }
            Self::YearlySpread => divide_money(total, Decimal::from(12)),
            Self::OneTime { period: due } => {
                if period == due {
                    round_money(total)
                } else {
                    Decimal::ZERO
                }
            }
            Self::OneTimeInstallments {
                start,
                frequency,
                count,
            } => {
                let step = i64::from(frequency.step_months());
                let elapsed = period.months_since(start);
                let on_installment =
                    elapsed >= 0 && elapsed % step == 0 && elapsed / step < i64::from(count);
                if on_installment {
                    divide_money(total, Decimal::from(count))
                } else {
                    Decimal::ZERO
                }
            }
        }
    }
}

fn strategy_of(expense: &expense::Model) -> Option<YearlyPaymentStrategy> {
    expense
        .yearly_payment_strategy
        .as_deref()
        .and_then(YearlyPaymentStrategy::from_column)
}

fn installment_frequency_of(expense: &expense::Model) -> InstallmentFrequency {
    expense
        .installment_frequency
        .as_deref()
        .and_then(InstallmentFrequency::from_column)
        .unwrap_or(InstallmentFrequency::Monthly)
}

/// True if `month` is an installment month of a cycle starting at `anchor` with `step`
/// months between installments, wrapping around the year (anchor 11, step 6 ⇒ 11 and 5).
#[must_use]
pub fn is_installment_month(month: u32, anchor: u32, step: u32) -> bool {
    if step == 0 {
        return false;
    }
    let distance = (i64::from(month) - i64::from(anchor)).rem_euclid(12);
    distance % i64::from(step) == 0
}

/// Resolves how much of `expense` falls into `period`.
///
/// Deleted expenses contribute nothing. An expense whose schedule columns are inconsistent
/// also contributes nothing; the problem is logged rather than failing the whole dashboard.
#[must_use]
pub fn resolve_monthly_amount(expense: &expense::Model, period: Period) -> Decimal {
    if !expense.is_active() {
        return Decimal::ZERO;
    }

    match Schedule::from_expense(expense) {
        Ok(schedule) => schedule.amount_for(expense.amount, period),
        Err(e) => {
            tracing::warn!(expense_id = expense.id, "Skipping expense: {e}");
            Decimal::ZERO
        }
    }
}
