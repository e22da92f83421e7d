//! Expense aggregation - personal, shared, total and still-unpaid amounts for a month.
//!
//! Every amount goes through [`resolve_monthly_amount`], so yearly and installment
//! expenses only count in the months they actually fall into. An expense counts as paid for
//! the month when a `"PAID"` payment status exists for it and the same period.

use crate::{
    core::{period::Period, schedule::resolve_monthly_amount},
    entities::{expense, household_member, payment_status},
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

/// One member's personal expenses for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberExpenses {
    /// Discord user ID of the member
    pub user_id: String,
    /// Sum of the member's personal expenses falling in the month
    #[serde(with = "rust_decimal::serde::float")]
    pub personal_expenses_total: Decimal,
    /// Personal expenses not yet marked paid for the month
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_expenses: Decimal,
}

/// Household expense totals for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseData {
    /// Per-member personal totals, in member order
    pub personal_expenses: Vec<MemberExpenses>,
    /// Sum of all shared expenses falling in the month
    #[serde(with = "rust_decimal::serde::float")]
    pub shared_expenses_total: Decimal,
    /// Personal totals plus the shared total
    #[serde(with = "rust_decimal::serde::float")]
    pub total_household_expenses: Decimal,
    /// Everything not yet marked paid for the month
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_household_expenses: Decimal,
}

/// IDs of the expenses marked paid for `period`
#[must_use]
pub fn paid_expense_ids(
    payment_statuses: &[payment_status::Model],
    period: Period,
) -> HashSet<i64> {
    payment_statuses
        .iter()
        .filter(|status| {
            status.is_paid() && status.month == period.month_column() && status.year == period.year()
        })
        .map(|status| status.expense_id)
        .collect()
}

/// Sums personal and shared expenses for `period`.
///
/// Personal expenses are attributed to the member in `user_id`; shared expenses count once
/// for the household no matter who created them. Deleted expenses are ignored.
#[must_use]
pub fn get_expense_data(
    members: &[household_member::Model],
    expenses: &[expense::Model],
    payment_statuses: &[payment_status::Model],
    period: Period,
) -> ExpenseData {
    let paid = paid_expense_ids(payment_statuses, period);
    let active = || expenses.iter().filter(|e| e.is_active());

    let personal_expenses: Vec<MemberExpenses> = members
        .iter()
        .map(|member| {
            let (total, paid_total) = active()
                .filter(|e| e.is_personal() && e.user_id == member.user_id)
                .fold((Decimal::ZERO, Decimal::ZERO), |(total, paid_total), e| {
                    let amount = resolve_monthly_amount(e, period);
                    let paid_amount = if paid.contains(&e.id) {
                        amount
                    } else {
                        Decimal::ZERO
                    };
                    (total + amount, paid_total + paid_amount)
                });

            MemberExpenses {
                user_id: member.user_id.clone(),
                personal_expenses_total: total,
                remaining_expenses: total - paid_total,
            }
        })
        .collect();

    let (shared_expenses_total, shared_paid_total) = active()
        .filter(|e| e.is_shared())
        .fold((Decimal::ZERO, Decimal::ZERO), |(total, paid_total), e| {
            let amount = resolve_monthly_amount(e, period);
            let paid_amount = if paid.contains(&e.id) {
                amount
            } else {
                Decimal::ZERO
            };
            (total + amount, paid_total + paid_amount)
        });

    let personal_total: Decimal = personal_expenses
        .iter()
        .map(|m| m.personal_expenses_total)
        .sum();
    let personal_remaining: Decimal = personal_expenses.iter().map(|m| m.remaining_expenses).sum();

    ExpenseData {
        personal_expenses,
        shared_expenses_total,
        total_household_expenses: personal_total + shared_expenses_total,
        remaining_household_expenses: personal_remaining
            + (shared_expenses_total - shared_paid_total),
    }
}
