//! Income aggregation for the household dashboard.

use crate::{
    core::period::Period,
    entities::{household_member, salary},
};
use rust_decimal::Decimal;
use serde::Serialize;

/// One member's salary for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberIncome {
    /// Discord user ID of the member
    pub user_id: String,
    /// Member's first name
    pub first_name: String,
    /// Member's last name
    pub last_name: String,
    /// Baseline salary, zero if no record exists for the month
    #[serde(with = "rust_decimal::serde::float")]
    pub default_salary: Decimal,
    /// Actual salary for the month, zero if no record exists
    #[serde(with = "rust_decimal::serde::float")]
    pub current_salary: Decimal,
}

/// Looks up each member's salary for `period`, in member order.
///
/// Members without a salary record for the period get zero for both amounts.
#[must_use]
pub fn get_income_data(
    members: &[household_member::Model],
    salaries: &[salary::Model],
    period: Period,
) -> Vec<MemberIncome> {
    members
        .iter()
        .map(|member| {
            let record = salaries.iter().find(|s| {
                s.user_id == member.user_id
                    && s.month == period.month_column()
                    && s.year == period.year()
            });

            MemberIncome {
                user_id: member.user_id.clone(),
                first_name: member.first_name.clone(),
                last_name: member.last_name.clone(),
                default_salary: record.map_or(Decimal::ZERO, |s| s.default_amount),
                current_salary: record.map_or(Decimal::ZERO, |s| s.current_amount),
            }
        })
        .collect()
}
