//! Savings and residual budget per member.
//!
//! Each member's remaining budget is what is left of their salary after their personal
//! expenses, an equal share of the shared expenses and the savings they put aside.
//! The shared share is the nominal fair share: who actually fronted a shared bill is the
//! settlement calculator's concern, not this one.

use crate::{
    core::{
        expenses::{ExpenseData, get_expense_data},
        income::{MemberIncome, get_income_data},
        money::{divide_money, round_money},
        period::Period,
    },
    entities::{expense, household_member, salary, saving},
};
use rust_decimal::Decimal;
use serde::Serialize;

/// One member's savings and what is left of their budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSavings {
    /// Discord user ID of the member
    pub user_id: String,
    /// Savings the member put aside for themselves
    #[serde(with = "rust_decimal::serde::float")]
    pub personal_savings: Decimal,
    /// Savings the member contributed to the household pool
    #[serde(with = "rust_decimal::serde::float")]
    pub shared_savings: Decimal,
    /// Salary minus personal expenses, shared share and savings
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_budget: Decimal,
}

/// Household savings for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    /// Per-member breakdown, in member order
    pub members: Vec<MemberSavings>,
    /// Sum of personal savings
    #[serde(with = "rust_decimal::serde::float")]
    pub total_personal_savings: Decimal,
    /// Sum of shared (household pool) savings
    #[serde(with = "rust_decimal::serde::float")]
    pub total_shared_savings: Decimal,
    /// Personal plus shared savings
    #[serde(with = "rust_decimal::serde::float")]
    pub total_savings: Decimal,
    /// Sum of remaining budgets
    #[serde(with = "rust_decimal::serde::float")]
    pub total_remaining_budget: Decimal,
}

/// Computes savings and remaining budgets from raw household data.
#[must_use]
pub fn calculate_savings(
    members: &[household_member::Model],
    salaries: &[salary::Model],
    expenses: &[expense::Model],
    savings: &[saving::Model],
    period: Period,
) -> SavingsSummary {
    let incomes = get_income_data(members, salaries, period);
    let expense_data = get_expense_data(members, expenses, &[], period);
    summarize_savings(&incomes, &expense_data, savings, period)
}

/// Computes savings and remaining budgets from already aggregated income and expenses.
///
/// Savings recorded for other periods are ignored.
#[must_use]
pub fn summarize_savings(
    incomes: &[MemberIncome],
    expense_data: &ExpenseData,
    savings: &[saving::Model],
    period: Period,
) -> SavingsSummary {
    let shared_share = divide_money(
        expense_data.shared_expenses_total,
        Decimal::from(incomes.len()),
    );

    let members: Vec<MemberSavings> = incomes
        .iter()
        .map(|income| {
            let (personal_savings, shared_savings) = savings
                .iter()
                .filter(|s| {
                    s.user_id == income.user_id
                        && s.month == period.month_column()
                        && s.year == period.year()
                })
                .fold((Decimal::ZERO, Decimal::ZERO), |(personal, shared), s| {
                    if s.is_shared {
                        (personal, shared + s.amount)
                    } else {
                        (personal + s.amount, shared)
                    }
                });

            let personal_expenses = expense_data
                .personal_expenses
                .iter()
                .find(|e| e.user_id == income.user_id)
                .map_or(Decimal::ZERO, |e| e.personal_expenses_total);

            MemberSavings {
                user_id: income.user_id.clone(),
                personal_savings: round_money(personal_savings),
                shared_savings: round_money(shared_savings),
                remaining_budget: round_money(
                    income.current_salary
                        - personal_expenses
                        - shared_share
                        - personal_savings
                        - shared_savings,
                ),
            }
        })
        .collect();

    let total_personal_savings: Decimal = members.iter().map(|m| m.personal_savings).sum();
    let total_shared_savings: Decimal = members.iter().map(|m| m.shared_savings).sum();
    let total_remaining_budget: Decimal = members.iter().map(|m| m.remaining_budget).sum();

    SavingsSummary {
        members,
        total_personal_savings,
        total_shared_savings,
        total_savings: total_personal_savings + total_shared_savings,
        total_remaining_budget,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    fn march() -> Period {
        Period::new(3, 2026).unwrap()
    }

    #[test]
    fn test_remaining_budget_subtracts_everything() {
        let members = vec![member("alice", "Alice"), member("bob", "Bob")];
        let salaries = vec![
            salary("alice", 3, 2026, dec!(3000), dec!(3000)),
            salary("bob", 3, 2026, dec!(2500), dec!(2600)),
        ];
        let expenses = vec![
            monthly_expense(1, "alice", dec!(200)),
            monthly_expense(2, "bob", dec!(100)),
            shared(monthly_expense(3, "alice", dec!(1400)), Some("alice")),
        ];
        let savings = vec![
            saving("alice", dec!(300), false, 3, 2026),
            saving("alice", dec!(100), true, 3, 2026),
            saving("bob", dec!(50), true, 3, 2026),
        ];

        let summary = calculate_savings(&members, &salaries, &expenses, &savings, march());

        let alice = &summary.members[0];
        assert_eq!(alice.personal_savings, dec!(300));
        assert_eq!(alice.shared_savings, dec!(100));
        // 3000 - 200 - 700 - 300 - 100
        assert_eq!(alice.remaining_budget, dec!(1700));

        let bob = &summary.members[1];
        assert_eq!(bob.personal_savings, Decimal::ZERO);
        assert_eq!(bob.shared_savings, dec!(50));
        // 2600 - 100 - 700 - 50
        assert_eq!(bob.remaining_budget, dec!(1750));

        assert_eq!(summary.total_personal_savings, dec!(300));
        assert_eq!(summary.total_shared_savings, dec!(150));
        assert_eq!(summary.total_savings, dec!(450));
        assert_eq!(summary.total_remaining_budget, dec!(3450));
    }

    #[test]
    fn test_no_savings_falls_back_to_salary_minus_expenses() {
        let members = vec![member("alice", "Alice"), member("bob", "Bob")];
        let salaries = vec![salary("alice", 3, 2026, dec!(2000), dec!(2000))];
        let expenses = vec![shared(monthly_expense(1, "bob", dec!(100.01)), None)];

        let summary = calculate_savings(&members, &salaries, &expenses, &[], march());

        assert_eq!(summary.total_savings, Decimal::ZERO);
        // 100.01 / 2 rounds to 50.01
        assert_eq!(summary.members[0].remaining_budget, dec!(1949.99));
        assert_eq!(summary.members[1].remaining_budget, dec!(-50.01));
    }

    #[test]
    fn test_savings_from_other_months_are_ignored() {
        let members = vec![member("alice", "Alice")];
        let salaries = vec![salary("alice", 3, 2026, dec!(1000), dec!(1000))];
        let savings = vec![
            saving("alice", dec!(100), false, 2, 2026),
            saving("alice", dec!(100), false, 3, 2025),
        ];

        let summary = calculate_savings(&members, &salaries, &[], &savings, march());

        assert_eq!(summary.total_savings, Decimal::ZERO);
        assert_eq!(summary.members[0].remaining_budget, dec!(1000));
    }

    #[test]
    fn test_no_members() {
        let summary = calculate_savings(&[], &[], &[], &[], march());
        assert!(summary.members.is_empty());
        assert_eq!(summary.total_remaining_budget, Decimal::ZERO);
    }
}
