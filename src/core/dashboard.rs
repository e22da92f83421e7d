//! Dashboard composition.
//!
//! Runs every calculator over one in-memory [`HouseholdSnapshot`]. Loading the snapshot is
//! the data layer's job (`db::snapshot::load_snapshot`); everything here is pure.

use crate::{
    core::{
        expenses::{ExpenseData, get_expense_data},
        income::{MemberIncome, get_income_data},
        period::Period,
        savings::{SavingsSummary, summarize_savings},
        settlement::{SettlementSummary, calculate_settlement, is_month_settled},
    },
    entities::{expense, household_member, payment_status, salary, saving, settlement},
    errors::Result,
};
use serde::Serialize;

/// Everything the calculators need to know about one household for one period
#[derive(Debug, Clone, Default)]
pub struct HouseholdSnapshot {
    /// Household primary key
    pub household_id: i64,
    /// Members in join order
    pub members: Vec<household_member::Model>,
    /// Salary records of the members
    pub salaries: Vec<salary::Model>,
    /// Active expenses of the household
    pub expenses: Vec<expense::Model>,
    /// Payment statuses of those expenses
    pub payment_statuses: Vec<payment_status::Model>,
    /// Savings recorded in the household
    pub savings: Vec<saving::Model>,
    /// Settlements recorded for the household
    pub settlements: Vec<settlement::Model>,
}

/// The full monthly dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Month the dashboard describes
    pub period: Period,
    /// Salaries per member
    pub income: Vec<MemberIncome>,
    /// Expense totals
    pub expenses: ExpenseData,
    /// Savings and remaining budgets
    pub savings: SavingsSummary,
    /// Who owes whom
    pub settlement: SettlementSummary,
}

/// Builds the dashboard for `period` as seen by `requesting_user_id`.
pub fn build_dashboard(
    snapshot: &HouseholdSnapshot,
    requesting_user_id: &str,
    period: Period,
) -> Result<Dashboard> {
    let income = get_income_data(&snapshot.members, &snapshot.salaries, period);
    let expenses = get_expense_data(
        &snapshot.members,
        &snapshot.expenses,
        &snapshot.payment_statuses,
        period,
    );
    let savings = summarize_savings(&income, &expenses, &snapshot.savings, period);

    let shared_expenses: Vec<expense::Model> = snapshot
        .expenses
        .iter()
        .filter(|e| e.is_shared())
        .cloned()
        .collect();
    let settlement = calculate_settlement(
        &snapshot.members,
        &shared_expenses,
        requesting_user_id,
        period,
        is_month_settled(&snapshot.settlements, snapshot.household_id, period),
    )?;

    Ok(Dashboard {
        period,
        income,
        expenses,
        savings,
        settlement,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn snapshot() -> HouseholdSnapshot {
        HouseholdSnapshot {
            household_id: 1,
            members: vec![member("alice", "Alice"), member("bob", "Bob")],
            salaries: vec![
                salary("alice", 3, 2026, dec!(3000), dec!(3000)),
                salary("bob", 3, 2026, dec!(2800), dec!(2800)),
            ],
            expenses: vec![
                monthly_expense(1, "alice", dec!(100)),
                shared(monthly_expense(2, "alice", dec!(1400)), None),
                shared(monthly_expense(3, "alice", dec!(120)), Some("alice")),
            ],
            payment_statuses: vec![paid(1, 3, 2026)],
            savings: vec![saving("bob", dec!(200), true, 3, 2026)],
            settlements: vec![settlement_record(1, 3, 2026)],
        }
    }

    #[test]
    fn test_build_dashboard_combines_all_calculators() {
        let march = Period::new(3, 2026).unwrap();

        let dashboard = build_dashboard(&snapshot(), "bob", march).unwrap();

        assert_eq!(dashboard.income.len(), 2);
        assert_eq!(dashboard.expenses.shared_expenses_total, dec!(1520));
        assert_eq!(dashboard.expenses.total_household_expenses, dec!(1620));
        assert_eq!(dashboard.expenses.remaining_household_expenses, dec!(1520));
        // 3000 - 100 - 760
        assert_eq!(dashboard.savings.members[0].remaining_budget, dec!(2140));
        // 2800 - 760 - 200
        assert_eq!(dashboard.savings.members[1].remaining_budget, dec!(1840));
        assert_eq!(dashboard.settlement.amount, dec!(60));
        assert_eq!(dashboard.settlement.message, "You owe Alice €60.00");
        assert!(dashboard.settlement.is_settled);
    }

    #[test]
    fn test_build_dashboard_other_month() {
        let april = Period::new(4, 2026).unwrap();

        let dashboard = build_dashboard(&snapshot(), "alice", april).unwrap();

        assert_eq!(dashboard.income[0].current_salary, Decimal::ZERO);
        assert_eq!(dashboard.expenses.remaining_household_expenses, dec!(1620));
        assert_eq!(dashboard.savings.total_savings, Decimal::ZERO);
        assert!(!dashboard.settlement.is_settled);
        assert_eq!(dashboard.settlement.message, "Bob owes you €60.00");
    }

    #[test]
    fn test_build_dashboard_is_deterministic() {
        let march = Period::new(3, 2026).unwrap();
        let snapshot = snapshot();

        let first = build_dashboard(&snapshot, "alice", march).unwrap();
        let second = build_dashboard(&snapshot, "alice", march).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_dashboard_serializes_money_as_numbers() {
        let march = Period::new(3, 2026).unwrap();
        let dashboard = build_dashboard(&snapshot(), "bob", march).unwrap();

        let json = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(json["period"]["month"], 3);
        assert_eq!(json["period"]["year"], 2026);
        assert_eq!(json["settlement"]["amount"], 60.0);
        assert_eq!(json["settlement"]["owedByUserId"], "bob");
        assert_eq!(json["expenses"]["sharedExpensesTotal"], 1520.0);
        assert_eq!(json["income"][0]["currentSalary"], 3000.0);
        assert_eq!(json["savings"]["members"][1]["sharedSavings"], 200.0);
    }
}
