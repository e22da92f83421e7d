//! Settlement calculation between the two members of a household.
//!
//! Shared expenses are split equally. A shared expense with no `paid_by_user_id` was already
//! split when it was paid, so it never moves the balance. When one member fronted the whole
//! bill, the other member owes them half of it. The net of all those halves for a month is
//! the settlement.

use crate::{
    core::{
        money::{format_euros, round_money},
        period::Period,
        schedule::resolve_monthly_amount,
    },
    entities::{expense, household_member, settlement},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Message shown when neither member owes the other anything
pub const BALANCED_MESSAGE: &str = "All shared expenses are balanced — no settlement needed.";

/// Who owes whom for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    /// Amount to transfer, always non-negative
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Member who has to pay, `None` when balanced
    pub owed_by_user_id: Option<String>,
    /// Member who receives the payment, `None` when balanced
    pub owed_to_user_id: Option<String>,
    /// Message phrased for the requesting member
    pub message: String,
    /// Whether a settlement was already recorded for the month
    pub is_settled: bool,
}

impl SettlementSummary {
    /// Returns true if nobody owes anything
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.owed_by_user_id.is_none()
    }
}

/// Returns true if `settlements` contains a record for the household and period.
#[must_use]
pub fn is_month_settled(
    settlements: &[settlement::Model],
    household_id: i64,
    period: Period,
) -> bool {
    settlements.iter().any(|s| {
        s.household_id == household_id
            && s.month == period.month_column()
            && s.year == period.year()
    })
}

/// Computes the net settlement for `period`.
///
/// The balance is kept relative to the first member: positive means the second member owes
/// the first. Only active shared expenses are considered; expenses fronted by someone who is
/// not a member are skipped. A household with fewer than two members is always balanced;
/// more than two members is rejected.
pub fn calculate_settlement(
    members: &[household_member::Model],
    shared_expenses: &[expense::Model],
    requesting_user_id: &str,
    period: Period,
    is_settled: bool,
) -> Result<SettlementSummary> {
    let (first, second) = match members {
        [first, second] => (first, second),
        [] | [_] => return Ok(balanced(is_settled)),
        _ => {
            return Err(Error::UnsupportedHouseholdSize {
                count: members.len(),
            });
        }
    };

    let two = Decimal::from(2);
    let mut net_balance = Decimal::ZERO;

    for expense in shared_expenses
        .iter()
        .filter(|e| e.is_active() && e.is_shared())
    {
        let Some(paid_by) = expense.paid_by_user_id.as_deref() else {
            continue;
        };

        let half = resolve_monthly_amount(expense, period) / two;
        if paid_by == first.user_id {
            net_balance += half;
        } else if paid_by == second.user_id {
            net_balance -= half;
        } else {
            tracing::warn!(
                expense_id = expense.id,
                paid_by,
                "Shared expense paid by a non-member, ignoring it for settlement"
            );
        }
    }

    let amount = round_money(net_balance.abs());
    if amount.is_zero() {
        return Ok(balanced(is_settled));
    }

    let (ower, owee) = if net_balance.is_sign_positive() {
        (second, first)
    } else {
        (first, second)
    };

    let formatted = format_euros(amount);
    let message = if requesting_user_id == ower.user_id {
        format!("You owe {} {formatted}", owee.first_name)
    } else if requesting_user_id == owee.user_id {
        format!("{} owes you {formatted}", ower.first_name)
    } else {
        format!("{} owes {} {formatted}", ower.first_name, owee.first_name)
    };

    Ok(SettlementSummary {
        amount,
        owed_by_user_id: Some(ower.user_id.clone()),
        owed_to_user_id: Some(owee.user_id.clone()),
        message,
        is_settled,
    })
}

fn balanced(is_settled: bool) -> SettlementSummary {
    SettlementSummary {
        amount: Decimal::ZERO,
        owed_by_user_id: None,
        owed_to_user_id: None,
        message: BALANCED_MESSAGE.to_string(),
        is_settled,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use rust_decimal_macros::dec;

    fn couple() -> Vec<household_member::Model> {
        vec![member("alice", "Alice"), member("bob", "Bob")]
    }

    fn march() -> Period {
        Period::new(3, 2026).unwrap()
    }

    #[test]
    fn test_requester_owes_the_payer() {
        let expenses = vec![shared(monthly_expense(1, "alice", dec!(120)), Some("alice"))];

        let result = calculate_settlement(&couple(), &expenses, "bob", march(), false).unwrap();

        assert_eq!(result.amount, dec!(60));
        assert_eq!(result.owed_by_user_id.as_deref(), Some("bob"));
        assert_eq!(result.owed_to_user_id.as_deref(), Some("alice"));
        assert_eq!(result.message, "You owe Alice €60.00");
        assert!(!result.is_settled);
    }

    #[test]
    fn test_requester_is_owed() {
        let expenses = vec![shared(monthly_expense(1, "alice", dec!(120)), Some("alice"))];

        let result = calculate_settlement(&couple(), &expenses, "alice", march(), false).unwrap();

        assert_eq!(result.amount, dec!(60));
        assert_eq!(result.message, "Bob owes you €60.00");
    }

    #[test]
    fn test_outside_requester_gets_third_person_message() {
        let expenses = vec![shared(monthly_expense(1, "bob", dec!(50)), Some("bob"))];

        let result = calculate_settlement(&couple(), &expenses, "carol", march(), false).unwrap();

        assert_eq!(result.message, "Alice owes Bob €25.00");
        assert_eq!(result.owed_by_user_id.as_deref(), Some("alice"));
    }

    #[test]
    fn test_equal_split_expense_moves_nothing() {
        let expenses = vec![shared(monthly_expense(1, "alice", dec!(1400)), None)];

        for requester in ["alice", "bob"] {
            let result =
                calculate_settlement(&couple(), &expenses, requester, march(), false).unwrap();
            assert_eq!(result.amount, Decimal::ZERO);
            assert!(result.is_balanced());
            assert!(result.owed_to_user_id.is_none());
            assert_eq!(result.message, BALANCED_MESSAGE);
        }
    }

    #[test]
    fn test_payments_by_both_members_net_out() {
        let expenses = vec![
            shared(monthly_expense(1, "alice", dec!(300)), Some("alice")),
            shared(monthly_expense(2, "bob", dec!(100)), Some("bob")),
            shared(monthly_expense(3, "bob", dec!(300)), Some("bob")),
        ];

        let result = calculate_settlement(&couple(), &expenses, "alice", march(), false).unwrap();

        // alice +150, bob +200: alice owes bob 50
        assert_eq!(result.amount, dec!(50));
        assert_eq!(result.message, "You owe Bob €50.00");
    }

    #[test]
    fn test_only_expenses_due_this_month_count() {
        let expenses = vec![
            shared(yearly_full_expense(1, "alice", dec!(600), 9), Some("alice")),
            shared(one_time_expense(2, "bob", dec!(80), 3, 2026), Some("bob")),
        ];

        let result = calculate_settlement(&couple(), &expenses, "bob", march(), false).unwrap();

        assert_eq!(result.amount, dec!(40));
        assert_eq!(result.message, "Alice owes you €40.00");
    }

    #[test]
    fn test_personal_and_deleted_expenses_are_ignored() {
        let expenses = vec![
            expense::Model {
                paid_by_user_id: Some("alice".to_string()),
                ..monthly_expense(1, "alice", dec!(500))
            },
            expense::Model {
                deleted_at: Some(chrono::Utc::now()),
                ..shared(monthly_expense(2, "alice", dec!(500)), Some("alice"))
            },
        ];

        let result = calculate_settlement(&couple(), &expenses, "alice", march(), false).unwrap();

        assert!(result.is_balanced());
    }

    #[test]
    fn test_non_member_payer_is_ignored() {
        let expenses = vec![shared(monthly_expense(1, "alice", dec!(500)), Some("mallory"))];

        let result = calculate_settlement(&couple(), &expenses, "alice", march(), false).unwrap();

        assert!(result.is_balanced());
    }

    #[test]
    fn test_settled_month_still_reports_amount() {
        let expenses = vec![shared(monthly_expense(1, "alice", dec!(120)), Some("alice"))];

        let result = calculate_settlement(&couple(), &expenses, "bob", march(), true).unwrap();

        assert!(result.is_settled);
        assert_eq!(result.amount, dec!(60));
        assert_eq!(result.message, "You owe Alice €60.00");
    }

    #[test]
    fn test_odd_cent_halves_round_once_at_the_end() {
        let expenses = vec![
            shared(monthly_expense(1, "alice", dec!(0.01)), Some("alice")),
            shared(monthly_expense(2, "alice", dec!(0.01)), Some("alice")),
        ];

        let result = calculate_settlement(&couple(), &expenses, "bob", march(), false).unwrap();

        assert_eq!(result.amount, dec!(0.01));
    }

    #[test]
    fn test_amount_is_symmetric_between_requesters() {
        let expenses = vec![
            shared(monthly_expense(1, "alice", dec!(333.33)), Some("alice")),
            shared(monthly_expense(2, "bob", dec!(99.99)), Some("bob")),
        ];

        let for_alice = calculate_settlement(&couple(), &expenses, "alice", march(), false).unwrap();
        let for_bob = calculate_settlement(&couple(), &expenses, "bob", march(), false).unwrap();

        assert_eq!(for_alice.amount, for_bob.amount);
        assert_eq!(for_alice.owed_by_user_id, for_bob.owed_by_user_id);
        assert_ne!(for_alice.message, for_bob.message);
    }

    #[test]
    fn test_small_households_are_balanced() {
        let expenses = vec![shared(monthly_expense(1, "alice", dec!(120)), Some("alice"))];

        let solo = calculate_settlement(&couple()[..1], &expenses, "alice", march(), false);
        assert!(solo.unwrap().is_balanced());

        let empty = calculate_settlement(&[], &expenses, "alice", march(), false);
        assert!(empty.unwrap().is_balanced());
    }

    #[test]
    fn test_larger_households_are_rejected() {
        let members = vec![
            member("alice", "Alice"),
            member("bob", "Bob"),
            member("carol", "Carol"),
        ];

        let result = calculate_settlement(&members, &[], "alice", march(), false);

        assert!(matches!(
            result,
            Err(Error::UnsupportedHouseholdSize { count: 3 })
        ));
    }

    #[test]
    fn test_is_month_settled() {
        let records = vec![settlement_record(1, 3, 2026)];

        assert!(is_month_settled(&records, 1, march()));
        assert!(!is_month_settled(&records, 2, march()));
        assert!(!is_month_settled(&records, 1, Period::new(4, 2026).unwrap()));
    }
}
