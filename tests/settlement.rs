use chrono::Utc;
use household_buddy::{
    core::{money::round_money, period::Period, settlement::calculate_settlement},
    entities::{expense, household_member},
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn member(user_id: &str, first_name: &str) -> household_member::Model {
    household_member::Model {
        id: 0,
        user_id: user_id.to_string(),
        household_id: 1,
        role: "MEMBER".to_string(),
        first_name: first_name.to_string(),
        last_name: String::new(),
        joined_at: Utc::now(),
    }
}

fn shared_expense(id: i64, cents: i64, paid_by: Option<&str>) -> expense::Model {
    expense::Model {
        id,
        household_id: 1,
        user_id: "alice".to_string(),
        name: format!("Shared {id}"),
        amount: Decimal::new(cents, 2),
        expense_type: "SHARED".to_string(),
        category: "RECURRING".to_string(),
        frequency: Some("MONTHLY".to_string()),
        paid_by_user_id: paid_by.map(str::to_string),
        yearly_payment_strategy: None,
        payment_month: None,
        installment_frequency: None,
        installment_count: None,
        month: None,
        year: None,
        created_at: Utc::now(),
        deleted_at: None,
    }
}

fn payer_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), Just(Some("alice")), Just(Some("bob"))]
}

proptest! {
    #[test]
    fn settlement_is_the_same_for_both_members(
        rows in prop::collection::vec((1i64..=1_000_000, payer_strategy()), 0..=20),
    ) {
        let members = vec![member("alice", "Alice"), member("bob", "Bob")];
        let expenses: Vec<expense::Model> = rows
            .iter()
            .enumerate()
            .map(|(i, &(cents, paid_by))| {
                shared_expense(i64::try_from(i).unwrap_or_default(), cents, paid_by)
            })
            .collect();
        let period = Period::new(6, 2026).unwrap();

        let for_alice = calculate_settlement(&members, &expenses, "alice", period, false).unwrap();
        let for_bob = calculate_settlement(&members, &expenses, "bob", period, false).unwrap();

        prop_assert_eq!(for_alice.amount, for_bob.amount);
        prop_assert_eq!(&for_alice.owed_by_user_id, &for_bob.owed_by_user_id);
        prop_assert_eq!(&for_alice.owed_to_user_id, &for_bob.owed_to_user_id);
        prop_assert!(for_alice.amount >= Decimal::ZERO);

        let fronted = |who: &str| -> Decimal {
            expenses
                .iter()
                .filter(|e| e.paid_by_user_id.as_deref() == Some(who))
                .map(|e| e.amount)
                .sum()
        };
        let expected = round_money((fronted("alice") - fronted("bob")).abs() / Decimal::from(2));
        prop_assert_eq!(for_alice.amount, expected);

        if expected.is_zero() {
            prop_assert!(for_alice.is_balanced());
        } else {
            prop_assert_ne!(&for_alice.owed_by_user_id, &for_alice.owed_to_user_id);
        }
    }
}
