//! Property tests for the operator layer and report determinism.

use proptest::prelude::*;
use storelens::core::{
    db::{
        EntityStore,
        ops::{group_by, sort_desc, top_n},
    },
    model::{Customer, Order, OrderStatus},
    report,
    types::{Duration, Id, Money, Timestamp},
};

/// One customer, one order aged `age_days` against a fixed reference
/// instant.
fn single_order_store(age_days: u64, now: Timestamp) -> EntityStore {
    let mut store = EntityStore::new();
    store
        .insert_customer(Customer {
            id: Id::new(1),
            first_name: "Prop".to_string(),
            last_name: "Tester".to_string(),
            email: "prop.tester@example.test".to_string(),
        })
        .expect("seed customer");
    store
        .insert_order(Order {
            id: Id::new(1),
            customer: Id::new(1),
            status: OrderStatus::completed(),
            placed_at: now.saturating_sub(Duration::from_days(age_days)),
            discount_code: None,
            carrier: None,
        })
        .expect("seed order");

    store
}

proptest! {
    #[test]
    fn sort_desc_yields_non_increasing_keys(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let sorted = sort_desc(values, |v| *v);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn sort_desc_keeps_tied_rows_in_input_order(
        keys in proptest::collection::vec(0_u8..4, 0..64),
    ) {
        // Tag each row with its input position; within one key the
        // positions must stay ascending after the sort.
        let rows: Vec<(usize, u8)> = keys.into_iter().enumerate().collect();
        let sorted = sort_desc(rows, |row| row.1);

        for key in 0_u8..4 {
            let positions: Vec<usize> = sorted
                .iter()
                .filter(|row| row.1 == key)
                .map(|row| row.0)
                .collect();
            prop_assert!(
                positions.windows(2).all(|pair| pair[0] < pair[1]),
                "ties reordered for key {key}: {positions:?}",
            );
        }
    }

    #[test]
    fn top_n_returns_a_prefix_of_at_most_n(
        values in proptest::collection::vec(any::<u32>(), 0..64),
        n in 0_usize..80,
    ) {
        let expected_len = n.min(values.len());
        let expected_prefix = values[..expected_len].to_vec();

        let taken = top_n(values, n);
        prop_assert_eq!(taken.len(), expected_len);
        prop_assert_eq!(taken, expected_prefix);
    }

    #[test]
    fn group_by_partitions_every_row_into_a_non_empty_group(
        keys in proptest::collection::vec(0_u64..8, 0..64),
    ) {
        let total_rows = keys.len();
        let grouped = group_by(keys, |k| *k);

        let mut seen = 0;
        for group in &grouped {
            prop_assert!(!group.members.is_empty());
            prop_assert!(group.members.iter().all(|k| *k == group.key));
            seen += group.members.len();
        }
        prop_assert_eq!(seen, total_rows);
    }

    #[test]
    fn money_sums_are_exact_over_cents(
        cents in proptest::collection::vec(-1_000_000_i64..1_000_000, 0..100),
    ) {
        let summed: Money = cents.iter().map(|&c| Money::from_cents(c)).sum();
        let expected = Money::from_cents(cents.iter().sum());
        prop_assert_eq!(summed, expected, "cent-level totals must not drift");
    }

    #[test]
    fn recency_window_admits_exactly_the_last_thirty_days(age_days in 0_u64..=60) {
        let now = Timestamp::from_seconds(200 * 86_400);
        let store = single_order_store(age_days, now);

        let rows = report::recent_orders(&store, now).expect("report 7");
        let included = !rows.is_empty();
        prop_assert_eq!(
            included,
            age_days <= 30,
            "order aged {} days against an inclusive 30-day bound",
            age_days,
        );
    }

    #[test]
    fn recent_orders_are_idempotent_for_any_reference_instant(
        now_secs in 0_u64..4_000_000_000,
        age_days in 0_u64..=60,
    ) {
        let now = Timestamp::from_seconds(now_secs);
        let store = single_order_store(age_days, now);

        let first = report::recent_orders(&store, now).expect("first run");
        let second = report::recent_orders(&store, now).expect("second run");
        prop_assert_eq!(first, second);
    }
}
