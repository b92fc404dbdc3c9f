//! Property-based tests for LateFeeCalculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::LateFeeCalculator;
use super::types::{LateFeeConfig, LateFeeSlab, LateFeeType};

/// Strategy for non-negative amounts with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn arb_fee_type() -> impl Strategy<Value = LateFeeType> {
    prop_oneof![
        Just(LateFeeType::Fixed),
        Just(LateFeeType::PerDay),
        Just(LateFeeType::SlabBased),
    ]
}

/// Strategy for contiguous slabs starting at day 1.
fn arb_slabs() -> impl Strategy<Value = Vec<LateFeeSlab>> {
    prop::collection::vec((1u32..15, arb_amount()), 1..6).prop_map(|widths| {
        let mut from = 1;
        widths
            .into_iter()
            .map(|(width, amount)| {
                let slab = LateFeeSlab::new(from, from + width - 1, amount);
                from += width;
                slab
            })
            .collect()
    })
}

prop_compose! {
    fn arb_config()(
        late_fee_type in arb_fee_type(),
        fixed_amount in arb_amount(),
        per_day_amount in arb_amount(),
        slabs in arb_slabs(),
        max_late_fee_cap in arb_amount(),
        due_date_day in 1u32..=28,
        grace_period_days in 0u32..15,
    ) -> LateFeeConfig {
        LateFeeConfig {
            due_date_day,
            grace_period_days,
            late_fee_type,
            fixed_amount,
            per_day_amount,
            slabs,
            max_late_fee_cap,
            allow_waiver: false,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Not being late is always free, whatever the rule.
    #[test]
    fn prop_not_late_is_free(config in arb_config(), days in i64::MIN..=0) {
        let result = LateFeeCalculator::calculate(days, &config).unwrap();
        prop_assert_eq!(result.amount, Decimal::ZERO);
        prop_assert!(result.warning.is_none());
    }

    /// The fee is never negative and never above the cap.
    #[test]
    fn prop_fee_bounded_by_cap(config in arb_config(), days in 1i64..500) {
        let result = LateFeeCalculator::calculate(days, &config).unwrap();
        prop_assert!(result.amount >= Decimal::ZERO);
        prop_assert!(result.amount <= config.max_late_fee_cap);
        prop_assert_eq!(result.capped, result.amount < result.uncapped_amount);
    }

    /// A fixed fee does not depend on how late the payment is.
    #[test]
    fn prop_fixed_is_constant(
        mut config in arb_config(),
        a in 1i64..1_000,
        b in 1i64..1_000,
    ) {
        config.late_fee_type = LateFeeType::Fixed;
        let fa = LateFeeCalculator::calculate(a, &config).unwrap().amount;
        let fb = LateFeeCalculator::calculate(b, &config).unwrap().amount;
        prop_assert_eq!(fa, fb);
        prop_assert_eq!(fa, config.fixed_amount.min(config.max_late_fee_cap));
    }

    /// A per-day fee grows with days late until the cap, then stays put.
    #[test]
    fn prop_per_day_monotonic(
        mut config in arb_config(),
        days in 1i64..1_000,
        extra in 0i64..100,
    ) {
        config.late_fee_type = LateFeeType::PerDay;
        let earlier = LateFeeCalculator::calculate(days, &config).unwrap();
        let later = LateFeeCalculator::calculate(days + extra, &config).unwrap();
        prop_assert!(earlier.amount <= later.amount);

        if earlier.capped {
            prop_assert_eq!(later.amount, config.max_late_fee_cap);
        }
    }

    /// Slab fees only change at slab boundaries and repeat for the same input.
    #[test]
    fn prop_slab_constant_within_slab(mut config in arb_config(), pick in any::<prop::sample::Index>()) {
        config.late_fee_type = LateFeeType::SlabBased;
        let slab = config.slabs[pick.index(config.slabs.len())];
        let expected = slab.amount.min(config.max_late_fee_cap);

        for day in slab.from_day..=slab.to_day {
            let first = LateFeeCalculator::calculate(i64::from(day), &config).unwrap();
            let second = LateFeeCalculator::calculate(i64::from(day), &config).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.amount, expected);
        }
    }

    /// Days past the last slab yield zero with a gap warning.
    #[test]
    fn prop_slab_gap_warns(mut config in arb_config(), beyond in 1u32..100) {
        config.late_fee_type = LateFeeType::SlabBased;
        let last = config.slabs.last().map(|s| s.to_day).unwrap();

        let result = LateFeeCalculator::calculate(i64::from(last + beyond), &config).unwrap();
        prop_assert_eq!(result.amount, Decimal::ZERO);
        let warning = result.warning.unwrap();
        prop_assert_eq!(warning.covered_through, Some(last));
    }
}
