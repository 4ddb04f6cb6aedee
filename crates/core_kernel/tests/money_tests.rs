//! Unit tests for Rand amounts
//!
//! Covers construction, arithmetic, wire format and a few properties.

use core_kernel::{MoneyError, Rand};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert!(Rand::new(dec!(0)).unwrap().is_zero());
        assert_eq!(Rand::new(dec!(1850)).unwrap().amount(), dec!(1850));
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(Rand::new(dec!(-0.01)), Err(MoneyError::Negative(_))));
    }

    #[test]
    fn test_from_whole() {
        assert_eq!(Rand::from_whole(450000).amount(), dec!(450000));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_sum_of_amounts() {
        let total: Rand = [45000u64, 32000, 4500].into_iter().map(Rand::from_whole).sum();
        assert_eq!(total, Rand::from_whole(81500));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Rand = Vec::<Rand>::new().iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Rand::from_whole(100).divide(0), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_saturating_sub_clamps() {
        let excess = Rand::from_whole(3500);
        assert!(excess.saturating_sub(Rand::from_whole(5000)).is_zero());
        assert_eq!(
            Rand::from_whole(45000).saturating_sub(excess),
            Rand::from_whole(41500)
        );
    }
}

mod wire_format {
    use super::*;

    #[test]
    fn test_deserializes_from_json_number() {
        let amount: Rand = serde_json::from_str("29500").unwrap();
        assert_eq!(amount, Rand::from_whole(29500));
    }

    #[test]
    fn test_deserializes_fractional_number() {
        let amount: Rand = serde_json::from_str("816.67").unwrap();
        assert_eq!(amount.amount(), dec!(816.67));
    }

    #[test]
    fn test_rejects_negative_json() {
        let result: Result<Rand, _> = serde_json::from_str("-1");
        assert!(result.is_err());
    }

    #[test]
    fn test_fractional_serializes_as_number() {
        let amount = Rand::new(dec!(200.5)).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "200.5");
    }
}

proptest! {
    #[test]
    fn prop_non_negative_decimals_always_accepted(minor in 0i64..10_000_000_000i64) {
        let amount = Decimal::new(minor, 2);
        prop_assert!(Rand::new(amount).is_ok());
    }

    #[test]
    fn prop_addition_is_commutative(a in 0u64..1_000_000_000u64, b in 0u64..1_000_000_000u64) {
        prop_assert_eq!(Rand::from_whole(a) + Rand::from_whole(b), Rand::from_whole(b) + Rand::from_whole(a));
    }

    #[test]
    fn prop_monthly_share_never_exceeds_total(units in 0u64..100_000_000u64, parts in 1u32..24u32) {
        let total = Rand::from_whole(units);
        let share = total.divide(parts).unwrap();
        prop_assert!(share <= total);
    }
}
