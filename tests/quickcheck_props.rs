//! Ordering and equality laws checked with quickcheck.
//!
//! Run with: cargo test --test quickcheck_props

use fixed_money::prelude::*;
use quickcheck::{quickcheck, TestResult};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// Keep exponents small enough that aligning two values stays cheap.
fn bounded(c: i64, e: i8) -> Decimal {
    Decimal::new(c, i32::from(e) / 4)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

quickcheck! {
    fn prop_ordering_is_antisymmetric(a: i64, ea: i8, b: i64, eb: i8) -> bool {
        let (x, y) = (bounded(a, ea), bounded(b, eb));
        x.cmp(&y) == y.cmp(&x).reverse()
    }

    fn prop_ordering_matches_difference_sign(a: i64, ea: i8, b: i64, eb: i8) -> bool {
        let (x, y) = (bounded(a, ea), bounded(b, eb));
        let expected = match (&x - &y).sign() {
            s if s < 0 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        };
        x.cmp(&y) == expected
    }

    fn prop_equal_values_hash_equal(c: i32, e: i8, zeros: u8) -> bool {
        let x = bounded(i64::from(c), e);
        let padded = x.shift(-i32::from(zeros % 12)) * Decimal::new(10i64.pow(u32::from(zeros % 12)), 0);
        x == padded && hash_of(&x) == hash_of(&padded)
    }

    fn prop_money_comparisons_agree(a: i64, b: i64) -> bool {
        let registry = CurrencyRegistry::with_builtin();
        let x = Money::new(&registry, "EUR", a, -2).unwrap();
        let y = Money::new(&registry, "EUR", b, -2).unwrap();

        x.less_than(&y) == (a < b)
            && x.greater_than(&y) == (a > b)
            && x.equal(&y) == (a == b)
            && x.less_than_or_equal(&y) == (a <= b)
            && x.greater_than_or_equal(&y) == (a >= b)
            && x.partial_cmp(&y) == Some(a.cmp(&b))
    }

    fn prop_cross_currency_comparison_is_rejected(a: i64, b: i64) -> bool {
        let registry = CurrencyRegistry::with_builtin();
        let x = Money::new(&registry, "USD", a, 0).unwrap();
        let y = Money::new(&registry, "GBP", b, 0).unwrap();
        let fatal = x.checked_cmp(&y).map_err(|e| e.is_fatal());
        x != y && fatal == Err(true) && std::panic::catch_unwind(|| x < y).is_err()
    }

    fn prop_sign_matches_coefficient(c: i64, e: i8) -> bool {
        let x = bounded(c, e);
        x.sign() == c.signum() as i32
            && x.is_zero() == (c == 0)
            && x.is_negative() == (c < 0)
            && x.is_positive() == (c > 0)
    }

    fn prop_i64_round_trip(c: i64) -> bool {
        Decimal::new(c, 0).to_i64() == Some(c)
    }

    fn prop_rust_decimal_round_trip(c: i64, scale: u8) -> TestResult {
        let scale = u32::from(scale % 29);
        let original = rust_decimal::Decimal::new(c, scale);
        let ours = Decimal::from(original);
        TestResult::from_bool(ours.to_rust_decimal() == Some(original))
    }
}
