// ============================================================================
// Aggregates
// Min, Max, Sum and Avg over non-empty sequences of same-currency Money
// ============================================================================
//
// Every function takes `first` separately from `rest`, so an empty input
// cannot be expressed.

use super::errors::MoneyResult;
use super::money::Money;
use crate::numeric::Decimal;
use std::cmp::Ordering;

/// Smallest value; the earliest one wins on ties.
pub fn checked_min(first: &Money, rest: &[Money]) -> MoneyResult<Money> {
    let mut smallest = first;
    for item in rest {
        if item.checked_cmp(smallest)? == Ordering::Less {
            smallest = item;
        }
    }
    Ok(smallest.clone())
}

/// # Panics
/// Panics if any currency differs from `first`.
pub fn min(first: &Money, rest: &[Money]) -> Money {
    checked_min(first, rest).unwrap_or_else(|e| panic!("{}", e))
}

/// Largest value; the earliest one wins on ties.
pub fn checked_max(first: &Money, rest: &[Money]) -> MoneyResult<Money> {
    let mut largest = first;
    for item in rest {
        if item.checked_cmp(largest)? == Ordering::Greater {
            largest = item;
        }
    }
    Ok(largest.clone())
}

/// # Panics
/// Panics if any currency differs from `first`.
pub fn max(first: &Money, rest: &[Money]) -> Money {
    checked_max(first, rest).unwrap_or_else(|e| panic!("{}", e))
}

pub fn checked_sum(first: &Money, rest: &[Money]) -> MoneyResult<Money> {
    rest.iter()
        .try_fold(first.clone(), |total, item| total.checked_add(item))
}

/// # Panics
/// Panics if any currency differs from `first`.
pub fn sum(first: &Money, rest: &[Money]) -> Money {
    checked_sum(first, rest).unwrap_or_else(|e| panic!("{}", e))
}

/// Sum divided by the count at the process-wide division precision.
pub fn checked_avg(first: &Money, rest: &[Money]) -> MoneyResult<Money> {
    let count = i64::try_from(rest.len() + 1).unwrap_or(i64::MAX);
    let count = Money::from_decimal(Decimal::new(count, 0), first.currency().clone());
    checked_sum(first, rest)?.checked_div(&count)
}

/// # Panics
/// Panics if any currency differs from `first`.
pub fn avg(first: &Money, rest: &[Money]) -> Money {
    checked_avg(first, rest).unwrap_or_else(|e| panic!("{}", e))
}
