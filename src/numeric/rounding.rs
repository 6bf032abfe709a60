// ============================================================================
// Rounding
// Rounding modes and cash rounding intervals for the decimal engine
// ============================================================================

use super::errors::NumericError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a discarded fractional portion is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Ties round away from zero on the magnitude (2.5 -> 3, -2.5 -> -3)
    HalfAwayFromZero,
    /// Ties round to the neighbour with an even last digit (banker's rounding)
    HalfEven,
    /// Ties round toward zero (2.5 -> 2, -2.5 -> -2)
    HalfTowardZero,
    /// Always toward negative infinity
    Floor,
    /// Always toward positive infinity
    Ceiling,
    /// Always toward zero (truncation)
    TowardZero,
}

#[inline]
pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Rounded value of a quotient whose magnitude is known to be below one half.
fn negligible(negative: bool, mode: RoundingMode) -> BigInt {
    match mode {
        RoundingMode::Floor if negative => BigInt::from(-1),
        RoundingMode::Ceiling if !negative => BigInt::from(1),
        _ => BigInt::zero(),
    }
}

/// Round `numerator / 10^digits` to an integer.
///
/// Skips building `10^digits` when it dwarfs the numerator.
pub(crate) fn round_pow10(numerator: &BigInt, digits: u32, mode: RoundingMode) -> BigInt {
    if numerator.is_zero() {
        return BigInt::zero();
    }
    if u64::from(digits) > numerator.bits() + 1 {
        return negligible(numerator.is_negative(), mode);
    }
    round_quotient(numerator, &pow10(digits), mode)
}

/// Divide `numerator` by `denominator` and round the quotient to an integer.
///
/// `denominator` must be non-zero.
pub(crate) fn round_quotient(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> BigInt {
    let negative = numerator.is_negative() != denominator.is_negative();

    if numerator.is_zero() {
        return BigInt::zero();
    }
    // |q| < 1/2
    if denominator.bits() > numerator.bits() + 1 {
        return negligible(negative, mode);
    }

    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return quotient;
    }

    let away = match mode {
        RoundingMode::TowardZero => false,
        RoundingMode::Floor => negative,
        RoundingMode::Ceiling => !negative,
        RoundingMode::HalfAwayFromZero | RoundingMode::HalfEven | RoundingMode::HalfTowardZero => {
            let twice = remainder.abs() << 1usize;
            match twice.cmp(&denominator.abs()) {
                Ordering::Less => false,
                Ordering::Greater => true,
                Ordering::Equal => match mode {
                    RoundingMode::HalfAwayFromZero => true,
                    RoundingMode::HalfTowardZero => false,
                    _ => quotient.is_odd(),
                },
            }
        },
    };

    match (away, negative) {
        (false, _) => quotient,
        (true, false) => quotient + 1,
        (true, true) => quotient - 1,
    }
}

// ============================================================================
// Cash Rounding
// ============================================================================

/// Supported cash (Swedish) rounding intervals, in hundredths of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CashInterval {
    /// 5 cent rounding: 3.43 -> 3.45
    Five,
    /// 10 cent rounding, halves away from zero: 3.45 -> 3.50
    Ten,
    /// 10 cent rounding, halves toward zero: 3.45 -> 3.40
    TenHalfDown,
    /// 25 cent rounding: 3.41 -> 3.50
    TwentyFive,
    /// 50 cent rounding: 3.75 -> 4.00
    Fifty,
    /// Whole unit rounding: 3.50 -> 4.00
    Hundred,
}

impl CashInterval {
    /// How many steps fit into one whole unit.
    pub(crate) const fn steps_per_unit(self) -> u32 {
        match self {
            CashInterval::Five => 20,
            CashInterval::Ten | CashInterval::TenHalfDown => 10,
            CashInterval::TwentyFive => 4,
            CashInterval::Fifty => 2,
            CashInterval::Hundred => 1,
        }
    }

    /// Size of one step in hundredths.
    pub(crate) const fn step_hundredths(self) -> u32 {
        100 / self.steps_per_unit()
    }

    pub(crate) const fn mode(self) -> RoundingMode {
        match self {
            CashInterval::TenHalfDown => RoundingMode::HalfTowardZero,
            _ => RoundingMode::HalfAwayFromZero,
        }
    }
}

impl TryFrom<u8> for CashInterval {
    type Error = NumericError;

    fn try_from(interval: u8) -> Result<Self, Self::Error> {
        match interval {
            5 => Ok(CashInterval::Five),
            10 => Ok(CashInterval::Ten),
            15 => Ok(CashInterval::TenHalfDown),
            25 => Ok(CashInterval::TwentyFive),
            50 => Ok(CashInterval::Fifty),
            100 => Ok(CashInterval::Hundred),
            other => Err(NumericError::InvalidCashInterval(other)),
        }
    }
}
