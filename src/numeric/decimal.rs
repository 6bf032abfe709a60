// ============================================================================
// Arbitrary-Precision Decimal
// Exact base-10 arithmetic over an unbounded coefficient and an i32 exponent
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::{pow10, round_pow10, CashInterval, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

/// Arbitrary-precision signed decimal.
///
/// Represents `coefficient × 10^exponent`. Construction never loses precision,
/// and add/sub/mul are exact. Equality, ordering and hashing are by the
/// represented value, so `1200e-2 == 12e0`.
///
/// # Example
/// ```
/// use fixed_money::numeric::Decimal;
///
/// let price: Decimal = "19.99".parse().unwrap();
/// let qty = Decimal::new(3, 0);
/// assert_eq!((&price * &qty).to_string(), "59.97");
/// ```
#[derive(Clone)]
pub struct Decimal {
    coefficient: BigInt,
    exponent: i32,
}

// ============================================================================
// Division Precision
// ============================================================================

/// Exponent passed to [`Decimal::from_f64_with_exponent`] to convert without rounding.
pub const EXACT_F64_EXPONENT: i32 = i32::MIN;

/// Fractional digits kept by [`Decimal::div`] when no explicit precision is given.
pub const DEFAULT_DIVISION_PRECISION: u32 = 20;

static DIVISION_PRECISION: AtomicU32 = AtomicU32::new(DEFAULT_DIVISION_PRECISION);

/// Current process-wide division precision.
#[inline]
pub fn division_precision() -> u32 {
    DIVISION_PRECISION.load(AtomicOrdering::Relaxed)
}

/// Override the process-wide division precision.
///
/// Affects every later call to `div` on any thread; explicit `div_round`
/// calls are unaffected.
pub fn set_division_precision(precision: u32) {
    let previous = DIVISION_PRECISION.swap(precision, AtomicOrdering::Relaxed);
    if previous != precision {
        tracing::debug!(previous, precision, "division precision changed");
    }
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// `value × 10^exponent`
    #[inline]
    pub fn new(value: i64, exponent: i32) -> Self {
        Self {
            coefficient: BigInt::from(value),
            exponent,
        }
    }

    /// `value × 10^exponent` for an unbounded coefficient.
    #[inline]
    pub fn from_bigint(value: BigInt, exponent: i32) -> Self {
        Self {
            coefficient: value,
            exponent,
        }
    }

    /// Zero at exponent 0.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// One at exponent 0.
    #[inline]
    pub fn one() -> Self {
        Self::new(1, 0)
    }

    /// Convert a float using the shortest decimal that round-trips to it.
    ///
    /// # Panics
    /// Panics on NaN or infinity. Use [`Decimal::try_from_f64`] to get an error instead.
    pub fn from_f64(value: f64) -> Self {
        match Self::try_from_f64(value) {
            Ok(d) => d,
            Err(e) => panic!("{}: {}", e, value),
        }
    }

    /// Fallible form of [`Decimal::from_f64`].
    pub fn try_from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        // f64 Display is the shortest round-trip form and never uses exponent notation
        format!("{}", value).parse()
    }

    /// Convert a float, rounding half away from zero to a multiple of `10^exponent`.
    ///
    /// [`EXACT_F64_EXPONENT`] keeps every digit of the binary value instead.
    ///
    /// ```
    /// use fixed_money::numeric::{Decimal, EXACT_F64_EXPONENT};
    ///
    /// assert_eq!(Decimal::from_f64_with_exponent(123.456, -2).to_string(), "123.46");
    /// assert_eq!(Decimal::from_f64_with_exponent(0.375, EXACT_F64_EXPONENT).to_string(), "0.375");
    /// ```
    ///
    /// # Panics
    /// Panics on NaN or infinity.
    pub fn from_f64_with_exponent(value: f64, exponent: i32) -> Self {
        match Self::try_from_f64_with_exponent(value, exponent) {
            Ok(d) => d,
            Err(e) => panic!("{}: {}", e, value),
        }
    }

    /// Fallible form of [`Decimal::from_f64_with_exponent`].
    pub fn try_from_f64_with_exponent(value: f64, exponent: i32) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        let exact = Self::from_f64_exact(value);
        match exponent.checked_neg() {
            Some(places) => Ok(exact.round_with(places, RoundingMode::HalfAwayFromZero)),
            None => Ok(exact),
        }
    }

    /// Exact value of a finite IEEE-754 double (`n / 2^k` becomes `n * 5^k * 10^-k`).
    fn from_f64_exact(value: f64) -> Self {
        if value == 0.0 {
            return Self::zero();
        }

        let bits = value.to_bits();
        let negative = (bits >> 63) != 0;
        let exponent_bits = ((bits >> 52) & 0x7ff) as i32;
        let fraction_bits = bits & ((1u64 << 52) - 1);

        let (mut numerator, exponent_two) = if exponent_bits == 0 {
            (BigInt::from(fraction_bits), -1074)
        } else {
            (BigInt::from(fraction_bits | (1u64 << 52)), exponent_bits - 1075)
        };

        let mut exponent_ten = 0i32;
        if exponent_two >= 0 {
            numerator <<= exponent_two as usize;
        } else {
            let power = exponent_two.unsigned_abs();
            numerator *= BigInt::from(5u8).pow(power);
            exponent_ten = exponent_two;
        }
        if negative {
            numerator = -numerator;
        }
        Self::from_bigint(numerator, exponent_ten)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled coefficient (a copy; mutating it does not affect `self`).
    #[inline]
    pub fn coefficient(&self) -> BigInt {
        self.coefficient.clone()
    }

    /// The base-10 exponent (scale) of the coefficient.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// -1, 0 or +1
    #[inline]
    pub fn sign(&self) -> i32 {
        match self.coefficient.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.coefficient.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Integer part, truncated toward zero.
    pub fn int_part(&self) -> BigInt {
        if self.exponent >= 0 {
            &self.coefficient * pow10(self.exponent.unsigned_abs())
        } else {
            &self.coefficient / pow10(self.exponent.unsigned_abs())
        }
    }

    /// Integer part as an i64, or `None` if it does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        self.int_part().to_i64()
    }

    /// Nearest f64 and whether it represents `self` exactly.
    pub fn to_f64(&self) -> (f64, bool) {
        let value = self.to_plain_string(true).parse::<f64>().unwrap_or(f64::NAN);
        let exact = value.is_finite() && Self::from_f64_exact(value) == *self;
        (value, exact)
    }

    /// Exact rational form `(numerator, denominator)` in lowest terms, denominator > 0.
    pub fn rat(&self) -> (BigInt, BigInt) {
        if self.exponent >= 0 {
            return (self.int_part(), BigInt::from(1));
        }
        let denominator = pow10(self.exponent.unsigned_abs());
        let gcd = self.coefficient.gcd(&denominator);
        (&self.coefficient / &gcd, denominator / gcd)
    }

    /// Same value with trailing zeros moved from the coefficient into the exponent.
    pub fn normalized(&self) -> Self {
        if self.coefficient.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u32);
        let mut coefficient = self.coefficient.clone();
        let mut exponent = self.exponent;
        while exponent < i32::MAX {
            let (quotient, remainder) = coefficient.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            coefficient = quotient;
            exponent += 1;
        }
        Self::from_bigint(coefficient, exponent)
    }

    // ========================================================================
    // Scaling
    // ========================================================================

    /// Coefficient re-expressed at `exponent`, which must not exceed `self.exponent`.
    fn scaled_to(&self, exponent: i32) -> BigInt {
        debug_assert!(exponent <= self.exponent);
        let diff = (i64::from(self.exponent) - i64::from(exponent)) as u32;
        if diff == 0 {
            self.coefficient.clone()
        } else {
            &self.coefficient * pow10(diff)
        }
    }

    /// Both coefficients at the smaller exponent, plus that exponent.
    fn aligned(&self, other: &Self) -> (BigInt, BigInt, i32) {
        let exponent = self.exponent.min(other.exponent);
        (self.scaled_to(exponent), other.scaled_to(exponent), exponent)
    }

    /// Add `shift` to the exponent, leaving the coefficient untouched.
    pub fn checked_shift(&self, shift: i32) -> NumericResult<Self> {
        let exponent = self
            .exponent
            .checked_add(shift)
            .ok_or(NumericError::ExponentOverflow)?;
        Ok(Self::from_bigint(self.coefficient.clone(), exponent))
    }

    /// # Panics
    /// Panics if the exponent overflows.
    pub fn shift(&self, shift: i32) -> Self {
        self.checked_shift(shift).unwrap_or_else(|e| panic!("{}", e))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact sum at `min(e1, e2)`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (a, b, exponent) = self.aligned(rhs);
        Self::from_bigint(a + b, exponent)
    }

    /// Exact difference at `min(e1, e2)`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (a, b, exponent) = self.aligned(rhs);
        Self::from_bigint(a - b, exponent)
    }

    /// Exact product at `e1 + e2`.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let exponent = self
            .exponent
            .checked_add(rhs.exponent)
            .ok_or(NumericError::ExponentOverflow)?;
        Ok(Self::from_bigint(&self.coefficient * &rhs.coefficient, exponent))
    }

    /// # Panics
    /// Panics if the exponent overflows.
    pub fn mul(&self, rhs: &Self) -> Self {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{}", e))
    }

    #[inline]
    pub fn neg(&self) -> Self {
        Self::from_bigint(-&self.coefficient, self.exponent)
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self::from_bigint(self.coefficient.abs(), self.exponent)
    }

    /// Division with remainder.
    ///
    /// Returns `(q, r)` with `self = rhs * q + r`, `q` an integer multiple of
    /// `10^-precision`, and `|r| < |rhs| * 10^-precision` with the sign of `self`.
    /// Negative `precision` is allowed.
    pub fn checked_quo_rem(&self, rhs: &Self, precision: i32) -> NumericResult<(Self, Self)> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let scale = -i64::from(precision);
        let shift = i64::from(self.exponent) - i64::from(rhs.exponent) - scale;
        let scale = i32::try_from(scale).map_err(|_| NumericError::ExponentOverflow)?;
        if i32::try_from(shift).is_err() {
            return Err(NumericError::ExponentOverflow);
        }

        // self = a·10^ea, rhs = b·10^eb
        let (dividend, divisor, remainder_exponent) = if shift < 0 {
            let factor = pow10(shift.unsigned_abs() as u32);
            (self.coefficient.clone(), &rhs.coefficient * factor, self.exponent)
        } else {
            let factor = pow10(shift as u32);
            let remainder_exponent = scale
                .checked_add(rhs.exponent)
                .ok_or(NumericError::ExponentOverflow)?;
            (&self.coefficient * factor, rhs.coefficient.clone(), remainder_exponent)
        };

        let (quotient, remainder) = dividend.div_rem(&divisor);
        Ok((
            Self::from_bigint(quotient, scale),
            Self::from_bigint(remainder, remainder_exponent),
        ))
    }

    /// # Panics
    /// Panics on division by zero.
    pub fn quo_rem(&self, rhs: &Self, precision: i32) -> (Self, Self) {
        self.checked_quo_rem(rhs, precision)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Divide and round half away from zero to `precision` fractional digits.
    pub fn checked_div_round(&self, rhs: &Self, precision: i32) -> NumericResult<Self> {
        let (quotient, remainder) = self.checked_quo_rem(rhs, precision)?;

        // compare 2·|r|·10^precision against |rhs| instead of r·10^precision against rhs/2
        let twice_remainder = Self::from_bigint(
            remainder.coefficient.abs() << 1usize,
            remainder
                .exponent
                .checked_add(precision)
                .ok_or(NumericError::ExponentOverflow)?,
        );
        if twice_remainder.cmp(&rhs.abs()) == Ordering::Less {
            return Ok(quotient);
        }

        let unit = Self::new(1, quotient.exponent);
        if self.sign() * rhs.sign() < 0 {
            Ok(quotient.sub(&unit))
        } else {
            Ok(quotient.add(&unit))
        }
    }

    /// # Panics
    /// Panics on division by zero.
    pub fn div_round(&self, rhs: &Self, precision: i32) -> Self {
        self.checked_div_round(rhs, precision)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Divide using the process-wide [`division_precision`].
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        let precision =
            i32::try_from(division_precision()).map_err(|_| NumericError::ExponentOverflow)?;
        self.checked_div_round(rhs, precision)
    }

    /// # Panics
    /// Panics on division by zero.
    pub fn div(&self, rhs: &Self) -> Self {
        self.checked_div(rhs).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Remainder of `quo_rem(rhs, 0)`.
    pub fn checked_rem(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_quo_rem(rhs, 0).map(|(_, remainder)| remainder)
    }

    /// # Panics
    /// Panics on division by zero.
    pub fn rem(&self, rhs: &Self) -> Self {
        self.checked_rem(rhs).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Raise to the integer part of `exponent`.
    ///
    /// Negative powers divide one by the positive power at the process-wide precision.
    pub fn checked_pow(&self, exponent: &Self) -> NumericResult<Self> {
        let n = exponent.to_i64().ok_or(NumericError::ExponentOverflow)?;
        self.checked_powi(n)
    }

    /// # Panics
    /// Panics on exponent overflow or on a negative power of zero.
    pub fn pow(&self, exponent: &Self) -> Self {
        self.checked_pow(exponent).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Raise to an integer power.
    pub fn checked_powi(&self, n: i64) -> NumericResult<Self> {
        if n == 0 {
            return Ok(Self::one());
        }
        let power = u32::try_from(n.unsigned_abs()).map_err(|_| NumericError::ExponentOverflow)?;
        let exponent = i64::from(self.exponent) * i64::from(power);
        let exponent = i32::try_from(exponent).map_err(|_| NumericError::ExponentOverflow)?;
        let positive = Self::from_bigint(self.coefficient.pow(power), exponent);
        if n > 0 {
            Ok(positive)
        } else {
            Self::one().checked_div(&positive)
        }
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `places` fractional digits with the given mode.
    ///
    /// The result always has exponent `-places`; negative `places` rounds into
    /// the integer part (tens, hundreds, ...).
    pub fn round_with(&self, places: i32, mode: RoundingMode) -> Self {
        let target = places.checked_neg().unwrap_or(i32::MAX);
        if target <= self.exponent {
            return Self::from_bigint(self.scaled_to(target), target);
        }
        let digits = (i64::from(target) - i64::from(self.exponent)) as u32;
        Self::from_bigint(round_pow10(&self.coefficient, digits, mode), target)
    }

    /// Round half away from zero.
    ///
    /// ```
    /// use fixed_money::numeric::Decimal;
    ///
    /// assert_eq!(Decimal::new(545, -2).round(1).to_string(), "5.5");
    /// assert_eq!(Decimal::new(545, 0).round(-1).to_string(), "550");
    /// ```
    pub fn round(&self, places: i32) -> Self {
        self.round_with(places, RoundingMode::HalfAwayFromZero)
    }

    /// Round half to even (banker's rounding).
    ///
    /// ```
    /// use fixed_money::numeric::Decimal;
    ///
    /// assert_eq!(Decimal::new(545, -2).round_bank(1).to_string(), "5.4");
    /// assert_eq!(Decimal::new(555, -2).round_bank(1).to_string(), "5.6");
    /// assert_eq!(Decimal::new(545, 0).round_bank(-1).to_string(), "540");
    /// ```
    pub fn round_bank(&self, places: i32) -> Self {
        self.round_with(places, RoundingMode::HalfEven)
    }

    /// Cash (Swedish) rounding to one of the supported intervals.
    ///
    /// The result always carries two fractional digits.
    pub fn checked_round_cash(&self, interval: u8) -> NumericResult<Self> {
        let interval = CashInterval::try_from(interval)?;
        let steps = self.mul(&Self::new(i64::from(interval.steps_per_unit()), 0));
        let units = steps.round_with(0, interval.mode()).coefficient;
        Ok(Self::from_bigint(
            units * interval.step_hundredths(),
            -2,
        ))
    }

    /// # Panics
    /// Panics on an interval outside {5, 10, 15, 25, 50, 100}.
    pub fn round_cash(&self, interval: u8) -> Self {
        self.checked_round_cash(interval)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Nearest integer less than or equal to `self`.
    pub fn floor(&self) -> Self {
        if self.exponent >= 0 {
            return self.clone();
        }
        self.round_with(0, RoundingMode::Floor)
    }

    /// Nearest integer greater than or equal to `self`.
    pub fn ceil(&self) -> Self {
        if self.exponent >= 0 {
            return self.clone();
        }
        self.round_with(0, RoundingMode::Ceiling)
    }

    /// Drop digits beyond `precision` fractional places without rounding.
    ///
    /// Values that already have `precision` or fewer places are returned unchanged.
    pub fn truncate(&self, precision: i32) -> Self {
        if precision >= 0 && -precision > self.exponent {
            return self.round_with(precision, RoundingMode::TowardZero);
        }
        self.clone()
    }

    // ========================================================================
    // String Output
    // ========================================================================

    fn to_plain_string(&self, trim_trailing_zeros: bool) -> String {
        let digits = self.coefficient.magnitude().to_string();
        let mut out = String::with_capacity(digits.len() + 2);
        if self.is_negative() {
            out.push('-');
        }

        if self.exponent >= 0 {
            out.push_str(&digits);
            if !self.is_zero() {
                out.extend(std::iter::repeat('0').take(self.exponent.unsigned_abs() as usize));
            }
            return out;
        }

        let fraction_len = self.exponent.unsigned_abs() as usize;
        let (int_part, fraction) = if digits.len() > fraction_len {
            let (int_part, fraction) = digits.split_at(digits.len() - fraction_len);
            (int_part.to_string(), fraction.to_string())
        } else {
            let padding = "0".repeat(fraction_len - digits.len());
            ("0".to_string(), padding + &digits)
        };

        out.push_str(&int_part);
        let fraction = if trim_trailing_zeros {
            fraction.trim_end_matches('0')
        } else {
            fraction.as_str()
        };
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Fixed-point string rounded half away from zero to `places` digits.
    ///
    /// ```
    /// use fixed_money::numeric::Decimal;
    ///
    /// assert_eq!(Decimal::zero().string_fixed(2), "0.00");
    /// assert_eq!(Decimal::new(545, -2).string_fixed(3), "5.450");
    /// assert_eq!(Decimal::new(545, 0).string_fixed(-1), "550");
    /// ```
    pub fn string_fixed(&self, places: i32) -> String {
        self.round(places).to_plain_string(false)
    }

    /// Fixed-point string with banker's rounding.
    pub fn string_fixed_bank(&self, places: i32) -> String {
        self.round_bank(places).to_plain_string(false)
    }

    /// Fixed-point string after cash rounding.
    ///
    /// # Panics
    /// Panics on an unsupported interval.
    pub fn string_fixed_cash(&self, interval: u8) -> String {
        self.round_cash(interval).to_plain_string(false)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.exponent == other.exponent {
            return self.coefficient.cmp(&other.coefficient);
        }
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => {
                let (a, b, _) = self.aligned(other);
                a.cmp(&b)
            },
            unequal => unequal,
        }
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.coefficient.hash(state);
        normalized.exponent.hash(state);
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:path) => {
        impl std::ops::$trait<&Decimal> for &Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: &Decimal) -> Decimal {
                $inherent(self, rhs)
            }
        }

        impl std::ops::$trait for Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: Decimal) -> Decimal {
                $inherent(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, Decimal::add);
forward_binop!(Sub, sub, Decimal::sub);
forward_binop!(Mul, mul, Decimal::mul);
forward_binop!(Div, div, Decimal::div);
forward_binop!(Rem, rem, Decimal::rem);

impl std::ops::Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal::neg(&self)
    }
}

impl std::ops::Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        Decimal::neg(self)
    }
}

impl From<i64> for Decimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<BigInt> for Decimal {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::from_bigint(value, 0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}e{})", self.coefficient, self.exponent)
    }
}

/// Plain decimal form with trailing fractional zeros removed: `-12.345`, `1200`.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string(true))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse a decimal string.
    ///
    /// # Examples
    /// - "-123.45" -> -12345e-2
    /// - ".0001" -> 1e-4
    /// - "1.5e3" -> 15e2
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (mantissa, exponent) = match s.find(|c| c == 'e' || c == 'E') {
            Some(pos) => {
                let exponent: i32 = s[pos + 1..]
                    .parse()
                    .map_err(|_| NumericError::InvalidInput)?;
                (&s[..pos], i64::from(exponent))
            },
            None => (s, 0),
        };

        let (int_str, frac_str) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        let digits = format!("{}{}", int_str, frac_str);
        let coefficient =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::InvalidInput)?;
        let exponent = i32::try_from(exponent - frac_str.len() as i64)
            .map_err(|_| NumericError::InvalidInput)?;

        let coefficient = if negative { -coefficient } else { coefficient };
        Ok(Self::from_bigint(coefficient, exponent))
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for Decimal {
    fn from(d: rust_decimal::Decimal) -> Self {
        let scale = i32::try_from(d.scale()).unwrap_or(i32::MAX);
        Self::from_bigint(BigInt::from(d.mantissa()), -scale)
    }
}

impl Decimal {
    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Digits past the 28th fractional place are banker-rounded away.
    /// Returns `None` if the value does not fit in 96 bits.
    pub fn to_rust_decimal(&self) -> Option<rust_decimal::Decimal> {
        const MAX_SCALE: i32 = 28;

        let value = if self.exponent < -MAX_SCALE {
            self.round_bank(MAX_SCALE)
        } else {
            self.clone()
        };
        let (mantissa, scale) = if value.exponent > 0 {
            (value.int_part(), 0)
        } else {
            (value.coefficient.clone(), value.exponent.unsigned_abs())
        };
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa.to_i128()?, scale).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
