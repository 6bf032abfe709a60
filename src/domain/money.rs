// ============================================================================
// Money Value Type
// Decimal amount bound to a currency, with the same-currency invariant
// ============================================================================

use super::currency::Currency;
use super::errors::{MoneyError, MoneyResult};
use crate::interfaces::CurrencyLookup;
use crate::numeric::Decimal;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable amount in a specific currency.
///
/// Every binary operation requires both operands to share a currency code.
/// Mixing currencies is a programming error: the `checked_*` forms return a
/// fatal [`MoneyError::CurrencyMismatch`] and every other form panics.
///
/// # Example
/// ```
/// use fixed_money::prelude::*;
///
/// let registry = CurrencyRegistry::with_builtin();
/// let price = Money::parse(&registry, "USD", "19.99").unwrap();
/// let fee = Money::new(&registry, "USD", 150, -2).unwrap();
///
/// let total = &price + &fee;
/// assert_eq!(total.format_currency(), "$21.49");
/// ```
#[derive(Clone)]
pub struct Money {
    amount: Decimal,
    currency: Arc<Currency>,
}

/// Resolve `code` or report it as unsupported.
fn resolve<L: CurrencyLookup + ?Sized>(lookup: &L, code: &str) -> MoneyResult<Arc<Currency>> {
    lookup.lookup(code).ok_or_else(|| {
        tracing::debug!(code, "unsupported currency");
        MoneyError::UnsupportedCurrency(code.to_string())
    })
}

/// Turn a fatal error into a panic, pass reported errors through.
fn escalate(e: MoneyError) -> MoneyError {
    if e.is_fatal() {
        panic!("{}", e)
    }
    e
}

#[inline]
fn fatal<T>(result: MoneyResult<T>) -> T {
    result.unwrap_or_else(|e| panic!("{}", e))
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// `value × 10^exponent` in the currency `code`.
    pub fn new<L: CurrencyLookup + ?Sized>(
        lookup: &L,
        code: &str,
        value: i64,
        exponent: i32,
    ) -> MoneyResult<Self> {
        let currency = resolve(lookup, code)?;
        Ok(Self::from_decimal(Decimal::new(value, exponent), currency))
    }

    /// `value × 10^exponent` for an unbounded coefficient.
    pub fn from_bigint<L: CurrencyLookup + ?Sized>(
        lookup: &L,
        code: &str,
        value: BigInt,
        exponent: i32,
    ) -> MoneyResult<Self> {
        let currency = resolve(lookup, code)?;
        Ok(Self::from_decimal(Decimal::from_bigint(value, exponent), currency))
    }

    /// Parse a decimal string such as `"-123.45"` or `".0001"`.
    pub fn parse<L: CurrencyLookup + ?Sized>(
        lookup: &L,
        code: &str,
        value: &str,
    ) -> MoneyResult<Self> {
        let currency = resolve(lookup, code)?;
        let amount = value
            .parse::<Decimal>()
            .map_err(|_| MoneyError::InvalidAmount(value.to_string()))?;
        Ok(Self::from_decimal(amount, currency))
    }

    /// # Panics
    /// Panics where [`Money::parse`] would return an error.
    pub fn require_parse<L: CurrencyLookup + ?Sized>(lookup: &L, code: &str, value: &str) -> Self {
        fatal(Self::parse(lookup, code, value))
    }

    /// Convert a float using its shortest round-trip decimal form.
    ///
    /// # Panics
    /// Panics on NaN or infinity; an unknown code is a reported error.
    pub fn from_f64<L: CurrencyLookup + ?Sized>(
        lookup: &L,
        code: &str,
        value: f64,
    ) -> MoneyResult<Self> {
        Self::checked_from_f64(lookup, code, value).map_err(escalate)
    }

    /// Non-panicking form of [`Money::from_f64`].
    pub fn checked_from_f64<L: CurrencyLookup + ?Sized>(
        lookup: &L,
        code: &str,
        value: f64,
    ) -> MoneyResult<Self> {
        let amount = Decimal::try_from_f64(value)?;
        let currency = resolve(lookup, code)?;
        Ok(Self::from_decimal(amount, currency))
    }

    /// Convert a float rounded half away from zero to a multiple of `10^exponent`.
    ///
    /// [`EXACT_F64_EXPONENT`](crate::numeric::EXACT_F64_EXPONENT) converts without rounding.
    ///
    /// # Panics
    /// Panics on NaN or infinity.
    pub fn from_f64_with_exponent<L: CurrencyLookup + ?Sized>(
        lookup: &L,
        code: &str,
        value: f64,
        exponent: i32,
    ) -> MoneyResult<Self> {
        Self::checked_from_f64_with_exponent(lookup, code, value, exponent).map_err(escalate)
    }

    pub fn checked_from_f64_with_exponent<L: CurrencyLookup + ?Sized>(
        lookup: &L,
        code: &str,
        value: f64,
        exponent: i32,
    ) -> MoneyResult<Self> {
        let amount = Decimal::try_from_f64_with_exponent(value, exponent)?;
        let currency = resolve(lookup, code)?;
        Ok(Self::from_decimal(amount, currency))
    }

    /// Pair an amount with an already-resolved currency.
    #[inline]
    pub fn from_decimal(amount: Decimal, currency: Arc<Currency>) -> Self {
        Self { amount, currency }
    }

    /// An amount whose currency is not known yet.
    pub fn unknown(amount: Decimal) -> Self {
        Self::from_decimal(amount, Currency::unknown())
    }

    /// Zero in the bad-currency marker.
    pub(crate) fn bad() -> Self {
        Self::from_decimal(Decimal::zero(), Currency::bad())
    }

    /// Assign the real currency to a value created while it was unknown.
    ///
    /// Re-assigning an already resolved currency is a reported error.
    pub fn update_currency<L: CurrencyLookup + ?Sized>(
        &mut self,
        lookup: &L,
        code: &str,
    ) -> MoneyResult<()> {
        if !self.currency.is_unknown() {
            tracing::warn!(
                current = %self.currency.code,
                requested = code,
                "rejected currency update"
            );
            return Err(MoneyError::CurrencyAlreadySet {
                current: self.currency.code.clone(),
                requested: code.to_string(),
            });
        }
        self.currency = resolve(lookup, code)?;
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn amount(&self) -> &Decimal {
        &self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    #[inline]
    pub fn currency_code(&self) -> &str {
        &self.currency.code
    }

    /// -1, 0 or +1
    #[inline]
    pub fn sign(&self) -> i32 {
        self.amount.sign()
    }

    #[inline]
    pub fn exponent(&self) -> i32 {
        self.amount.exponent()
    }

    /// Copy of the unscaled coefficient.
    #[inline]
    pub fn coefficient(&self) -> BigInt {
        self.amount.coefficient()
    }

    /// Integer part, truncated toward zero.
    pub fn int_part(&self) -> BigInt {
        self.amount.int_part()
    }

    /// Exact `(numerator, denominator)` in lowest terms.
    pub fn rat(&self) -> (BigInt, BigInt) {
        self.amount.rat()
    }

    /// Nearest f64 and whether it is exact.
    pub fn to_f64(&self) -> (f64, bool) {
        self.amount.to_f64()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    #[inline]
    fn with_amount(&self, amount: Decimal) -> Self {
        Self::from_decimal(amount, Arc::clone(&self.currency))
    }

    fn ensure_same_currency(&self, other: &Money, operation: &'static str) -> MoneyResult<()> {
        if self.currency.code == other.currency.code {
            return Ok(());
        }
        Err(MoneyError::CurrencyMismatch {
            operation,
            left: self.currency.code.clone(),
            right: other.currency.code.clone(),
        })
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    pub fn checked_add(&self, rhs: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(rhs, "add")?;
        Ok(self.with_amount(self.amount.add(&rhs.amount)))
    }

    /// # Panics
    /// Panics on a currency mismatch.
    pub fn add(&self, rhs: &Money) -> Money {
        fatal(self.checked_add(rhs))
    }

    pub fn checked_sub(&self, rhs: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(rhs, "subtract")?;
        Ok(self.with_amount(self.amount.sub(&rhs.amount)))
    }

    /// # Panics
    /// Panics on a currency mismatch.
    pub fn sub(&self, rhs: &Money) -> Money {
        fatal(self.checked_sub(rhs))
    }

    pub fn checked_mul(&self, rhs: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(rhs, "multiply")?;
        Ok(self.with_amount(self.amount.checked_mul(&rhs.amount)?))
    }

    /// # Panics
    /// Panics on a currency mismatch.
    pub fn mul(&self, rhs: &Money) -> Money {
        fatal(self.checked_mul(rhs))
    }

    /// Divide and round half away from zero to `precision` fractional digits.
    pub fn checked_div_round(&self, rhs: &Money, precision: i32) -> MoneyResult<Money> {
        self.ensure_same_currency(rhs, "divide")?;
        Ok(self.with_amount(self.amount.checked_div_round(&rhs.amount, precision)?))
    }

    /// # Panics
    /// Panics on a currency mismatch or division by zero.
    pub fn div_round(&self, rhs: &Money, precision: i32) -> Money {
        fatal(self.checked_div_round(rhs, precision))
    }

    /// Divide at the process-wide division precision.
    pub fn checked_div(&self, rhs: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(rhs, "divide")?;
        Ok(self.with_amount(self.amount.checked_div(&rhs.amount)?))
    }

    /// # Panics
    /// Panics on a currency mismatch or division by zero.
    pub fn div(&self, rhs: &Money) -> Money {
        fatal(self.checked_div(rhs))
    }

    /// Division with remainder; see [`Decimal::checked_quo_rem`].
    pub fn checked_quo_rem(&self, rhs: &Money, precision: i32) -> MoneyResult<(Money, Money)> {
        self.ensure_same_currency(rhs, "divide")?;
        let (quotient, remainder) = self.amount.checked_quo_rem(&rhs.amount, precision)?;
        Ok((self.with_amount(quotient), self.with_amount(remainder)))
    }

    /// # Panics
    /// Panics on a currency mismatch or division by zero.
    pub fn quo_rem(&self, rhs: &Money, precision: i32) -> (Money, Money) {
        fatal(self.checked_quo_rem(rhs, precision))
    }

    /// Remainder of an integer quotient.
    pub fn checked_rem(&self, rhs: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(rhs, "modulo")?;
        Ok(self.with_amount(self.amount.checked_rem(&rhs.amount)?))
    }

    /// # Panics
    /// Panics on a currency mismatch or division by zero.
    pub fn rem(&self, rhs: &Money) -> Money {
        fatal(self.checked_rem(rhs))
    }

    /// Raise to the integer part of `rhs`.
    pub fn checked_pow(&self, rhs: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(rhs, "take power of")?;
        Ok(self.with_amount(self.amount.checked_pow(&rhs.amount)?))
    }

    /// # Panics
    /// Panics on a currency mismatch.
    pub fn pow(&self, rhs: &Money) -> Money {
        fatal(self.checked_pow(rhs))
    }

    #[inline]
    pub fn neg(&self) -> Money {
        self.with_amount(self.amount.neg())
    }

    #[inline]
    pub fn abs(&self) -> Money {
        self.with_amount(self.amount.abs())
    }

    /// Add `shift` to the exponent.
    pub fn shift(&self, shift: i32) -> Money {
        self.with_amount(self.amount.shift(shift))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    pub fn checked_cmp(&self, rhs: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(rhs, "compare")?;
        Ok(self.amount.cmp(&rhs.amount))
    }

    /// Compare two amounts of the same currency.
    ///
    /// # Panics
    /// Panics on a currency mismatch, as do the `<`, `>`, `<=` and `>=` operators.
    pub fn compare(&self, rhs: &Money) -> Ordering {
        fatal(self.checked_cmp(rhs))
    }

    pub fn equal(&self, rhs: &Money) -> bool {
        self.compare(rhs) == Ordering::Equal
    }

    pub fn greater_than(&self, rhs: &Money) -> bool {
        self.compare(rhs) == Ordering::Greater
    }

    pub fn greater_than_or_equal(&self, rhs: &Money) -> bool {
        self.compare(rhs) != Ordering::Less
    }

    pub fn less_than(&self, rhs: &Money) -> bool {
        self.compare(rhs) == Ordering::Less
    }

    pub fn less_than_or_equal(&self, rhs: &Money) -> bool {
        self.compare(rhs) != Ordering::Greater
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round half away from zero to `places` fractional digits.
    pub fn round(&self, places: i32) -> Money {
        self.with_amount(self.amount.round(places))
    }

    /// Round half to even to `places` fractional digits.
    pub fn round_bank(&self, places: i32) -> Money {
        self.with_amount(self.amount.round_bank(places))
    }

    /// Cash rounding to 5, 10, 15, 25, 50 or 100 hundredths.
    pub fn checked_round_cash(&self, interval: u8) -> MoneyResult<Money> {
        Ok(self.with_amount(self.amount.checked_round_cash(interval)?))
    }

    /// # Panics
    /// Panics on an unsupported interval.
    pub fn round_cash(&self, interval: u8) -> Money {
        fatal(self.checked_round_cash(interval))
    }

    pub fn floor(&self) -> Money {
        self.with_amount(self.amount.floor())
    }

    pub fn ceil(&self) -> Money {
        self.with_amount(self.amount.ceil())
    }

    /// Drop digits past `precision` fractional places without rounding.
    pub fn truncate(&self, precision: i32) -> Money {
        self.with_amount(self.amount.truncate(precision))
    }

    // ========================================================================
    // String Output
    // ========================================================================

    /// Plain string rounded half away from zero, no symbol or grouping.
    pub fn string_fixed(&self, places: i32) -> String {
        self.amount.string_fixed(places)
    }

    pub fn string_fixed_bank(&self, places: i32) -> String {
        self.amount.string_fixed_bank(places)
    }

    /// # Panics
    /// Panics on an unsupported interval.
    pub fn string_fixed_cash(&self, interval: u8) -> String {
        self.amount.string_fixed_cash(interval)
    }

    /// Symbol, grouping and minus sign per the currency: `-$1,234.50`.
    pub fn format_currency(&self) -> String {
        self.currency.formatter().format_currency(&self.amount)
    }

    /// No symbol, no grouping, negatives in brackets: `(1234.50)`.
    pub fn format_accounting(&self) -> String {
        self.currency.formatter().format_accounting(&self.amount)
    }

    pub fn checked_format_cash(&self, interval: u8) -> MoneyResult<String> {
        Ok(self
            .currency
            .formatter()
            .checked_format_cash(&self.amount, interval)?)
    }

    /// [`Money::format_currency`] after cash rounding.
    ///
    /// # Panics
    /// Panics on an unsupported interval.
    pub fn format_cash(&self, interval: u8) -> String {
        fatal(self.checked_format_cash(interval))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Money {
    /// Zero in the unknown currency
    fn default() -> Self {
        Self::unknown(Decimal::zero())
    }
}

/// Same currency code and same represented value.
impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency.code == other.currency.code && self.amount == other.amount
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.code.hash(state);
        self.amount.hash(state);
    }
}

/// Ordering across currencies is a contract violation and panics.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.less_than(other)
    }

    fn le(&self, other: &Self) -> bool {
        self.less_than_or_equal(other)
    }

    fn gt(&self, other: &Self) -> bool {
        self.greater_than(other)
    }

    fn ge(&self, other: &Self) -> bool {
        self.greater_than_or_equal(other)
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:path) => {
        impl std::ops::$trait<&Money> for &Money {
            type Output = Money;

            #[inline]
            fn $method(self, rhs: &Money) -> Money {
                $inherent(self, rhs)
            }
        }

        impl std::ops::$trait for Money {
            type Output = Money;

            #[inline]
            fn $method(self, rhs: Money) -> Money {
                $inherent(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, Money::add);
forward_binop!(Sub, sub, Money::sub);
forward_binop!(Mul, mul, Money::mul);
forward_binop!(Div, div, Money::div);
forward_binop!(Rem, rem, Money::rem);

impl std::ops::Neg for Money {
    type Output = Money;

    #[inline]
    fn neg(self) -> Money {
        Money::neg(&self)
    }
}

impl std::ops::Neg for &Money {
    type Output = Money;

    #[inline]
    fn neg(self) -> Money {
        Money::neg(self)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({} {})", self.currency.code, self.amount)
    }
}

/// Plain amount without symbol or grouping; use the `format_*` methods for display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrencyRegistry, CurrencyType, BAD_CURRENCY_CODE};
    use crate::numeric::{NumericError, EXACT_F64_EXPONENT};

    fn registry() -> CurrencyRegistry {
        CurrencyRegistry::with_builtin()
    }

    fn usd(value: i64, exponent: i32) -> Money {
        Money::new(&registry(), "USD", value, exponent).unwrap()
    }

    fn eur(value: i64, exponent: i32) -> Money {
        Money::new(&registry(), "EUR", value, exponent).unwrap()
    }

    #[test]
    fn test_constructors() {
        let reg = registry();
        let m = Money::new(&reg, "AUD", -12345, -3).unwrap();
        assert_eq!(m.to_string(), "-12.345");
        assert_eq!(m.currency_code(), "AUD");
        assert_eq!(m.exponent(), -3);
        assert_eq!(m.coefficient(), BigInt::from(-12345));

        let big = Money::from_bigint(&reg, "BTC", BigInt::from(12345678901i64), -8).unwrap();
        assert_eq!(big.to_string(), "123.45678901");

        let parsed = Money::parse(&reg, "AUD", ".0001").unwrap();
        assert_eq!(parsed.exponent(), -4);

        let from_float = Money::from_f64_with_exponent(&reg, "USD", 123.456, -2).unwrap();
        assert_eq!(from_float.to_string(), "123.46");
    }

    #[test]
    fn test_unsupported_currency_is_reported() {
        let err = Money::new(&registry(), "XYZ", 1, 0).unwrap_err();
        assert_eq!(err, MoneyError::UnsupportedCurrency("XYZ".into()));
        assert!(!err.is_fatal());

        let sentinel = err.sentinel();
        assert!(sentinel.is_zero());
        assert_eq!(sentinel.currency_code(), BAD_CURRENCY_CODE);
    }

    #[test]
    fn test_invalid_amount_is_reported() {
        let err = Money::parse(&registry(), "USD", "12,50").unwrap_err();
        assert_eq!(err, MoneyError::InvalidAmount("12,50".into()));
    }

    #[test]
    #[should_panic(expected = "can't convert")]
    fn test_require_parse_panics() {
        Money::require_parse(&registry(), "USD", "abc");
    }

    #[test]
    #[should_panic(expected = "NaN or infinite")]
    fn test_from_f64_nan_panics() {
        let _ = Money::from_f64(&registry(), "USD", f64::NAN);
    }

    #[test]
    fn test_checked_from_f64_reports_non_finite() {
        let err = Money::checked_from_f64(&registry(), "USD", f64::INFINITY).unwrap_err();
        assert_eq!(err, MoneyError::Numeric(NumericError::NonFinite));
        assert!(err.is_fatal());

        // unknown code is still a reported error on the panicking form
        assert!(Money::from_f64(&registry(), "XYZ", 1.5).is_err());
    }

    #[test]
    fn test_from_f64_with_exact_exponent() {
        let m = Money::from_f64_with_exponent(&registry(), "USD", 1.5, EXACT_F64_EXPONENT).unwrap();
        assert_eq!(m.to_string(), "1.5");
        assert_eq!(m.currency_code(), "USD");

        let m = Money::from_f64_with_exponent(&registry(), "USD", -0.25, i32::MIN).unwrap();
        assert_eq!(m.format_currency(), "-$0.25");
    }

    #[test]
    fn test_add_same_currency() {
        assert_eq!(usd(1, 0) + usd(2, 0), usd(3, 0));
        assert_eq!(&usd(150, -2) - &usd(1, 0), usd(5, -1));
    }

    #[test]
    #[should_panic(expected = "cannot add mismatched currencies m1[USD] m2[EUR]")]
    fn test_add_mismatch_panics() {
        let _ = usd(1, 0) + eur(1, 0);
    }

    #[test]
    fn test_checked_mismatch_is_fatal_error() {
        let err = usd(1, 0).checked_sub(&eur(1, 0)).unwrap_err();
        assert!(err.is_fatal());
        assert!(usd(1, 0).checked_mul(&eur(1, 0)).is_err());
        assert!(usd(1, 0).checked_div(&eur(1, 0)).is_err());
        assert!(usd(1, 0).checked_quo_rem(&eur(1, 0), 0).is_err());
        assert!(usd(1, 0).checked_rem(&eur(1, 0)).is_err());
        assert!(usd(1, 0).checked_pow(&eur(1, 0)).is_err());
        assert!(usd(1, 0).checked_cmp(&eur(1, 0)).is_err());
    }

    #[test]
    fn test_unknown_currency_does_not_mix() {
        let unknown = Money::unknown(Decimal::new(1, 0));
        assert!(unknown.checked_add(&usd(1, 0)).is_err());
        assert_eq!(Money::default().currency_code(), "???");
        assert_eq!(
            Money::default() + Money::unknown(Decimal::new(5, 0)),
            Money::unknown(Decimal::new(5, 0))
        );
    }

    #[test]
    fn test_multiplication_and_division() {
        assert_eq!((usd(15, -1) * usd(2, 0)).to_string(), "3");
        assert_eq!(usd(2, 0).div(&usd(3, 0)).to_string(), "0.66666666666666666667");
        assert_eq!(usd(-5, 0).div_round(&usd(2, 0), 0), usd(-3, 0));
        assert_eq!((usd(7, 0) % usd(3, 0)), usd(1, 0));
        assert_eq!(usd(3, 0).pow(&usd(2, 0)), usd(9, 0));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_by_zero_panics() {
        let _ = usd(1, 0) / usd(0, 0);
    }

    #[test]
    fn test_quo_rem_identity() {
        let dividend = usd(-1234, -2);
        let divisor = usd(3, 0);
        let (q, r) = dividend.quo_rem(&divisor, 1);
        assert_eq!(&(&divisor * &q) + &r, dividend);
        assert!(r.is_zero() || r.sign() == dividend.sign());
        assert_eq!(q.currency_code(), "USD");
        assert_eq!(r.currency_code(), "USD");
    }

    #[test]
    fn test_comparisons() {
        let a = usd(1200, -2);
        let b = usd(12, 0);
        let c = usd(13, 0);
        assert!(a.equal(&b));
        assert_eq!(a, b);
        assert!(c.greater_than(&a));
        assert!(c.greater_than_or_equal(&c));
        assert!(a.less_than(&c));
        assert!(a.less_than_or_equal(&b));
        assert!(a < c);
        assert!(c >= b && b <= a && c > b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert_ne!(a, eur(12, 0));
    }

    #[test]
    #[should_panic(expected = "cannot compare mismatched currencies m1[USD] m2[EUR]")]
    fn test_less_than_operator_mismatch_panics() {
        let _ = usd(1, 0) < eur(2, 0);
    }

    #[test]
    fn test_ordering_operators_mismatch_panic() {
        let (a, b) = (usd(1, 0), eur(2, 0));
        assert!(std::panic::catch_unwind(|| a > b).is_err());
        assert!(std::panic::catch_unwind(|| a <= b).is_err());
        assert!(std::panic::catch_unwind(|| a >= b).is_err());
        assert!(std::panic::catch_unwind(|| a.partial_cmp(&b)).is_err());
    }

    #[test]
    #[should_panic(expected = "cannot compare mismatched currencies")]
    fn test_compare_mismatch_panics() {
        usd(1, 0).compare(&eur(1, 0));
    }

    #[test]
    fn test_update_currency() {
        let reg = registry();
        let mut m = Money::unknown(Decimal::new(500, -2));
        assert!(m.update_currency(&reg, "XYZ").is_err());
        assert!(m.currency().is_unknown());

        m.update_currency(&reg, "GBP").unwrap();
        assert_eq!(m.currency_code(), "GBP");

        let err = m.update_currency(&reg, "EUR").unwrap_err();
        assert_eq!(
            err,
            MoneyError::CurrencyAlreadySet {
                current: "GBP".into(),
                requested: "EUR".into()
            }
        );
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_rounding_family() {
        let reg = registry();
        let m = Money::parse(&reg, "USD", "5.45").unwrap();
        assert_eq!(m.round(1).to_string(), "5.5");
        assert_eq!(m.neg().round(1).to_string(), "-5.5");
        assert_eq!(m.round_bank(1).to_string(), "5.4");
        assert_eq!(Money::parse(&reg, "USD", "5.55").unwrap().round_bank(1).to_string(), "5.6");
        assert_eq!(Money::parse(&reg, "USD", "3.43").unwrap().round_cash(5).string_fixed(2), "3.45");
        assert_eq!(Money::parse(&reg, "USD", "3.50").unwrap().round_cash(100).string_fixed(2), "4.00");
        assert_eq!(m.floor().to_string(), "5");
        assert_eq!(m.ceil().to_string(), "6");
        assert_eq!(Money::parse(&reg, "USD", "123.456").unwrap().truncate(2).to_string(), "123.45");
    }

    #[test]
    #[should_panic(expected = "unsupported cash rounding interval `7`")]
    fn test_round_cash_invalid_interval_panics() {
        usd(343, -2).round_cash(7);
    }

    #[test]
    fn test_string_fixed() {
        let m = Money::parse(&registry(), "USD", "5.45").unwrap();
        assert_eq!(m.string_fixed(0), "5");
        assert_eq!(m.string_fixed(1), "5.5");
        assert_eq!(m.string_fixed(3), "5.450");
        assert_eq!(m.string_fixed_bank(1), "5.4");
        assert_eq!(m.string_fixed_cash(10), "5.50");
    }

    #[test]
    fn test_formatting() {
        let reg = registry();
        let m = usd(-12345, -3);
        assert_eq!(m.format_currency(), "-$12.35");
        assert_eq!(m.format_accounting(), "(12.35)");

        let big = Money::new(&reg, "USD", 123456789, -2).unwrap();
        assert_eq!(big.format_currency(), "$1,234,567.89");
        assert_eq!(big.format_accounting(), "1234567.89");

        let sek = Money::new(&reg, "SEK", 345, -2).unwrap();
        assert_eq!(sek.format_currency(), "3.45 kr");
        assert_eq!(sek.format_cash(15), "3.40 kr");
        assert_eq!(sek.format_cash(10), "3.50 kr");
        assert!(sek.checked_format_cash(3).is_err());
    }

    #[test]
    fn test_custom_currency_formatting() {
        let reg = CurrencyRegistry::new();
        reg.upsert(
            Currency::new(CurrencyType::Loyalty, "MIL", 0, "mi", "1 $").with_separators(",", "."),
        );
        let miles = Money::new(&reg, "MIL", 1234567, 0).unwrap();
        assert_eq!(miles.format_currency(), "1.234.567 mi");
    }

    #[test]
    fn test_debug_and_accessors() {
        let m = usd(-250, -2);
        assert_eq!(format!("{:?}", m), "Money(USD -2.5)");
        assert_eq!(m.int_part(), BigInt::from(-2));
        assert_eq!(m.rat(), (BigInt::from(-5), BigInt::from(2)));
        assert_eq!(m.to_f64(), (-2.5, true));
        assert!(m.is_negative());
        assert_eq!(m.abs(), usd(25, -1));
    }
}
