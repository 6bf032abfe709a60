// ============================================================================
// Money Errors
// Currency-aware error types for Money construction, arithmetic and codecs
// ============================================================================

use super::money::Money;
use crate::numeric::NumericError;
use std::fmt;

/// Errors raised by Money operations.
///
/// Two classes exist. Fatal errors ([`MoneyError::is_fatal`]) signal a broken
/// caller contract such as mixing currencies; the operator forms panic on them
/// and callers must not try to recover. Everything else is reported bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Binary operation between two different currencies
    CurrencyMismatch {
        operation: &'static str,
        left: String,
        right: String,
    },
    /// Code not present in the registry
    UnsupportedCurrency(String),
    /// String could not be parsed as a decimal amount
    InvalidAmount(String),
    /// Error from the decimal engine
    Numeric(NumericError),
    /// Binary payload shorter than the fixed header
    PayloadTooShort(usize),
    /// Binary payload with a truncated or undecodable body
    MalformedPayload(String),
    /// Currency can only be assigned while still unknown
    CurrencyAlreadySet { current: String, requested: String },
    /// Code cannot be written into the 3-byte binary field
    InvalidCurrencyCode(String),
    /// Database value of a kind that cannot hold an amount
    UnsupportedSqlValue(&'static str),
}

impl MoneyError {
    /// Whether this error is a contract violation rather than bad input.
    pub fn is_fatal(&self) -> bool {
        match self {
            MoneyError::CurrencyMismatch { .. } => true,
            MoneyError::Numeric(e) => e.is_fatal(),
            _ => false,
        }
    }

    /// Zero amount in the bad-currency marker, for callers that continue past
    /// a reported error.
    pub fn sentinel(&self) -> Money {
        Money::bad()
    }
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::CurrencyMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "cannot {} mismatched currencies m1[{}] m2[{}]",
                operation, left, right
            ),
            MoneyError::UnsupportedCurrency(code) => {
                write!(f, "currency [{}] not supported", code)
            },
            MoneyError::InvalidAmount(input) => {
                write!(f, "can't convert {:?} to a decimal amount", input)
            },
            MoneyError::Numeric(e) => write!(f, "{}", e),
            MoneyError::PayloadTooShort(len) => {
                write!(f, "not enough data - only found [{}] bytes", len)
            },
            MoneyError::MalformedPayload(reason) => {
                write!(f, "malformed binary payload: {}", reason)
            },
            MoneyError::CurrencyAlreadySet { current, requested } => write!(
                f,
                "cannot change currency to [{}], already set to [{}]",
                requested, current
            ),
            MoneyError::InvalidCurrencyCode(code) => write!(
                f,
                "currency code {:?} is not 3 ASCII characters",
                code
            ),
            MoneyError::UnsupportedSqlValue(kind) => {
                write!(f, "could not convert database value of type {} to money", kind)
            },
        }
    }
}

impl std::error::Error for MoneyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoneyError::Numeric(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NumericError> for MoneyError {
    fn from(e: NumericError) -> Self {
        MoneyError::Numeric(e)
    }
}

/// Result type alias for Money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BAD_CURRENCY_CODE;

    #[test]
    fn test_fatal_classification() {
        let mismatch = MoneyError::CurrencyMismatch {
            operation: "add",
            left: "USD".into(),
            right: "EUR".into(),
        };
        assert!(mismatch.is_fatal());
        assert!(MoneyError::Numeric(NumericError::NonFinite).is_fatal());
        assert!(MoneyError::Numeric(NumericError::InvalidCashInterval(7)).is_fatal());
        assert!(MoneyError::Numeric(NumericError::DivisionByZero).is_fatal());

        assert!(!MoneyError::UnsupportedCurrency("XYZ".into()).is_fatal());
        assert!(!MoneyError::InvalidAmount("abc".into()).is_fatal());
        assert!(!MoneyError::PayloadTooShort(3).is_fatal());
        assert!(!MoneyError::CurrencyAlreadySet {
            current: "USD".into(),
            requested: "EUR".into()
        }
        .is_fatal());
    }

    #[test]
    fn test_display() {
        let mismatch = MoneyError::CurrencyMismatch {
            operation: "add",
            left: "USD".into(),
            right: "EUR".into(),
        };
        assert_eq!(
            mismatch.to_string(),
            "cannot add mismatched currencies m1[USD] m2[EUR]"
        );
        assert_eq!(
            MoneyError::UnsupportedCurrency("XYZ".into()).to_string(),
            "currency [XYZ] not supported"
        );
        assert_eq!(
            MoneyError::PayloadTooShort(5).to_string(),
            "not enough data - only found [5] bytes"
        );
    }

    #[test]
    fn test_sentinel_is_zero_bad_currency() {
        let sentinel = MoneyError::UnsupportedCurrency("XYZ".into()).sentinel();
        assert!(sentinel.is_zero());
        assert_eq!(sentinel.currency_code(), BAD_CURRENCY_CODE);
    }
}
