// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur in the decimal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by a zero-valued operand
    DivisionByZero,
    /// Input string could not be parsed as a decimal
    InvalidInput,
    /// Floating-point input was NaN or infinite
    NonFinite,
    /// Cash rounding interval outside {5, 10, 15, 25, 50, 100}
    InvalidCashInterval(u8),
    /// Result exponent does not fit in an i32
    ExponentOverflow,
}

impl NumericError {
    /// Whether this error signals a broken caller contract rather than bad input.
    ///
    /// Fatal errors are the ones the panicking arithmetic forms abort on.
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, NumericError::InvalidInput)
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "decimal division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse decimal"),
            NumericError::NonFinite => {
                write!(f, "cannot create a decimal from a NaN or infinite value")
            },
            NumericError::InvalidCashInterval(interval) => write!(
                f,
                "unsupported cash rounding interval `{}` (supported: 5, 10, 15, 25, 50, 100)",
                interval
            ),
            NumericError::ExponentOverflow => write!(f, "exponent overflow in decimal operation"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::DivisionByZero.to_string(),
            "decimal division by zero"
        );
        assert_eq!(
            NumericError::InvalidCashInterval(7).to_string(),
            "unsupported cash rounding interval `7` (supported: 5, 10, 15, 25, 50, 100)"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(NumericError::NonFinite.is_fatal());
        assert!(NumericError::InvalidCashInterval(3).is_fatal());
        assert!(NumericError::DivisionByZero.is_fatal());
        assert!(!NumericError::InvalidInput.is_fatal());
    }
}
