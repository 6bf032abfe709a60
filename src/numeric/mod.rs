// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic for monetary calculations
// ============================================================================
//
// This module provides:
// - Decimal: unbounded coefficient scaled by a base-10 exponent
// - RoundingMode / CashInterval: rounding policies
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations on stored values
// - Add/Sub/Mul are exact, only division and explicit rounding lose digits
// - Every fallible operation has a checked_* form returning Result

mod decimal;
mod errors;
mod rounding;

pub use decimal::{
    division_precision, set_division_precision, Decimal, DEFAULT_DIVISION_PRECISION,
    EXACT_F64_EXPONENT,
};
pub use errors::{NumericError, NumericResult};
pub use rounding::{CashInterval, RoundingMode};
