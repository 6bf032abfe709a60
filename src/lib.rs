// ============================================================================
// Fixed Money Library
// Currency-tagged arbitrary-precision fixed-point money
// ============================================================================

//! # Fixed Money
//!
//! Exact decimal money values bound to a currency, with locale-styled formatting.
//!
//! ## Features
//!
//! - **Arbitrary precision**: unbounded coefficient with a base-10 exponent; add, sub and mul never round
//! - **Currency safety**: every binary operation checks that both operands share a currency
//! - **Rounding policies**: half away from zero, banker's, cash (Swedish) rounding, floor/ceil/truncate
//! - **Template formatting**: grouping, decimal point, grapheme placement, minus or bracketed negatives
//! - **Injectable registry**: ISO 4217 + crypto table behind a thread-safe lookup
//! - **Codecs**: fixed binary layout, plain text, SQL scan/value and (feature `serde`) serde
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//!
//! let registry = CurrencyRegistry::with_builtin();
//!
//! let a = Money::parse(&registry, "USD", "1234.5").unwrap();
//! let b = Money::new(&registry, "USD", -12345, -3).unwrap();
//!
//! assert_eq!(a.format_currency(), "$1,234.50");
//! assert_eq!(b.format_currency(), "-$12.35");
//! assert_eq!(b.format_accounting(), "(12.35)");
//!
//! let total = &a + &b;
//! assert_eq!(total.to_string(), "1222.155");
//!
//! // mixing currencies is a contract violation
//! let eur = Money::new(&registry, "EUR", 1, 0).unwrap();
//! assert!(a.checked_add(&eur).unwrap_err().is_fatal());
//! ```

pub mod codec;
pub mod domain;
pub mod format;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{NullMoney, SqlValue};
    pub use crate::domain::{
        avg, max, min, sum, Currency, CurrencyRegistry, CurrencyType, Money, MoneyConfig,
        MoneyError, MoneyResult, UNKNOWN_CURRENCY_CODE,
    };
    pub use crate::format::{FormatOptions, Formatter};
    pub use crate::interfaces::CurrencyLookup;
    pub use crate::numeric::{Decimal, NumericError, RoundingMode};
}
