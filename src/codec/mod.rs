// ============================================================================
// Codec Module
// Binary, text, SQL and serde adapters for Money
// ============================================================================
//
// - binary: fixed 3-byte code + exponent + length-prefixed coefficient
// - text: plain decimal string, no currency
// - sql: scan/value against driver values, plus a nullable wrapper
// - serialize: serde impls (feature `serde`)

pub mod binary;
pub mod sql;
mod text;

#[cfg(feature = "serde")]
mod serialize;

pub use binary::MIN_PAYLOAD_LEN;
pub use sql::{NullMoney, SqlValue};
