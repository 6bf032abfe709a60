// ============================================================================
// Domain Models Module
// Currencies, the registry, Money and its aggregates
// ============================================================================

pub mod aggregate;
pub mod config;
mod currencies;
pub mod currency;
pub mod errors;
pub mod money;
pub mod registry;

pub use aggregate::{avg, max, min, sum};
pub use config::MoneyConfig;
pub use currency::{Currency, CurrencyType, BAD_CURRENCY_CODE, UNKNOWN_CURRENCY_CODE};
pub use errors::{MoneyError, MoneyResult};
pub use money::Money;
pub use registry::CurrencyRegistry;
