// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod currency_lookup;

pub use currency_lookup::CurrencyLookup;
