// ============================================================================
// Money Configuration
// Process-wide division precision and registry seeding
// ============================================================================

use super::currency::Currency;
use super::registry::CurrencyRegistry;
use crate::numeric::{set_division_precision, DEFAULT_DIVISION_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound accepted for the division precision
pub const MAX_DIVISION_PRECISION: u32 = 1000;

/// Configuration for the decimal engine and the currency registry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoneyConfig {
    /// Fractional digits kept by `div` when a quotient does not terminate
    pub division_precision: u32,

    /// Currencies added on top of (or replacing) the built-in table
    pub extra_currencies: Vec<Currency>,

    /// Whether the registry starts from the built-in ISO 4217 table
    pub seed_builtin: bool,

    /// Whether the built-in seed also carries the crypto table (BTC, XBT, ...)
    pub include_crypto: bool,
}

impl MoneyConfig {
    /// Create a configuration with the defaults
    pub fn new() -> Self {
        Self {
            division_precision: DEFAULT_DIVISION_PRECISION,
            extra_currencies: Vec::new(),
            seed_builtin: true,
            include_crypto: true,
        }
    }

    /// Builder method: Set division precision
    pub fn with_division_precision(mut self, precision: u32) -> Self {
        self.division_precision = precision;
        self
    }

    /// Builder method: Add a currency to register
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.extra_currencies.push(currency);
        self
    }

    /// Builder method: Start from the built-in table or not
    pub fn with_builtin(mut self, seed_builtin: bool) -> Self {
        self.seed_builtin = seed_builtin;
        self
    }

    /// Builder method: Seed the crypto table along with ISO 4217 or not
    pub fn with_crypto(mut self, include_crypto: bool) -> Self {
        self.include_crypto = include_crypto;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.division_precision > MAX_DIVISION_PRECISION {
            return Err(format!(
                "Division precision cannot exceed {}",
                MAX_DIVISION_PRECISION
            ));
        }

        for currency in &self.extra_currencies {
            currency.validate()?;
        }

        Ok(())
    }

    /// Validate, then install the division precision process-wide
    pub fn apply(&self) -> Result<(), String> {
        self.validate()?;
        set_division_precision(self.division_precision);
        Ok(())
    }

    /// Validate, then build a registry holding the configured currencies
    pub fn build_registry(&self) -> Result<CurrencyRegistry, String> {
        self.validate()?;

        let registry = match (self.seed_builtin, self.include_crypto) {
            (true, true) => CurrencyRegistry::with_builtin(),
            (true, false) => CurrencyRegistry::with_iso(),
            (false, _) => CurrencyRegistry::new(),
        };
        for currency in &self.extra_currencies {
            registry.upsert(currency.clone());
        }

        tracing::debug!(
            currencies = registry.len(),
            seed_builtin = self.seed_builtin,
            include_crypto = self.include_crypto,
            "built currency registry"
        );
        Ok(registry)
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// ISO 4217 currencies only, no crypto table
    pub fn iso_only() -> Self {
        Self::new().with_crypto(false)
    }

    /// Registry starts empty; every currency must be added explicitly
    pub fn empty() -> Self {
        Self::new().with_builtin(false)
    }
}
