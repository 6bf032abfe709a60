// ============================================================================
// Currency Registry
// Thread-safe, injectable mapping from currency code to metadata
// ============================================================================

use super::currencies;
use super::currency::Currency;
use crate::interfaces::CurrencyLookup;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Mapping from currency code to a shared, immutable [`Currency`].
///
/// Reads and writes are synchronised by an `RwLock`. Records are never
/// mutated in place: an upsert swaps the `Arc` for the code, so Money values
/// created earlier keep the record they resolved.
pub struct CurrencyRegistry {
    currencies: RwLock<HashMap<String, Arc<Currency>>>,
}

impl CurrencyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            currencies: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry seeded with the built-in ISO 4217 and crypto table
    pub fn with_builtin() -> Self {
        Self::seeded(currencies::builtin())
    }

    /// Create a registry seeded with the ISO 4217 table only
    pub fn with_iso() -> Self {
        Self::seeded(currencies::iso())
    }

    fn seeded(entries: impl Iterator<Item = Arc<Currency>>) -> Self {
        let table: HashMap<String, Arc<Currency>> = entries
            .map(|currency| (currency.code.clone(), currency))
            .collect();
        tracing::trace!(count = table.len(), "seeded currency registry");

        Self {
            currencies: RwLock::new(table),
        }
    }

    /// Get the record for a code
    pub fn lookup(&self, code: &str) -> Option<Arc<Currency>> {
        self.currencies.read().get(code).cloned()
    }

    /// Insert or replace the record for `currency.code`
    pub fn upsert(&self, currency: Currency) -> Arc<Currency> {
        let currency = Arc::new(currency);
        let previous = self
            .currencies
            .write()
            .insert(currency.code.clone(), Arc::clone(&currency));

        tracing::debug!(
            code = %currency.code,
            replaced = previous.is_some(),
            "currency registered"
        );
        currency
    }

    pub fn contains(&self, code: &str) -> bool {
        self.currencies.read().contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.currencies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.read().is_empty()
    }

    /// All registered codes, sorted
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.currencies.read().keys().cloned().collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for CurrencyRegistry {
    /// Same as [`CurrencyRegistry::with_builtin`]
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl std::fmt::Debug for CurrencyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("len", &self.len())
            .finish()
    }
}

impl CurrencyLookup for CurrencyRegistry {
    fn lookup(&self, code: &str) -> Option<Arc<Currency>> {
        CurrencyRegistry::lookup(self, code)
    }

    fn contains(&self, code: &str) -> bool {
        CurrencyRegistry::contains(self, code)
    }
}
