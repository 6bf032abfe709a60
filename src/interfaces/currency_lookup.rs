// ============================================================================
// Currency Lookup Interface
// Defines how Money constructors resolve currency codes
// ============================================================================

use crate::domain::Currency;
use std::sync::Arc;

/// Source of currency metadata keyed by code.
///
/// Money constructors take any implementation, so callers can inject an
/// isolated registry per test or per tenant instead of a process-wide table.
pub trait CurrencyLookup: Send + Sync {
    /// Resolve a code to its shared record
    fn lookup(&self, code: &str) -> Option<Arc<Currency>>;

    /// Resolve a code, falling back to [`Currency::default_for`] when unknown
    fn lookup_or_default(&self, code: &str) -> Arc<Currency> {
        self.lookup(code).unwrap_or_else(|| {
            tracing::debug!(code, "currency not registered, using default metadata");
            Arc::new(Currency::default_for(code))
        })
    }

    fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }
}

impl<T: CurrencyLookup + ?Sized> CurrencyLookup for Arc<T> {
    fn lookup(&self, code: &str) -> Option<Arc<Currency>> {
        (**self).lookup(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyType;

    /// Lookup that only knows the unknown placeholder
    struct PlaceholderOnly;

    impl CurrencyLookup for PlaceholderOnly {
        fn lookup(&self, code: &str) -> Option<Arc<Currency>> {
            (code == crate::domain::UNKNOWN_CURRENCY_CODE).then(Currency::unknown)
        }
    }

    #[test]
    fn test_default_fallback() {
        let lookup = PlaceholderOnly;
        assert!(lookup.contains("???"));
        assert!(!lookup.contains("USD"));

        let fallback = lookup.lookup_or_default("USD");
        assert_eq!(fallback.code, "USD");
        assert_eq!(fallback.currency_type, CurrencyType::Fiat);
        assert_eq!(fallback.template, "1$");
    }

    #[test]
    fn test_arc_forwarding() {
        let shared: Arc<dyn CurrencyLookup> = Arc::new(PlaceholderOnly);
        assert!(shared.lookup("???").is_some());
    }
}
