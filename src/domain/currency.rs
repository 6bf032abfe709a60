// ============================================================================
// Currency Definition
// Immutable currency metadata shared by every Money of that currency
// ============================================================================

use crate::format::Formatter;
use std::fmt;
use std::sync::{Arc, OnceLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Code carried by values whose currency is not known yet.
pub const UNKNOWN_CURRENCY_CODE: &str = "???";

/// Code carried by the sentinel returned from failed constructions.
pub const BAD_CURRENCY_CODE: &str = "!!!";

// ============================================================================
// Currency Type
// ============================================================================

/// Broad classification of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum CurrencyType {
    /// Regular government-issued currency
    Fiat = 0,
    /// Cryptocurrencies (BTC, XBT, ...)
    Crypto = 1,
    /// Loyalty program points
    Loyalty = 2,
    /// Reward points
    Reward = 3,
    /// Game credits
    Game = 4,
    /// Generic value store
    Points = 5,
    /// Placeholder for values whose currency is not resolved
    Unknown = 9999,
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyType::Fiat => write!(f, "FIAT"),
            CurrencyType::Crypto => write!(f, "CRYPTO"),
            CurrencyType::Loyalty => write!(f, "LOYALTY"),
            CurrencyType::Reward => write!(f, "REWARD"),
            CurrencyType::Game => write!(f, "GAME"),
            CurrencyType::Points => write!(f, "POINTS"),
            CurrencyType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ============================================================================
// Currency
// ============================================================================

/// Display and precision metadata for one currency code.
///
/// The `template` holds a `1` where the numeric body goes and a `$` where the
/// grapheme goes, e.g. `"$1"` renders `$12.00` and `"1 $"` renders `12.00 kr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency {
    pub currency_type: CurrencyType,
    /// Three ASCII characters by convention (required by the binary codec)
    pub code: String,
    /// Number of minor-unit digits shown when formatting
    pub fraction: u32,
    pub grapheme: String,
    pub template: String,
    pub decimal_point: String,
    pub thousand_separator: String,
}

impl Currency {
    /// Create a currency with `.` as decimal point and `,` as thousand separator.
    pub fn new(
        currency_type: CurrencyType,
        code: impl Into<String>,
        fraction: u32,
        grapheme: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            currency_type,
            code: code.into(),
            fraction,
            grapheme: grapheme.into(),
            template: template.into(),
            decimal_point: ".".to_string(),
            thousand_separator: ",".to_string(),
        }
    }

    /// Builder method: Set the decimal point and thousand separator strings
    pub fn with_separators(
        mut self,
        decimal_point: impl Into<String>,
        thousand_separator: impl Into<String>,
    ) -> Self {
        self.decimal_point = decimal_point.into();
        self.thousand_separator = thousand_separator.into();
        self
    }

    /// The shared "not yet known" currency (`???`).
    pub fn unknown() -> Arc<Currency> {
        static UNKNOWN: OnceLock<Arc<Currency>> = OnceLock::new();
        UNKNOWN
            .get_or_init(|| {
                Arc::new(Currency::new(
                    CurrencyType::Unknown,
                    UNKNOWN_CURRENCY_CODE,
                    2,
                    "$",
                    "$1",
                ))
            })
            .clone()
    }

    /// The shared marker carried by values from failed constructions (`!!!`).
    pub fn bad() -> Arc<Currency> {
        static BAD: OnceLock<Arc<Currency>> = OnceLock::new();
        BAD.get_or_init(|| {
            Arc::new(Currency::new(
                CurrencyType::Unknown,
                BAD_CURRENCY_CODE,
                2,
                "$",
                "$1",
            ))
        })
        .clone()
    }

    /// Metadata assumed for a code missing from the registry.
    ///
    /// The code doubles as the grapheme and trails the amount: `12.00XYZ`.
    pub fn default_for(code: &str) -> Currency {
        Currency::new(CurrencyType::Fiat, code, 2, code, "1$")
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.code == UNKNOWN_CURRENCY_CODE
    }

    /// Project the display fields into a [`Formatter`].
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.fraction,
            self.decimal_point.clone(),
            self.thousand_separator.clone(),
            self.grapheme.clone(),
            self.template.clone(),
        )
    }

    /// Validate the record before it enters a registry
    pub fn validate(&self) -> Result<(), String> {
        if self.code.is_empty() {
            return Err("Currency code cannot be empty".to_string());
        }
        if !self.template.contains('1') {
            return Err(format!(
                "Template `{}` for {} has no numeric placeholder `1`",
                self.template, self.code
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sentinel_is_shared() {
        let a = Currency::unknown();
        let b = Currency::unknown();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_unknown());
        assert_eq!(a.fraction, 2);
        assert_eq!(a.grapheme, "$");
        assert_eq!(a.currency_type, CurrencyType::Unknown);
    }

    #[test]
    fn test_bad_sentinel() {
        let bad = Currency::bad();
        assert_eq!(bad.code, BAD_CURRENCY_CODE);
        assert!(!bad.is_unknown());
    }

    #[test]
    fn test_default_for_unrecognised_code() {
        let c = Currency::default_for("XYZ");
        assert_eq!(c.currency_type, CurrencyType::Fiat);
        assert_eq!(c.grapheme, "XYZ");
        assert_eq!(c.template, "1$");
        assert_eq!(c.fraction, 2);
        assert_eq!(c.decimal_point, ".");
        assert_eq!(c.thousand_separator, ",");
    }

    #[test]
    fn test_validate() {
        assert!(Currency::new(CurrencyType::Points, "PTS", 0, "pt", "1 $")
            .validate()
            .is_ok());
        assert!(Currency::new(CurrencyType::Points, "", 0, "pt", "1 $")
            .validate()
            .is_err());
        assert!(Currency::new(CurrencyType::Points, "PTS", 0, "pt", "$")
            .validate()
            .is_err());
    }

    #[test]
    fn test_type_discriminants() {
        assert_eq!(CurrencyType::Crypto as u16, 1);
        assert_eq!(CurrencyType::Unknown as u16, 9999);
        assert_eq!(CurrencyType::Game.to_string(), "GAME");
    }
}
