// ============================================================================
// Text Codec
// Plain decimal string form; carries no currency
// ============================================================================

use crate::domain::{Money, MoneyError, MoneyResult};
use crate::numeric::Decimal;
use std::str::FromStr;

impl Money {
    /// Plain decimal string with no symbol or grouping.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Parse the plain decimal form; the result is in the unknown currency.
    pub fn from_text(text: &str) -> MoneyResult<Money> {
        text.parse()
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .parse::<Decimal>()
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))?;
        Ok(Money::unknown(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyRegistry;

    #[test]
    fn test_text_round_trip_drops_currency() {
        let registry = CurrencyRegistry::with_builtin();
        let m = Money::new(&registry, "USD", -12345, -3).unwrap();
        assert_eq!(m.to_text(), "-12.345");

        let decoded = Money::from_text(&m.to_text()).unwrap();
        assert!(decoded.currency().is_unknown());
        assert_eq!(decoded.amount(), m.amount());
    }

    #[test]
    fn test_from_str() {
        let m: Money = "1.5e3".parse().unwrap();
        assert_eq!(m.to_text(), "1500");
        assert_eq!(m.currency_code(), "???");
    }

    #[test]
    fn test_invalid_text() {
        let err = Money::from_text("12..5").unwrap_err();
        assert_eq!(err, MoneyError::InvalidAmount("12..5".into()));
        assert_eq!(err.sentinel().currency_code(), "!!!");
    }
}
