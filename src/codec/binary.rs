// ============================================================================
// Binary Codec
// Fixed-header byte layout for Money
// ============================================================================
//
// Layout (all integers big-endian):
//
//   [0..3)   currency code, 3 ASCII bytes
//   [3..7)   exponent, i32 two's complement
//   [7..11)  coefficient length N, u32
//   [11..)   coefficient, N bytes two's complement

use crate::domain::{Money, MoneyError, MoneyResult};
use crate::interfaces::CurrencyLookup;
use crate::numeric::Decimal;
use num_bigint::BigInt;

const CODE_LEN: usize = 3;
const HEADER_LEN: usize = CODE_LEN + 4;
const BLOB_PREFIX_LEN: usize = 4;

/// Anything shorter cannot hold a header plus one coefficient byte.
pub const MIN_PAYLOAD_LEN: usize = HEADER_LEN + 1;

fn read_u32_be(bytes: &[u8]) -> Option<[u8; 4]> {
    bytes.get(..4)?.try_into().ok()
}

impl Money {
    /// Encode into the fixed binary layout.
    ///
    /// Fails when the currency code is not exactly 3 ASCII bytes.
    pub fn to_binary(&self) -> MoneyResult<Vec<u8>> {
        let code = self.currency_code();
        if code.len() != CODE_LEN || !code.is_ascii() {
            return Err(MoneyError::InvalidCurrencyCode(code.to_string()));
        }

        let coefficient = self.coefficient().to_signed_bytes_be();
        let blob_len = u32::try_from(coefficient.len())
            .map_err(|_| MoneyError::MalformedPayload("coefficient exceeds u32 length".into()))?;

        let mut out = Vec::with_capacity(HEADER_LEN + BLOB_PREFIX_LEN + coefficient.len());
        out.extend_from_slice(code.as_bytes());
        out.extend_from_slice(&self.exponent().to_be_bytes());
        out.extend_from_slice(&blob_len.to_be_bytes());
        out.extend_from_slice(&coefficient);
        Ok(out)
    }

    /// Decode the fixed binary layout.
    ///
    /// A code missing from `lookup` does not fail the decode; the value gets
    /// [`Currency::default_for`](crate::domain::Currency::default_for) metadata.
    pub fn from_binary<L: CurrencyLookup + ?Sized>(lookup: &L, data: &[u8]) -> MoneyResult<Money> {
        if data.len() < MIN_PAYLOAD_LEN {
            return Err(MoneyError::PayloadTooShort(data.len()));
        }

        let code = std::str::from_utf8(&data[..CODE_LEN])
            .map_err(|_| MoneyError::MalformedPayload("currency code is not UTF-8".into()))?;
        let exponent = read_u32_be(&data[CODE_LEN..])
            .map(i32::from_be_bytes)
            .ok_or_else(|| MoneyError::MalformedPayload("truncated exponent".into()))?;

        let body = &data[HEADER_LEN..];
        let blob_len = read_u32_be(body)
            .map(u32::from_be_bytes)
            .ok_or_else(|| MoneyError::MalformedPayload("truncated coefficient length".into()))?;
        let blob = &body[BLOB_PREFIX_LEN..];
        if usize::try_from(blob_len).map_or(true, |len| len != blob.len()) {
            return Err(MoneyError::MalformedPayload(format!(
                "coefficient declares {} bytes, found {}",
                blob_len,
                blob.len()
            )));
        }

        let coefficient = BigInt::from_signed_bytes_be(blob);
        let currency = lookup.lookup_or_default(code);
        Ok(Money::from_decimal(Decimal::from_bigint(coefficient, exponent), currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, CurrencyRegistry, CurrencyType};

    fn registry() -> CurrencyRegistry {
        CurrencyRegistry::with_builtin()
    }

    #[test]
    fn test_layout() {
        let m = Money::new(&registry(), "USD", -12345, -3).unwrap();
        let bytes = m.to_binary().unwrap();

        assert_eq!(&bytes[..3], b"USD");
        assert_eq!(&bytes[3..7], &(-3i32).to_be_bytes());
        assert_eq!(&bytes[7..11], &2u32.to_be_bytes());
        assert_eq!(&bytes[11..], &[0xCF, 0xC7]);
    }

    #[test]
    fn test_round_trip() {
        let reg = registry();
        for (code, value, exponent) in [("USD", 0i64, 0i32), ("JPY", 1_000_000, 3), ("BTC", -1, -8), ("???", i64::MIN, i32::MIN)] {
            let m = Money::new(&reg, code, value, exponent).unwrap();
            let decoded = Money::from_binary(&reg, &m.to_binary().unwrap()).unwrap();
            assert_eq!(decoded.currency_code(), code);
            assert_eq!(decoded.coefficient(), m.coefficient());
            assert_eq!(decoded.exponent(), m.exponent());
        }
    }

    #[test]
    fn test_short_payload() {
        let err = Money::from_binary(&registry(), b"USD\0\0\0").unwrap_err();
        assert_eq!(err, MoneyError::PayloadTooShort(6));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_truncated_blob() {
        let mut bytes = Money::new(&registry(), "EUR", 123456789, -2)
            .unwrap()
            .to_binary()
            .unwrap();
        bytes.pop();
        assert!(matches!(
            Money::from_binary(&registry(), &bytes),
            Err(MoneyError::MalformedPayload(_))
        ));

        // header plus one byte cannot carry the length prefix
        assert!(matches!(
            Money::from_binary(&registry(), b"EUR\0\0\0\0\x01"),
            Err(MoneyError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_unknown_code_falls_back_to_default_metadata() {
        let source = CurrencyRegistry::new();
        source.upsert(Currency::new(CurrencyType::Game, "GEM", 0, "G", "1 $"));
        let bytes = Money::new(&source, "GEM", 42, 0).unwrap().to_binary().unwrap();

        let decoded = Money::from_binary(&registry(), &bytes).unwrap();
        assert_eq!(decoded.currency_code(), "GEM");
        assert_eq!(decoded.currency().grapheme, "GEM");
        assert_eq!(decoded.currency().template, "1$");
        assert_eq!(decoded.format_currency(), "42.00GEM");
    }

    #[test]
    fn test_rejects_non_three_byte_codes() {
        let reg = CurrencyRegistry::new();
        reg.upsert(Currency::new(CurrencyType::Points, "POINTS", 0, "pt", "1 $"));
        let m = Money::new(&reg, "POINTS", 1, 0).unwrap();
        assert_eq!(
            m.to_binary().unwrap_err(),
            MoneyError::InvalidCurrencyCode("POINTS".into())
        );
    }
}
