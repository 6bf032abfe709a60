// ============================================================================
// SQL Adapter
// Scan/value contract between Money and database driver values
// ============================================================================

use crate::domain::{Money, MoneyError, MoneyResult};
use crate::numeric::Decimal;

/// Driver-level value handed to [`Money::scan`] or produced by [`Money::value`].
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    F32(f32),
    F64(f64),
    I64(i64),
    Text(String),
    Bytes(Vec<u8>),
}

impl SqlValue {
    fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "NULL",
            SqlValue::F32(_) => "f32",
            SqlValue::F64(_) => "f64",
            SqlValue::I64(_) => "i64",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
        }
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        SqlValue::F32(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::F64(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::I64(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote_if_quoted(bytes: &[u8]) -> &[u8] {
    match bytes {
        [b'"', inner @ .., b'"'] if bytes.len() > 2 => inner,
        _ => bytes,
    }
}

fn parse_text(bytes: &[u8]) -> MoneyResult<Money> {
    let bytes = unquote_if_quoted(bytes);
    let text = std::str::from_utf8(bytes)
        .map_err(|_| MoneyError::InvalidAmount(String::from_utf8_lossy(bytes).into_owned()))?;
    Money::from_text(text)
}

fn from_float(value: f64) -> MoneyResult<Money> {
    // stored data, so a non-finite value is bad input rather than a contract breach
    let amount =
        Decimal::try_from_f64(value).map_err(|_| MoneyError::InvalidAmount(value.to_string()))?;
    Ok(Money::unknown(amount))
}

impl Money {
    /// Read a database value; the result is in the unknown currency.
    pub fn scan(value: &SqlValue) -> MoneyResult<Money> {
        match value {
            SqlValue::F32(v) => from_float(f64::from(*v)),
            SqlValue::F64(v) => from_float(*v),
            // some drivers hand back a numeric zero as an integer
            SqlValue::I64(v) => Ok(Money::unknown(Decimal::new(*v, 0))),
            SqlValue::Text(s) => parse_text(s.as_bytes()),
            SqlValue::Bytes(b) => parse_text(b),
            SqlValue::Null => Err(MoneyError::UnsupportedSqlValue(value.kind())),
        }
    }

    /// The plain decimal string, ready for a NUMERIC or TEXT column.
    pub fn value(&self) -> SqlValue {
        SqlValue::Text(self.to_text())
    }
}

// ============================================================================
// Nullable Money
// ============================================================================

/// Money column that may hold SQL NULL, distinct from zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullMoney(pub Option<Money>);

impl NullMoney {
    pub fn scan(value: &SqlValue) -> MoneyResult<NullMoney> {
        match value {
            SqlValue::Null => Ok(NullMoney(None)),
            other => Money::scan(other).map(|m| NullMoney(Some(m))),
        }
    }

    pub fn value(&self) -> SqlValue {
        match &self.0 {
            Some(money) => money.value(),
            None => SqlValue::Null,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Money> for NullMoney {
    fn from(money: Money) -> Self {
        NullMoney(Some(money))
    }
}

impl From<Option<Money>> for NullMoney {
    fn from(money: Option<Money>) -> Self {
        NullMoney(money)
    }
}
