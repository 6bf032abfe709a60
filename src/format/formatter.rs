// ============================================================================
// Formatter
// Template-driven rendering of a decimal amount with currency display metadata
// ============================================================================

use crate::numeric::{Decimal, NumericResult, RoundingMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder for the numeric body inside a template
const AMOUNT_PLACEHOLDER: &str = "1";

/// Placeholder for the currency grapheme inside a template
const GRAPHEME_PLACEHOLDER: &str = "$";

// ============================================================================
// Format Options
// ============================================================================

/// Switches controlling one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Insert the thousand separator every three integer digits
    pub group_thousands: bool,
    /// Substitute the grapheme, otherwise strip its placeholder and trim
    pub show_grapheme: bool,
    /// Render negatives as `(…)` rather than with a leading `-`
    pub brackets_for_negatives: bool,
    /// How the amount is rounded to the currency's fraction digits
    pub rounding: RoundingMode,
}

impl FormatOptions {
    /// Grouped, with grapheme, minus-sign negatives: `-$1,234.50`
    pub const fn currency() -> Self {
        Self {
            group_thousands: true,
            show_grapheme: true,
            brackets_for_negatives: false,
            rounding: RoundingMode::HalfAwayFromZero,
        }
    }

    /// Ungrouped, no grapheme, bracketed negatives: `(1234.50)`
    pub const fn accounting() -> Self {
        Self {
            group_thousands: false,
            show_grapheme: false,
            brackets_for_negatives: true,
            rounding: RoundingMode::HalfAwayFromZero,
        }
    }

    pub const fn with_thousands(mut self, group_thousands: bool) -> Self {
        self.group_thousands = group_thousands;
        self
    }

    pub const fn with_grapheme(mut self, show_grapheme: bool) -> Self {
        self.show_grapheme = show_grapheme;
        self
    }

    pub const fn with_brackets(mut self, brackets_for_negatives: bool) -> Self {
        self.brackets_for_negatives = brackets_for_negatives;
        self
    }

    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::currency()
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// Display fields of a currency, detached from the registry.
///
/// ```
/// use fixed_money::format::Formatter;
/// use fixed_money::numeric::Decimal;
///
/// let usd = Formatter::new(2, ".", ",", "$", "$1");
/// let amount = Decimal::new(-12345, -3);
/// assert_eq!(usd.format_currency(&amount), "-$12.35");
/// assert_eq!(usd.format_accounting(&amount), "(12.35)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formatter {
    pub fraction: u32,
    pub decimal_point: String,
    pub thousand_separator: String,
    pub grapheme: String,
    pub template: String,
}

impl Formatter {
    pub fn new(
        fraction: u32,
        decimal_point: impl Into<String>,
        thousand_separator: impl Into<String>,
        grapheme: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            fraction,
            decimal_point: decimal_point.into(),
            thousand_separator: thousand_separator.into(),
            grapheme: grapheme.into(),
            template: template.into(),
        }
    }

    /// Render `amount` with explicit options.
    pub fn format_with_options(&self, amount: &Decimal, options: FormatOptions) -> String {
        let places = i32::try_from(self.fraction).unwrap_or(i32::MAX);
        let fixed = amount
            .abs()
            .round_with(places, options.rounding)
            .string_fixed(places);

        let (int_part, fraction_part) = match fixed.split_once('.') {
            Some((int_part, fraction_part)) => (int_part, fraction_part),
            None => (fixed.as_str(), ""),
        };

        let mut body = if options.group_thousands && !self.thousand_separator.is_empty() {
            group_digits(int_part, &self.thousand_separator)
        } else {
            int_part.to_string()
        };

        if !fraction_part.is_empty() {
            body.push_str(&self.decimal_point);
            body.push_str(fraction_part);
        }

        let mut out = self.template.replacen(AMOUNT_PLACEHOLDER, &body, 1);
        out = if options.show_grapheme {
            out.replacen(GRAPHEME_PLACEHOLDER, &self.grapheme, 1)
        } else {
            out.replacen(GRAPHEME_PLACEHOLDER, "", 1).trim().to_string()
        };

        if amount.is_negative() {
            if options.brackets_for_negatives {
                out = format!("({})", out);
            } else {
                out.insert(0, '-');
            }
        }
        out
    }

    pub fn format_currency(&self, amount: &Decimal) -> String {
        self.format_with_options(amount, FormatOptions::currency())
    }

    pub fn format_accounting(&self, amount: &Decimal) -> String {
        self.format_with_options(amount, FormatOptions::accounting())
    }

    /// [`Formatter::format_currency`] after cash rounding to `interval` hundredths.
    pub fn checked_format_cash(&self, amount: &Decimal, interval: u8) -> NumericResult<String> {
        let rounded = amount.checked_round_cash(interval)?;
        Ok(self.format_currency(&rounded))
    }

    /// # Panics
    /// Panics on an interval outside {5, 10, 15, 25, 50, 100}.
    pub fn format_cash(&self, amount: &Decimal, interval: u8) -> String {
        self.checked_format_cash(amount, interval)
            .unwrap_or_else(|e| panic!("{}", e))
    }
}

/// Insert `separator` every three digits from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
