// ============================================================================
// Format Module
// Locale-styled rendering of amounts under a currency template
// ============================================================================
//
// Pipeline: round to the currency's fraction digits, group thousands,
// join the fraction, fill the template, place or strip the grapheme,
// then mark negatives with a minus sign or brackets.

mod formatter;

pub use formatter::{FormatOptions, Formatter};
