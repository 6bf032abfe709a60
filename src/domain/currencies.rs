// ============================================================================
// Built-in Currencies
// ISO 4217 fiat codes plus the supported cryptocurrencies
// ============================================================================
//
// Codes here must stay 3 ASCII characters: the binary codec relies on it.

use super::currency::{Currency, CurrencyType};
use std::sync::Arc;

/// (code, fraction digits, grapheme, template)
type Entry = (&'static str, u32, &'static str, &'static str);

const FIAT: &[Entry] = &[
    ("AED", 2, ".\u{062f}.\u{0625}", "1 $"),
    ("AFN", 2, "\u{060b}", "1 $"),
    ("ALL", 2, "L", "$1"),
    ("AMD", 2, "\u{0564}\u{0580}.", "1 $"),
    ("ANG", 2, "\u{0192}", "$1"),
    ("ARS", 2, "$", "$1"),
    ("AUD", 2, "$", "$1"),
    ("AWG", 2, "\u{0192}", "$1"),
    ("AZN", 2, "\u{20bc}", "$1"),
    ("BAM", 2, "KM", "$1"),
    ("BBD", 2, "$", "$1"),
    ("BGN", 2, "\u{043b}\u{0432}", "$1"),
    ("BHD", 3, ".\u{062f}.\u{0628}", "1 $"),
    ("BMD", 2, "$", "$1"),
    ("BND", 2, "$", "$1"),
    ("BOB", 2, "Bs.", "$1"),
    ("BRL", 2, "R$", "$1"),
    ("BSD", 2, "$", "$1"),
    ("BWP", 2, "P", "$1"),
    ("BYN", 2, "p.", "1 $"),
    ("BYR", 0, "p.", "1 $"),
    ("BZD", 2, "BZ$", "$1"),
    ("CAD", 2, "$", "$1"),
    ("CLP", 0, "$", "$1"),
    ("CNY", 2, "\u{5143}", "1 $"),
    ("COP", 0, "$", "$1"),
    ("CRC", 2, "\u{20a1}", "$1"),
    ("CUP", 2, "$MN", "$1"),
    ("CZK", 2, "K\u{010d}", "1 $"),
    ("DKK", 2, "kr", "1 $"),
    ("DOP", 2, "RD$", "$1"),
    ("DZD", 2, ".\u{062f}.\u{062c}", "1 $"),
    ("EEK", 2, "kr", "$1"),
    ("EGP", 2, "\u{00a3}", "$1"),
    ("EUR", 2, "\u{20ac}", "$1"),
    ("FJD", 2, "$", "$1"),
    ("FKP", 2, "\u{00a3}", "$1"),
    ("GBP", 2, "\u{00a3}", "$1"),
    ("GGP", 2, "\u{00a3}", "$1"),
    ("GHC", 2, "\u{00a2}", "$1"),
    ("GIP", 2, "\u{00a3}", "$1"),
    ("GTQ", 2, "Q", "$1"),
    ("GYD", 2, "$", "$1"),
    ("HKD", 2, "$", "$1"),
    ("HNL", 2, "L", "$1"),
    ("HRK", 2, "kn", "$1"),
    ("HUF", 0, "Ft", "$1"),
    ("IDR", 2, "Rp", "$1"),
    ("ILS", 2, "\u{20aa}", "$1"),
    ("IMP", 2, "\u{00a3}", "$1"),
    ("INR", 2, "\u{20b9}", "$1"),
    ("IQD", 3, ".\u{062f}.\u{0639}", "1 $"),
    ("IRR", 2, "\u{fdfc}", "1 $"),
    ("ISK", 2, "kr", "$1"),
    ("JEP", 2, "\u{00a3}", "$1"),
    ("JMD", 2, "J$", "$1"),
    ("JOD", 3, ".\u{062f}.\u{0625}", "1 $"),
    ("JPY", 0, "\u{00a5}", "$1"),
    ("KES", 2, "KSh", "$1"),
    ("KGS", 2, "\u{0441}\u{043e}\u{043c}", "$1"),
    ("KHR", 2, "\u{17db}", "$1"),
    ("KPW", 0, "\u{20a9}", "$1"),
    ("KRW", 0, "\u{20a9}", "$1"),
    ("KWD", 3, ".\u{062f}.\u{0643}", "1 $"),
    ("KYD", 2, "$", "$1"),
    ("KZT", 2, "\u{20b8}", "$1"),
    ("LAK", 2, "\u{20ad}", "$1"),
    ("LBP", 2, "\u{00a3}", "$1"),
    ("LKR", 2, "\u{20a8}", "$1"),
    ("LRD", 2, "$", "$1"),
    ("LTL", 2, "Lt", "$1"),
    ("LVL", 2, "Ls", "1 $"),
    ("LYD", 3, ".\u{062f}.\u{0644}", "1 $"),
    ("MAD", 2, ".\u{062f}.\u{0645}", "1 $"),
    ("MKD", 2, "\u{0434}\u{0435}\u{043d}", "$1"),
    ("MNT", 2, "\u{20ae}", "$1"),
    ("MUR", 2, "\u{20a8}", "$1"),
    ("MXN", 2, "$", "$1"),
    ("MWK", 2, "MK", "$1"),
    ("MYR", 2, "RM", "$1"),
    ("MZN", 2, "MT", "$1"),
    ("NAD", 2, "$", "$1"),
    ("NGN", 2, "\u{20a6}", "$1"),
    ("NIO", 2, "C$", "$1"),
    ("NOK", 2, "kr", "1 $"),
    ("NPR", 2, "\u{20a8}", "$1"),
    ("NZD", 2, "$", "$1"),
    ("OMR", 3, "\u{fdfc}", "1 $"),
    ("PAB", 2, "B/.", "$1"),
    ("PEN", 2, "S/", "$1"),
    ("PHP", 2, "\u{20b1}", "$1"),
    ("PKR", 2, "\u{20a8}", "$1"),
    ("PLN", 2, "z\u{0142}", "1 $"),
    ("PYG", 0, "Gs", "1$"),
    ("QAR", 2, "\u{fdfc}", "1 $"),
    ("RON", 2, "lei", "$1"),
    ("RSD", 2, "\u{0414}\u{0438}\u{043d}.", "$1"),
    ("RUB", 2, "\u{20bd}", "1 $"),
    ("RUR", 2, "\u{20bd}", "1 $"),
    ("SAR", 2, "\u{fdfc}", "1 $"),
    ("SBD", 2, "$", "$1"),
    ("SCR", 2, "\u{20a8}", "$1"),
    ("SEK", 2, "kr", "1 $"),
    ("SGD", 2, "$", "$1"),
    ("SHP", 2, "\u{00a3}", "$1"),
    ("SOS", 2, "S", "$1"),
    ("SRD", 2, "$", "$1"),
    ("SVC", 2, "$", "$1"),
    ("SYP", 2, "\u{00a3}", "$1"),
    ("THB", 2, "\u{0e3f}", "$1"),
    ("TND", 3, ".\u{062f}.\u{062a}", "1 $"),
    ("TRL", 2, "\u{20a4}", "$1"),
    ("TRY", 2, "\u{20ba}", "$1"),
    ("TTD", 2, "TT$", "$1"),
    ("TWD", 0, "NT$", "$1"),
    ("TZS", 0, "TSh", "$1"),
    ("UAH", 2, "\u{20b4}", "$1"),
    ("UGX", 0, "USh", "$1"),
    ("USD", 2, "$", "$1"),
    ("UYU", 0, "$U", "$1"),
    ("UZS", 2, "so\u{2019}m", "$1"),
    ("VEF", 2, "Bs", "$1"),
    ("VND", 0, "\u{20ab}", "1 $"),
    ("XCD", 2, "$", "$1"),
    ("YER", 2, "\u{fdfc}", "1 $"),
    ("ZAR", 2, "R", "$1"),
    ("ZMW", 2, "ZK", "$1"),
    ("ZWD", 2, "Z$", "$1"),
];

// Bitcoin has two accepted codes; ISO 4217 is moving to XBT.
const CRYPTO: &[Entry] = &[
    ("BTC", 8, "\u{20bf}", "$1"),
    ("XBT", 8, "\u{20bf}", "$1"),
];

fn table(
    entries: &'static [Entry],
    currency_type: CurrencyType,
) -> impl Iterator<Item = Arc<Currency>> {
    entries.iter().map(move |&(code, fraction, grapheme, template)| {
        Arc::new(Currency::new(currency_type, code, fraction, grapheme, template))
    })
}

/// ISO 4217 currencies plus the unknown placeholder.
pub fn iso() -> impl Iterator<Item = Arc<Currency>> {
    table(FIAT, CurrencyType::Fiat).chain(std::iter::once(Currency::unknown()))
}

/// Every built-in currency, including the unknown placeholder.
pub fn builtin() -> impl Iterator<Item = Arc<Currency>> {
    iso().chain(table(CRYPTO, CurrencyType::Crypto))
}
