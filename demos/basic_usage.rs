// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with: cargo run --example basic_usage --features logging
// Set RUST_LOG=fixed_money=debug to see registry and precision events.

use fixed_money::codec::SqlValue;
use fixed_money::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Fixed Money Example ===\n");

    // Registry with the built-in table plus one custom currency
    let config = MoneyConfig::new()
        .with_division_precision(10)
        .with_currency(Currency::new(CurrencyType::Game, "GEM", 0, "\u{1f48e}", "1 $"));
    if let Err(e) = config.apply() {
        eprintln!("invalid configuration: {}", e);
        return;
    }
    let registry = match config.build_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return;
        },
    };
    println!("Registry holds {} currencies\n", registry.len());

    // Invoice lines in USD
    println!("=== Invoice ===");
    let lines: Vec<Money> = ["19.99", "5.01", "1234.5"]
        .iter()
        .map(|v| Money::require_parse(&registry, "USD", v))
        .collect();
    for line in &lines {
        println!("  {:>12}", line.format_currency());
    }

    let subtotal = sum(&lines[0], &lines[1..]);
    let rate = Money::require_parse(&registry, "USD", "0.0825");
    let tax = (&subtotal * &rate).round(2);
    let total = &subtotal + &tax;

    println!("  Subtotal: {}", subtotal.format_currency());
    println!("  Tax:      {}", tax.format_currency());
    println!("  Total:    {}", total.format_currency());
    println!("  Cash:     {}", total.format_cash(5));
    println!("  Average:  {}", avg(&lines[0], &lines[1..]).string_fixed(4));

    // Refund rendering
    println!("\n=== Refund ===");
    let refund = -&total;
    println!("  Currency:   {}", refund.format_currency());
    println!("  Accounting: {}", refund.format_accounting());

    // Locale-specific templates
    println!("\n=== Other Currencies ===");
    for (code, value) in [("EUR", "-1234.567"), ("SEK", "98765.4"), ("JPY", "1500000"), ("BTC", "0.00012345"), ("GEM", "250")] {
        match Money::parse(&registry, code, value) {
            Ok(m) => println!("  {}: {}", code, m.format_currency()),
            Err(e) => println!("  {}: {}", code, e),
        }
    }

    // Currency safety
    println!("\n=== Mismatched Currencies ===");
    let eur = Money::require_parse(&registry, "EUR", "10");
    match total.checked_add(&eur) {
        Ok(sum) => println!("  unexpected sum {}", sum),
        Err(e) => println!("  rejected (fatal: {}): {}", e.is_fatal(), e),
    }
    match Money::parse(&registry, "XYZ", "1") {
        Ok(m) => println!("  unexpected {:?}", m),
        Err(e) => println!("  rejected: {} -> {:?}", e, e.sentinel()),
    }

    // Storage round trips
    println!("\n=== Storage ===");
    match total.to_binary() {
        Ok(bytes) => {
            println!("  binary: {} bytes", bytes.len());
            match Money::from_binary(&registry, &bytes) {
                Ok(decoded) => println!("  decoded: {:?}", decoded),
                Err(e) => println!("  decode failed: {}", e),
            }
        },
        Err(e) => println!("  encode failed: {}", e),
    }

    match Money::scan(&SqlValue::Text("\"42.10\"".into())) {
        Ok(mut scanned) => {
            println!("  scanned: {:?}", scanned);
            if scanned.update_currency(&registry, "GBP").is_ok() {
                println!("  as GBP:  {}", scanned.format_currency());
            }
        },
        Err(e) => println!("  scan failed: {}", e),
    }
}
