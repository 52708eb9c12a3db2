//! Currency definitions and the built-in fixture
//!
//! A currency is identified by its code and carries a rate relative to the
//! base currency (USD): how many units of it buy one unit of the base.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A single currency with its display metadata and rate
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawCurrency")]
pub struct Currency {
    /// Upper-case code (e.g., "USD", "EUR")
    pub code: String,
    /// Display label (e.g., "Euro")
    pub name: String,
    /// Flag emoji shown on cards
    pub flag: String,
    /// Units of this currency per one unit of the base currency
    pub rate: Decimal,
}

impl Currency {
    pub fn new(code: &str, name: &str, flag: &str, rate: Decimal) -> Self {
        Self {
            code: code.trim().to_ascii_uppercase(),
            name: name.to_string(),
            flag: flag.to_string(),
            rate,
        }
    }

    /// Check whether this currency answers to `code` (case-insensitive)
    pub fn is(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Built-in rate fixture, base USD.
/// To add a currency, add an entry here; selectors and cards pick it up.
pub fn fixture() -> Vec<Currency> {
    vec![
        Currency::new("USD", "US Dollar", "🇺🇸", Decimal::ONE),
        Currency::new("EUR", "Euro", "🇪🇺", Decimal::new(9384, 4)),
        Currency::new("KZT", "Kazakhstani Tenge", "🇰🇿", Decimal::new(1075, 5)),
        Currency::new("CAD", "Canadian Dollar", "🇨🇦", Decimal::new(136, 2)),
        Currency::new("JPY", "Japanese Yen", "🇯🇵", Decimal::ONE),
        Currency::new("GBP", "British Pound", "🇬🇧", Decimal::new(79, 2)),
    ]
}

/// Rate as it appears in JSON: `0.92` or `"0.92"`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRate {
    Number(f64),
    Text(String),
}

/// Wire format for a currency entry in a rates file
#[derive(Deserialize)]
struct RawCurrency {
    code: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    flag: String,
    rate: RawRate,
}

impl TryFrom<RawCurrency> for Currency {
    type Error = String;

    fn try_from(raw: RawCurrency) -> Result<Self, Self::Error> {
        // f64 Display gives the shortest round-trip form, so 0.92 stays 0.92
        let text = match raw.rate {
            RawRate::Number(n) => n.to_string(),
            RawRate::Text(s) => s,
        };
        let rate = Decimal::from_str(text.trim())
            .map_err(|e| format!("invalid rate {text:?} for {}: {e}", raw.code))?;
        Ok(Currency::new(&raw.code, &raw.name, &raw.flag, rate))
    }
}
