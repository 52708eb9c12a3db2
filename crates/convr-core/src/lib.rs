//! convr-core: Core conversion engine for convr
//!
//! This crate provides the pure logic behind the currency converter: the
//! rate table, the conversion function and the converter state (selected
//! currencies, the typed amount and the derived converted amount). It has
//! no UI dependencies and can be used in TUI or WASM contexts.
//!
//! # Example
//!
//! ```
//! use convr_core::{Converter, RateTable};
//!
//! let mut converter = Converter::new(RateTable::fixture());
//!
//! // Defaults: 100, USD -> USD
//! assert_eq!(converter.converted_text(), "100");
//! assert_eq!(converter.caption(), "1 USD = 1.00 USD");
//!
//! converter.set_source("EUR").unwrap();
//! converter.set_target("JPY").unwrap();
//! converter.set_amount("50");
//! assert_eq!(converter.converted_text(), "53.28");
//!
//! converter.reverse();
//! assert_eq!(converter.converted_text(), "46.92");
//! ```

pub mod convert;
pub mod error;
pub mod rates;
pub mod types;
pub mod wasm;

pub use convert::{
    convert, convert_amount, convert_currency, format_amount, format_converted, format_rate,
    parse_amount,
};
pub use error::{ConvertError, RateError};
pub use rates::RateTable;
pub use types::{fixture, Currency};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// Amount shown in the left field on start
pub const DEFAULT_AMOUNT: &str = "100";

/// Code selected on both sides on start, when present in the table
pub const DEFAULT_CURRENCY: &str = "USD";

/// Converter state: two selections, the typed amount and the derived result
#[derive(Debug, Clone)]
pub struct Converter {
    table: RateTable,
    source: usize,
    target: usize,
    amount: String,
    converted: Option<Decimal>,
}

/// One entry of the currency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyCard {
    pub code: String,
    pub name: String,
    pub flag: String,
    /// Units of this currency one unit of the source currency buys
    pub quote: Option<String>,
    pub is_source: bool,
    pub is_target: bool,
}

/// Serializable snapshot of the converter (for browser bindings)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterState {
    pub source: String,
    pub target: String,
    pub amount: String,
    pub converted: String,
    pub caption: String,
}

impl Converter {
    /// Create a converter with default selections and amount
    pub fn new(table: RateTable) -> Self {
        let default = table.index_of(DEFAULT_CURRENCY).unwrap_or(0);
        let mut converter = Self {
            table,
            source: default,
            target: default,
            amount: DEFAULT_AMOUNT.to_string(),
            converted: None,
        };
        converter.recalculate();
        converter
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Currently selected source currency
    pub fn source(&self) -> &Currency {
        self.table.currency(self.source)
    }

    /// Currently selected target currency
    pub fn target(&self) -> &Currency {
        self.table.currency(self.target)
    }

    /// Raw left-hand text, exactly as typed
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Derived right-hand value; `None` when the left text is not a number
    pub fn converted(&self) -> Option<Decimal> {
        self.converted
    }

    /// Right-hand value as displayed (empty when there is no value)
    pub fn converted_text(&self) -> String {
        self.converted
            .map(|value| format_converted(value, self.source(), self.target()))
            .unwrap_or_default()
    }

    /// How many target units one source unit buys
    pub fn rate(&self) -> Option<Decimal> {
        rates::ratio(self.source(), self.target())
    }

    /// Caption of the form "1 USD = 0.9384 EUR"
    pub fn caption(&self) -> String {
        let rate = self.rate().map(format_rate);
        format!(
            "1 {} = {} {}",
            self.source().code,
            rate.as_deref().unwrap_or("n/a"),
            self.target().code
        )
    }

    /// Replace the left-hand text and recompute
    pub fn set_amount(&mut self, text: &str) {
        self.amount = text.to_string();
        self.recalculate();
    }

    /// Empty the left-hand field; the right-hand one follows
    pub fn clear_amount(&mut self) {
        self.set_amount("");
    }

    /// The right-hand field is derived-only and rejects every write
    pub fn set_converted(&mut self, text: &str) -> Result<(), ConvertError> {
        warn!(attempted = text, "rejected write to converted amount");
        Err(ConvertError::ReadOnlyField)
    }

    pub fn set_source(&mut self, code: &str) -> Result<(), ConvertError> {
        self.source = self.lookup(code)?;
        debug!(source = %self.source(), "source currency changed");
        self.recalculate();
        Ok(())
    }

    pub fn set_target(&mut self, code: &str) -> Result<(), ConvertError> {
        self.target = self.lookup(code)?;
        debug!(target = %self.target(), "target currency changed");
        self.recalculate();
        Ok(())
    }

    /// Move the source selector by `offset` entries, wrapping around
    pub fn step_source(&mut self, offset: isize) {
        self.source = self.step(self.source, offset);
        debug!(source = %self.source(), "source currency changed");
        self.recalculate();
    }

    /// Move the target selector by `offset` entries, wrapping around
    pub fn step_target(&mut self, offset: isize) {
        self.target = self.step(self.target, offset);
        debug!(target = %self.target(), "target currency changed");
        self.recalculate();
    }

    /// Swap source and target; the left-hand text stays as typed
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        debug!(source = %self.source(), target = %self.target(), "currencies reversed");
        self.recalculate();
    }

    /// One card per currency, quoted against the current source
    pub fn cards(&self) -> Vec<CurrencyCard> {
        let source = self.source();
        self.table
            .iter()
            .enumerate()
            .map(|(i, currency)| CurrencyCard {
                code: currency.code.clone(),
                name: currency.name.clone(),
                flag: currency.flag.clone(),
                quote: rates::ratio(source, currency).map(format_rate),
                is_source: i == self.source,
                is_target: i == self.target,
            })
            .collect()
    }

    /// Snapshot of everything a view needs to render
    pub fn state(&self) -> ConverterState {
        ConverterState {
            source: self.source().code.clone(),
            target: self.target().code.clone(),
            amount: self.amount.clone(),
            converted: self.converted_text(),
            caption: self.caption(),
        }
    }

    fn lookup(&self, code: &str) -> Result<usize, ConvertError> {
        self.table.index_of(code).ok_or_else(|| {
            warn!(code, "unknown currency");
            ConvertError::UnknownCurrency(code.to_string())
        })
    }

    fn step(&self, index: usize, offset: isize) -> usize {
        let len = self.table.len() as isize;
        (index as isize + offset).rem_euclid(len) as usize
    }

    /// Recompute the right-hand value from the left-hand text
    fn recalculate(&mut self) {
        let source = self.source();
        let target = self.target();
        let converted =
            parse_amount(&self.amount).and_then(|amount| convert_currency(amount, source, target));
        debug!(
            amount = %self.amount,
            source = %source,
            target = %target,
            converted = ?converted,
            "recalculated"
        );
        self.converted = converted;
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(RateTable::fixture())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_converter_defaults() {
        let converter = Converter::default();
        assert_eq!(converter.amount(), "100");
        assert_eq!(converter.source().code, "USD");
        assert_eq!(converter.target().code, "USD");
        assert_eq!(converter.converted(), Some(Decimal::from(100)));
    }

    #[test]
    fn test_converter_default_without_usd() {
        let table = RateTable::new(vec![
            Currency::new("EUR", "Euro", "", Decimal::ONE),
            Currency::new("GBP", "Pound", "", Decimal::TWO),
        ])
        .unwrap();
        let converter = Converter::new(table);
        assert_eq!(converter.source().code, "EUR");
        assert_eq!(converter.target().code, "EUR");
    }

    #[test]
    fn test_unknown_code_leaves_state() {
        let mut converter = Converter::default();
        assert_eq!(
            converter.set_target("XYZ"),
            Err(ConvertError::UnknownCurrency("XYZ".to_string()))
        );
        assert_eq!(converter.target().code, "USD");
        assert_eq!(converter.converted_text(), "100");
    }

    #[test]
    fn test_step_wraps() {
        let mut converter = Converter::default();
        converter.step_source(-1);
        assert_eq!(converter.source().code, "GBP");
        converter.step_source(1);
        assert_eq!(converter.source().code, "USD");
        converter.step_target(7);
        assert_eq!(converter.target().code, "EUR");
    }

    #[test]
    fn test_shared_rate_is_not_identity() {
        let mut converter = Converter::default();
        converter.set_target("JPY").unwrap();
        converter.set_amount("1.23456");
        assert_eq!(converter.converted_text(), "1.23");
        assert_eq!(
            converter.converted_text(),
            convert("1.23456", converter.source().rate, converter.target().rate)
        );
    }

    #[test]
    fn test_state_snapshot() {
        let mut converter = Converter::default();
        converter.set_target("KZT").unwrap();
        converter.set_amount("200");
        assert_eq!(
            converter.state(),
            ConverterState {
                source: "USD".to_string(),
                target: "KZT".to_string(),
                amount: "200".to_string(),
                converted: "2.15".to_string(),
                caption: "1 USD = 0.01075 KZT".to_string(),
            }
        );
    }
}
