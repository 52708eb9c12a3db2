//! Rate table for currency conversion
//!
//! The table is built once per session, either from the built-in fixture or
//! from a JSON file of the form:
//!
//! ```json
//! [{ "code": "EUR", "name": "Euro", "flag": "🇪🇺", "rate": 0.92 }]
//! ```
//!
//! Rates are "units per one base unit", so converting between two entries
//! multiplies by `rate[to] / rate[from]`.

use crate::error::RateError;
use crate::types::{fixture, Currency};
use rust_decimal::Decimal;
use std::collections::HashSet;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use tracing::info;

/// Immutable, ordered set of currencies with their rates
#[derive(Debug, Clone)]
pub struct RateTable {
    currencies: Vec<Currency>,
}

impl RateTable {
    /// Build a table, rejecting empty tables, duplicate codes and
    /// non-positive rates
    pub fn new(currencies: Vec<Currency>) -> Result<Self, RateError> {
        if currencies.is_empty() {
            return Err(RateError::Empty);
        }

        let mut seen = HashSet::new();
        for currency in &currencies {
            if currency.code.is_empty() {
                return Err(RateError::EmptyCode);
            }
            if !seen.insert(currency.code.to_ascii_uppercase()) {
                return Err(RateError::DuplicateCode(currency.code.clone()));
            }
            if currency.rate <= Decimal::ZERO {
                return Err(RateError::NonPositiveRate {
                    code: currency.code.clone(),
                    rate: currency.rate,
                });
            }
        }

        Ok(Self { currencies })
    }

    /// The built-in six-currency table
    pub fn fixture() -> Self {
        Self {
            currencies: fixture(),
        }
    }

    /// Parse a JSON array of currencies
    pub fn from_json(json: &str) -> Result<Self, RateError> {
        let currencies: Vec<Currency> = serde_json::from_str(json)?;
        let table = Self::new(currencies)?;
        info!(currencies = table.len(), "loaded rate table");
        Ok(table)
    }

    /// Read a JSON rates file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &Path) -> Result<Self, RateError> {
        let content = std::fs::read_to_string(path)?;
        info!(path = %path.display(), "reading rates file");
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Currencies in table order
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter()
    }

    /// All codes in table order (for selectors)
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.iter().map(|c| c.code.as_str())
    }

    /// Position of a code in the table (case-insensitive)
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.currencies.iter().position(|c| c.is(code))
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.is(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Currency at a position known to be in range
    pub(crate) fn currency(&self, index: usize) -> &Currency {
        &self.currencies[index]
    }

    /// How many units of `to` one unit of `from` buys.
    /// Equal codes give exactly one without dividing.
    pub fn rate_between(&self, from: &str, to: &str) -> Option<Decimal> {
        let from = self.get(from)?;
        let to = self.get(to)?;
        ratio(from, to)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::fixture()
    }
}

/// Rate ratio between two currencies, `None` only on decimal overflow
pub(crate) fn ratio(from: &Currency, to: &Currency) -> Option<Decimal> {
    if from.code == to.code {
        return Some(Decimal::ONE);
    }
    to.rate.checked_div(from.rate)
}
