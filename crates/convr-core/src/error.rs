//! Error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or loading a rate table
#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate table is empty")]
    Empty,
    #[error("currency code must not be empty")]
    EmptyCode,
    #[error("duplicate currency code: {0}")]
    DuplicateCode(String),
    #[error("rate for {code} must be positive, got {rate}")]
    NonPositiveRate { code: String, rate: Decimal },
    #[error("failed to parse rates: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read rates file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by converter state operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("the converted amount is read-only")]
    ReadOnlyField,
}
