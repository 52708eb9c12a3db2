//! Value types for convr

pub mod currency;

pub use currency::{fixture, Currency};
