//! WebAssembly bindings for convr-core
//!
//! This module provides wasm-bindgen bindings for use in web applications.
//! Enable the "wasm" feature to use these bindings.

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{Converter, RateTable};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible wrapper for the converter state
#[wasm_bindgen]
pub struct WasmConverter {
    converter: Converter,
}

#[wasm_bindgen]
impl WasmConverter {
    /// Create a converter over the built-in fixture
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            converter: Converter::default(),
        }
    }

    /// Create a converter from a JSON rate table:
    /// [{"code": "EUR", "name": "Euro", "flag": "🇪🇺", "rate": 0.92}, ...]
    #[wasm_bindgen]
    pub fn from_rates_json(rates_json: &str) -> Result<WasmConverter, JsValue> {
        let table = RateTable::from_json(rates_json).map_err(to_js)?;
        Ok(Self {
            converter: Converter::new(table),
        })
    }

    #[wasm_bindgen]
    pub fn set_amount(&mut self, text: &str) {
        self.converter.set_amount(text);
    }

    #[wasm_bindgen]
    pub fn clear_amount(&mut self) {
        self.converter.clear_amount();
    }

    #[wasm_bindgen]
    pub fn set_source(&mut self, code: &str) -> Result<(), JsValue> {
        self.converter.set_source(code).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn set_target(&mut self, code: &str) -> Result<(), JsValue> {
        self.converter.set_target(code).map_err(to_js)
    }

    /// Swap source and target currencies
    #[wasm_bindgen]
    pub fn reverse(&mut self) {
        self.converter.reverse();
    }

    /// Raw left-hand text
    #[wasm_bindgen]
    pub fn amount(&self) -> String {
        self.converter.amount().to_string()
    }

    /// Converted amount as displayed, empty when the amount is not a number
    #[wasm_bindgen]
    pub fn converted(&self) -> String {
        self.converter.converted_text()
    }

    #[wasm_bindgen]
    pub fn caption(&self) -> String {
        self.converter.caption()
    }

    #[wasm_bindgen]
    pub fn source(&self) -> String {
        self.converter.source().code.clone()
    }

    #[wasm_bindgen]
    pub fn target(&self) -> String {
        self.converter.target().code.clone()
    }

    /// Selector options as a JSON array of codes
    #[wasm_bindgen]
    pub fn codes_json(&self) -> String {
        let codes: Vec<&str> = self.converter.table().codes().collect();
        serde_json::to_string(&codes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Currency cards as JSON
    #[wasm_bindgen]
    pub fn cards_json(&self) -> String {
        serde_json::to_string(&self.converter.cards()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Full state snapshot as JSON
    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.converter.state())
            .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.to_string())
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
