//! Rate table and start-up state resolution
//!
//! The rate table comes from `--rates`, then `rates.json` in the config
//! directory (`~/.config/convr/` or platform equivalent), then the
//! built-in fixture.

use anyhow::{Context, Result};
use convr_core::{Converter, RateTable};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::RatesOrigin;

/// Name of the optional rates file in the config directory
pub const RATES_FILE: &str = "rates.json";

/// Initial selections and amount from the command line
#[derive(Debug, Default, Clone)]
pub struct Startup {
    pub rates: Option<PathBuf>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// Pick and load the rate table
pub fn load_rate_table(
    explicit: Option<&Path>,
    config_dir: Option<&Path>,
) -> Result<(RateTable, RatesOrigin)> {
    if let Some(path) = explicit {
        let table = RateTable::load(path)
            .with_context(|| format!("Failed to load rates from {}", path.display()))?;
        return Ok((table, RatesOrigin::File(path.display().to_string())));
    }

    if let Some(path) = config_dir.map(|dir| dir.join(RATES_FILE)) {
        if path.exists() {
            let table = RateTable::load(&path)
                .with_context(|| format!("Failed to load rates from {}", path.display()))?;
            return Ok((table, RatesOrigin::File(path.display().to_string())));
        }
    }

    info!("using built-in rates");
    Ok((RateTable::fixture(), RatesOrigin::Fixture))
}

/// Build the converter with start-up selections applied
pub fn build_converter(table: RateTable, startup: &Startup) -> Result<Converter> {
    let mut converter = Converter::new(table);

    if let Some(code) = &startup.from {
        converter
            .set_source(code)
            .with_context(|| format!("Invalid --from {code}"))?;
    }
    if let Some(code) = &startup.to {
        converter
            .set_target(code)
            .with_context(|| format!("Invalid --to {code}"))?;
    }
    if let Some(amount) = &startup.amount {
        converter.set_amount(amount);
    }

    Ok(converter)
}
