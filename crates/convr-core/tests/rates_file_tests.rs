//! Loading rate tables from JSON files

use convr_core::{Converter, RateError, RateTable};
use std::io::Write;

fn write_rates(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_rates_file() {
    let file = write_rates(
        r#"[
            {"code": "USD", "name": "US Dollar", "flag": "🇺🇸", "rate": 1},
            {"code": "EUR", "name": "Euro", "flag": "🇪🇺", "rate": 0.5}
        ]"#,
    );
    let table = RateTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 2);

    let mut converter = Converter::new(table);
    converter.set_target("EUR").unwrap();
    assert_eq!(converter.converted_text(), "50");
    assert_eq!(converter.caption(), "1 USD = 0.50 EUR");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let res = RateTable::load(&dir.path().join("rates.json"));
    assert!(matches!(res, Err(RateError::Io(_))));
}

#[test]
fn test_invalid_rate_in_file() {
    let file = write_rates(r#"[{"code": "USD", "rate": -1}]"#);
    let res = RateTable::load(file.path());
    assert!(matches!(res, Err(RateError::NonPositiveRate { .. })));
}

#[test]
fn test_empty_table_in_file() {
    let file = write_rates("[]");
    assert!(matches!(RateTable::load(file.path()), Err(RateError::Empty)));
}

#[test]
fn test_error_messages() {
    let file = write_rates(r#"[{"code": "USD", "rate": 1}, {"code": "usd", "rate": 2}]"#);
    let err = RateTable::load(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "duplicate currency code: USD");
}
