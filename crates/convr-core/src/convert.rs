//! Amount parsing, conversion and display formatting

use crate::types::Currency;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse user-typed amount text.
///
/// Accepts an optional sign, digits and an optional fractional part,
/// surrounded by whitespace. Empty or anything else yields `None`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let text = input.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };

    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let canonical = if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    };

    // Too many digits for a Decimal is treated like any other bad input
    Decimal::from_str(&canonical).ok()
}

/// Convert `amount` from a currency with `source_rate` to one with
/// `target_rate`. `None` only when the result overflows.
pub fn convert_amount(amount: Decimal, source_rate: Decimal, target_rate: Decimal) -> Option<Decimal> {
    amount.checked_mul(target_rate)?.checked_div(source_rate)
}

/// Convert amount text, returning the display string of the result.
/// Unparseable input gives an empty string.
pub fn convert(amount: &str, source_rate: Decimal, target_rate: Decimal) -> String {
    parse_amount(amount)
        .and_then(|value| convert_amount(value, source_rate, target_rate))
        .map(format_amount)
        .unwrap_or_default()
}

/// Convert between two table entries.
///
/// Only a same-code pair is the identity. Distinct codes that share a rate
/// still go through `convert_amount` and are rounded like any other pair.
pub fn convert_currency(amount: Decimal, source: &Currency, target: &Currency) -> Option<Decimal> {
    if source.code == target.code {
        return Some(amount);
    }
    convert_amount(amount, source.rate, target.rate)
}

/// Display text of a value produced by `convert_currency`
pub fn format_converted(value: Decimal, source: &Currency, target: &Currency) -> String {
    if source.code == target.code {
        value.to_string()
    } else {
        format_amount(value)
    }
}

/// Format a converted amount (max 2 decimal places, trailing zeros trimmed)
pub fn format_amount(n: Decimal) -> String {
    let rounded = n.round_dp(2).normalize();
    if rounded.is_zero() {
        // normalize keeps the sign of negative zero
        return "0".to_string();
    }
    rounded.to_string()
}

/// Significant digits kept for rates below one
const RATE_SIGNIFICANT_DIGITS: u32 = 4;

/// Format an exchange rate for the caption and cards.
///
/// Rates of one or more show exactly 2 decimal places. Smaller rates keep
/// 4 significant digits (at least 2 decimal places) so that
/// `left × rate` still lands near the converted amount.
pub fn format_rate(n: Decimal) -> String {
    if n.is_zero() || n.abs() >= Decimal::ONE {
        return format!("{:.2}", n.round_dp(2));
    }

    let tenth = Decimal::new(1, 1);
    let mut dp = RATE_SIGNIFICANT_DIGITS;
    let mut scaled = n.abs();
    while scaled < tenth && dp < Decimal::MAX_SCALE {
        scaled *= Decimal::TEN;
        dp += 1;
    }

    let rounded = n.round_dp(dp).normalize();
    if rounded.scale() < 2 {
        format!("{rounded:.2}")
    } else {
        rounded.to_string()
    }
}
