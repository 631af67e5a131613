use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Leading currency marker: a symbol such as `$`, `R$` or `€`, or a
/// three-letter code. Only stripped when a number follows it.
fn currency_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z]{3}|[A-Z]{0,2}[$€£¥₹₩])")
            .expect("currency prefix pattern is valid")
    })
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// currency marker and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest.trim_start()),
        None => ("", trimmed),
    };
    let unprefixed = match currency_prefix().find(rest) {
        Some(m) => {
            let after = rest[m.end()..].trim_start();
            if after.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                after
            } else {
                rest
            }
        }
        None => rest,
    };
    format!("{sign}{}", unprefixed.trim().replace(',', ""))
}

/// Parses a typed check amount into a [`Decimal`].
///
/// Accepts what a user would type into an amount field: `"1,234.56"`,
/// `"$42"`, `"EUR 12.50"`. Empty or whitespace-only input is treated as 0.
/// Negative values parse; rejecting them is up to the caller.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() || normalized == "-" {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}
