//! Currency formatting for displaying amounts.
//!
//! The calculator only deals in raw [`Decimal`] values. Turning those into
//! text like `$1,234.50` happens here, keyed by an ISO 4217 currency code.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up_dp;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("invalid currency code '{0}': expected three ASCII letters")]
    InvalidCode(String),
}

/// A three-letter ISO 4217 currency code, stored upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    pub const USD: CurrencyCode = CurrencyCode(*b"USD");

    /// Parses a code, accepting any letter case (`"eur"` -> `EUR`).
    pub fn new(code: &str) -> Result<Self, CurrencyError> {
        let trimmed = code.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(CurrencyError::InvalidCode(code.to_string()));
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Display symbol for well-known codes.
    pub fn symbol(&self) -> Option<&'static str> {
        match self.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            "BRL" => Some("R$"),
            "INR" => Some("₹"),
            "KRW" => Some("₩"),
            "CAD" => Some("CA$"),
            "AUD" => Some("A$"),
            "MXN" => Some("MX$"),
            _ => None,
        }
    }

    /// Number of decimal places in the currency's minor unit.
    pub fn minor_units(&self) -> u32 {
        match self.as_str() {
            "JPY" | "KRW" | "CLP" | "ISK" | "VND" => 0,
            "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
            _ => 2,
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::USD
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(&code)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats `value` as an amount of `code`.
///
/// Rounds half-up to the currency's minor units and groups thousands with
/// commas. Known codes use their symbol as a prefix; others are prefixed
/// with the code and a space.
///
/// ```
/// use rust_decimal_macros::dec;
/// use split_core::{CurrencyCode, format_currency};
///
/// let usd = CurrencyCode::new("USD").unwrap();
/// assert_eq!(format_currency(&usd, dec!(1234.5)), "$1,234.50");
///
/// let chf = CurrencyCode::new("chf").unwrap();
/// assert_eq!(format_currency(&chf, dec!(30)), "CHF 30.00");
/// ```
pub fn format_currency(
    code: &CurrencyCode,
    value: Decimal,
) -> String {
    let dp = code.minor_units();
    let rounded = round_half_up_dp(value, dp);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.*}", dp as usize, rounded.abs());
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut body = group_thousands(whole);
    if let Some(fraction) = fraction {
        body.push('.');
        body.push_str(fraction);
    }

    match code.symbol() {
        Some(symbol) => format!("{sign}{symbol}{body}"),
        None => format!("{sign}{code} {body}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
