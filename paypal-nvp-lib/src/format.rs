//! Conversion of native values into the gateway's string encodings.
//!
//! [`amount`] turns native numbers into wire strings. It does not
//! validate and goes through `f64`, so setters never use it: they take
//! already formatted strings and canonicalise them in whole cents.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use paypal_nvp_lib::format::{self, FieldValue};
//!
//! assert_eq!(format::amount(24.7), "24.70");
//! assert_eq!(format::amount(5), "5.00");
//! assert_eq!(format::amount(FieldValue::Null), "0.00");
//!
//! let expiry = NaiveDate::from_ymd_opt(2027, 3, 1).unwrap();
//! assert_eq!(format::card_expiry(expiry).unwrap(), "032027");
//! ```

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::{NvpError, Result};

const ZERO_AMOUNT: &str = "0.00";

/// A native value handed to one of the formatters.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// No value.
    Null,
    /// Floating point number.
    Float(f64),
    /// Integer.
    Integer(i64),
    /// Free text, possibly numeric.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Calendar date and time in UTC.
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Float(_) => "float",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// Formats an amount with exactly two decimals.
///
/// Null and negative values become `"0.00"`. Text goes through
/// [`amount_lossy_fallback`].
pub fn amount(value: impl Into<FieldValue>) -> String {
    match value.into() {
        FieldValue::Float(value) => format_float(value),
        FieldValue::Integer(value) if value >= 0 => format!("{}.00", value),
        FieldValue::Text(text) => amount_lossy_fallback(&text),
        _ => ZERO_AMOUNT.to_string(),
    }
}

/// Parses numeric-looking text and formats it, silently returning `"0.00"`
/// when the text is not a number.
///
/// This swallows malformed input instead of failing. Kept for wire
/// compatibility; callers that need strictness validate first.
pub fn amount_lossy_fallback(text: &str) -> String {
    match text.trim().parse::<f64>() {
        Ok(value) => format_float(value),
        Err(_) => ZERO_AMOUNT.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return ZERO_AMOUNT.to_string();
    }
    format!("{:.2}", value)
}

/// ISO-8601 UTC timestamp, e.g. `2006-08-24T05:38:48Z`.
pub fn datetime_utc(value: impl Into<FieldValue>) -> Result<String> {
    match value.into() {
        FieldValue::DateTime(value) => Ok(value.to_rfc3339_opts(SecondsFormat::Secs, true)),
        other => Err(NvpError::TypeMismatch {
            expected: "datetime",
            found: other.kind(),
        }),
    }
}

/// Card expiry date as `MMYYYY`.
pub fn card_expiry(value: impl Into<FieldValue>) -> Result<String> {
    match value.into() {
        FieldValue::Date(value) => Ok(value.format("%m%Y").to_string()),
        other => Err(NvpError::TypeMismatch {
            expected: "date",
            found: other.kind(),
        }),
    }
}

/// Whole cents of an already validated amount string (`"24.70"` -> `2470`).
///
/// `None` when the amount does not fit in a `u64`.
pub(crate) fn parse_cents(amount: &str) -> Option<u64> {
    let digits: String = amount.chars().filter(|c| *c != '.').collect();
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<u64>().ok()
}

/// Inverse of [`parse_cents`] without going through floating point.
///
/// Takes a `u128` so that sums of `u64` amounts never overflow.
pub(crate) fn format_cents(cents: u128) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_amount_float_and_integer() {
        assert_eq!(amount(24.7), "24.70");
        assert_eq!(amount(0.5f32), "0.50");
        assert_eq!(amount(5), "5.00");
        assert_eq!(amount(0), "0.00");
    }

    #[test]
    fn test_amount_null_and_negative() {
        assert_eq!(amount(FieldValue::Null), "0.00");
        assert_eq!(amount(None::<f64>), "0.00");
        assert_eq!(amount(-1), "0.00");
        assert_eq!(amount(-0.5), "0.00");
        assert_eq!(amount(-0.0), "0.00");
        assert_eq!(amount(f64::NAN), "0.00");
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(amount("12.5"), "12.50");
        assert_eq!(amount("7"), "7.00");
        assert_eq!(amount(" 3.456 "), "3.46");
        assert_eq!(amount("-4.00"), "0.00");
    }

    #[test]
    fn test_lossy_fallback() {
        assert_eq!(amount("not-a-number"), "0.00");
        assert_eq!(amount_lossy_fallback(""), "0.00");
        assert_eq!(amount_lossy_fallback("1,50"), "0.00");
        assert_eq!(amount_lossy_fallback("1e2"), "100.00");
    }

    #[test]
    fn test_amount_non_numeric_kinds() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(amount(date), "0.00");
    }

    #[test]
    fn test_datetime_utc() {
        let stamp = Utc.with_ymd_and_hms(2006, 8, 24, 5, 38, 48).unwrap();
        assert_eq!(datetime_utc(stamp).unwrap(), "2006-08-24T05:38:48Z");

        let err = datetime_utc("2006-08-24").unwrap_err();
        assert_eq!(
            err,
            NvpError::TypeMismatch {
                expected: "datetime",
                found: "text"
            }
        );
    }

    #[test]
    fn test_card_expiry() {
        let date = NaiveDate::from_ymd_opt(2027, 11, 30).unwrap();
        assert_eq!(card_expiry(date).unwrap(), "112027");

        let stamp = Utc.with_ymd_and_hms(2027, 11, 30, 0, 0, 0).unwrap();
        assert!(matches!(
            card_expiry(stamp),
            Err(NvpError::TypeMismatch { found: "datetime", .. })
        ));
    }

    #[test]
    fn test_cents_round_trip() {
        assert_eq!(parse_cents("24.70"), Some(2470));
        assert_eq!(parse_cents(".05"), Some(5));
        assert_eq!(parse_cents("0"), Some(0));
        assert_eq!(parse_cents("184467440737095516.15"), Some(u64::MAX));
        assert_eq!(parse_cents("184467440737095516.16"), None);
        assert_eq!(format_cents(2470), "24.70");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(
            format_cents(u128::from(u64::MAX) * 2),
            "368934881474191032.30"
        );
    }
}
