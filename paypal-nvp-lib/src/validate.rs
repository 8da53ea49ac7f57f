//! Field validation.
//!
//! The four `is_valid_*` predicates are pure and reject empty input up
//! front. The `check_*` helpers wrap them (and the per-field length ceilings)
//! into [`NvpError::Validation`] results for use by setters.

use std::sync::LazyLock;

use regex::Regex;

use crate::format::{format_cents, parse_cents};
use crate::{NvpError, Result};

static AMOUNT_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^([0-9]*\.[0-9]{2}|0)$"));

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(r"^[_A-Za-z0-9-]+(\.[_A-Za-z0-9-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(\.[_A-Za-z0-9-]+)$")
});

static HEXCOLOR_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9a-fA-F]{6}$"));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(error) => {
            tracing::error!(%pattern, %error, "invalid validation pattern");
            None
        }
    }
}

fn full_match(regex: &LazyLock<Option<Regex>>, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    regex
        .as_ref()
        .map(|regex| regex.is_match(value))
        .unwrap_or(false)
}

/// Checks that `amount` is a gateway amount: digits, a `.` and exactly two
/// decimals, or the literal `0`.
///
/// ```
/// use paypal_nvp_lib::validate::is_valid_amount;
///
/// assert!(is_valid_amount("24.70"));
/// assert!(is_valid_amount(".50"));
/// assert!(is_valid_amount("0"));
/// assert!(!is_valid_amount("24.7"));
/// assert!(!is_valid_amount("24,70"));
/// ```
pub fn is_valid_amount(amount: &str) -> bool {
    full_match(&AMOUNT_REGEX, amount)
}

/// Checks `local@domain.tld` shape. Length is not checked here since the
/// ceiling differs between requests.
pub fn is_valid_email(address: &str) -> bool {
    full_match(&EMAIL_REGEX, address)
}

/// Checks a six digit HTML hex color without the leading `#`.
pub fn is_valid_hexcolor(color: &str) -> bool {
    full_match(&HEXCOLOR_REGEX, color)
}

/// Luhn (mod 10) checksum over the digits of `number`.
///
/// Anything other than ASCII digits is rejected.
pub fn is_valid_luhn(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 1 {
                let doubled = digit * 2;
                doubled / 10 + doubled % 10
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

/// Rejects values longer than `max` characters.
pub(crate) fn check_max_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(NvpError::validation(
            field,
            format!("cannot exceed {} characters", max),
        ));
    }
    Ok(())
}

/// Rejects values that are not exactly `len` characters.
pub(crate) fn check_exact_len(field: &str, value: &str, len: usize) -> Result<()> {
    if value.chars().count() != len {
        return Err(NvpError::validation(
            field,
            format!("must be exactly {} characters", len),
        ));
    }
    Ok(())
}

/// Rejects anything [`is_valid_amount`] rejects and returns the amount in
/// its canonical two decimal form (`"0"` -> `"0.00"`, `".50"` -> `"0.50"`).
pub(crate) fn check_amount(field: &str, amount: &str) -> Result<String> {
    if !is_valid_amount(amount) {
        return Err(NvpError::validation(
            field,
            format!(
                "amount {:?} must have exactly two decimal places separated by \".\" (example: \"50.00\")",
                amount
            ),
        ));
    }
    let cents = parse_cents(amount).ok_or_else(|| {
        NvpError::validation(field, format!("amount {:?} is too large", amount))
    })?;
    Ok(format_cents(u128::from(cents)))
}

pub(crate) fn check_hexcolor(field: &str, color: &str) -> Result<()> {
    if !is_valid_hexcolor(color) {
        return Err(NvpError::validation(
            field,
            format!("hex color {:?} is not valid", color),
        ));
    }
    Ok(())
}

pub(crate) fn check_email(field: &str, address: &str) -> Result<()> {
    if !is_valid_email(address) {
        return Err(NvpError::validation(
            field,
            format!("{:?} is not a valid email address", address),
        ));
    }
    Ok(())
}
