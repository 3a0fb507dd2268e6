//! Shared format checks used by the request builders.
//!
//! Patterns mirror the constraints documented for the external schema. The
//! service performs its own authoritative validation; these checks exist to
//! reject obviously malformed input before it crosses the wire.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// ISO 3166-1 alpha-2 country code.
pub(crate) static COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z]{2}$").expect("valid regex"));

/// ISO 4217 currency code.
pub(crate) static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z]{3}$").expect("valid regex"));

/// International telephone country calling code.
pub(crate) static PHONE_COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{1,4}$").expect("valid regex"));

/// Issuer identification number: the first six digits of a card number.
pub(crate) static ISSUER_ID_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{6}$").expect("valid regex"));

/// Last four digits of a card number.
pub(crate) static LAST_4_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{4}$").expect("valid regex"));

/// Loose email shape: one `@`, no whitespace on either side.
pub(crate) static EMAIL_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid regex"));

/// Returns an error naming `field` unless `value` matches `pattern`.
pub(crate) fn expect_match(
    field: &'static str,
    value: &str,
    pattern: &Regex,
    description: &str,
) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("{value:?} is not {description}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_accepts_alpha2_only() {
        assert!(COUNTRY_CODE.is_match("US"));
        assert!(COUNTRY_CODE.is_match("GB"));
        assert!(!COUNTRY_CODE.is_match("usa"));
        assert!(!COUNTRY_CODE.is_match("U"));
        assert!(!COUNTRY_CODE.is_match("USA"));
    }

    #[test]
    fn expect_match_names_the_field() {
        let err = expect_match("currency", "usd", &CURRENCY_CODE, "an ISO 4217 code")
            .expect_err("lowercase code must be rejected");
        assert_eq!(err.field, "currency");
        assert!(err.message.contains("usd"));
    }
}
