//! Credit card information for the transaction.

use serde::Serialize;

use crate::error::ValidationError;
use crate::request::validate;

/// The card used to pay for the transaction.
///
/// Only non-sensitive card attributes cross the wire: the issuer
/// identification number (first six digits), the last four digits, and the
/// issuing bank's contact details. The full card number is never accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditCard {
    /// Issuer identification number: the first six digits of the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_id_number: Option<String>,

    /// Last four digits of the card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_4_digits: Option<String>,

    /// Name of the issuing bank as provided by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    /// Telephone country calling code of the bank's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_phone_country_code: Option<String>,

    /// Phone number of the issuing bank, without the country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_phone_number: Option<String>,

    /// Address Verification System result code from the processor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_result: Option<char>,

    /// Card Verification Value result code from the processor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_result: Option<char>,
}

impl CreditCard {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> CreditCardBuilder {
        CreditCardBuilder::default()
    }
}

/// Builder for [`CreditCard`].
#[derive(Debug, Clone, Default)]
pub struct CreditCardBuilder {
    issuer_id_number: Option<String>,
    last_4_digits: Option<String>,
    bank_name: Option<String>,
    bank_phone_country_code: Option<String>,
    bank_phone_number: Option<String>,
    avs_result: Option<char>,
    cvv_result: Option<char>,
}

impl CreditCardBuilder {
    /// Sets the issuer identification number (first six digits).
    #[must_use]
    pub fn issuer_id_number(mut self, issuer_id_number: impl Into<String>) -> Self {
        self.issuer_id_number = Some(issuer_id_number.into());
        self
    }

    /// Sets the last four digits of the card number.
    #[must_use]
    pub fn last_4_digits(mut self, last_4_digits: impl Into<String>) -> Self {
        self.last_4_digits = Some(last_4_digits.into());
        self
    }

    /// Sets the issuing bank name.
    #[must_use]
    pub fn bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = Some(bank_name.into());
        self
    }

    /// Sets the calling code of the bank's phone number.
    #[must_use]
    pub fn bank_phone_country_code(mut self, code: impl Into<String>) -> Self {
        self.bank_phone_country_code = Some(code.into());
        self
    }

    /// Sets the bank's phone number, without the country code.
    #[must_use]
    pub fn bank_phone_number(mut self, bank_phone_number: impl Into<String>) -> Self {
        self.bank_phone_number = Some(bank_phone_number.into());
        self
    }

    /// Sets the AVS result code.
    #[must_use]
    pub const fn avs_result(mut self, avs_result: char) -> Self {
        self.avs_result = Some(avs_result);
        self
    }

    /// Sets the CVV result code.
    #[must_use]
    pub const fn cvv_result(mut self, cvv_result: char) -> Self {
        self.cvv_result = Some(cvv_result);
        self
    }

    /// Builds the [`CreditCard`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the issuer ID number is not exactly
    /// six digits, the last-four is not exactly four digits, or the bank
    /// phone country code is not 1–4 digits.
    pub fn build(self) -> Result<CreditCard, ValidationError> {
        if let Some(iin) = &self.issuer_id_number {
            validate::expect_match(
                "issuer_id_number",
                iin,
                &validate::ISSUER_ID_NUMBER,
                "a six-digit IIN",
            )?;
        }
        if let Some(last4) = &self.last_4_digits {
            validate::expect_match(
                "last_4_digits",
                last4,
                &validate::LAST_4_DIGITS,
                "four digits",
            )?;
        }
        if let Some(code) = &self.bank_phone_country_code {
            validate::expect_match(
                "bank_phone_country_code",
                code,
                &validate::PHONE_COUNTRY_CODE,
                "a 1-4 digit calling code",
            )?;
        }

        Ok(CreditCard {
            issuer_id_number: self.issuer_id_number,
            last_4_digits: self.last_4_digits,
            bank_name: self.bank_name,
            bank_phone_country_code: self.bank_phone_country_code,
            bank_phone_number: self.bank_phone_number,
            avs_result: self.avs_result,
            cvv_result: self.cvv_result,
        })
    }
}
