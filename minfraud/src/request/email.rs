//! Email information for the user placing the transaction.

use serde::Serialize;

use crate::error::ValidationError;
use crate::request::validate;

/// The email address associated with the transaction.
///
/// # JSON Format
///
/// ```json
/// {
///   "address": "test@example.com",
///   "domain": "example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    /// The full email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The domain of the email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Email {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> EmailBuilder {
        EmailBuilder::default()
    }
}

/// Builder for [`Email`].
#[derive(Debug, Clone, Default)]
pub struct EmailBuilder {
    address: Option<String>,
    domain: Option<String>,
}

impl EmailBuilder {
    /// Sets the email address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the email domain.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Builds the [`Email`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the address does not look like an
    /// email address, or if the domain is empty or contains whitespace.
    pub fn build(self) -> Result<Email, ValidationError> {
        if let Some(address) = &self.address {
            validate::expect_match(
                "address",
                address,
                &validate::EMAIL_ADDRESS,
                "an email address",
            )?;
        }
        if let Some(domain) = &self.domain {
            if domain.is_empty() || domain.contains(char::is_whitespace) {
                return Err(ValidationError::new(
                    "domain",
                    format!("{domain:?} is not a domain name"),
                ));
            }
        }

        Ok(Email {
            address: self.address,
            domain: self.domain,
        })
    }
}
