//! Order information for the transaction.

use rust_decimal::Decimal;
use serde::Serialize;
use url::Url;

use crate::error::ValidationError;
use crate::request::validate;

/// The order being paid for.
///
/// # JSON Format
///
/// ```json
/// {
///   "amount": 323.21,
///   "currency": "USD",
///   "discount_code": "FIRST",
///   "referrer_uri": "http://www.amazon.com/"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Total order amount, serialized as a JSON number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// ISO 4217 currency code of the amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Discount code applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,

    /// Your affiliate identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_id: Option<String>,

    /// Your sub-affiliate identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaffiliate_id: Option<String>,

    /// URI of the referring site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_uri: Option<Url>,
}

impl Order {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }
}

/// Builder for [`Order`].
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    amount: Option<Decimal>,
    currency: Option<String>,
    discount_code: Option<String>,
    affiliate_id: Option<String>,
    subaffiliate_id: Option<String>,
    referrer_uri: Option<Url>,
}

impl OrderBuilder {
    /// Sets the total order amount.
    #[must_use]
    pub const fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the ISO 4217 currency code.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the discount code.
    #[must_use]
    pub fn discount_code(mut self, discount_code: impl Into<String>) -> Self {
        self.discount_code = Some(discount_code.into());
        self
    }

    /// Sets the affiliate identifier.
    #[must_use]
    pub fn affiliate_id(mut self, affiliate_id: impl Into<String>) -> Self {
        self.affiliate_id = Some(affiliate_id.into());
        self
    }

    /// Sets the sub-affiliate identifier.
    #[must_use]
    pub fn subaffiliate_id(mut self, subaffiliate_id: impl Into<String>) -> Self {
        self.subaffiliate_id = Some(subaffiliate_id.into());
        self
    }

    /// Sets the referring site URI.
    #[must_use]
    pub fn referrer_uri(mut self, referrer_uri: Url) -> Self {
        self.referrer_uri = Some(referrer_uri);
        self
    }

    /// Builds the [`Order`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the currency is not a three-letter
    /// uppercase code or the amount is negative.
    pub fn build(self) -> Result<Order, ValidationError> {
        if let Some(currency) = &self.currency {
            validate::expect_match(
                "currency",
                currency,
                &validate::CURRENCY_CODE,
                "an ISO 4217 code",
            )?;
        }
        if let Some(amount) = self.amount {
            if amount < Decimal::ZERO {
                return Err(ValidationError::new(
                    "amount",
                    format!("{amount} is negative"),
                ));
            }
        }

        Ok(Order {
            amount: self.amount,
            currency: self.currency,
            discount_code: self.discount_code,
            affiliate_id: self.affiliate_id,
            subaffiliate_id: self.subaffiliate_id,
            referrer_uri: self.referrer_uri,
        })
    }
}
