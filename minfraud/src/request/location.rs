//! Billing and shipping address information.

use serde::Serialize;

use crate::error::ValidationError;
use crate::request::validate;

/// How quickly the order ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverySpeed {
    /// Same-day delivery.
    SameDay,
    /// Overnight delivery.
    Overnight,
    /// Expedited delivery.
    Expedited,
    /// Standard delivery.
    Standard,
}

/// The billing address for the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Billing {
    /// First name on the billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name on the billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Company name on the billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// First line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Second line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    /// City of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// ISO 3166-2 subdivision code of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// ISO 3166-1 alpha-2 country code of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,

    /// Phone number without the country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Telephone country calling code of the phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
}

impl Billing {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> BillingBuilder {
        BillingBuilder::default()
    }
}

/// Builder for [`Billing`].
#[derive(Debug, Clone, Default)]
pub struct BillingBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    company: Option<String>,
    address: Option<String>,
    address_2: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    postal: Option<String>,
    phone_number: Option<String>,
    phone_country_code: Option<String>,
}

impl BillingBuilder {
    /// Sets the first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the first line of the street address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the second line of the street address.
    #[must_use]
    pub fn address_2(mut self, address_2: impl Into<String>) -> Self {
        self.address_2 = Some(address_2.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the ISO 3166-2 subdivision code.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the ISO 3166-1 alpha-2 country code.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the postal code.
    #[must_use]
    pub fn postal(mut self, postal: impl Into<String>) -> Self {
        self.postal = Some(postal.into());
        self
    }

    /// Sets the phone number, without the country code.
    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the telephone country calling code.
    #[must_use]
    pub fn phone_country_code(mut self, phone_country_code: impl Into<String>) -> Self {
        self.phone_country_code = Some(phone_country_code.into());
        self
    }

    /// Builds the [`Billing`] address.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the country is not a two-letter
    /// uppercase code or the phone country code is not 1–4 digits.
    pub fn build(self) -> Result<Billing, ValidationError> {
        validate_location(self.country.as_deref(), self.phone_country_code.as_deref())?;

        Ok(Billing {
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            address: self.address,
            address_2: self.address_2,
            city: self.city,
            region: self.region,
            country: self.country,
            postal: self.postal,
            phone_number: self.phone_number,
            phone_country_code: self.phone_country_code,
        })
    }
}

/// The shipping address for the transaction.
///
/// Same shape as [`Billing`] plus the delivery speed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shipping {
    /// First name on the shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name on the shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Company name on the shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// First line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Second line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    /// City of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// ISO 3166-2 subdivision code of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// ISO 3166-1 alpha-2 country code of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,

    /// Phone number without the country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Telephone country calling code of the phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,

    /// How quickly the order ships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_speed: Option<DeliverySpeed>,
}

impl Shipping {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> ShippingBuilder {
        ShippingBuilder::default()
    }
}

/// Builder for [`Shipping`].
#[derive(Debug, Clone, Default)]
pub struct ShippingBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    company: Option<String>,
    address: Option<String>,
    address_2: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    postal: Option<String>,
    phone_number: Option<String>,
    phone_country_code: Option<String>,
    delivery_speed: Option<DeliverySpeed>,
}

impl ShippingBuilder {
    /// Sets the first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the first line of the street address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the second line of the street address.
    #[must_use]
    pub fn address_2(mut self, address_2: impl Into<String>) -> Self {
        self.address_2 = Some(address_2.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the ISO 3166-2 subdivision code.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the ISO 3166-1 alpha-2 country code.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the postal code.
    #[must_use]
    pub fn postal(mut self, postal: impl Into<String>) -> Self {
        self.postal = Some(postal.into());
        self
    }

    /// Sets the phone number, without the country code.
    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the telephone country calling code.
    #[must_use]
    pub fn phone_country_code(mut self, phone_country_code: impl Into<String>) -> Self {
        self.phone_country_code = Some(phone_country_code.into());
        self
    }

    /// Sets the delivery speed.
    #[must_use]
    pub const fn delivery_speed(mut self, delivery_speed: DeliverySpeed) -> Self {
        self.delivery_speed = Some(delivery_speed);
        self
    }

    /// Builds the [`Shipping`] address.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the country is not a two-letter
    /// uppercase code or the phone country code is not 1–4 digits.
    pub fn build(self) -> Result<Shipping, ValidationError> {
        validate_location(self.country.as_deref(), self.phone_country_code.as_deref())?;

        Ok(Shipping {
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            address: self.address,
            address_2: self.address_2,
            city: self.city,
            region: self.region,
            country: self.country,
            postal: self.postal,
            phone_number: self.phone_number,
            phone_country_code: self.phone_country_code,
            delivery_speed: self.delivery_speed,
        })
    }
}

/// Checks the constraints shared by billing and shipping addresses.
fn validate_location(
    country: Option<&str>,
    phone_country_code: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(country) = country {
        validate::expect_match(
            "country",
            country,
            &validate::COUNTRY_CODE,
            "an ISO 3166-1 alpha-2 code",
        )?;
    }
    if let Some(code) = phone_country_code {
        validate::expect_match(
            "phone_country_code",
            code,
            &validate::PHONE_COUNTRY_CODE,
            "a 1-4 digit calling code",
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_builder_round_trip() {
        let billing = Billing::builder()
            .first_name("First")
            .last_name("Last")
            .company("Company")
            .address("101 Address Rd.")
            .address_2("Unit 5")
            .city("City of Thorns")
            .region("CT")
            .country("US")
            .postal("06510")
            .phone_number("323-123-4321")
            .phone_country_code("1")
            .build()
            .expect("valid billing");

        assert_eq!(billing.first_name.as_deref(), Some("First"));
        assert_eq!(billing.address_2.as_deref(), Some("Unit 5"));
        assert_eq!(billing.country.as_deref(), Some("US"));
        assert_eq!(billing.phone_country_code.as_deref(), Some("1"));
    }

    #[test]
    fn billing_rejects_bad_country() {
        let err = Billing::builder()
            .country("usa")
            .build()
            .expect_err("three-letter lowercase code must be rejected");
        assert_eq!(err.field, "country");
    }

    #[test]
    fn shipping_rejects_bad_phone_country_code() {
        let err = Shipping::builder()
            .phone_country_code("+1")
            .build()
            .expect_err("non-digit code must be rejected");
        assert_eq!(err.field, "phone_country_code");
    }

    #[test]
    fn shipping_serializes_delivery_speed() {
        let shipping = Shipping::builder()
            .country("US")
            .delivery_speed(DeliverySpeed::SameDay)
            .build()
            .expect("valid shipping");
        let value = serde_json::to_value(&shipping).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({ "country": "US", "delivery_speed": "same_day" })
        );
    }
}
