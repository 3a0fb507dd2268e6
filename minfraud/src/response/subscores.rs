//! Per-factor component risk scores.

use serde::{Deserialize, Serialize};

/// The individual component scores the service combined into the overall
/// risk score.
///
/// Every field is optional; when present, a value is a decimal in the range
/// 0.01 to 99. The client treats values as opaque pass-through numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Subscores {
    /// Risk associated with the AVS result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avs_result: Option<f64>,

    /// Risk associated with the billing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<f64>,

    /// Risk associated with the distance between the billing address and
    /// the location of the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address_distance_to_ip_location: Option<f64>,

    /// Risk associated with the browser attributes, such as the
    /// `User-Agent` and `Accept-Language` headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<f64>,

    /// Individualized chargeback risk for the IP address on this account
    /// and shop ID. Only populated for accounts sending chargeback data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback: Option<f64>,

    /// Risk associated with the country the transaction originated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<f64>,

    /// Risk associated with the combination of IP country, card issuer
    /// country, billing country, and shipping country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_mismatch: Option<f64>,

    /// Risk associated with the CVV result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv_result: Option<f64>,

    /// Risk associated with the particular email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<f64>,

    /// General risk associated with the email domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_domain: Option<f64>,

    /// Risk associated with the issuer ID number on the email domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_tenure: Option<f64>,

    /// Risk associated with the issuer ID number on the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_tenure: Option<f64>,

    /// Risk associated with the issuer ID number given the billing location
    /// and the history of the IIN on this account and shop ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_id_number: Option<f64>,

    /// Risk associated with the particular order amount for this account
    /// and shop ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_amount: Option<f64>,

    /// Risk associated with the particular phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<f64>,

    /// Risk associated with the distance between the shipping address and
    /// the location of the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address_distance_to_ip_location: Option<f64>,

    /// Risk associated with the local time of day of the transaction at the
    /// IP address location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<f64>,
}
