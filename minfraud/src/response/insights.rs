//! Response document for the Insights endpoint.

use serde::{Deserialize, Serialize};

use crate::response::address::{BillingAddress, ShippingAddress};
use crate::response::credit_card::CreditCard;
use crate::response::email::Email;
use crate::response::ip_address::IpAddress;
use crate::response::subscores::Subscores;
use crate::response::warning::Warning;

/// Response from the Insights endpoint.
///
/// A superset of the Score response: the same overall risk score plus the
/// per-factor subscores and the data the service derived from each request
/// component. Every field is optional; absent JSON fields deserialize to
/// `None` rather than defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Insights {
    /// UUID identifying this service request, for support correspondence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Overall risk score, a server-defined decimal treated as an opaque
    /// pass-through number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,

    /// Service credits remaining on the account after this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_remaining: Option<u64>,

    /// Geolocation and reputation data for the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<IpAddress>,

    /// Data derived from the issuer ID number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,

    /// Data derived from the billing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<BillingAddress>,

    /// Data derived from the shipping address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,

    /// Data derived from the email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,

    /// Per-factor component scores behind the overall risk score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscores: Option<Subscores>,

    /// Warnings about problems with the request inputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}
