//! Risk data for the billing and shipping addresses.

use serde::{Deserialize, Serialize};

/// Risk data the service derived from the billing address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BillingAddress {
    /// Whether the address is in the same country as the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_in_ip_country: Option<bool>,

    /// Whether the postal code is in the stated city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_postal_in_city: Option<bool>,

    /// Approximate latitude of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Approximate longitude of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Distance in kilometers from the address to the IP address location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_ip_location: Option<u32>,
}

/// Risk data the service derived from the shipping address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ShippingAddress {
    /// Whether the address is associated with past fraudulent activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_high_risk: Option<bool>,

    /// Whether the address is in the same country as the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_in_ip_country: Option<bool>,

    /// Whether the postal code is in the stated city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_postal_in_city: Option<bool>,

    /// Approximate latitude of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Approximate longitude of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Distance in kilometers from the address to the IP address location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_ip_location: Option<u32>,

    /// Distance in kilometers from the shipping address to the billing
    /// address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_billing_address: Option<u32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn billing_round_trips_against_fixture() {
        let fixture = json!({
            "is_in_ip_country": true,
            "is_postal_in_city": true,
            "latitude": 41.310571,
            "longitude": -72.922891,
            "distance_to_ip_location": 100
        });

        let address: BillingAddress =
            serde_json::from_value(fixture.clone()).expect("valid billing address");
        assert_eq!(address.is_in_ip_country, Some(true));
        assert_eq!(address.distance_to_ip_location, Some(100));
        assert_eq!(
            serde_json::to_value(address).expect("serializable"),
            fixture
        );
    }

    #[test]
    fn shipping_carries_high_risk_and_billing_distance() {
        let address: ShippingAddress = serde_json::from_value(json!({
            "is_high_risk": false,
            "distance_to_billing_address": 160
        }))
        .expect("valid shipping address");

        assert_eq!(address.is_high_risk, Some(false));
        assert_eq!(address.distance_to_billing_address, Some(160));
        assert_eq!(address.latitude, None);
    }
}
