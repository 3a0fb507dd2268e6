//! Geolocation and reputation data for the IP address, as returned by the
//! Insights endpoint.
//!
//! The shape follows the GeoIP2 Insights model with two service-specific
//! additions: the top-level `risk` number and `country.is_high_risk`.
//! Localized place names arrive as a map keyed by locale code.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Localized names keyed by locale code (e.g. `"en"`, `"pt-BR"`).
pub type Names = HashMap<String, String>;

/// City data for the IP address location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct City {
    /// Confidence, 0–100, that the city is correct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u16>,

    /// GeoNames identifier of the city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u32>,

    /// Localized city names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub names: Names,
}

/// Continent data for the IP address location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Continent {
    /// Two-letter continent code (e.g. `"EU"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// GeoNames identifier of the continent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u32>,

    /// Localized continent names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub names: Names,
}

/// Country data for the IP address location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Country {
    /// Confidence, 0–100, that the country is correct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u16>,

    /// GeoNames identifier of the country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u32>,

    /// Whether the country is considered high-risk for the transaction.
    /// Service-specific; not part of the GeoIP2 model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_high_risk: Option<bool>,

    /// ISO 3166-1 alpha-2 code of the country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,

    /// Localized country names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub names: Names,
}

/// Country represented by the users of the IP address (e.g. the country a
/// military base's personnel belong to).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RepresentedCountry {
    /// GeoNames identifier of the country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u32>,

    /// ISO 3166-1 alpha-2 code of the country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,

    /// Localized country names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub names: Names,

    /// Kind of representation (e.g. `"military"`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub representation_type: Option<String>,
}

/// Coordinates and local-time data for the IP address location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Location {
    /// Radius in kilometers around the coordinates where the IP address is
    /// likely to be.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_radius: Option<u16>,

    /// Approximate latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Current local time at the location, with UTC offset.
    /// Service-specific; not part of the GeoIP2 model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time: Option<DateTime<FixedOffset>>,

    /// Approximate longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// US metro code of the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro_code: Option<u16>,

    /// IANA time zone name of the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Postal code data for the IP address location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Postal {
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Confidence, 0–100, that the postal code is correct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u16>,
}

/// First-level subdivision (state, province, region) of the location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Subdivision {
    /// Confidence, 0–100, that the subdivision is correct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u16>,

    /// GeoNames identifier of the subdivision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u32>,

    /// ISO 3166-2 code of the subdivision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,

    /// Localized subdivision names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub names: Names,
}

/// Network-level attributes of the IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Traits {
    /// Autonomous system number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autonomous_system_number: Option<u32>,

    /// Organization associated with the autonomous system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autonomous_system_organization: Option<String>,

    /// Second-level domain associated with the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// The IP address the data refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    /// Whether the IP address belongs to an anonymous proxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_anonymous_proxy: Option<bool>,

    /// Whether the IP address belongs to a satellite provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_satellite_provider: Option<bool>,

    /// Internet service provider of the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,

    /// Organization the IP address is registered to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// User type (e.g. `"residential"`, `"hosting"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

/// Full geolocation and risk object for the IP address, as returned by the
/// Insights endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IpAddress {
    /// Risk associated with the IP address, 0.01 to 99.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<f64>,

    /// City data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,

    /// Continent data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<Continent>,

    /// Country the IP address is located in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,

    /// Coordinates and local time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Postal code data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal: Option<Postal>,

    /// Country the IP address is registered in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_country: Option<Country>,

    /// Country represented by the users of the IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub represented_country: Option<RepresentedCountry>,

    /// Subdivisions of the location, from least to most specific.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subdivisions: Vec<Subdivision>,

    /// Network-level attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<Traits>,
}
