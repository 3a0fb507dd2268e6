//! Risk data for the credit card.

use serde::{Deserialize, Serialize};

/// Data about the bank that issued the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Issuer {
    /// Name of the issuing bank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the name matches the one provided in the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches_provided_name: Option<bool>,

    /// Phone number of the issuing bank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Whether the phone number matches the one provided in the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches_provided_phone_number: Option<bool>,
}

/// Data the service derived from the issuer ID number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreditCard {
    /// The issuing bank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Issuer>,

    /// ISO 3166-1 alpha-2 code of the country the card was issued in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Whether the card was issued in the billing address country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_issued_in_billing_address_country: Option<bool>,

    /// Whether the card is prepaid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_prepaid: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn round_trips_against_fixture() {
        let fixture = json!({
            "issuer": {
                "name": "Bank",
                "matches_provided_name": true,
                "phone_number": "123-321-3213",
                "matches_provided_phone_number": true
            },
            "country": "US",
            "is_issued_in_billing_address_country": true,
            "is_prepaid": true
        });

        let card: CreditCard =
            serde_json::from_value(fixture.clone()).expect("valid credit card");
        let issuer = card.issuer.as_ref().expect("issuer present");
        assert_eq!(issuer.name.as_deref(), Some("Bank"));
        assert_eq!(issuer.matches_provided_phone_number, Some(true));
        assert_eq!(card.country.as_deref(), Some("US"));
        assert_eq!(card.is_prepaid, Some(true));
        assert_eq!(serde_json::to_value(&card).expect("serializable"), fixture);
    }

    #[test]
    fn missing_issuer_is_absent() {
        let card: CreditCard =
            serde_json::from_value(json!({ "country": "CA" })).expect("valid credit card");
        assert_eq!(card.issuer, None);
        assert_eq!(card.is_prepaid, None);
    }
}
