//! Risk data for the email address.

use serde::{Deserialize, Serialize};

/// Data the service derived from the email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Email {
    /// Whether the address is from a free email provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,

    /// Whether the address is associated with past fraudulent activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_high_risk: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn round_trips_against_fixture() {
        let fixture = json!({ "is_free": true, "is_high_risk": false });
        let email: Email = serde_json::from_value(fixture.clone()).expect("valid email");
        assert_eq!(email.is_free, Some(true));
        assert_eq!(email.is_high_risk, Some(false));
        assert_eq!(serde_json::to_value(email).expect("serializable"), fixture);
    }

    #[test]
    fn missing_fields_are_absent() {
        let email: Email = serde_json::from_value(json!({})).expect("valid email");
        assert_eq!(email.is_free, None);
        assert_eq!(email.is_high_risk, None);
    }
}
