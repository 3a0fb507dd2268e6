//! Response document for the Score endpoint.

use serde::{Deserialize, Serialize};

use crate::response::warning::Warning;

/// IP address risk as returned by the Score endpoint.
///
/// The Score endpoint reports only the risk number; the full geolocation
/// object is an Insights feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreIpAddress {
    /// Risk associated with the IP address, 0.01 to 99.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<f64>,
}

/// Response from the Score endpoint.
///
/// Every field is optional: the service omits what it has no data for, and
/// absent JSON fields deserialize to `None` rather than defaults.
///
/// # JSON Format
///
/// ```json
/// {
///   "id": "27d26476-e2bc-11e4-92b8-962e705b4af5",
///   "risk_score": 0.01,
///   "credits_remaining": 1000,
///   "ip_address": { "risk": 0.01 },
///   "warnings": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Score {
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

    /// Risk for the IP address the request was scored against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<ScoreIpAddress>,

    /// Warnings about problems with the request inputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn round_trips_against_fixture() {
        let fixture = json!({
            "id": "27d26476-e2bc-11e4-92b8-962e705b4af5",
            "risk_score": 0.01,
            "credits_remaining": 1000,
            "ip_address": { "risk": 0.01 },
            "warnings": [
                {
                    "code": "INPUT_INVALID",
                    "warning": "Encountered value at /shipping/city that does not meet the required constraints",
                    "input_pointer": "/shipping/city"
                }
            ]
        });

        let score: Score = serde_json::from_value(fixture.clone()).expect("valid score");
        assert_eq!(score.risk_score, Some(0.01));
        assert_eq!(score.credits_remaining, Some(1000));
        assert_eq!(
            score.ip_address.and_then(|ip| ip.risk),
            Some(0.01)
        );
        assert_eq!(score.warnings.len(), 1);
        assert_eq!(
            serde_json::to_value(&score).expect("serializable"),
            fixture
        );
    }

    #[test]
    fn missing_fields_are_absent_not_defaulted() {
        let score: Score = serde_json::from_value(json!({ "risk_score": 17.0 }))
            .expect("valid score");
        assert_eq!(score.risk_score, Some(17.0));
        assert_eq!(score.id, None);
        assert_eq!(score.credits_remaining, None);
        assert_eq!(score.ip_address, None);
        assert!(score.warnings.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let score: Score = serde_json::from_value(json!({
            "risk_score": 17.0,
            "some_future_field": { "nested": true }
        }))
        .expect("unknown fields must not fail deserialization");
        assert_eq!(score.risk_score, Some(17.0));
    }
}
