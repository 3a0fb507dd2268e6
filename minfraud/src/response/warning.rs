//! Non-fatal input warnings reported alongside a successful response.

use serde::{Deserialize, Serialize};

/// A warning about a problem with one of the request inputs.
///
/// Warnings do not fail the request; the service scores whatever it could
/// use and reports the rest here.
///
/// # JSON Format
///
/// ```json
/// {
///   "code": "INPUT_INVALID",
///   "warning": "Encountered value at /shipping/city that does not meet the required constraints",
///   "input_pointer": "/shipping/city"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Machine-readable warning code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable description of the warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    /// JSON Pointer to the request input the warning refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_pointer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_all_fields() {
        let warning: Warning = serde_json::from_value(serde_json::json!({
            "code": "INPUT_INVALID",
            "warning": "Encountered value at /shipping/city that does not meet the required constraints",
            "input_pointer": "/shipping/city"
        }))
        .expect("valid warning");

        assert_eq!(warning.code.as_deref(), Some("INPUT_INVALID"));
        assert_eq!(warning.input_pointer.as_deref(), Some("/shipping/city"));
    }

    #[test]
    fn missing_fields_are_absent() {
        let warning: Warning =
            serde_json::from_value(serde_json::json!({ "code": "INPUT_INVALID" }))
                .expect("valid warning");
        assert_eq!(warning.warning, None);
        assert_eq!(warning.input_pointer, None);
    }
}
