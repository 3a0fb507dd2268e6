//! Builder validation errors.

/// Error raised by a request builder when a value violates the wire schema
/// constraints.
///
/// Validation happens in `build()`, before any network traffic: a request
/// that fails to build is never sent. The error names the offending wire
/// field so callers can map it back to their own input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for `{field}`: {message}")]
pub struct ValidationError {
    /// Wire name of the field that failed validation (e.g. `"currency"`).
    pub field: &'static str,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error for the given wire field.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = ValidationError::new("currency", "\"usd\" is not an ISO 4217 code");
        assert_eq!(
            err.to_string(),
            "invalid value for `currency`: \"usd\" is not an ISO 4217 code"
        );
    }
}
