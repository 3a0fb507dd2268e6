//! Error taxonomy for the HTTP transport layer.
//!
//! Each way a service call can fail maps to a distinct variant, so callers
//! can decide whether to retry, fix their input, or surface the failure
//! upstream. Validation failures never reach this type: a request that does
//! not build is never sent.

use http::StatusCode;
use serde::Deserialize;

/// Machine-readable error document the web service returns with 4xx
/// responses.
///
/// # JSON Format
///
/// ```json
/// {
///   "code": "IP_ADDRESS_INVALID",
///   "error": "The value \"1.2.3\" is not a valid IP address."
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceErrorBody {
    /// Machine-readable error code.
    pub code: Option<String>,
    /// Human-readable error message.
    pub error: Option<String>,
}

/// Errors that can occur while calling the minFraud web service.
#[derive(Debug, thiserror::Error)]
pub enum MinFraudClientError {
    /// Endpoint URL construction failed.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// Network-level failure: connection refused, DNS, TLS, or timeout.
    /// Distinct from any HTTP-status-derived error.
    #[error("transport error: {context}: {source}")]
    Transport {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The server rejected the account ID or license key (HTTP 401).
    #[error("authentication failed ({}): {message}", .code.as_deref().unwrap_or("none"))]
    Authentication {
        /// Machine-readable code from the error body, if one was supplied.
        code: Option<String>,
        /// Human-readable message.
        message: String,
    },

    /// The account is out of service credit (HTTP 402).
    #[error("insufficient funds: {message}")]
    InsufficientFunds {
        /// Human-readable message.
        message: String,
    },

    /// The server rejected the request with a structured error body
    /// (4xx other than 401/402).
    #[error("invalid request ({status}, {code}): {message}")]
    InvalidRequest {
        /// The HTTP status code.
        status: StatusCode,
        /// Machine-readable code from the error body.
        code: String,
        /// Human-readable message.
        message: String,
    },

    /// Any other unexpected HTTP status: 5xx, a 4xx without a structured
    /// error body, or anything else that is not a 200.
    #[error("web service error ({status}): {context}: {body}")]
    WebService {
        /// Human-readable context.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// A 200 response carried a non-JSON content type.
    #[error("unexpected Content-Type {content_type:?}: {context}")]
    ContentType {
        /// Human-readable context.
        context: &'static str,
        /// The Content-Type header value received.
        content_type: String,
    },

    /// Failed to read the response body.
    #[error("failed to read response body: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// A 200 response body did not parse as the expected document.
    #[error("failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
}

impl MinFraudClientError {
    /// Classifies a non-200 status and its body into the matching variant.
    pub(crate) fn for_status(context: &'static str, status: StatusCode, body: String) -> Self {
        let parsed: Option<ServiceErrorBody> = serde_json::from_str(&body).ok();

        match status {
            StatusCode::UNAUTHORIZED => {
                let code = parsed.as_ref().and_then(|b| b.code.clone());
                let message = parsed.and_then(|b| b.error).unwrap_or(body);
                Self::Authentication { code, message }
            }
            StatusCode::PAYMENT_REQUIRED => Self::InsufficientFunds {
                message: parsed.and_then(|b| b.error).unwrap_or(body),
            },
            s if s.is_client_error() => match parsed {
                Some(ServiceErrorBody {
                    code: Some(code),
                    error,
                }) => Self::InvalidRequest {
                    status,
                    code,
                    message: error.unwrap_or_default(),
                },
                _ => Self::WebService {
                    context,
                    status,
                    body,
                },
            },
            _ => Self::WebService {
                context,
                status,
                body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTEXT: &str = "POST /minfraud/v2.0/score";

    #[test]
    fn unauthorized_maps_to_authentication() {
        let err = MinFraudClientError::for_status(
            CONTEXT,
            StatusCode::UNAUTHORIZED,
            r#"{"code":"AUTHORIZATION_INVALID","error":"Invalid license key"}"#.to_owned(),
        );
        match err {
            MinFraudClientError::Authentication { code, message } => {
                assert_eq!(code.as_deref(), Some("AUTHORIZATION_INVALID"));
                assert_eq!(message, "Invalid license key");
            }
            other => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[test]
    fn unauthorized_without_body_keeps_raw_text() {
        let err = MinFraudClientError::for_status(
            CONTEXT,
            StatusCode::UNAUTHORIZED,
            "no body".to_owned(),
        );
        match err {
            MinFraudClientError::Authentication { code, message } => {
                assert_eq!(code, None);
                assert_eq!(message, "no body");
            }
            other => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[test]
    fn payment_required_maps_to_insufficient_funds() {
        let err = MinFraudClientError::for_status(
            CONTEXT,
            StatusCode::PAYMENT_REQUIRED,
            r#"{"code":"INSUFFICIENT_FUNDS","error":"Out of credit"}"#.to_owned(),
        );
        assert!(matches!(
            err,
            MinFraudClientError::InsufficientFunds { ref message } if message == "Out of credit"
        ));
    }

    #[test]
    fn structured_4xx_maps_to_invalid_request() {
        let err = MinFraudClientError::for_status(
            CONTEXT,
            StatusCode::BAD_REQUEST,
            r#"{"code":"IP_ADDRESS_INVALID","error":"Bad IP"}"#.to_owned(),
        );
        match err {
            MinFraudClientError::InvalidRequest {
                status,
                code,
                message,
            } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(code, "IP_ADDRESS_INVALID");
                assert_eq!(message, "Bad IP");
            }
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn unstructured_4xx_and_5xx_map_to_web_service() {
        let err = MinFraudClientError::for_status(
            CONTEXT,
            StatusCode::NOT_FOUND,
            "<html>not here</html>".to_owned(),
        );
        assert!(matches!(err, MinFraudClientError::WebService { .. }));

        let err = MinFraudClientError::for_status(
            CONTEXT,
            StatusCode::INTERNAL_SERVER_ERROR,
            String::new(),
        );
        assert!(matches!(
            err,
            MinFraudClientError::WebService { status, .. }
                if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }
}
