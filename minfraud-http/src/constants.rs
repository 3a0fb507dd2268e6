//! Endpoint constants for the minFraud web services.

/// Hostname of the production web service.
pub const DEFAULT_HOST: &str = "minfraud.maxmind.com";

/// URL path prefix shared by all v2.0 endpoints, with trailing slash so
/// operation names join cleanly.
pub const SERVICE_PATH: &str = "/minfraud/v2.0/";

/// `Accept` header value sent with every request.
pub const ACCEPT_JSON: &str = "application/json";
