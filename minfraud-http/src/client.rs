//! Async client for the minFraud Score and Insights endpoints.
//!
//! The client serializes a [`MinFraudRequest`] to JSON, POSTs it over
//! HTTPS with Basic authentication, and interprets the response:
//!
//! - 200 with a JSON body → the typed response document
//! - 401 / 402 / structured 4xx / anything else → the matching
//!   [`MinFraudClientError`] variant
//!
//! Endpoint URLs are computed once at construction. The client holds no
//! mutable per-call state, performs no retries, and may be cloned or
//! shared across tasks freely.

use std::fmt::Display;
use std::time::Duration;

use http::StatusCode;
use minfraud::MinFraudRequest;
use minfraud::response::{Insights, Score};
use reqwest::header::ACCEPT;
use url::Url;

use crate::constants::{ACCEPT_JSON, DEFAULT_HOST, SERVICE_PATH};
use crate::error::MinFraudClientError;

/// A client for the minFraud Score and Insights web services.
///
/// # Example
///
/// ```no_run
/// use minfraud_http::MinFraudClient;
///
/// # fn main() -> Result<(), minfraud_http::MinFraudClientError> {
/// let client = MinFraudClient::builder(6, "0123456789")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MinFraudClient {
    /// Full URL of the Score endpoint.
    score_url: Url,
    /// Full URL of the Insights endpoint.
    insights_url: Url,
    /// Account identifier used as the Basic auth username.
    account_id: u32,
    /// License key used as the Basic auth password.
    license_key: String,
    /// Shared reqwest HTTP client.
    client: reqwest::Client,
    /// Optional per-request timeout.
    timeout: Option<Duration>,
}

impl std::fmt::Debug for MinFraudClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinFraudClient")
            .field("score_url", &self.score_url.as_str())
            .field("insights_url", &self.insights_url.as_str())
            .field("account_id", &self.account_id)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl MinFraudClient {
    /// Returns a builder for the given account credentials, targeting the
    /// production host over HTTPS.
    #[must_use]
    pub fn builder(account_id: u32, license_key: impl Into<String>) -> MinFraudClientBuilder {
        MinFraudClientBuilder {
            account_id,
            license_key: license_key.into(),
            host: DEFAULT_HOST.to_owned(),
            port: None,
            use_https: true,
            timeout: None,
            http_client: None,
        }
    }

    /// Returns the computed Score endpoint URL.
    #[must_use]
    pub const fn score_url(&self) -> &Url {
        &self.score_url
    }

    /// Returns the computed Insights endpoint URL.
    #[must_use]
    pub const fn insights_url(&self) -> &Url {
        &self.insights_url
    }

    /// Returns the configured per-request timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Scores the given request against the Score endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`MinFraudClientError`] describing the failure: transport,
    /// authentication, insufficient funds, invalid request, or web-service
    /// error.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "minfraud.client.score", skip_all, err)
    )]
    pub async fn score(&self, request: &MinFraudRequest) -> Result<Score, MinFraudClientError> {
        self.post_json(&self.score_url, "POST /minfraud/v2.0/score", request)
            .await
    }

    /// Scores the given request against the Insights endpoint, which
    /// additionally returns subscores and geolocation data.
    ///
    /// # Errors
    ///
    /// Returns a [`MinFraudClientError`] describing the failure: transport,
    /// authentication, insufficient funds, invalid request, or web-service
    /// error.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "minfraud.client.insights", skip_all, err)
    )]
    pub async fn insights(
        &self,
        request: &MinFraudRequest,
    ) -> Result<Insights, MinFraudClientError> {
        self.post_json(&self.insights_url, "POST /minfraud/v2.0/insights", request)
            .await
    }

    /// Generic POST helper handling serialization, authentication, status
    /// interpretation, timeout application, and telemetry integration.
    ///
    /// `context` is a human-readable identifier used in error messages
    /// (e.g. `"POST /minfraud/v2.0/score"`).
    async fn post_json<T, R>(
        &self,
        url: &Url,
        context: &'static str,
        payload: &T,
    ) -> Result<R, MinFraudClientError>
    where
        T: serde::Serialize + Sync + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let mut req = self
            .client
            .post(url.clone())
            .basic_auth(self.account_id, Some(&self.license_key))
            .header(ACCEPT, ACCEPT_JSON)
            .json(payload);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let http_response = req
            .send()
            .await
            .map_err(|e| MinFraudClientError::Transport { context, source: e })?;

        let result = if http_response.status() == StatusCode::OK {
            let content_type = content_type_of(&http_response);
            if content_type.contains("json") {
                http_response.json::<R>().await.map_err(|e| {
                    MinFraudClientError::JsonDeserialization { context, source: e }
                })
            } else {
                Err(MinFraudClientError::ContentType {
                    context,
                    content_type,
                })
            }
        } else {
            let status = http_response.status();
            match http_response.text().await {
                Ok(body) => Err(MinFraudClientError::for_status(context, status, body)),
                Err(e) => Err(MinFraudClientError::ResponseBodyRead { context, source: e }),
            }
        };

        record_result_on_span(&result);

        result
    }
}

/// Returns the `Content-Type` header of a response, or an empty string.
fn content_type_of(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

/// Configuration builder for [`MinFraudClient`].
///
/// The full configuration surface is supplied here, at construction time;
/// nothing is re-read per call.
#[derive(Debug, Clone)]
pub struct MinFraudClientBuilder {
    account_id: u32,
    license_key: String,
    host: String,
    port: Option<u16>,
    use_https: bool,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl MinFraudClientBuilder {
    /// Sets the target host. Defaults to the production host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the target port. Defaults to the scheme's standard port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Uses plain HTTP instead of HTTPS. Intended for stub servers in
    /// tests; the production service requires TLS.
    #[must_use]
    pub const fn disable_https(mut self) -> Self {
        self.use_https = false;
        self
    }

    /// Sets the per-request timeout. No timeout is applied by default.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supplies a pre-configured reqwest client instead of the default.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`MinFraudClient`], computing both endpoint URLs.
    ///
    /// # Errors
    ///
    /// Returns [`MinFraudClientError::UrlParse`] if the host/port do not
    /// form a valid URL.
    pub fn build(self) -> Result<MinFraudClient, MinFraudClientError> {
        let scheme = if self.use_https { "https" } else { "http" };
        let base = match self.port {
            Some(port) => format!("{scheme}://{}:{port}{SERVICE_PATH}", self.host),
            None => format!("{scheme}://{}{SERVICE_PATH}", self.host),
        };
        let base_url = Url::parse(&base).map_err(|e| MinFraudClientError::UrlParse {
            context: "Failed to parse base URL",
            source: e,
        })?;
        let score_url = base_url
            .join("score")
            .map_err(|e| MinFraudClientError::UrlParse {
                context: "Failed to construct score URL",
                source: e,
            })?;
        let insights_url = base_url
            .join("insights")
            .map_err(|e| MinFraudClientError::UrlParse {
                context: "Failed to construct insights URL",
                source: e,
            })?;

        let client = self.http_client.unwrap_or_default();

        Ok(MinFraudClient {
            score_url,
            insights_url,
            account_id: self.account_id,
            license_key: self.license_key,
            client,
            timeout: self.timeout,
        })
    }
}

/// Records the outcome of a request on the current tracing span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = tracing::Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            tracing::event!(
                tracing::Level::ERROR,
                error = %err,
                "minFraud web service request failed"
            );
        }
    }
}

/// Records the outcome of a request on the current tracing span.
/// Noop if the telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}
