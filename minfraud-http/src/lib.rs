#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTPS transport for the minFraud Score and Insights web services.
//!
//! Provides [`MinFraudClient`], an async client that serializes a
//! [`minfraud::MinFraudRequest`] to JSON, POSTs it to the Score or Insights
//! endpoint with HTTP Basic authentication, and maps the response to either
//! a typed response document or a [`MinFraudClientError`] variant
//! describing exactly why the call failed.
//!
//! The client performs no retries and holds no per-call state; retry policy
//! belongs to the caller, and a single client may be shared freely across
//! tasks.
//!
//! # Modules
//!
//! - [`client`] — The client and its builder
//! - [`constants`] — Default host and endpoint path constants
//! - [`error`] — Transport and web-service error taxonomy
//!
//! # Feature Flags
//!
//! - `telemetry` — Enables tracing instrumentation of each service call

pub mod client;
pub mod constants;
pub mod error;

pub use client::{MinFraudClient, MinFraudClientBuilder};
pub use error::MinFraudClientError;
