#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Wire format types for the minFraud Score and Insights web services.
//!
//! This crate defines the serialization-level data structures exchanged with
//! the minFraud v2.0 fraud-scoring service: the request tree assembled by the
//! caller and the response documents returned by the service. It contains no
//! transport logic; the HTTPS client lives in the `minfraud-http` crate.
//!
//! All scoring happens server-side. These types exist to marshal data across
//! the wire boundary field-for-field against the externally-owned JSON
//! schema: optional request fields are omitted from the outgoing document
//! when unset (never serialized as `null`), and every response field is
//! optional so that documents missing data deserialize cleanly. Unknown
//! response fields are ignored for forward compatibility.
//!
//! # Modules
//!
//! - [`request`] — Request value objects and their builders
//! - [`response`] — Score and Insights response documents
//! - [`error`] — Builder validation errors
//!
//! # Example
//!
//! ```rust
//! use minfraud::MinFraudRequest;
//! use minfraud::request::{Device, Event, EventType};
//!
//! # fn main() -> Result<(), minfraud::ValidationError> {
//! let request = MinFraudRequest::builder()
//!     .device(
//!         Device::builder()
//!             .ip_address("81.2.69.160".parse().expect("valid IP"))
//!             .user_agent("Mozilla/5.0")
//!             .build()?,
//!     )
//!     .event(
//!         Event::builder()
//!             .transaction_id("txn3134133")
//!             .event_type(EventType::Purchase)
//!             .build(),
//!     )
//!     .build()?;
//!
//! let json = serde_json::to_string(&request).expect("serializable request");
//! assert!(json.contains("txn3134133"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod request;
pub mod response;

pub use error::ValidationError;
pub use request::MinFraudRequest;
pub use response::{Insights, Score};

/// minFraud web service schema version these types target.
pub const SERVICE_VERSION: &str = "v2.0";
