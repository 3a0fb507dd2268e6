//! Response documents returned by the Score and Insights endpoints.
//!
//! Every field in every type is optional: the service omits fields it has
//! no data for, and the JSON may grow new fields at any time. Documents
//! with unknown fields deserialize cleanly; absent fields come back as
//! `None`, never a sentinel or default value.
//!
//! # Modules
//!
//! - [`score`] — Score endpoint document
//! - [`insights`] — Insights endpoint document
//! - [`ip_address`] — Geolocation and IP reputation data
//! - [`address`] — Billing/shipping address risk data
//! - [`credit_card`] — Issuer data derived from the IIN
//! - [`email`] — Email reputation data
//! - [`subscores`] — Per-factor component scores
//! - [`warning`] — Non-fatal input warnings

pub mod address;
pub mod credit_card;
pub mod email;
pub mod insights;
pub mod ip_address;
pub mod score;
pub mod subscores;
pub mod warning;

pub use address::{BillingAddress, ShippingAddress};
pub use credit_card::{CreditCard, Issuer};
pub use email::Email;
pub use insights::Insights;
pub use ip_address::IpAddress;
pub use score::{Score, ScoreIpAddress};
pub use subscores::Subscores;
pub use warning::Warning;
