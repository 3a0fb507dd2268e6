//! Transaction event information.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The kind of event being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A new account was created.
    AccountCreation,
    /// An existing account logged in.
    AccountLogin,
    /// A purchase was made.
    Purchase,
    /// A recurring purchase (e.g. a subscription renewal) was made.
    RecurringPurchase,
    /// A referral event.
    Referral,
    /// A survey submission.
    Survey,
}

/// The event being scored.
///
/// All fields are optional on the wire, but the aggregate request requires
/// an `Event` sub-object to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Your internal transaction identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Your internal identifier for the shop or storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,

    /// When the event occurred, serialized as an RFC 3339 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,

    /// The kind of event.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
}

impl Event {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }
}

/// Builder for [`Event`].
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    transaction_id: Option<String>,
    shop_id: Option<String>,
    time: Option<DateTime<Utc>>,
    event_type: Option<EventType>,
}

impl EventBuilder {
    /// Sets the transaction identifier.
    #[must_use]
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    /// Sets the shop identifier.
    #[must_use]
    pub fn shop_id(mut self, shop_id: impl Into<String>) -> Self {
        self.shop_id = Some(shop_id.into());
        self
    }

    /// Sets the time the event occurred.
    #[must_use]
    pub const fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the event type.
    #[must_use]
    pub const fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Builds the [`Event`]. All fields are optional; this cannot fail.
    #[must_use]
    pub fn build(self) -> Event {
        Event {
            transaction_id: self.transaction_id,
            shop_id: self.shop_id,
            time: self.time,
            event_type: self.event_type,
        }
    }
}
