//! Device information for the transaction.

use std::net::IpAddr;

use serde::Serialize;

use crate::error::ValidationError;

/// The device the end user transacted from.
///
/// This is the one sub-object the service cannot score without: the IP
/// address anchors all geolocation and IP-reputation factors.
///
/// # JSON Format
///
/// ```json
/// {
///   "ip_address": "81.2.69.160",
///   "user_agent": "Mozilla/5.0 ...",
///   "accept_language": "en-US,en;q=0.8"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    /// IP address the transaction was made from.
    pub ip_address: IpAddr,

    /// HTTP `User-Agent` header of the device's browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// HTTP `Accept-Language` header of the device's browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
}

impl Device {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }
}

/// Builder for [`Device`].
#[derive(Debug, Clone, Default)]
pub struct DeviceBuilder {
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
    accept_language: Option<String>,
}

impl DeviceBuilder {
    /// Sets the IP address of the device. Required.
    #[must_use]
    pub const fn ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Sets the browser `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the browser `Accept-Language` header.
    #[must_use]
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    /// Builds the [`Device`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if no IP address was set.
    pub fn build(self) -> Result<Device, ValidationError> {
        let ip_address = self
            .ip_address
            .ok_or_else(|| ValidationError::new("ip_address", "an IP address is required"))?;

        Ok(Device {
            ip_address,
            user_agent: self.user_agent,
            accept_language: self.accept_language,
        })
    }
}
