//! Account information for the user placing the transaction.

use md5::{Digest, Md5};
use serde::Serialize;

/// The account the end user transacted under.
///
/// The service never receives a plaintext username: the builder hashes it
/// and only the MD5 hex digest is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Your internal identifier for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// MD5 hex digest of the username, lowercase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_md5: Option<String>,
}

impl Account {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> AccountBuilder {
        AccountBuilder::default()
    }
}

/// Builder for [`Account`].
#[derive(Debug, Clone, Default)]
pub struct AccountBuilder {
    user_id: Option<String>,
    username_md5: Option<String>,
}

impl AccountBuilder {
    /// Sets your internal user identifier.
    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the username. Only its MD5 hex digest is stored and sent.
    #[must_use]
    pub fn username(mut self, username: impl AsRef<[u8]>) -> Self {
        let digest = Md5::digest(username.as_ref());
        self.username_md5 = Some(hex::encode(digest));
        self
    }

    /// Builds the [`Account`]. All fields are optional; this cannot fail.
    #[must_use]
    pub fn build(self) -> Account {
        Account {
            user_id: self.user_id,
            username_md5: self.username_md5,
        }
    }
}
