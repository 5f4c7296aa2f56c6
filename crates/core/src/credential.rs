//! Opaque authentication credential.

use serde::{Deserialize, Serialize};

/// An authentication token as stored by the login flow.
///
/// Only *presence* is ever checked by this core; validity (signature, expiry)
/// is the server's concern. The token text is deliberately opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}
