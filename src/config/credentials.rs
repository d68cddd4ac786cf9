//! Credentials used to recover from authentication failures

use std::fmt;

/// Username and access token injected into HTTP(S) clone URLs
///
/// Shared read-only across the whole batch. The token is never printed by
/// `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &crate::constants::git::REDACTED)
            .finish()
    }
}
