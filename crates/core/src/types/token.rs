//! Opaque session token type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque bearer credential identifying an authenticated client.
///
/// Minted by the session registry at login and presented by the client in
/// the `x-session-id` header on every authenticated request. The contents
/// carry no meaning; equality is the only operation that matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionToken {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(SessionToken::new("abc"), SessionToken::from("abc"));
        assert_ne!(SessionToken::new("abc"), SessionToken::new("abd"));
    }

    #[test]
    fn test_serde_transparent() {
        let token = SessionToken::new("deadbeef");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"deadbeef\"");
    }
}
