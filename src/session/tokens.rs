//! Token pair model
//!
//! The session owns exactly one [`TokenPair`] in memory. The pair is created
//! on a successful login, the access half is replaced on refresh, and both
//! halves are dropped on logout. An access token, when present, was always
//! issued against the stored refresh token.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair for the rental API
///
/// Both fields are optional: a fresh session holds neither token, and the
/// serialized form uses the fixed keys `access_token` and `refresh_token`
/// shared with the durable store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived credential sent with each authenticated request
    #[serde(rename = "access_token")]
    pub access: Option<String>,
    /// Longer-lived credential used solely to obtain a new access token
    #[serde(rename = "refresh_token")]
    pub refresh: Option<String>,
}

impl TokenPair {
    /// Creates a pair holding both tokens
    #[must_use]
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: Some(access.into()),
            refresh: Some(refresh.into()),
        }
    }

    /// Returns true when an access token is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access.is_some()
    }

    /// Returns true when neither token is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh.is_none()
    }
}

/// Snapshot of the token pair dispatched to subscribers after every change
///
/// Cleared tokens dispatch `None` in both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEvent {
    /// Access token after the change, if any
    pub access: Option<String>,
    /// Refresh token after the change, if any
    pub refresh: Option<String>,
}

impl From<&TokenPair> for TokenEvent {
    fn from(pair: &TokenPair) -> Self {
        Self {
            access: pair.access.clone(),
            refresh: pair.refresh.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pair_is_not_authenticated() {
        let pair = TokenPair::default();
        assert!(!pair.is_authenticated());
        assert!(pair.is_empty());
    }

    #[test]
    fn new_pair_holds_both_tokens() {
        let pair = TokenPair::new("A1", "R1");
        assert!(pair.is_authenticated());
        assert_eq!(pair.access.as_deref(), Some("A1"));
        assert_eq!(pair.refresh.as_deref(), Some("R1"));
    }

    #[test]
    fn serializes_under_fixed_keys() {
        let pair = TokenPair::new("A1", "R1");
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["access_token"], "A1");
        assert_eq!(json["refresh_token"], "R1");
    }
}
