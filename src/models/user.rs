//! User profile associated with an authenticated account.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User profile as returned by the remote API.
///
/// Only the identity and a handful of display fields are modeled. Every other
/// field is kept in `extra` so re-serializing keeps unmodeled data. Modeled
/// optional fields that are absent or `null` are omitted on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Canonical resource path, e.g. `/users/12345`
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Public profile URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Membership level (e.g. "basic", "pro")
    #[serde(
        rename = "account",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_type: Option<String>,
    /// Fields this crate does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Create a user with only an identity.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: None,
            link: None,
            location: None,
            bio: None,
            account_type: None,
            extra: Map::new(),
        }
    }

    /// Trailing path segment of the uri (the numeric id for `/users/12345`).
    pub fn id(&self) -> Option<&str> {
        self.uri
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
    }
}
