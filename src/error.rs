// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for accounts and account storage.

/// Errors raised while building or mutating an [`Account`](crate::models::Account).
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Required credential fields were missing, empty, or only partially supplied.
    #[error("Invalid account: {0}")]
    Validation(&'static str),

    /// Supplied user JSON could not be parsed into a user profile.
    #[error("Failed to deserialize user: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The user profile could not be serialized for the JSON cache.
    #[error("Failed to serialize user: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Errors raised by an [`AccountStore`](crate::store::AccountStore) implementation.
///
/// The core never retries or interprets these; they are surfaced as-is.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize account: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Stored account is corrupt: {0}")]
    Corrupt(String),

    #[error("Stored account is invalid: {0}")]
    Account(#[from] AccountError),

    /// Host-defined failure from a custom backend (keychain, secure storage, ...).
    #[error("Storage backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Errors raised by [`AccountSession`](crate::session::AccountSession).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No current account")]
    NoAccount,

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for account operations
pub type Result<T> = std::result::Result<T, AccountError>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// True when the failure came from the stored data rather than the medium.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            StoreError::Corrupt(_) | StoreError::Account(_) | StoreError::Serialization(_)
        )
    }
}
