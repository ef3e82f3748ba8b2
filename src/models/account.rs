// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account model: an authenticated (or client-credentialed) session.
//!
//! An account carries an access token, optionally a token type and scope, and
//! optionally the [`User`] it belongs to. The user is also kept as JSON text so
//! hosts can persist it without re-serializing on every save.
//!
//! `Account` is a plain value. Mutating it through `&mut` requires external
//! synchronization if it is shared between threads (wrap it in a lock or keep
//! it owned by a single client).

use crate::error::{AccountError, Result};
use crate::models::User;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

/// A session against the remote API.
#[derive(Clone)]
pub struct Account {
    access_token: Option<String>,
    token_type: Option<String>,
    scope: Option<String>,
    user: Option<User>,
    /// Serialized form of `user`. Always `Some` exactly when `user` is `Some`.
    user_json: Option<String>,
}

impl Account {
    /// Create an account from an access token alone (client credentials).
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let access_token = access_token.into();
        if is_blank(&access_token) {
            return Err(AccountError::Validation("account must be created with a token"));
        }

        Ok(Self {
            access_token: Some(access_token),
            ..Self::unauthenticated()
        })
    }

    /// Create a fully specified account.
    ///
    /// When `user_json` is given it is parsed into the account's [`User`], and
    /// the text is kept verbatim as the cached JSON: [`Account::user_json`]
    /// returns exactly what was passed in until the user is replaced.
    pub fn with_credentials(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        scope: impl Into<String>,
        user_json: Option<String>,
    ) -> Result<Self> {
        let access_token = access_token.into();
        let token_type = token_type.into();
        let scope = scope.into();

        if is_blank(&access_token) || is_blank(&token_type) || is_blank(&scope) {
            return Err(AccountError::Validation(
                "account can only be created with token, token type and scope",
            ));
        }

        let user = user_json
            .as_deref()
            .map(serde_json::from_str::<User>)
            .transpose()
            .map_err(AccountError::Deserialization)?;

        Ok(Self {
            access_token: Some(access_token),
            token_type: Some(token_type),
            scope: Some(scope),
            user,
            user_json,
        })
    }

    /// An account with no credentials at all.
    pub fn unauthenticated() -> Self {
        Self {
            access_token: None,
            token_type: None,
            scope: None,
            user: None,
            user_json: None,
        }
    }

    /// True if the account holds a non-empty access token.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Replace the user, recomputing the cached JSON immediately.
    ///
    /// On error the account is left unchanged.
    pub fn set_user(&mut self, user: Option<User>) -> Result<()> {
        let user_json = user
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(AccountError::Serialization)?;

        tracing::debug!(
            user = user.as_ref().map(|u| u.uri.as_str()),
            "Recomputed user JSON cache"
        );

        self.user = user;
        self.user_json = user_json;
        Ok(())
    }

    /// Consume the account and return it with a different user.
    pub fn with_user(mut self, user: Option<User>) -> Result<Self> {
        self.set_user(user)?;
        Ok(self)
    }

    /// The user as JSON text, or `None` if there is no user.
    ///
    /// The cache is filled whenever the user is set, so this never serializes.
    pub fn user_json(&self) -> Option<&str> {
        self.user.as_ref()?;
        self.user_json.as_deref()
    }
}

/// Rebuild an account from another account's observable state.
///
/// - token, type and scope present: a full account, re-parsing the user JSON
/// - only a token: a token-only account
/// - no token: `Ok(None)`, since there is nothing to copy
pub fn copy(other: &Account) -> Result<Option<Account>> {
    match (other.access_token(), other.token_type(), other.scope()) {
        (Some(token), Some(token_type), Some(scope)) => Account::with_credentials(
            token,
            token_type,
            scope,
            other.user_json().map(str::to_owned),
        )
        .map(Some),
        (Some(token), _, _) => Account::new(token).map(Some),
        (None, _, _) => Ok(None),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.access_token == other.access_token
            && self.token_type == other.token_type
            && self.scope == other.scope
            && self.user == other.user
    }
}

impl Eq for Account {}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("user", &self.user)
            .finish()
    }
}

// ─── Wire format ─────────────────────────────────────────────

/// Outgoing JSON shape. The user is written from the cache as raw JSON so a
/// stored account keeps the exact user text it was given.
#[derive(Serialize)]
struct AccountRecordRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<Box<RawValue>>,
}

/// Incoming JSON shape, before validation.
#[derive(Deserialize)]
pub(crate) struct AccountRecord {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    user: Option<Box<RawValue>>,
}

impl TryFrom<AccountRecord> for Account {
    type Error = AccountError;

    fn try_from(record: AccountRecord) -> Result<Self> {
        let user_json = record.user.map(|raw| raw.get().to_owned());

        let account = match (record.access_token, record.token_type, record.scope) {
            (None, None, None) => Account::unauthenticated(),
            (Some(token), None, None) => Account::new(token)?,
            (Some(token), Some(token_type), Some(scope)) => {
                return Account::with_credentials(token, token_type, scope, user_json);
            }
            _ => {
                return Err(AccountError::Validation(
                    "token type and scope require each other and an access token",
                ))
            }
        };

        match user_json {
            Some(json) => {
                let user = serde_json::from_str(&json).map_err(AccountError::Deserialization)?;
                Ok(Account {
                    user: Some(user),
                    user_json: Some(json),
                    ..account
                })
            }
            None => Ok(account),
        }
    }
}

impl Serialize for Account {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let user = self
            .user_json()
            .map(|json| RawValue::from_string(json.to_owned()))
            .transpose()
            .map_err(S::Error::custom)?;

        AccountRecordRef {
            access_token: self.access_token(),
            token_type: self.token_type(),
            scope: self.scope(),
            user,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Account {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = AccountRecord::deserialize(deserializer)?;
        Account::try_from(record).map_err(D::Error::custom)
    }
}
