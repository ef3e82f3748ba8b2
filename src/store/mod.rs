// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence for the current account.
//!
//! A host implements [`AccountStore`] on top of whatever durable medium it
//! has (a file, platform secure storage, a keychain). Exactly one account is
//! current at a time: saving overwrites it and deleting clears it.

pub mod file;
pub mod memory;

pub use file::FileAccountStore;
pub use memory::MemoryAccountStore;

use crate::error::{StoreError, StoreResult};
use crate::models::account::AccountRecord;
use crate::models::Account;
use chrono::{SecondsFormat, Utc};

/// Storage capability for the single current account.
///
/// Methods are synchronous and may block on I/O. Hosts that need
/// non-blocking behavior should call them from a blocking task.
pub trait AccountStore: Send + Sync {
    /// Load the stored account.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    fn load_account(&self) -> StoreResult<Option<Account>>;

    /// Store `account` as the current account, replacing any previous one.
    ///
    /// `identifier` is a human-readable hint for host bookkeeping (usually an
    /// email address). It is not checked against the account.
    fn save_account(&self, account: &Account, identifier: Option<&str>) -> StoreResult<()>;

    /// Clear the current account.
    ///
    /// `account` is informational; whatever is stored is removed.
    fn delete_account(&self, account: &Account) -> StoreResult<()>;

    /// Identifier recorded with the stored account, if any.
    fn stored_identifier(&self) -> StoreResult<Option<String>> {
        Ok(None)
    }

    /// Re-save `account` under the identifier already on record.
    fn update_account(&self, account: &Account) -> StoreResult<()> {
        let identifier = self.stored_identifier()?;
        self.save_account(account, identifier.as_deref())
    }

    #[deprecated(note = "the password is ignored; use `save_account`")]
    fn save_account_with_password(
        &self,
        account: &Account,
        identifier: Option<&str>,
        _password: &str,
    ) -> StoreResult<()> {
        self.save_account(account, identifier)
    }
}

impl<S: AccountStore + ?Sized> AccountStore for Box<S> {
    fn load_account(&self) -> StoreResult<Option<Account>> {
        (**self).load_account()
    }

    fn save_account(&self, account: &Account, identifier: Option<&str>) -> StoreResult<()> {
        (**self).save_account(account, identifier)
    }

    fn delete_account(&self, account: &Account) -> StoreResult<()> {
        (**self).delete_account(account)
    }

    fn stored_identifier(&self) -> StoreResult<Option<String>> {
        (**self).stored_identifier()
    }
}

/// On-medium document shared by the bundled stores, as written.
#[derive(serde::Serialize)]
pub(crate) struct StoredAccount<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<&'a str>,
    saved_at: String,
    account: &'a Account,
}

impl<'a> StoredAccount<'a> {
    pub(crate) fn new(account: &'a Account, identifier: Option<&'a str>) -> Self {
        Self {
            identifier,
            saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            account,
        }
    }
}

/// On-medium document as read back. The account is validated separately so
/// a well-formed document holding an invalid account is reported as
/// [`StoreError::Account`] rather than as corruption.
#[derive(serde::Deserialize)]
pub(crate) struct StoredRecord {
    #[serde(default)]
    pub identifier: Option<String>,
    account: AccountRecord,
}

impl StoredRecord {
    /// Parse the document structure read from `origin`.
    pub(crate) fn parse(data: &str, origin: &str) -> StoreResult<Self> {
        serde_json::from_str(data).map_err(|e| StoreError::Corrupt(format!("{}: {}", origin, e)))
    }

    pub(crate) fn into_account(self) -> StoreResult<Account> {
        Ok(Account::try_from(self.account)?)
    }
}
