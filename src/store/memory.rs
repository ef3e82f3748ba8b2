// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory account store.
//!
//! Keeps the serialized account rather than the value itself so a load goes
//! through the same validation a durable store would.

use super::{AccountStore, StoredAccount, StoredRecord};
use crate::error::{StoreError, StoreResult};
use crate::models::Account;
use std::sync::{Mutex, MutexGuard};

/// Account store that lives only as long as the process.
#[derive(Default)]
pub struct MemoryAccountStore {
    slot: Mutex<Option<String>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no account is currently stored.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_none())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Option<String>>> {
        self.slot
            .lock()
            .map_err(|_| StoreError::Backend(anyhow::anyhow!("account slot lock poisoned")))
    }

    fn read(&self) -> StoreResult<Option<StoredRecord>> {
        self.lock()?
            .as_deref()
            .map(|data| StoredRecord::parse(data, "memory"))
            .transpose()
    }
}

impl AccountStore for MemoryAccountStore {
    fn load_account(&self) -> StoreResult<Option<Account>> {
        let stored = self.read()?;
        tracing::debug!(found = stored.is_some(), "Loaded account from memory");
        stored.map(StoredRecord::into_account).transpose()
    }

    fn save_account(&self, account: &Account, identifier: Option<&str>) -> StoreResult<()> {
        let json = serde_json::to_string(&StoredAccount::new(account, identifier))
            .map_err(StoreError::Serialization)?;
        *self.lock()? = Some(json);

        tracing::info!(
            identifier,
            authenticated = account.is_authenticated(),
            "Saved account to memory"
        );
        Ok(())
    }

    fn delete_account(&self, _account: &Account) -> StoreResult<()> {
        self.lock()?.take();
        tracing::info!("Deleted account from memory");
        Ok(())
    }

    fn stored_identifier(&self) -> StoreResult<Option<String>> {
        Ok(self.read()?.and_then(|s| s.identifier))
    }
}
