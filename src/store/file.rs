// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON file account store.
//!
//! The account is written as a single JSON document:
//!
//! ```json
//! {
//!   "identifier": "user@example.com",
//!   "saved_at": "2026-01-15T12:00:00Z",
//!   "account": { "access_token": "...", "token_type": "bearer", "scope": "public", "user": {...} }
//! }
//! ```

use super::{AccountStore, StoredAccount, StoredRecord};
use crate::error::{StoreError, StoreResult};
use crate::models::Account;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Account store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    /// Create a store for `path`. Nothing is touched on disk until the first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StoreResult<Option<StoredRecord>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        StoredRecord::parse(&data, &self.path.display().to_string()).map(Some)
    }

    /// Directory holding the account file; temp files are created here so the
    /// final rename stays on one filesystem.
    fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl AccountStore for FileAccountStore {
    fn load_account(&self) -> StoreResult<Option<Account>> {
        let stored = self.read()?;
        tracing::debug!(
            path = %self.path.display(),
            found = stored.is_some(),
            "Loaded account from file"
        );
        stored.map(StoredRecord::into_account).transpose()
    }

    fn save_account(&self, account: &Account, identifier: Option<&str>) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(&StoredAccount::new(account, identifier))
            .map_err(StoreError::Serialization)?;

        let dir = self.dir();
        fs::create_dir_all(dir)?;

        // Each save gets its own temp file, removed on drop if anything fails.
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(&json)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;

        tracing::info!(
            path = %self.path.display(),
            identifier,
            authenticated = account.is_authenticated(),
            "Saved account to file"
        );
        Ok(())
    }

    fn delete_account(&self, _account: &Account) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Deleted account file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn stored_identifier(&self) -> StoreResult<Option<String>> {
        Ok(self.read()?.and_then(|s| s.identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_of_bare_file_name() {
        assert_eq!(FileAccountStore::new("account.json").dir(), Path::new("."));
        assert_eq!(
            FileAccountStore::new("/var/lib/app/account.json").dir(),
            Path::new("/var/lib/app")
        );
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAccountStore::new(dir.path().join("missing.json"));
        assert!(store.load_account().unwrap().is_none());
        store
            .delete_account(&Account::unauthenticated())
            .expect("deleting nothing is not an error");
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("account.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileAccountStore::new(&path).load_account().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
        assert!(err.is_data_error());
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAccountStore::new(dir.path().join("account.json"));
        store.save_account(&Account::new("tok").unwrap(), None).unwrap();
        store.save_account(&Account::new("tok2").unwrap(), None).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("account.json")]);
    }
}
