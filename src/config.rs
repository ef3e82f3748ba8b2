//! Store configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.

use crate::store::{AccountStore, FileAccountStore, MemoryAccountStore};
use std::env;
use std::path::PathBuf;

/// Default location of the account file.
pub const DEFAULT_STORE_PATH: &str = "account.json";

/// Where the current account is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// JSON file at the given path
    File(PathBuf),
    /// Process memory only
    Memory,
}

/// Account store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File(PathBuf::from(DEFAULT_STORE_PATH)),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// - `ACCOUNT_STORE_BACKEND`: `file` (default) or `memory`
    /// - `ACCOUNT_STORE_PATH`: file path for the `file` backend
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(
            env::var("ACCOUNT_STORE_BACKEND").ok().as_deref(),
            env::var("ACCOUNT_STORE_PATH").ok().as_deref(),
        )
    }

    fn from_vars(backend: Option<&str>, path: Option<&str>) -> Result<Self, ConfigError> {
        let backend = match backend.map(str::trim).unwrap_or("file") {
            "file" => StoreBackend::File(PathBuf::from(
                path.map(str::trim)
                    .filter(|p| !p.is_empty())
                    .unwrap_or(DEFAULT_STORE_PATH),
            )),
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "ACCOUNT_STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self { backend })
    }

    /// Build the configured store.
    pub fn open(&self) -> Box<dyn AccountStore> {
        match &self.backend {
            StoreBackend::File(path) => {
                tracing::info!(path = %path.display(), "Using file account store");
                Box::new(FileAccountStore::new(path))
            }
            StoreBackend::Memory => {
                tracing::info!("Using in-memory account store");
                Box::new(MemoryAccountStore::new())
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_file_store() {
        let config = StoreConfig::from_vars(None, None).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_file_path_override() {
        let config = StoreConfig::from_vars(Some("file"), Some("/tmp/acct.json")).unwrap();
        assert_eq!(
            config.backend,
            StoreBackend::File(PathBuf::from("/tmp/acct.json"))
        );
    }

    #[test]
    fn test_memory_backend() {
        let config = StoreConfig::from_vars(Some("memory"), Some("ignored")).unwrap();
        assert_eq!(config.backend, StoreBackend::Memory);
        assert!(config.open().load_account().unwrap().is_none());
    }

    #[test]
    fn test_unknown_backend() {
        let err = StoreConfig::from_vars(Some("keychain"), None).unwrap_err();
        assert!(err.to_string().contains("keychain"));
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("ACCOUNT_STORE_BACKEND", "memory");

        let config = StoreConfig::from_env().expect("Config should load");

        assert_eq!(config.backend, StoreBackend::Memory);
        env::remove_var("ACCOUNT_STORE_BACKEND");
    }
}
