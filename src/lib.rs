// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! API account core: the authenticated session an API client works with.
//!
//! This crate provides the [`Account`] value (access token, token type, scope
//! and the associated [`User`] with a cached JSON form) and the
//! [`AccountStore`] contract a host implements to persist the current account
//! across restarts.

pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;

pub use error::{AccountError, SessionError, StoreError};
pub use models::{copy, Account, User};
pub use session::AccountSession;
pub use store::{AccountStore, FileAccountStore, MemoryAccountStore};
