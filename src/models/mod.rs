// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for accounts and their users.

pub mod account;
pub mod user;

pub use account::{copy, Account};
pub use user::User;
