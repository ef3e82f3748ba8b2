// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use api_account::Account;
use std::fs;

/// Raw user payload as served by the API (pretty-printed, with unmodeled fields).
#[allow(dead_code)]
pub fn user_fixture() -> String {
    fs::read_to_string("tests/fixtures/user.json")
        .expect("Failed to read fixture")
        .trim_end()
        .to_string()
}

/// A full account carrying the fixture user.
#[allow(dead_code)]
pub fn full_account() -> Account {
    Account::with_credentials("access-123", "bearer", "public private", Some(user_fixture()))
        .expect("Fixture account should be valid")
}

/// Install a test subscriber so store logging is visible with RUST_LOG.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
