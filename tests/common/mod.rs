//! Common infrastructure for the end-to-end suites.
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! The suites drive an externally-started Task Manager Plus deployment; see
//! `e2e.toml` for the connection settings. Every e2e test is marked
//! `#[ignore]` and runs with `cargo test -- --ignored`.

// Not every suite touches every helper
#![allow(dead_code)]

mod constants;

pub use constants::*;

use chrono::NaiveDateTime;
use std::sync::Once;
use taskplus_e2e::{ApiClient, FixtureStore, SuiteConfig};

static INIT_LOGGING: Once = Once::new();

/// Loads the suite configuration, initializing logging once per process.
pub fn suite_config() -> SuiteConfig {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
    SuiteConfig::load().expect("Failed to load suite configuration")
}

/// Creates an API client for the configured deployment.
pub fn api_client() -> ApiClient {
    ApiClient::new(&suite_config())
}

/// Opens the fixture store for the configured backing database.
pub fn fixture_store() -> FixtureStore {
    FixtureStore::new(suite_config().database_path)
}

/// Parses the `YYYY-MM-DD HH:MM:SS` literals used throughout the suites.
pub fn timestamp(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").expect("Invalid timestamp literal")
}

/// Deletes a fixture row when dropped, whether the test passed or panicked.
///
/// The test that created a row owns its cleanup; holding one of these per
/// created row is the suite's replacement for a manual cleanup block.
pub struct RowGuard {
    store: FixtureStore,
    table: &'static str,
    id: i64,
}

impl RowGuard {
    pub fn new(store: FixtureStore, table: &'static str, id: i64) -> Self {
        Self { store, table, id }
    }
}

impl Drop for RowGuard {
    fn drop(&mut self) {
        if let Err(err) = self.store.delete(self.table, self.id) {
            eprintln!("Failed to clean up {} row {}: {}", self.table, self.id, err);
        }
    }
}
