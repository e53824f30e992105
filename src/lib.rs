//! Black-box test harness for the Task Manager Plus REST API.
//!
//! This library holds the pieces the end-to-end suites under `tests/` share:
//! externalized configuration, the password-grant token provider, a thin HTTP
//! client with one method per API endpoint, and a direct-SQL fixture store
//! used to set up and tear down rows around each test.

pub mod auth;
pub mod client;
pub mod config;
pub mod fixture;
pub mod model;

// Re-export commonly used types for convenience
pub use auth::TokenProvider;
pub use client::ApiClient;
pub use config::SuiteConfig;
pub use fixture::{FixtureStore, FixtureValue};
