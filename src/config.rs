//! Externalized suite configuration.
//!
//! Settings are read from a TOML file whose path comes from the
//! `TASKPLUS_E2E_CONFIG` environment variable, falling back to `e2e.toml` in
//! the working directory. Every field is optional in the file; missing values
//! resolve to the reference deployment defaults (server on localhost:8080,
//! versioned API under `/v1`).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file to load.
pub const CONFIG_PATH_ENV: &str = "TASKPLUS_E2E_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "e2e.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/v1";
const DEFAULT_TOKEN_URL: &str = "http://localhost:8080/oauth/token";
const DEFAULT_CLIENT_ID: &str = "maif-web";
const DEFAULT_CLIENT_SECRET: &str = "web123";
const DEFAULT_USERNAME: &str = "luna.moon@maif.com";
const DEFAULT_PASSWORD: &str = "123";
const DEFAULT_DATABASE_PATH: &str = "taskmanager.db";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub server: ServerSection,
    pub auth: AuthSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ServerSection {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AuthSection {
    pub token_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseSection {
    pub path: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

/// Resolved suite settings with no optional fields left.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub database_path: PathBuf,
}

impl SuiteConfig {
    /// Fills file values over the reference deployment defaults.
    pub fn resolve(file: FileConfig) -> Self {
        Self {
            base_url: file
                .server
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout_secs: file
                .server
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            token_url: file
                .auth
                .token_url
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            client_id: file
                .auth
                .client_id
                .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
            client_secret: file
                .auth
                .client_secret
                .unwrap_or_else(|| DEFAULT_CLIENT_SECRET.to_string()),
            username: file
                .auth
                .username
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: file
                .auth
                .password
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            database_path: file
                .database
                .path
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
        }
    }

    /// Loads the suite configuration.
    ///
    /// A path set via `TASKPLUS_E2E_CONFIG` must exist and parse; an absent
    /// `e2e.toml` in the working directory resolves to pure defaults.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(Self::resolve(FileConfig::load(Path::new(&path))?));
        }
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Ok(Self::resolve(FileConfig::load(default_path)?));
        }
        Ok(Self::resolve(FileConfig::default()))
    }
}
