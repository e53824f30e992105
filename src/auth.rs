//! Password-grant token provider.
//!
//! The API under test authorizes requests with a bearer token obtained from
//! an OAuth-style token endpoint: a form-encoded POST carrying the user
//! credentials and `grant_type=password`, with the client credentials in a
//! basic-auth header.

use crate::config::SuiteConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::RequestBuilder;
use serde_json::Value;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Obtains and caches the bearer token used to authorize API calls.
///
/// The first `token()` call performs the exchange with the configured default
/// user; the result is reused for the rest of the provider's lifetime.
/// `authenticate_as` always re-exchanges, so a suite can switch identity
/// mid-test.
pub struct TokenProvider {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
    cached: Mutex<Option<String>>,
}

impl TokenProvider {
    pub fn new(http: reqwest::Client, config: &SuiteConfig) -> Self {
        Self {
            http,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            cached: Mutex::new(None),
        }
    }

    /// Returns the bearer token, fetching it on first use.
    ///
    /// Returns `None` when the token endpoint is unreachable or its response
    /// carries no `access_token`. No retry happens within a call; an
    /// authorized request then goes out with an empty bearer value and the
    /// server rejects it itself.
    pub async fn token(&self) -> Option<String> {
        if let Some(token) = self.cached.lock().unwrap().clone() {
            return Some(token);
        }
        let token = self.exchange(&self.username, &self.password).await;
        *self.cached.lock().unwrap() = token.clone();
        token
    }

    /// Re-authenticates with the given user credentials.
    ///
    /// Always performs a fresh exchange and overwrites the cached token,
    /// whatever its prior state. Used to exercise per-user authorization.
    pub async fn authenticate_as(&self, username: &str, password: &str) -> Option<String> {
        let token = self.exchange(username, password).await;
        *self.cached.lock().unwrap() = token.clone();
        token
    }

    /// Decorates a request with the bearer token and a JSON content type.
    pub async fn with_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.token().await.unwrap_or_default();
        request
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn exchange(&self, username: &str, password: &str) -> Option<String> {
        let response = match self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("username", username),
                ("password", password),
                ("grant_type", "password"),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("Token endpoint request failed: {err}");
                return None;
            }
        };

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                warn!("Token endpoint returned a non-JSON body: {err}");
                return None;
            }
        };

        match body.get("access_token").and_then(Value::as_str) {
            Some(token) => {
                debug!("Obtained access token for {username}");
                Some(token.to_string())
            }
            None => {
                warn!("Token endpoint response carries no access_token");
                None
            }
        }
    }
}
