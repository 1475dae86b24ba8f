//! HTTP client for the chatterbox authentication endpoints.
//!
//! This module provides the `AuthClient` struct for registering accounts,
//! logging in, and fetching the profile behind a bearer token.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::models::{
    Credentials, LoginResponse, MeResponse, RegisterResponse, Registration, UserProfile,
};
use crate::session::HeaderOptions;

use super::AuthError;

// ============================================================================
// Constants
// ============================================================================

/// Path of the account creation endpoint
const REGISTER_PATH: &str = "api/auth/register";

/// Path of the login endpoint
const LOGIN_PATH: &str = "api/auth/login";

/// Path of the current-user endpoint
const ME_PATH: &str = "api/auth/me";

/// API client for the authentication endpoints.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    api_url: String,
}

impl AuthClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL, without a trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The underlying HTTP client, for callers that send other requests
    /// through the same connection pool
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Log in with email and password. Returns the issued token and the
    /// user behind it; persisting the token is the caller's job.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        debug!(email = %credentials.email, "Logging in");
        self.post_json(LOGIN_PATH, credentials).await
    }

    /// Create a new account.
    pub async fn register(
        &self,
        registration: &Registration,
    ) -> Result<RegisterResponse, AuthError> {
        debug!(email = %registration.email, "Registering account");
        self.post_json(REGISTER_PATH, registration).await
    }

    /// Fetch the profile of the user the given headers authenticate as.
    pub async fn me(&self, headers: &HeaderOptions) -> Result<UserProfile, AuthError> {
        let response = self
            .client
            .get(self.endpoint(ME_PATH))
            .headers(headers.to_header_map())
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let me: MeResponse = Self::parse_body(response).await?;
        Ok(me.user)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .headers(HeaderOptions::json().to_header_map())
            .json(body)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        Self::parse_body(response).await
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AuthError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(AuthError::from_status(status, &body))
        }
    }

    async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AuthError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            AuthError::InvalidResponse(format!(
                "Failed to parse response body: {} (body: {})",
                e,
                AuthError::truncate_body(&text)
            ))
        })
    }
}
