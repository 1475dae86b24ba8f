//! Session state and authentication flows.
//!
//! `SessionStore` owns the logged-in flag, a transient cache of the bearer
//! token, and the header blocks derived from it. The durable copy of the
//! token lives in an injected [`TokenStore`]; the caches here are refreshed
//! from it explicitly, never behind the caller's back.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::api::{AuthClient, AuthError};
use crate::config::ClientConfig;
use crate::models::{Credentials, LoginResponse, RegisterResponse, Registration, UserProfile};
use crate::store::TokenStore;

use super::HeaderOptions;

/// In-memory session state. Everything here is a cache or a flag; the
/// durable token lives in the injected store.
#[derive(Debug, Clone, Default)]
struct SessionState {
    logged_in: bool,
    token: Option<String>,
    user: Option<UserProfile>,
    auth_options: HeaderOptions,
    auth_options_without_content_type: HeaderOptions,
}

/// Tracks login state and derives authorization headers for API calls.
/// Clone is cheap - clones share the same state, store, and HTTP client.
#[derive(Clone)]
pub struct SessionStore {
    api: AuthClient,
    store: Arc<dyn TokenStore>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    /// Create a session backed by the given durable token store.
    ///
    /// A fresh session starts logged out with empty header caches.
    pub fn new(config: &ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        Ok(Self::with_client(AuthClient::new(config)?, store))
    }

    /// Create a session around an existing API client.
    pub fn with_client(api: AuthClient, store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// The API client the session talks through. Callers reuse it to send
    /// their own requests over the same connection pool.
    pub fn api(&self) -> &AuthClient {
        &self.api
    }

    // ========================================================================
    // Flag and cache accessors
    // ========================================================================

    pub fn is_logged_in(&self) -> bool {
        self.state.read().logged_in
    }

    /// Set the logged-in flag. Deliberately not validated against token
    /// presence; callers own the pairing of flag and token.
    pub fn set_logged_in(&self, logged_in: bool) {
        self.state.write().logged_in = logged_in;
        debug!(logged_in, "Session flag updated");
    }

    /// The cached token, as last loaded by `load_headers_from_token`.
    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// The profile cached by the last successful `fetch_current_user`.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.read().user.clone()
    }

    /// The cached headers for JSON requests. Empty until a token has been
    /// loaded; requests built from an empty block go out unauthenticated.
    pub fn auth_options(&self) -> HeaderOptions {
        self.state.read().auth_options.clone()
    }

    /// The cached headers without a content type, for multipart requests.
    pub fn auth_options_without_content_type(&self) -> HeaderOptions {
        self.state.read().auth_options_without_content_type.clone()
    }

    // ========================================================================
    // Header derivation
    // ========================================================================

    /// Derive and cache both header variants from a token. Pure in-memory
    /// derivation, no I/O.
    ///
    /// An empty token clears the cached token and leaves the authorization
    /// slot of both variants unset.
    pub fn load_headers_from_token(&self, token: &str) {
        let mut state = self.state.write();
        state.token = if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        };
        state.auth_options = HeaderOptions::bearer(token);
        state.auth_options_without_content_type = HeaderOptions::bearer_without_content_type(token);
    }

    /// True when the durable store holds a non-empty token. Does not load
    /// it into the cache; `sync_headers_from_stored_token` does that.
    pub fn has_stored_token(&self) -> bool {
        self.store.exists()
    }

    /// Refresh the cached headers from the durable store, if it holds a
    /// non-empty token. Otherwise a no-op; existing caches are kept.
    pub fn sync_headers_from_stored_token(&self) {
        match self.store.get() {
            Some(token) if !token.is_empty() => self.load_headers_from_token(&token),
            _ => debug!("No stored token, keeping cached headers"),
        }
    }

    // ========================================================================
    // Authentication flows
    // ========================================================================

    /// Log in against the remote endpoint.
    ///
    /// On success nothing is persisted and the logged-in flag is not
    /// flipped; the caller stores the returned token and calls
    /// `set_logged_in(true)` once it adopts the session. A failed attempt
    /// leaves all state untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        self.api.login(credentials).await
    }

    /// Create a new account. Like `login`, performs only the network call;
    /// adopting the resulting session is the caller's decision.
    pub async fn register(
        &self,
        registration: &Registration,
    ) -> Result<RegisterResponse, AuthError> {
        self.api.register(registration).await
    }

    /// Fetch the profile behind the durably stored token.
    ///
    /// Reads the durable store, refreshes the cached header blocks from
    /// whatever it holds, then calls the current-user endpoint with them.
    /// With no stored token the request goes out unauthenticated and the
    /// backend's rejection surfaces as [`AuthError::Rejected`]. On success
    /// the profile is cached for `current_user`.
    pub async fn fetch_current_user(&self) -> Result<UserProfile, AuthError> {
        let token = self.store.get().unwrap_or_default();
        self.load_headers_from_token(&token);

        let options = self.auth_options();
        let user = self.api.me(&options).await?;

        self.state.write().user = Some(user.clone());
        debug!(email = %user.email, "Fetched current user");
        Ok(user)
    }

    /// Log out: delete the durable token and clear all in-memory state,
    /// including both cached header blocks and the cached profile.
    ///
    /// A failing store delete is logged and does not stop the in-memory
    /// clear. Calling this twice is harmless.
    pub fn logout(&self) {
        if let Err(e) = self.store.delete() {
            warn!(error = %e, "Failed to delete stored token during logout");
        }
        *self.state.write() = SessionState::default();
        debug!("Logged out, session cleared");
    }
}
