//! Outbound request authentication.
//!
//! `RequestAuthenticator` sits between request construction and dispatch,
//! adding the `Authorization` header to requests that should carry the
//! session's bearer token.

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Request, Response};
use tracing::{debug, warn};

use crate::session::SessionStore;
use crate::store::TokenSource;

use super::AuthError;

/// Adds `Authorization: Bearer <token>` to outgoing requests when the
/// session is logged in and the durable store holds a token.
///
/// The store is consulted on every call rather than once at login, so a
/// token refreshed elsewhere is picked up immediately even while the
/// session's cached headers are stale.
#[derive(Clone)]
pub struct RequestAuthenticator {
    session: SessionStore,
    tokens: Arc<dyn TokenSource>,
}

impl RequestAuthenticator {
    pub fn new(session: SessionStore, tokens: Arc<dyn TokenSource>) -> Self {
        Self { session, tokens }
    }

    /// Attach the bearer token to a request when the session warrants it.
    ///
    /// Requests pass through untouched when the session is logged out or no
    /// token is stored; the backend is responsible for rejecting
    /// unauthenticated calls. Never fails.
    pub fn authenticate(&self, mut request: Request) -> Request {
        if !self.session.is_logged_in() {
            return request;
        }

        let token = match self.tokens.get() {
            Some(token) if !token.is_empty() => token,
            _ => return request,
        };

        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                request.headers_mut().insert(AUTHORIZATION, value);
                debug!(url = %request.url(), "Attached bearer token");
            }
            Err(e) => {
                warn!(error = %e, "Stored token is not a valid header value, sending request unauthenticated");
            }
        }
        request
    }

    /// Authenticate a request and dispatch it through the given client.
    pub async fn send(&self, client: &Client, request: Request) -> Result<Response, AuthError> {
        let request = self.authenticate(request);
        let response = client.execute(request).await?;
        Ok(response)
    }
}
