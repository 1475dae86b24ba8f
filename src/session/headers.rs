//! Typed request header blocks.
//!
//! The API calls need two header shapes: JSON requests carry a
//! `Content-Type`, while multipart uploads must leave it unset so the
//! body encoder can supply its own boundary. `HeaderOptions` models both
//! explicitly instead of passing loose header dictionaries around.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::warn;

/// MIME type for JSON request bodies
const APPLICATION_JSON: &str = "application/json";

/// Scheme prefix of the Authorization header value
const BEARER_PREFIX: &str = "Bearer ";

/// A small typed bundle of request headers.
///
/// The default value is the empty block, carrying no headers at all.
/// Requests built from an empty block go out unauthenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    content_type: Option<String>,
    authorization: Option<String>,
}

impl HeaderOptions {
    /// Headers for an unauthenticated JSON request.
    pub fn json() -> Self {
        Self {
            content_type: Some(APPLICATION_JSON.to_string()),
            authorization: None,
        }
    }

    /// Headers for an authenticated JSON request.
    ///
    /// An empty token produces no Authorization header at all, never a
    /// bare `Bearer ` prefix.
    pub fn bearer(token: &str) -> Self {
        Self {
            content_type: Some(APPLICATION_JSON.to_string()),
            authorization: bearer_value(token),
        }
    }

    /// Headers for an authenticated request without a content type, for
    /// multipart bodies where the encoder sets its own.
    pub fn bearer_without_content_type(token: &str) -> Self {
        Self {
            content_type: None,
            authorization: bearer_value(token),
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// True when the block carries no headers.
    pub fn is_empty(&self) -> bool {
        self.content_type.is_none() && self.authorization.is_none()
    }

    /// Render into a reqwest header map. A value that cannot be encoded as
    /// an HTTP header is skipped with a warning rather than failing the
    /// request.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ref content_type) = self.content_type {
            match HeaderValue::from_str(content_type) {
                Ok(value) => {
                    headers.insert(CONTENT_TYPE, value);
                }
                Err(e) => warn!(error = %e, "Skipping unencodable content-type header"),
            }
        }
        if let Some(ref authorization) = self.authorization {
            match HeaderValue::from_str(authorization) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!(error = %e, "Skipping unencodable authorization header"),
            }
        }
        headers
    }
}

/// Authorization value for a bearer token, or `None` for an empty token.
fn bearer_value(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(format!("{}{}", BEARER_PREFIX, token))
    }
}
