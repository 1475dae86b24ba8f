//! HTTP client and request authentication for the chatterbox API.

pub mod client;
pub mod error;
pub mod interceptor;

pub use client::AuthClient;
pub use error::AuthError;
pub use interceptor::RequestAuthenticator;
