//! Client-side session and authentication plumbing for the chatterbox
//! chat backend.
//!
//! The crate is built around two components:
//!
//! - [`SessionStore`] tracks whether a user is logged in, caches the
//!   bearer token and the header blocks derived from it, and runs the
//!   login, register, and current-user flows against the backend.
//! - [`RequestAuthenticator`] sits in front of request dispatch and adds
//!   `Authorization: Bearer <token>` to outgoing requests while a session
//!   is active, re-reading the durable token store on every request.
//!
//! The durable copy of the token lives behind the [`TokenStore`] trait,
//! with keychain, file, and in-memory backends. There is no global state;
//! the composition root builds the pieces and hands them to whoever needs
//! them:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chatterbox_auth::{
//!     ClientConfig, Credentials, KeychainTokenStore, RequestAuthenticator, SessionStore,
//!     TokenStore,
//! };
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ClientConfig::load()?;
//! let store = Arc::new(KeychainTokenStore::new());
//! let session = SessionStore::new(&config, store.clone())?;
//!
//! // Log in, then adopt the session: persist the token and flip the flag.
//! let response = session
//!     .login(&Credentials {
//!         email: "ada@example.com".to_string(),
//!         password: "hunter2".to_string(),
//!     })
//!     .await?;
//! store.set(&response.token)?;
//! session.set_logged_in(true);
//!
//! // From here on, route outgoing requests through the authenticator,
//! // reusing the session's connection pool.
//! let authenticator = RequestAuthenticator::new(session.clone(), store);
//! let request = session
//!     .api()
//!     .http_client()
//!     .get(format!("{}/api/messages", session.api().api_url()))
//!     .build()?;
//! authenticator
//!     .send(session.api().http_client(), request)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod session;
pub mod store;

#[cfg(test)]
mod testsupport;

pub use api::{AuthClient, AuthError, RequestAuthenticator};
pub use config::ClientConfig;
pub use models::{
    Credentials, LoginResponse, MeResponse, RegisterResponse, Registration, UserProfile,
};
pub use session::{HeaderOptions, SessionStore};
pub use store::{FileTokenStore, KeychainTokenStore, MemoryTokenStore, TokenSource, TokenStore};
