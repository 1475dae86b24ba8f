//! Durable token storage.
//!
//! A [`TokenStore`] holds the bearer token across process restarts so a
//! session can be resumed without logging in again. Three backends ship:
//! the OS keychain ([`KeychainTokenStore`]), a JSON file under the user
//! data directory ([`FileTokenStore`]), and an in-memory store for tests
//! ([`MemoryTokenStore`]).
//!
//! Readers that only need the token, like the request authenticator, take
//! the narrower [`TokenSource`] so they cannot write or delete.

pub mod file;
pub mod keychain;
pub mod memory;

pub use file::FileTokenStore;
pub use keychain::KeychainTokenStore;
pub use memory::MemoryTokenStore;

/// Read-only access to the persisted bearer token.
pub trait TokenSource: Send + Sync {
    /// Returns the stored token, or `None` if nothing is stored or the
    /// backend cannot be read. Backends log read failures rather than
    /// surfacing them; a missing token just means an unauthenticated
    /// request.
    fn get(&self) -> Option<String>;
}

/// Full read/write access to the persisted bearer token.
pub trait TokenStore: TokenSource {
    /// Persists the token, replacing any previous value.
    fn set(&self, token: &str) -> anyhow::Result<()>;

    /// Removes the stored token. Removing an absent token is not an error.
    fn delete(&self) -> anyhow::Result<()>;

    /// Returns true when a non-empty token is stored.
    fn exists(&self) -> bool {
        match self.get() {
            Some(token) => !token.is_empty(),
            None => false,
        }
    }
}
