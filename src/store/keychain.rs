//! OS keychain token store.
//!
//! Persists the bearer token through the platform credential manager
//! (macOS Keychain, Windows Credential Manager, Secret Service on Linux).
//! This is the default backend on desktop platforms.

use anyhow::{Context, Result};
use keyring::Entry;
use tracing::warn;

use super::{TokenSource, TokenStore};
use crate::config::APP_NAME;

/// Keyring entry name the token is stored under
const TOKEN_KEY: &str = "token";

/// Stores the bearer token in the OS keychain.
pub struct KeychainTokenStore {
    service: String,
}

impl KeychainTokenStore {
    /// Create a store under the default service name.
    pub fn new() -> Self {
        Self {
            service: APP_NAME.to_string(),
        }
    }

    /// Create a store under an explicit service name, so multiple
    /// deployments on one machine do not share a token.
    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service, TOKEN_KEY).context("Failed to create keyring entry")
    }
}

impl Default for KeychainTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for KeychainTokenStore {
    fn get(&self) -> Option<String> {
        let entry = match self.entry() {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Failed to open keychain entry");
                return None;
            }
        };
        match entry.get_password() {
            Ok(token) => Some(token),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read token from keychain");
                None
            }
        }
    }
}

impl TokenStore for KeychainTokenStore {
    fn set(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .context("Failed to store token in keychain")?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(()),
            // Deleting an absent token is a no-op.
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete token from keychain"),
        }
    }
}
