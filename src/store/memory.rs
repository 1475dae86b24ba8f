//! In-memory token store for tests and ephemeral sessions.

use anyhow::Result;
use parking_lot::RwLock;

use super::{TokenSource, TokenStore};

/// Holds the bearer token in process memory. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenSource for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
        assert!(!store.exists());
    }

    #[test]
    fn test_set_get_delete() {
        let store = MemoryTokenStore::new();
        store.set("tok").unwrap();
        assert_eq!(store.get(), Some("tok".to_string()));
        assert!(store.exists());
        store.delete().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_with_token_seeds_value() {
        let store = MemoryTokenStore::with_token("seeded");
        assert_eq!(store.get(), Some("seeded".to_string()));
    }
}
