//! File-backed token store.
//!
//! Persists the bearer token as JSON under the user's data directory.
//! Used on platforms without a usable keychain, and in tests via
//! [`FileTokenStore::with_path`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{TokenSource, TokenStore};
use crate::config::APP_NAME;

/// Token file name in the data directory
const TOKEN_FILE: &str = "token.json";

/// On-disk representation of the stored token. The timestamp records when
/// the token was persisted, for display and debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    stored_at: DateTime<Utc>,
}

/// Stores the bearer token in a JSON file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the default location
    /// (`<data_dir>/chatterbox/token.json`).
    pub fn new() -> Result<Self> {
        let path = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(APP_NAME)
            .join(TOKEN_FILE);
        Ok(Self { path })
    }

    /// Create a store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Option<StoredToken> {
        if !self.path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Failed to read token file");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(stored) => Some(stored),
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Failed to parse token file");
                None
            }
        }
    }
}

impl TokenSource for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.read().map(|stored| stored.token)
    }
}

impl TokenStore for FileTokenStore {
    fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create token directory")?;
        }
        let stored = StoredToken {
            token: token.to_string(),
            stored_at: Utc::now(),
        };
        let contents = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, contents).context("Failed to write token file")?;

        // Tokens are secrets; keep the file readable by the owner only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&self.path, perms) {
                warn!(error = %e, "Failed to restrict token file permissions");
            }
        }

        debug!(path = %self.path.display(), "Persisted token");
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).context("Failed to delete token file")?;
            debug!(path = %self.path.display(), "Deleted stored token");
        }
        Ok(())
    }
}
