//! # Credential Stores
//!
//! [`SessionStore`] implementations.
//!
//! - [`MemorySessionStore`]: process-local, used by tests and embedders that
//!   manage persistence themselves.
//! - [`FileSessionStore`]: a small JSON cookie jar on disk. The credential
//!   sits under the [`CREDENTIAL_KEY`] cookie, so an external sign-in flow
//!   can drop a token there and the next request picks it up.
//!
//! ## File Format
//!
//! ```text
//! {
//!   "token": { "value": "eyJhbGciOi...", "storedAt": "2026-10-16T09:12:44Z" }
//! }
//! ```
//!
//! `storedAt` is informational only; expiry is discovered through a 401.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::core::error::SessionStoreError;
use crate::core::service::{SessionStore, CREDENTIAL_KEY};

/// In-memory credential store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.token.read().clone())
    }

    fn set(&self, token: &str) -> Result<(), SessionStoreError> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.token.write() = None;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCookie {
    value: String,
    stored_at: DateTime<Utc>,
}

type CookieJar = BTreeMap<String, StoredCookie>;

/// Cookie jar persisted as JSON.
///
/// The file is re-read on every `get` so tokens written by another process
/// are visible immediately. Writes within the process are serialized, and
/// each one lands through a rename so readers never see a partial jar.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the credential was written, if one is stored.
    pub fn stored_at(&self) -> Result<Option<DateTime<Utc>>, SessionStoreError> {
        Ok(self.load()?.remove(CREDENTIAL_KEY).map(|c| c.stored_at))
    }

    fn load(&self) -> Result<CookieJar, SessionStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CookieJar::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(CookieJar::new());
        }

        serde_json::from_str(&raw).map_err(|e| SessionStoreError::Corrupt(e.to_string()))
    }

    fn save(&self, jar: &CookieJar) -> Result<(), SessionStoreError> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let raw = serde_json::to_vec_pretty(jar)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;

        // Sibling temp file so the rename stays on one filesystem
        let mut staged = tempfile::NamedTempFile::new_in(parent)?;
        staged.write_all(&raw)?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.load()?.remove(CREDENTIAL_KEY).map(|c| c.value))
    }

    fn set(&self, token: &str) -> Result<(), SessionStoreError> {
        let _guard = self.write_lock.lock();

        // A corrupt jar is replaced rather than blocking sign-in forever
        let mut jar = self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = %self.path.display(), "Discarding unreadable session file");
            CookieJar::new()
        });
        jar.insert(
            CREDENTIAL_KEY.to_string(),
            StoredCookie {
                value: token.to_string(),
                stored_at: Utc::now(),
            },
        );
        self.save(&jar)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let _guard = self.write_lock.lock();

        let mut jar = match self.load() {
            Ok(jar) => jar,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Discarding unreadable session file");
                CookieJar::new()
            }
        };
        jar.remove(CREDENTIAL_KEY);

        if !jar.is_empty() {
            return self.save(&jar);
        }
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
