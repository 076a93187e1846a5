//! Bearer token state.
//!
//! A [`Session`] holds the current access token in memory and mirrors it
//! into a [`TokenStore`] so it survives a restart. Storage failures are
//! logged and swallowed; the in-memory state always updates.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use crate::error::GatewayError;

/// Store key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Store key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

// --- Durable storage ---

/// Key/value storage for session tokens.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, GatewayError>;
    fn set(&self, key: &str, value: &str) -> Result<(), GatewayError>;
    fn remove(&self, key: &str) -> Result<(), GatewayError>;
}

impl<S: TokenStore + ?Sized> TokenStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), GatewayError> {
        (**self).remove(key)
    }
}

/// Process-local store, for tests and one-shot use.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), GatewayError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// A JSON object on disk mapping keys to tokens.
///
/// The file is created on first write, together with any missing parent
/// directories, and is readable by the owner only on Unix. A missing file
/// reads as empty.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, GatewayError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read(&self.path)?;
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_slice(&raw)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), GatewayError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_vec_pretty(map)?)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn update<F>(&self, f: F) -> Result<(), GatewayError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut map = self.read_map()?;
        f(&mut map);
        self.write_map(&map)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), GatewayError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|map| {
            map.remove(key);
        })
    }
}

// --- Session ---

/// The current bearer token, shared by every clone of a gateway.
pub struct Session {
    token: RwLock<Option<String>>,
    store: Box<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.cached().is_some())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            token: RwLock::new(None),
            store: Box::new(store),
        }
    }

    /// A session with no durable storage behind it.
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    /// A session persisted to a JSON file.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileTokenStore::new(path))
    }

    /// Sets or clears the access token, in memory and in the store.
    pub fn set_token(&self, token: Option<String>) {
        let persisted = match &token {
            Some(value) => self.store.set(ACCESS_TOKEN_KEY, value),
            None => self.store.remove(ACCESS_TOKEN_KEY),
        };
        if let Err(e) = persisted {
            warn!("Failed to persist access token: {}", e);
        }
        *self.token.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    /// The access token, loaded from the store on first use.
    pub fn get_token(&self) -> Option<String> {
        if let Some(token) = self.cached() {
            return Some(token);
        }

        let loaded = match self.store.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read access token: {}", e);
                None
            }
        };

        if let Some(token) = &loaded {
            debug!("Restored access token from storage");
            let mut slot = self.token.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            // A concurrent set_token wins over the stored value.
            if slot.is_none() {
                *slot = Some(token.clone());
            } else {
                return slot.clone();
            }
        }
        loaded
    }

    /// Stores a fresh token pair after login, OTP verification or refresh.
    pub fn set_tokens(&self, access: &str, refresh: Option<&str>) {
        self.set_token(Some(access.to_string()));
        if let Some(refresh) = refresh {
            if let Err(e) = self.store.set(REFRESH_TOKEN_KEY, refresh) {
                warn!("Failed to persist refresh token: {}", e);
            }
        }
    }

    pub fn refresh_token(&self) -> Option<String> {
        match self.store.get(REFRESH_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read refresh token: {}", e);
                None
            }
        }
    }

    /// Forgets both tokens.
    pub fn clear(&self) {
        self.set_token(None);
        if let Err(e) = self.store.remove(REFRESH_TOKEN_KEY) {
            warn!("Failed to remove refresh token: {}", e);
        }
    }

    fn cached(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
