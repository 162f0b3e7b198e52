//! Persistence port.
//!
//! Everything the app remembers lives under two string keys. The browser
//! build backs `KeyValueStore` with `window.localStorage`; tests use
//! `MemoryStore`. `Records` layers the JSON records on top of either.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::error::{Result, SanamanaError};
use crate::model::Profile;
use crate::session::Session;

/// A synchronous string-keyed store.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| SanamanaError::Storage(format!("Memory store poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Typed access to the session marker and the profile record.
#[derive(Debug, Clone)]
pub struct Records<S> {
    store: S,
    keys: StorageConfig,
}

impl<S: KeyValueStore> Records<S> {
    pub fn new(store: S, keys: StorageConfig) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_session(&self) -> Result<Option<Session>> {
        self.load_json(&self.keys.session_key)
    }

    pub fn save_session(&self, session: &Session) -> Result<()> {
        self.save_json(&self.keys.session_key, session)?;
        info!("Saved session for {}", session.email);
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        self.store.remove(&self.keys.session_key)?;
        info!("Cleared session");
        Ok(())
    }

    /// Presence of the session key, without parsing it.
    pub fn has_session(&self) -> Result<bool> {
        Ok(self.store.load(&self.keys.session_key)?.is_some())
    }

    pub fn load_profile(&self) -> Result<Option<Profile>> {
        self.load_json(&self.keys.profile_key)
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        self.save_json(&self.keys.profile_key, profile)?;
        info!(
            "Saved profile for {} ({} log entries)",
            profile.name,
            profile.logs().len()
        );
        Ok(())
    }

    /// The stored profile, with a malformed record counted as absent.
    /// Storage failures still propagate.
    pub fn readable_profile(&self) -> Result<Option<Profile>> {
        match self.load_profile() {
            Err(SanamanaError::Serialization(_)) => Ok(None),
            other => other,
        }
    }

    /// Whether a profile that parses is stored.
    pub fn has_profile(&self) -> Result<bool> {
        Ok(self.readable_profile()?.is_some())
    }

    /// Load, mutate and write back the profile in one step.
    /// Returns `Ok(None)` without writing when no profile is stored.
    pub fn update_profile<T>(&self, f: impl FnOnce(&mut Profile) -> T) -> Result<Option<(Profile, T)>> {
        let Some(mut profile) = self.load_profile()? else {
            warn!("Profile update requested but no profile is stored");
            return Ok(None);
        };
        let out = f(&mut profile);
        self.save_profile(&profile)?;
        Ok(Some((profile, out)))
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.load(key)? else {
            debug!("No record under {}", key);
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            warn!("Malformed record under {}: {}", key, e);
            SanamanaError::from(e)
        })
    }

    fn save_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.save(key, &raw)
    }
}
