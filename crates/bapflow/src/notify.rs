//! Notification preferences — a write-through cache over best-effort storage.
//!
//! The dashboard header reads preferences on every render, but the backing
//! store (browser storage, a settings service) may be unavailable. Reads
//! answer from the cache; writes update the cache first and then persist
//! best-effort. A failed write flips an explicit `degraded` flag instead of
//! dual-writing silently, and the cache keeps serving until the store
//! recovers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::PrefStoreError;

/// Per-user notification switches surfaced in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    /// Notify when a document is submitted for checking.
    pub on_submitted: bool,
    /// Notify when a document passes the warehouse check.
    pub on_reviewed: bool,
    /// Notify on the final approve/reject decision.
    pub on_decided: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            on_submitted: true,
            on_reviewed: true,
            on_decided: true,
        }
    }
}

/// External preference storage. Implementations may fail freely; the cache
/// keeps serving the last known value. Payloads are opaque JSON strings.
pub trait PrefStore {
    fn load(&self, user_id: &str) -> Result<Option<String>, PrefStoreError>;
    fn save(&self, user_id: &str, payload: &str) -> Result<(), PrefStoreError>;
}

/// Write-through preference cache over a [`PrefStore`].
pub struct PrefCache<S> {
    store: S,
    cache: RwLock<HashMap<String, NotificationPrefs>>,
    degraded: AtomicBool,
}

impl<S: PrefStore> PrefCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: RwLock::new(HashMap::new()),
            degraded: AtomicBool::new(false),
        }
    }

    /// True when the last store write failed and values live only in memory.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }

    /// Returns the user's preferences, falling back to the store and then
    /// to defaults. Malformed stored payloads are discarded with a warning.
    pub fn get(&self, user_id: &str) -> NotificationPrefs {
        {
            let cache = match self.cache.read() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    log::warn!("Preference cache lock was poisoned, recovering");
                    poisoned.into_inner()
                }
            };
            if let Some(prefs) = cache.get(user_id) {
                return *prefs;
            }
        }

        let prefs = match self.store.load(user_id) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(prefs) => prefs,
                Err(e) => {
                    log::warn!(
                        "Discarding malformed preference payload for '{}': {}",
                        user_id,
                        e
                    );
                    NotificationPrefs::default()
                }
            },
            Ok(None) => NotificationPrefs::default(),
            Err(e) => {
                log::warn!("Preference store read failed, serving defaults: {}", e);
                self.degraded.store(true, Ordering::Relaxed);
                return NotificationPrefs::default();
            }
        };

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(user_id.to_string(), prefs);
        }
        prefs
    }

    /// Updates the cache, then best-effort persists to the store.
    pub fn set(&self, user_id: &str, prefs: NotificationPrefs) {
        {
            let mut cache = match self.cache.write() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    log::warn!("Preference cache lock was poisoned, recovering");
                    poisoned.into_inner()
                }
            };
            cache.insert(user_id.to_string(), prefs);
        }

        let payload = match serde_json::to_string(&prefs) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to encode preferences for '{}': {}", user_id, e);
                self.degraded.store(true, Ordering::Relaxed);
                return;
            }
        };

        match self.store.save(user_id, &payload) {
            Ok(()) => self.degraded.store(false, Ordering::Relaxed),
            Err(e) => {
                log::warn!(
                    "Preference store write failed, serving from cache: {}",
                    e
                );
                self.degraded.store(true, Ordering::Relaxed);
            }
        }
    }
}
