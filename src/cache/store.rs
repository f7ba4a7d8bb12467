//! TTL key/value store backing the cache layer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

use crate::config::CacheSettings;

/// One cached payload with its absolute expiry time.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: String,
    expires_at: Instant,
}

/// Best-effort TTL cache for serialized status reports.
///
/// Every method is safe to call unconditionally: when the cache is
/// unavailable, `get` returns absent and mutations are silent no-ops
/// logged at debug level. Unavailability never propagates to callers,
/// so no call site needs to branch on cache health.
///
/// Entries expire lazily: an expired entry is dropped on the `get` that
/// observes it and counts as a miss.
///
/// # Example
///
/// ```
/// use compensation_engine::cache::StatusCache;
/// use compensation_engine::config::CacheSettings;
///
/// let cache = StatusCache::connect(&CacheSettings::default());
/// cache.set("employee:NAT1001", "{}".to_string(), None);
/// assert_eq!(cache.get("employee:NAT1001"), Some("{}".to_string()));
/// ```
#[derive(Debug)]
pub struct StatusCache {
    entries: DashMap<String, CacheEntry>,
    default_ttl: Duration,
    available: AtomicBool,
}

impl StatusCache {
    /// Connects the cache layer using the given settings.
    ///
    /// Never fatal: when the settings disable the cache the instance starts
    /// in the permanently-degraded state instead of failing startup.
    pub fn connect(settings: &CacheSettings) -> Self {
        if !settings.enabled {
            debug!("cache disabled by configuration, entering degraded mode");
        }
        Self {
            entries: DashMap::new(),
            default_ttl: Duration::from_secs(settings.default_ttl_seconds),
            available: AtomicBool::new(settings.enabled),
        }
    }

    /// Creates a cache that is permanently degraded.
    ///
    /// Useful for exercising the no-op path without configuration.
    pub fn disconnected() -> Self {
        Self::connect(&CacheSettings {
            enabled: false,
            ..CacheSettings::default()
        })
    }

    /// Returns true while the cache is performing real reads and writes.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    /// Looks up a key, returning the payload if present and unexpired.
    pub fn get(&self, key: &str) -> Option<String> {
        if !self.is_available() {
            debug!(key, "cache degraded, get skipped");
            return None;
        }

        let expired = match self.entries.get(key) {
            Some(entry) => {
                if entry.expires_at > Instant::now() {
                    return Some(entry.payload.clone());
                }
                true
            }
            None => false,
        };

        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Stores a payload under a key.
    ///
    /// `ttl` overrides the configured default when given. Callers store only
    /// fully-serialized final responses, never intermediate state.
    pub fn set(&self, key: &str, payload: String, ttl: Option<Duration>) {
        if !self.is_available() {
            debug!(key, "cache degraded, set skipped");
            return;
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Removes a single key, returning true if it was present.
    pub fn delete(&self, key: &str) -> bool {
        if !self.is_available() {
            debug!(key, "cache degraded, delete skipped");
            return false;
        }
        self.entries.remove(key).is_some()
    }

    /// Removes every key starting with the given prefix, returning the
    /// number of entries removed.
    pub fn delete_by_prefix(&self, prefix: &str) -> usize {
        if !self.is_available() {
            debug!(prefix, "cache degraded, prefix delete skipped");
            return 0;
        }

        let mut removed = 0;
        self.entries.retain(|key, _| {
            if key.starts_with(prefix) {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }
}
