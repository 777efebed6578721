//! Time-bounded in-memory cache.
//!
//! Entries carry an absolute expiry instant; a read at or past that instant
//! behaves exactly as if the key were never set. Expired entries are dropped
//! eagerly when a lookup finds them, or in bulk by `purge_expired`.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Time source for expiry checks.
/// Injected so tests can advance time deterministically instead of sleeping.
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// Process-local key-value cache with per-entry TTL.
///
/// Keys are caller-chosen strings; callers sharing an instance coordinate
/// through key naming (see [`crate::cache::keys`]). Values are returned by
/// clone - mutating a returned value never writes back into the cache.
///
/// The cache performs no I/O and cannot fail: a miss is a normal outcome,
/// and nonsensical inputs (negative TTL) are clamped rather than rejected.
pub struct TimedCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    clock: Clock,
}

impl<V> TimedCache<V> {
    pub fn new() -> Self {
        Self::with_clock(Box::new(Utc::now))
    }

    /// Create a cache with an explicit time source.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    /// Look up a key. Returns `None` for unknown and expired keys alike.
    /// An expired entry found here is removed on the way out.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let now = (self.clock)();
        if let Some(entry) = self.entries.get(key) {
            if now < entry.expires_at {
                debug!(key, "cache hit");
                return Some(entry.value.clone());
            }
            debug!(key, "cache entry expired");
            self.entries.remove(key);
            return None;
        }
        debug!(key, "cache miss");
        None
    }

    /// Store a value under `key`, replacing any prior entry and its expiry.
    ///
    /// A TTL of 0 produces an already-expired entry (the next `get` misses).
    /// Negative TTLs are caller error and are clamped to 0; TTLs beyond the
    /// representable range saturate to the far future. `set` never panics.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_minutes: i64) {
        let now = (self.clock)();
        let ttl = Duration::try_minutes(ttl_minutes.max(0)).unwrap_or(Duration::MAX);
        let expires_at = now
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entries.insert(key.into(), CacheEntry { value, expires_at });
    }

    /// Remove an entry immediately, regardless of its expiry.
    /// Invalidating a missing key is a no-op.
    pub fn invalidate(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            debug!(key, "cache invalidated");
        }
    }

    /// Remove all entries. Used for full resets (e.g. sign-out).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop every expired entry. Purely internal bookkeeping - read
    /// semantics are identical whether or not this ever runs.
    pub fn purge_expired(&mut self) {
        let now = (self.clock)();
        self.entries.retain(|_, entry| now < entry.expires_at);
    }

    /// Number of unexpired entries.
    pub fn len(&self) -> usize {
        let now = (self.clock)();
        self.entries
            .values()
            .filter(|entry| now < entry.expires_at)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Default for TimedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
