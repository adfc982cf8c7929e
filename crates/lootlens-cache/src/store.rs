use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use lootlens_core::config::CacheConfig;
use lootlens_core::traits::IClock;

/// A cached payload with its bookkeeping.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    payload: V,
    inserted_at: DateTime<Utc>,
    access_count: u64,
}

/// Hit/miss/expiry/eviction counters. Reset by `clear`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub evictions: u64,
}

/// Bounded TTL cache for detection results.
///
/// An entry older than the TTL is treated as absent on read even before it
/// is physically removed; `sweep` removes all such entries in bulk. Hit/miss
/// is carried by `Option`: the payload is opaque and never inspected, so a
/// cached sentinel value is an ordinary hit.
pub struct DetectionCache<V: Clone> {
    entries: HashMap<String, CacheEntry<V>>,
    config: CacheConfig,
    clock: Arc<dyn IClock>,
    stats: CacheStats,
}

impl<V: Clone> DetectionCache<V> {
    pub fn new(config: CacheConfig, clock: Arc<dyn IClock>) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            clock,
            stats: CacheStats::default(),
        }
    }

    /// Look up a key. An expired entry is deleted and reported absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let ttl = Duration::milliseconds(self.config.ttl_ms);

        let expired = match self.entries.get(key) {
            None => {
                self.stats.misses += 1;
                return None;
            }
            Some(entry) => now - entry.inserted_at > ttl,
        };
        if expired {
            self.entries.remove(key);
            self.stats.expirations += 1;
            self.stats.misses += 1;
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.access_count += 1;
        self.stats.hits += 1;
        Some(entry.payload.clone())
    }

    /// Insert a payload. A new key at capacity evicts the single oldest
    /// entry first; re-inserting an existing key resets its TTL clock.
    pub fn put(&mut self, key: impl Into<String>, payload: V) {
        let key = key.into();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.capacity {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            CacheEntry {
                payload,
                inserted_at: self.clock.now(),
                access_count: 0,
            },
        );
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            debug!(key = %key, "evicting oldest cache entry");
            self.entries.remove(&key);
            self.stats.evictions += 1;
        }
    }

    /// Remove every currently-expired entry. Returns the number removed.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = Duration::milliseconds(self.config.ttl_ms);
        let before = self.entries.len();
        self.entries.retain(|_, entry| now - entry.inserted_at <= ttl);
        let removed = before - self.entries.len();
        self.stats.expirations += removed as u64;
        if removed > 0 {
            debug!(removed, "swept expired cache entries");
        }
        removed
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    /// Number of physically present entries (expired ones included until
    /// a read or sweep removes them).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
