use serde::{Deserialize, Serialize};

use super::defaults;

/// Detection cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries held at once.
    pub capacity: usize,
    /// Entry time-to-live in milliseconds.
    pub ttl_ms: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_MAX_CACHE_SIZE,
            ttl_ms: defaults::DEFAULT_CACHE_TTL_MS,
        }
    }
}
