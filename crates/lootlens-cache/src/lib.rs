//! # lootlens-cache
//!
//! Bounded, TTL-based detection-result cache: oldest-entry eviction at
//! capacity, lazy expiry on read, explicit sweep.

mod store;

pub use store::{CacheStats, DetectionCache};
