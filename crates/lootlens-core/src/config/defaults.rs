//! Default values for every configuration knob.

// Template selection
pub const DEFAULT_MAX_TEMPLATES: usize = 5;
pub const DEFAULT_RESOLUTION_BONUS: f64 = 0.15;
pub const DEFAULT_ASPECT_TOLERANCE: f64 = 0.05;

// Detection cache
pub const DEFAULT_MAX_CACHE_SIZE: usize = 200;
pub const DEFAULT_CACHE_TTL_MS: i64 = 60_000;

// Performance ranking
pub const DEFAULT_MIN_CONFIDENCE_FOR_SUCCESS: f64 = 0.5;
pub const DEFAULT_SUCCESS_RATE_WEIGHT: f64 = 0.7;
pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 0.3;
pub const DEFAULT_MIN_USAGE_COUNT: u64 = 10;
pub const DEFAULT_SKIP_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CONFUSION_RATIO: f64 = 0.5;
pub const DEFAULT_DECAY_RATE: f64 = 0.95;
pub const DEFAULT_DECAY_PERIOD_DAYS: f64 = 1.0;
pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 0.5;

// Vote combining
pub const DEFAULT_MIN_VOTES: usize = 1;
pub const DEFAULT_MIN_CONSENSUS: f64 = 0.5;
pub const DEFAULT_PERFORMANCE_WEIGHT: f64 = 0.3;
