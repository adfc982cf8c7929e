/// Lootlens system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Snapshot format version written by performance export.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Upper bound on any engine-derived combined confidence.
pub const MAX_COMBINED_CONFIDENCE: f64 = 0.99;

/// Rank score a template with no signal either way would have.
/// Performance weighting pivots around this value.
pub const NEUTRAL_RANK_SCORE: f64 = 50.0;

/// Weight multiplier applied to votes from skip-listed templates.
pub const SKIP_WEIGHT_FACTOR: f64 = 0.5;

/// Floor for a vote's effective weight after performance scaling.
pub const MIN_EFFECTIVE_WEIGHT: f64 = 0.1;
