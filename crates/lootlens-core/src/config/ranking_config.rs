use serde::{Deserialize, Serialize};

use super::defaults;

/// Performance ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// A reported success below this confidence is demoted to a failure.
    pub min_confidence_for_success: f64,
    /// Rank-score weight on historical success rate.
    pub success_rate_weight: f64,
    /// Rank-score weight on running-average confidence.
    pub confidence_weight: f64,
    /// Observations required before automatic skip criteria may trigger.
    pub min_usage_count: u64,
    /// Success rate below which a seasoned template is skip-listed.
    pub skip_threshold: f64,
    /// Confusion share above which a seasoned template is skip-listed.
    pub confusion_ratio: f64,
    /// Per-period rank-score decay rate.
    pub decay_rate: f64,
    /// Length of one decay period in days.
    pub decay_period_days: f64,
    /// Recommended threshold for identities with no usage data.
    pub fallback_threshold: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_confidence_for_success: defaults::DEFAULT_MIN_CONFIDENCE_FOR_SUCCESS,
            success_rate_weight: defaults::DEFAULT_SUCCESS_RATE_WEIGHT,
            confidence_weight: defaults::DEFAULT_CONFIDENCE_WEIGHT,
            min_usage_count: defaults::DEFAULT_MIN_USAGE_COUNT,
            skip_threshold: defaults::DEFAULT_SKIP_THRESHOLD,
            confusion_ratio: defaults::DEFAULT_CONFUSION_RATIO,
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            decay_period_days: defaults::DEFAULT_DECAY_PERIOD_DAYS,
            fallback_threshold: defaults::DEFAULT_FALLBACK_THRESHOLD,
        }
    }
}
