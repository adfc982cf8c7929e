use serde::{Deserialize, Serialize};

use super::defaults;

/// How a group of votes for one identity is reduced to a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineMethod {
    /// `Σ(confidence·weight) / Σweight`.
    WeightedAverage,
    /// Highest confidence in the group.
    Max,
    /// Middle confidence; mean of the two middle values for even counts.
    Median,
    /// Confidence-descending positions weighted `1/j`.
    RankedChoice,
}

/// Vote combining configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VotingConfig {
    pub method: CombineMethod,
    /// Minimum total votes for a result; fewer yields no decision.
    pub min_votes: usize,
    /// Consensus bar; results below it have confidence scaled down.
    pub min_consensus: f64,
    /// Whether template ranking shapes per-vote weights.
    pub use_performance_weighting: bool,
    /// Strength of the ranking influence on vote weights.
    pub performance_weight: f64,
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            method: CombineMethod::WeightedAverage,
            min_votes: defaults::DEFAULT_MIN_VOTES,
            min_consensus: defaults::DEFAULT_MIN_CONSENSUS,
            use_performance_weighting: true,
            performance_weight: defaults::DEFAULT_PERFORMANCE_WEIGHT,
        }
    }
}
