use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One template's confidence claim that a scanned region matches an identity.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vote {
    pub template_id: String,
    pub identity_id: String,
    /// Caller-supplied confidence, stored as given (not assumed in [0, 1]).
    pub confidence: f64,
    /// Item class/rarity tag, when the upstream matcher knows it.
    pub rarity: Option<String>,
    /// Auxiliary per-method metric scores from the matcher.
    pub metrics: Option<HashMap<String, f64>>,
}

impl Vote {
    pub fn new(
        template_id: impl Into<String>,
        identity_id: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            identity_id: identity_id.into(),
            confidence,
            rarity: None,
            metrics: None,
        }
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }
}

/// Derived per-identity aggregate over one vote group.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoteAggregate {
    pub vote_count: usize,
    pub total_weight: f64,
    pub avg_confidence: f64,
    pub max_confidence: f64,
}

/// The reconciled outcome for one scanned cell.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VotingResult {
    /// Winning identity.
    pub identity_id: String,
    /// Combined confidence, clamped to [0, 0.99].
    pub confidence: f64,
    /// Votes agreeing with the winner.
    pub vote_count: usize,
    pub total_votes: usize,
    /// `vote_count / total_votes`.
    pub consensus: f64,
    /// Full per-identity breakdown.
    pub breakdown: HashMap<String, VoteAggregate>,
    pub passes_threshold: bool,
}
