//! Ensemble combining: merge strategy-tagged vote sets into one pool, and
//! track per-strategy outcomes for A/B comparison.

use std::collections::HashMap;

use tracing::debug;

use lootlens_core::config::VotingConfig;
use lootlens_core::errors::{LootlensResult, VotingError};
use lootlens_core::models::{Vote, VotingResult};
use lootlens_ranking::PerformanceRanker;

use crate::combiner::{combine_votes, ThresholdFn};

/// One strategy's vote set and its trust weight.
#[derive(Debug, Clone)]
pub struct StrategyVotes {
    pub strategy: String,
    pub weight: f64,
    pub votes: Vec<Vote>,
}

/// Scale every vote's confidence by its strategy's weight, flatten, and run
/// the standard combiner over the pooled votes.
pub fn ensemble_vote(
    strategies: &[StrategyVotes],
    ranker: &PerformanceRanker,
    config: &VotingConfig,
    passes_threshold: &ThresholdFn,
) -> Option<VotingResult> {
    let pooled: Vec<Vote> = strategies
        .iter()
        .flat_map(|set| {
            set.votes.iter().map(|vote| {
                let mut scaled = vote.clone();
                scaled.confidence = vote.confidence * set.weight;
                scaled
            })
        })
        .collect();

    debug!(
        strategies = strategies.len(),
        pooled = pooled.len(),
        "ensemble combining"
    );
    combine_votes(&pooled, ranker, config, passes_threshold)
}

/// Win/attempt bookkeeping per strategy name.
#[derive(Debug, Clone, Default)]
struct StrategyRecord {
    attempts: u64,
    wins: u64,
    avg_confidence: f64,
}

/// Readable summary of one recorded strategy.
#[derive(Debug, Clone)]
pub struct StrategySummary {
    pub strategy: String,
    pub attempts: u64,
    pub wins: u64,
    pub win_rate: f64,
    pub avg_confidence: f64,
}

/// Win-rate comparison between two recorded strategies.
#[derive(Debug, Clone)]
pub struct StrategyComparison {
    pub first: StrategySummary,
    pub second: StrategySummary,
    /// Strategy with the higher win rate; the first on a tie.
    pub better: String,
}

/// Per-strategy outcome tracker.
///
/// Lookups by a name that was never recorded fail loudly: that signals
/// caller misconfiguration, not absence of data.
#[derive(Debug, Default)]
pub struct StrategyStats {
    records: HashMap<String, StrategyRecord>,
}

impl StrategyStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one attempt outcome for a named strategy.
    pub fn record(&mut self, strategy: &str, won: bool, confidence: f64) {
        let record = self.records.entry(strategy.to_string()).or_default();
        record.attempts += 1;
        if won {
            record.wins += 1;
        }
        record.avg_confidence += (confidence - record.avg_confidence) / record.attempts as f64;
    }

    pub fn summary(&self, strategy: &str) -> LootlensResult<StrategySummary> {
        let record = self
            .records
            .get(strategy)
            .ok_or_else(|| VotingError::UnknownStrategy {
                name: strategy.to_string(),
            })?;
        Ok(StrategySummary {
            strategy: strategy.to_string(),
            attempts: record.attempts,
            wins: record.wins,
            win_rate: record.wins as f64 / record.attempts as f64,
            avg_confidence: record.avg_confidence,
        })
    }

    /// Compare two recorded strategies by win rate.
    pub fn compare(&self, first: &str, second: &str) -> LootlensResult<StrategyComparison> {
        let a = self.summary(first)?;
        let b = self.summary(second)?;
        let better = if b.win_rate > a.win_rate {
            b.strategy.clone()
        } else {
            a.strategy.clone()
        };
        Ok(StrategyComparison {
            first: a,
            second: b,
            better,
        })
    }
}
