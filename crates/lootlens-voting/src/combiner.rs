//! Vote aggregation over an external performance ranker.

use std::collections::HashMap;

use tracing::debug;

use lootlens_core::config::VotingConfig;
use lootlens_core::constants::{
    MAX_COMBINED_CONFIDENCE, MIN_EFFECTIVE_WEIGHT, NEUTRAL_RANK_SCORE, SKIP_WEIGHT_FACTOR,
};
use lootlens_core::models::{Vote, VoteAggregate, VotingResult};
use lootlens_ranking::PerformanceRanker;

use crate::methods::{self, WeightedVote};

/// External acceptance predicate over (confidence, winner rarity).
pub type ThresholdFn<'a> = dyn Fn(f64, Option<&str>) -> bool + 'a;

/// Combine votes into a single winning identity.
///
/// Returns `None` when the evidence is insufficient: no votes, or fewer than
/// `min_votes`. Ties on combined score fall to the larger vote count, then to
/// first-seen order.
pub fn combine_votes(
    votes: &[Vote],
    ranker: &PerformanceRanker,
    config: &VotingConfig,
    passes_threshold: &ThresholdFn,
) -> Option<VotingResult> {
    let total_votes = votes.len();
    if total_votes == 0 || total_votes < config.min_votes {
        return None;
    }

    // Group by identity, preserving first-seen order for tie-breaking.
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<WeightedVote>> = HashMap::new();
    for vote in votes {
        let weight = effective_weight(vote, ranker, config);
        groups
            .entry(vote.identity_id.clone())
            .or_insert_with(|| {
                order.push(vote.identity_id.clone());
                Vec::new()
            })
            .push(WeightedVote {
                confidence: vote.confidence,
                weight,
            });
    }

    let mut breakdown: HashMap<String, VoteAggregate> = HashMap::new();
    let mut winner: Option<(String, f64, usize)> = None;
    for identity in &order {
        let group = &groups[identity];
        let aggregate = aggregate(group);
        let score = methods::combine(config.method, group);

        let better = match &winner {
            None => true,
            Some((_, best_score, best_count)) => {
                score > *best_score || (score == *best_score && aggregate.vote_count > *best_count)
            }
        };
        if better {
            winner = Some((identity.clone(), score, aggregate.vote_count));
        }
        breakdown.insert(identity.clone(), aggregate);
    }

    let (identity_id, combined, vote_count) = winner?;
    let consensus = vote_count as f64 / total_votes as f64;

    let mut confidence = combined;
    if consensus < config.min_consensus {
        // Below-bar consensus strictly scales the result down.
        confidence *= consensus / config.min_consensus;
    }
    let confidence = confidence.clamp(0.0, MAX_COMBINED_CONFIDENCE);

    // Winner's rarity: first winning-identity vote that carries one.
    let rarity = votes
        .iter()
        .filter(|vote| vote.identity_id == identity_id)
        .find_map(|vote| vote.rarity.as_deref());
    let passes = passes_threshold(confidence, rarity);

    debug!(
        identity = %identity_id,
        confidence,
        consensus,
        total_votes,
        "combined votes"
    );

    Some(VotingResult {
        identity_id,
        confidence,
        vote_count,
        total_votes,
        consensus,
        breakdown,
        passes_threshold: passes,
    })
}

/// Pick the identity with the most raw votes, ignoring all weighting.
/// Reports the winner's maximum confidence. First-seen order breaks ties.
pub fn majority_vote(votes: &[Vote], passes_threshold: &ThresholdFn) -> Option<VotingResult> {
    if votes.is_empty() {
        return None;
    }
    let total_votes = votes.len();

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<WeightedVote>> = HashMap::new();
    for vote in votes {
        groups
            .entry(vote.identity_id.clone())
            .or_insert_with(|| {
                order.push(vote.identity_id.clone());
                Vec::new()
            })
            .push(WeightedVote {
                confidence: vote.confidence,
                weight: 1.0,
            });
    }

    let mut breakdown: HashMap<String, VoteAggregate> = HashMap::new();
    let mut winner: Option<(String, usize)> = None;
    for identity in &order {
        let aggregate = aggregate(&groups[identity]);
        if winner
            .as_ref()
            .map(|(_, best)| aggregate.vote_count > *best)
            .unwrap_or(true)
        {
            winner = Some((identity.clone(), aggregate.vote_count));
        }
        breakdown.insert(identity.clone(), aggregate);
    }

    let (identity_id, vote_count) = winner?;
    let consensus = vote_count as f64 / total_votes as f64;
    let confidence = breakdown
        .get(&identity_id)?
        .max_confidence
        .clamp(0.0, MAX_COMBINED_CONFIDENCE);

    let rarity = votes
        .iter()
        .filter(|vote| vote.identity_id == identity_id)
        .find_map(|vote| vote.rarity.as_deref());
    let passes = passes_threshold(confidence, rarity);

    Some(VotingResult {
        identity_id,
        confidence,
        vote_count,
        total_votes,
        consensus,
        breakdown,
        passes_threshold: passes,
    })
}

/// Combine only the votes that independently clear the acceptance predicate.
/// `None` if no vote passes.
pub fn threshold_vote(
    votes: &[Vote],
    ranker: &PerformanceRanker,
    config: &VotingConfig,
    passes_threshold: &ThresholdFn,
) -> Option<VotingResult> {
    let eligible: Vec<Vote> = votes
        .iter()
        .filter(|vote| passes_threshold(vote.confidence, vote.rarity.as_deref()))
        .cloned()
        .collect();
    if eligible.is_empty() {
        return None;
    }
    combine_votes(&eligible, ranker, config, passes_threshold)
}

/// Base weight 1.0, shaped by the template's track record: skip-listed
/// templates are halved; ranked templates scale monotonically around the
/// neutral score so stronger templates count more. Templates with no
/// history stay at the base weight.
fn effective_weight(vote: &Vote, ranker: &PerformanceRanker, config: &VotingConfig) -> f64 {
    let mut weight = 1.0;
    if !config.use_performance_weighting {
        return weight;
    }
    if ranker.should_skip(&vote.template_id) {
        weight *= SKIP_WEIGHT_FACTOR;
    } else if let Some(rank) = ranker.rank_score(&vote.template_id) {
        weight *= 1.0 + config.performance_weight * (rank - NEUTRAL_RANK_SCORE) / NEUTRAL_RANK_SCORE;
    }
    weight.max(MIN_EFFECTIVE_WEIGHT)
}

fn aggregate(group: &[WeightedVote]) -> VoteAggregate {
    let vote_count = group.len();
    let total_weight: f64 = group.iter().map(|vote| vote.weight).sum();
    let avg_confidence = if vote_count == 0 {
        0.0
    } else {
        group.iter().map(|vote| vote.confidence).sum::<f64>() / vote_count as f64
    };
    let max_confidence = group
        .iter()
        .map(|vote| vote.confidence)
        .fold(f64::NEG_INFINITY, f64::max);

    VoteAggregate {
        vote_count,
        total_weight,
        avg_confidence,
        max_confidence: if vote_count == 0 {
            0.0
        } else {
            max_confidence
        },
    }
}
