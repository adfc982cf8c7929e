//! Per-group score reduction for each combining method.

use lootlens_core::config::CombineMethod;

/// One vote's contribution after performance weighting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WeightedVote {
    pub confidence: f64,
    pub weight: f64,
}

/// Reduce a group of weighted votes to a single combined score.
/// Empty groups score 0.
pub(crate) fn combine(method: CombineMethod, group: &[WeightedVote]) -> f64 {
    if group.is_empty() {
        return 0.0;
    }
    match method {
        CombineMethod::WeightedAverage => weighted_average(group),
        CombineMethod::Max => max(group),
        CombineMethod::Median => median(group),
        CombineMethod::RankedChoice => ranked_choice(group),
    }
}

/// `Σ(confidence·weight) / Σweight`.
fn weighted_average(group: &[WeightedVote]) -> f64 {
    let total_weight: f64 = group.iter().map(|vote| vote.weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    group
        .iter()
        .map(|vote| vote.confidence * vote.weight)
        .sum::<f64>()
        / total_weight
}

fn max(group: &[WeightedVote]) -> f64 {
    group
        .iter()
        .map(|vote| vote.confidence)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Middle confidence; mean of the two middle values for even counts.
fn median(group: &[WeightedVote]) -> f64 {
    let mut confidences: Vec<f64> = group.iter().map(|vote| vote.confidence).collect();
    confidences.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = confidences.len();
    if n % 2 == 1 {
        confidences[n / 2]
    } else {
        (confidences[n / 2 - 1] + confidences[n / 2]) / 2.0
    }
}

/// Positional fall-off: sort by confidence descending and weight the j-th
/// (1-indexed) entry `1/j`, so the strongest claims dominate but a long
/// tail of agreement still counts.
fn ranked_choice(group: &[WeightedVote]) -> f64 {
    let mut confidences: Vec<f64> = group.iter().map(|vote| vote.confidence).collect();
    confidences.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, confidence) in confidences.iter().enumerate() {
        let positional = 1.0 / (i + 1) as f64;
        numerator += confidence * positional;
        denominator += positional;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(confidences: &[f64]) -> Vec<WeightedVote> {
        confidences
            .iter()
            .map(|&confidence| WeightedVote {
                confidence,
                weight: 1.0,
            })
            .collect()
    }

    #[test]
    fn max_takes_the_peak() {
        let score = combine(CombineMethod::Max, &group(&[0.6, 0.9, 0.7]));
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn median_odd_and_even() {
        assert!((combine(CombineMethod::Median, &group(&[0.6, 0.8, 0.9])) - 0.8).abs() < 1e-9);
        assert!((combine(CombineMethod::Median, &group(&[0.6, 0.8])) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn weighted_average_follows_weights() {
        let votes = [
            WeightedVote {
                confidence: 1.0,
                weight: 3.0,
            },
            WeightedVote {
                confidence: 0.0,
                weight: 1.0,
            },
        ];
        assert!((combine(CombineMethod::WeightedAverage, &votes) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn ranked_choice_favors_the_front() {
        // (0.9·1 + 0.5·½) / (1 + ½)
        let score = combine(CombineMethod::RankedChoice, &group(&[0.5, 0.9]));
        assert!((score - (0.9 + 0.25) / 1.5).abs() < 1e-9);
    }

    #[test]
    fn empty_group_scores_zero() {
        assert_eq!(combine(CombineMethod::Max, &[]), 0.0);
        assert_eq!(combine(CombineMethod::Median, &[]), 0.0);
    }
}
