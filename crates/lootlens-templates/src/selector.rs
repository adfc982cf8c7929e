//! Diversity-aware template selection for one identity.

use std::collections::HashMap;

use lootlens_core::config::defaults;
use lootlens_core::config::SelectorConfig;
use lootlens_core::models::{Provenance, TrainingSample};

use crate::{quality, resolution};

/// Per-call selection options.
#[derive(Debug, Clone)]
pub struct SelectOptions {
    /// Maximum number of templates to pick.
    pub max_count: usize,
    /// Resolution to favor, as `"WxH"`.
    pub target_resolution: Option<String>,
    /// Cap how many picks any single provenance may contribute.
    pub prefer_diversity: bool,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            max_count: defaults::DEFAULT_MAX_TEMPLATES,
            target_resolution: None,
            prefer_diversity: true,
        }
    }
}

/// A selected template and its downstream match weight.
#[derive(Debug, Clone)]
pub struct SelectedTemplate {
    pub sample: TrainingSample,
    /// Quality score, used to weight this template's match score downstream.
    pub weight: f64,
}

/// Rank candidates by quality plus resolution affinity and pick up to
/// `max_count`.
///
/// With `prefer_diversity`, no provenance may contribute more than
/// `⌈max_count / 2⌉` picks; over-cap candidates are skipped in favor of the
/// next best from an under-cap source, until the quota is filled or the
/// candidates run out.
pub fn select_templates(
    candidates: &[TrainingSample],
    options: &SelectOptions,
    config: &SelectorConfig,
) -> Vec<SelectedTemplate> {
    if options.max_count == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(f64, f64, &TrainingSample)> = candidates
        .iter()
        .map(|sample| {
            let quality = quality::score(sample);
            let bonus = resolution::bonus(
                sample.resolution.as_deref(),
                options.target_resolution.as_deref(),
                config,
            );
            (quality + bonus, quality, sample)
        })
        .collect();
    // Stable sort: equal scores keep input order.
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let per_source_cap = options.max_count.div_ceil(2);
    let mut picked_per_source: HashMap<Provenance, usize> = HashMap::new();
    let mut picked = Vec::new();

    for (_, quality, sample) in &ranked {
        if picked.len() == options.max_count {
            break;
        }
        if options.prefer_diversity {
            let count = picked_per_source.entry(sample.provenance).or_insert(0);
            if *count >= per_source_cap {
                continue;
            }
            *count += 1;
        }
        picked.push(SelectedTemplate {
            sample: (*sample).clone(),
            weight: *quality,
        });
    }

    picked
}

/// Combine per-template match scores into one weighted score:
/// `Σ(score·weight) / Σweight`, treating a missing or zero weight as 1.
pub fn weighted_match_score(scores: &[f64], weights: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mut total = 0.0;
    let mut total_weight = 0.0;
    for (i, score) in scores.iter().enumerate() {
        let weight = match weights.get(i) {
            Some(w) if *w > 0.0 => *w,
            _ => 1.0,
        };
        total += score * weight;
        total_weight += weight;
    }
    total / total_weight
}
