//! Mutable per-template performance store and rank computation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use lootlens_core::config::RankingConfig;
use lootlens_core::constants::SNAPSHOT_VERSION;
use lootlens_core::errors::{LootlensResult, RankingError};
use lootlens_core::models::{PerformanceSnapshot, SkipListEntry, SkipReason, TemplatePerformance};
use lootlens_core::traits::IClock;

use crate::decay;

/// Per-template usage/success/confusion history with on-demand rank scores
/// and skip-list membership.
pub struct PerformanceRanker {
    performances: HashMap<String, TemplatePerformance>,
    manual_skips: HashMap<String, SkipListEntry>,
    config: RankingConfig,
    clock: Arc<dyn IClock>,
}

impl PerformanceRanker {
    pub fn new(config: RankingConfig, clock: Arc<dyn IClock>) -> Self {
        Self {
            performances: HashMap::new(),
            manual_skips: HashMap::new(),
            config,
            clock,
        }
    }

    /// Record one completed match attempt for a template.
    ///
    /// Counts as a true success only when the caller reports success AND the
    /// confidence clears `min_confidence_for_success`; a low-confidence
    /// "success" is demoted to a failure so it cannot inflate reliability.
    /// A failure with a non-empty `confused_with` increments that confusion
    /// counter.
    pub fn record_match_result(
        &mut self,
        template_id: &str,
        identity_id: &str,
        success: bool,
        confidence: f64,
        confused_with: Option<&str>,
    ) {
        let now = self.clock.now();
        let entry = self
            .performances
            .entry(template_id.to_string())
            .or_insert_with(|| TemplatePerformance::new(template_id, identity_id, now));

        entry.usage_count += 1;
        let true_success = success && confidence >= self.config.min_confidence_for_success;
        if true_success {
            entry.success_count += 1;
        } else {
            entry.failure_count += 1;
            if let Some(other) = confused_with.filter(|id| !id.is_empty()) {
                *entry.confusions.entry(other.to_string()).or_insert(0) += 1;
            }
        }
        // Incremental running average over every recorded confidence,
        // stored as given even if outside [0, 1].
        entry.avg_confidence += (confidence - entry.avg_confidence) / entry.usage_count as f64;
        entry.last_updated = now;

        debug!(
            template_id,
            identity_id,
            success = true_success,
            confidence,
            "recorded match result"
        );
    }

    /// Historical success rate for a template (0 with no usage).
    pub fn success_rate(&self, template_id: &str) -> f64 {
        self.performances
            .get(template_id)
            .map(TemplatePerformance::success_rate)
            .unwrap_or(0.0)
    }

    /// Blended reliability score on a 0–100 scale, faded by recency decay.
    /// `None` for templates with no recorded history.
    pub fn rank_score(&self, template_id: &str) -> Option<f64> {
        let perf = self.performances.get(template_id)?;
        let base = self.config.success_rate_weight * perf.success_rate() * 100.0
            + self.config.confidence_weight * perf.avg_confidence * 100.0;
        let factor = decay::factor(
            perf.last_updated,
            self.clock.now(),
            self.config.decay_rate,
            self.config.decay_period_days,
        );
        Some(base * factor)
    }

    /// Whether a template should be excluded from matching. Recomputed on
    /// demand, never cached.
    ///
    /// Manual entries always skip. Automatic criteria (success rate below the
    /// skip threshold, or confusion share above the confusion ratio) need at
    /// least `min_usage_count` observations before they can trigger.
    pub fn should_skip(&self, template_id: &str) -> bool {
        if self.manual_skips.contains_key(template_id) {
            return true;
        }
        let Some(perf) = self.performances.get(template_id) else {
            return false;
        };
        if perf.usage_count < self.config.min_usage_count {
            return false;
        }
        perf.success_rate() < self.config.skip_threshold
            || perf.total_confusions() as f64 / perf.usage_count as f64
                > self.config.confusion_ratio
    }

    /// Current skip-list: manual entries verbatim, plus synthesized entries
    /// for templates failing the automatic criteria right now.
    pub fn skip_list(&self) -> Vec<SkipListEntry> {
        let mut entries: Vec<SkipListEntry> = self.manual_skips.values().cloned().collect();

        for perf in self.performances.values() {
            if self.manual_skips.contains_key(&perf.template_id) {
                continue;
            }
            if perf.usage_count < self.config.min_usage_count {
                continue;
            }
            let success_rate = perf.success_rate();
            let reason = if success_rate < self.config.skip_threshold {
                Some(SkipReason::LowSuccessRate)
            } else if perf.total_confusions() as f64 / perf.usage_count as f64
                > self.config.confusion_ratio
            {
                Some(SkipReason::HighConfusion)
            } else {
                None
            };
            if let Some(reason) = reason {
                entries.push(SkipListEntry {
                    template_id: perf.template_id.clone(),
                    identity_id: perf.identity_id.clone(),
                    reason,
                    success_rate,
                    added_at: perf.last_updated,
                });
            }
        }

        entries
    }

    /// Manually exclude a template until `remove_manual_skip`.
    pub fn add_manual_skip(&mut self, template_id: &str) {
        let (identity_id, success_rate) = self
            .performances
            .get(template_id)
            .map(|perf| (perf.identity_id.clone(), perf.success_rate()))
            .unwrap_or_default();
        info!(template_id, "added manual skip");
        self.manual_skips.insert(
            template_id.to_string(),
            SkipListEntry {
                template_id: template_id.to_string(),
                identity_id,
                reason: SkipReason::Manual,
                success_rate,
                added_at: self.clock.now(),
            },
        );
    }

    /// Returns whether an entry was removed.
    pub fn remove_manual_skip(&mut self, template_id: &str) -> bool {
        self.manual_skips.remove(template_id).is_some()
    }

    /// Recommended confidence threshold for an identity: the mean of its
    /// used templates' optimal thresholds, `clamp(avgConfidence − 0.1, 0.3,
    /// 0.9)` each, falling back to the configured default with no data.
    pub fn recommended_threshold(&self, identity_id: &str) -> f64 {
        let thresholds: Vec<f64> = self
            .performances
            .values()
            .filter(|perf| perf.identity_id == identity_id && perf.usage_count > 0)
            .map(|perf| (perf.avg_confidence - 0.1).clamp(0.3, 0.9))
            .collect();
        if thresholds.is_empty() {
            return self.config.fallback_threshold;
        }
        thresholds.iter().sum::<f64>() / thresholds.len() as f64
    }

    /// Most frequent (template, other identity, count) confusion pairs.
    pub fn top_confusions(&self, limit: usize) -> Vec<(String, String, u64)> {
        let mut pairs: Vec<(String, String, u64)> = self
            .performances
            .values()
            .flat_map(|perf| {
                perf.confusions
                    .iter()
                    .map(move |(other, count)| (perf.template_id.clone(), other.clone(), *count))
            })
            .collect();
        pairs.sort_by(|a, b| b.2.cmp(&a.2));
        pairs.truncate(limit);
        pairs
    }

    pub fn performance(&self, template_id: &str) -> Option<&TemplatePerformance> {
        self.performances.get(template_id)
    }

    /// Number of templates with recorded history.
    pub fn len(&self) -> usize {
        self.performances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }

    /// Serialize the full state. Only manual skip entries are included;
    /// automatic membership is derivable from the performances.
    pub fn export(&self) -> PerformanceSnapshot {
        PerformanceSnapshot {
            version: SNAPSHOT_VERSION,
            performances: self.performances.values().cloned().collect(),
            skip_list: self.manual_skips.values().cloned().collect(),
        }
    }

    /// Replace all state with the snapshot's. Never merges, so a rejected
    /// import leaves the existing state untouched.
    pub fn import(&mut self, snapshot: PerformanceSnapshot) -> LootlensResult<()> {
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(RankingError::UnsupportedSnapshotVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            }
            .into());
        }

        self.performances = snapshot
            .performances
            .into_iter()
            .map(|perf| (perf.template_id.clone(), perf))
            .collect();
        self.manual_skips = snapshot
            .skip_list
            .into_iter()
            .filter(|entry| entry.reason == SkipReason::Manual)
            .map(|entry| (entry.template_id.clone(), entry))
            .collect();

        info!(
            templates = self.performances.len(),
            manual_skips = self.manual_skips.len(),
            "imported performance snapshot"
        );
        Ok(())
    }

    /// Clear all performances and manual skips.
    pub fn reset(&mut self) {
        self.performances.clear();
        self.manual_skips.clear();
    }
}
