use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use lootlens_cache::{CacheStats, DetectionCache};
use lootlens_core::config::{LootlensConfig, VotingConfig};
use lootlens_core::errors::LootlensResult;
use lootlens_core::models::{PerformanceSnapshot, SkipListEntry, Vote, VotingResult};
use lootlens_core::traits::{IClock, SystemClock};
use lootlens_ranking::PerformanceRanker;
use lootlens_voting::{combine_votes, ThresholdFn};

/// Owns one detection cache and one performance ranker behind coarse
/// per-store locks. Call volume is bounded by inventory-grid size, so lock
/// contention is not a concern; the locks only make sharing across threads
/// sound.
pub struct RecognitionEngine {
    config: LootlensConfig,
    cache: Mutex<DetectionCache<VotingResult>>,
    ranker: Mutex<PerformanceRanker>,
}

impl RecognitionEngine {
    pub fn new(config: LootlensConfig, clock: Arc<dyn IClock>) -> Self {
        Self {
            cache: Mutex::new(DetectionCache::new(config.cache.clone(), Arc::clone(&clock))),
            ranker: Mutex::new(PerformanceRanker::new(config.ranking.clone(), clock)),
            config,
        }
    }

    pub fn config(&self) -> &LootlensConfig {
        &self.config
    }

    /// Combine the votes for one scanned cell. `override_config` replaces
    /// the engine's voting config for this call only.
    pub fn combine_votes(
        &self,
        votes: &[Vote],
        override_config: Option<&VotingConfig>,
        passes_threshold: &ThresholdFn,
    ) -> Option<VotingResult> {
        let voting = override_config.unwrap_or(&self.config.voting);
        let ranker = self.lock_ranker();
        combine_votes(votes, &ranker, voting, passes_threshold)
    }

    /// Record one completed match attempt. Safe with no prior history for
    /// the template.
    pub fn record_match_result(
        &self,
        template_id: &str,
        identity_id: &str,
        success: bool,
        confidence: f64,
        confused_with: Option<&str>,
    ) {
        self.lock_ranker()
            .record_match_result(template_id, identity_id, success, confidence, confused_with);
    }

    /// Cached result for a cell key, if still fresh.
    pub fn cached_result(&self, key: &str) -> Option<VotingResult> {
        self.lock_cache().get(key)
    }

    pub fn cache_result(&self, key: impl Into<String>, result: VotingResult) {
        self.lock_cache().put(key, result);
    }

    /// Remove all expired cache entries; returns the number removed.
    pub fn sweep_cache(&self) -> usize {
        self.lock_cache().sweep()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().stats()
    }

    pub fn should_skip(&self, template_id: &str) -> bool {
        self.lock_ranker().should_skip(template_id)
    }

    pub fn add_manual_skip(&self, template_id: &str) {
        self.lock_ranker().add_manual_skip(template_id);
    }

    pub fn remove_manual_skip(&self, template_id: &str) -> bool {
        self.lock_ranker().remove_manual_skip(template_id)
    }

    pub fn skip_list(&self) -> Vec<SkipListEntry> {
        self.lock_ranker().skip_list()
    }

    pub fn recommended_threshold(&self, identity_id: &str) -> f64 {
        self.lock_ranker().recommended_threshold(identity_id)
    }

    pub fn export_performance(&self) -> PerformanceSnapshot {
        self.lock_ranker().export()
    }

    /// Atomic replace of all ranker state from a snapshot.
    pub fn import_performance(&self, snapshot: PerformanceSnapshot) -> LootlensResult<()> {
        self.lock_ranker().import(snapshot)
    }

    /// Empty both stores.
    pub fn reset(&self) {
        self.lock_cache().clear();
        self.lock_ranker().reset();
        info!("engine reset");
    }

    fn lock_cache(&self) -> MutexGuard<'_, DetectionCache<VotingResult>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_ranker(&self) -> MutexGuard<'_, PerformanceRanker> {
        self.ranker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecognitionEngine {
    fn default() -> Self {
        Self::new(LootlensConfig::default(), Arc::new(SystemClock))
    }
}
