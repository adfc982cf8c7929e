use std::sync::Arc;

use chrono::Utc;
use proptest::prelude::*;

use lootlens_core::config::RankingConfig;
use lootlens_core::traits::ManualClock;
use lootlens_ranking::PerformanceRanker;

proptest! {
    #[test]
    fn usage_count_increments_exactly_once_per_call(
        results in prop::collection::vec((any::<bool>(), -1.0f64..2.0), 1..64),
    ) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let config = RankingConfig::default();
        let min = config.min_confidence_for_success;
        let mut ranker = PerformanceRanker::new(config, clock);

        let mut expected_successes = 0u64;
        for (i, (success, confidence)) in results.iter().enumerate() {
            ranker.record_match_result("t1", "sword", *success, *confidence, None);
            if *success && *confidence >= min {
                expected_successes += 1;
            }
            let perf = ranker.performance("t1").unwrap();
            prop_assert_eq!(perf.usage_count, i as u64 + 1);
            prop_assert_eq!(perf.success_count, expected_successes);
            prop_assert_eq!(perf.failure_count + perf.success_count, perf.usage_count);
        }
    }

    #[test]
    fn never_skipped_before_min_usage_without_manual_entry(
        results in prop::collection::vec((any::<bool>(), 0.0f64..1.0), 0..9),
    ) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let mut ranker = PerformanceRanker::new(RankingConfig::default(), clock);

        for (success, confidence) in results {
            ranker.record_match_result("t1", "sword", success, confidence, Some("axe"));
        }
        prop_assert!(!ranker.should_skip("t1"));
    }
}
