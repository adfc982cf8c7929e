use std::sync::Arc;

use chrono::Utc;
use lootlens_core::config::LootlensConfig;
use lootlens_core::models::Vote;
use lootlens_core::traits::ManualClock;
use lootlens_engine::RecognitionEngine;

fn make_engine() -> (RecognitionEngine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    (
        RecognitionEngine::new(LootlensConfig::default(), clock.clone()),
        clock,
    )
}

fn accept_all(_confidence: f64, _rarity: Option<&str>) -> bool {
    true
}

#[test]
fn scan_cycle_combines_caches_and_learns() {
    let (engine, clock) = make_engine();
    let votes = vec![
        Vote::new("t1", "sword", 0.8),
        Vote::new("t2", "sword", 0.85),
        Vote::new("t3", "axe", 0.7),
    ];

    let result = engine.combine_votes(&votes, None, &accept_all).unwrap();
    assert_eq!(result.identity_id, "sword");

    engine.cache_result("cell:3:4", result.clone());
    assert_eq!(
        engine.cached_result("cell:3:4").map(|r| r.identity_id),
        Some("sword".to_string())
    );

    // The cached decision ages out.
    clock.advance_ms(engine.config().cache.ttl_ms + 1);
    assert!(engine.cached_result("cell:3:4").is_none());

    // Feedback accumulates into the ranker.
    engine.record_match_result("t1", "sword", true, 0.8, None);
    assert_eq!(engine.export_performance().performances.len(), 1);
}

#[test]
fn recorded_history_shifts_future_decisions() {
    let (engine, _clock) = make_engine();
    for _ in 0..12 {
        engine.record_match_result("t_bad", "axe", false, 0.2, Some("sword"));
    }
    assert!(engine.should_skip("t_bad"));

    // The axe group leans on a skip-listed template; halving its weight
    // drops the group below the clean sword pair.
    let votes = vec![
        Vote::new("t1", "sword", 0.75),
        Vote::new("t2", "sword", 0.8),
        Vote::new("t_bad", "axe", 0.99),
        Vote::new("t_axe", "axe", 0.6),
    ];

    let unweighted = lootlens_core::config::VotingConfig {
        use_performance_weighting: false,
        ..Default::default()
    };
    let naive = engine
        .combine_votes(&votes, Some(&unweighted), &accept_all)
        .unwrap();
    assert_eq!(naive.identity_id, "axe");

    let informed = engine.combine_votes(&votes, None, &accept_all).unwrap();
    assert_eq!(informed.identity_id, "sword");
}

#[test]
fn per_call_config_override_does_not_stick() {
    let (engine, _clock) = make_engine();
    let votes = vec![Vote::new("t1", "sword", 0.9)];

    let strict = lootlens_core::config::VotingConfig {
        min_votes: 2,
        ..Default::default()
    };
    assert!(engine
        .combine_votes(&votes, Some(&strict), &accept_all)
        .is_none());
    assert!(engine.combine_votes(&votes, None, &accept_all).is_some());
}

#[test]
fn performance_state_moves_between_engines() {
    let (source, _clock_a) = make_engine();
    for _ in 0..10 {
        source.record_match_result("t1", "sword", true, 0.9, None);
    }
    source.add_manual_skip("t9");

    let (target, _clock_b) = make_engine();
    target.import_performance(source.export_performance()).unwrap();

    assert!(target.should_skip("t9"));
    assert_eq!(
        target.recommended_threshold("sword"),
        source.recommended_threshold("sword")
    );
}

#[test]
fn engines_are_fully_independent() {
    let (a, _clock_a) = make_engine();
    let (b, _clock_b) = make_engine();

    a.record_match_result("t1", "sword", true, 0.9, None);
    a.add_manual_skip("t2");

    assert!(b.export_performance().performances.is_empty());
    assert!(!b.should_skip("t2"));
}

#[test]
fn reset_empties_both_stores() {
    let (engine, _clock) = make_engine();
    engine.record_match_result("t1", "sword", true, 0.9, None);
    let votes = vec![Vote::new("t1", "sword", 0.9)];
    let result = engine.combine_votes(&votes, None, &accept_all).unwrap();
    engine.cache_result("cell:0:0", result);

    engine.reset();
    assert!(engine.cached_result("cell:0:0").is_none());
    assert!(engine.export_performance().performances.is_empty());
    assert!(engine.skip_list().is_empty());
}
