use std::hint::black_box;
use std::sync::Arc;

use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};

use lootlens_core::config::{RankingConfig, VotingConfig};
use lootlens_core::models::Vote;
use lootlens_core::traits::ManualClock;
use lootlens_ranking::PerformanceRanker;
use lootlens_voting::combine_votes;

fn bench_combine(c: &mut Criterion) {
    let mut ranker = PerformanceRanker::new(
        RankingConfig::default(),
        Arc::new(ManualClock::new(Utc::now())),
    );
    for i in 0..32 {
        for _ in 0..20 {
            ranker.record_match_result(&format!("t{i}"), "sword", i % 3 != 0, 0.8, None);
        }
    }

    let votes: Vec<Vote> = (0..100)
        .map(|i| Vote::new(format!("t{}", i % 32), format!("id{}", i % 7), 0.5 + (i % 5) as f64 * 0.1))
        .collect();
    let config = VotingConfig::default();
    let accept = |_: f64, _: Option<&str>| true;

    c.bench_function("combine_votes_100", |b| {
        b.iter(|| combine_votes(black_box(&votes), &ranker, &config, &accept))
    });
}

criterion_group!(benches, bench_combine);
criterion_main!(benches);
