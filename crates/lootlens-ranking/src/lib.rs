//! # lootlens-ranking
//!
//! Adaptive per-template reliability ranking: usage/success/confusion
//! history, recency-decayed rank scores, skip-listing, and versioned
//! snapshot export/import.

mod decay;
mod ranker;

pub use ranker::PerformanceRanker;
