//! # lootlens-engine
//!
//! The facade owning the mutable stores (detection cache and performance
//! ranker) behind coarse per-store locks. Each engine instance is fully
//! independent, so embedders (and tests) can run several side by side.

mod engine;

pub use engine::RecognitionEngine;
