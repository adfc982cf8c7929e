//! # lootlens-core
//!
//! Foundation crate for the lootlens recognition stack.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LootlensConfig;
pub use errors::{LootlensError, LootlensResult};
pub use models::{
    PerformanceSnapshot, Provenance, SkipListEntry, SkipReason, TemplatePerformance,
    TrainingSample, Vote, VoteAggregate, VotingResult,
};
pub use traits::{IClock, ManualClock, SystemClock};
