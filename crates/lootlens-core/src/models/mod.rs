mod performance;
mod sample;
mod vote;

pub use performance::{PerformanceSnapshot, SkipListEntry, SkipReason, TemplatePerformance};
pub use sample::{Provenance, TrainingSample};
pub use vote::{Vote, VoteAggregate, VotingResult};
