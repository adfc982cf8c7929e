mod ranking_error;
mod voting_error;

pub use ranking_error::RankingError;
pub use voting_error::VotingError;

/// Top-level error type aggregating every subsystem.
#[derive(Debug, thiserror::Error)]
pub enum LootlensError {
    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    Voting(#[from] VotingError),

    #[error("config parse failed: {0}")]
    Config(#[from] toml::de::Error),
}

pub type LootlensResult<T> = Result<T, LootlensError>;
