mod cache_config;
mod ranking_config;
mod selector_config;
mod voting_config;

pub mod defaults;

pub use cache_config::CacheConfig;
pub use ranking_config::RankingConfig;
pub use selector_config::SelectorConfig;
pub use voting_config::{CombineMethod, VotingConfig};

use serde::{Deserialize, Serialize};

use crate::errors::LootlensResult;

/// Top-level configuration for all lootlens subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LootlensConfig {
    pub selector: SelectorConfig,
    pub cache: CacheConfig,
    pub ranking: RankingConfig,
    pub voting: VotingConfig,
}

impl LootlensConfig {
    /// Parse a TOML config. Missing sections and fields fall back to defaults.
    pub fn from_toml_str(raw: &str) -> LootlensResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}
