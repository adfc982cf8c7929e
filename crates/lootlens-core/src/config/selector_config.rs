use serde::{Deserialize, Serialize};

use super::defaults;

/// Template selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Bonus added to a candidate whose resolution exactly matches the target.
    pub resolution_bonus: f64,
    /// Aspect-ratio tolerance under which half the bonus still applies.
    pub aspect_tolerance: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            resolution_bonus: defaults::DEFAULT_RESOLUTION_BONUS,
            aspect_tolerance: defaults::DEFAULT_ASPECT_TOLERANCE,
        }
    }
}
