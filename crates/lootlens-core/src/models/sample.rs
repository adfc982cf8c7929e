use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where a training sample came from. Determines its base quality weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Provenance {
    /// Hand-labelled against the actual game data.
    GroundTruth,
    /// A wrong detection fixed by a reviewer.
    Corrected,
    /// An empty-cell detection fixed to a real identity.
    CorrectedFromEmpty,
    /// Reviewed and confirmed, but not hand-labelled.
    Verified,
    /// Captured automatically, never reviewed.
    Unreviewed,
    /// No provenance recorded.
    Default,
}

impl Provenance {
    /// Parse a loose provenance tag. Unknown tags degrade to `Default`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "ground_truth" => Provenance::GroundTruth,
            "corrected" => Provenance::Corrected,
            "corrected_from_empty" => Provenance::CorrectedFromEmpty,
            "verified" => Provenance::Verified,
            "unreviewed" => Provenance::Unreviewed,
            _ => Provenance::Default,
        }
    }

    /// Base quality weight for this source.
    pub fn weight(self) -> f64 {
        match self {
            Provenance::GroundTruth => 1.5,
            Provenance::Corrected => 1.3,
            Provenance::CorrectedFromEmpty => 1.2,
            Provenance::Verified => 1.0,
            Provenance::Unreviewed => 0.8,
            Provenance::Default => 0.7,
        }
    }
}

/// One stored reference sample for an identity. Immutable; an identity
/// typically has many.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrainingSample {
    pub identity_id: String,
    pub provenance: Provenance,
    /// Captured match confidence, stored as given (may fall outside [0, 1]).
    pub confidence: Option<f64>,
    /// Source resolution as `"WxH"`.
    pub resolution: Option<String>,
}

impl TrainingSample {
    pub fn new(identity_id: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            identity_id: identity_id.into(),
            provenance,
            confidence: None,
            resolution: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!(Provenance::parse("ground_truth"), Provenance::GroundTruth);
        assert_eq!(
            Provenance::parse("corrected_from_empty"),
            Provenance::CorrectedFromEmpty
        );
        assert_eq!(Provenance::parse("verified"), Provenance::Verified);
    }

    #[test]
    fn unknown_tag_degrades_to_default() {
        assert_eq!(Provenance::parse("community_upload"), Provenance::Default);
        assert_eq!(Provenance::parse(""), Provenance::Default);
    }

    #[test]
    fn weights_are_ordered_by_trust() {
        assert!(Provenance::GroundTruth.weight() > Provenance::Corrected.weight());
        assert!(Provenance::Corrected.weight() > Provenance::Verified.weight());
        assert!(Provenance::Verified.weight() > Provenance::Unreviewed.weight());
        assert!(Provenance::Unreviewed.weight() > Provenance::Default.weight());
    }
}
