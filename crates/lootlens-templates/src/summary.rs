//! Training-set coverage summary for diagnostics.

use std::collections::{HashMap, HashSet};

use lootlens_core::models::{Provenance, TrainingSample};

/// Coverage of one identity's training samples.
#[derive(Debug, Clone, Default)]
pub struct TrainingSetSummary {
    pub total: usize,
    pub by_provenance: HashMap<Provenance, usize>,
    /// Distinct well-formed source resolutions seen.
    pub distinct_resolutions: usize,
}

/// Summarize a sample collection (typically all samples for one identity).
pub fn summarize(samples: &[TrainingSample]) -> TrainingSetSummary {
    let mut by_provenance: HashMap<Provenance, usize> = HashMap::new();
    let mut resolutions: HashSet<&str> = HashSet::new();

    for sample in samples {
        *by_provenance.entry(sample.provenance).or_insert(0) += 1;
        if let Some(resolution) = sample.resolution.as_deref() {
            resolutions.insert(resolution);
        }
    }

    TrainingSetSummary {
        total: samples.len(),
        by_provenance,
        distinct_resolutions: resolutions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_provenance_and_resolution() {
        let mut a = TrainingSample::new("sword", Provenance::GroundTruth);
        a.resolution = Some("1920x1080".to_string());
        let mut b = TrainingSample::new("sword", Provenance::GroundTruth);
        b.resolution = Some("2560x1440".to_string());
        let mut c = TrainingSample::new("sword", Provenance::Unreviewed);
        c.resolution = Some("1920x1080".to_string());

        let summary = summarize(&[a, b, c]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_provenance.get(&Provenance::GroundTruth), Some(&2));
        assert_eq!(summary.by_provenance.get(&Provenance::Unreviewed), Some(&1));
        assert_eq!(summary.distinct_resolutions, 2);
    }

    #[test]
    fn empty_set_is_all_zeroes() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.by_provenance.is_empty());
        assert_eq!(summary.distinct_resolutions, 0);
    }
}
