//! Sample quality scoring from provenance and captured confidence.
//!
//! ```text
//! score = 0.5 + (sourceWeight − 1) × 0.3 + confidence × 0.1
//! ```
//!
//! Result is clamped to [0.0, 1.0]. Missing confidence contributes 0.

use lootlens_core::models::TrainingSample;

/// Quality score for one sample. Deterministic, no side effects.
pub fn score(sample: &TrainingSample) -> f64 {
    let weight = sample.provenance.weight();
    let confidence = sample.confidence.unwrap_or(0.0);
    (0.5 + (weight - 1.0) * 0.3 + confidence * 0.1).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootlens_core::models::Provenance;

    fn sample(provenance: Provenance, confidence: Option<f64>) -> TrainingSample {
        TrainingSample {
            identity_id: "sword".to_string(),
            provenance,
            confidence,
            resolution: None,
        }
    }

    #[test]
    fn ground_truth_outranks_default() {
        let gt = score(&sample(Provenance::GroundTruth, None));
        let unknown = score(&sample(Provenance::Default, None));
        assert!(gt > unknown);
    }

    #[test]
    fn missing_confidence_contributes_nothing() {
        let without = score(&sample(Provenance::Verified, None));
        let with = score(&sample(Provenance::Verified, Some(0.8)));
        assert_eq!(without, 0.5);
        assert!((with - 0.58).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_confidence_still_clamps() {
        assert_eq!(score(&sample(Provenance::GroundTruth, Some(50.0))), 1.0);
        assert_eq!(score(&sample(Provenance::Default, Some(-50.0))), 0.0);
    }
}
