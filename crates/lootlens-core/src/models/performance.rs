use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Accumulated match history for one template.
///
/// Created lazily on the first recorded result, mutated incrementally,
/// cleared only by explicit reset or snapshot import.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemplatePerformance {
    pub template_id: String,
    /// The identity this template is supposed to recognize.
    pub identity_id: String,
    pub usage_count: u64,
    pub success_count: u64,
    pub failure_count: u64,
    /// Running average of recorded confidences, stored as given.
    pub avg_confidence: f64,
    /// Open mapping: other identity id → times this template matched it instead.
    #[serde(default)]
    pub confusions: HashMap<String, u64>,
    pub last_updated: DateTime<Utc>,
}

impl TemplatePerformance {
    pub fn new(
        template_id: impl Into<String>,
        identity_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            identity_id: identity_id.into(),
            usage_count: 0,
            success_count: 0,
            failure_count: 0,
            avg_confidence: 0.0,
            confusions: HashMap::new(),
            last_updated: now,
        }
    }

    /// Historical success rate (0 with no usage).
    pub fn success_rate(&self) -> f64 {
        if self.usage_count == 0 {
            0.0
        } else {
            self.success_count as f64 / self.usage_count as f64
        }
    }

    /// Total confusion count across all other identities.
    pub fn total_confusions(&self) -> u64 {
        self.confusions.values().sum()
    }
}

/// Why a template is on the skip-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SkipReason {
    /// Excluded by hand; persists until explicitly removed.
    Manual,
    LowSuccessRate,
    HighConfusion,
}

/// One skip-list entry. Automatic membership is derivable from the
/// performance history; only manual entries are authoritative state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkipListEntry {
    pub template_id: String,
    pub identity_id: String,
    pub reason: SkipReason,
    /// Success rate at the time the entry was created.
    pub success_rate: f64,
    pub added_at: DateTime<Utc>,
}

/// Versioned export of ranker state. Import replaces, never merges.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PerformanceSnapshot {
    pub version: u32,
    #[serde(default)]
    pub performances: Vec<TemplatePerformance>,
    /// Manual skip entries only.
    #[serde(default)]
    pub skip_list: Vec<SkipListEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_is_zero_without_usage() {
        let perf = TemplatePerformance::new("t1", "sword", Utc::now());
        assert_eq!(perf.success_rate(), 0.0);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut perf = TemplatePerformance::new("t1", "sword", Utc::now());
        perf.usage_count = 4;
        perf.success_count = 3;
        perf.failure_count = 1;
        perf.avg_confidence = 0.82;
        perf.confusions.insert("axe".to_string(), 1);

        let snapshot = PerformanceSnapshot {
            version: 1,
            performances: vec![perf],
            skip_list: vec![],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PerformanceSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.version, 1);
        assert_eq!(back.performances.len(), 1);
        assert_eq!(back.performances[0].confusions.get("axe"), Some(&1));
    }

    #[test]
    fn snapshot_tolerates_missing_collections() {
        let back: PerformanceSnapshot = serde_json::from_str(r#"{"version":1}"#).unwrap();
        assert!(back.performances.is_empty());
        assert!(back.skip_list.is_empty());
    }
}
