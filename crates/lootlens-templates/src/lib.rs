//! # lootlens-templates
//!
//! Quality-scored template selection: source-quality scoring, resolution
//! affinity bonus, and diversity-aware candidate picking for one identity.

pub mod quality;
pub mod resolution;
pub mod selector;
pub mod summary;

pub use selector::{select_templates, weighted_match_score, SelectOptions, SelectedTemplate};
pub use summary::{summarize, TrainingSetSummary};
