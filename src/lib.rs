//! Telemetry profile extraction and threading-insight engine for Intel SoC
//! Watch text reports.
//!
//! The crate turns one raw report into a per-core [`Profile`], derives
//! comparative P-core/E-core [`Insights`] from it, classifies threading
//! ratios for heatmap rendering, and manages grouped profile collections
//! with an active/archived partition, a bounded comparison selection, and
//! JSON persistence. Presentation (tables, charts, dialogs) is an external
//! consumer of these types; the crate has no UI of its own.

pub mod analyzer;

pub use analyzer::batch::ingest_files;
pub use analyzer::comparison::{ComparisonSelection, SelectionEntry, SelectionToggle};
pub use analyzer::error::{AnalyzerError, Result, SelectionError, StoreError};
pub use analyzer::heatmap::{classify, HeatmapColor};
pub use analyzer::insight::compute_insights;
pub use analyzer::models::{
    CoreRecord, CoreType, Group, Insights, Profile, ProfileMetadata, ThreadingModel,
};
pub use analyzer::parser::parse_report;
pub use analyzer::store::{FocusedProfile, GroupStore};
pub use analyzer::storage::StateStorage;
pub use analyzer::ActivityLog;
