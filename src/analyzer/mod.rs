/// User-facing activity log with timestamped entries
mod activity_log;
/// Sequential batch ingestion of report files into a group
pub mod batch;
/// Bounded, deduplicated multi-profile comparison selection
pub mod comparison;
/// Error types for selection, store, and batch operations
pub mod error;
/// Threading-ratio heatmap classification
pub mod heatmap;
/// Derivation of threading insights from a parsed profile
pub mod insight;
/// Data structures for profiles, cores, insights, and groups
pub mod models;
/// Tolerant SoC Watch report parser
pub mod parser;
/// Versioned JSON persistence of the group partitions
pub mod storage;
/// Group/archive management with cascading reference cleanup
pub mod store;

pub use activity_log::ActivityLog;
