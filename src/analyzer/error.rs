use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Top-level error for batch ingestion and persistence.
///
/// Malformed report content is never an error: the parser degrades to
/// defaults per field. This taxonomy covers the failures that actually
/// abort an operation.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rejected comparison-selection operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("maximum {max} profiles can be compared at once; deselect one first", max = crate::analyzer::comparison::MAX_COMPARED_PROFILES)]
    CapacityExceeded,
}

/// Failed group-store lookups and partition moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("group '{0}' not found")]
    GroupNotFound(String),

    #[error("profile index {index} out of bounds for group '{group}'")]
    ProfileIndex { group: String, index: usize },

    #[error("a group named '{0}' already exists in the destination partition")]
    NameCollision(String),
}
