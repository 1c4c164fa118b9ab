use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyzer::error::AnalyzerError;
use crate::analyzer::models::Group;

/// Current version of the persisted state schema.
pub const CURRENT_STATE_VERSION: u32 = 1;

/// Serializable snapshot of the two group partitions.
///
/// Loading is tolerant: an unreadable file, a parse failure, or an
/// unrecognized version all fall back to an empty default rather than
/// surfacing an error to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateStorage {
    /// Schema version, checked before the full parse
    pub version: u32,
    pub groups: Vec<Group>,
    pub archived_groups: Vec<Group>,
}

impl Default for StateStorage {
    fn default() -> Self {
        Self {
            version: CURRENT_STATE_VERSION,
            groups: Vec::new(),
            archived_groups: Vec::new(),
        }
    }
}

impl StateStorage {
    pub fn new(groups: Vec<Group>, archived_groups: Vec<Group>) -> Self {
        Self {
            version: CURRENT_STATE_VERSION,
            groups,
            archived_groups,
        }
    }

    /// Loads persisted state from a JSON file, falling back to an empty
    /// default when the file is missing, unparseable, or of an unknown
    /// version.
    pub fn load_state(path: &Path) -> StateStorage {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|data| Self::parse_state(&data))
            .unwrap_or_default()
    }

    fn parse_state(data: &str) -> Option<StateStorage> {
        #[derive(Deserialize)]
        struct VersionCheck {
            version: Option<u32>,
        }

        let check: VersionCheck = serde_json::from_str(data).ok()?;
        match check.version {
            Some(CURRENT_STATE_VERSION) => serde_json::from_str(data).ok(),
            _ => {
                log::warn!("unrecognized state version {:?}, starting empty", check.version);
                None
            }
        }
    }

    /// Writes the state as pretty JSON.
    pub fn save_to_path(&self, path: &Path) -> Result<(), AnalyzerError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Best-effort save; failures are logged and otherwise ignored.
    pub fn save_state(&self, path: &Path) {
        if let Err(e) = self.save_to_path(path) {
            log::warn!("failed to save state to {}: {e}", path.display());
        }
    }
}
