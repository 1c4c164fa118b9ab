use serde::{Deserialize, Serialize};

use crate::analyzer::models::Profile;

/// A named collection of profiles sharing a hardware or build configuration.
///
/// The name is unique within its partition (active or archived). The store
/// deletes a group as soon as its last profile is removed; a group never
/// persists with zero profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub profiles: Vec<Profile>,
    pub archived: bool,
}
