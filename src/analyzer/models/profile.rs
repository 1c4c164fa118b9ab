use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analyzer::models::{CoreRecord, CoreType, Insights, ProfileMetadata};

/// Structured per-core performance profile built from one raw report.
///
/// `core_records` holds at most one record per core index, in the order the
/// indices were first observed during residency parsing. Once constructed a
/// profile is immutable except for the one-time attachment of insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Name derived from the source identifier
    pub name: String,
    pub metadata: ProfileMetadata,
    /// Reconciliation table used to stamp each record's core type
    pub core_type_map: HashMap<usize, CoreType>,
    pub core_records: Vec<CoreRecord>,
    /// Computed and attached after parsing, not during
    pub insights: Option<Insights>,
}

impl Profile {
    /// Attaches insights once; later calls leave the original in place.
    pub fn attach_insights(&mut self, insights: Insights) {
        if self.insights.is_none() {
            self.insights = Some(insights);
        }
    }

    /// Looks up the record for a core index, if one was observed.
    pub fn record(&self, core_index: usize) -> Option<&CoreRecord> {
        self.core_records.iter().find(|r| r.core_index == core_index)
    }
}
