use serde::{Deserialize, Serialize};

/// Core class reported by the telemetry tool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CoreType {
    PCore,
    ECore,
    Unknown,
}

impl CoreType {
    /// Human-readable label used by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            CoreType::PCore => "P-Core",
            CoreType::ECore => "E-Core",
            CoreType::Unknown => "Unknown",
        }
    }
}

/// Report-level metadata scanned best-effort from the header lines.
/// Absent fields stay `None` so consumers can tell "unknown" from "zero".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Collection duration in seconds
    pub duration: Option<f64>,
    /// CPU base operating frequency in MHz
    pub base_frequency_mhz: Option<u32>,
    /// Total core count reported by the tool
    pub total_cores: Option<usize>,
}

/// Residency and frequency data for a single core.
///
/// Created lazily the first time a core index shows up in the residency
/// section. `core_type` is resolved once from the profile's core-type map
/// and never re-derived afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreRecord {
    pub core_index: usize,
    pub core_type: CoreType,
    pub active_residency_percent: f64,
    pub cc6_residency_percent: f64,
    pub cc7_residency_percent: f64,
    pub frequency_mhz: Option<u32>,
}

impl CoreRecord {
    pub fn new(core_index: usize, core_type: CoreType) -> Self {
        Self {
            core_index,
            core_type,
            active_residency_percent: 0.0,
            cc6_residency_percent: 0.0,
            cc7_residency_percent: 0.0,
            frequency_mhz: None,
        }
    }
}
