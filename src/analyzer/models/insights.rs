use serde::{Deserialize, Serialize};

/// Workload classification derived from the activity averages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThreadingModel {
    PCoreDominant,
    ECoreDominant,
    Balanced,
}

impl ThreadingModel {
    pub fn label(&self) -> &'static str {
        match self {
            ThreadingModel::PCoreDominant => "P-Core Dominant",
            ThreadingModel::ECoreDominant => "E-Core Dominant",
            ThreadingModel::Balanced => "Balanced",
        }
    }
}

/// Threading-behavior metrics derived from a profile's core records.
///
/// Raw values are stored unrounded; classification and ratio math always
/// use the raw fields. The `*_display` accessors round for presentation
/// only. An empty P-core or E-core subset leaves its activity average as
/// NaN, which consumers are expected to detect and handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Mean active residency over P-cores, percent
    pub p_core_activity_avg: f64,
    /// Mean active residency over E-cores, percent
    pub e_core_activity_avg: f64,
    /// Mean frequency over P-cores, MHz (unset frequencies count as 0)
    pub p_core_freq_avg: f64,
    /// Mean frequency over E-cores, MHz (unset frequencies count as 0)
    pub e_core_freq_avg: f64,
    /// P-core activity divided by E-core activity
    pub threading_ratio: f64,
    pub threading_model: ThreadingModel,
}

impl Insights {
    pub fn p_core_activity_display(&self) -> String {
        format!("{:.1}", self.p_core_activity_avg)
    }

    pub fn e_core_activity_display(&self) -> String {
        format!("{:.1}", self.e_core_activity_avg)
    }

    pub fn p_core_freq_display(&self) -> String {
        format!("{:.0}", self.p_core_freq_avg)
    }

    pub fn e_core_freq_display(&self) -> String {
        format!("{:.0}", self.e_core_freq_avg)
    }

    pub fn threading_ratio_display(&self) -> String {
        format!("{:.2}", self.threading_ratio)
    }
}
