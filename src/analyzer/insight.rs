use crate::analyzer::models::{CoreRecord, CoreType, Insights, Profile, ThreadingModel};

/// Absolute difference in activity percent that tips the classification
/// away from `Balanced`.
const DOMINANCE_THRESHOLD: f64 = 10.0;

/// Derives threading insights from a profile's core records.
///
/// Pure function of `core_records`. An empty P-core or E-core subset
/// produces a NaN activity average (division by zero, not guarded);
/// unset frequencies count as zero in the sum while the divisor stays the
/// subset size, so partially missing frequency data skews the average
/// toward zero. Both behaviors are relied on downstream.
pub fn compute_insights(profile: &Profile) -> Insights {
    let p_cores: Vec<&CoreRecord> = profile
        .core_records
        .iter()
        .filter(|c| c.core_type == CoreType::PCore)
        .collect();
    let e_cores: Vec<&CoreRecord> = profile
        .core_records
        .iter()
        .filter(|c| c.core_type == CoreType::ECore)
        .collect();

    let p_activity = activity_avg(&p_cores);
    let e_activity = activity_avg(&e_cores);
    let p_freq = frequency_avg(&p_cores);
    let e_freq = frequency_avg(&e_cores);

    // The divisor substitution applies only to an exact-zero average; a
    // NaN average propagates into the ratio untouched.
    let divisor = if e_activity == 0.0 { 1.0 } else { e_activity };
    let threading_ratio = p_activity / divisor;

    // Classification uses the raw, unrounded averages. NaN comparisons are
    // false, so a profile without both core classes lands on Balanced.
    let threading_model = if p_activity > e_activity + DOMINANCE_THRESHOLD {
        ThreadingModel::PCoreDominant
    } else if e_activity > p_activity + DOMINANCE_THRESHOLD {
        ThreadingModel::ECoreDominant
    } else {
        ThreadingModel::Balanced
    };

    Insights {
        p_core_activity_avg: p_activity,
        e_core_activity_avg: e_activity,
        p_core_freq_avg: p_freq,
        e_core_freq_avg: e_freq,
        threading_ratio,
        threading_model,
    }
}

fn activity_avg(cores: &[&CoreRecord]) -> f64 {
    let sum: f64 = cores.iter().map(|c| c.active_residency_percent).sum();
    sum / cores.len() as f64
}

fn frequency_avg(cores: &[&CoreRecord]) -> f64 {
    let sum: f64 = cores
        .iter()
        .map(|c| f64::from(c.frequency_mhz.unwrap_or(0)))
        .sum();
    sum / cores.len() as f64
}
