use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analyzer::models::{CoreRecord, CoreType, Profile, ProfileMetadata};

/// Metadata markers are only looked for in the first lines of the report.
const METADATA_SCAN_WINDOW: usize = 50;

const DURATION_MARKER: &str = "Collection duration";
const BASE_FREQUENCY_MARKER: &str = "CPU Base Operating Frequency";
const TOTAL_CORES_MARKER: &str = "Total # of cores:";

const RESIDENCY_SECTION_TITLE: &str = "Core C-State Summary: Residency (Percentage and Time)";
const RESIDENCY_SECTION_END: &str = "Core C-State Summary: Total Samples";
const FREQUENCY_SECTION_TITLE: &str = "CPU P-State Average Frequency (excluding CPU idle time)";
const FREQUENCY_SECTION_END: &str = "CPU P-State/Frequency Summary";

static FLOAT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.?\d*)").unwrap());
static INT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").unwrap());
static CORE_TYPE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Package_0/Core_(\d+) = (LNC|SKT)").unwrap());
static FREQUENCY_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Core_(\d+).*?,\s*(\d+)").unwrap());
static COMPANION_TOOL_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"PTATMonitor.*").unwrap());

/// Parses one raw SoC Watch text report into a [`Profile`].
///
/// Never fails on malformed input: missing sections, missing metadata, and
/// unparseable numeric tokens degrade to empty/default fields. When a
/// marker label recurs, the last matching line wins for metadata and for
/// the core-type map, and the last matching row wins per residency bucket
/// per core.
pub fn parse_report(raw_text: &str, source_name: &str) -> Profile {
    let lines: Vec<&str> = raw_text.split('\n').collect();

    let name = derive_name(source_name);
    let metadata = scan_metadata(&lines);
    let core_type_map = scan_core_types(raw_text);
    let core_records = extract_residency(&lines, &metadata, &core_type_map);
    let frequencies = extract_frequencies(&lines);

    let mut profile = Profile {
        name,
        metadata,
        core_type_map,
        core_records,
        insights: None,
    };
    merge_frequencies(&mut profile, &frequencies);

    log::debug!(
        "parsed report '{}': {} core records, {} frequency entries",
        profile.name,
        profile.core_records.len(),
        frequencies.len()
    );

    profile
}

/// Strips a trailing `.csv` extension and any companion-tool suffix, then
/// trims whitespace.
fn derive_name(source_name: &str) -> String {
    let stem = source_name.strip_suffix(".csv").unwrap_or(source_name);
    COMPANION_TOOL_SUFFIX.replace(stem, "").trim().to_string()
}

/// Scans the first `min(50, lines)` lines for the three metadata markers.
/// No early exit: a recurring label overwrites the earlier value.
fn scan_metadata(lines: &[&str]) -> ProfileMetadata {
    let mut metadata = ProfileMetadata::default();

    for line in lines.iter().take(METADATA_SCAN_WINDOW.min(lines.len())) {
        if line.contains(DURATION_MARKER) {
            if let Some(caps) = FLOAT_TOKEN.captures(line) {
                if let Ok(duration) = caps[1].parse::<f64>() {
                    metadata.duration = Some(duration);
                }
            }
        }
        if line.contains(BASE_FREQUENCY_MARKER) {
            if let Some(caps) = INT_TOKEN.captures(line) {
                if let Ok(freq) = caps[1].parse::<u32>() {
                    metadata.base_frequency_mhz = Some(freq);
                }
            }
        }
        if line.contains(TOTAL_CORES_MARKER) {
            if let Some(caps) = INT_TOKEN.captures(line) {
                if let Ok(total) = caps[1].parse::<usize>() {
                    metadata.total_cores = Some(total);
                }
            }
        }
    }

    metadata
}

/// Builds the core-index → core-type reconciliation table from the entire
/// text. The last occurrence per core index wins.
fn scan_core_types(raw_text: &str) -> HashMap<usize, CoreType> {
    let mut map = HashMap::new();

    for caps in CORE_TYPE_LINE.captures_iter(raw_text) {
        if let Ok(core_index) = caps[1].parse::<usize>() {
            let core_type = if &caps[2] == "LNC" {
                CoreType::PCore
            } else {
                CoreType::ECore
            };
            map.insert(core_index, core_type);
        }
    }

    map
}

/// Extracts the residency section into per-core records.
///
/// The section body starts on the line after the title and runs until a
/// blank line or the terminator marker (exclusive). The first two body
/// lines are a header and are discarded. Records are created lazily on
/// first sight of a core index, with the type stamped once from the map.
fn extract_residency(
    lines: &[&str],
    metadata: &ProfileMetadata,
    core_type_map: &HashMap<usize, CoreType>,
) -> Vec<CoreRecord> {
    let mut records: Vec<CoreRecord> = Vec::new();

    let start = match lines.iter().position(|l| l.contains(RESIDENCY_SECTION_TITLE)) {
        Some(pos) => pos + 1,
        None => return records,
    };

    let mut section: Vec<&str> = Vec::new();
    for line in &lines[start..] {
        if line.trim().is_empty() || line.contains(RESIDENCY_SECTION_END) {
            break;
        }
        section.push(line);
    }

    if section.len() <= 2 {
        return records;
    }

    // Without a total-core count there is nothing to index into the rows.
    let total_cores = metadata.total_cores.unwrap_or(0);
    let mut positions: HashMap<usize, usize> = HashMap::new();

    for row in &section[2..] {
        let values: Vec<&str> = row.split(',').collect();
        let state = values.first().map(|v| v.trim()).unwrap_or("");
        if state.is_empty() || state.contains("---") {
            continue;
        }

        for core_index in 0..total_cores {
            let residency = values
                .get(core_index + 1)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(0.0);

            let pos = *positions.entry(core_index).or_insert_with(|| {
                let core_type = core_type_map
                    .get(&core_index)
                    .copied()
                    .unwrap_or(CoreType::Unknown);
                records.push(CoreRecord::new(core_index, core_type));
                records.len() - 1
            });

            let record = &mut records[pos];
            if state.contains("CC0") || state.contains("CC1") {
                record.active_residency_percent = residency;
            } else if state.contains("CC6") {
                record.cc6_residency_percent = residency;
            } else if state.contains("CC7") {
                record.cc7_residency_percent = residency;
            }
        }
    }

    records
}

/// Collects `(core_index, frequency_mhz)` pairs from the frequency section.
fn extract_frequencies(lines: &[&str]) -> Vec<(usize, u32)> {
    let mut frequencies = Vec::new();

    let start = match lines.iter().position(|l| l.contains(FREQUENCY_SECTION_TITLE)) {
        Some(pos) => pos + 1,
        None => return frequencies,
    };

    for line in &lines[start..] {
        if line.trim().is_empty() || line.contains(FREQUENCY_SECTION_END) {
            break;
        }
        if let Some(caps) = FREQUENCY_LINE.captures(line) {
            if let (Ok(core_index), Ok(freq)) = (caps[1].parse::<usize>(), caps[2].parse::<u32>()) {
                frequencies.push((core_index, freq));
            }
        }
    }

    frequencies
}

/// Attaches the first matching frequency entry to each record; cores
/// without one keep `frequency_mhz` unset.
fn merge_frequencies(profile: &mut Profile, frequencies: &[(usize, u32)]) {
    for record in &mut profile.core_records {
        if let Some(&(_, freq)) = frequencies.iter().find(|(idx, _)| *idx == record.core_index) {
            record.frequency_mhz = Some(freq);
        }
    }
}
