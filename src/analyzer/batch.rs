use std::path::PathBuf;

use crate::analyzer::error::Result;
use crate::analyzer::insight::compute_insights;
use crate::analyzer::parser::parse_report;
use crate::analyzer::store::GroupStore;
use crate::analyzer::ActivityLog;

/// Ingests a batch of report files into one group, strictly in the given
/// order.
///
/// Each `.csv` file is read, parsed, enriched with insights, and appended
/// to the named group before the next file is touched; other extensions
/// are skipped. An unreadable file aborts the batch with an I/O error, but
/// profiles appended before the failure stay committed (processing is
/// sequential, not transactional). Returns the number of profiles
/// ingested.
pub fn ingest_files(
    store: &mut GroupStore,
    activity_log: &mut ActivityLog,
    group_name: &str,
    paths: &[PathBuf],
) -> Result<usize> {
    let mut ingested = 0;

    for path in paths {
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            log::debug!("skipping non-report file {}", path.display());
            continue;
        }

        let raw_text = std::fs::read_to_string(path).map_err(|e| {
            activity_log.add_entry(format!(
                "Failed to parse files: could not read {}",
                path.display()
            ));
            e
        })?;

        let source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let mut profile = parse_report(&raw_text, &source_name);
        let insights = compute_insights(&profile);
        profile.attach_insights(insights);

        activity_log.add_entry(format!(
            "Parsed '{}' into group '{}' ({} cores)",
            profile.name,
            group_name,
            profile.core_records.len()
        ));
        store.add_profiles(group_name, vec![profile]);
        ingested += 1;
    }

    Ok(ingested)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(active_p: f64, active_e: f64) -> String {
        [
            "Total # of cores: 2".to_string(),
            "Package_0/Core_0 = LNC".to_string(),
            "Package_0/Core_1 = SKT".to_string(),
            "Core C-State Summary: Residency (Percentage and Time)".to_string(),
            "C-State, CPU0, CPU1".to_string(),
            "-------, ----, ----".to_string(),
            format!("CC0, {active_p}, {active_e}"),
            "".to_string(),
        ]
        .join("\n")
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("socwatch-batch-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_ingest_appends_in_caller_order() {
        let dir = temp_dir("order");
        let a = dir.join("alpha.csv");
        let b = dir.join("beta.csv");
        std::fs::write(&a, report(60.0, 40.0)).unwrap();
        std::fs::write(&b, report(30.0, 50.0)).unwrap();

        let mut store = GroupStore::default();
        let mut log = ActivityLog::default();
        let count = ingest_files(&mut store, &mut log, "sku-a", &[b.clone(), a.clone()]).unwrap();

        assert_eq!(count, 2);
        let group = store.find_group("sku-a").unwrap();
        let names: Vec<&str> = group.profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "alpha"]);
        assert!(group.profiles.iter().all(|p| p.insights.is_some()));
        assert_eq!(log.entries.len(), 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_non_csv_paths_are_skipped() {
        let dir = temp_dir("skip");
        let txt = dir.join("notes.txt");
        std::fs::write(&txt, "not a report").unwrap();

        let mut store = GroupStore::default();
        let mut log = ActivityLog::default();
        let count = ingest_files(&mut store, &mut log, "sku-a", &[txt]).unwrap();

        assert_eq!(count, 0);
        assert!(store.groups().is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unreadable_file_aborts_but_keeps_prior_commits() {
        let dir = temp_dir("abort");
        let good = dir.join("good.csv");
        std::fs::write(&good, report(60.0, 40.0)).unwrap();
        let missing = dir.join("missing.csv");
        let never = dir.join("never.csv");
        std::fs::write(&never, report(10.0, 10.0)).unwrap();

        let mut store = GroupStore::default();
        let mut log = ActivityLog::default();
        let result = ingest_files(&mut store, &mut log, "sku-a", &[good, missing, never]);

        assert!(result.is_err());
        // The file before the failure stays committed, the one after is
        // never reached.
        assert_eq!(store.find_group("sku-a").unwrap().profiles.len(), 1);
        assert!(log.entries.iter().any(|e| e.contains("Failed to parse files")));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
