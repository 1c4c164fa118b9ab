use socwatch_insights::{
    classify, compute_insights, parse_report, ComparisonSelection, CoreType, GroupStore,
    HeatmapColor, SelectionError, StateStorage, ThreadingModel,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const REPORT: &str = "\
Intel SoC Watch Summary Report
Collection duration: 120.50 (secs)
CPU Base Operating Frequency: 3700 MHz
Total # of cores: 6

Target topology:
Package_0/Core_0 = LNC
Package_0/Core_1 = LNC
Package_0/Core_2 = LNC
Package_0/Core_3 = SKT
Package_0/Core_4 = SKT
Package_0/Core_5 = SKT

Core C-State Summary: Residency (Percentage and Time)
C-State, CPU0, CPU1, CPU2, CPU3, CPU4, CPU5
-------, ----, ----, ----, ----, ----, ----
CC0, 58.0, 62.0, 60.0, 38.0, 42.0, 40.0
CC6, 22.0, 18.0, 20.0, 30.0, 28.0, 30.0
CC7, 10.0, 10.0, 10.0, 22.0, 20.0, 20.0

CPU P-State Average Frequency (excluding CPU idle time)
Package_0/Core_0, 5400
Package_0/Core_1, 5350
Package_0/Core_2, 5380
Package_0/Core_3, 4250
Package_0/Core_4, 4300
Package_0/Core_5, 4280
CPU P-State/Frequency Summary
";

#[test]
fn end_to_end_parse_insights_and_classification() {
    init_logging();

    let mut profile = parse_report(REPORT, "Cyberpunk2077 PTATMonitor_log.csv");
    assert_eq!(profile.name, "Cyberpunk2077");
    assert_eq!(profile.metadata.duration, Some(120.5));
    assert_eq!(profile.metadata.base_frequency_mhz, Some(3700));
    assert_eq!(profile.metadata.total_cores, Some(6));
    assert_eq!(profile.core_records.len(), 6);
    assert_eq!(profile.record(1).unwrap().core_type, CoreType::PCore);
    assert_eq!(profile.record(4).unwrap().core_type, CoreType::ECore);
    assert_eq!(profile.record(5).unwrap().frequency_mhz, Some(4280));

    let insights = compute_insights(&profile);
    assert_eq!(insights.p_core_activity_avg, 60.0);
    assert_eq!(insights.e_core_activity_avg, 40.0);
    assert_eq!(insights.threading_ratio, 1.5);
    assert_eq!(insights.threading_model, ThreadingModel::PCoreDominant);
    assert_eq!(insights.threading_ratio_display(), "1.50");
    assert_eq!(classify(insights.threading_ratio), HeatmapColor::Red);

    profile.attach_insights(insights);
    assert!(profile.insights.is_some());
}

#[test]
fn selection_and_store_lifecycle() {
    init_logging();

    let mut store = GroupStore::default();
    let mut selection = ComparisonSelection::default();

    for (group, source) in [
        ("sku-a", "game1.csv"),
        ("sku-a", "game2.csv"),
        ("sku-b", "game3.csv"),
        ("sku-b", "game4.csv"),
        ("sku-b", "game5.csv"),
    ] {
        let mut profile = parse_report(REPORT, source);
        let insights = compute_insights(&profile);
        profile.attach_insights(insights);
        store.add_profiles(group, vec![profile]);
    }
    assert_eq!(store.groups().len(), 2);

    selection.toggle("sku-a", "game1").unwrap();
    selection.toggle("sku-a", "game2").unwrap();
    selection.toggle("sku-b", "game3").unwrap();
    selection.toggle("sku-b", "game4").unwrap();
    assert_eq!(
        selection.toggle("sku-b", "game5"),
        Err(SelectionError::CapacityExceeded)
    );
    assert_eq!(selection.len(), 4);

    // Removing a selected profile cascades into the selection.
    store.set_focused("sku-a", "game1");
    store.remove_profile(&mut selection, "sku-a", 0).unwrap();
    assert!(!selection.contains("sku-a", "game1"));
    assert!(store.focused().is_none());
    assert_eq!(selection.len(), 3);

    // Archiving clears that group's remaining selection entries.
    store.archive(&mut selection, "sku-b").unwrap();
    assert!(selection.entries().iter().all(|e| e.group_name != "sku-b"));

    // Persisted shape survives a JSON round trip.
    let json = serde_json::to_string_pretty(&store.to_storage()).unwrap();
    let restored: StateStorage = serde_json::from_str(&json).unwrap();
    let restored_store = GroupStore::from_storage(restored);
    assert_eq!(restored_store.groups().len(), 1);
    assert_eq!(restored_store.archived_groups().len(), 1);
    assert!(restored_store.archived_groups()[0].archived);
    assert_eq!(
        restored_store.archived_groups()[0].profiles[0]
            .insights
            .as_ref()
            .unwrap()
            .threading_model,
        ThreadingModel::PCoreDominant
    );
}
