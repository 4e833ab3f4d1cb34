//! Report lock tests: CSV and JSON files written from catalog runs.

use waypoint_harness::report::{report_digest, write_csv_file, write_json_file, CSV_HEADER};
use waypoint_harness::runner::run_catalog;
use waypoint_harness::worlds::maze_catalog::{all_cases, case};
use waypoint_search::{SearchPolicyV1, Strategy};

#[test]
fn csv_report_lists_every_run_in_catalog_order() {
    let cases = vec![case(1).unwrap(), case(2).unwrap(), case(11).unwrap()];
    let records = run_catalog(&cases, &Strategy::ALL, &SearchPolicyV1::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("searchResults.csv");
    write_csv_file(&path, &records).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER.join(",").as_str()));
    let runs: Vec<&str> = lines.map(|l| l.split(',').next().unwrap_or("")).collect();
    assert_eq!(
        runs,
        vec![
            "DFS_1", "BFS_1", "A*_1", "Greedy_1", "Bidirectional_1", "DFS_2", "BFS_2", "A*_2",
            "Greedy_2", "Bidirectional_2", "DFS_11", "BFS_11", "A*_11", "Greedy_11",
            "Bidirectional_11",
        ]
    );
}

#[test]
fn json_report_digest_is_stable_across_files() {
    let cases = all_cases().unwrap();
    let policy = SearchPolicyV1::default();
    let dir = tempfile::tempdir().unwrap();

    let mut digests = Vec::new();
    for name in ["a.json", "b.json"] {
        let records = run_catalog(&cases, &[Strategy::AStar], &policy).unwrap();
        let path = dir.path().join(name);
        write_json_file(&path, &records).unwrap();
        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report["digest"], report_digest(&records).unwrap().as_str());
        assert_eq!(report["runs"].as_array().map(Vec::len), Some(11));
        digests.push(report["digest"].clone());
    }
    assert_eq!(digests[0], digests[1]);
}

#[test]
fn json_report_records_termination_and_counts() {
    let cases = vec![case(2).unwrap()];
    let records = run_catalog(&cases, &[Strategy::BreadthFirst], &SearchPolicyV1::default())
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("goalless.json");
    write_json_file(&path, &records).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let run = &report["runs"][0];
    assert_eq!(run["run"], "BFS_2");
    assert_eq!(run["termination"], "frontier_exhausted");
    assert_eq!(run["path_length"], 0);
    assert!(run["path_cost"].is_null());
    assert!(run["stats"]["expansions"].as_u64().unwrap_or(0) > 0);
}
