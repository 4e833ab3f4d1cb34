//! Binary that runs every strategy over the maze catalog and a sliding
//! puzzle, and prints deterministic output lines for cross-process
//! verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines (see source for format). Timings are never
//! printed.

use waypoint_harness::report::report_digest;
use waypoint_harness::runner::{run_case, run_catalog};
use waypoint_harness::worlds::maze_catalog::all_cases;
use waypoint_harness::worlds::sliding_puzzle::SlidingPuzzle;
use waypoint_search::{SearchPolicyV1, Strategy};

fn main() {
    let policy = SearchPolicyV1::default();
    let cases = all_cases().expect("catalog builds");
    let mut records = run_catalog(&cases, &Strategy::ALL, &policy).expect("catalog run failed");

    let puzzle = SlidingPuzzle::to_canonical_goal(&[vec![4, 1, 3], vec![7, 2, 6], vec![0, 5, 8]])
        .expect("puzzle builds");
    for strategy in [Strategy::BreadthFirst, Strategy::AStar] {
        let run = format!("{}_puzzle", strategy.label());
        records.push(run_case(run, &puzzle, strategy, &policy).expect("puzzle run failed"));
    }

    println!(
        "report_digest={}",
        report_digest(&records).expect("report digest")
    );
    println!("run_count={}", records.len());
    for record in &records {
        println!(
            "{}={}:{}:{}",
            record.run, record.termination, record.path_length, record.stats.expansions
        );
    }
}
