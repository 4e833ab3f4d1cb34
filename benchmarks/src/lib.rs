//! Shared helpers for waypoint benchmark suites.

use waypoint_harness::runner::{run_catalog, RunRecordV1};
use waypoint_harness::worlds::maze::{MazeNavigation, Position};
use waypoint_harness::worlds::maze_catalog::{all_cases, MazeCase};
use waypoint_harness::worlds::mazes::open_maze;
use waypoint_harness::worlds::sliding_puzzle::SlidingPuzzle;
use waypoint_search::{SearchPolicyV1, Strategy};

/// Every catalog case.
///
/// # Panics
///
/// Panics if the catalog fails to build. Benchmark setup failures are fatal.
#[must_use]
pub fn catalog() -> Vec<MazeCase> {
    all_cases().expect("catalog builds")
}

/// Open `size` x `size` field, corner to corner: the widest frontier the
/// maze world can produce.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn open_field(size: usize) -> MazeNavigation {
    open_maze(size, Position::new(0, 0), Position::new(size - 1, size - 1))
        .problem()
        .expect("open maze builds")
}

/// The hardest eight-puzzle: 31 moves from the canonical goal.
///
/// # Panics
///
/// Panics if the board is invalid.
#[must_use]
pub fn hard_eight_puzzle() -> SlidingPuzzle {
    SlidingPuzzle::to_canonical_goal(&[vec![8, 6, 7], vec![2, 5, 4], vec![3, 0, 1]])
        .expect("puzzle builds")
}

/// Records of every strategy over the whole catalog, for report benches.
///
/// # Panics
///
/// Panics if a run fails.
#[must_use]
pub fn catalog_records() -> Vec<RunRecordV1> {
    run_catalog(&catalog(), &Strategy::ALL, &SearchPolicyV1::default()).expect("catalog run")
}
