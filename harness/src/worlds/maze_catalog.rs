//! The numbered maze catalog run by the `waypoint` CLI.
//!
//! Each case pairs a maze with what a correct search must report on it:
//! whether the goal is reachable and, if so, the fewest moves to it. The
//! maze, the expectations and the case number travel together so a run can
//! be checked without consulting anything else.

use serde::{Deserialize, Serialize};

use crate::worlds::maze::{MazeError, MazeNavigation, Position};
use crate::worlds::mazes::{
    basic_maze, border_maze, cross_maze, goalless_maze, informed_maze, MazeGrids,
};

/// Number of cases in the catalog (numbered `1..=CATALOG_SIZE`).
pub const CATALOG_SIZE: u32 = 11;

/// Side length of the generated cross and border mazes.
pub const LARGE_MAZE_SIZE: usize = 101;

/// Error looking up or building a catalog case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no maze numbered {number} (expected 1..={CATALOG_SIZE})")]
    UnknownMaze { number: u32 },
    #[error("maze {number} is malformed: {source}")]
    Malformed {
        number: u32,
        #[source]
        source: MazeError,
    },
}

/// What a correct search reports on a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeExpectations {
    /// Fewest moves from start to goal, `None` if the goal is unreachable.
    pub shortest_path: Option<usize>,
}

impl MazeExpectations {
    #[must_use]
    pub fn reachable(self) -> bool {
        self.shortest_path.is_some()
    }
}

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct MazeCase {
    pub number: u32,
    pub label: &'static str,
    pub problem: MazeNavigation,
    pub expectations: MazeExpectations,
}

/// Static description of a case before its grids are built.
struct CaseEntry {
    label: &'static str,
    grids: fn() -> MazeGrids,
    shortest_path: Option<usize>,
}

fn entry(label: &'static str, grids: fn() -> MazeGrids, shortest_path: Option<usize>) -> CaseEntry {
    CaseEntry {
        label,
        grids,
        shortest_path,
    }
}

fn lookup(number: u32) -> Option<CaseEntry> {
    const MID: usize = LARGE_MAZE_SIZE / 2;
    const LAST: usize = LARGE_MAZE_SIZE - 1;
    const CENTER: Position = Position::new(MID, MID);
    const LEFT_CENTER: Position = Position::new(MID, 0);

    let found = match number {
        1 => entry("basic", basic_maze, Some(4)),
        2 => entry("goalless", goalless_maze, None),
        3 => entry(
            "cross, goal at north end of spoke",
            || cross_maze(LARGE_MAZE_SIZE, CENTER, Position::new(0, MID)),
            Some(MID),
        ),
        4 => entry(
            "cross, goal at west end of spoke",
            || cross_maze(LARGE_MAZE_SIZE, CENTER, Position::new(MID, 0)),
            Some(MID),
        ),
        5 => entry(
            "cross, goal midway up north spoke",
            || cross_maze(LARGE_MAZE_SIZE, CENTER, Position::new(MID / 2, MID)),
            Some(MID - MID / 2),
        ),
        6 => entry(
            "cross, goal midway along west spoke",
            || cross_maze(LARGE_MAZE_SIZE, CENTER, Position::new(MID, MID / 2)),
            Some(MID - MID / 2),
        ),
        7 => entry(
            "border, goal at top center",
            || border_maze(LARGE_MAZE_SIZE, LEFT_CENTER, Position::new(0, MID)),
            Some(2 * MID),
        ),
        8 => entry(
            "border, goal at bottom center",
            || border_maze(LARGE_MAZE_SIZE, LEFT_CENTER, Position::new(LAST, MID)),
            Some((LAST - MID) + MID),
        ),
        9 => entry(
            "border, goal at upper left",
            || border_maze(LARGE_MAZE_SIZE, LEFT_CENTER, Position::new(0, 0)),
            Some(MID),
        ),
        10 => entry(
            "border, goal at lower left",
            || border_maze(LARGE_MAZE_SIZE, LEFT_CENTER, Position::new(LAST, 0)),
            Some(LAST - MID),
        ),
        11 => entry("informed", informed_maze, Some(10)),
        _ => return None,
    };
    Some(found)
}

/// Build catalog case `number`.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownMaze`] outside `1..=CATALOG_SIZE`.
pub fn case(number: u32) -> Result<MazeCase, CatalogError> {
    let entry = lookup(number).ok_or(CatalogError::UnknownMaze { number })?;
    let problem = (entry.grids)()
        .problem()
        .map_err(|source| CatalogError::Malformed { number, source })?;
    Ok(MazeCase {
        number,
        label: entry.label,
        problem,
        expectations: MazeExpectations {
            shortest_path: entry.shortest_path,
        },
    })
}

/// Every catalog case, in number order.
///
/// # Errors
///
/// Propagates the first [`CatalogError`].
pub fn all_cases() -> Result<Vec<MazeCase>, CatalogError> {
    (1..=CATALOG_SIZE).map(case).collect()
}
