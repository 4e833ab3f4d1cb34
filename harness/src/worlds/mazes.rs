//! Maze fixtures in the numeric grid format (see [`crate::worlds::maze`]).
//!
//! Each fixture is an initial/goal grid pair. Generated fixtures take the
//! start and end positions as `(row, col)`; a position outside the grid
//! leaves that grid without an agent, which [`MazeGrids::problem`] reports.

use crate::worlds::maze::{
    MazeError, MazeNavigation, Position, CELL_AGENT, CELL_IMPASSABLE, CELL_WALKABLE,
};

/// Rows of numeric cell codes.
pub type Grid = Vec<Vec<i8>>;

/// Initial and goal grids of one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrids {
    pub initial: Grid,
    pub goal: Grid,
}

impl MazeGrids {
    /// Validate the grids and build the navigation problem.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError`] if the grids are malformed.
    pub fn problem(&self) -> Result<MazeNavigation, MazeError> {
        MazeNavigation::from_grids(&self.initial, &self.goal)
    }

    /// Copy `terrain` twice and place the agent at `start` and `end`.
    fn with_agents(terrain: &Grid, start: Position, end: Position) -> Self {
        let mut initial = terrain.clone();
        let mut goal = terrain.clone();
        place_agent(&mut initial, start);
        place_agent(&mut goal, end);
        Self { initial, goal }
    }
}

fn place_agent(grid: &mut Grid, at: Position) {
    if let Some(cell) = grid.get_mut(at.row).and_then(|row| row.get_mut(at.col)) {
        *cell = CELL_AGENT;
    }
}

/// 3x3 starter maze; the only route is `east, south, south, east`.
#[must_use]
pub fn basic_maze() -> MazeGrids {
    MazeGrids {
        initial: vec![vec![2, 1, 0], vec![0, 1, 0], vec![0, 1, 1]],
        goal: vec![vec![1, 1, 0], vec![0, 1, 0], vec![0, 1, 2]],
    }
}

/// 5x5 maze whose goal sits in a pocket cut off from the start.
#[must_use]
pub fn goalless_maze() -> MazeGrids {
    MazeGrids {
        initial: vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 1, 0, 1],
            vec![1, 1, 2, 1, 0],
            vec![1, 0, 1, 0, 1],
            vec![1, 1, 1, 0, 1],
        ],
        goal: vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 1, 0, 1],
            vec![1, 1, 1, 1, 0],
            vec![1, 0, 1, 0, 1],
            vec![1, 1, 1, 0, 2],
        ],
    }
}

/// `size` x `size` grid where only the middle row and middle column are
/// walkable.
#[must_use]
pub fn cross_maze(size: usize, start: Position, end: Position) -> MazeGrids {
    let middle = size / 2;
    let terrain: Grid = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    if row == middle || col == middle {
                        CELL_WALKABLE
                    } else {
                        CELL_IMPASSABLE
                    }
                })
                .collect()
        })
        .collect();
    MazeGrids::with_agents(&terrain, start, end)
}

/// `size` x `size` grid where only the outer ring is walkable.
#[must_use]
pub fn border_maze(size: usize, start: Position, end: Position) -> MazeGrids {
    let last = size.saturating_sub(1);
    let terrain: Grid = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    if row == 0 || col == 0 || row == last || col == last {
                        CELL_WALKABLE
                    } else {
                        CELL_IMPASSABLE
                    }
                })
                .collect()
        })
        .collect();
    MazeGrids::with_agents(&terrain, start, end)
}

/// 5x5 maze with a deceptive eastern approach: heading toward the goal first
/// leads into a dead end, and the optimal 10-move route goes west.
#[must_use]
pub fn informed_maze() -> MazeGrids {
    let terrain: Grid = (0..5)
        .map(|row| {
            (0..5)
                .map(|col| match (row, col) {
                    (1, 1..) | (3, 1..=3) => CELL_IMPASSABLE,
                    _ => CELL_WALKABLE,
                })
                .collect()
        })
        .collect();
    MazeGrids::with_agents(&terrain, Position::new(4, 2), Position::new(0, 4))
}

/// `size` x `size` grid with no walls.
#[must_use]
pub fn open_maze(size: usize, start: Position, end: Position) -> MazeGrids {
    let terrain = vec![vec![CELL_WALKABLE; size]; size];
    MazeGrids::with_agents(&terrain, start, end)
}
