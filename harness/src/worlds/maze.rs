//! `MazeNavigation`: an agent moving through a rectangular grid.
//!
//! States are agent positions. Actions are the four compass moves, offered
//! in the fixed order `north, east, south, west` and only toward cells that
//! are inside the grid and passable. Every move costs 1; the heuristic is the
//! Manhattan distance to the goal position.
//!
//! Grids can be given in the numeric form `0` impassable, `1` walkable,
//! `2` agent, `-1` rough terrain (walkable, same unit cost), as a pair of
//! grids that place the agent at the start and at the goal respectively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use waypoint_search::contract::Problem;

/// Numeric cell codes of the grid input format.
pub const CELL_IMPASSABLE: i8 = 0;
pub const CELL_WALKABLE: i8 = 1;
pub const CELL_AGENT: i8 = 2;
pub const CELL_ROUGH: i8 = -1;

/// Error building a maze from grids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("{grid} grid is empty")]
    EmptyGrid { grid: &'static str },
    #[error("{grid} grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        grid: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid dimensions differ: initial {initial_rows}x{initial_cols}, goal {goal_rows}x{goal_cols}")]
    DimensionMismatch {
        initial_rows: usize,
        initial_cols: usize,
        goal_rows: usize,
        goal_cols: usize,
    },
    #[error("{grid} grid has unknown cell value {value} at ({row}, {col})")]
    UnknownCell {
        grid: &'static str,
        row: usize,
        col: usize,
        value: i8,
    },
    #[error("{grid} grid must place exactly one agent, found {found}")]
    AgentCount { grid: &'static str, found: usize },
    #[error("terrain differs between initial and goal grids at ({row}, {col})")]
    TerrainMismatch { row: usize, col: usize },
    #[error("{role} position {position} is outside the grid or impassable")]
    BlockedPosition {
        role: &'static str,
        position: Position,
    },
}

/// Terrain of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Impassable,
    Walkable,
}

impl Cell {
    #[must_use]
    pub fn is_passable(self) -> bool {
        self == Self::Walkable
    }
}

/// Grid coordinate, row-major with `(0, 0)` in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn manhattan(self, other: Self) -> u64 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u64
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A compass move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Action order offered by grid worlds.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The neighbouring position in this direction, if it lies inside a
    /// `rows` x `cols` grid.
    #[must_use]
    pub fn step(self, from: Position, rows: usize, cols: usize) -> Option<Position> {
        let Position { row, col } = from;
        let next = match self {
            Self::North => Position::new(row.checked_sub(1)?, col),
            Self::East => Position::new(row, col + 1),
            Self::South => Position::new(row + 1, col),
            Self::West => Position::new(row, col.checked_sub(1)?),
        };
        (next.row < rows && next.col < cols).then_some(next)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An action label that is not a compass move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction `{0}`")]
pub struct DirectionParseError(pub String);

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| DirectionParseError(s.to_string()))
    }
}

/// Maze navigation problem over a fixed terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeNavigation {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
}

impl MazeNavigation {
    /// Build from a terrain grid and explicit start/goal positions.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError`] if the terrain is empty or ragged, or if either
    /// position is outside the grid or impassable.
    pub fn new(terrain: &[Vec<Cell>], start: Position, goal: Position) -> Result<Self, MazeError> {
        let cols = checked_width("terrain", terrain)?;
        let maze = Self {
            rows: terrain.len(),
            cols,
            cells: terrain.iter().flatten().copied().collect(),
            start,
            goal,
        };
        if !maze.is_open(start) {
            return Err(MazeError::BlockedPosition {
                role: "start",
                position: start,
            });
        }
        if !maze.is_open(goal) {
            return Err(MazeError::BlockedPosition {
                role: "goal",
                position: goal,
            });
        }
        Ok(maze)
    }

    /// Build from the numeric initial/goal grid pair.
    ///
    /// Both grids must be rectangular with the same dimensions, contain
    /// exactly one agent cell each, and agree on terrain everywhere once the
    /// agent cells are read as walkable.
    ///
    /// # Errors
    ///
    /// Returns the first [`MazeError`] found.
    pub fn from_grids(initial: &[Vec<i8>], goal: &[Vec<i8>]) -> Result<Self, MazeError> {
        let (initial_terrain, start) = parse_grid("initial", initial)?;
        let (goal_terrain, goal_position) = parse_grid("goal", goal)?;
        let (rows, cols) = (initial_terrain.len(), initial.first().map_or(0, Vec::len));
        let (goal_rows, goal_cols) = (goal_terrain.len(), goal.first().map_or(0, Vec::len));
        if (rows, cols) != (goal_rows, goal_cols) {
            return Err(MazeError::DimensionMismatch {
                initial_rows: rows,
                initial_cols: cols,
                goal_rows,
                goal_cols,
            });
        }
        for (row, (a, b)) in initial_terrain.iter().zip(&goal_terrain).enumerate() {
            if let Some(col) = a.iter().zip(b).position(|(x, y)| x != y) {
                return Err(MazeError::TerrainMismatch { row, col });
            }
        }
        Self::new(&initial_terrain, start, goal_position)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Terrain at `position`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        self.cells.get(position.row * self.cols + position.col).copied()
    }

    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_passable)
    }

    /// Number of passable cells.
    #[must_use]
    pub fn open_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Where a move leads, if it is legal from `from`.
    #[must_use]
    pub fn neighbor(&self, from: Position, direction: Direction) -> Option<Position> {
        direction
            .step(from, self.rows, self.cols)
            .filter(|&next| self.is_open(next))
    }

    /// Apply `moves` from `from`, returning the final position, or `None` at
    /// the first illegal move.
    #[must_use]
    pub fn walk<I>(&self, from: Position, moves: I) -> Option<Position>
    where
        I: IntoIterator<Item = Direction>,
    {
        moves
            .into_iter()
            .try_fold(from, |at, direction| self.neighbor(at, direction))
    }

    /// Text drawing: `S` start, `G` goal, `#` impassable, `.` walkable.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&[])
    }

    /// Cells `path` moves through, the start excluded, or `None` if it does
    /// not lead from the start to the goal.
    ///
    /// A bidirectional result ends with a backward leg whose labels name the
    /// inverse of each move. Every split point is tried, longest forward leg
    /// first, with the labels after the split replayed inverted; a plain
    /// forward path therefore resolves at the full length.
    #[must_use]
    pub fn route(&self, path: &[String]) -> Option<Vec<Position>> {
        let moves = path
            .iter()
            .map(|label| label.parse::<Direction>())
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        (0..=moves.len()).rev().find_map(|split| {
            let (forward, backward) = moves.split_at(split);
            let mut at = self.start;
            let mut cells = Vec::with_capacity(moves.len());
            for direction in forward
                .iter()
                .copied()
                .chain(backward.iter().map(|d| d.opposite()))
            {
                at = self.neighbor(at, direction)?;
                cells.push(at);
            }
            (at == self.goal).then_some(cells)
        })
    }

    /// Like [`MazeNavigation::render`], with `*` on every cell of `path`'s
    /// [`route`](MazeNavigation::route). A path that does not reach the goal
    /// draws no overlay.
    #[must_use]
    pub fn render_path(&self, path: &[String]) -> String {
        self.render_with(&self.route(path).unwrap_or_default())
    }

    fn render_with(&self, visited: &[Position]) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let here = Position::new(row, col);
                let glyph = if here == self.start {
                    'S'
                } else if here == self.goal {
                    'G'
                } else if visited.contains(&here) {
                    '*'
                } else if self.is_open(here) {
                    '.'
                } else {
                    '#'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

fn checked_width<T>(grid: &'static str, rows: &[Vec<T>]) -> Result<usize, MazeError> {
    let cols = rows.first().map_or(0, Vec::len);
    if cols == 0 {
        return Err(MazeError::EmptyGrid { grid });
    }
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(MazeError::RaggedRow {
            grid,
            row,
            expected: cols,
            found: r.len(),
        });
    }
    Ok(cols)
}

fn parse_grid(
    grid: &'static str,
    values: &[Vec<i8>],
) -> Result<(Vec<Vec<Cell>>, Position), MazeError> {
    checked_width(grid, values)?;
    let mut agents = Vec::new();
    let mut terrain = Vec::with_capacity(values.len());
    for (row, line) in values.iter().enumerate() {
        let mut cells = Vec::with_capacity(line.len());
        for (col, &value) in line.iter().enumerate() {
            let cell = match value {
                CELL_IMPASSABLE => Cell::Impassable,
                CELL_WALKABLE | CELL_ROUGH => Cell::Walkable,
                CELL_AGENT => {
                    agents.push(Position::new(row, col));
                    Cell::Walkable
                }
                _ => {
                    return Err(MazeError::UnknownCell {
                        grid,
                        row,
                        col,
                        value,
                    })
                }
            };
            cells.push(cell);
        }
        terrain.push(cells);
    }
    match agents.as_slice() {
        [agent] => Ok((terrain, *agent)),
        _ => Err(MazeError::AgentCount {
            grid,
            found: agents.len(),
        }),
    }
}

impl Problem for MazeNavigation {
    type State = Position;
    type Key = Position;

    fn initial_state(&self) -> &Position {
        &self.start
    }

    fn goal_state(&self) -> &Position {
        &self.goal
    }

    fn actions(&self, state: &Position) -> Vec<String> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.neighbor(*state, d).is_some())
            .map(|d| d.label().to_string())
            .collect()
    }

    fn result(&self, state: &Position, action: &str) -> Position {
        action
            .parse::<Direction>()
            .ok()
            .and_then(|d| self.neighbor(*state, d))
            .unwrap_or(*state)
    }

    fn action_cost(&self, _current: &Position, _action: &str, _next: &Position) -> u64 {
        1
    }

    fn state_key(&self, state: &Position) -> Position {
        *state
    }

    fn estimated_cost(&self, state: &Position) -> u64 {
        state.manhattan(self.goal)
    }
}
