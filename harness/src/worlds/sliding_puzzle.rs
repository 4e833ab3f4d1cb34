//! `SlidingPuzzle`: the n×m sliding-tile puzzle.
//!
//! Tiles are numbered `1..n*m`, the blank is `0`. An action names the
//! direction the blank moves (`north, east, south, west`, in that order),
//! swapping places with the neighbouring tile. Unit cost. The heuristic sums
//! the Manhattan distances of the non-blank tiles to their goal cells, which
//! never overestimates.

use std::fmt;

use waypoint_search::contract::Problem;

use crate::worlds::maze::{Direction, Position};

/// Error building a puzzle from boards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("{board} board is empty")]
    Empty { board: &'static str },
    #[error("{board} board row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        board: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("boards differ in shape: initial {initial:?}, goal {goal:?}")]
    ShapeMismatch {
        initial: (usize, usize),
        goal: (usize, usize),
    },
    #[error("{board} board is not a permutation of 0..{size}")]
    NotAPermutation { board: &'static str, size: usize },
}

/// One arrangement of the tiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cols: usize,
    tiles: Vec<u16>,
    blank: usize,
}

impl Board {
    /// Build from rows of tile numbers.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if the rows are empty or ragged, or the tiles
    /// are not exactly `0..rows*cols`.
    pub fn from_rows(board: &'static str, rows: &[Vec<u16>]) -> Result<Self, PuzzleError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(PuzzleError::Empty { board });
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(PuzzleError::RaggedRow {
                board,
                row,
                expected: cols,
                found: r.len(),
            });
        }
        let tiles: Vec<u16> = rows.iter().flatten().copied().collect();
        let size = tiles.len();
        let mut seen = vec![false; size];
        for &tile in &tiles {
            match seen.get_mut(usize::from(tile)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::NotAPermutation { board, size }),
            }
        }
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or(PuzzleError::NotAPermutation { board, size })?;
        Ok(Self { cols, tiles, blank })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.tiles.len() / self.cols
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Position of the blank.
    #[must_use]
    pub fn blank(&self) -> Position {
        self.position_of_index(self.blank)
    }

    /// Tile at `position`, or `None` outside the board.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<u16> {
        if position.col >= self.cols {
            return None;
        }
        self.tiles.get(position.row * self.cols + position.col).copied()
    }

    fn position_of_index(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// The board after moving the blank, or `None` if the move leaves the
    /// board.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let to = direction.step(self.blank(), self.rows(), self.cols)?;
        let to = to.row * self.cols + to.col;
        let mut next = self.clone();
        next.tiles.swap(self.blank, to);
        next.blank = to;
        Some(next)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.cols) {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| {
                    if t == 0 {
                        format!("{:>width$}", "_")
                    } else {
                        format!("{t:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Sliding-tile puzzle from an initial to a goal board.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    initial: Board,
    goal: Board,
    /// Goal position of each tile, indexed by tile number.
    goal_positions: Vec<Position>,
}

impl SlidingPuzzle {
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if either board is invalid or the two boards
    /// differ in shape.
    pub fn new(initial: &[Vec<u16>], goal: &[Vec<u16>]) -> Result<Self, PuzzleError> {
        let initial = Board::from_rows("initial", initial)?;
        let goal = Board::from_rows("goal", goal)?;
        if (initial.rows(), initial.cols()) != (goal.rows(), goal.cols()) {
            return Err(PuzzleError::ShapeMismatch {
                initial: (initial.rows(), initial.cols()),
                goal: (goal.rows(), goal.cols()),
            });
        }
        let mut goal_positions = vec![Position::new(0, 0); goal.tiles.len()];
        for (index, &tile) in goal.tiles.iter().enumerate() {
            goal_positions[usize::from(tile)] = goal.position_of_index(index);
        }
        Ok(Self {
            initial,
            goal,
            goal_positions,
        })
    }

    /// Puzzle whose goal is the canonical order `1, 2, ..., n*m - 1, 0`.
    ///
    /// # Errors
    ///
    /// As [`SlidingPuzzle::new`].
    pub fn to_canonical_goal(initial: &[Vec<u16>]) -> Result<Self, PuzzleError> {
        let cols = initial.first().map_or(0, Vec::len);
        let size = initial.len() * cols;
        let goal: Vec<Vec<u16>> = (1..=size)
            .map(|n| u16::try_from(n % size).unwrap_or(u16::MAX))
            .collect::<Vec<_>>()
            .chunks(cols.max(1))
            .map(<[u16]>::to_vec)
            .collect();
        Self::new(initial, &goal)
    }

    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    #[must_use]
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Whether the goal can be reached at all.
    ///
    /// Every move swaps the blank with a neighbour, flipping both the
    /// permutation parity and the blank's checkerboard colour, so the goal is
    /// reachable exactly when the two parities agree. Holds for boards with
    /// at least two rows and two columns.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let to_goal: Vec<usize> = self
            .initial
            .tiles
            .iter()
            .map(|&t| {
                let p = self.goal_positions[usize::from(t)];
                p.row * self.goal.cols + p.col
            })
            .collect();
        let mut visited = vec![false; to_goal.len()];
        let mut cycles = 0;
        for start in 0..to_goal.len() {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = to_goal[i];
            }
        }
        let permutation_parity = (to_goal.len() - cycles) % 2;
        let blank_parity = self.initial.blank().manhattan(self.goal.blank()) % 2;
        permutation_parity as u64 == blank_parity
    }
}

impl Problem for SlidingPuzzle {
    type State = Board;
    type Key = Board;

    fn initial_state(&self) -> &Board {
        &self.initial
    }

    fn goal_state(&self) -> &Board {
        &self.goal
    }

    fn actions(&self, state: &Board) -> Vec<String> {
        let (rows, cols) = (state.rows(), state.cols());
        Direction::ALL
            .into_iter()
            .filter(|d| d.step(state.blank(), rows, cols).is_some())
            .map(|d| d.label().to_string())
            .collect()
    }

    fn result(&self, state: &Board, action: &str) -> Board {
        action
            .parse::<Direction>()
            .ok()
            .and_then(|d| state.slide(d))
            .unwrap_or_else(|| state.clone())
    }

    fn action_cost(&self, _current: &Board, _action: &str, _next: &Board) -> u64 {
        1
    }

    fn state_key(&self, state: &Board) -> Board {
        state.clone()
    }

    fn estimated_cost(&self, state: &Board) -> u64 {
        state
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(index, &t)| {
                state
                    .position_of_index(index)
                    .manhattan(self.goal_positions[usize::from(t)])
            })
            .sum()
    }
}
