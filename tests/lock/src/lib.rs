//! Shared helpers for the lock tests: path replay on mazes and small
//! generated problems.

#![forbid(unsafe_code)]

use std::collections::VecDeque;

use waypoint_harness::worlds::maze::{Cell, Direction, MazeNavigation, Position};
use waypoint_search::contract::Problem;

/// Parse action labels into directions.
///
/// # Panics
///
/// Panics if a label is not a compass direction. Test-only invariant.
#[must_use]
pub fn directions(path: &[String]) -> Vec<Direction> {
    path.iter()
        .map(|label| label.parse::<Direction>().unwrap_or_else(|e| panic!("{e}")))
        .collect()
}

/// Whether `path` walks from the start to the goal using only legal moves.
#[must_use]
pub fn replays_to_goal(maze: &MazeNavigation, path: &[String]) -> bool {
    maze.walk(maze.start(), directions(path)) == Some(maze.goal())
}

/// Whether a bidirectional result is valid: some split point divides it into
/// a forward leg, replayed as-is from the start, and a backward leg whose
/// labels are replayed inverted from the meeting cell to the goal.
#[must_use]
pub fn bidirectional_replays_to_goal(maze: &MazeNavigation, path: &[String]) -> bool {
    let moves = directions(path);
    (0..=moves.len()).any(|split| {
        let (forward, backward) = moves.split_at(split);
        maze.walk(maze.start(), forward.iter().copied())
            .and_then(|meeting| maze.walk(meeting, backward.iter().map(|d| d.opposite())))
            == Some(maze.goal())
    })
}

/// Build a maze from a wall mask (`true` = wall) over a `rows` x `cols`
/// grid, forcing the start and goal cells open.
///
/// # Panics
///
/// Panics if the grid is empty or a position is out of range.
#[must_use]
pub fn masked_maze(
    rows: usize,
    cols: usize,
    walls: &[bool],
    start: Position,
    goal: Position,
) -> MazeNavigation {
    let terrain: Vec<Vec<Cell>> = (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    let here = Position::new(row, col);
                    let wall = walls.get(row * cols + col).copied().unwrap_or(false);
                    if wall && here != start && here != goal {
                        Cell::Impassable
                    } else {
                        Cell::Walkable
                    }
                })
                .collect()
        })
        .collect();
    MazeNavigation::new(&terrain, start, goal).expect("masked maze is well formed")
}

/// Fewest moves from start to goal by flood fill, computed without the
/// search crate.
#[must_use]
pub fn flood_distance(maze: &MazeNavigation) -> Option<usize> {
    let index = |p: Position| p.row * maze.cols() + p.col;
    let mut distance = vec![None; maze.rows() * maze.cols()];
    let mut queue = VecDeque::from([maze.start()]);
    distance[index(maze.start())] = Some(0);
    while let Some(at) = queue.pop_front() {
        let d = distance[index(at)].unwrap_or(0);
        if at == maze.goal() {
            return Some(d);
        }
        for direction in Direction::ALL {
            if let Some(next) = maze.neighbor(at, direction) {
                if distance[index(next)].is_none() {
                    distance[index(next)] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

/// Sum of step costs along `path` from the initial state.
#[must_use]
pub fn replay_cost<P: Problem>(problem: &P, path: &[String]) -> u64 {
    let mut state = problem.initial_state().clone();
    let mut cost = 0;
    for action in path {
        let next = problem.result(&state, action);
        cost += problem.action_cost(&state, action, &next);
        state = next;
    }
    cost
}
