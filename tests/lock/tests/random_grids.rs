//! Property lock tests over random grid mazes.

use lock_tests::{bidirectional_replays_to_goal, flood_distance, masked_maze, replays_to_goal};
use proptest::prelude::*;
use waypoint_harness::worlds::maze::Position;
use waypoint_search::{SearchPolicyV1, Strategy};

const ROWS: usize = 6;
const COLS: usize = 7;

fn maze_strategy() -> impl proptest::strategy::Strategy<
    Value = (Vec<bool>, (usize, usize), (usize, usize)),
> {
    (
        prop::collection::vec(prop::bool::weighted(0.3), ROWS * COLS),
        (0..ROWS, 0..COLS),
        (0..ROWS, 0..COLS),
    )
}

proptest! {
    #[test]
    fn strategies_agree_on_reachability(
        (walls, start, goal) in maze_strategy()
    ) {
        let maze = masked_maze(
            ROWS,
            COLS,
            &walls,
            Position::new(start.0, start.1),
            Position::new(goal.0, goal.1),
        );
        let reachable = flood_distance(&maze).is_some();
        for strategy in Strategy::ALL {
            let outcome = strategy.run_with(&maze, &SearchPolicyV1::default()).unwrap();
            prop_assert_eq!(outcome.is_goal_reached(), reachable, "{}", strategy);
        }
    }

    #[test]
    fn breadth_first_and_a_star_are_shortest(
        (walls, start, goal) in maze_strategy()
    ) {
        let maze = masked_maze(
            ROWS,
            COLS,
            &walls,
            Position::new(start.0, start.1),
            Position::new(goal.0, goal.1),
        );
        if let Some(shortest) = flood_distance(&maze) {
            prop_assert_eq!(Strategy::BreadthFirst.run(&maze).len(), shortest);
            let astar = Strategy::AStar.run_with(&maze, &SearchPolicyV1::default()).unwrap();
            prop_assert_eq!(astar.path.len(), shortest);
            prop_assert_eq!(astar.path_cost, Some(shortest as u64));
        }
    }

    #[test]
    fn every_path_replays(
        (walls, start, goal) in maze_strategy()
    ) {
        let maze = masked_maze(
            ROWS,
            COLS,
            &walls,
            Position::new(start.0, start.1),
            Position::new(goal.0, goal.1),
        );
        for strategy in Strategy::ALL {
            let outcome = strategy.run_with(&maze, &SearchPolicyV1::default()).unwrap();
            if !outcome.is_goal_reached() {
                continue;
            }
            let valid = if strategy == Strategy::Bidirectional {
                bidirectional_replays_to_goal(&maze, &outcome.path)
            } else {
                replays_to_goal(&maze, &outcome.path)
            };
            prop_assert!(valid, "{} produced {:?}", strategy, outcome.path);
            prop_assert_eq!(outcome.path_cost, Some(outcome.path.len() as u64));
        }
    }
}
