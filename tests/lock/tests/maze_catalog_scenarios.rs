//! Scenario lock tests: every strategy on every catalog maze.
//!
//! Reachability must match the catalog, breadth-first and A* must return the
//! fewest moves, and every returned path must replay to the goal.

use lock_tests::{bidirectional_replays_to_goal, flood_distance, replays_to_goal};
use waypoint_harness::worlds::maze::Position;
use waypoint_harness::worlds::maze_catalog::{all_cases, case};
use waypoint_harness::worlds::mazes::open_maze;
use waypoint_search::{
    a_star_search, bidirectional_search, breadth_first_search, depth_first_search,
    greedy_best_first_search, SearchPolicyV1, Strategy, TerminationReasonV1,
};

// ---------------------------------------------------------------------------
// Catalog integrity
// ---------------------------------------------------------------------------

#[test]
fn catalog_expectations_match_flood_fill() {
    for case in all_cases().unwrap() {
        assert_eq!(
            flood_distance(&case.problem),
            case.expectations.shortest_path,
            "maze {} ({})",
            case.number,
            case.label
        );
    }
}

// ---------------------------------------------------------------------------
// All strategies × all mazes
// ---------------------------------------------------------------------------

#[test]
fn every_strategy_agrees_on_reachability() {
    for case in all_cases().unwrap() {
        for strategy in Strategy::ALL {
            let outcome = strategy
                .run_with(&case.problem, &SearchPolicyV1::default())
                .unwrap();
            assert_eq!(
                outcome.is_goal_reached(),
                case.expectations.reachable(),
                "{strategy} on maze {}",
                case.number
            );
            if !case.expectations.reachable() {
                assert!(outcome.path.is_empty());
                assert_eq!(outcome.termination, TerminationReasonV1::FrontierExhausted);
            }
        }
    }
}

#[test]
fn returned_paths_replay_to_goal() {
    for case in all_cases().unwrap() {
        if !case.expectations.reachable() {
            continue;
        }
        for strategy in Strategy::ALL {
            let path = strategy.run(&case.problem);
            let valid = if strategy == Strategy::Bidirectional {
                bidirectional_replays_to_goal(&case.problem, &path)
            } else {
                replays_to_goal(&case.problem, &path)
            };
            assert!(valid, "{strategy} on maze {}: {path:?}", case.number);
        }
    }
}

#[test]
fn breadth_first_and_a_star_return_fewest_moves() {
    for case in all_cases().unwrap() {
        let Some(shortest) = case.expectations.shortest_path else {
            continue;
        };
        assert_eq!(breadth_first_search(&case.problem).len(), shortest, "BFS maze {}", case.number);
        assert_eq!(a_star_search(&case.problem).len(), shortest, "A* maze {}", case.number);
    }
}

#[test]
fn unit_cost_paths_cost_their_length() {
    for case in all_cases().unwrap() {
        for strategy in Strategy::ALL {
            let outcome = strategy
                .run_with(&case.problem, &SearchPolicyV1::default())
                .unwrap();
            if outcome.is_goal_reached() {
                assert_eq!(outcome.path_cost, Some(outcome.path.len() as u64));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Named mazes
// ---------------------------------------------------------------------------

#[test]
fn basic_maze_has_single_route() {
    let maze = case(1).unwrap().problem;
    let expected = vec!["east", "south", "south", "east"];
    assert_eq!(breadth_first_search(&maze), expected);
    assert_eq!(depth_first_search(&maze), expected);
    assert_eq!(a_star_search(&maze), expected);
    assert_eq!(greedy_best_first_search(&maze), expected);
    assert!(bidirectional_replays_to_goal(&maze, &bidirectional_search(&maze)));
}

#[test]
fn goalless_maze_returns_empty_for_every_strategy() {
    let maze = case(2).unwrap().problem;
    for strategy in Strategy::ALL {
        assert!(strategy.run(&maze).is_empty(), "{strategy}");
    }
}

#[test]
fn informed_maze_misleads_greedy_but_not_a_star() {
    let maze = case(11).unwrap().problem;
    assert_eq!(a_star_search(&maze).len(), 10);
    let greedy = greedy_best_first_search(&maze);
    assert_eq!(greedy.len(), 14);
    assert_eq!(&greedy[..3], ["east", "east", "north"]);
    assert!(replays_to_goal(&maze, &greedy));
}

#[test]
fn a_star_expands_fewer_nodes_than_breadth_first_on_cross_spoke() {
    let maze = case(3).unwrap().problem;
    let policy = SearchPolicyV1::default();
    let bfs = Strategy::BreadthFirst.run_with(&maze, &policy).unwrap();
    let astar = Strategy::AStar.run_with(&maze, &policy).unwrap();
    assert!(
        astar.stats.expansions < bfs.stats.expansions,
        "A* {} vs BFS {}",
        astar.stats.expansions,
        bfs.stats.expansions
    );
}

#[test]
fn depth_first_dives_south_before_breadth_first_fans_east() {
    let maze = open_maze(3, Position::new(0, 0), Position::new(2, 2))
        .problem()
        .unwrap();
    let policy = SearchPolicyV1::default();

    let dfs = Strategy::DepthFirst.run_with(&maze, &policy).unwrap();
    assert_eq!(dfs.path, ["south", "south", "east", "east"]);
    assert_eq!(dfs.stats.expansions, 4);

    let bfs = Strategy::BreadthFirst.run_with(&maze, &policy).unwrap();
    assert_eq!(bfs.path, ["east", "east", "south", "south"]);
    assert_eq!(bfs.stats.expansions, 7);
}
