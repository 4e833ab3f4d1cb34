//! Waypoint Search: generic state-space search over a [`Problem`].
//!
//! A problem supplies states, labelled actions, non-negative integer step
//! costs, a deduplication key and (optionally) a heuristic. This crate runs
//! one of five strategies over it and returns the action labels leading from
//! the initial state to a goal.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_search  ←  waypoint_harness
//! (strategies)        (worlds, catalog, reports, CLI)
//! ```
//!
//! # Key types
//!
//! - [`Problem`]: the contract a domain implements
//! - [`SearchNode`] / [`SearchTree`]: per-call node arena with parent links
//! - [`Frontier`]: FIFO, LIFO and priority disciplines
//! - [`ReachedSet`]: first-come or cost-aware deduplication
//! - [`Strategy`]: enum dispatch over the five strategies
//! - [`SearchOutcome`]: path, cost, termination reason and counters
//!
//! # Entry points
//!
//! Each strategy has a plain form returning `Vec<String>` (empty on failure)
//! and a `_with` form taking a [`SearchPolicyV1`] and returning a
//! [`SearchOutcome`]. Search calls share no state and are deterministic for
//! a deterministic problem.

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod informed;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod reached;
pub mod strategy;
pub mod uninformed;

#[cfg(test)]
pub(crate) mod testing;

pub use contract::Problem;
pub use error::SearchError;
pub use frontier::{FifoFrontier, Frontier, FrontierKey, LifoFrontier, PriorityFrontier};
pub use informed::{
    a_star_search, a_star_search_with, greedy_best_first_search, greedy_best_first_search_with,
};
pub use node::{reconstruct_path, NodeId, NodeRef, SearchNode, SearchTree};
pub use outcome::{SearchOutcome, SearchStatsV1, TerminationReasonV1};
pub use policy::SearchPolicyV1;
pub use reached::ReachedSet;
pub use strategy::{Strategy, StrategyParseError};
pub use uninformed::{
    bidirectional_search, bidirectional_search_with, breadth_first_search,
    breadth_first_search_with, depth_first_search, depth_first_search_with,
};
