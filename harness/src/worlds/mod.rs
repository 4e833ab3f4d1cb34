//! Problem domains the search strategies run against.

pub mod maze;
pub mod maze_catalog;
pub mod mazes;
pub mod sliding_puzzle;
