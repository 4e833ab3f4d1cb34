//! Waypoint Harness: problem domains and run tooling for `waypoint_search`.
//!
//! The harness does NOT implement search; it supplies problems (maze
//! navigation, sliding puzzle), the numbered maze catalog, a timed runner,
//! and CSV/JSON reports. The `waypoint` binary drives all of it from the
//! command line.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod runner;
pub mod worlds;
