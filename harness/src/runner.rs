//! Harness runner: times one strategy on one problem and records the result.
//!
//! The runner does not search by itself; it dispatches through
//! [`Strategy::run_with`] and packages the outcome. Memory use is reported
//! as node counts (`nodes_allocated`, `frontier_high_water`) taken from the
//! search statistics.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::info;

use waypoint_search::contract::Problem;
use waypoint_search::error::SearchError;
use waypoint_search::outcome::{SearchStatsV1, TerminationReasonV1};
use waypoint_search::policy::SearchPolicyV1;
use waypoint_search::strategy::Strategy;

use crate::worlds::maze_catalog::MazeCase;

/// One timed search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecordV1 {
    /// Run name, `<strategy label>_<case number>` for catalog runs.
    pub run: String,
    pub strategy: Strategy,
    /// Wall-clock time of the strategy call.
    pub elapsed: Duration,
    pub path_length: usize,
    pub path: Vec<String>,
    pub path_cost: Option<u64>,
    pub termination: TerminationReasonV1,
    pub stats: SearchStatsV1,
}

impl RunRecordV1 {
    #[must_use]
    pub fn found_path(&self) -> bool {
        self.termination == TerminationReasonV1::GoalReached
    }
}

/// Run `strategy` on `problem` under `policy` and time it.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` is invalid.
pub fn run_case<P: Problem>(
    run: impl Into<String>,
    problem: &P,
    strategy: Strategy,
    policy: &SearchPolicyV1,
) -> Result<RunRecordV1, SearchError> {
    let run = run.into();
    let started = Instant::now();
    let outcome = strategy.run_with(problem, policy)?;
    let elapsed = started.elapsed();

    info!(
        run = %run,
        strategy = strategy.name(),
        termination = outcome.termination.as_str(),
        path_length = outcome.path.len(),
        expansions = outcome.stats.expansions,
        elapsed_us = elapsed.as_micros() as u64,
        "run finished"
    );

    Ok(RunRecordV1 {
        run,
        strategy,
        elapsed,
        path_length: outcome.path.len(),
        path: outcome.path,
        path_cost: outcome.path_cost,
        termination: outcome.termination,
        stats: outcome.stats,
    })
}

/// Catalog run name, e.g. `A*_11`.
#[must_use]
pub fn run_name(strategy: Strategy, case_number: u32) -> String {
    format!("{}_{case_number}", strategy.label())
}

/// Run every strategy in `strategies` on every case, case-major.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` is invalid.
pub fn run_catalog(
    cases: &[MazeCase],
    strategies: &[Strategy],
    policy: &SearchPolicyV1,
) -> Result<Vec<RunRecordV1>, SearchError> {
    policy.validate()?;
    let mut records = Vec::with_capacity(cases.len() * strategies.len());
    for case in cases {
        for &strategy in strategies {
            records.push(run_case(
                run_name(strategy, case.number),
                &case.problem,
                strategy,
                policy,
            )?);
        }
    }
    Ok(records)
}
