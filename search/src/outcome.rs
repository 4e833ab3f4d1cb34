//! Search outcome: the returned path plus why and how the search stopped.

use serde::{Deserialize, Serialize};

use crate::node::{NodeId, SearchTree};

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReasonV1 {
    /// A goal state was reached (possibly the initial state itself).
    GoalReached,
    /// Frontier emptied without finding a goal: the goal is unreachable.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
}

impl TerminationReasonV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

impl std::fmt::Display for TerminationReasonV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected during one search call.
///
/// For bidirectional search the counters cover both arms, and
/// `frontier_high_water` is the sum of the two arms' high-water marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatsV1 {
    /// Nodes popped from a frontier and expanded.
    pub expansions: u64,
    /// Child nodes produced by `Problem::expand`.
    pub nodes_generated: u64,
    /// Children dropped because their state was already reached (first-come)
    /// or reached at an equal or lower cost (cost-aware).
    pub duplicates_suppressed: u64,
    /// Reached entries taken over by a strictly cheaper node (informed only).
    pub reached_replacements: u64,
    /// Popped nodes whose reached entry had since been replaced (informed
    /// only). They are still expanded.
    pub stale_pops: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Nodes stored in the search tree(s), root(s) included.
    pub nodes_allocated: u64,
}

/// Result of a search call with statistics.
///
/// `path` is empty both when the initial state is already a goal and when no
/// goal was found; [`SearchOutcome::termination`] tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Action labels from the initial state to the goal.
    pub path: Vec<String>,
    /// Accumulated cost of `path` (`None` unless a goal was reached).
    pub path_cost: Option<u64>,
    pub termination: TerminationReasonV1,
    pub stats: SearchStatsV1,
}

impl SearchOutcome {
    /// Outcome for a goal node found in `tree`.
    pub(crate) fn goal<S>(tree: &SearchTree<S>, goal: NodeId, stats: SearchStatsV1) -> Self {
        Self {
            path: tree.path_to(goal),
            path_cost: Some(tree.get(goal).path_cost()),
            termination: TerminationReasonV1::GoalReached,
            stats,
        }
    }

    /// Outcome for a search that stopped without reaching a goal.
    pub(crate) fn failure(termination: TerminationReasonV1, stats: SearchStatsV1) -> Self {
        Self {
            path: Vec::new(),
            path_cost: None,
            termination,
            stats,
        }
    }

    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReasonV1::GoalReached
    }

    /// Consume the outcome, keeping only the action sequence.
    #[must_use]
    pub fn into_path(self) -> Vec<String> {
        self.path
    }

    pub(crate) fn log(&self, strategy: &str) {
        tracing::debug!(
            strategy,
            termination = self.termination.as_str(),
            path_length = self.path.len(),
            expansions = self.stats.expansions,
            nodes_generated = self.stats.nodes_generated,
            frontier_high_water = self.stats.frontier_high_water,
            "search finished"
        );
    }
}
