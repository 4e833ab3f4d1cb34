//! Strategy selection: one enum naming the five search strategies, with
//! dispatch to the matching entry point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contract::Problem;
use crate::error::SearchError;
use crate::informed::{a_star_search_with, greedy_best_first_search_with};
use crate::outcome::SearchOutcome;
use crate::policy::SearchPolicyV1;
use crate::uninformed::{
    bidirectional_search_with, breadth_first_search_with, depth_first_search_with,
};

/// The search strategies this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    Bidirectional,
    GreedyBestFirst,
    AStar,
}

impl Strategy {
    /// Every strategy, in report order.
    pub const ALL: [Strategy; 5] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::AStar,
        Self::GreedyBestFirst,
        Self::Bidirectional,
    ];

    /// Stable snake_case name (used in logs and reports).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::Bidirectional => "bidirectional",
            Self::GreedyBestFirst => "greedy_best_first",
            Self::AStar => "a_star",
        }
    }

    /// One-letter selector code.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::BreadthFirst => 'b',
            Self::DepthFirst => 'd',
            Self::Bidirectional => 's',
            Self::GreedyBestFirst => 'g',
            Self::AStar => 'a',
        }
    }

    /// Short label for report run names (`BFS`, `DFS`, `A*`, ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::Bidirectional => "Bidirectional",
            Self::GreedyBestFirst => "Greedy",
            Self::AStar => "A*",
        }
    }

    /// Whether the strategy reads `Problem::estimated_cost`.
    #[must_use]
    pub fn is_informed(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }

    /// Run the strategy without a budget and return only the path.
    #[must_use]
    pub fn run<P: Problem>(self, problem: &P) -> Vec<String> {
        match self {
            Self::BreadthFirst => crate::uninformed::breadth_first_search(problem),
            Self::DepthFirst => crate::uninformed::depth_first_search(problem),
            Self::Bidirectional => crate::uninformed::bidirectional_search(problem),
            Self::GreedyBestFirst => crate::informed::greedy_best_first_search(problem),
            Self::AStar => crate::informed::a_star_search(problem),
        }
    }

    /// Run the strategy under `policy`, returning the full outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
    pub fn run_with<P: Problem>(
        self,
        problem: &P,
        policy: &SearchPolicyV1,
    ) -> Result<SearchOutcome, SearchError> {
        match self {
            Self::BreadthFirst => breadth_first_search_with(problem, policy),
            Self::DepthFirst => depth_first_search_with(problem, policy),
            Self::Bidirectional => bidirectional_search_with(problem, policy),
            Self::GreedyBestFirst => greedy_best_first_search_with(problem, policy),
            Self::AStar => a_star_search_with(problem, policy),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy selector that names no strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy `{input}` (expected one of b, d, s, g, a or a strategy name)")]
pub struct StrategyParseError {
    pub input: String,
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    /// Accepts the one-letter code, the snake_case name, or the report label
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| {
                (wanted.len() == 1 && wanted.starts_with(strategy.code()))
                    || wanted == strategy.name()
                    || wanted == strategy.label().to_ascii_lowercase()
            })
            .ok_or(StrategyParseError {
                input: s.to_string(),
            })
    }
}
