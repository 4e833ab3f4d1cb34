//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Budget configuration shared by every strategy.
///
/// The default policy is unbounded: a search runs until it reaches a goal or
/// exhausts its frontier, with no step limit, timeout, or cancellation. On an
/// infinite state space without a reachable goal such a search never returns,
/// so callers facing unbounded domains should set `max_expansions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
}

impl SearchPolicyV1 {
    /// Unbounded policy (same as `Default`).
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Policy that stops after `max_expansions` expansions.
    #[must_use]
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    /// Validate the policy before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero
    /// (not even the root could be expanded).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` already used up the budget.
    #[must_use]
    pub fn budget_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}
