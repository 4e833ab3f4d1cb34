//! The problem contract every searchable domain implements.

use std::hash::Hash;

use crate::node::{NodeRef, SearchNode};

/// A state-space search problem.
///
/// The strategies in this crate are generic over this trait and only ever
/// borrow the problem immutably, so one instance can be shared across calls
/// and across both arms of a bidirectional search.
///
/// # Contract
///
/// - `is_goal`, `state_key`, `actions`, `result`, `action_cost` and
///   `estimated_cost` must be pure: same input, same output, no interior
///   mutation observable by the search.
/// - `state_key` must be total and deterministic, and two states must be
///   key-equal iff they are the same state for deduplication purposes.
/// - `actions` must enumerate in a deterministic order; the strategies'
///   tie-breaking (and therefore the returned path) depends on it.
/// - A state with no applicable actions is a dead end: `actions` returns an
///   empty list. This is not an error.
/// - Heuristics are not checked. A* only returns a minimal-cost path when
///   `estimated_cost` is admissible and consistent.
pub trait Problem {
    /// Domain state. Opaque to the search.
    type State: Clone;
    /// Hashable deduplication key derived from a state.
    type Key: Hash + Eq + Clone;

    /// The state the forward search starts from.
    fn initial_state(&self) -> &Self::State;

    /// The goal state. Bidirectional search roots its backward arm here.
    fn goal_state(&self) -> &Self::State;

    /// Goal test. Defaults to key-equality with [`Problem::goal_state`].
    fn is_goal(&self, state: &Self::State) -> bool {
        self.state_key(state) == self.state_key(self.goal_state())
    }

    /// Action labels applicable in `state`, in enumeration order.
    fn actions(&self, state: &Self::State) -> Vec<String>;

    /// The state reached by applying `action` in `state`.
    ///
    /// Only called with actions returned by [`Problem::actions`] for the same
    /// state.
    fn result(&self, state: &Self::State, action: &str) -> Self::State;

    /// Incremental cost of one transition.
    fn action_cost(&self, current: &Self::State, action: &str, next: &Self::State) -> u64;

    /// Deduplication key for `state`.
    fn state_key(&self, state: &Self::State) -> Self::Key;

    /// Estimated remaining cost from `state` to a goal. Defaults to 0.
    fn estimated_cost(&self, _state: &Self::State) -> u64 {
        0
    }

    /// One child node per applicable action, in [`Problem::actions`] order.
    ///
    /// Must not mutate `node`. Override only when a domain can generate
    /// successors more cheaply than `actions` + `result` + `action_cost`;
    /// children must still be built with [`NodeRef::child`].
    fn expand(&self, node: NodeRef<'_, Self::State>) -> Vec<SearchNode<Self::State>> {
        let current = node.state();
        self.actions(current)
            .into_iter()
            .map(|action| {
                let next = self.result(current, &action);
                let cost = self.action_cost(current, &action, &next);
                node.child(action, next, cost)
            })
            .collect()
    }
}
