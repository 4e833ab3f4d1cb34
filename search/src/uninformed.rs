//! Uninformed strategies: breadth-first, depth-first, and bidirectional.
//!
//! All three share the same discipline:
//! - the goal test runs on children at generation time (the root is tested
//!   once up front);
//! - the reached set is first-come: once a state key is reached, later paths
//!   to it are ignored even if cheaper. Under non-uniform costs the returned
//!   path is therefore not cost-minimal, and breadth-first only minimizes the
//!   action count.

use tracing::{debug, debug_span, trace};

use crate::contract::Problem;
use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier};
use crate::node::{NodeId, SearchNode, SearchTree};
use crate::outcome::{SearchOutcome, SearchStatsV1, TerminationReasonV1};
use crate::policy::SearchPolicyV1;
use crate::reached::ReachedSet;

/// Breadth-first search. Returns the action sequence, or an empty sequence
/// when the goal is unreachable (or the initial state is already a goal).
#[must_use]
pub fn breadth_first_search<P: Problem>(problem: &P) -> Vec<String> {
    first_come_search(
        problem,
        &SearchPolicyV1::unbounded(),
        FifoFrontier::new(),
        "breadth_first",
    )
    .into_path()
}

/// Breadth-first search under `policy`, with statistics.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn breadth_first_search_with<P: Problem>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchOutcome, SearchError> {
    policy.validate()?;
    Ok(first_come_search(
        problem,
        policy,
        FifoFrontier::new(),
        "breadth_first",
    ))
}

/// Depth-first search. No optimality guarantee of any kind.
#[must_use]
pub fn depth_first_search<P: Problem>(problem: &P) -> Vec<String> {
    first_come_search(
        problem,
        &SearchPolicyV1::unbounded(),
        LifoFrontier::new(),
        "depth_first",
    )
    .into_path()
}

/// Depth-first search under `policy`, with statistics.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn depth_first_search_with<P: Problem>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchOutcome, SearchError> {
    policy.validate()?;
    Ok(first_come_search(
        problem,
        policy,
        LifoFrontier::new(),
        "depth_first",
    ))
}

/// Graph search with child-time goal test and a first-come reached set.
/// Only the frontier discipline distinguishes breadth-first from depth-first.
fn first_come_search<P: Problem, F: Frontier>(
    problem: &P,
    policy: &SearchPolicyV1,
    mut frontier: F,
    strategy: &'static str,
) -> SearchOutcome {
    let _span = debug_span!("search", strategy).entered();
    let mut stats = SearchStatsV1::default();
    let mut tree = SearchTree::new();
    let root = tree.push(SearchNode::root(problem.initial_state().clone()));

    if problem.is_goal(tree.get(root).state()) {
        stats.nodes_allocated = 1;
        let outcome = SearchOutcome::goal(&tree, root, stats);
        outcome.log(strategy);
        return outcome;
    }

    let mut reached = ReachedSet::new();
    reached.insert_first(problem.state_key(tree.get(root).state()), root);
    frontier.push(root, 0);
    debug!(strategy, "search started");

    let mut goal = None;
    let termination = loop {
        if frontier.is_empty() {
            break TerminationReasonV1::FrontierExhausted;
        }
        if policy.budget_exhausted(stats.expansions) {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }
        let Some(current) = frontier.pop() else {
            break TerminationReasonV1::FrontierExhausted;
        };

        stats.expansions += 1;
        let children = problem.expand(tree.node_ref(current));
        trace!(
            node = %current,
            depth = tree.get(current).depth(),
            children = children.len(),
            frontier = frontier.len(),
            "expand"
        );

        for child in children {
            stats.nodes_generated += 1;
            if problem.is_goal(child.state()) {
                goal = Some(tree.push(child));
                break;
            }

            let key = problem.state_key(child.state());
            if reached.contains(&key) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let id = tree.push(child);
            reached.insert_first(key, id);
            frontier.push(id, 0);
        }

        if goal.is_some() {
            break TerminationReasonV1::GoalReached;
        }
    };

    stats.frontier_high_water = frontier.high_water();
    stats.nodes_allocated = tree.len() as u64;
    let outcome = match goal {
        Some(id) => SearchOutcome::goal(&tree, id, stats),
        None => SearchOutcome::failure(termination, stats),
    };
    outcome.log(strategy);
    outcome
}

/// Bidirectional search. Returns the combined action sequence, or an empty
/// sequence when either frontier runs dry.
///
/// The backward arm starts at [`Problem::goal_state`] and uses the same
/// forward `expand`, so this is only meaningful for domains whose actions
/// are reversible. The returned sequence is the forward path to the meeting
/// state followed by the backward arm's path to it in reverse order; the
/// backward labels are reversed in order but not inverted, so replaying
/// them from the initial state means applying each label's inverse.
#[must_use]
pub fn bidirectional_search<P: Problem>(problem: &P) -> Vec<String> {
    bidirectional(problem, &SearchPolicyV1::unbounded()).into_path()
}

/// Bidirectional search under `policy`, with statistics.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn bidirectional_search_with<P: Problem>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchOutcome, SearchError> {
    policy.validate()?;
    Ok(bidirectional(problem, policy))
}

/// One direction of a bidirectional search.
struct Arm<P: Problem> {
    tree: SearchTree<P::State>,
    frontier: FifoFrontier,
    reached: ReachedSet<P::Key>,
}

impl<P: Problem> Arm<P> {
    fn new(problem: &P, start: P::State) -> Self {
        let mut tree = SearchTree::new();
        let mut frontier = FifoFrontier::new();
        let mut reached = ReachedSet::new();
        let key = problem.state_key(&start);
        let root = tree.push(SearchNode::root(start));
        reached.insert_first(key, root);
        frontier.push(root, 0);
        Self {
            tree,
            frontier,
            reached,
        }
    }

    /// Expand one node. Returns `(own, opposite)` node ids when a child's
    /// key is already reached by the opposite arm.
    fn step(
        &mut self,
        problem: &P,
        opposite: &Self,
        stats: &mut SearchStatsV1,
    ) -> Option<(NodeId, NodeId)> {
        let current = self.frontier.pop()?;
        stats.expansions += 1;
        let children = problem.expand(self.tree.node_ref(current));
        trace!(
            node = %current,
            depth = self.tree.get(current).depth(),
            children = children.len(),
            "expand"
        );

        for child in children {
            stats.nodes_generated += 1;
            let key = problem.state_key(child.state());
            if let Some(meeting) = opposite.reached.get(&key) {
                let id = self.tree.push(child);
                return Some((id, meeting));
            }
            if self.reached.contains(&key) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let id = self.tree.push(child);
            self.reached.insert_first(key, id);
            self.frontier.push(id, 0);
        }
        None
    }
}

fn bidirectional<P: Problem>(problem: &P, policy: &SearchPolicyV1) -> SearchOutcome {
    const STRATEGY: &str = "bidirectional";
    let _span = debug_span!("search", strategy = STRATEGY).entered();
    let mut stats = SearchStatsV1::default();

    if problem.is_goal(problem.initial_state()) {
        stats.nodes_allocated = 1;
        let outcome = SearchOutcome {
            path: Vec::new(),
            path_cost: Some(0),
            termination: TerminationReasonV1::GoalReached,
            stats,
        };
        outcome.log(STRATEGY);
        return outcome;
    }

    let mut forward = Arm::new(problem, problem.initial_state().clone());
    let mut backward = Arm::new(problem, problem.goal_state().clone());
    debug!(strategy = STRATEGY, "search started");

    let mut forward_turn = true;
    let (termination, meeting) = loop {
        if forward.frontier.is_empty() || backward.frontier.is_empty() {
            break (TerminationReasonV1::FrontierExhausted, None);
        }
        if policy.budget_exhausted(stats.expansions) {
            break (TerminationReasonV1::ExpansionBudgetExceeded, None);
        }

        let meeting = if forward_turn {
            forward.step(problem, &backward, &mut stats)
        } else {
            backward
                .step(problem, &forward, &mut stats)
                .map(|(own, opposite)| (opposite, own))
        };
        if let Some((forward_id, backward_id)) = meeting {
            break (
                TerminationReasonV1::GoalReached,
                Some((forward_id, backward_id)),
            );
        }
        forward_turn = !forward_turn;
    };

    stats.frontier_high_water = forward.frontier.high_water() + backward.frontier.high_water();
    stats.nodes_allocated = (forward.tree.len() + backward.tree.len()) as u64;

    let outcome = match meeting {
        Some((forward_id, backward_id)) => {
            let mut path = forward.tree.path_to(forward_id);
            let mut backward_leg = backward.tree.path_to(backward_id);
            backward_leg.reverse();
            path.extend(backward_leg);
            let path_cost = forward
                .tree
                .get(forward_id)
                .path_cost()
                .saturating_add(backward.tree.get(backward_id).path_cost());
            SearchOutcome {
                path,
                path_cost: Some(path_cost),
                termination,
                stats,
            }
        }
        None => SearchOutcome::failure(termination, stats),
    };
    outcome.log(STRATEGY);
    outcome
}
