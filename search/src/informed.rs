//! Informed strategies: greedy best-first and A*.
//!
//! Both pop from a [`PriorityFrontier`] (lowest priority first, insertion
//! order on ties) and goal-test on pop rather than on generation. The reached
//! set is cost-aware: a child takes over its state key, and is queued, when
//! the key is unreached or the child's path cost is strictly lower than the
//! reached node's. Superseded entries are not removed from the frontier; they
//! pop later with their stale priority and are expanded like any other node.

use tracing::{debug, debug_span, trace};

use crate::contract::Problem;
use crate::error::SearchError;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::node::{SearchNode, SearchTree};
use crate::outcome::{SearchOutcome, SearchStatsV1, TerminationReasonV1};
use crate::policy::SearchPolicyV1;
use crate::reached::ReachedSet;

/// Greedy best-first search ordered by `estimated_cost` alone.
/// Not optimal.
#[must_use]
pub fn greedy_best_first_search<P: Problem>(problem: &P) -> Vec<String> {
    best_first(problem, &SearchPolicyV1::unbounded(), PriorityRule::Greedy).into_path()
}

/// Greedy best-first search under `policy`, with statistics.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn greedy_best_first_search_with<P: Problem>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchOutcome, SearchError> {
    policy.validate()?;
    Ok(best_first(problem, policy, PriorityRule::Greedy))
}

/// A* search ordered by `path_cost + estimated_cost`.
///
/// Returns a minimal-cost path provided the problem's heuristic is
/// admissible and consistent; nothing here checks that it is.
#[must_use]
pub fn a_star_search<P: Problem>(problem: &P) -> Vec<String> {
    best_first(problem, &SearchPolicyV1::unbounded(), PriorityRule::AStar).into_path()
}

/// A* search under `policy`, with statistics.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn a_star_search_with<P: Problem>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchOutcome, SearchError> {
    policy.validate()?;
    Ok(best_first(problem, policy, PriorityRule::AStar))
}

/// Priority function of a best-first search.
#[derive(Debug, Clone, Copy)]
enum PriorityRule {
    /// `h(n)`
    Greedy,
    /// `g(n) + h(n)`
    AStar,
}

impl PriorityRule {
    fn strategy(self) -> &'static str {
        match self {
            Self::Greedy => "greedy_best_first",
            Self::AStar => "a_star",
        }
    }

    fn priority<P: Problem>(self, problem: &P, node: &SearchNode<P::State>) -> u64 {
        let h = problem.estimated_cost(node.state());
        match self {
            Self::Greedy => h,
            Self::AStar => node.path_cost().saturating_add(h),
        }
    }
}

fn best_first<P: Problem>(
    problem: &P,
    policy: &SearchPolicyV1,
    rule: PriorityRule,
) -> SearchOutcome {
    let strategy = rule.strategy();
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

    let mut frontier = PriorityFrontier::new();
    let mut reached = ReachedSet::new();
    reached.replace(problem.state_key(tree.get(root).state()), root);
    frontier.push(root, rule.priority(problem, tree.get(root)));
    debug!(strategy, "search started");

    let mut goal = None;
    let termination = loop {
        if frontier.is_empty() {
            break TerminationReasonV1::FrontierExhausted;
        }
        if policy.budget_exhausted(stats.expansions) {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }
        let Some((key, current)) = frontier.pop_with_key() else {
            break TerminationReasonV1::FrontierExhausted;
        };

        let node = tree.get(current);
        if problem.is_goal(node.state()) {
            goal = Some(current);
            break TerminationReasonV1::GoalReached;
        }
        if reached.get(&problem.state_key(node.state())) != Some(current) {
            stats.stale_pops += 1;
        }

        stats.expansions += 1;
        let children = problem.expand(tree.node_ref(current));
        trace!(
            node = %current,
            priority = key.priority,
            sequence = key.sequence,
            path_cost = tree.get(current).path_cost(),
            children = children.len(),
            frontier = frontier.len(),
            "expand"
        );

        for child in children {
            stats.nodes_generated += 1;
            let child_key = problem.state_key(child.state());
            if !reached.is_improvement(&child_key, child.path_cost(), &tree) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let priority = rule.priority(problem, &child);
            let id = tree.push(child);
            if reached.replace(child_key, id).is_some() {
                stats.reached_replacements += 1;
            }
            frontier.push(id, priority);
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
