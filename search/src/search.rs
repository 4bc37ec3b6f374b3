//! Search entry point and expansion loop.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::frontier::Frontier;
use crate::node::{NodeId, Path, PathArena};
use crate::policy::{DedupMode, SearchPolicy};
use crate::report::{SearchReport, SearchStats, TerminationReason};

/// Find a path from `initial_state` to a state satisfying `goal_test`.
///
/// Equivalent to [`search_with_report`] with the counters discarded.
/// Returns `None` when the frontier empties or the node budget runs out
/// without reaching a goal. That is a normal outcome, not an error.
pub fn search<S, A, G, F>(
    initial_state: S,
    goal_test: G,
    actions: &[A],
    successor: F,
    policy: &SearchPolicy,
) -> Option<Path<A, S>>
where
    S: Clone + Eq + Hash,
    A: Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S, &A) -> S,
{
    search_with_report(initial_state, goal_test, actions, successor, policy).into_path()
}

/// Run the search loop and return the path together with termination reason
/// and counters.
///
/// # Algorithm
///
/// 1. If the start state is a goal, return the one-element path.
/// 2. Otherwise pop nodes from the frontier (stack or queue per
///    `policy.traversal`) and apply every action, in slice order, to the
///    popped node's state. For each successor:
///    - a goal state returns immediately (first goal in expansion order wins);
///    - a state already enqueued by a sibling in this expansion is skipped;
///    - under [`DedupMode::Visited`], a state seen anywhere this call is
///      skipped; under [`DedupMode::PathOnly`], a state on the parent's own
///      ancestor chain is skipped;
///    - anything else is enqueued.
/// 3. Stop when the frontier is empty or `policy.max_nodes` nodes have been
///    enqueued. The budget is checked before each expansion. An expansion that
///    starts under budget goal-tests every action; once the budget fills
///    mid-expansion, further non-goal successors are dropped, not enqueued.
///
/// Actions that are illegal in a state must be encoded by `successor` as
/// identity transitions. The root always counts against the budget, so a
/// budget of 0 behaves like a budget of 1. A goal node is returned at once
/// and does not count.
pub fn search_with_report<S, A, G, F>(
    initial_state: S,
    goal_test: G,
    actions: &[A],
    successor: F,
    policy: &SearchPolicy,
) -> SearchReport<A, S>
where
    S: Clone + Eq + Hash,
    A: Clone,
    G: Fn(&S) -> bool,
    F: Fn(&S, &A) -> S,
{
    debug!(
        traversal = policy.traversal.as_str(),
        dedup = policy.dedup.as_str(),
        max_nodes = policy.max_nodes,
        actions = actions.len(),
        "search started"
    );

    let memoize = policy.dedup == DedupMode::Visited;
    let mut arena: PathArena<A, S> = PathArena::new();
    let mut frontier: Frontier<NodeId> = Frontier::for_traversal(policy.traversal);
    let mut visited: HashSet<S> = HashSet::new();
    let mut stats = SearchStats::default();

    let root = arena.root(initial_state);
    stats.nodes_created = 1;

    if goal_test(&arena.get(root).state) {
        return finish(
            &arena,
            Some(root),
            TerminationReason::GoalReached { depth: 0 },
            stats,
            policy,
        );
    }

    if memoize {
        visited.insert(arena.get(root).state.clone());
    }
    frontier.push(root);
    stats.observe_frontier(frontier.len());

    let termination = loop {
        if stats.nodes_created >= policy.max_nodes && !frontier.is_empty() {
            break TerminationReason::NodeBudgetExhausted {
                max_nodes: policy.max_nodes,
            };
        }
        let Some(parent) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        stats.expansions += 1;

        // Children enqueued by this expansion, for step-local suppression.
        let mut siblings: Vec<NodeId> = Vec::new();

        for action in actions {
            let new_state = successor(&arena.get(parent).state, action);

            if goal_test(&new_state) {
                let goal = arena.child(parent, action.clone(), new_state);
                let depth = arena.depth(goal);
                return finish(
                    &arena,
                    Some(goal),
                    TerminationReason::GoalReached { depth },
                    stats,
                    policy,
                );
            }

            if siblings.iter().any(|&s| arena.get(s).state == new_state) {
                stats.step_local_duplicates += 1;
                continue;
            }

            if memoize {
                if visited.contains(&new_state) {
                    stats.visited_duplicates += 1;
                    continue;
                }
            } else if arena.in_path(parent, &new_state) {
                stats.cycle_duplicates += 1;
                continue;
            }

            // Budget full: keep goal-testing the remaining actions, enqueue nothing.
            if stats.nodes_created >= policy.max_nodes {
                stats.budget_dropped += 1;
                continue;
            }

            if memoize {
                visited.insert(new_state.clone());
            }
            let child = arena.child(parent, action.clone(), new_state);
            stats.nodes_created += 1;
            siblings.push(child);
            frontier.push(child);
            stats.observe_frontier(frontier.len());
        }

        trace!(
            node = parent.index(),
            depth = arena.depth(parent),
            children = siblings.len(),
            frontier = frontier.len(),
            "expanded"
        );
    };

    finish(&arena, None, termination, stats, policy)
}

fn finish<A, S>(
    arena: &PathArena<A, S>,
    goal: Option<NodeId>,
    termination: TerminationReason,
    stats: SearchStats,
    policy: &SearchPolicy,
) -> SearchReport<A, S>
where
    A: Clone,
    S: Clone,
{
    debug!(
        termination = ?termination,
        nodes_created = stats.nodes_created,
        expansions = stats.expansions,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );
    SearchReport {
        path: goal.map(|id| arena.path(id)),
        termination,
        stats,
        policy: *policy,
    }
}
