//! Search loop properties over small synthetic graphs.
//!
//! Proves:
//! 1. Returned paths are valid walks of the successor function
//! 2. Goal-at-start returns a single-element path
//! 3. Unreachable goals return `None` for every policy and budget
//! 4. Breadth-first paths are shortest
//! 5. The node budget is never exceeded, and never hides a goal one action
//!    away from an expanded node
//! 6. Step-local duplicates enqueue one node
//! 7. Identical inputs give identical reports

use std::collections::{HashMap, VecDeque};

use trailhead_search::node::Path;
use trailhead_search::policy::{DedupMode, SearchPolicy, Traversal};
use trailhead_search::report::TerminationReason;
use trailhead_search::search::{search, search_with_report};

/// Arithmetic graph on `0..MODULUS`.
const MODULUS: u32 = 61;
const OPS: [Op; 3] = [Op::Double, Op::AddSeven, Op::Succ];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Double,
    AddSeven,
    Succ,
}

fn apply(s: &u32, op: &Op) -> u32 {
    match op {
        Op::Double => (s * 2) % MODULUS,
        Op::AddSeven => (s + 7) % MODULUS,
        Op::Succ => (s + 1) % MODULUS,
    }
}

fn bfs_distance(from: u32, to: u32) -> Option<usize> {
    let mut dist = HashMap::from([(from, 0usize)]);
    let mut queue = VecDeque::from([from]);
    while let Some(s) = queue.pop_front() {
        if s == to {
            return dist.get(&s).copied();
        }
        let d = dist[&s];
        for op in OPS {
            let next = apply(&s, &op);
            dist.entry(next).or_insert_with(|| {
                queue.push_back(next);
                d + 1
            });
        }
    }
    None
}

fn assert_walk(path: &Path<Op, u32>, from: u32, to: u32) {
    assert_eq!(path[0], (None, from));
    assert_eq!(path.last().map(|(_, s)| *s), Some(to));
    for pair in path.windows(2) {
        let op = pair[1].0.expect("non-root steps carry an action");
        assert_eq!(apply(&pair[0].1, &op), pair[1].1);
    }
}

fn all_policies() -> Vec<SearchPolicy> {
    let mut out = Vec::new();
    for traversal in [Traversal::BreadthFirst, Traversal::DepthFirst] {
        for dedup in [DedupMode::Visited, DedupMode::PathOnly] {
            out.push(
                SearchPolicy::default()
                    .with_traversal(traversal)
                    .with_dedup(dedup),
            );
        }
    }
    out
}

#[test]
fn paths_are_valid_walks_under_every_policy() {
    for policy in all_policies() {
        for target in [1, 13, 29, 60] {
            let path = search(3u32, |s| *s == target, &OPS, apply, &policy)
                .unwrap_or_else(|| panic!("{target} unreachable under {policy:?}"));
            assert_walk(&path, 3, target);
        }
    }
}

#[test]
fn breadth_first_is_shortest() {
    for dedup in [DedupMode::Visited, DedupMode::PathOnly] {
        let policy = SearchPolicy::breadth_first().with_dedup(dedup);
        for target in 0..MODULUS {
            let path = search(5u32, |s| *s == target, &OPS, apply, &policy).unwrap();
            assert_eq!(
                Some(path.len() - 1),
                bfs_distance(5, target),
                "target {target} under {dedup:?}"
            );
        }
    }
}

#[test]
fn goal_at_start_returns_single_element_path() {
    for policy in all_policies() {
        let report = search_with_report(9u32, |s| *s == 9, &OPS, apply, &policy);
        assert_eq!(report.path, Some(vec![(None, 9)]));
        assert_eq!(report.termination, TerminationReason::GoalReached { depth: 0 });
        assert_eq!(report.stats.nodes_created, 1);
        assert_eq!(report.stats.expansions, 0);
    }
}

#[test]
fn goal_at_start_is_found_even_with_zero_budget() {
    let policy = SearchPolicy::default().with_max_nodes(0);
    let path = search(9u32, |s| *s == 9, &OPS, apply, &policy);
    assert_eq!(path, Some(vec![(None, 9)]));
}

#[test]
fn unreachable_goal_returns_none_under_every_policy() {
    for policy in all_policies() {
        // States stay in 0..MODULUS, so MODULUS is never produced.
        let report = search_with_report(0u32, |s| *s == MODULUS, &OPS, apply, &policy);
        assert!(report.path.is_none(), "{policy:?}");
        if policy.dedup == DedupMode::Visited {
            assert_eq!(report.termination, TerminationReason::FrontierExhausted);
        } else {
            // Path-only dedup re-enqueues states across branches; on this
            // cyclic graph either exhaustion reason is a valid "no path".
            assert!(
                matches!(
                    report.termination,
                    TerminationReason::FrontierExhausted
                        | TerminationReason::NodeBudgetExhausted { .. }
                ),
                "{policy:?}: {:?}",
                report.termination
            );
        }
    }
}

/// Forward-only steps on `0..=6`; moves past 6 are identity transitions.
fn capped(s: &u32, step: &u32) -> u32 {
    (s + step).min(6)
}

#[test]
fn unreachable_goal_exhausts_a_finite_tree_under_every_policy() {
    for policy in all_policies() {
        let report = search_with_report(0u32, |s| *s == 7, &[1, 2], capped, &policy);
        assert!(report.path.is_none(), "{policy:?}");
        assert_eq!(
            report.termination,
            TerminationReason::FrontierExhausted,
            "{policy:?}"
        );
    }
}

#[test]
fn unreachable_goal_is_none_for_any_budget() {
    for policy in all_policies() {
        for max_nodes in [0u64, 1, 2, 7, 50, 10_000] {
            let policy = policy.with_max_nodes(max_nodes);
            let path = search(0u32, |s| *s == 7, &[1, 2], capped, &policy);
            assert_eq!(path, None, "{policy:?}");
        }
    }
}

#[test]
fn full_budget_does_not_hide_a_goal_one_action_away() {
    // From 3, Double leads to 6 and fills the budget; AddSeven reaches 10.
    let policy = SearchPolicy::default().with_max_nodes(2);
    let report = search_with_report(3u32, |s| *s == 10, &OPS, apply, &policy);
    assert_eq!(report.path, Some(vec![(None, 3), (Some(Op::AddSeven), 10)]));
    assert_eq!(report.stats.nodes_created, 2);
}

#[test]
fn visited_dedup_creates_each_state_once() {
    let report = search_with_report(
        0u32,
        |s| *s == MODULUS,
        &OPS,
        apply,
        &SearchPolicy::default(),
    );
    assert_eq!(report.stats.nodes_created, u64::from(MODULUS));
    assert_eq!(report.stats.expansions, u64::from(MODULUS));
}

#[test]
fn budget_is_never_exceeded() {
    for policy in all_policies() {
        for max_nodes in [0u64, 1, 2, 3, 5, 8, 13, 40] {
            let policy = policy.with_max_nodes(max_nodes);
            let report = search_with_report(0u32, |s| *s == 59, &OPS, apply, &policy);
            assert!(
                report.stats.nodes_created <= max_nodes.max(1),
                "{policy:?} created {}",
                report.stats.nodes_created
            );
            if report.path.is_none() {
                assert_eq!(
                    report.termination,
                    TerminationReason::NodeBudgetExhausted { max_nodes }
                );
            }
        }
    }
}

#[test]
fn budgets_zero_and_one_find_nothing_beyond_start() {
    for max_nodes in [0, 1] {
        let policy = SearchPolicy::default().with_max_nodes(max_nodes);
        assert_eq!(search(0u32, |s| *s == 1, &OPS, apply, &policy), None);
    }
}

#[test]
fn step_local_duplicates_enqueue_one_node() {
    // Every action leads to the same state.
    let actions = ['x', 'y', 'z'];
    let report = search_with_report(
        0u8,
        |_| false,
        &actions,
        |s, _| s.saturating_add(1).min(1),
        &SearchPolicy::default(),
    );
    assert_eq!(report.stats.nodes_created, 2);
    assert_eq!(report.stats.step_local_duplicates, 2);
    assert_eq!(report.termination, TerminationReason::FrontierExhausted);
}

#[test]
fn identical_inputs_give_identical_reports() {
    for policy in all_policies() {
        let a = search_with_report(2u32, |s| *s == 47, &OPS, apply, &policy);
        let b = search_with_report(2u32, |s| *s == 47, &OPS, apply, &policy);
        assert_eq!(a, b);
    }
}

#[test]
fn identical_inputs_give_identical_digests() {
    let names = ["double", "add_seven", "succ"];
    let by_name = |s: &u32, name: &&str| match *name {
        "double" => apply(s, &Op::Double),
        "add_seven" => apply(s, &Op::AddSeven),
        _ => apply(s, &Op::Succ),
    };
    for policy in all_policies() {
        let a = search_with_report(2u32, |s| *s == 47, &names, by_name, &policy);
        let b = search_with_report(2u32, |s| *s == 47, &names, by_name, &policy);
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
        assert_eq!(
            a.to_canonical_json_bytes().unwrap(),
            b.to_canonical_json_bytes().unwrap()
        );
    }
}
