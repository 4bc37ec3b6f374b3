//! `SearchReport`: path, termination reason and counters for one call.
//!
//! The report is the auditable form of a search result. Its canonical JSON
//! is byte-stable for identical inputs, so its digest doubles as a
//! determinism check across calls and processes.

use serde::Serialize;

use trailhead_kernel::proof::canon::canonical_json_bytes;
use trailhead_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::SearchError;
use crate::node::Path;
use crate::policy::SearchPolicy;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was found `depth` actions from the start (0 = start).
    GoalReached { depth: usize },
    /// Every enqueued node was expanded without reaching a goal.
    FrontierExhausted,
    /// The node budget was spent before a goal was found.
    NodeBudgetExhausted { max_nodes: u64 },
}

/// Counters collected by the search loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes admitted to the search tree: the root plus every enqueued child.
    /// This is the quantity capped by `max_nodes`; a returned goal node is
    /// not counted.
    pub nodes_created: u64,
    /// Nodes popped from the frontier and expanded.
    pub expansions: u64,
    /// Successors skipped because a sibling from the same expansion already
    /// reached that state.
    pub step_local_duplicates: u64,
    /// Successors skipped because the state was already visited this call.
    pub visited_duplicates: u64,
    /// Successors skipped because the state is on the parent's own path.
    pub cycle_duplicates: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Successors that passed every duplicate check but were not enqueued
    /// because the node budget was already full.
    pub budget_dropped: u64,
}

impl SearchStats {
    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.frontier_high_water = self.frontier_high_water.max(len as u64);
    }
}

/// Result of [`crate::search::search_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<A, S> {
    /// The goal path, if one was found.
    pub path: Option<Path<A, S>>,
    /// Why the search stopped.
    pub termination: TerminationReason,
    /// Loop counters.
    pub stats: SearchStats,
    /// The policy the search ran under.
    pub policy: SearchPolicy,
}

impl<A, S> SearchReport<A, S> {
    /// Returns `true` if a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// Number of actions in the found path.
    #[must_use]
    pub fn action_count(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }

    /// Discard the counters and keep the path.
    #[must_use]
    pub fn into_path(self) -> Option<Path<A, S>> {
        self.path
    }
}

impl<A: Serialize, S: Serialize> SearchReport<A, S> {
    /// Convert to a `serde_json::Value`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ReportEncoding`] if an action or state fails to
    /// serialize.
    pub fn to_json_value(&self) -> Result<serde_json::Value, SearchError> {
        let path = match &self.path {
            None => serde_json::Value::Null,
            Some(steps) => serde_json::Value::Array(
                steps
                    .iter()
                    .map(|(action, state)| -> Result<serde_json::Value, SearchError> {
                        Ok(serde_json::json!({
                            "action": encode(action)?,
                            "state": encode(state)?,
                        }))
                    })
                    .collect::<Result<Vec<_>, SearchError>>()?,
            ),
        };
        Ok(serde_json::json!({
            "path": path,
            "policy": self.policy.to_json_value(),
            "stats": stats_to_json(&self.stats),
            "termination": termination_to_json(self.termination),
        }))
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ReportEncoding`] if serialization or
    /// canonicalization fails (e.g. a state containing a float).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, SearchError> {
        canonical_json_bytes(&self.to_json_value()?).map_err(|e| SearchError::ReportEncoding {
            detail: e.to_string(),
        })
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }
}

fn encode<T: Serialize>(value: &T) -> Result<serde_json::Value, SearchError> {
    serde_json::to_value(value).map_err(|e| SearchError::ReportEncoding {
        detail: e.to_string(),
    })
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "budget_dropped": s.budget_dropped,
        "cycle_duplicates": s.cycle_duplicates,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "nodes_created": s.nodes_created,
        "step_local_duplicates": s.step_local_duplicates,
        "visited_duplicates": s.visited_duplicates,
    })
}

fn termination_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { depth } => {
            serde_json::json!({"depth": depth, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReason::NodeBudgetExhausted { max_nodes } => {
            serde_json::json!({"max_nodes": max_nodes, "type": "node_budget_exhausted"})
        }
    }
}
