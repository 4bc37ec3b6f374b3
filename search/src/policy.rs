//! Search policy: traversal order, duplicate handling, node budget.

use serde::{Deserialize, Serialize};

use trailhead_kernel::proof::canon::canonical_json_bytes;
use trailhead_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::SearchError;

/// Default node budget.
pub const DEFAULT_MAX_NODES: u64 = 10_000;

/// Frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Queue frontier. With [`DedupMode::Visited`] the returned path has the
    /// fewest actions.
    BreadthFirst,
    /// Stack frontier. Returns *a* path, not necessarily a shortest one.
    DepthFirst,
}

impl Traversal {
    /// Stable lowercase name, used in logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
        }
    }
}

/// How rediscovered states are pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupMode {
    /// Memoize every discovered state for the whole call; later rediscoveries
    /// anywhere are pruned.
    Visited,
    /// Prune only states already on the current node's ancestor chain. The
    /// same state may be enqueued again via a different parent.
    PathOnly,
}

impl DedupMode {
    /// Stable lowercase name, used in logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visited => "visited",
            Self::PathOnly => "path_only",
        }
    }
}

/// Configuration for one search call.
///
/// Deserializes from JSON with every field optional; missing fields take the
/// defaults (`breadth_first`, `visited`, 10 000 nodes). Unknown fields are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Frontier discipline.
    pub traversal: Traversal,
    /// Duplicate-state pruning.
    pub dedup: DedupMode,
    /// Hard cap on nodes constructed, root included.
    ///
    /// This is a completeness/performance trade-off: when the cap is reached
    /// the search returns no path even if a goal lies beyond it. A budget of
    /// 0 or 1 admits only the root, so only a start state that is already a
    /// goal can succeed.
    pub max_nodes: u64,
}

impl SearchPolicy {
    /// Breadth-first with memoization (the default).
    #[must_use]
    pub fn breadth_first() -> Self {
        Self::default()
    }

    /// Depth-first with memoization.
    #[must_use]
    pub fn depth_first() -> Self {
        Self {
            traversal: Traversal::DepthFirst,
            ..Self::default()
        }
    }

    /// Replace the traversal order.
    #[must_use]
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Replace the dedup mode.
    #[must_use]
    pub fn with_dedup(mut self, dedup: DedupMode) -> Self {
        self.dedup = dedup;
        self
    }

    /// Replace the node budget.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Parse a policy from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] on malformed JSON, unknown
    /// fields, or unknown enum names.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SearchError> {
        serde_json::from_slice(bytes).map_err(|e| SearchError::InvalidPolicy {
            detail: e.to_string(),
        })
    }

    /// JSON form, as echoed in reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "dedup": self.dedup.as_str(),
            "max_nodes": self.max_nodes,
            "traversal": self.traversal.as_str(),
        })
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ReportEncoding`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes =
            canonical_json_bytes(&self.to_json_value()).map_err(|e| SearchError::ReportEncoding {
                detail: e.to_string(),
            })?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            traversal: Traversal::BreadthFirst,
            dedup: DedupMode::Visited,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}
