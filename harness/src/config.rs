//! Search policy configuration: JSON policy files plus CLI overrides.
//!
//! Precedence, lowest first: `SearchPolicy::default()`, the policy file,
//! then individual command-line flags.

use std::path::Path;

use trailhead_search::policy::{DedupMode, SearchPolicy, Traversal};

use crate::runner::RunError;

/// Read a `SearchPolicy` from a JSON file.
///
/// Missing fields take their defaults; unknown fields are rejected.
///
/// # Errors
///
/// Returns [`RunError::PolicyLoad`] if the file cannot be read or parsed.
pub fn load_policy(path: &Path) -> Result<SearchPolicy, RunError> {
    let bytes = std::fs::read(path).map_err(|e| RunError::PolicyLoad {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    SearchPolicy::from_json_slice(&bytes).map_err(|e| RunError::PolicyLoad {
        path: path.display().to_string(),
        detail: e.to_string(),
    })
}

/// Flag-level overrides applied on top of a base policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyOverrides {
    pub depth_first: bool,
    pub path_only: bool,
    pub max_nodes: Option<u64>,
}

impl PolicyOverrides {
    /// Apply the overrides that are set; leave the rest of `base` alone.
    #[must_use]
    pub fn apply(self, mut base: SearchPolicy) -> SearchPolicy {
        if self.depth_first {
            base = base.with_traversal(Traversal::DepthFirst);
        }
        if self.path_only {
            base = base.with_dedup(DedupMode::PathOnly);
        }
        if let Some(max_nodes) = self.max_nodes {
            base = base.with_max_nodes(max_nodes);
        }
        base
    }
}

/// Resolve the effective policy from an optional file and overrides.
///
/// # Errors
///
/// Returns [`RunError::PolicyLoad`] if `file` is given and fails to load.
pub fn resolve_policy(
    file: Option<&Path>,
    overrides: PolicyOverrides,
) -> Result<SearchPolicy, RunError> {
    let base = match file {
        Some(path) => load_policy(path)?,
        None => SearchPolicy::default(),
    };
    Ok(overrides.apply(base))
}
