//! World runner: search a built-in world and package the result.
//!
//! # Pipeline
//!
//! ```text
//! WorldSpec + SearchPolicy
//!   → MachineSearch::run_with_report()
//!   → SearchReport::to_json_value()
//!   → {"world_id", "report"} → canonical_json_bytes() → canonical_hash(WorldRun)
//! ```

use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use tracing::debug;

use trailhead_kernel::proof::canon::canonical_json_bytes;
use trailhead_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use trailhead_search::contract::{MachineSearch, SearchableMachine};
use trailhead_search::error::SearchError;
use trailhead_search::policy::SearchPolicy;
use trailhead_search::report::TerminationReason;

use crate::worlds::knight_moves::{BoardError, KnightMoves, Square, DEFAULT_BOARD_SIZE};
use crate::worlds::river_crossing::RiverCrossing;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// No built-in world has this name.
    UnknownWorld { name: String },
    /// World parameters are out of range.
    InvalidWorld(BoardError),
    /// A policy file could not be read or parsed.
    PolicyLoad { path: String, detail: String },
    /// The search report could not be encoded.
    Search(SearchError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWorld { name } => write!(
                f,
                "unknown world {name:?} (expected one of: {})",
                WorldSpec::NAMES.join(", ")
            ),
            Self::InvalidWorld(e) => write!(f, "invalid world: {e}"),
            Self::PolicyLoad { path, detail } => {
                write!(f, "cannot load policy from {path}: {detail}")
            }
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWorld(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::UnknownWorld { .. } | Self::PolicyLoad { .. } => None,
        }
    }
}

impl From<BoardError> for RunError {
    fn from(e: BoardError) -> Self {
        Self::InvalidWorld(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// A fully parameterized built-in world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldSpec {
    RiverCrossing,
    Knight(KnightMoves),
}

impl WorldSpec {
    /// Names accepted by [`WorldSpec::by_name`].
    pub const NAMES: &'static [&'static str] = &["river-crossing", "knight"];

    /// Look up a world by CLI name with default parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::UnknownWorld`] for any name outside [`Self::NAMES`].
    pub fn by_name(name: &str) -> Result<Self, RunError> {
        match name {
            "river-crossing" => Ok(Self::RiverCrossing),
            "knight" => Self::knight(None, None, None),
            _ => Err(RunError::UnknownWorld {
                name: name.to_string(),
            }),
        }
    }

    /// Knight world with optional overrides. The board defaults to 8, the
    /// start to `(0, 0)`, the goal to the far corner.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidWorld`] if the board is empty or a square
    /// is off it.
    pub fn knight(
        board: Option<i32>,
        start: Option<Square>,
        goal: Option<Square>,
    ) -> Result<Self, RunError> {
        let size = board.unwrap_or(DEFAULT_BOARD_SIZE);
        let corner = KnightMoves::far_corner(size).ok_or(BoardError::EmptyBoard { size })?;
        let world = KnightMoves::new(size, start.unwrap_or(Square(0, 0)), goal.unwrap_or(corner))?;
        Ok(Self::Knight(world))
    }

    /// Stable identifier recorded in every run.
    #[must_use]
    pub fn world_id(&self) -> &'static str {
        match self {
            Self::RiverCrossing => RiverCrossing::WORLD_ID,
            Self::Knight(_) => KnightMoves::WORLD_ID,
        }
    }
}

/// Result of [`run_world`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorldRun {
    pub world_id: &'static str,
    pub termination: TerminationReason,
    /// Number of actions on the found path.
    pub action_count: Option<usize>,
    /// `SearchReport::to_json_value()` output.
    pub report: serde_json::Value,
    /// `canonical_hash(WorldRun, canonical {"report", "world_id"})`.
    pub digest: ContentHash,
}

impl WorldRun {
    /// Whether the search reached a goal.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.action_count.is_some()
    }

    /// The run as a JSON value: `{"digest", "report", "world_id"}`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "digest": self.digest.as_str(),
            "report": self.report,
            "world_id": self.world_id,
        })
    }

    /// Canonical JSON bytes of [`Self::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Search`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, RunError> {
        canonical_json_bytes(&self.to_json_value()).map_err(|e| {
            RunError::Search(SearchError::ReportEncoding {
                detail: e.to_string(),
            })
        })
    }
}

/// Search `world` under `policy`.
///
/// "No path" is not an error; it is reported through
/// [`WorldRun::termination`].
///
/// # Errors
///
/// Returns [`RunError::Search`] if the report cannot be encoded.
pub fn run_world(world: &WorldSpec, policy: &SearchPolicy) -> Result<WorldRun, RunError> {
    match world {
        WorldSpec::RiverCrossing => run_machine(world.world_id(), &RiverCrossing, policy),
        WorldSpec::Knight(knight) => run_machine(world.world_id(), knight, policy),
    }
}

fn run_machine<M>(
    world_id: &'static str,
    machine: &M,
    policy: &SearchPolicy,
) -> Result<WorldRun, RunError>
where
    M: SearchableMachine,
    M::State: Eq + Hash + Serialize,
    M::Input: Clone + Serialize,
{
    debug!(world_id, "world run started");
    let report = MachineSearch::new(machine)
        .policy(*policy)
        .run_with_report();
    let report_json = report.to_json_value()?;
    let body = serde_json::json!({
        "report": report_json,
        "world_id": world_id,
    });
    let bytes = canonical_json_bytes(&body).map_err(|e| SearchError::ReportEncoding {
        detail: e.to_string(),
    })?;
    let digest = canonical_hash(HashDomain::WorldRun, &bytes);
    debug!(
        world_id,
        solved = report.is_goal_reached(),
        nodes_created = report.stats.nodes_created,
        digest = digest.as_str(),
        "world run finished"
    );
    Ok(WorldRun {
        world_id,
        termination: report.termination,
        action_count: report.action_count(),
        report: report_json,
        digest,
    })
}
