//! Command-line surface of the `trailhead` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{resolve_policy, PolicyOverrides};
use crate::runner::{run_world, RunError, WorldRun, WorldSpec};
use crate::worlds::knight_moves::Square;

/// Process exit code when the search finds no path.
pub const EXIT_NO_PATH: u8 = 2;

/// `trailhead` arguments.
#[derive(Debug, Parser)]
#[command(
    name = "trailhead",
    version,
    about = "Search a built-in puzzle world and print the canonical JSON report"
)]
pub struct Cli {
    /// World to search.
    #[arg(value_enum)]
    pub world: WorldName,

    /// Knight board size.
    #[arg(long)]
    pub board: Option<i32>,

    /// Knight start square, `X,Y`.
    #[arg(long, value_parser = parse_square)]
    pub start: Option<Square>,

    /// Knight goal square, `X,Y`.
    #[arg(long, value_parser = parse_square)]
    pub goal: Option<Square>,

    /// Expand the most recently discovered node first.
    #[arg(long)]
    pub depth_first: bool,

    /// Only reject states already on the current path.
    #[arg(long)]
    pub path_only: bool,

    /// Node budget.
    #[arg(long)]
    pub max_nodes: Option<u64>,

    /// JSON policy file; flags override its fields.
    #[arg(long)]
    pub policy: Option<PathBuf>,
}

/// Built-in worlds selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorldName {
    /// Farmer, goat, wolf and cabbage.
    RiverCrossing,
    /// Knight on a square board.
    Knight,
}

impl Cli {
    /// The world these arguments describe.
    ///
    /// Knight flags are ignored for the river crossing.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidWorld`] for an invalid knight board.
    pub fn world_spec(&self) -> Result<WorldSpec, RunError> {
        match self.world {
            WorldName::RiverCrossing => Ok(WorldSpec::RiverCrossing),
            WorldName::Knight => WorldSpec::knight(self.board, self.start, self.goal),
        }
    }

    /// Policy flags as overrides for the file or default policy.
    #[must_use]
    pub fn overrides(&self) -> PolicyOverrides {
        PolicyOverrides {
            depth_first: self.depth_first,
            path_only: self.path_only,
            max_nodes: self.max_nodes,
        }
    }

    /// Resolve world and policy, then run.
    ///
    /// # Errors
    ///
    /// Any [`RunError`] from world construction, policy loading or report
    /// encoding.
    pub fn execute(&self) -> Result<WorldRun, RunError> {
        let world = self.world_spec()?;
        let policy = resolve_policy(self.policy.as_deref(), self.overrides())?;
        run_world(&world, &policy)
    }
}

/// Parse `X,Y` into a [`Square`].
///
/// # Errors
///
/// Returns a message naming the malformed input.
pub fn parse_square(s: &str) -> Result<Square, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {part:?} in {s:?}: {e}"))
    };
    Ok(Square(coord(x)?, coord(y)?))
}
