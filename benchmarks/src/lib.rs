//! Shared helpers for trailhead benchmark suites.

use trailhead_harness::runner::{RunError, WorldSpec};
use trailhead_harness::worlds::knight_moves::Square;
use trailhead_search::policy::{DedupMode, SearchPolicy};

/// A named world + policy pair exercising one search regime.
pub struct Regime {
    pub name: &'static str,
    pub world: WorldSpec,
    pub policy: SearchPolicy,
}

/// Every benchmarked regime.
///
/// | regime | stresses |
/// |---|---|
/// | `river_bfs` | tiny state space, identity-heavy inputs |
/// | `knight8_bfs` | full visited-set sweep of a small board |
/// | `knight8_path_only` | frontier growth without global dedup |
/// | `knight24_bfs` | large visited set |
/// | `knight24_budget_limited` | budget cut-off mid-sweep |
/// | `knight3_dead_end` | unreachable goal, frontier exhaustion |
///
/// # Errors
///
/// Returns [`RunError::InvalidWorld`] if a regime board is malformed.
pub fn regimes() -> Result<Vec<Regime>, RunError> {
    let far = |n: i32| WorldSpec::knight(Some(n), Some(Square(0, 0)), None);
    Ok(vec![
        Regime {
            name: "river_bfs",
            world: WorldSpec::RiverCrossing,
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "knight8_bfs",
            world: far(8)?,
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "knight8_path_only",
            world: far(8)?,
            policy: SearchPolicy::default().with_dedup(DedupMode::PathOnly),
        },
        Regime {
            name: "knight24_bfs",
            world: far(24)?,
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "knight24_budget_limited",
            world: far(24)?,
            policy: SearchPolicy::default().with_max_nodes(200),
        },
        Regime {
            name: "knight3_dead_end",
            world: WorldSpec::knight(Some(3), Some(Square(0, 0)), Some(Square(1, 1)))?,
            policy: SearchPolicy::default(),
        },
    ])
}
