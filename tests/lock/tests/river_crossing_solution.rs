//! River crossing acceptance: the puzzle is solved in seven crossings and
//! every state along the way is safe.

use trailhead_harness::worlds::river_crossing::{Bank, Crossing, Ferry, RiverCrossing};
use trailhead_kernel::machine::contract::NextStateMachine;
use trailhead_kernel::machine::simulation::Simulation;
use trailhead_search::contract::{sm_search, MachineSearch};
use trailhead_search::node::Path;
use trailhead_search::policy::{DedupMode, SearchPolicy};

/// Every recorded state follows from its predecessor and the recorded action.
fn assert_valid(path: &Path<Ferry, Crossing>) {
    assert_eq!(path[0], (None, Crossing::all(Bank::Left)));
    for pair in path.windows(2) {
        let (_, from) = pair[0];
        let (action, to) = pair[1];
        let action = action.expect("non-root steps carry an action");
        assert_eq!(RiverCrossing.next_state(&from, &action), to);
        assert_ne!(from, to, "identity transitions never appear on a path");
    }
}

#[test]
fn breadth_first_solution_has_seven_crossings() {
    let path = sm_search(&RiverCrossing, &SearchPolicy::default()).expect("solvable");
    assert_eq!(path.len() - 1, 7);
    assert_eq!(path.last().map(|(_, s)| *s), Some(Crossing::all(Bank::Right)));
    assert_valid(&path);
}

#[test]
fn every_state_on_the_path_is_safe() {
    let path = sm_search(&RiverCrossing, &SearchPolicy::default()).expect("solvable");
    for (_, state) in &path {
        assert!(state.is_safe(), "unsafe state {state:?}");
    }
}

#[test]
fn goat_goes_first_and_last() {
    let path = sm_search(&RiverCrossing, &SearchPolicy::default()).expect("solvable");
    assert_eq!(path[1].0, Some(Ferry::Goat));
    assert_eq!(path[7].0, Some(Ferry::Goat));
}

#[test]
fn every_policy_finds_a_seven_crossing_solution() {
    for policy in [
        SearchPolicy::default(),
        SearchPolicy::depth_first(),
        SearchPolicy::default().with_dedup(DedupMode::PathOnly),
        SearchPolicy::depth_first().with_dedup(DedupMode::PathOnly),
    ] {
        let path = sm_search(&RiverCrossing, &policy)
            .unwrap_or_else(|| panic!("no solution under {policy:?}"));
        assert_eq!(path.len() - 1, 7, "{policy:?}");
        assert_valid(&path);
    }
}

#[test]
fn replaying_the_solution_reaches_done() {
    let path = sm_search(&RiverCrossing, &SearchPolicy::default()).expect("solvable");
    let inputs: Vec<Ferry> = path.iter().filter_map(|(a, _)| *a).collect();
    let mut sim = Simulation::new(RiverCrossing);
    let outputs = sim.transduce(inputs);
    assert_eq!(outputs.len(), 7);
    assert!(sim.is_done());
    assert_eq!(outputs.last(), Some(&Crossing::all(Bank::Right)));
}

#[test]
fn search_from_the_far_bank_back_to_start() {
    let path = MachineSearch::new(&RiverCrossing)
        .initial_state(Crossing::all(Bank::Right))
        .goal_test(|s| *s == Crossing::all(Bank::Left))
        .run()
        .expect("the puzzle is symmetric");
    assert_eq!(path.len() - 1, 7);
}
