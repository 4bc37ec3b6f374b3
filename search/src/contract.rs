//! Searchable state machine contract and adapter.
//!
//! Any [`StateMachine`] that can enumerate its legal inputs can be handed to
//! the search loop directly. The adapter derives the four search parameters:
//!
//! | search parameter | derived from |
//! |---|---|
//! | initial state | `start_state()` (overridable) |
//! | goal test | `done(state)` (overridable) |
//! | actions | `legal_inputs()` |
//! | successor | `transition(state, input).0` |

use std::hash::Hash;

use trailhead_kernel::machine::contract::StateMachine;

use crate::node::Path;
use crate::policy::SearchPolicy;
use crate::report::SearchReport;
use crate::search::search_with_report;

/// A state machine with a finite, order-stable input alphabet.
///
/// # Contract
///
/// - `legal_inputs` returns the same slice, in the same order, every call.
///   Search expands inputs in that order.
/// - `transition` is total over every reachable state and every legal input;
///   inputs that are illegal in a given state are identity transitions.
pub trait SearchableMachine: StateMachine {
    /// Every input the machine accepts, in expansion order.
    fn legal_inputs(&self) -> &[Self::Input];
}

/// Search `machine` from its start state for a state where `done` holds.
///
/// Same as `MachineSearch::new(machine).policy(*policy).run()`.
pub fn sm_search<M>(machine: &M, policy: &SearchPolicy) -> Option<Path<M::Input, M::State>>
where
    M: SearchableMachine,
    M::State: Eq + Hash,
    M::Input: Clone,
{
    MachineSearch::new(machine).policy(*policy).run()
}

/// Builder for a search over a [`SearchableMachine`] with optional overrides.
pub struct MachineSearch<'m, M: SearchableMachine> {
    machine: &'m M,
    initial_state: Option<M::State>,
    goal_test: Option<Box<dyn Fn(&M::State) -> bool + 'm>>,
    policy: SearchPolicy,
}

impl<'m, M> MachineSearch<'m, M>
where
    M: SearchableMachine,
    M::State: Eq + Hash,
    M::Input: Clone,
{
    /// Start a search over `machine` with the default policy.
    #[must_use]
    pub fn new(machine: &'m M) -> Self {
        Self {
            machine,
            initial_state: None,
            goal_test: None,
            policy: SearchPolicy::default(),
        }
    }

    /// Search from `state` instead of `start_state()`.
    #[must_use]
    pub fn initial_state(mut self, state: M::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Use `goal_test` instead of `done`.
    #[must_use]
    pub fn goal_test(mut self, goal_test: impl Fn(&M::State) -> bool + 'm) -> Self {
        self.goal_test = Some(Box::new(goal_test));
        self
    }

    /// Traversal, dedup and budget, passed through unchanged.
    #[must_use]
    pub fn policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run and return the path only.
    #[must_use]
    pub fn run(self) -> Option<Path<M::Input, M::State>> {
        self.run_with_report().into_path()
    }

    /// Run and return the full report.
    #[must_use]
    pub fn run_with_report(self) -> SearchReport<M::Input, M::State> {
        let machine = self.machine;
        let initial = self
            .initial_state
            .unwrap_or_else(|| machine.start_state());
        let successor = |s: &M::State, a: &M::Input| machine.transition(s, a).0;
        match self.goal_test {
            Some(goal) => search_with_report(
                initial,
                |s: &M::State| goal(s),
                machine.legal_inputs(),
                successor,
                &self.policy,
            ),
            None => search_with_report(
                initial,
                |s: &M::State| machine.done(s),
                machine.legal_inputs(),
                successor,
                &self.policy,
            ),
        }
    }
}
