//! Direct simulation: drive a [`StateMachine`] step by step.
//!
//! A `Simulation` exclusively owns the one piece of mutable state in the
//! machine model, the current state. `start` resets it, `step` advances it.
//! Nothing else mutates it.

use super::contract::StateMachine;

/// Conventional step count for [`Simulation::run`] when the caller has no
/// better bound.
pub const DEFAULT_RUN_STEPS: usize = 10;

/// A running instance of a state machine.
#[derive(Debug, Clone)]
pub struct Simulation<M: StateMachine> {
    machine: M,
    state: M::State,
}

impl<M: StateMachine> Simulation<M> {
    /// Wrap `machine`, positioned at its start state.
    #[must_use]
    pub fn new(machine: M) -> Self {
        let state = machine.start_state();
        Self { machine, state }
    }

    /// Reset the current state to the machine's start state.
    pub fn start(&mut self) {
        self.state = self.machine.start_state();
    }

    /// Apply `input`, advance the current state, and return the output.
    pub fn step(&mut self, input: &M::Input) -> M::Output {
        let (next, output) = self.machine.transition(&self.state, input);
        self.state = next;
        output
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &M::State {
        &self.state
    }

    /// Whether the current state is terminal.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.machine.done(&self.state)
    }

    /// The wrapped machine.
    #[must_use]
    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// Restart, then feed `inputs` in order.
    ///
    /// `done` is checked before every step, including the first. Once it
    /// holds, the remaining inputs are dropped without error and the outputs
    /// collected so far are returned.
    pub fn transduce<I>(&mut self, inputs: I) -> Vec<M::Output>
    where
        I: IntoIterator<Item = M::Input>,
    {
        self.start();
        let mut outputs = Vec::new();
        for input in inputs {
            if self.is_done() {
                break;
            }
            outputs.push(self.step(&input));
        }
        outputs
    }

    /// Transduce `n` placeholder inputs, for machines that ignore their input.
    ///
    /// Pass [`DEFAULT_RUN_STEPS`] for the conventional ten steps.
    pub fn run(&mut self, n: usize) -> Vec<M::Output>
    where
        M::Input: Default,
    {
        self.transduce(std::iter::repeat_with(M::Input::default).take(n))
    }

    /// Consume the simulation and return the machine.
    #[must_use]
    pub fn into_machine(self) -> M {
        self.machine
    }
}

/// Transduce `inputs` through a fresh simulation of `machine`.
pub fn transduce<M, I>(machine: M, inputs: I) -> Vec<M::Output>
where
    M: StateMachine,
    I: IntoIterator<Item = M::Input>,
{
    Simulation::new(machine).transduce(inputs)
}

/// Run a fresh simulation of `machine` on `n` placeholder inputs.
pub fn run<M>(machine: M, n: usize) -> Vec<M::Output>
where
    M: StateMachine,
    M::Input: Default,
{
    Simulation::new(machine).run(n)
}
