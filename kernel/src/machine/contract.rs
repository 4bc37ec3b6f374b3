//! State machine contract.

/// A deterministic transition system.
///
/// # Contract
///
/// - `transition` must be pure: same `(state, input)` → same `(state, output)`.
/// - `transition` must be total over every reachable state and every input the
///   caller may supply. Inputs that are illegal in a state are encoded as
///   identity transitions (the returned state equals the given one), never as
///   a panic.
/// - `done` must be pure. The default never reports a terminal state.
pub trait StateMachine {
    /// Configuration of the machine.
    type State: Clone;
    /// One input symbol.
    type Input;
    /// Value emitted by each step.
    type Output;

    /// The state a fresh run begins in.
    fn start_state(&self) -> Self::State;

    /// Compute `(next_state, output)` for `input` applied in `state`.
    fn transition(&self, state: &Self::State, input: &Self::Input) -> (Self::State, Self::Output);

    /// Whether `state` is terminal.
    fn done(&self, _state: &Self::State) -> bool {
        false
    }
}

/// A machine whose output is its next state.
///
/// Implementors only describe `next_state`; the blanket impl below supplies
/// [`StateMachine::transition`] with `Output = State`.
pub trait NextStateMachine {
    /// Configuration of the machine (also the output type).
    type State: Clone;
    /// One input symbol.
    type Input;

    /// The state a fresh run begins in.
    fn start_state(&self) -> Self::State;

    /// The state reached by applying `input` in `state`.
    fn next_state(&self, state: &Self::State, input: &Self::Input) -> Self::State;

    /// Whether `state` is terminal.
    fn done(&self, _state: &Self::State) -> bool {
        false
    }
}

impl<M: NextStateMachine> StateMachine for M {
    type State = M::State;
    type Input = M::Input;
    type Output = M::State;

    fn start_state(&self) -> Self::State {
        NextStateMachine::start_state(self)
    }

    fn transition(&self, state: &Self::State, input: &Self::Input) -> (Self::State, Self::Output) {
        let next = self.next_state(state, input);
        (next.clone(), next)
    }

    fn done(&self, state: &Self::State) -> bool {
        NextStateMachine::done(self, state)
    }
}
