//! `RiverCrossing`: the farmer, goat, wolf and cabbage puzzle.
//!
//! All four start on the left bank. The farmer rows across carrying at most
//! one passenger. The goat may never be left with the wolf or with the
//! cabbage unless the farmer is on that bank. A move whose precondition fails
//! is an identity transition, so every input is total over every state.

use serde::Serialize;

use trailhead_kernel::machine::contract::NextStateMachine;
use trailhead_search::contract::SearchableMachine;

/// One side of the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Bank {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Bank {
    /// The opposite bank.
    #[must_use]
    pub fn across(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Positions of the four travellers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Crossing {
    pub farmer: Bank,
    pub goat: Bank,
    pub wolf: Bank,
    pub cabbage: Bank,
}

impl Crossing {
    /// Everyone on `bank`.
    #[must_use]
    pub const fn all(bank: Bank) -> Self {
        Self {
            farmer: bank,
            goat: bank,
            wolf: bank,
            cabbage: bank,
        }
    }

    /// No unattended goat-wolf or goat-cabbage pair.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        let goat_exposed = self.goat != self.farmer;
        !(goat_exposed && (self.goat == self.wolf || self.goat == self.cabbage))
    }
}

/// What the farmer takes across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ferry {
    Alone,
    Goat,
    Wolf,
    Cabbage,
}

/// Inputs in expansion order.
pub const FERRIES: [Ferry; 4] = [Ferry::Alone, Ferry::Goat, Ferry::Wolf, Ferry::Cabbage];

/// The puzzle as a searchable state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiverCrossing;

impl RiverCrossing {
    /// Stable world identifier.
    pub const WORLD_ID: &'static str = "river_crossing";
}

impl NextStateMachine for RiverCrossing {
    type State = Crossing;
    type Input = Ferry;

    fn start_state(&self) -> Crossing {
        Crossing::all(Bank::Left)
    }

    fn next_state(&self, s: &Crossing, ferry: &Ferry) -> Crossing {
        let mut next = *s;
        let allowed = match ferry {
            Ferry::Alone => s.goat != s.wolf && s.goat != s.cabbage,
            Ferry::Goat => s.goat == s.farmer,
            Ferry::Wolf => s.wolf == s.farmer && s.goat != s.cabbage,
            Ferry::Cabbage => s.cabbage == s.farmer && s.goat != s.wolf,
        };
        if !allowed {
            return next;
        }
        next.farmer = s.farmer.across();
        match ferry {
            Ferry::Alone => {}
            Ferry::Goat => next.goat = s.goat.across(),
            Ferry::Wolf => next.wolf = s.wolf.across(),
            Ferry::Cabbage => next.cabbage = s.cabbage.across(),
        }
        next
    }

    fn done(&self, s: &Crossing) -> bool {
        *s == Crossing::all(Bank::Right)
    }
}

impl SearchableMachine for RiverCrossing {
    fn legal_inputs(&self) -> &[Ferry] {
        &FERRIES
    }
}
