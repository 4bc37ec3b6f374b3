//! `KnightMoves`: a lone knight crossing an `n x n` board.
//!
//! Squares are `(x, y)` with `0 <= x, y < n`. Each input names one of the
//! eight knight jumps; a jump that would leave the board is an identity
//! transition. The goal defaults to the far corner `(n - 1, n - 1)`.

use std::fmt;

use serde::Serialize;

use trailhead_kernel::machine::contract::NextStateMachine;
use trailhead_search::contract::SearchableMachine;

/// Board size when none is given.
pub const DEFAULT_BOARD_SIZE: i32 = 8;

/// A board square, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Square(pub i32, pub i32);

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// One knight jump. The first letter is the long leg, the second the short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Jump {
    /// `(-1, +2)`
    UpLeft,
    /// `(+1, +2)`
    UpRight,
    /// `(-1, -2)`
    DownLeft,
    /// `(+1, -2)`
    DownRight,
    /// `(-2, +1)`
    LeftUp,
    /// `(-2, -1)`
    LeftDown,
    /// `(+2, +1)`
    RightUp,
    /// `(+2, -1)`
    RightDown,
}

/// Inputs in expansion order.
pub const JUMPS: [Jump; 8] = [
    Jump::UpLeft,
    Jump::UpRight,
    Jump::DownLeft,
    Jump::DownRight,
    Jump::LeftUp,
    Jump::LeftDown,
    Jump::RightUp,
    Jump::RightDown,
];

impl Jump {
    /// `(dx, dy)` applied by this jump.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::UpLeft => (-1, 2),
            Self::UpRight => (1, 2),
            Self::DownLeft => (-1, -2),
            Self::DownRight => (1, -2),
            Self::LeftUp => (-2, 1),
            Self::LeftDown => (-2, -1),
            Self::RightUp => (2, 1),
            Self::RightDown => (2, -1),
        }
    }
}

/// Error constructing a [`KnightMoves`] world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board size below 1.
    EmptyBoard { size: i32 },
    /// Start or goal not on the board.
    OffBoard { square: Square, size: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard { size } => write!(f, "board size must be at least 1, got {size}"),
            Self::OffBoard { square, size } => {
                write!(f, "square {square} is off the {size}x{size} board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The knight world: board size, start square and goal square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightMoves {
    size: i32,
    start: Square,
    goal: Square,
}

impl KnightMoves {
    /// Stable world identifier.
    pub const WORLD_ID: &'static str = "knight_moves";

    /// Knight on an `size x size` board, travelling from `start` to `goal`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the board is empty or either square is off it.
    pub fn new(size: i32, start: Square, goal: Square) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::EmptyBoard { size });
        }
        let world = Self { size, start, goal };
        for square in [start, goal] {
            if !world.on_board(square) {
                return Err(BoardError::OffBoard { square, size });
            }
        }
        Ok(world)
    }

    /// Far corner of a `size x size` board, or `None` for an empty board.
    #[must_use]
    pub fn far_corner(size: i32) -> Option<Square> {
        if size < 1 {
            return None;
        }
        Some(Square(size - 1, size - 1))
    }

    /// Classic 8x8 board from `start` to the far corner.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OffBoard`] if `start` is off the board.
    pub fn classic(start: Square) -> Result<Self, BoardError> {
        let corner = Square(DEFAULT_BOARD_SIZE - 1, DEFAULT_BOARD_SIZE - 1);
        Self::new(DEFAULT_BOARD_SIZE, start, corner)
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Square the knight starts on.
    #[must_use]
    pub fn start(&self) -> Square {
        self.start
    }

    /// Square the search is looking for.
    #[must_use]
    pub fn goal(&self) -> Square {
        self.goal
    }

    /// Whether `square` lies on this board.
    #[must_use]
    pub fn on_board(&self, square: Square) -> bool {
        (0..self.size).contains(&square.0) && (0..self.size).contains(&square.1)
    }
}

impl NextStateMachine for KnightMoves {
    type State = Square;
    type Input = Jump;

    fn start_state(&self) -> Square {
        self.start
    }

    fn next_state(&self, s: &Square, jump: &Jump) -> Square {
        let (dx, dy) = jump.offset();
        let landing = s.0.checked_add(dx).zip(s.1.checked_add(dy));
        match landing {
            Some((x, y)) if self.on_board(Square(x, y)) => Square(x, y),
            _ => *s,
        }
    }

    fn done(&self, s: &Square) -> bool {
        *s == self.goal
    }
}

impl SearchableMachine for KnightMoves {
    fn legal_inputs(&self) -> &[Jump] {
        &JUMPS
    }
}
