//! Built-in worlds: puzzles expressed as searchable state machines.

pub mod knight_moves;
pub mod river_crossing;
