//! Deterministic state machines: the transition contract and a runtime that
//! drives a machine directly, independent of search.
//!
//! `contract` ← `simulation`. The search crate consumes `contract` only.

pub mod contract;
pub mod simulation;
