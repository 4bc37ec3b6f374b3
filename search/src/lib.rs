//! Trailhead Search: uninformed graph search over arbitrary state spaces.
//!
//! This crate provides the search layer. It depends only on
//! `trailhead_kernel` and knows nothing about concrete worlds.
//!
//! # Crate dependency graph
//!
//! ```text
//! trailhead_kernel  ←  trailhead_search  ←  trailhead_harness
//! (machines, digests)   (frontier, nodes)     (worlds, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`search::search`] / [`search::search_with_report`] -- the search loop
//! - [`node::PathArena`] -- immutable nodes with index back-references
//! - [`frontier::Frontier`] -- stack or queue discipline
//! - [`policy::SearchPolicy`] -- traversal, dedup mode and node budget
//! - [`contract::SearchableMachine`] / [`contract::sm_search`] -- search a
//!   state machine directly
//! - [`report::SearchReport`] -- termination reason, counters, digest

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
