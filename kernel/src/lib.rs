//! Trailhead Kernel: state machines and canonical digests.
//!
//! # API Surface
//!
//! - [`machine::contract::StateMachine`] -- the deterministic transition contract
//! - [`machine::simulation::Simulation`] -- drive a machine step by step
//! - [`proof::canon::canonical_json_bytes`] and [`proof::hash::canonical_hash`]
//!   -- byte-stable digests of search results
//!
//! # Module Dependency Direction
//!
//! `machine` and `proof` are independent. Nothing in the kernel knows about
//! search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod machine;
pub mod proof;
