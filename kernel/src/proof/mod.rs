//! Canonical serialization and content hashing for determinism checks.
//!
//! `canon` and `hash` are independent; callers canonicalize first, then hash.

pub mod canon;
pub mod hash;
