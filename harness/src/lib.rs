//! Trailhead harness: built-in worlds and the code that runs them.
//!
//! Worlds are plain searchable state machines; the runner hands them to
//! `trailhead-search` and packages the report with a world-run digest.
//! The `trailhead` binary is a thin clap front end over [`cli::Cli`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod runner;
pub mod worlds;
