//! Library exports for docstack-cli.
//!
//! The CLI structure is exported so documentation tooling can reach it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
