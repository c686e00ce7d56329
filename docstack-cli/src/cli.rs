//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, ShowConfigCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line host for resolving where documents live.
#[derive(Parser)]
#[command(name = "docstack")]
#[command(version, about = "Resolve the ancestry stack of provider documents", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory holding the user configuration
    #[arg(long, value_name = "PATH", global = true, env = "DOCSTACK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Catalog file describing the document providers
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Ask providers for native path resolution
    #[arg(long, global = true, overrides_with = "disable_find_path")]
    pub enable_find_path: bool,

    /// Never ask providers for native path resolution
    #[arg(long, global = true, overrides_with = "enable_find_path")]
    pub disable_find_path: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The feature switch requested on the command line, if any.
    pub fn find_path_override(&self) -> Option<bool> {
        if self.enable_find_path {
            Some(true)
        } else if self.disable_find_path {
            Some(false)
        } else {
            None
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a document's ancestry stack
    Resolve(ResolveCommand),

    /// Validate a catalog file
    Validate(ValidateCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
