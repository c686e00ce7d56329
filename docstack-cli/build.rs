//! Build script for docstack-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! The command structure is rebuilt here because build scripts cannot depend
//! on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("docstack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve the ancestry stack of provider documents")
        .long_about(
            "Command-line host that resolves the chain of documents from a provider root down to a document",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory holding the user configuration")
                .value_name("PATH")
                .global(true)
                .env("DOCSTACK_DATA_DIR"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .help("Catalog file describing the document providers")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("enable-find-path")
                .long("enable-find-path")
                .help("Ask providers for native path resolution")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("disable-find-path")
                .long("disable-find-path")
                .help("Never ask providers for native path resolution")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a document's ancestry stack")
                .long_about("Print the chain of documents from the provider root down to a document"),
            Command::new("validate")
                .about("Validate a catalog file")
                .long_about("Check a catalog file for structural errors and parent cycles"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the configuration after files, environment and flags are merged"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("docstack.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
