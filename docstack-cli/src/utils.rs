//! Utility functions for CLI operations.
//!
//! Configuration loading, log level selection, and catalog access shared by
//! the commands.

use crate::error::CliError;
use docstack::catalog::Catalog;
use docstack::logging::LOG_MODE_ENV;
use docstack::{Config, ConfigBuilder, LogLevel, Logger};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Catalog file given on the command line.
    pub catalog: Option<PathBuf>,

    /// Native path resolution switch given on the command line.
    pub find_path: Option<bool>,
}

/// Load hierarchical configuration.
///
/// Command-line options take precedence over environment variables, which
/// take precedence over configuration files and built-in defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    let config = builder
        .with_config(Config {
            catalog: global.catalog.clone(),
            enable_find_path: global.find_path,
            ..Default::default()
        })
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    apply_log_mode(global, &config);
    Ok(config)
}

/// Lowers the logger to the configured `log_mode` unless a flag or the
/// environment already chose a level.
fn apply_log_mode(global: &GlobalOptions, config: &Config) {
    if global.verbose || global.quiet || env::var_os(LOG_MODE_ENV).is_some() {
        return;
    }

    if let Some(level) = config
        .log_mode
        .as_deref()
        .and_then(|mode| LogLevel::parse(mode).ok())
    {
        Logger::new(level).install();
    }
}

/// Open the catalog named by the configuration.
pub fn load_catalog(config: &Config) -> Result<Catalog, CliError> {
    let path = config.catalog.as_ref().ok_or_else(|| {
        CliError::Config(
            "no catalog configured (use --catalog, DOCSTACK_CATALOG, or the catalog setting)"
                .to_string(),
        )
    })?;

    Catalog::load(path).map_err(CliError::from)
}
