//! Configuration schema definitions.
//!
//! Every field is optional so that configuration files can be layered; the
//! accessor methods apply the built-in defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Default time the command-line host waits for a resolution, in seconds.
pub const DEFAULT_RESOLVE_TIMEOUT_SECONDS: u64 = 30;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use docstack::config::Config;
///
/// let config = Config::default();
/// assert!(!config.find_path_enabled());
/// assert_eq!(config.resolve_timeout(), Duration::from_secs(30));
///
/// let config = Config {
///     enable_find_path: Some(true),
///     resolve_timeout_seconds: Some(5),
///     ..Default::default()
/// };
/// assert!(config.find_path_enabled());
/// assert_eq!(config.resolve_timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Ask providers for native path resolution. Off unless enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_find_path: Option<bool>,

    /// Catalog file describing the available providers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Output format for resolved stacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Log verbosity: quiet, normal, or verbose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_mode: Option<String>,

    /// How long the command-line host waits for a resolution (seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve_timeout_seconds: Option<u64>,
}

impl Config {
    /// Whether native path resolution is switched on.
    #[must_use]
    pub fn find_path_enabled(&self) -> bool {
        self.enable_find_path.unwrap_or(false)
    }

    /// The resolution wait, falling back to the default.
    #[must_use]
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(
            self.resolve_timeout_seconds
                .unwrap_or(DEFAULT_RESOLVE_TIMEOUT_SECONDS),
        )
    }

    /// The configured output format, or human-readable output.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
