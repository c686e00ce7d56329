//! Environment variable handling for configuration overrides.
//!
//! `DOCSTACK_*` variables override values from configuration files.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Switches native path resolution on or off.
pub const ENABLE_FIND_PATH_ENV: &str = "DOCSTACK_ENABLE_FIND_PATH";
/// Path of the catalog file.
pub const CATALOG_ENV: &str = "DOCSTACK_CATALOG";
/// Output format for resolved stacks.
pub const OUTPUT_FORMAT_ENV: &str = "DOCSTACK_OUTPUT_FORMAT";
/// Resolution wait in seconds.
pub const RESOLVE_TIMEOUT_ENV: &str = "DOCSTACK_RESOLVE_TIMEOUT_SECONDS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use docstack::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds a value that cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENABLE_FIND_PATH_ENV) {
            config.enable_find_path = Some(Self::parse_bool(ENABLE_FIND_PATH_ENV, &val)?);
        }

        if let Ok(path) = env::var(CATALOG_ENV) {
            config.catalog = Some(PathBuf::from(path));
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse().map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Unknown output format: '{format}'"),
            })?);
        }

        if let Ok(seconds) = env::var(RESOLVE_TIMEOUT_ENV) {
            config.resolve_timeout_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: RESOLVE_TIMEOUT_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(mode);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
