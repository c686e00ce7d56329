//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use docstack::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let config = Config { resolve_timeout_seconds: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(timeout) = config.resolve_timeout_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "resolve_timeout_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        if let Some(ref catalog) = config.catalog {
            if catalog.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "catalog".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }
}
