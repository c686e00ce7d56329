//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use docstack::config::{Config, ConfigMerger};
///
/// let low = Config { resolve_timeout_seconds: Some(10), ..Default::default() };
/// let high = Config { resolve_timeout_seconds: Some(60), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.resolve_timeout_seconds, Some(60));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target; set fields in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.enable_find_path.is_some() {
            target.enable_find_path = source.enable_find_path;
        }

        if source.catalog.is_some() {
            target.catalog.clone_from(&source.catalog);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if source.resolve_timeout_seconds.is_some() {
            target.resolve_timeout_seconds = source.resolve_timeout_seconds;
        }
    }
}
