//! Command to print the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use docstack::config::DEFAULT_RESOLVE_TIMEOUT_SECONDS;
use docstack::Config;

/// Show the configuration after every layer has been merged.
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let yaml = serde_yaml::to_string(&with_defaults(config))
            .map_err(|e| CliError::Library(e.into()))?;
        print!("{yaml}");
        Ok(())
    }
}

/// Fills unset settings with the values the resolver would use.
fn with_defaults(config: Config) -> Config {
    Config {
        enable_find_path: Some(config.find_path_enabled()),
        output_format: Some(config.output_format()),
        log_mode: config.log_mode.or_else(|| Some("normal".to_string())),
        resolve_timeout_seconds: config
            .resolve_timeout_seconds
            .or(Some(DEFAULT_RESOLVE_TIMEOUT_SECONDS)),
        ..config
    }
}
