//! Feature gates read once per resolution request.

use crate::config::Config;

/// Deployment-level feature switches.
///
/// Native path resolution is opt-in: it is attempted only when enabled here,
/// never based on what a particular provider advertises.
///
/// # Examples
///
/// ```
/// use docstack::{Config, Features};
///
/// assert!(!Features::default().find_path);
///
/// let config = Config { enable_find_path: Some(true), ..Default::default() };
/// assert!(Features::from(&config).find_path);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    /// Ask providers for native path resolution.
    pub find_path: bool,
}

impl Features {
    /// Features with native path resolution switched on.
    #[must_use]
    pub const fn with_find_path() -> Self {
        Self { find_path: true }
    }
}

impl From<&Config> for Features {
    fn from(config: &Config) -> Self {
        Self {
            find_path: config.find_path_enabled(),
        }
    }
}
