//! Configuration file discovery and loading.
//!
//! User configuration lives in the data directory; project configuration is
//! discovered by walking up from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the user configuration file inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Name of the shared project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "docstack.yaml";

/// Name of the private project configuration file.
pub const LOCAL_CONFIG_FILE: &str = "docstack.local.yaml";

/// One configuration file that was found, with its rank among the layers.
///
/// # Examples
///
/// ```
/// use docstack::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.docstack/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// assert_eq!(user_config.precedence, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Where the file was found.
    pub path: PathBuf,
    /// Rank among the file layers; later layers win.
    pub precedence: u8,
    /// Settings read from the file.
    pub config: Config,
}

/// Returns the default data directory, `~/.docstack`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".docstack"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "no home directory to place ~/.docstack in".into(),
        })
}

/// Finds and reads the user and project configuration files.
///
/// # Examples
///
/// ```no_run
/// use docstack::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// for source in &sources {
///     println!("{} (layer {})", source.path.display(), source.precedence);
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Every configuration file that applies to `working_dir`, lowest layer first.
    ///
    /// Searches for:
    /// 1. `{data_dir}/config.yaml` (precedence 1), data dir defaulting to `~/.docstack`
    /// 2. `docstack.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `docstack.local.yaml` next to it (precedence 3)
    ///
    /// # Errors
    ///
    /// Fails on the first file that exists but is unreadable or malformed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources: Vec<ConfigSource> =
            Self::load_user_config(data_dir)?.into_iter().collect();
        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir()?,
        };
        let path = dir.join(USER_CONFIG_FILE);

        if !path.is_file() {
            return Ok(None);
        }

        Ok(Some(ConfigSource {
            config: Self::load_file(&path)?,
            path,
            precedence: 1,
        }))
    }

    /// Project files from the nearest directory at or above `start_dir` that has any.
    ///
    /// Stops at the first directory containing either project file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Reads one YAML configuration file.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] if the file is unreadable, [`Error::Validation`]
    /// if it is not a valid configuration.
    pub fn load_file(path: &Path) -> Result<Config> {
        debug!("Reading configuration from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("unreadable configuration: {e}"),
        })?;

        // An empty file is an empty configuration.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("not a valid configuration: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_no_configs() {
        let temp_dir = TempDir::new().unwrap();
        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_discover_both_project_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "enable_find_path: false\n").unwrap();
        fs::write(temp_dir.path().join(LOCAL_CONFIG_FILE), "enable_find_path: true\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert_eq!(configs.len(), 2);

        let shared = configs.iter().find(|c| c.precedence == 2).unwrap();
        let local = configs.iter().find(|c| c.precedence == 3).unwrap();
        assert_eq!(shared.config.enable_find_path, Some(false));
        assert_eq!(local.config.enable_find_path, Some(true));
    }

    #[test]
    fn test_discover_stops_at_first_config() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "resolve_timeout_seconds: 9\n",
        )
        .unwrap();

        let configs = ConfigLoader::discover_project_configs(&child).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].config.resolve_timeout_seconds, Some(9));
    }

    #[test]
    fn test_load_all_uses_data_dir() {
        let data_dir = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(data_dir.path().join(USER_CONFIG_FILE), "log_mode: quiet\n").unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "output_format: json\n").unwrap();

        let sources = ConfigLoader::load_all(project.path(), Some(data_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[0].config.log_mode.as_deref(), Some("quiet"));
        assert_eq!(sources[1].precedence, 2);
    }
}
