//! Common test utilities for CLI integration tests.
//!
//! Every test runs the `docstack` binary inside its own temporary directory
//! with an empty data directory and no `DOCSTACK_*` variables inherited from
//! the developer's shell.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog with a path-resolving provider, a legacy one and a failing one.
pub const CATALOG_YAML: &str = include_str!("../fixtures/catalog.yaml");

/// Target document three levels below the `home` root.
pub const DESIGN_DOC: &str = "doc://com.example.docs/42";

const DOCSTACK_ENV_VARS: [&str; 6] = [
    "DOCSTACK_ENABLE_FIND_PATH",
    "DOCSTACK_CATALOG",
    "DOCSTACK_OUTPUT_FORMAT",
    "DOCSTACK_RESOLVE_TIMEOUT_SECONDS",
    "DOCSTACK_LOG_MODE",
    "DOCSTACK_DATA_DIR",
];

/// Test environment with an isolated working and data directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for the spawned binary.
    pub temp_path: PathBuf,
    /// Data directory passed with `--data-dir`.
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("docstack-data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The binary with a clean environment and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("docstack").expect("Failed to find docstack binary");
        cmd.current_dir(&self.temp_path);
        for var in DOCSTACK_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// The binary with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Writes `contents` under the working directory and returns its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Writes the fixture catalog and returns its path.
    pub fn catalog(&self) -> PathBuf {
        self.write_file("catalog.yaml", CATALOG_YAML)
    }

    /// `docstack resolve` against the fixture catalog with native path
    /// resolution turned on.
    pub fn resolve(&self, uri: &str) -> Command {
        let catalog = self.catalog();
        let mut cmd = self.command();
        cmd.arg("--catalog")
            .arg(catalog)
            .arg("--enable-find-path")
            .arg("resolve")
            .arg(uri);
        cmd
    }
}
