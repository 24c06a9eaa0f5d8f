//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp directory acting as `HOME`, so the CLI never reads
//! the developer's real config.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::builders::ArtifactsBuilder;

pub struct TestWorld {
    temp_dir: TempDir,
    config_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".pageaudit");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        Self {
            temp_dir,
            config_dir,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the config file the CLI picks up by default.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Write artifacts to `name` inside the world and return the path.
    pub fn write_artifacts(&self, name: &str, artifacts: &ArtifactsBuilder) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, artifacts.to_json()).expect("Failed to write artifacts");
        path
    }

    /// A `pageaudit` command with HOME pointed at this world.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pageaudit").expect("Failed to find pageaudit binary");
        cmd.env("HOME", self.root())
            .env("USERPROFILE", self.root())
            .env_remove("PAGEAUDIT_LOG")
            .current_dir(self.root());
        cmd
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let output = self.command().arg("--format").arg("json").args(args).output()?;
        if !output.status.success() {
            anyhow::bail!(
                "pageaudit failed: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
