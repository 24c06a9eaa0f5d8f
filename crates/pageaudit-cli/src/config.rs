use crate::types::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for pageaudit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// When non-empty, only these audit ids run
    #[serde(default)]
    pub only_audits: Vec<String>,

    /// Audit ids that never run
    #[serde(default)]
    pub skip_audits: Vec<String>,

    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load config from the default location (~/.pageaudit/config.toml)
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Get the default config file path (~/.pageaudit/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".pageaudit").join("config.toml"))
    }

    /// Whether an audit id is enabled by this config
    pub fn is_enabled(&self, id: &str) -> bool {
        let selected = self.only_audits.is_empty() || self.only_audits.iter().any(|a| a == id);
        selected && !self.skip_audits.iter().any(|a| a == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "only_audits = [\"bf-cache\"]\nskip_audits = []\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.only_audits, vec!["bf-cache"]);
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "format = \"yaml\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{}", err).contains("Invalid config"));
    }

    #[test]
    fn test_is_enabled() {
        let config = Config::default();
        assert!(config.is_enabled("bf-cache"));

        let only = Config {
            only_audits: vec!["other".to_string()],
            ..Config::default()
        };
        assert!(!only.is_enabled("bf-cache"));

        let skip = Config {
            skip_audits: vec!["bf-cache".to_string()],
            ..Config::default()
        };
        assert!(!skip.is_enabled("bf-cache"));
    }
}
