use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "railsmith.toml";

/// Ruby version written to `.rubocop.yml` when none is configured
pub const DEFAULT_RUBY_VERSION: &str = "3.3";

/// Railsmith configuration (railsmith.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RailsmithConfig {
    /// Executable used for generator commands
    pub rails_command: String,

    /// Executable used for the bundle step
    pub bundle_command: String,

    /// Parent directory for applications created by `railsmith new`
    pub output_dir: PathBuf,

    /// Ruby version targeted by the static analysis configuration
    pub ruby_version: Option<String>,

    /// Show a spinner instead of streaming command output
    pub show_progress: bool,
}

impl Default for RailsmithConfig {
    fn default() -> Self {
        Self {
            rails_command: "rails".to_string(),
            bundle_command: "bundle".to_string(),
            output_dir: PathBuf::from(".."),
            ruby_version: None,
            show_progress: false,
        }
    }
}

impl RailsmithConfig {
    /// Load config from `./railsmith.toml`, falling back to the user config
    /// directory and finally to defaults
    pub fn load(working_dir: &Path) -> anyhow::Result<Self> {
        let local = working_dir.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(user) = Self::user_config_path() {
            if user.exists() {
                return Self::load_from(&user);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RailsmithConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// `<config_dir>/railsmith/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("railsmith").join("config.toml"))
    }

    pub fn ruby_version(&self) -> &str {
        self.ruby_version.as_deref().unwrap_or(DEFAULT_RUBY_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_takes_defaults() {
        let config: RailsmithConfig = toml::from_str(r#"ruby_version = "3.2.2""#).unwrap();
        assert_eq!(config.rails_command, "rails");
        assert_eq!(config.output_dir, PathBuf::from(".."));
        assert_eq!(config.ruby_version(), "3.2.2");
    }

    #[test]
    fn test_default_ruby_version() {
        assert_eq!(RailsmithConfig::default().ruby_version(), DEFAULT_RUBY_VERSION);
    }

    #[test]
    fn test_load_prefers_local_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "rails_command = \"bin/rails\"\nshow_progress = true\n",
        )
        .unwrap();

        let config = RailsmithConfig::load(dir.path()).unwrap();
        assert_eq!(config.rails_command, "bin/rails");
        assert!(config.show_progress);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "show_progress = \"sometimes\"").unwrap();

        let err = RailsmithConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
