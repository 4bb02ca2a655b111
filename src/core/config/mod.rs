//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. `MYVCS_REPO` environment variable (repo name only)
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$MYVCS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/myvcs/config.toml`
//! 3. `~/.myvcs/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use myvcs::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Repository directory: {}", config.repo_name());
//! println!("Sync working copy: {}", config.sync_working_copy());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Repository directory used when nothing else is configured.
pub const DEFAULT_REPO_NAME: &str = "MyRepo";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MYVCS_CONFIG";

/// Environment variable overriding the repository directory name.
pub const REPO_ENV: &str = "MYVCS_REPO";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repo name from the environment, if set
    env_repo_name: Option<String>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment and default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or if
    /// any value is invalid. Missing config files are not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Load configuration using an explicit environment lookup and home dir.
    pub fn load_with(
        env: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let (global, global_path) = match Self::locate_global(&env, home) {
            Some(path) => (Self::read_global_config(&path)?, Some(path)),
            None => (GlobalConfig::default(), None),
        };
        global.validate()?;

        let env_repo_name = env(REPO_ENV).filter(|s| !s.is_empty());
        if let Some(name) = &env_repo_name {
            schema::validate_repo_name(name)?;
        }

        Ok(Config {
            global,
            env_repo_name,
            global_path,
        })
    }

    /// Find the first existing global config file.
    fn locate_global(
        env: &impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Option<PathBuf> {
        let candidates = [
            env(CONFIG_ENV).map(PathBuf::from),
            env("XDG_CONFIG_HOME").map(|xdg| PathBuf::from(xdg).join("myvcs/config.toml")),
            home.map(|h| h.join(".myvcs/config.toml")),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }

    /// Read and parse a global config file.
    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path of the config file that was loaded, if any.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the repository directory name.
    ///
    /// Defaults to "MyRepo" if not configured.
    pub fn repo_name(&self) -> &str {
        self.env_repo_name
            .as_deref()
            .or(self.global.repo_name.as_deref())
            .unwrap_or(DEFAULT_REPO_NAME)
    }

    /// Check if commit/revert synchronize the working file.
    ///
    /// Defaults to `true` if not configured.
    pub fn sync_working_copy(&self) -> bool {
        self.global.sync_working_copy.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_any_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_with(env_from(&[]), Some(temp.path().to_path_buf())).unwrap();

        assert_eq!(config.repo_name(), DEFAULT_REPO_NAME);
        assert!(config.sync_working_copy());
        assert!(config.global_path().is_none());
    }

    #[test]
    fn reads_home_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".myvcs");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.toml"),
            "repo_name = \"Vault\"\nsync_working_copy = false\n",
        )
        .unwrap();

        let config = Config::load_with(env_from(&[]), Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(config.repo_name(), "Vault");
        assert!(!config.sync_working_copy());
        assert_eq!(config.global_path(), Some(dir.join("config.toml").as_path()));
    }

    #[test]
    fn explicit_config_env_wins_over_home() {
        let temp = TempDir::new().unwrap();
        let home_dir = temp.path().join(".myvcs");
        fs::create_dir_all(&home_dir).unwrap();
        fs::write(home_dir.join("config.toml"), "repo_name = \"Home\"\n").unwrap();

        let explicit = temp.path().join("explicit.toml");
        fs::write(&explicit, "repo_name = \"Explicit\"\n").unwrap();

        let env = env_from(&[(CONFIG_ENV, explicit.display().to_string())]);
        let config = Config::load_with(env, Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(config.repo_name(), "Explicit");
    }

    #[test]
    fn xdg_config_is_found() {
        let temp = TempDir::new().unwrap();
        let xdg = temp.path().join("xdg");
        fs::create_dir_all(xdg.join("myvcs")).unwrap();
        fs::write(xdg.join("myvcs/config.toml"), "repo_name = \"Xdg\"\n").unwrap();

        let env = env_from(&[("XDG_CONFIG_HOME", xdg.display().to_string())]);
        let config = Config::load_with(env, None).unwrap();
        assert_eq!(config.repo_name(), "Xdg");
    }

    #[test]
    fn repo_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("config.toml");
        fs::write(&explicit, "repo_name = \"FromFile\"\n").unwrap();

        let env = env_from(&[
            (CONFIG_ENV, explicit.display().to_string()),
            (REPO_ENV, "FromEnv".to_string()),
        ]);
        let config = Config::load_with(env, None).unwrap();
        assert_eq!(config.repo_name(), "FromEnv");
    }

    #[test]
    fn invalid_repo_env_rejected() {
        let env = env_from(&[(REPO_ENV, "../escape".to_string())]);
        let result = Config::load_with(env, None);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("config.toml");
        fs::write(&explicit, "repo_name = [not toml").unwrap();

        let env = env_from(&[(CONFIG_ENV, explicit.display().to_string())]);
        let result = Config::load_with(env, None);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
