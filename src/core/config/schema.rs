//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: `repo_name` must be a plain
//! directory name, since it is joined onto the working directory.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::validate_component;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// repo_name = "MyRepo"
/// sync_working_copy = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Name of the repository directory inside the working directory
    pub repo_name: Option<String>,

    /// Whether commit/revert synchronize the caller's working file
    pub sync_working_copy: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.repo_name {
            validate_repo_name(name)?;
        }
        Ok(())
    }
}

/// Check that a repository name is a single, non-hidden path component.
///
/// Same rules as a tracked file name, except that reserved file names
/// such as `commits` are allowed.
pub fn validate_repo_name(name: &str) -> Result<(), ConfigError> {
    validate_component(name)
        .map_err(|e| ConfigError::InvalidValue(format!("invalid repo_name: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GlobalConfig::default();
        assert!(config.repo_name.is_none());
        assert!(config.sync_working_copy.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn valid_repo_name() {
        let config = GlobalConfig {
            repo_name: Some("Notes".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_repo_names() {
        for bad in ["", ".", "..", "a/b", "a\\b", ".hidden", "tab\there", "nul\0"] {
            let config = GlobalConfig {
                repo_name: Some(bad.to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn reserved_file_names_are_fine_for_repos() {
        assert!(validate_repo_name("commits").is_ok());
    }

    #[test]
    fn parse_from_toml() {
        let toml = r#"
            repo_name = "Vault"
            sync_working_copy = false
        "#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.repo_name.as_deref(), Some("Vault"));
        assert_eq!(config.sync_working_copy, Some(false));
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            repo_name = "MyRepo"
            unknown_field = true
        "#;

        let result: Result<GlobalConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
