//! Configuration for commands and the paths commandflow reads and writes.
//!
//! This module provides the [`CommandConfig`] a [`Command`](crate::command::Command)
//! is constructed from and resolves the flow and history file paths,
//! expanding shell variables like `~`.

use serde::{Deserialize, Serialize};

use crate::action::{DEFAULT_LONG_DASH, DEFAULT_SHORT_DASH};

/// Default path for the flow definitions file
const DEFAULT_CONFIG_PATH: &str = "~/.commandflow/flows.yml";
/// Default path for the history of rendered commands
const DEFAULT_HISTORY_PATH: &str = "~/.commandflow/history.yml";

fn default_short_dash() -> String {
    DEFAULT_SHORT_DASH.to_string()
}

fn default_long_dash() -> String {
    DEFAULT_LONG_DASH.to_string()
}

/// Construction parameters of a command: the executable and its dashes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    #[serde(default)]
    pub exe: String,
    #[serde(default = "default_short_dash")]
    pub short_dash: String,
    #[serde(default = "default_long_dash")]
    pub long_dash: String,
}

impl CommandConfig {
    pub fn new(exe: &str) -> Self {
        Self {
            exe: exe.to_string(),
            ..Self::default()
        }
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            exe: String::new(),
            short_dash: default_short_dash(),
            long_dash: default_long_dash(),
        }
    }
}

/// Resolves the flow definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use commandflow_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/flows.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/flows.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Resolves the history file path the same way as [`get_config_path`].
pub fn get_history_path(history_path_arg: &Option<String>) -> String {
    let history_path = match history_path_arg {
        Some(history_path) => history_path,
        None => DEFAULT_HISTORY_PATH,
    };

    shellexpand::tilde(history_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/flows.yml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/flows.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.contains("flows.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/my-flows.yml".to_string());
        let result = get_config_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-flows.yml"));
    }

    #[test]
    fn test_get_history_path_with_none() {
        let result = get_history_path(&None);
        assert!(result.contains("history.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_command_config_defaults() {
        let config = CommandConfig::new("tar");
        assert_eq!(config.exe, "tar");
        assert_eq!(config.short_dash, "-");
        assert_eq!(config.long_dash, "--");
    }

    #[test]
    fn test_command_config_from_yaml() {
        let config: CommandConfig = serde_yaml::from_str("exe: dir\nshort_dash: /").unwrap();
        assert_eq!(config.exe, "dir");
        assert_eq!(config.short_dash, "/");
        assert_eq!(config.long_dash, "--");
    }
}
