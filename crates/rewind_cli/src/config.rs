//! Front-end configuration.

use crate::render::OutputFormat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rewind_tictactoe::JumpPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play or replay session.
///
/// ```toml
/// format = "json"
/// jump_policy = "clamp"
/// echo_rejections = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// How views are written.
    #[serde(default)]
    format: OutputFormat,

    /// Handling of history jumps past the latest ply.
    #[serde(default)]
    jump_policy: JumpPolicy,

    /// Report ignored intents and bad input lines on stderr.
    #[serde(default = "default_echo_rejections")]
    echo_rejections: bool,
}

#[instrument]
fn default_echo_rejections() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            jump_policy: JumpPolicy::default(),
            echo_rejections: default_echo_rejections(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(format = ?config.format, jump_policy = %config.jump_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.format(), OutputFormat::Text);
        assert_eq!(*config.jump_policy(), JumpPolicy::Ignore);
        assert!(*config.echo_rejections());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            r#"
format = "json"
jump_policy = "clamp"
echo_rejections = false
"#,
        );
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.format(), OutputFormat::Json);
        assert_eq!(*config.jump_policy(), JumpPolicy::Clamp);
        assert!(!*config.echo_rejections());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("jump_policy = \"clamp\"\n");
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.format(), OutputFormat::Text);
        assert!(*config.echo_rejections());
    }

    #[test]
    fn test_bad_value_is_error() {
        let file = write_config("format = \"yaml\"\n");
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/rewind.toml"))).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_setters_override() {
        let config = AppConfig::default()
            .with_format(OutputFormat::Json)
            .with_jump_policy(JumpPolicy::Clamp);
        assert_eq!(*config.format(), OutputFormat::Json);
        assert_eq!(*config.jump_policy(), JumpPolicy::Clamp);
    }
}
