//! Front end settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rewind_tictactoe::DisplayOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "rewind_games.toml";

/// User-configurable settings for a game session.
///
/// Every field is optional in the file; missing ones take their defaults.
///
/// ```toml
/// order = "descending"
/// highlight_last_move = true
/// highlight_winning_line = true
/// log_file = "rewind_games.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Initial order of the move list.
    order: DisplayOrder,

    /// Mark the cell of the most recent move.
    highlight_last_move: bool,

    /// Mark the cells of a completed line.
    highlight_winning_line: bool,

    /// Where the interactive mode writes its log. No log when unset.
    log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order: DisplayOrder::Ascending,
            highlight_last_move: true,
            highlight_winning_line: true,
            log_file: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = %settings.order, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, or falls back to defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No settings file, using defaults");
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
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

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(*settings.order(), DisplayOrder::Ascending);
        assert!(*settings.highlight_last_move());
        assert!(*settings.highlight_winning_line());
        assert_eq!(settings.log_file(), &None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("order = \"descending\"").expect("valid toml");
        assert_eq!(*settings.order(), DisplayOrder::Descending);
        assert!(*settings.highlight_winning_line());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<Settings>("board_size = 4").is_err());
    }

    #[test]
    fn test_setter_overrides() {
        let settings = Settings::default().with_order(DisplayOrder::Descending);
        assert_eq!(*settings.order(), DisplayOrder::Descending);
    }
}
