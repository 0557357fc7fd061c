//! Configuration file loading for the checkers binary.
//!
//! Settings are read from a TOML file (`checkers.toml` in the current directory
//! unless another path is given). A missing file yields the defaults.

use checkers_core::Color;
use checkers_engine::{Board, BoardError, CapturePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not a valid board diagram.
    #[error("Invalid start position: {0}")]
    InvalidStartPosition(#[from] BoardError),
}

/// Who sits at the board.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the terminal.
    TwoPlayer,
    /// A human plays the random computer opponent.
    #[default]
    VsComputer,
}

/// A side, as written in the configuration file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    #[default]
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// Which capture chains are offered, as written in the configuration file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureSetting {
    #[default]
    AllPrefixes,
    MaximalOnly,
}

impl From<CaptureSetting> for CapturePolicy {
    fn from(setting: CaptureSetting) -> Self {
        match setting {
            CaptureSetting::AllPrefixes => CapturePolicy::AllPrefixes,
            CaptureSetting::MaximalOnly => CapturePolicy::MaximalOnly,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct CheckersConfig {
    /// Game mode. Defaults to playing against the computer.
    #[serde(default)]
    pub mode: Mode,
    /// Color played by the computer in `vs-computer` mode. Defaults to black.
    #[serde(default)]
    pub computer_color: Side,
    /// Capture chain policy. Defaults to offering every prefix.
    #[serde(default)]
    pub capture_policy: CaptureSetting,
    /// Seed for the computer opponent. Random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Board diagram to start from instead of the standard layout.
    #[serde(default)]
    pub start_position: Option<String>,
}

impl CheckersConfig {
    /// Loads the configuration from `path`, or from [`Self::default_path()`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map_or_else(Self::default_path, Path::to_path_buf);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Self::parse(&content)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default path to the configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("checkers.toml")
    }

    /// Returns the board a new game starts from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStartPosition`] if the diagram is malformed.
    pub fn start_board(&self) -> Result<Board, ConfigError> {
        match &self.start_position {
            Some(diagram) => Ok(Board::from_diagram(diagram)?),
            None => Ok(Board::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = CheckersConfig::parse("").unwrap();
        assert_eq!(config, CheckersConfig::default());
        assert_eq!(config.mode, Mode::VsComputer);
        assert_eq!(Color::from(config.computer_color), Color::Black);
        assert_eq!(
            CapturePolicy::from(config.capture_policy),
            CapturePolicy::AllPrefixes
        );
        assert_eq!(config.start_board().unwrap(), Board::new());
    }

    #[test]
    fn parse_full_config() {
        let config = CheckersConfig::parse(
            r#"
            mode = "two-player"
            computer_color = "white"
            capture_policy = "maximal-only"
            seed = 42
            start_position = "......../......../..w...../...b..../......../......../......../........"
            "#,
        )
        .unwrap();
        assert_eq!(config.mode, Mode::TwoPlayer);
        assert_eq!(config.computer_color, Side::White);
        assert_eq!(config.capture_policy, CaptureSetting::MaximalOnly);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.start_board().unwrap().count(Color::Black), 1);
    }

    #[test]
    fn invalid_toml() {
        assert!(matches!(
            CheckersConfig::parse("mode = "),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            CheckersConfig::parse("mode = \"solitaire\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn invalid_start_position() {
        let config = CheckersConfig::parse("start_position = \"w\"").unwrap();
        assert!(matches!(
            config.start_board(),
            Err(ConfigError::InvalidStartPosition(_))
        ));
    }

    #[test]
    fn missing_file_is_default() {
        let config =
            CheckersConfig::load(Some(Path::new("definitely/not/here/checkers.toml"))).unwrap();
        assert_eq!(config, CheckersConfig::default());
    }
}
