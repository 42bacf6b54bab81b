//! Configuration for the board window.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Side length of the board area in pixels.
    pub board_size: f32,
    pub light_square: [u8; 3],
    pub dark_square: [u8; 3],
    /// Mark the legal destinations of the selected piece.
    pub highlight_moves: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: 512.0,
            light_square: [235, 235, 208],
            dark_square: [119, 148, 85],
            highlight_moves: true,
        }
    }
}

impl Config {
    /// Reads `path` when given and present; defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) if p.exists() => {
                let content = fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.to_path_buf(),
                    source,
                })?;
                Self::from_yaml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn square_size(&self) -> f32 {
        self.board_size / chess_engine::constants::BOARD_SIZE as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/chess.yaml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load(None).unwrap(), Config::default());
        assert_eq!(config.square_size(), 64.0);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("board_size: 640\nhighlight_moves: false\n").unwrap();
        assert_eq!(config.board_size, 640.0);
        assert!(!config.highlight_moves);
        assert_eq!(config.light_square, Config::default().light_square);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            Config::from_yaml("board_size: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }
}
