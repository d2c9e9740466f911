//! Score configuration
//!
//! Literal directives baked into every generated score, plus the default
//! output directory. Loaded from YAML; every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Template constants and output location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// LilyPond version written in the `\version` line (e.g., "2.22.2")
    pub lilypond_version: String,

    /// Paper size directive, written verbatim
    pub paper_size: String,

    /// Header directive, written verbatim (suppresses the default tagline)
    pub header: String,

    /// Directory scores are written to when none is given explicitly
    pub target_dir: PathBuf,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            lilypond_version: "2.22.2".to_string(),
            paper_size: "#(set-default-paper-size '(cons (* 80 pt) (* 30 pt)))".to_string(),
            header: "\\header { tagline = \" \" }".to_string(),
            target_dir: PathBuf::from("target"),
        }
    }
}

impl ScoreConfig {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded score config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
