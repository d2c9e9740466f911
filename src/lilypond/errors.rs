//! Error types for score generation

use std::path::PathBuf;

use thiserror::Error;

/// Score rendering and writing errors
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Storage write failed (missing directory, permissions, full disk)
    #[error("Failed to write score {path:?}: {source}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template failed to compile or render (indicates a bug in the template)
    #[error("Template rendering failed: {0}")]
    Template(#[from] mustache::Error),
}
