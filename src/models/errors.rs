//! Error types for note construction and parsing

use thiserror::Error;

/// Errors raised while building a [`Note`](super::Note)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// Letter outside A-G
    #[error("Invalid pitch name: {0:?} (must be one of A-G)")]
    InvalidPitchName(String),

    /// Octave outside 0-8
    #[error("Invalid octave: {0} (must be 0-8)")]
    InvalidOctave(i32),

    /// Accidental that is none of "", "#", "##", "b", "bb"
    #[error("Invalid alteration: {0:?}")]
    InvalidAlteration(String),

    /// Display string ended before an octave digit
    #[error("Missing octave in {0:?}")]
    MissingOctave(String),
}
