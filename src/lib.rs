//! Single-note LilyPond score generator
//!
//! Models a pitch (letter, accidental, octave), renders it as casual text and
//! as LilyPond syntax, and writes minimal one-staff `.ly` scores around it.

pub mod config;
pub mod lilypond;
pub mod models;

// Re-export commonly used types
pub use config::{ConfigError, ScoreConfig};
pub use lilypond::{ScoreError, ScoreFile, ScoreFileWriter};
pub use models::{Alteration, Clef, Note, NoteError, NoteName, StandardClef};
