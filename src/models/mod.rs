//! Pitch data model
//!
//! Notes, accidentals and clefs as plain value types.

pub mod alteration;
pub mod clef;
pub mod errors;
pub mod note;

pub use alteration::Alteration;
pub use clef::{Clef, StandardClef, UnknownClef};
pub use errors::NoteError;
pub use note::{octave_mark, Note, NoteName, MAX_OCTAVE, MIN_OCTAVE};
