//! LilyPond score generation
//!
//! Turns a [`Note`](crate::models::Note) and a [`Clef`](crate::models::Clef)
//! into a complete single-staff LilyPond document and writes it to disk.
//!
//! # Basic Usage
//!
//! ```no_run
//! use std::path::Path;
//! use sheet_music_maker::config::ScoreConfig;
//! use sheet_music_maker::lilypond::ScoreFileWriter;
//! use sheet_music_maker::models::{Alteration, Note, StandardClef};
//!
//! let note = Note::new('B', Alteration::Flat, 7)?;
//! let writer = ScoreFileWriter::new(ScoreConfig::default());
//! let path = writer.write(&note, &StandardClef::Treble, Path::new("scores"))?;
//! assert!(path.ends_with("Bb7_treble.ly"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod templates;
pub mod writer;

pub use errors::ScoreError;
pub use templates::{render_single_note, TemplateContext};
pub use writer::{ScoreFile, ScoreFileWriter, SCORE_EXTENSION};
