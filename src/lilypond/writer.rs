//! Single-note score files
//!
//! A score is named after the note's display form and the clef token
//! (`Bb7_treble.ly`), so every (pitch, clef) pair maps to its own file and
//! rewriting the same pair replaces the previous file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::errors::ScoreError;
use super::templates::{render_single_note, TemplateContext};
use crate::config::ScoreConfig;
use crate::models::{Clef, Note};

/// File extension of generated scores
pub const SCORE_EXTENSION: &str = "ly";

/// Unix mode of written scores (temporary files start out as 0600)
#[cfg(unix)]
pub const SCORE_FILE_MODE: u32 = 0o644;

/// A rendered score: file name plus document body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreFile {
    file_name: String,
    body: String,
}

impl ScoreFile {
    /// File name for a note/clef pair, e.g. "E##4_bass.ly"
    pub fn file_name_for<C: Clef + ?Sized>(note: &Note, clef: &C) -> String {
        format!(
            "{}_{}.{}",
            note.display_repr(),
            clef.token(),
            SCORE_EXTENSION
        )
    }

    /// Render the document without touching storage
    pub fn render<C: Clef + ?Sized>(
        note: &Note,
        clef: &C,
        config: &ScoreConfig,
    ) -> Result<Self, ScoreError> {
        let context = TemplateContext::new(config, clef.token(), note.markup_repr());
        let body = render_single_note(&context)?;

        Ok(Self {
            file_name: Self::file_name_for(note, clef),
            body,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// Writes single-note scores to a directory
#[derive(Debug, Clone, Default)]
pub struct ScoreFileWriter {
    config: ScoreConfig,
}

impl ScoreFileWriter {
    pub fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Render and write one score into `target_dir`, returning its path
    ///
    /// The body goes to a temporary file in `target_dir` that is then renamed
    /// over the final path, so readers never see a partial score. An existing
    /// file for the same note and clef is replaced.
    pub fn write<C: Clef + ?Sized>(
        &self,
        note: &Note,
        clef: &C,
        target_dir: &Path,
    ) -> Result<PathBuf, ScoreError> {
        let score = ScoreFile::render(note, clef, &self.config)?;
        let path = score.path_in(target_dir);
        log::debug!("Writing {} ({})", path.display(), note.markup_repr());

        let io_error = |source: std::io::Error| ScoreError::IoWrite {
            path: path.clone(),
            source,
        };

        let mut file = NamedTempFile::new_in(target_dir).map_err(io_error)?;
        file.write_all(score.body().as_bytes()).map_err(io_error)?;
        file.flush().map_err(io_error)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(SCORE_FILE_MODE);
            file.as_file().set_permissions(permissions).map_err(io_error)?;
        }
        file.persist(&path).map_err(|e| io_error(e.error))?;

        log::info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Write one score per note, stopping at the first failure
    pub fn write_all<'a, I, C>(
        &self,
        notes: I,
        clef: &C,
        target_dir: &Path,
    ) -> Result<Vec<PathBuf>, ScoreError>
    where
        I: IntoIterator<Item = &'a Note>,
        C: Clef + ?Sized,
    {
        notes
            .into_iter()
            .map(|note| self.write(note, clef, target_dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Alteration, StandardClef};

    #[test]
    fn test_file_name_uses_display_form_and_clef_token() {
        let note = Note::new('E', Alteration::DoubleSharp, 4).unwrap();
        assert_eq!(
            ScoreFile::file_name_for(&note, &StandardClef::Bass),
            "E##4_bass.ly"
        );

        let note = Note::new('g', Alteration::NoAlteration, 2).unwrap();
        assert_eq!(
            ScoreFile::file_name_for(&note, &StandardClef::TrebleSubOctave),
            "G2_treble_8.ly"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let note = Note::new('B', Alteration::Flat, 7).unwrap();
        let config = ScoreConfig::default();
        let first = ScoreFile::render(&note, &StandardClef::Treble, &config).unwrap();
        let second = ScoreFile::render(&note, &StandardClef::Treble, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_body_contents() {
        let note = Note::new('B', Alteration::Flat, 7).unwrap();
        let score =
            ScoreFile::render(&note, &StandardClef::Treble, &ScoreConfig::default()).unwrap();

        assert_eq!(score.file_name(), "Bb7_treble.ly");
        assert!(score.body().contains("\\clef treble\n"));
        assert!(score.body().contains("| bes''''1 bes''''1 |"));
    }

    #[test]
    fn test_path_in() {
        let note = Note::new('C', Alteration::NoAlteration, 3).unwrap();
        let score =
            ScoreFile::render(&note, &StandardClef::Treble, &ScoreConfig::default()).unwrap();
        assert_eq!(
            score.path_in(Path::new("/scores")),
            PathBuf::from("/scores/C3_treble.ly")
        );
    }
}
