//! LilyPond template rendering
//!
//! Scores are produced from a Mustache template. Every substitution uses the
//! triple-brace form so apostrophes in octave marks and quotes in the header
//! directive are written verbatim instead of HTML-escaped.
//!
//! The single-note template draws one staff with the time signature hidden and
//! `\time 100/2` so no bar line falls inside the fragment. The note is written
//! twice as whole notes.

use serde::Serialize;

use crate::config::ScoreConfig;

/// Single-note staff template
pub const SINGLE_NOTE_TEMPLATE: &str = include_str!("templates/single_note.ly.mustache");

/// Context data for template rendering
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// LilyPond version (e.g., "2.22.2")
    pub version: String,

    /// Paper size directive
    pub paper_size: String,

    /// Header directive
    pub header: String,

    /// Clef keyword (e.g., "treble")
    pub clef: String,

    /// Note in LilyPond syntax, without duration
    pub note: String,
}

impl TemplateContext {
    /// Build a context from config constants and the per-score values
    pub fn new(config: &ScoreConfig, clef: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            version: config.lilypond_version.clone(),
            paper_size: config.paper_size.clone(),
            header: config.header.clone(),
            clef: clef.into(),
            note: note.into(),
        }
    }
}

/// Render the single-note template
pub fn render_single_note(context: &TemplateContext) -> Result<String, mustache::Error> {
    let template = mustache::compile_str(SINGLE_NOTE_TEMPLATE)?;
    template.render_to_string(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_all_fields() {
        let context = TemplateContext::new(&ScoreConfig::default(), "bass", "fis,,");
        let rendered = render_single_note(&context).unwrap();

        assert!(rendered.starts_with("\\version \"2.22.2\"\n"));
        assert!(rendered.contains("#(set-default-paper-size '(cons (* 80 pt) (* 30 pt)))\n"));
        assert!(rendered.contains("\\header { tagline = \" \" }\n"));
        assert!(rendered.contains("    \\clef bass\n"));
        assert!(rendered.contains("    | fis,,1 fis,,1 |\n"));
    }

    #[test]
    fn test_render_does_not_escape_apostrophes() {
        let context = TemplateContext::new(&ScoreConfig::default(), "treble", "bes''''");
        let rendered = render_single_note(&context).unwrap();

        assert!(rendered.contains("| bes''''1 bes''''1 |"));
        assert!(!rendered.contains("&#39;"));
        assert!(!rendered.contains("&quot;"));
    }

    #[test]
    fn test_render_fixed_staff_directives() {
        let context = TemplateContext::new(&ScoreConfig::default(), "treble", "c");
        let rendered = render_single_note(&context).unwrap();

        assert!(rendered.contains("\\new Staff \\with {\n"));
        assert!(rendered.contains("\\override TimeSignature.stencil = ##f\n"));
        assert!(rendered.contains("\\time 100/2"));
        assert!(rendered.contains("\\key c \\major\n"));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn test_render_uses_configured_version() {
        let config = ScoreConfig {
            lilypond_version: "2.24.0".to_string(),
            ..ScoreConfig::default()
        };
        let context = TemplateContext::new(&config, "treble", "c");
        let rendered = render_single_note(&context).unwrap();

        assert!(rendered.starts_with("\\version \"2.24.0\""));
    }
}
