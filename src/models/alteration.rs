//! Accidentals applied to a note name
//!
//! Each variant carries no data; the two projections are constant lookups
//! (display form as typed in casual notation, LilyPond form in Dutch naming).

use serde::{Deserialize, Serialize};

/// Pitch alteration (accidental)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alteration {
    /// Natural pitch, no accidental written
    #[default]
    NoAlteration,
    /// Raised by one semitone
    Sharp,
    /// Raised by two semitones
    DoubleSharp,
    /// Lowered by one semitone
    Flat,
    /// Lowered by two semitones
    DoubleFlat,
}

impl Alteration {
    /// All alterations, in table order
    pub const ALL: [Alteration; 5] = [
        Alteration::NoAlteration,
        Alteration::Sharp,
        Alteration::DoubleSharp,
        Alteration::Flat,
        Alteration::DoubleFlat,
    ];

    /// Accidental as typed in casual notation ("#", "##", "b", "bb" or empty)
    pub fn display_token(&self) -> &'static str {
        match self {
            Alteration::NoAlteration => "",
            Alteration::Sharp => "#",
            Alteration::DoubleSharp => "##",
            Alteration::Flat => "b",
            Alteration::DoubleFlat => "bb",
        }
    }

    /// Accidental suffix in LilyPond syntax, appended directly to the
    /// lowercase note name
    pub fn markup_token(&self) -> &'static str {
        match self {
            Alteration::NoAlteration => "",
            Alteration::Sharp => "is",
            Alteration::DoubleSharp => "isis",
            Alteration::Flat => "es",
            Alteration::DoubleFlat => "eses",
        }
    }

    /// Inverse of [`Alteration::display_token`]
    ///
    /// Examples:
    ///   "" → NoAlteration
    ///   "#" → Sharp
    ///   "bb" → DoubleFlat
    pub fn from_display_token(token: &str) -> Option<Alteration> {
        match token {
            "" => Some(Alteration::NoAlteration),
            "#" => Some(Alteration::Sharp),
            "##" => Some(Alteration::DoubleSharp),
            "b" => Some(Alteration::Flat),
            "bb" => Some(Alteration::DoubleFlat),
            _ => None,
        }
    }
}
