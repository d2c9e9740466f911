//! Single-pitch note model and its two string projections
//!
//! A [`Note`] renders either as casual display text (`Bb7`, `E##4`) or as a
//! LilyPond pitch (`bes''''`, `eisis'`). Octave 3 is the unmarked LilyPond
//! octave; each step up adds an apostrophe, each step down a comma.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::alteration::Alteration;
use super::errors::NoteError;

/// Lowest supported octave
pub const MIN_OCTAVE: i32 = 0;

/// Highest supported octave
pub const MAX_OCTAVE: i32 = 8;

/// LilyPond octave marks, indexed by octave
const OCTAVE_MARKS: [&str; 9] = [
    ",,,", ",,", ",", "", "'", "''", "'''", "''''", "'''''",
];

/// LilyPond register marks for an octave, `None` outside 0-8
pub fn octave_mark(octave: i32) -> Option<&'static str> {
    usize::try_from(octave)
        .ok()
        .and_then(|index| OCTAVE_MARKS.get(index).copied())
}

/// Diatonic letter name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteName {
    pub const ALL: [NoteName; 7] = [
        NoteName::A,
        NoteName::B,
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
    ];

    /// Parse a letter, case-insensitive
    pub fn from_char(c: char) -> Result<Self, NoteError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(NoteName::A),
            'B' => Ok(NoteName::B),
            'C' => Ok(NoteName::C),
            'D' => Ok(NoteName::D),
            'E' => Ok(NoteName::E),
            'F' => Ok(NoteName::F),
            'G' => Ok(NoteName::G),
            _ => Err(NoteError::InvalidPitchName(c.to_string())),
        }
    }

    /// Uppercase letter used in the display form
    pub fn upper(&self) -> char {
        match self {
            NoteName::A => 'A',
            NoteName::B => 'B',
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
        }
    }

    /// Lowercase letter used in LilyPond
    pub fn lower(&self) -> char {
        self.upper().to_ascii_lowercase()
    }
}

impl FromStr for NoteName {
    type Err = NoteError;

    /// Exactly one letter; "", "H" and "c#" are all rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(NoteError::InvalidPitchName(s.to_string())),
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.upper())
    }
}

/// A pitch: letter, accidental and octave (0-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NoteFields")]
pub struct Note {
    name: NoteName,
    alteration: Alteration,
    octave: u8,
}

/// Unvalidated serialized form of a [`Note`]
#[derive(Deserialize)]
struct NoteFields {
    name: NoteName,
    alteration: Alteration,
    octave: i32,
}

impl TryFrom<NoteFields> for Note {
    type Error = NoteError;

    fn try_from(fields: NoteFields) -> Result<Self, Self::Error> {
        Self::from_parts(fields.name, fields.alteration, fields.octave)
    }
}

impl Note {
    /// Create a new note with validation
    pub fn new(name: char, alteration: Alteration, octave: i32) -> Result<Self, NoteError> {
        let name = NoteName::from_char(name)?;
        Self::from_parts(name, alteration, octave)
    }

    /// Same as [`Note::new`] for a letter given as a string
    pub fn from_name(name: &str, alteration: Alteration, octave: i32) -> Result<Self, NoteError> {
        let name: NoteName = name.parse()?;
        Self::from_parts(name, alteration, octave)
    }

    pub fn from_parts(
        name: NoteName,
        alteration: Alteration,
        octave: i32,
    ) -> Result<Self, NoteError> {
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(NoteError::InvalidOctave(octave));
        }
        Ok(Self {
            name,
            alteration,
            octave: octave as u8,
        })
    }

    pub fn name(&self) -> NoteName {
        self.name
    }

    pub fn alteration(&self) -> Alteration {
        self.alteration
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// Casual notation, e.g. "Bb7"
    pub fn display_repr(&self) -> String {
        format!(
            "{}{}{}",
            self.name.upper(),
            self.alteration.display_token(),
            self.octave
        )
    }

    /// LilyPond pitch, e.g. "bes''''"
    pub fn markup_repr(&self) -> String {
        format!(
            "{}{}{}",
            self.name.lower(),
            self.alteration.markup_token(),
            octave_mark(i32::from(self.octave)).unwrap_or_default()
        )
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_repr())
    }
}

impl FromStr for Note {
    type Err = NoteError;

    /// Parse the display form: letter, optional accidental, octave
    ///
    /// Examples:
    ///   "C3" → C natural, octave 3
    ///   "Bb7" → B flat, octave 7
    ///   "e##4" → E double sharp, octave 4
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let name = match chars.next() {
            Some(c) => NoteName::from_char(c)?,
            None => return Err(NoteError::InvalidPitchName(String::new())),
        };

        let rest = chars.as_str();
        let split = rest
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .unwrap_or(rest.len());
        let (accidental, octave_str) = rest.split_at(split);

        let alteration = Alteration::from_display_token(accidental)
            .ok_or_else(|| NoteError::InvalidAlteration(accidental.to_string()))?;

        let octave: i32 = octave_str
            .parse()
            .map_err(|_| NoteError::MissingOctave(s.to_string()))?;

        Self::from_parts(name, alteration, octave)
    }
}
