//! Clef capability
//!
//! Score writing only needs the clef's LilyPond keyword, so any type exposing
//! a token can stand in for a clef.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anything that names a LilyPond clef
pub trait Clef {
    /// LilyPond keyword following `\clef`
    fn token(&self) -> &str;
}

/// Clefs shipped with the crate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardClef {
    #[default]
    Treble,
    Bass,
    /// Treble clef sounding an octave lower (tenor voice)
    TrebleSubOctave,
}

impl StandardClef {
    pub const ALL: [StandardClef; 3] = [
        StandardClef::Treble,
        StandardClef::Bass,
        StandardClef::TrebleSubOctave,
    ];
}

impl Clef for StandardClef {
    fn token(&self) -> &str {
        match self {
            StandardClef::Treble => "treble",
            StandardClef::Bass => "bass",
            StandardClef::TrebleSubOctave => "treble_8",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown clef: {0:?} (expected treble, bass or treble_8)")]
pub struct UnknownClef(pub String);

impl FromStr for StandardClef {
    type Err = UnknownClef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StandardClef::ALL
            .into_iter()
            .find(|clef| clef.token() == s)
            .ok_or_else(|| UnknownClef(s.to_string()))
    }
}

impl fmt::Display for StandardClef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
