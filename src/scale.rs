//! # Scale Deriver
//!
//! Derives the seven notes of a major or natural minor scale from its root.
//!
//! A scale has no stored identity: [`Scale`] is just a root and a
//! [`ScaleType`], and its notes are recomputed on demand from the interval
//! table.
//!
//! ## Example
//! ```rust
//! use scale_wizard::{Note, Scale, ScaleType};
//!
//! let a_minor = Scale::new(Note::A, ScaleType::Minor);
//! assert_eq!(
//!     a_minor.notes(),
//!     [Note::A, Note::B, Note::C, Note::D, Note::E, Note::F, Note::G]
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::Note;

/// Supported scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleType {
    Major,
    /// Natural minor (Aeolian)
    Minor,
}

impl ScaleType {
    pub const ALL: [ScaleType; 2] = [ScaleType::Major, ScaleType::Minor];

    /// Semitone offsets from the root for degrees 1-7.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Minor",
        }
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(ScaleType::Major),
            "minor" | "natural minor" => Ok(ScaleType::Minor),
            _ => Err(TheoryError::UnknownScaleType(s.to_string())),
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A root note plus scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub root: Note,
    pub scale_type: ScaleType,
}

impl Scale {
    pub fn new(root: Note, scale_type: ScaleType) -> Self {
        Scale { root, scale_type }
    }

    /// Scale notes in degree order, degree 1 (the root) first.
    pub fn notes(&self) -> [Note; 7] {
        self.scale_type
            .intervals()
            .map(|interval| self.root.transpose(interval))
    }

    /// 1-based scale degree of `note`, if it belongs to the scale.
    pub fn degree_of(&self, note: Note) -> Option<u8> {
        self.notes()
            .iter()
            .position(|&n| n == note)
            .map(|i| i as u8 + 1)
    }

    pub fn contains(&self, note: Note) -> bool {
        self.degree_of(note).is_some()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale_type)
    }
}
