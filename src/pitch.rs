//! # Pitch Model
//!
//! The 12-tone chromatic vocabulary and pitch-class arithmetic.
//!
//! Notes are octave-independent pitch classes identified by their position in
//! the chromatic sequence `C, C#, D, ... B` (index 0-11). Only sharp spellings
//! exist; there is no enharmonic modeling.
//!
//! All arithmetic is `(index + interval) % 12`. Intervals are always
//! non-negative semitone counts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// A chromatic pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Note {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

/// The chromatic sequence, indexed by pitch class.
pub const NOTES: [Note; 12] = [
    Note::C,
    Note::CSharp,
    Note::D,
    Note::DSharp,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
    Note::ASharp,
    Note::B,
];

impl Note {
    /// Pitch class index (C=0, B=11)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Note at a pitch class index, wrapping past B back to C.
    pub fn from_index(index: usize) -> Note {
        NOTES[index % 12]
    }

    /// Canonical name, e.g. `"F#"`
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }

    /// Move up by `semitones`, wrapping within the octave.
    ///
    /// ```
    /// use scale_wizard::Note;
    ///
    /// assert_eq!(Note::A.transpose(3), Note::C);
    /// assert_eq!(Note::E.transpose(12), Note::E);
    /// ```
    pub fn transpose(self, semitones: u8) -> Note {
        Note::from_index(self.index() + semitones as usize)
    }

    /// Semitones from `reference` up to `self` (0-11).
    pub fn semitones_above(self, reference: Note) -> u8 {
        ((self.index() + 12 - reference.index()) % 12) as u8
    }
}

/// Position of `name` in the chromatic sequence.
///
/// Returns `None` for anything that is not a canonical note name. Callers must
/// treat `None` as invalid input rather than substituting a default.
///
/// ```
/// use scale_wizard::pitch::note_index;
///
/// assert_eq!(note_index("C"), Some(0));
/// assert_eq!(note_index("A#"), Some(10));
/// assert_eq!(note_index("H"), None);
/// ```
pub fn note_index(name: &str) -> Option<usize> {
    NOTES.iter().position(|note| note.name() == name)
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        note_index(s)
            .map(Note::from_index)
            .ok_or_else(|| TheoryError::UnknownNote(s.to_string()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
