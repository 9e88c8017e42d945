//! # Chord Deriver
//!
//! Builds the seven diatonic triads of a scale.
//!
//! The quality of each chord is not chosen independently: it is fixed by the
//! scale type and the degree the chord is built on. For a major scale the
//! pattern is I ii iii IV V vi vii°, for natural minor i ii° III iv v VI VII.
//!
//! ## Example
//! ```rust
//! use scale_wizard::chord::{scale_chords, ChordQuality};
//! use scale_wizard::{Note, Scale, ScaleType};
//!
//! let scale = Scale::new(Note::C, ScaleType::Major);
//! let chords = scale_chords(&scale.notes(), ScaleType::Major);
//!
//! assert_eq!(chords[1].root, Note::D);
//! assert_eq!(chords[1].quality, ChordQuality::Minor);
//! assert_eq!(chords[1].notes, [Note::D, Note::F, Note::A]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::Note;
use crate::scale::ScaleType;

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// Root, third and fifth as semitones above the root.
    pub fn intervals(self) -> [u8; 3] {
        match self {
            ChordQuality::Major => [0, 4, 7],
            ChordQuality::Minor => [0, 3, 7],
            ChordQuality::Diminished => [0, 3, 6],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Diminished => "Diminished",
        }
    }

    /// Chord-symbol suffix: "" for major, "m" for minor, "dim" for diminished.
    pub fn symbol(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
        }
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "M" and "m" are case-sensitive chord-symbol suffixes
        match s.trim() {
            "M" => return Ok(ChordQuality::Major),
            "m" => return Ok(ChordQuality::Minor),
            _ => {}
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" => Ok(ChordQuality::Major),
            "minor" | "min" => Ok(ChordQuality::Minor),
            "diminished" | "dim" => Ok(ChordQuality::Diminished),
            _ => Err(TheoryError::UnknownChordQuality(s.to_string())),
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const MAJOR_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

const MINOR_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
];

/// Diatonic chord qualities for degrees 1-7 of a scale type.
pub fn diatonic_qualities(scale_type: ScaleType) -> &'static [ChordQuality; 7] {
    match scale_type {
        ScaleType::Major => &MAJOR_QUALITIES,
        ScaleType::Minor => &MINOR_QUALITIES,
    }
}

/// Quality of the triad built on a 0-based scale degree.
///
/// # Panics
/// If `degree` is not in `0..7`.
pub fn chord_quality(scale_type: ScaleType, degree: usize) -> ChordQuality {
    diatonic_qualities(scale_type)[degree]
}

/// The three notes of a triad, root first.
pub fn chord_notes(root: Note, quality: ChordQuality) -> [Note; 3] {
    quality.intervals().map(|interval| root.transpose(interval))
}

/// A triad on a scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: Note,
    pub quality: ChordQuality,
    pub notes: [Note; 3],
}

impl Chord {
    pub fn new(root: Note, quality: ChordQuality) -> Self {
        Chord {
            root,
            quality,
            notes: chord_notes(root, quality),
        }
    }

    /// Chord symbol such as `"C#m"` or `"Bdim"`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root, self.quality.symbol())
    }

    /// Notes joined for display, e.g. `"C - E - G"`.
    pub fn spelled(&self) -> String {
        self.notes
            .iter()
            .map(|n| n.name())
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.quality)
    }
}

/// One diatonic chord per input note, in input order.
///
/// Input is expected to be the output of [`Scale::notes`](crate::Scale::notes)
/// or [`crate::scale_notes`]. An empty slice (invalid root) yields no chords;
/// anything past the seventh degree is ignored.
pub fn scale_chords(notes: &[Note], scale_type: ScaleType) -> Vec<Chord> {
    notes
        .iter()
        .zip(diatonic_qualities(scale_type))
        .map(|(&root, &quality)| Chord::new(root, quality))
        .collect()
}

/// Roman numeral label for a chord on a 0-based degree.
///
/// Major chords are upper case, minor lower case, diminished lower case with
/// a trailing `°`.
///
/// ```
/// use scale_wizard::chord::{roman_numeral, ChordQuality};
///
/// assert_eq!(roman_numeral(4, ChordQuality::Major), "V");
/// assert_eq!(roman_numeral(1, ChordQuality::Diminished), "ii°");
/// ```
///
/// # Panics
/// If `degree` is not in `0..7`.
pub fn roman_numeral(degree: usize, quality: ChordQuality) -> String {
    const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];
    let numeral = NUMERALS[degree];
    match quality {
        ChordQuality::Major => numeral.to_string(),
        ChordQuality::Minor => numeral.to_lowercase(),
        ChordQuality::Diminished => format!("{}°", numeral.to_lowercase()),
    }
}
