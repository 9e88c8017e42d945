//! # Public API
//!
//! String-keyed entry points for presentation layers.
//!
//! A UI holds the selected root as text. These functions accept that text
//! as-is and never fail: a root that is not one of the 12 canonical names
//! degrades to an empty scale, a blank fretboard or a muted chord shape.
//! Callers should treat an empty `notes` list as the invalid-input signal.
//!
//! ## Functions
//!
//! - [`scale_notes()`] - The seven notes of a scale
//! - [`scale_chords()`] - Diatonic triads for a list of scale notes
//! - [`generate_scale_data()`] - Notes and chords together
//! - [`chord_shape()`] - Guitar diagram for a triad
//! - [`fretboard_map()`] - Scale laid out over the neck
//! - [`chord_charts()`] - Chords with numerals and diagrams, one per degree
//!
//! ## Typical Usage
//!
//! ```rust
//! use scale_wizard::{generate_scale_data, ChordQuality, ScaleType};
//!
//! let data = generate_scale_data("A", ScaleType::Minor);
//! assert_eq!(data.notes.len(), 7);
//! assert_eq!(data.chords[0].quality, ChordQuality::Minor);
//!
//! let invalid = generate_scale_data("H", ScaleType::Major);
//! assert!(invalid.notes.is_empty());
//! assert!(invalid.chords.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::chord::{self, roman_numeral, Chord, ChordQuality};
use crate::fretboard::{map_fretboard, FretboardNote, DEFAULT_FRET_COUNT};
use crate::pitch::Note;
use crate::scale::{Scale, ScaleType};
use crate::shape::{resolve_shape, ChordShape};

/// Everything a scale view needs for one (root, type) selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleData {
    /// The root exactly as requested
    pub root: String,
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    pub notes: Vec<Note>,
    pub chords: Vec<Chord>,
}

/// A diatonic chord ready for a chord card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordChart {
    pub chord: Chord,
    pub numeral: String,
    pub shape: ChordShape,
}

fn parse_root(root: &str) -> Option<Note> {
    match root.parse::<Note>() {
        Ok(note) => Some(note),
        Err(e) => {
            tracing::debug!("{}, degrading to empty result", e);
            None
        }
    }
}

fn scale_for(root: &str, scale_type: ScaleType) -> Option<Scale> {
    parse_root(root).map(|note| Scale::new(note, scale_type))
}

/// Notes of the scale in degree order, or an empty vector for an unknown root.
///
/// ```
/// use scale_wizard::{scale_notes, Note, ScaleType};
///
/// assert_eq!(scale_notes("D", ScaleType::Major)[2], Note::FSharp);
/// assert!(scale_notes("H", ScaleType::Major).is_empty());
/// ```
pub fn scale_notes(root: &str, scale_type: ScaleType) -> Vec<Note> {
    scale_for(root, scale_type)
        .map(|scale| scale.notes().to_vec())
        .unwrap_or_default()
}

/// Diatonic triads on each of `notes`, see [`chord::scale_chords`].
pub fn scale_chords(notes: &[Note], scale_type: ScaleType) -> Vec<Chord> {
    chord::scale_chords(notes, scale_type)
}

/// Scale notes and their diatonic chords for one (root, type) selection.
///
/// An unknown root gives empty `notes` and `chords`; `root` is echoed back
/// unchanged either way.
///
/// ```
/// use scale_wizard::{generate_scale_data, ChordQuality, Note, ScaleType};
///
/// let data = generate_scale_data("G", ScaleType::Major);
/// assert_eq!(data.notes[6], Note::FSharp);
/// assert_eq!(data.chords[6].quality, ChordQuality::Diminished);
/// ```
pub fn generate_scale_data(root: &str, scale_type: ScaleType) -> ScaleData {
    let notes = scale_notes(root, scale_type);
    let chords = scale_chords(&notes, scale_type);
    ScaleData {
        root: root.to_string(),
        scale_type,
        notes,
        chords,
    }
}

/// Guitar diagram for a triad. Unknown roots get the all-muted shape.
pub fn chord_shape(root: &str, quality: ChordQuality) -> ChordShape {
    parse_root(root)
        .map(|note| resolve_shape(note, quality))
        .unwrap_or_else(ChordShape::muted)
}

/// Scale over frets `0..=fret_count` of every string, high E first.
///
/// An unknown root produces the full grid with nothing highlighted. Spans
/// above [`MAX_FRET_COUNT`](crate::MAX_FRET_COUNT) are truncated; callers
/// taking the span from user input should check it with
/// [`validate_fret_count`](crate::validate_fret_count) first.
pub fn fretboard_map(root: &str, scale_type: ScaleType, fret_count: usize) -> Vec<Vec<FretboardNote>> {
    let scale = scale_for(root, scale_type);
    map_fretboard(scale.as_ref(), fret_count)
}

/// [`fretboard_map`] over the standard 13-fret span.
pub fn fretboard_map_default(root: &str, scale_type: ScaleType) -> Vec<Vec<FretboardNote>> {
    fretboard_map(root, scale_type, DEFAULT_FRET_COUNT)
}

/// One chart per scale degree: chord, Roman numeral and diagram.
pub fn chord_charts(root: &str, scale_type: ScaleType) -> Vec<ChordChart> {
    generate_scale_data(root, scale_type)
        .chords
        .into_iter()
        .enumerate()
        .map(|(degree, chord)| ChordChart {
            numeral: roman_numeral(degree, chord.quality),
            shape: resolve_shape(chord.root, chord.quality),
            chord,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_data_echoes_request() {
        let data = generate_scale_data("E", ScaleType::Minor);
        assert_eq!(data.root, "E");
        assert_eq!(data.scale_type, ScaleType::Minor);
        assert_eq!(data.notes.len(), 7);
        assert_eq!(data.chords.len(), 7);
    }

    #[test]
    fn test_invalid_root_degrades() {
        assert!(scale_notes("H", ScaleType::Major).is_empty());
        let data = generate_scale_data("H", ScaleType::Major);
        assert_eq!(data.root, "H");
        assert!(data.notes.is_empty());
        assert!(data.chords.is_empty());
        assert!(chord_shape("H", ChordQuality::Major).is_muted());
        assert!(chord_charts("H", ScaleType::Minor).is_empty());
    }

    #[test]
    fn test_invalid_root_blank_fretboard() {
        let grid = fretboard_map_default("Cb", ScaleType::Major);
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|row| row.len() == 14));
        assert!(grid.iter().flatten().all(|c| !c.is_in_scale && !c.is_root));
    }

    #[test]
    fn test_chord_charts_c_major() {
        let charts = chord_charts("C", ScaleType::Major);
        let numerals: Vec<&str> = charts.iter().map(|c| c.numeral.as_str()).collect();
        assert_eq!(numerals, vec!["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
        assert_eq!(charts[0].shape.frets, [-1, 3, 2, 0, 1, 0]);
        assert_eq!(charts[4].shape.frets, [3, 2, 0, 0, 0, 3]);
        assert_eq!(charts[6].chord.symbol(), "Bdim");
    }

    #[test]
    fn test_scale_data_json() {
        let data = generate_scale_data("C", ScaleType::Major);
        let value: serde_json::Value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["type"], "Major");
        assert_eq!(value["notes"][0], "C");
        assert_eq!(value["chords"][6]["quality"], "Diminished");
        assert_eq!(value["chords"][6]["notes"], serde_json::json!(["B", "D", "F"]));
    }
}
