//! # Fretboard Mapper
//!
//! Lays a scale out over a six-string guitar neck in standard tuning.
//!
//! The result is one row per string, in [`TUNING`] order (high E first, low E
//! last), and one cell per fret from the open string (fret 0) up to and
//! including the requested fret count. Each cell carries the note sounded at
//! that position and its relationship to the scale.
//!
//! When there is no scale (the caller's root was not a valid note) the grid
//! is still produced, with nothing marked as in-scale or root.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::pitch::Note;
use crate::scale::Scale;

/// Open strings, highest-pitched first.
pub const TUNING: [Note; 6] = [Note::E, Note::B, Note::G, Note::D, Note::A, Note::E];

/// Frets 0 through 13, the span of the on-screen neck.
pub const DEFAULT_FRET_COUNT: usize = 13;

/// Longest neck that can be mapped.
pub const MAX_FRET_COUNT: usize = 24;

/// Accept a requested fret count only if it is within `1..=MAX_FRET_COUNT`.
pub fn validate_fret_count(fret_count: usize) -> Result<usize> {
    if (1..=MAX_FRET_COUNT).contains(&fret_count) {
        Ok(fret_count)
    } else {
        Err(TheoryError::FretCount(fret_count))
    }
}

/// One string/fret position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardNote {
    pub note: Note,
    /// Fret number, i.e. semitones above the open string
    pub interval: usize,
    pub is_root: bool,
    pub is_in_scale: bool,
    /// 1-based scale degree
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scale_degree: Option<u8>,
}

/// Map `scale` onto every string for frets `0..=fret_count`.
///
/// Counts above [`MAX_FRET_COUNT`] are cut down to it.
pub fn map_fretboard(scale: Option<&Scale>, fret_count: usize) -> Vec<Vec<FretboardNote>> {
    if fret_count > MAX_FRET_COUNT {
        tracing::warn!(fret_count, "fret count above {}, truncating", MAX_FRET_COUNT);
    }
    let fret_count = fret_count.min(MAX_FRET_COUNT);
    let scale_notes = scale.map(|s| s.notes());

    TUNING
        .iter()
        .map(|&open| {
            (0..=fret_count)
                .map(|fret| {
                    let note = Note::from_index(open.index() + fret);
                    let scale_degree = scale_notes
                        .as_ref()
                        .and_then(|notes| notes.iter().position(|&n| n == note))
                        .map(|i| i as u8 + 1);

                    FretboardNote {
                        note,
                        interval: fret,
                        is_root: scale.is_some_and(|s| s.root == note),
                        is_in_scale: scale_degree.is_some(),
                        scale_degree,
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleType;

    #[test]
    fn test_grid_dimensions() {
        let scale = Scale::new(Note::C, ScaleType::Major);
        let grid = map_fretboard(Some(&scale), DEFAULT_FRET_COUNT);
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|row| row.len() == DEFAULT_FRET_COUNT + 1));

        let short = map_fretboard(Some(&scale), 4);
        assert!(short.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn test_oversized_fret_count_is_truncated() {
        let scale = Scale::new(Note::C, ScaleType::Major);
        let grid = map_fretboard(Some(&scale), usize::MAX);
        assert!(grid.iter().all(|row| row.len() == MAX_FRET_COUNT + 1));
        assert_eq!(grid[5][MAX_FRET_COUNT].interval, MAX_FRET_COUNT);
    }

    #[test]
    fn test_validate_fret_count() {
        assert_eq!(validate_fret_count(1).unwrap(), 1);
        assert_eq!(validate_fret_count(MAX_FRET_COUNT).unwrap(), MAX_FRET_COUNT);
        assert!(matches!(validate_fret_count(0), Err(TheoryError::FretCount(0))));
        assert!(matches!(validate_fret_count(25), Err(TheoryError::FretCount(25))));
        assert!(validate_fret_count(usize::MAX).is_err());
    }

    #[test]
    fn test_open_strings_follow_tuning() {
        let grid = map_fretboard(None, DEFAULT_FRET_COUNT);
        let open: Vec<Note> = grid.iter().map(|row| row[0].note).collect();
        assert_eq!(open, TUNING.to_vec());
    }

    #[test]
    fn test_twelfth_fret_repeats_open_string() {
        let grid = map_fretboard(None, DEFAULT_FRET_COUNT);
        for row in &grid {
            assert_eq!(row[12].note, row[0].note);
            assert_eq!(row[12].interval, 12);
        }
    }

    #[test]
    fn test_c_major_on_low_e() {
        let scale = Scale::new(Note::C, ScaleType::Major);
        let grid = map_fretboard(Some(&scale), DEFAULT_FRET_COUNT);
        let low_e = &grid[5];

        assert_eq!(low_e[1].note, Note::F);
        assert!(low_e[1].is_in_scale);
        assert!(!low_e[1].is_root);
        assert_eq!(low_e[1].scale_degree, Some(4));

        assert_eq!(low_e[2].note, Note::FSharp);
        assert!(!low_e[2].is_in_scale);
        assert_eq!(low_e[2].scale_degree, None);

        assert_eq!(low_e[8].note, Note::C);
        assert!(low_e[8].is_root);
        assert_eq!(low_e[8].scale_degree, Some(1));
    }

    #[test]
    fn test_no_scale_is_blank() {
        let grid = map_fretboard(None, DEFAULT_FRET_COUNT);
        for cell in grid.iter().flatten() {
            assert!(!cell.is_in_scale);
            assert!(!cell.is_root);
            assert_eq!(cell.scale_degree, None);
        }
    }

    #[test]
    fn test_json_field_names() {
        let scale = Scale::new(Note::E, ScaleType::Minor);
        let grid = map_fretboard(Some(&scale), 0);
        let json = serde_json::to_string(&grid[0][0]).unwrap();
        assert_eq!(
            json,
            r#"{"note":"E","interval":0,"isRoot":true,"isInScale":true,"scaleDegree":1}"#
        );

        let blank = map_fretboard(None, 0);
        let json = serde_json::to_string(&blank[0][0]).unwrap();
        assert!(!json.contains("scaleDegree"));
    }
}
