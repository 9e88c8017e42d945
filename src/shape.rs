//! # Chord-Shape Resolver
//!
//! Picks a fingerable six-string shape for a triad in standard tuning.
//!
//! ## Resolution Order
//! 1. **Open chords** - exact (root, quality) hits in a small hand-written
//!    table (C, A, Am, G, E, Em, D, Dm)
//! 2. **Movable templates** - a template shape transposed up the neck by the
//!    root's distance from the template's reference note:
//!    - diminished: `x-0-1-2-1-x` from A, for every root
//!    - major: E-shape barre for E..A#, A-shape barre otherwise
//!    - minor: E-shape barre for E..A, A-shape barre otherwise
//! 3. **Muted** - `x-x-x-x-x-x` when nothing matches
//!
//! Frets are absolute fret numbers, string 0 being low E. Transposition is
//! plain addition with no wrap and no ceiling, so a shape can sit as high as
//! fret 13. The resolver also computes [`ChordShape::base_fret`], the first
//! fret shown in a diagram window, so renderers can use
//! [`ChordShape::relative_frets`] directly.
//!
//! ## Example
//! ```rust
//! use scale_wizard::shape::resolve_shape;
//! use scale_wizard::{ChordQuality, Note};
//!
//! let b = resolve_shape(Note::B, ChordQuality::Major);
//! assert_eq!(b.frets, [-1, 2, 4, 4, 4, 2]);
//! assert_eq!(b.base_fret, 1);
//! ```

use serde::Serialize;

use crate::chord::ChordQuality;
use crate::pitch::{Note, NOTES};

/// Fret value for a string that is not played.
pub const MUTED: i8 = -1;

/// A chord diagram for six strings, low E first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordShape {
    /// -1 muted, 0 open, otherwise the fretted position
    pub frets: [i8; 6],
    pub base_fret: u8,
}

impl ChordShape {
    /// Shape with its diagram window computed from the frets.
    pub fn new(frets: [i8; 6]) -> Self {
        ChordShape {
            frets,
            base_fret: window_base_fret(&frets),
        }
    }

    pub fn muted() -> Self {
        ChordShape::new([MUTED; 6])
    }

    pub fn is_muted(&self) -> bool {
        self.frets.iter().all(|&f| f == MUTED)
    }

    /// Frets relative to the diagram window: a fretted string at
    /// `base_fret` becomes 1. Open and muted strings are unchanged.
    pub fn relative_frets(&self) -> [i8; 6] {
        let shift = self.base_fret as i8 - 1;
        self.frets.map(|f| if f > 0 { f - shift } else { f })
    }
}

/// First fret of a diagram window that shows every fretted string.
///
/// Shapes whose lowest fretted string is at fret 1 or 2 start at the nut;
/// anything higher starts one fret below its lowest fretted string.
fn window_base_fret(frets: &[i8; 6]) -> u8 {
    let lowest = frets.iter().copied().filter(|&f| f > 0).min().unwrap_or(1);
    if lowest > 2 {
        (lowest - 1) as u8
    } else {
        1
    }
}

const OPEN_SHAPES: &[(Note, ChordQuality, [i8; 6])] = &[
    (Note::C, ChordQuality::Major, [-1, 3, 2, 0, 1, 0]),
    (Note::A, ChordQuality::Major, [-1, 0, 2, 2, 2, 0]),
    (Note::A, ChordQuality::Minor, [-1, 0, 2, 2, 1, 0]),
    (Note::G, ChordQuality::Major, [3, 2, 0, 0, 0, 3]),
    (Note::E, ChordQuality::Major, [0, 2, 2, 1, 0, 0]),
    (Note::E, ChordQuality::Minor, [0, 2, 2, 0, 0, 0]),
    (Note::D, ChordQuality::Major, [-1, -1, 0, 2, 3, 2]),
    (Note::D, ChordQuality::Minor, [-1, -1, 0, 2, 3, 1]),
];

/// A movable shape: applies to `roots`, played `template` frets above `reference`.
struct MovableShape {
    quality: ChordQuality,
    roots: &'static [Note],
    reference: Note,
    template: [i8; 6],
}

const E_SHAPE_MAJOR_ROOTS: &[Note] = &[
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
    Note::ASharp,
];

const E_SHAPE_MINOR_ROOTS: &[Note] = &[
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
];

// Evaluated in order; the first row listing the root wins, so the A-shape
// rows act as catch-alls for whatever the E-shape rows leave.
const MOVABLE_SHAPES: &[MovableShape] = &[
    MovableShape {
        quality: ChordQuality::Diminished,
        roots: &NOTES,
        reference: Note::A,
        template: [-1, 0, 1, 2, 1, -1],
    },
    MovableShape {
        quality: ChordQuality::Major,
        roots: E_SHAPE_MAJOR_ROOTS,
        reference: Note::E,
        template: [0, 2, 2, 1, 0, 0],
    },
    MovableShape {
        quality: ChordQuality::Major,
        roots: &NOTES,
        reference: Note::A,
        template: [-1, 0, 2, 2, 2, 0],
    },
    MovableShape {
        quality: ChordQuality::Minor,
        roots: E_SHAPE_MINOR_ROOTS,
        reference: Note::E,
        template: [0, 2, 2, 0, 0, 0],
    },
    MovableShape {
        quality: ChordQuality::Minor,
        roots: &NOTES,
        reference: Note::A,
        template: [-1, 0, 2, 2, 1, 0],
    },
];

fn open_shape(root: Note, quality: ChordQuality) -> Option<ChordShape> {
    OPEN_SHAPES
        .iter()
        .find(|(r, q, _)| *r == root && *q == quality)
        .map(|(_, _, frets)| ChordShape::new(*frets))
}

fn movable_shape(root: Note, quality: ChordQuality) -> Option<ChordShape> {
    let shape = MOVABLE_SHAPES
        .iter()
        .find(|s| s.quality == quality && s.roots.contains(&root))?;
    let offset = root.semitones_above(shape.reference) as i8;
    let frets = shape
        .template
        .map(|f| if f == MUTED { MUTED } else { f + offset });
    Some(ChordShape::new(frets))
}

/// Resolve the diagram for a triad: open chord, then movable template, then
/// all strings muted.
pub fn resolve_shape(root: Note, quality: ChordQuality) -> ChordShape {
    open_shape(root, quality)
        .or_else(|| movable_shape(root, quality))
        .unwrap_or_else(|| {
            tracing::debug!(%root, %quality, "no chord shape, returning muted diagram");
            ChordShape::muted()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_c_major_exact() {
        let shape = resolve_shape(Note::C, ChordQuality::Major);
        assert_eq!(shape.frets, [-1, 3, 2, 0, 1, 0]);
        assert_eq!(shape.base_fret, 1);
    }

    #[test]
    fn test_all_open_shapes_start_at_nut() {
        for (root, quality, frets) in OPEN_SHAPES {
            let shape = resolve_shape(*root, *quality);
            assert_eq!(shape.frets, *frets);
            assert_eq!(shape.base_fret, 1);
        }
    }

    #[test]
    fn test_a_shape_major_barre() {
        assert_eq!(resolve_shape(Note::B, ChordQuality::Major).frets, [-1, 2, 4, 4, 4, 2]);
        assert_eq!(resolve_shape(Note::CSharp, ChordQuality::Major).frets, [-1, 4, 6, 6, 6, 4]);
        // D# is not in the E-shape range either
        assert_eq!(resolve_shape(Note::DSharp, ChordQuality::Major).frets, [-1, 6, 8, 8, 8, 6]);
    }

    #[test]
    fn test_e_shape_major_barre() {
        let f = resolve_shape(Note::F, ChordQuality::Major);
        assert_eq!(f.frets, [1, 3, 3, 2, 1, 1]);
        assert_eq!(f.base_fret, 1);

        let g_sharp = resolve_shape(Note::GSharp, ChordQuality::Major);
        assert_eq!(g_sharp.frets, [4, 6, 6, 5, 4, 4]);
        assert_eq!(g_sharp.base_fret, 3);
    }

    #[test]
    fn test_a_sharp_is_last_e_shape_major_root() {
        let a_sharp = resolve_shape(Note::ASharp, ChordQuality::Major);
        assert_eq!(a_sharp.frets, [6, 8, 8, 7, 6, 6]);
        assert_eq!(a_sharp.base_fret, 5);

        // the next root up moves to the A-shape
        assert_eq!(resolve_shape(Note::B, ChordQuality::Major).frets[0], MUTED);
    }

    #[test]
    fn test_minor_barres() {
        assert_eq!(resolve_shape(Note::FSharp, ChordQuality::Minor).frets, [2, 4, 4, 2, 2, 2]);
        assert_eq!(resolve_shape(Note::B, ChordQuality::Minor).frets, [-1, 2, 4, 4, 3, 2]);
        // open Am is preferred over the E-shape barre at fret 5
        assert_eq!(resolve_shape(Note::A, ChordQuality::Minor).frets, [-1, 0, 2, 2, 1, 0]);
        assert_eq!(resolve_shape(Note::ASharp, ChordQuality::Minor).frets, [-1, 1, 3, 3, 2, 1]);
    }

    #[test]
    fn test_diminished_from_a_string() {
        let b_dim = resolve_shape(Note::B, ChordQuality::Diminished);
        assert_eq!(b_dim.frets, [-1, 2, 3, 4, 3, -1]);
        assert_eq!(b_dim.base_fret, 1);

        let a_dim = resolve_shape(Note::A, ChordQuality::Diminished);
        assert_eq!(a_dim.frets, [-1, 0, 1, 2, 1, -1]);

        let g_sharp_dim = resolve_shape(Note::GSharp, ChordQuality::Diminished);
        assert_eq!(g_sharp_dim.frets, [-1, 11, 12, 13, 12, -1]);
        assert_eq!(g_sharp_dim.base_fret, 10);
    }

    #[test]
    fn test_every_triad_resolves() {
        for root in NOTES {
            for quality in [ChordQuality::Major, ChordQuality::Minor, ChordQuality::Diminished] {
                let shape = resolve_shape(root, quality);
                assert!(!shape.is_muted(), "{} {}", root, quality);
                assert!(shape.base_fret >= 1);
            }
        }
    }

    #[test]
    fn test_relative_frets() {
        let shape = resolve_shape(Note::GSharp, ChordQuality::Major);
        assert_eq!(shape.relative_frets(), [2, 4, 4, 3, 2, 2]);

        let open = resolve_shape(Note::C, ChordQuality::Major);
        assert_eq!(open.relative_frets(), open.frets);
    }

    #[test]
    fn test_muted_shape() {
        let shape = ChordShape::muted();
        assert!(shape.is_muted());
        assert_eq!(shape.base_fret, 1);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&resolve_shape(Note::E, ChordQuality::Minor)).unwrap();
        assert_eq!(json, r#"{"frets":[0,2,2,0,0,0],"baseFret":1}"#);
    }
}
