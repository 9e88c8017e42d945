pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod pitch;
pub mod scale;
pub mod shape;

pub use api::*;
pub use chord::{Chord, ChordQuality};
pub use error::*;
pub use fretboard::{validate_fret_count, FretboardNote, DEFAULT_FRET_COUNT, MAX_FRET_COUNT, TUNING};
pub use pitch::{Note, NOTES};
pub use scale::{Scale, ScaleType};
pub use shape::ChordShape;
