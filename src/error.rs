//! # Error Types
//!
//! This module defines the error types for the scale wizard engine.
//!
//! The derivation functions in [`crate::api`] never fail: an unrecognized root
//! degrades to an empty scale or a blank fretboard. Errors only surface when
//! text is parsed into typed values ([`Note`](crate::Note),
//! [`ScaleType`](crate::ScaleType), [`ChordQuality`](crate::ChordQuality)) or
//! when a preference file is loaded.
//!
//! ## Error Types
//! - `UnknownNote` - A note name outside the 12 canonical sharp spellings
//! - `UnknownScaleType` - Anything other than major or natural minor
//! - `UnknownChordQuality` - Anything other than major, minor or diminished
//! - `Config` - Invalid preference file content
//! - `FretCount` - Fretboard span outside 1-24 frets
//! - `Io` / `Serialize` - Reading preferences or writing output
//!
//! ## Usage
//! ```rust
//! use scale_wizard::{Note, TheoryError};
//!
//! match "H".parse::<Note>() {
//!     Ok(note) => println!("Root: {}", note),
//!     Err(TheoryError::UnknownNote(name)) => eprintln!("No such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TheoryError {
    /// Note name not in the chromatic vocabulary.
    ///
    /// Only the canonical sharp spellings are recognized; flats and lower-case
    /// names are rejected.
    ///
    /// # Example
    /// ```
    /// # use scale_wizard::TheoryError;
    /// let err = TheoryError::UnknownNote("Bb".to_string());
    /// assert_eq!(err.to_string(), "Unknown note: Bb");
    /// ```
    #[error("Unknown note: {0}")]
    UnknownNote(String),

    /// Scale type other than major or natural minor.
    ///
    /// # Example
    /// ```
    /// # use scale_wizard::TheoryError;
    /// let err = TheoryError::UnknownScaleType("Dorian".to_string());
    /// assert_eq!(err.to_string(), "Unknown scale type: Dorian");
    /// ```
    #[error("Unknown scale type: {0}")]
    UnknownScaleType(String),

    /// Chord quality other than major, minor or diminished.
    #[error("Unknown chord quality: {0}")]
    UnknownChordQuality(String),

    /// Invalid preference file.
    ///
    /// # Example
    /// ```
    /// # use scale_wizard::TheoryError;
    /// let err = TheoryError::Config("fret-count must be between 1 and 24".to_string());
    /// assert_eq!(err.to_string(), "Invalid preferences: fret-count must be between 1 and 24");
    /// ```
    #[error("Invalid preferences: {0}")]
    Config(String),

    /// Requested fret span outside `1..=24`.
    ///
    /// # Example
    /// ```
    /// # use scale_wizard::TheoryError;
    /// let err = TheoryError::FretCount(30);
    /// assert_eq!(err.to_string(), "Fret count must be between 1 and 24, got 30");
    /// ```
    #[error("Fret count must be between 1 and 24, got {0}")]
    FretCount(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for TheoryError {
    fn from(e: serde_json::Error) -> Self {
        TheoryError::Serialize(e.to_string())
    }
}

impl From<serde_yaml::Error> for TheoryError {
    fn from(e: serde_yaml::Error) -> Self {
        TheoryError::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TheoryError>;
