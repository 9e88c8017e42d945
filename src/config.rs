//! User preferences for the command-line front-end.
//!
//! The engine itself has no runtime configuration. The CLI can read defaults
//! for the root, scale type, fret span and output format from a YAML file:
//!
//! ```yaml
//! root: A
//! scale-type: minor
//! fret-count: 15
//! format: json
//! ```
//!
//! Every key is optional. Command-line arguments take precedence.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, TheoryError};
use crate::fretboard::{validate_fret_count, DEFAULT_FRET_COUNT, MAX_FRET_COUNT};
use crate::pitch::Note;
use crate::scale::ScaleType;

/// Preference file as written, before validation
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawPreferences {
    pub root: Option<String>,
    pub scale_type: Option<String>,
    pub fret_count: Option<usize>,
    pub format: Option<String>,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = TheoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(TheoryError::Config(format!("Unknown output format: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub root: Note,
    pub scale_type: ScaleType,
    pub fret_count: usize,
    pub format: OutputFormat,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            root: Note::C,
            scale_type: ScaleType::Major,
            fret_count: DEFAULT_FRET_COUNT,
            format: OutputFormat::Text,
        }
    }
}

impl Preferences {
    /// Parse preference YAML, filling anything missing with defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: RawPreferences = if content.trim().is_empty() {
            RawPreferences::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| TheoryError::Config(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let prefs = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), ?prefs, "loaded preferences");
        Ok(prefs)
    }

    fn from_raw(raw: RawPreferences) -> Result<Self> {
        let defaults = Preferences::default();

        let root = match raw.root {
            Some(ref r) => r
                .parse()
                .map_err(|_| TheoryError::Config(format!("Invalid root: {}", r)))?,
            None => defaults.root,
        };

        let scale_type = match raw.scale_type {
            Some(ref s) => s
                .parse()
                .map_err(|_| TheoryError::Config(format!("Invalid scale-type: {}", s)))?,
            None => defaults.scale_type,
        };

        let fret_count = match raw.fret_count {
            Some(n) => validate_fret_count(n).map_err(|_| {
                TheoryError::Config(format!("fret-count must be between 1 and {}", MAX_FRET_COUNT))
            })?,
            None => defaults.fret_count,
        };

        let format = match raw.format {
            Some(ref f) => f.parse()?,
            None => defaults.format,
        };

        Ok(Preferences {
            root,
            scale_type,
            fret_count,
            format,
        })
    }
}
