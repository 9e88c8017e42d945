use serde::Serialize;
use wasm_bindgen::prelude::*;

use scale_wizard::{ChordQuality, ScaleType, TheoryError};

#[derive(Serialize)]
struct BindingError {
    message: String,
}

fn to_js_error(e: TheoryError) -> JsValue {
    let error = BindingError {
        message: e.to_string(),
    };
    match serde_json::to_string(&error) {
        Ok(json) => JsValue::from_str(&json),
        Err(_) => JsValue::from_str(&error.message),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.into()))
}

fn parse_scale_type(scale_type: &str) -> Result<ScaleType, JsValue> {
    scale_type.parse().map_err(to_js_error)
}

fn parse_quality(quality: &str) -> Result<ChordQuality, JsValue> {
    quality.parse().map_err(to_js_error)
}

/// Scale notes as a JSON array of names; `[]` for an unknown root
#[wasm_bindgen]
pub fn scale_notes(root: &str, scale_type: &str) -> Result<String, JsValue> {
    to_json(&scale_wizard::scale_notes(root, parse_scale_type(scale_type)?))
}

/// Scale notes and diatonic chords as a JSON object
#[wasm_bindgen]
pub fn generate_scale_data(root: &str, scale_type: &str) -> Result<String, JsValue> {
    to_json(&scale_wizard::generate_scale_data(root, parse_scale_type(scale_type)?))
}

/// Chord diagram `{ frets, baseFret }` as JSON
#[wasm_bindgen]
pub fn chord_shape(root: &str, quality: &str) -> Result<String, JsValue> {
    to_json(&scale_wizard::chord_shape(root, parse_quality(quality)?))
}

/// Fretboard grid as JSON, one array per string from high E to low E
#[wasm_bindgen]
pub fn fretboard_map(root: &str, scale_type: &str, fret_count: Option<u32>) -> Result<String, JsValue> {
    let fret_count = match fret_count {
        Some(n) => scale_wizard::validate_fret_count(n as usize).map_err(to_js_error)?,
        None => scale_wizard::DEFAULT_FRET_COUNT,
    };
    to_json(&scale_wizard::fretboard_map(root, parse_scale_type(scale_type)?, fret_count))
}

/// Diatonic chords with numerals and diagrams as JSON
#[wasm_bindgen]
pub fn chord_charts(root: &str, scale_type: &str) -> Result<String, JsValue> {
    to_json(&scale_wizard::chord_charts(root, parse_scale_type(scale_type)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_scale_data_json() {
        let json = generate_scale_data("C", "Major").unwrap();
        assert!(json.starts_with(r#"{"root":"C","type":"Major","notes":["C","D","E","F","G","A","B"]"#));
    }

    #[test]
    fn test_unknown_root_is_empty_not_error() {
        assert_eq!(scale_notes("H", "Major").unwrap(), "[]");
    }

    #[test]
    fn test_chord_shape_json() {
        assert_eq!(chord_shape("B", "Major").unwrap(), r#"{"frets":[-1,2,4,4,4,2],"baseFret":1}"#);
    }

    #[test]
    fn test_fretboard_default_span() {
        let json = fretboard_map("A", "minor", None).unwrap();
        let grid: Vec<Vec<serde_json::Value>> = serde_json::from_str(&json).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0].len(), 14);
    }

    #[test]
    fn test_fretboard_longest_span() {
        let json = fretboard_map("A", "minor", Some(24)).unwrap();
        let grid: Vec<Vec<serde_json::Value>> = serde_json::from_str(&json).unwrap();
        assert!(grid.iter().all(|row| row.len() == 25));
    }
}
