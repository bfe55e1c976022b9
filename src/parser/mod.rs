//! Document parser (verb module)
//!
//! Transforms cube descriptors and data models from YAML or JSON files into
//! model types, and writes drafts back out as JSON.

use std::path::Path;
use serde::de::DeserializeOwned;
use crate::error::ParseError;
use crate::model::{CubeDesc, DataModel};

/// Parse a cube descriptor from a YAML or JSON file
pub fn parse_cube_file<P: AsRef<Path>>(path: P) -> Result<CubeDesc, ParseError> {
    parse_file(path)
}

/// Parse a cube descriptor from a YAML or JSON string
pub fn parse_cube_str(text: &str) -> Result<CubeDesc, ParseError> {
    parse_str(text)
}

/// Parse a data model from a YAML or JSON file
pub fn parse_model_file<P: AsRef<Path>>(path: P) -> Result<DataModel, ParseError> {
    parse_file(path)
}

/// Parse a data model from a YAML or JSON string
pub fn parse_model_str(text: &str) -> Result<DataModel, ParseError> {
    parse_str(text)
}

/// Serialize a cube descriptor as pretty-printed JSON
pub fn to_json(cube: &CubeDesc) -> Result<String, ParseError> {
    serde_json::to_string_pretty(cube).map_err(ParseError::from)
}

pub(crate) fn parse_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

// YAML is a superset of JSON, so one deserializer covers both formats.
fn parse_str<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    serde_yaml::from_str(text).map_err(ParseError::from)
}
