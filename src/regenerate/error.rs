//! Regeneration error types

use thiserror::Error;
use crate::error::ParseError;
use crate::extractor::ExtractError;

/// Errors that can occur while regenerating a cube's row key
#[derive(Debug, Error)]
pub enum RegenerateError {
    /// The dimension definitions are inconsistent with the data model
    #[error("Cannot derive row key{}: {source}", cube_suffix(.cube))]
    Extract {
        cube: Option<String>,
        #[source]
        source: ExtractError,
    },
    /// Invalid engine configuration
    #[error("Invalid regenerate options: {0}")]
    Config(#[from] ParseError),
}

impl From<ExtractError> for RegenerateError {
    fn from(err: ExtractError) -> Self {
        RegenerateError::Extract {
            cube: None,
            source: err,
        }
    }
}

fn cube_suffix(cube: &Option<String>) -> String {
    match cube {
        Some(name) => format!(" for cube '{}'", name),
        None => String::new(),
    }
}
