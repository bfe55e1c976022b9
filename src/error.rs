//! Error types for cubekey

use thiserror::Error;

/// Errors that can occur while reading or writing cube documents
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO error reading file
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// YAML (or JSON) deserialization error
    #[error("Invalid YAML: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
    /// JSON serialization error
    #[error("Failed to write JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
