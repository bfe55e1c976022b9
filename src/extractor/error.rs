//! Extractor error types

use thiserror::Error;

/// Errors that can occur while extracting row-key columns from dimensions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A dimension with derived columns has no lookup joined on its table
    #[error("Dimension '{dimension}' has derived columns but no lookup is defined for table '{table}'")]
    MissingLookup {
        dimension: String,
        table: String,
    },
}
