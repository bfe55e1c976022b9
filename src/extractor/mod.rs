//! Dimension column extractor module
//!
//! Walks the cube's dimensions and collects the physical columns each one
//! contributes to the row key.

mod error;
mod extract;

pub use error::ExtractError;
pub use extract::{extract_columns, ExtractedColumns, ColumnSource};
