//! cubekey - Derive cube row-key layouts from dimension definitions
//!
//! This library provides:
//! - Cube descriptor and data model types (Dimension, Lookup, RowKeyColumn, etc.)
//! - Document parsing from YAML or JSON
//! - Row-key column extraction with provenance
//! - Row-key layout reconciliation against the saved layout
//! - Aggregation group pruning (edit flow) and synthesis (add flow)
//! - Measure column-family layout
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `model/` - cube metadata (CubeDesc, DataModel, Dimension, RowKeyDesc, CubeMode)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML/JSON → CubeDesc, DataModel
//! - `extractor/` - Dimensions + Lookups → ExtractedColumns
//! - `synthesizer/` - ExtractedColumns + saved layout → RowKeyColumns, AggregationGroups
//! - `regenerate/` - the full pass run on every dimension edit
//! - `hbase/` - Measures → ColumnFamilies
//!
//! # Example
//!
//! ```ignore
//! use cubekey::{parser, regenerate_cube, CubeMode, RegenerateOptions};
//!
//! let mut cube = parser::parse_cube_file("cube.json")?;
//! let model = parser::parse_model_file("model.json")?;
//! cube.rowkey = regenerate_cube(&cube, &model, CubeMode::EditExistCube, &RegenerateOptions::default())?;
//! println!("{}", parser::to_json(&cube)?);
//! ```

pub mod model;
pub mod parser;
pub mod extractor;
pub mod synthesizer;
pub mod regenerate;
pub mod hbase;
pub mod error;

// Re-export commonly used types
pub use model::{CubeDesc, DataModel, CubeMode, Dimension, Lookup, Join, RowKeyColumn, AggregationGroup, RowKeyDesc, Measure};
pub use extractor::{extract_columns, ExtractedColumns, ColumnSource, ExtractError};
pub use synthesizer::{synthesize_rowkey_columns, reconcile_groups, synthesize_groups, DEFAULT_MAX_GROUP_SIZE};
pub use regenerate::{regenerate_rowkey, regenerate_cube, RegeneratedRowKey, RegenerateOptions, RegenerateError};
pub use hbase::generate_column_families;
pub use error::ParseError;
