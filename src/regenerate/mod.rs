//! Row-key regeneration module
//!
//! Runs the full derivation whenever a cube's dimensions change:
//! extract columns, reconcile the row-key layout, then rewrite the
//! aggregation groups according to the designer flow.

mod error;
mod options;
mod pipeline;

pub use error::RegenerateError;
pub use options::RegenerateOptions;
pub use pipeline::{regenerate_rowkey, regenerate_cube, RegeneratedRowKey};
