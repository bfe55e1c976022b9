//! Storage column-family layout
//!
//! Measures are stored in column families: distinct-count measures get a
//! family of their own, all other measures share one.

mod families;

pub use families::{generate_column_families, MEASURE_QUALIFIER};
