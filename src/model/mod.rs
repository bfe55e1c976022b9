//! Cube metadata types (nouns)
//!
//! These types represent the parsed cube descriptor and data model.

mod dimension;
mod measure;
mod rowkey;
mod schema;

pub use dimension::{Dimension, Join, Lookup, find_lookup};
pub use measure::{Measure, FunctionDesc, ParameterDesc, HBaseMapping, ColumnFamily, HBaseColumn, COUNT_DISTINCT};
pub use rowkey::{RowKeyColumn, AggregationGroup, RowKeyDesc};
pub use schema::{CubeDesc, DataModel, CubeMode};
