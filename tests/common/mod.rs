//! Shared test utilities for integration tests

#![allow(dead_code)]

use cubekey::{parser, CubeDesc, DataModel, Dimension, RowKeyColumn, AggregationGroup};

/// Load a cube descriptor from the tests/test_data directory
pub fn load_cube(name: &str) -> CubeDesc {
    let path = format!("tests/test_data/{}", name);
    parser::parse_cube_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test cube {}: {}", name, e))
}

/// Load a data model from the tests/test_data directory
pub fn load_model(name: &str) -> DataModel {
    let path = format!("tests/test_data/{}", name);
    parser::parse_model_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test model {}: {}", name, e))
}

// =============================================================================
// Builders
// =============================================================================

/// A simple single-column dimension on the fact table
pub fn simple(column: &str) -> Dimension {
    Dimension {
        table: "fact".to_string(),
        column: Some(vec![column.to_string()]),
        ..Default::default()
    }
}

/// A hierarchy dimension with the given drill-down chain
pub fn hierarchy(columns: &[&str]) -> Dimension {
    Dimension {
        table: "fact".to_string(),
        column: Some(columns.iter().map(|c| c.to_string()).collect()),
        hierarchy: true,
        ..Default::default()
    }
}

pub fn group(columns: &[&str]) -> AggregationGroup {
    columns.iter().copied().collect()
}

/// Column names of a row-key layout, in order
pub fn names(columns: &[RowKeyColumn]) -> Vec<&str> {
    columns.iter().map(|c| c.column.as_str()).collect()
}
