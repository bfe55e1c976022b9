//! Row-key column extraction
//!
//! Each dimension contributes columns in this precedence:
//! - Derived dimensions contribute the foreign keys of their lookup join
//! - Otherwise, a dimension with exactly one column contributes that column
//! - Independently, a hierarchy dimension contributes every column in its chain
//!
//! The first derivation that introduces a column wins; later ones are ignored.

use std::collections::{HashMap, HashSet};
use tracing::debug;
use crate::model::{find_lookup, Dimension, Lookup};
use super::error::ExtractError;

/// How a column first entered the row key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    /// Foreign key of the lookup join of a derived dimension
    ForeignKey { table: String },
    /// The single column of a simple dimension
    Direct,
    /// A column of a hierarchy chain
    Hierarchy,
}

/// Columns extracted from a dimension list, in first-seen order
///
/// Order lives in the vectors; the map and set make membership checks constant time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedColumns {
    columns: Vec<String>,
    sources: HashMap<String, ColumnSource>,
    hierarchy: Vec<String>,
    hierarchy_set: HashSet<String>,
}

impl ExtractedColumns {
    /// All extracted columns in extraction order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Columns belonging to a hierarchy, in first-seen order
    pub fn hierarchy_columns(&self) -> impl Iterator<Item = &str> {
        self.hierarchy.iter().map(String::as_str)
    }

    /// Extracted columns that are not part of any hierarchy, in extraction order
    pub fn plain_columns(&self) -> Vec<&str> {
        self.columns()
            .filter(|c| !self.hierarchy_set.contains(*c))
            .collect()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.sources.contains_key(column)
    }

    pub fn is_hierarchy(&self, column: &str) -> bool {
        self.hierarchy_set.contains(column)
    }

    /// Where a column first came from
    pub fn source_of(&self, column: &str) -> Option<&ColumnSource> {
        self.sources.get(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn insert(&mut self, column: &str, source: ColumnSource) {
        if !self.sources.contains_key(column) {
            self.sources.insert(column.to_string(), source);
            self.columns.push(column.to_string());
        }
    }

    fn mark_hierarchy(&mut self, column: &str) {
        if self.hierarchy_set.insert(column.to_string()) {
            self.hierarchy.push(column.to_string());
        }
    }
}

/// Extract the row-key columns contributed by `dimensions`
///
/// # Errors
/// Returns [`ExtractError::MissingLookup`] when a dimension declares derived
/// columns but `lookups` has no entry for its table. Nothing partial is returned.
pub fn extract_columns(
    dimensions: &[Dimension],
    lookups: &[Lookup],
) -> Result<ExtractedColumns, ExtractError> {
    let mut extracted = ExtractedColumns::default();

    for dimension in dimensions {
        if dimension.has_derived() {
            let lookup = find_lookup(lookups, &dimension.table)
                .ok_or_else(|| ExtractError::MissingLookup {
                    dimension: dimension.display_name().to_string(),
                    table: dimension.table.clone(),
                })?;

            for fk in &lookup.join.foreign_key {
                extracted.insert(fk, ColumnSource::ForeignKey { table: lookup.table.clone() });
            }
        } else if let Some(column) = dimension.simple_column() {
            extracted.insert(column, ColumnSource::Direct);
        }

        for column in dimension.hierarchy_columns() {
            extracted.insert(column, ColumnSource::Hierarchy);
            extracted.mark_hierarchy(column);
        }
    }

    debug!(
        dimensions = dimensions.len(),
        columns = extracted.len(),
        hierarchy = extracted.hierarchy.len(),
        "extracted row-key columns"
    );

    Ok(extracted)
}
