//! Row-key column reconciliation

use std::collections::HashSet;
use crate::extractor::ExtractedColumns;
use crate::model::RowKeyColumn;

/// Merge the saved row-key columns with the freshly extracted set
///
/// Saved columns that are still extracted keep their relative order and their
/// encoding metadata. Extracted columns not saved before are appended in
/// extraction order with default metadata. Everything else is dropped.
pub fn synthesize_rowkey_columns(
    previous: &[RowKeyColumn],
    extracted: &ExtractedColumns,
) -> Vec<RowKeyColumn> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut columns = Vec::with_capacity(extracted.len());

    // A repeated entry in a hand-edited layout is kept only once
    for col in previous {
        if extracted.contains(&col.column) && seen.insert(col.column.as_str()) {
            columns.push(col.clone());
        }
    }

    for name in extracted.columns() {
        if seen.insert(name) {
            columns.push(RowKeyColumn::new(name));
        }
    }

    columns
}
