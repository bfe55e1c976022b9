//! Column-family generation

use tracing::debug;
use crate::model::{ColumnFamily, HBaseColumn, Measure};

/// Qualifier of the single column in every generated family
pub const MEASURE_QUALIFIER: &str = "m";

/// Assign measures to column families
///
/// Regular measures go into the first family, distinct-count measures into
/// the next one. Families are named `f1`, `f2`, ... in creation order and
/// families with no measures are not created.
pub fn generate_column_families(measures: &[Measure]) -> Vec<ColumnFamily> {
    let (distinct, regular): (Vec<&Measure>, Vec<&Measure>) =
        measures.iter().partition(|m| m.is_count_distinct());

    let families: Vec<ColumnFamily> = [regular, distinct]
        .into_iter()
        .filter(|group| !group.is_empty())
        .enumerate()
        .map(|(i, group)| ColumnFamily {
            name: format!("f{}", i + 1),
            columns: vec![HBaseColumn {
                qualifier: MEASURE_QUALIFIER.to_string(),
                measure_refs: group.iter().map(|m| m.name.clone()).collect(),
                extra: Default::default(),
            }],
            extra: Default::default(),
        })
        .collect();

    debug!(measures = measures.len(), families = families.len(), "generated column families");
    families
}
