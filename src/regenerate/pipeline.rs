//! Row-key regeneration pipeline

use tracing::debug;
use crate::extractor::extract_columns;
use crate::model::{AggregationGroup, CubeDesc, CubeMode, DataModel, Dimension, Lookup, RowKeyColumn, RowKeyDesc};
use crate::synthesizer::{reconcile_groups, synthesize_groups, synthesize_rowkey_columns};
use super::error::RegenerateError;
use super::options::RegenerateOptions;

/// Output of a regeneration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegeneratedRowKey {
    pub rowkey_columns: Vec<RowKeyColumn>,
    pub aggregation_groups: Vec<AggregationGroup>,
}

impl RegeneratedRowKey {
    /// Replace the row-key section of a draft with this result
    pub fn apply_to(self, rowkey: &mut RowKeyDesc) {
        rowkey.rowkey_columns = self.rowkey_columns;
        rowkey.aggregation_groups = self.aggregation_groups;
    }

    pub fn into_rowkey_desc(self) -> RowKeyDesc {
        RowKeyDesc {
            rowkey_columns: self.rowkey_columns,
            aggregation_groups: self.aggregation_groups,
            ..Default::default()
        }
    }
}

/// Recompute the row-key columns and aggregation groups after a dimension edit
///
/// The aggregation groups are rewritten according to `mode`:
/// - `AddNewCube`: replaced by freshly synthesized groups
/// - `EditExistCube`: pruned of columns that are no longer extracted
/// - `Default`: returned unchanged, unless `prune_groups_in_default_mode` is set
///
/// Running the pass again on its own output with the same inputs yields the
/// same result.
pub fn regenerate_rowkey(
    dimensions: &[Dimension],
    lookups: &[Lookup],
    previous_columns: &[RowKeyColumn],
    previous_groups: &[AggregationGroup],
    mode: CubeMode,
    options: &RegenerateOptions,
) -> Result<RegeneratedRowKey, RegenerateError> {
    let extracted = extract_columns(dimensions, lookups)?;
    let rowkey_columns = synthesize_rowkey_columns(previous_columns, &extracted);

    let aggregation_groups = match mode {
        CubeMode::AddNewCube => synthesize_groups(&extracted, options.max_group_size),
        CubeMode::EditExistCube => reconcile_groups(previous_groups, &extracted),
        CubeMode::Default if options.prune_groups_in_default_mode => {
            reconcile_groups(previous_groups, &extracted)
        }
        CubeMode::Default => previous_groups.to_vec(),
    };

    debug!(
        %mode,
        columns = rowkey_columns.len(),
        groups = aggregation_groups.len(),
        "regenerated row key"
    );

    Ok(RegeneratedRowKey {
        rowkey_columns,
        aggregation_groups,
    })
}

/// Regenerate the row key of a cube draft against its data model
///
/// Returns the new row-key section; the draft itself is not modified. Fields
/// of the saved row-key section that the engine does not own are carried over.
pub fn regenerate_cube(
    cube: &CubeDesc,
    model: &DataModel,
    mode: CubeMode,
    options: &RegenerateOptions,
) -> Result<RowKeyDesc, RegenerateError> {
    let regenerated = regenerate_rowkey(
        &cube.dimensions,
        &model.lookups,
        &cube.rowkey.rowkey_columns,
        &cube.rowkey.aggregation_groups,
        mode,
        options,
    )
    .map_err(|e| match e {
        RegenerateError::Extract { source, .. } => RegenerateError::Extract {
            cube: Some(cube.name.clone()),
            source,
        },
        other => other,
    })?;

    let mut rowkey = cube.rowkey.clone();
    regenerated.apply_to(&mut rowkey);
    Ok(rowkey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Join;

    fn simple(column: &str) -> Dimension {
        Dimension {
            table: "fact".to_string(),
            column: Some(vec![column.to_string()]),
            ..Default::default()
        }
    }

    fn group(columns: &[&str]) -> AggregationGroup {
        columns.iter().copied().collect()
    }

    fn names(columns: &[RowKeyColumn]) -> Vec<&str> {
        columns.iter().map(|c| c.column.as_str()).collect()
    }

    fn run(dims: &[Dimension], columns: &[RowKeyColumn], groups: &[AggregationGroup], mode: CubeMode) -> RegeneratedRowKey {
        regenerate_rowkey(dims, &[], columns, groups, mode, &RegenerateOptions::default()).unwrap()
    }

    #[test]
    fn test_add_mode_replaces_groups() {
        let previous_groups = vec![group(&["stale"])];
        let result = run(&[simple("region"), simple("date")], &[], &previous_groups, CubeMode::AddNewCube);

        assert_eq!(names(&result.rowkey_columns), vec!["region", "date"]);
        assert_eq!(result.aggregation_groups, vec![group(&["region", "date"])]);
    }

    #[test]
    fn test_edit_mode_prunes_groups() {
        let previous_columns = vec![RowKeyColumn::new("a"), RowKeyColumn::new("b"), RowKeyColumn::new("c")];
        let previous_groups = vec![group(&["a", "b"]), group(&["c"])];
        let result = run(&[simple("a"), simple("c")], &previous_columns, &previous_groups, CubeMode::EditExistCube);

        assert_eq!(names(&result.rowkey_columns), vec!["a", "c"]);
        assert_eq!(result.aggregation_groups, vec![group(&["a"]), group(&["c"])]);
    }

    #[test]
    fn test_default_mode_leaves_groups() {
        let previous_groups = vec![group(&["gone"]), AggregationGroup::default()];
        let result = run(&[simple("a")], &[], &previous_groups, CubeMode::Default);

        assert_eq!(names(&result.rowkey_columns), vec!["a"]);
        assert_eq!(result.aggregation_groups, previous_groups);
    }

    #[test]
    fn test_default_mode_prunes_when_enabled() {
        let options = RegenerateOptions {
            prune_groups_in_default_mode: true,
            ..Default::default()
        };
        let previous_groups = vec![group(&["gone"]), group(&["a", "gone"])];
        let result = regenerate_rowkey(&[simple("a")], &[], &[], &previous_groups, CubeMode::Default, &options).unwrap();

        assert_eq!(result.aggregation_groups, vec![group(&["a"])]);
    }

    #[test]
    fn test_custom_group_size() {
        let options = RegenerateOptions {
            max_group_size: 2,
            ..Default::default()
        };
        let dims = vec![simple("a"), simple("b"), simple("c")];
        let result = regenerate_rowkey(&dims, &[], &[], &[], CubeMode::AddNewCube, &options).unwrap();

        assert_eq!(result.aggregation_groups, vec![group(&["a", "b"]), group(&["c"])]);
    }

    #[test]
    fn test_apply_to_replaces_both_fields() {
        let mut rowkey = RowKeyDesc {
            rowkey_columns: vec![RowKeyColumn::new("old")],
            aggregation_groups: vec![group(&["old"])],
            ..Default::default()
        };
        run(&[simple("new")], &rowkey.rowkey_columns.clone(), &[], CubeMode::AddNewCube).apply_to(&mut rowkey);

        assert_eq!(rowkey.column_names(), vec!["new"]);
        assert_eq!(rowkey.aggregation_groups, vec![group(&["new"])]);
    }

    #[test]
    fn test_regenerate_cube_names_cube_in_error() {
        let cube = CubeDesc {
            name: "sales_cube".to_string(),
            model_name: None,
            project: None,
            dimensions: vec![Dimension {
                name: Some("store".to_string()),
                table: "stores".to_string(),
                derived: Some(vec!["store_name".to_string()]),
                ..Default::default()
            }],
            measures: Vec::new(),
            rowkey: RowKeyDesc::default(),
            hbase_mapping: Default::default(),
            extra: Default::default(),
        };
        let model = DataModel {
            lookups: vec![Lookup {
                table: "dates".to_string(),
                join: Join::default(),
            }],
            ..Default::default()
        };

        let err = regenerate_cube(&cube, &model, CubeMode::AddNewCube, &RegenerateOptions::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sales_cube"), "{}", message);
        assert!(message.contains("stores"), "{}", message);
    }
}
