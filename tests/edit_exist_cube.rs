//! Integration tests for the edit-cube flow
//!
//! A saved cube keeps its row-key order and encoding metadata; its aggregation
//! groups lose the columns that no dimension references any more.

mod common;

use common::{group, load_cube, load_model, names, simple};
use cubekey::{parser, regenerate_cube, regenerate_rowkey, CubeMode, RegenerateOptions, RowKeyColumn};

#[test]
fn test_saved_cube_is_pruned() {
    let cube = load_cube("sales_cube_saved.json");
    let model = load_model("sales_model.yaml");

    let rowkey = regenerate_cube(&cube, &model, CubeMode::EditExistCube, &RegenerateOptions::default())
        .expect("Regeneration should succeed");

    assert_eq!(rowkey.column_names(), vec!["SELLER_ID", "PART_DT", "LSTG_FORMAT_NAME"]);

    // Encoding metadata of retained columns is untouched
    let seller = &rowkey.rowkey_columns[0];
    assert_eq!(seller.length, 8);
    assert!(!seller.dictionary);
    assert!(seller.mandatory);

    assert_eq!(
        rowkey.aggregation_groups,
        vec![group(&["PART_DT"]), group(&["LSTG_FORMAT_NAME", "SELLER_ID"])]
    );
}

#[test]
fn test_new_dimension_appended_after_saved_columns() {
    let mut cube = load_cube("sales_cube_saved.json");
    let model = load_model("sales_model.yaml");
    cube.dimensions.insert(0, simple("BUYER_ID"));

    let rowkey = regenerate_cube(&cube, &model, CubeMode::EditExistCube, &RegenerateOptions::default()).unwrap();

    assert_eq!(
        rowkey.column_names(),
        vec!["SELLER_ID", "PART_DT", "LSTG_FORMAT_NAME", "BUYER_ID"]
    );
    assert_eq!(rowkey.rowkey_columns[3], RowKeyColumn::new("BUYER_ID"));
    // Editing never adds groups
    assert_eq!(rowkey.aggregation_groups.len(), 2);
}

#[test]
fn test_dropped_columns_and_appended_column() {
    let previous = vec![RowKeyColumn::new("a"), RowKeyColumn::new("b"), RowKeyColumn::new("c")];
    let result = regenerate_rowkey(
        &[simple("a"), simple("d")],
        &[],
        &previous,
        &[],
        CubeMode::EditExistCube,
        &RegenerateOptions::default(),
    )
    .unwrap();

    assert_eq!(result.rowkey_columns, vec![RowKeyColumn::new("a"), RowKeyColumn::new("d")]);
}

#[test]
fn test_group_members_pruned() {
    let result = regenerate_rowkey(
        &[simple("a"), simple("c")],
        &[],
        &[],
        &[group(&["a", "b"]), group(&["c"])],
        CubeMode::EditExistCube,
        &RegenerateOptions::default(),
    )
    .unwrap();

    assert_eq!(result.aggregation_groups, vec![group(&["a"]), group(&["c"])]);
}

#[test]
fn test_default_mode_only_touches_columns() {
    let cube = load_cube("sales_cube_saved.json");
    let model = load_model("sales_model.yaml");

    let rowkey = regenerate_cube(&cube, &model, CubeMode::Default, &RegenerateOptions::default()).unwrap();

    assert_eq!(names(&rowkey.rowkey_columns), vec!["SELLER_ID", "PART_DT", "LSTG_FORMAT_NAME"]);
    assert_eq!(rowkey.aggregation_groups, cube.rowkey.aggregation_groups);
}

#[test]
fn test_write_back_keeps_nested_unknown_fields() {
    let mut cube = load_cube("sales_cube_saved.json");
    let model = load_model("sales_model.yaml");

    cube.rowkey = regenerate_cube(&cube, &model, CubeMode::EditExistCube, &RegenerateOptions::default()).unwrap();
    let json = parser::to_json(&cube).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["capacity"], "MEDIUM");
    assert_eq!(value["dimensions"][0]["description"], "calendar date");

    let measure = &value["measures"][0];
    assert_eq!(measure["dependent_measure_ref"], "GMV_BASE");
    assert_eq!(measure["function"]["configuration"]["scale"], 4);
    assert_eq!(measure["function"]["parameter"]["next_parameter"]["value"], "QTY");

    assert_eq!(value["rowkey"]["shard_by"], "SELLER_ID");
    assert_eq!(value["rowkey"]["rowkey_columns"][0]["encoding"], "integer:8");

    let mapping = &value["hbase_mapping"];
    assert_eq!(mapping["region_split"], 4);
    assert_eq!(mapping["column_family"][0]["in_memory"], true);
    assert_eq!(mapping["column_family"][0]["columns"][0]["ttl"], 0);

    // Reading the written draft back gives the same draft
    assert_eq!(parser::parse_cube_str(&json).unwrap(), cube);
}
