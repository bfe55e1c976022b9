//! Measure and storage-mapping types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Function expression for distinct-count measures
pub const COUNT_DISTINCT: &str = "COUNT_DISTINCT";

/// A cube measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub function: FunctionDesc,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Measure {
    pub fn is_count_distinct(&self) -> bool {
        self.function.expression == COUNT_DISTINCT
    }
}

/// Aggregate function of a measure (e.g., SUM over a column)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDesc {
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<ParameterDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returntype: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDesc {
    #[serde(rename = "type")]
    pub param_type: String,
    pub value: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Storage mapping of measures to column families
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HBaseMapping {
    #[serde(default)]
    pub column_family: Vec<ColumnFamily>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFamily {
    pub name: String,
    pub columns: Vec<HBaseColumn>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HBaseColumn {
    pub qualifier: String,
    #[serde(default)]
    pub measure_refs: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
