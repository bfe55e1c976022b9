//! Root cube and data-model documents

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use super::dimension::{find_lookup, Dimension, Lookup};
use super::measure::{HBaseMapping, Measure};
use super::rowkey::RowKeyDesc;

/// A cube descriptor draft as held by the cube designer
///
/// Only the sections the engine reads or rewrites are typed; everything else
/// is carried through untouched so a draft can be written back as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeDesc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub measures: Vec<Measure>,
    #[serde(default)]
    pub rowkey: RowKeyDesc,
    #[serde(default)]
    pub hbase_mapping: HBaseMapping,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CubeDesc {
    /// Get a dimension by name
    pub fn get_dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name.as_deref() == Some(name))
    }

    /// Get a measure by name
    pub fn get_measure(&self, name: &str) -> Option<&Measure> {
        self.measures.iter().find(|m| m.name == name)
    }
}

/// The data model a cube is built on: fact table plus lookup joins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fact_table: String,
    #[serde(default)]
    pub lookups: Vec<Lookup>,
}

impl DataModel {
    /// Get the lookup joined on the given table
    pub fn get_lookup(&self, table: &str) -> Option<&Lookup> {
        find_lookup(&self.lookups, table)
    }
}

/// Which designer flow the draft belongs to
///
/// Decides what happens to the aggregation groups when dimensions change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeMode {
    /// Defining a new cube: groups are synthesized from scratch
    #[serde(rename = "addNewCube")]
    AddNewCube,
    /// Editing a saved cube: groups are pruned of vanished columns
    #[serde(rename = "editExistCube")]
    EditExistCube,
    /// Any other flow: groups are left alone
    #[default]
    #[serde(rename = "default")]
    Default,
}

impl CubeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CubeMode::AddNewCube => "addNewCube",
            CubeMode::EditExistCube => "editExistCube",
            CubeMode::Default => "default",
        }
    }
}

impl fmt::Display for CubeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CubeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addNewCube" | "add" => Ok(CubeMode::AddNewCube),
            "editExistCube" | "edit" => Ok(CubeMode::EditExistCube),
            "default" => Ok(CubeMode::Default),
            other => Err(format!(
                "Unknown cube mode '{}', expected addNewCube, editExistCube or default",
                other
            )),
        }
    }
}
