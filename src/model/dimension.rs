//! Dimension and lookup types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cube dimension as declared in the cube designer
///
/// A dimension contributes physical columns to the row key in one of three ways:
/// through the foreign keys of its lookup join (when it has derived columns),
/// through its single column, or through its ordered hierarchy columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source table name (fact table or lookup table)
    pub table: String,
    /// One column for a simple dimension, several for a hierarchy
    #[serde(default)]
    pub column: Option<Vec<String>>,
    /// Columns sourced from the lookup table through the join
    #[serde(default)]
    pub derived: Option<Vec<String>>,
    /// If true, `column` is an ordered drill-down chain
    #[serde(default, deserialize_with = "deserialize_hierarchy")]
    pub hierarchy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    /// Fields the engine does not read, kept for write-back
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Dimension {
    /// Whether the dimension declares at least one derived column
    pub fn has_derived(&self) -> bool {
        self.derived.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// The column of a simple dimension (exactly one column declared)
    pub fn simple_column(&self) -> Option<&str> {
        match self.column.as_deref() {
            Some([only]) => Some(only.as_str()),
            _ => None,
        }
    }

    /// The drill-down columns, or an empty slice for non-hierarchy dimensions
    pub fn hierarchy_columns(&self) -> &[String] {
        if !self.hierarchy {
            return &[];
        }
        self.column.as_deref().unwrap_or(&[])
    }

    /// Name used in diagnostics: the declared name, falling back to the table
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.table)
    }
}

/// Join between the fact table and a lookup table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Join {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub join_type: Option<String>,
    #[serde(default)]
    pub primary_key: Vec<String>,
    /// Fact-table side of the join, in key order
    #[serde(default)]
    pub foreign_key: Vec<String>,
}

/// A lookup table joined to the fact table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lookup {
    pub table: String,
    pub join: Join,
}

/// Find the lookup joined on `table`
///
/// A table is expected to be joined at most once; the first match wins.
pub fn find_lookup<'a>(lookups: &'a [Lookup], table: &str) -> Option<&'a Lookup> {
    lookups.iter().find(|l| l.table == table)
}

// Older cube documents carry `hierarchy: null` or omit it entirely.
fn deserialize_hierarchy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
