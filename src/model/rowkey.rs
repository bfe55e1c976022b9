//! Row-key layout types
//!
//! These shapes are persisted as part of the cube descriptor, so field names
//! and default values must stay as they are.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// One physical column of the row key with its encoding metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowKeyColumn {
    pub column: String,
    #[serde(default)]
    pub length: u32,
    /// Written as the string `"true"` / `"false"`
    #[serde(
        default = "default_dictionary",
        serialize_with = "serialize_dictionary",
        deserialize_with = "deserialize_dictionary"
    )]
    pub dictionary: bool,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RowKeyColumn {
    /// A freshly discovered column with default encoding metadata
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            length: 0,
            dictionary: true,
            mandatory: false,
            extra: BTreeMap::new(),
        }
    }
}

fn default_dictionary() -> bool {
    true
}

fn serialize_dictionary<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

fn deserialize_dictionary<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid dictionary flag '{}', expected \"true\" or \"false\"",
                other
            ))),
        },
    }
}

/// An ordered set of row-key columns considered together for pre-aggregation
///
/// A `null` entry in a persisted document reads as an empty group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregationGroup(pub Vec<String>);

impl<'de> Deserialize<'de> for AggregationGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let columns = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(Self(columns.unwrap_or_default()))
    }
}

impl AggregationGroup {
    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| c == column)
    }
}

impl<S: Into<String>> FromIterator<S> for AggregationGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The row-key section of a cube descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowKeyDesc {
    #[serde(default)]
    pub rowkey_columns: Vec<RowKeyColumn>,
    #[serde(default)]
    pub aggregation_groups: Vec<AggregationGroup>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RowKeyDesc {
    /// Column names in row-key order
    pub fn column_names(&self) -> Vec<&str> {
        self.rowkey_columns.iter().map(|c| c.column.as_str()).collect()
    }
}
