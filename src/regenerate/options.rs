//! Engine configuration

use serde::Deserialize;
use std::path::Path;
use crate::synthesizer::DEFAULT_MAX_GROUP_SIZE;
use super::error::RegenerateError;

/// Tunables for row-key regeneration
///
/// ```yaml
/// max_group_size: 10
/// prune_groups_in_default_mode: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegenerateOptions {
    /// Plain columns per synthesized aggregation group (add flow)
    pub max_group_size: usize,
    /// Prune aggregation groups in the default flow as the edit flow does
    pub prune_groups_in_default_mode: bool,
}

impl Default for RegenerateOptions {
    fn default() -> Self {
        Self {
            max_group_size: DEFAULT_MAX_GROUP_SIZE,
            prune_groups_in_default_mode: false,
        }
    }
}

impl RegenerateOptions {
    /// Load options from a YAML file; missing keys keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegenerateError> {
        let options: Self = crate::parser::parse_file(path)?;
        Ok(options)
    }

    /// Resolve options from an optional file plus command-line overrides
    ///
    /// Defaults apply first, then the file, then the overrides. The prune flag
    /// can only switch pruning on.
    pub fn resolve<P: AsRef<Path>>(
        config: Option<P>,
        max_group_size: Option<usize>,
        prune_default: bool,
    ) -> Result<Self, RegenerateError> {
        let mut options = match config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(size) = max_group_size {
            options.max_group_size = size;
        }
        if prune_default {
            options.prune_groups_in_default_mode = true;
        }
        Ok(options)
    }
}
