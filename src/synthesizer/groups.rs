//! Aggregation group reconciliation and synthesis

use std::collections::HashSet;
use tracing::{debug, warn};
use crate::extractor::ExtractedColumns;
use crate::model::AggregationGroup;

/// Maximum number of plain columns per synthesized aggregation group
pub const DEFAULT_MAX_GROUP_SIZE: usize = 10;

/// Prune saved aggregation groups against the freshly extracted columns
///
/// Members no longer extracted are removed; groups left empty (including
/// groups that were already empty or `null`) are dropped. Group order and
/// member order are preserved, and a member repeated within a group is kept once.
pub fn reconcile_groups(
    previous: &[AggregationGroup],
    extracted: &ExtractedColumns,
) -> Vec<AggregationGroup> {
    let mut groups = Vec::with_capacity(previous.len());

    for (index, group) in previous.iter().enumerate() {
        let mut seen = HashSet::new();
        let kept: AggregationGroup = group
            .columns()
            .iter()
            .filter(|c| extracted.contains(c) && seen.insert(c.as_str()))
            .cloned()
            .collect();

        if kept.is_empty() {
            if !group.is_empty() {
                warn!(group = index, "aggregation group dropped, none of its columns remain");
            }
            continue;
        }
        groups.push(kept);
    }

    debug!(before = previous.len(), after = groups.len(), "reconciled aggregation groups");
    groups
}

/// Build aggregation groups for a new cube
///
/// Plain (non-hierarchy) columns are split in extraction order into chunks of
/// at most `max_group_size` columns. All hierarchy columns then go into one
/// final group. A `max_group_size` of zero is treated as one.
pub fn synthesize_groups(extracted: &ExtractedColumns, max_group_size: usize) -> Vec<AggregationGroup> {
    let plain = extracted.plain_columns();
    let mut groups: Vec<AggregationGroup> = plain
        .chunks(max_group_size.max(1))
        .map(|chunk| chunk.iter().copied().collect())
        .collect();

    let hierarchy: AggregationGroup = extracted.hierarchy_columns().collect();
    if !hierarchy.is_empty() {
        groups.push(hierarchy);
    }

    debug!(plain = plain.len(), groups = groups.len(), "synthesized aggregation groups");
    groups
}
