//! Row-key and aggregation-group synthesis
//!
//! Merges freshly extracted columns with the previously saved row-key layout:
//! - Row-key columns keep their saved order; new columns are appended
//! - Edit flow: existing aggregation groups are pruned of vanished columns
//! - Add flow: aggregation groups are rebuilt from scratch in fixed-size chunks

mod groups;
mod rowkey;

pub use groups::{reconcile_groups, synthesize_groups, DEFAULT_MAX_GROUP_SIZE};
pub use rowkey::synthesize_rowkey_columns;
