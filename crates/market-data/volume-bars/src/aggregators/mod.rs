//! Aggregator implementations

pub mod summary;
pub mod volume_groups;

pub use summary::{GroupSummary, summarize_groups};
pub use volume_groups::VolumeGrouper;
