//! Volume Bars
//!
//! Buckets a trade volume series into volume bars:
//! - A bar closes once its cumulative volume reaches the threshold
//! - Every input element gets the label of the bar it belongs to
//! - Labels start at 1 and never skip

pub mod aggregators;
pub mod config;
pub mod error;

pub use aggregators::{GroupSummary, VolumeGrouper, summarize_groups};
pub use config::{GrouperConfig, ValidationMode};
pub use error::{GroupingError, Result};

/// Label each volume with its volume bar number.
///
/// Uses strict validation: a non-positive threshold or a negative volume is
/// rejected unless `volumes` is empty. Build a [`VolumeGrouper`] with
/// [`ValidationMode::Mechanical`] to run degenerate inputs unchecked.
pub fn find_volume_groups(volumes: &[f64], threshold: i64) -> Result<Vec<u32>> {
    VolumeGrouper::new(threshold).group(volumes)
}
