//! Per-bar summaries built from volume labels

use crate::error::{GroupingError, Result};
use serde::{Deserialize, Serialize};

/// One closed or still-open volume bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Bar label
    pub group: u32,
    /// Index of the first element in the bar
    pub start: usize,
    /// One past the last element in the bar
    pub end: usize,
    /// Number of elements
    pub count: usize,
    /// Total volume
    pub volume: f64,
}

/// Collapse a labelled volume series into one summary per bar.
///
/// `labels` must be a label sequence as produced by the grouper: same length
/// as `volumes`, starting at 1 and stepping by 0 or 1.
pub fn summarize_groups(volumes: &[f64], labels: &[u32]) -> Result<Vec<GroupSummary>> {
    if volumes.len() != labels.len() {
        return Err(GroupingError::Configuration {
            message: format!(
                "{} volumes but {} labels",
                volumes.len(),
                labels.len()
            ),
        });
    }

    let mut summaries: Vec<GroupSummary> = Vec::new();
    for (index, (&volume, &label)) in volumes.iter().zip(labels).enumerate() {
        if let Some(current) = summaries.last_mut() {
            if current.group == label {
                current.end = index + 1;
                current.count += 1;
                current.volume += volume;
                continue;
            }
        }

        let expected = summaries
            .last()
            .map_or(1, |bar| bar.group.saturating_add(1));
        if label != expected {
            return Err(GroupingError::Configuration {
                message: format!("label {label} at index {index}, expected {expected}"),
            });
        }
        summaries.push(GroupSummary {
            group: label,
            start: index,
            end: index + 1,
            count: 1,
            volume,
        });
    }

    Ok(summaries)
}
