//! Volume bar grouper
//!
//! Walks a volume series once, accumulating volume until the running total
//! reaches the threshold. The element that reaches it keeps the label of the
//! bar it closes; the following element opens the next bar.

use crate::config::{GrouperConfig, ValidationMode};
use crate::error::{GroupingError, Result};
use tracing::{debug, warn};

/// Assigns volume bar labels to a series of trade volumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeGrouper {
    config: GrouperConfig,
}

impl Default for VolumeGrouper {
    fn default() -> Self {
        Self::with_config(GrouperConfig::default())
    }
}

impl VolumeGrouper {
    /// Create a strict grouper closing bars at `threshold`
    #[must_use]
    pub const fn new(threshold: i64) -> Self {
        Self {
            config: GrouperConfig {
                threshold,
                mode: ValidationMode::Strict,
            },
        }
    }

    /// Create a grouper from configuration
    #[must_use]
    pub const fn with_config(config: GrouperConfig) -> Self {
        Self { config }
    }

    /// Volume that closes a bar
    #[must_use]
    pub const fn threshold(&self) -> i64 {
        self.config.threshold
    }

    /// Validation policy in effect
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.config.mode
    }

    /// Label every volume with its bar number, starting at 1.
    ///
    /// The output has the same length as `volumes`. Empty input yields an
    /// empty output whatever the threshold.
    pub fn group(&self, volumes: &[f64]) -> Result<Vec<u32>> {
        let mut labels = Vec::with_capacity(volumes.len());
        if volumes.is_empty() {
            return Ok(labels);
        }

        self.config.validate()?;
        if self.config.threshold <= 0 {
            warn!(
                "Grouping {} volumes with non-positive threshold {}",
                volumes.len(),
                self.config.threshold
            );
        }

        // Thresholds beyond 2^53 lose precision; no real bar size gets there
        let threshold = self.config.threshold as f64;
        let mut cumulative = 0.0_f64;
        let mut group: u32 = 1;
        let mut closed = false;

        for (index, &volume) in volumes.iter().enumerate() {
            self.check_volume(index, volume)?;

            if closed {
                group = group.checked_add(1).ok_or(GroupingError::NumericOverflow {
                    index,
                    reason: "group label exceeds u32::MAX",
                })?;
                closed = false;
            }

            cumulative += volume;
            if !cumulative.is_finite() {
                return Err(GroupingError::NumericOverflow {
                    index,
                    reason: "cumulative volume is not finite",
                });
            }

            labels.push(group);

            if cumulative >= threshold {
                cumulative = 0.0;
                closed = true;
            }
        }

        debug!(
            "Grouped {} volumes into {} bars (threshold {})",
            volumes.len(),
            group,
            self.config.threshold
        );
        Ok(labels)
    }

    fn check_volume(&self, index: usize, volume: f64) -> Result<()> {
        if !volume.is_finite() {
            return Err(GroupingError::InvalidVolume {
                index,
                value: volume,
                reason: "volume is not finite",
            });
        }
        if self.config.mode == ValidationMode::Strict && volume < 0.0 {
            return Err(GroupingError::InvalidVolume {
                index,
                value: volume,
                reason: "volume is negative",
            });
        }
        Ok(())
    }
}
