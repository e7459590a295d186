//! Error types for volume grouping

use thiserror::Error;

/// Volume grouping errors
#[derive(Error, Debug)]
pub enum GroupingError {
    /// Threshold cannot close a volume bar
    #[error("Invalid threshold: {threshold} (must be positive)")]
    InvalidThreshold {
        /// The rejected threshold
        threshold: i64,
    },

    /// Volume element rejected by validation
    #[error("Invalid volume {value} at index {index}: {reason}")]
    InvalidVolume {
        /// Position of the offending element in the input
        index: usize,
        /// The rejected value
        value: f64,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Accumulator or label counter left its representable range
    #[error("Numeric overflow at index {index}: {reason}")]
    NumericOverflow {
        /// Position of the element that triggered the overflow
        index: usize,
        /// Which counter overflowed
        reason: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Configuration error message detailing what went wrong
        message: String,
    },

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for volume grouping operations
pub type Result<T> = std::result::Result<T, GroupingError>;
