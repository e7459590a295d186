//! Volume grouper configuration

use crate::error::{GroupingError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How out-of-domain input is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject non-positive thresholds and negative volumes
    #[default]
    Strict,
    /// Run the accumulator as-is on degenerate thresholds and negative volumes
    Mechanical,
}

impl std::str::FromStr for ValidationMode {
    type Err = GroupingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(Self::Strict),
            "mechanical" => Ok(Self::Mechanical),
            other => Err(GroupingError::Configuration {
                message: format!("unknown validation mode '{other}'"),
            }),
        }
    }
}

/// Volume grouper configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrouperConfig {
    /// Cumulative volume that closes a bar
    pub threshold: i64,

    /// Input validation policy
    pub mode: ValidationMode,
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            threshold: 1,
            mode: ValidationMode::Strict,
        }
    }
}

impl GrouperConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = Self::parse_json_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document without validating it.
    ///
    /// Callers that override fields afterwards must call [`Self::validate`]
    /// on the merged result.
    pub fn parse_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file without validating it
    pub fn read_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_json_str(&contents)
    }

    /// Check the threshold against the validation mode
    pub fn validate(&self) -> Result<()> {
        if self.mode == ValidationMode::Strict && self.threshold <= 0 {
            return Err(GroupingError::InvalidThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}
