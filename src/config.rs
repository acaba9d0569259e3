//! Context settings
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! row_capacity = 16
//! row_advance = { fixed = 50 }
//! ```

use crate::format::DEFAULT_FORMAT_CAPACITY;
use crate::layout::{RowAdvance, DEFAULT_ROW_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pixel size of one font-scale unit; scale 0.4 gives roughly 13 px text.
pub const DEFAULT_PX_PER_SCALE: f32 = 32.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Deepest allowed `begin_row` nesting
    pub row_capacity: usize,
    /// Longest formatted string, in bytes
    pub format_capacity: usize,
    pub row_advance: RowAdvance,
    pub px_per_scale: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            row_capacity: DEFAULT_ROW_CAPACITY,
            format_capacity: DEFAULT_FORMAT_CAPACITY,
            row_advance: RowAdvance::default(),
            px_per_scale: DEFAULT_PX_PER_SCALE,
        }
    }
}

impl UiConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}
