//! Board configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::DEFAULT_DIM;

/// Board dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIM,
            cols: DEFAULT_DIM,
        }
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Both dimensions must leave room for the 2x2 starting block
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.cols < 2 {
            return Err(ConfigError::TooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Load from a JSON file such as `{"rows": 6, "cols": 8}`; missing fields
    /// fall back to the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board config: {}", path.display()))?;
        let config: BoardConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse board config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
