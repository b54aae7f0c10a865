//! User settings.
//!
//! Settings are loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/tilerc/config.json`.  They tune how the descriptor is
//! built; the descriptor itself is not configurable from the file.
//!
//! # Example
//!
//! ```json
//! {
//!   "modifier": "mod4",
//!   "terminal": "alacritty",
//!   "duplicate_policy": "reject"
//! }
//! ```

use crate::host::DuplicatePolicy;
use crate::keys::{Modifier, MOD};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level settings.
///
/// Every field is optional; a minimal `{}` file is valid and unknown keys
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Primary modifier for every binding.
    pub modifier: Modifier,
    /// Terminal launched by `modifier+Return`.  Detected when unset.
    pub terminal: Option<String>,
    /// How the simulated host treats a chord that is already bound.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modifier: MOD,
            terminal: None,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    /// Load settings from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a settings file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
