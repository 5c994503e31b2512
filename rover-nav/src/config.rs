//! Configuration loading for RoverNav

use crate::error::Result;
use planet_map::Node;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct NavConfig {
    /// Seed for the exploration RNG; omitted means OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Maximum number of traversals before the mission gives up (default: 500)
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Route to this node instead of exploring freely
    #[serde(default)]
    pub target: Option<Node>,

    /// Scenario file to replay
    #[serde(default)]
    pub scenario: Option<PathBuf>,
}

// Default value functions
fn default_max_steps() -> usize {
    500
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_steps: default_max_steps(),
            target: None,
            scenario: None,
        }
    }
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: NavConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
