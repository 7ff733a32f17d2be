//! TOML run configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::automaton::Boundary;
use crate::error::Result;
use crate::render::RenderOptions;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Generations to propagate after the initial board.
    pub steps: u64,
    pub boundary: Boundary,
    /// Worker threads per step; 1 steps sequentially.
    pub threads: usize,
    pub render: RenderOptions,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            steps: 10,
            boundary: Boundary::Dead,
            threads: 1,
            render: RenderOptions::default(),
        }
    }
}

impl SimConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
