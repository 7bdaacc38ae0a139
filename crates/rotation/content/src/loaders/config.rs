//! Simulation configuration loader.

use std::path::Path;

use rotation_core::SimulationConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`SimulationConfig`] from TOML files.
///
/// Missing keys keep their defaults:
///
/// ```toml
/// horizon = 180000
/// min_step = 10
/// remain_bonus = 0.1
/// reduce_bonus = 0.05
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<SimulationConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SimulationConfig> {
        let config: SimulationConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !config.remain_bonus.is_finite() || !config.reduce_bonus.is_finite() {
            anyhow::bail!("Config bonuses must be finite numbers");
        }
        Ok(config)
    }
}
