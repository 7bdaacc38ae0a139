//! Runner configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use rotation_content::ConfigLoader;
use rotation_core::{Millis, SimulationConfig};

use crate::{Result, RuntimeError};

/// Where the runner takes its inputs from.
///
/// Simulation settings come from the TOML file at `config_path` (or the
/// bundled demo config), then individual keys are overridden from the
/// environment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunnerConfig {
    pub config_path: Option<PathBuf>,
    pub build_path: Option<PathBuf>,
    /// JSON report destination; no report is written when unset.
    pub report_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Per-key overrides applied on top of the loaded [`SimulationConfig`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub horizon: Option<Millis>,
    pub min_step: Option<Millis>,
    pub remain_bonus: Option<f64>,
    pub reduce_bonus: Option<f64>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut SimulationConfig) {
        if let Some(horizon) = self.horizon {
            config.horizon = horizon;
        }
        if let Some(min_step) = self.min_step {
            config.min_step = min_step;
        }
        if let Some(remain) = self.remain_bonus {
            config.remain_bonus = remain;
        }
        if let Some(reduce) = self.reduce_bonus {
            config.reduce_bonus = reduce;
        }
    }
}

impl RunnerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_CONFIG_PATH` - TOML simulation config (default: bundled)
    /// - `SIM_BUILD_PATH` - RON build table (default: bundled)
    /// - `SIM_REPORT_PATH` - Where to write the JSON report (default: none)
    /// - `SIM_HORIZON_MS` - Simulated window in milliseconds
    /// - `SIM_MIN_STEP_MS` - Policy consultation granularity in milliseconds
    /// - `SIM_REMAIN_BONUS` - Baseline buff duration extension (0.1 = +10%)
    /// - `SIM_REDUCE_BONUS` - Baseline cooldown reduction (0.1 = -10%)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunnerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = ConfigOverrides {
            horizon: parse::<u64>(&lookup, "SIM_HORIZON_MS")?.map(Millis),
            min_step: parse::<u64>(&lookup, "SIM_MIN_STEP_MS")?.map(Millis),
            remain_bonus: parse_bonus(&lookup, "SIM_REMAIN_BONUS")?,
            reduce_bonus: parse_bonus(&lookup, "SIM_REDUCE_BONUS")?,
        };

        Ok(Self {
            config_path: lookup("SIM_CONFIG_PATH").map(PathBuf::from),
            build_path: lookup("SIM_BUILD_PATH").map(PathBuf::from),
            report_path: lookup("SIM_REPORT_PATH").map(PathBuf::from),
            overrides,
        })
    }

    /// Loads the base config and applies the overrides.
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => rotation_content::bundled::config()?,
        };
        self.overrides.apply(&mut config);

        if config.horizon.is_zero() {
            return Err(RuntimeError::InvalidConfig {
                key: "horizon",
                reason: "must be positive".to_string(),
            });
        }
        Ok(config)
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| RuntimeError::InvalidConfig {
                key,
                reason: format!("{raw:?}: {e}"),
            })
        })
        .transpose()
}

fn parse_bonus(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<f64>> {
    match parse::<f64>(lookup, key)? {
        Some(value) if !value.is_finite() => Err(RuntimeError::InvalidConfig {
            key,
            reason: "must be finite".to_string(),
        }),
        other => Ok(other),
    }
}
