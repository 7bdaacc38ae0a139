//! Build-dependent numeric formulas.
//!
//! Skill templates describe every tier-scaled number as a [`Formula`] so
//! that enhancement levels are substituted exactly once, at resolution time.
//!
//! ## Examples
//!
//! ```ignore
//! // 40 seconds, +1 second per V level
//! Formula::linear(40_000.0, 1_000.0, "vskill", "level")
//!
//! // 180% coefficient plus 3% per hyper tier, capped at 240%
//! Formula::Min(vec![
//!     Formula::linear(180.0, 3.0, "hyper", "tier"),
//!     Formula::Constant(240.0),
//! ])
//! ```

use crate::env::BuildOracle;

use super::ResolutionError;

/// Formula for calculating a numeric skill parameter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Formula {
    /// Fixed value.
    Constant(f64),

    /// Raw build scalar.
    Build { slot: String, tier: String },

    /// `base + per_tier * build(slot, tier)`.
    Linear {
        base: f64,
        per_tier: f64,
        slot: String,
        tier: String,
    },

    /// Sum of sub-formulas (empty sum is zero).
    Sum(Vec<Formula>),

    /// Product of sub-formulas (empty product is one).
    Product(Vec<Formula>),

    /// Minimum of sub-formulas.
    Min(Vec<Formula>),

    /// Maximum of sub-formulas.
    Max(Vec<Formula>),
}

impl Formula {
    pub fn build(slot: impl Into<String>, tier: impl Into<String>) -> Self {
        Formula::Build {
            slot: slot.into(),
            tier: tier.into(),
        }
    }

    pub fn linear(
        base: f64,
        per_tier: f64,
        slot: impl Into<String>,
        tier: impl Into<String>,
    ) -> Self {
        Formula::Linear {
            base,
            per_tier,
            slot: slot.into(),
            tier: tier.into(),
        }
    }
}

impl Default for Formula {
    fn default() -> Self {
        Formula::Constant(0.0)
    }
}

impl From<f64> for Formula {
    fn from(value: f64) -> Self {
        Formula::Constant(value)
    }
}

impl From<u64> for Formula {
    fn from(value: u64) -> Self {
        Formula::Constant(value as f64)
    }
}

/// Evaluate a formula against the build.
///
/// `skill` is only used to label errors.
///
/// ## Error Handling
/// - `MissingBuildValue` if a referenced build scalar is absent
/// - `EmptyFormula` for `Min`/`Max` without operands
pub fn evaluate<B>(formula: &Formula, build: &B, skill: &str) -> Result<f64, ResolutionError>
where
    B: BuildOracle + ?Sized,
{
    match formula {
        Formula::Constant(value) => Ok(*value),

        Formula::Build { slot, tier } => lookup(build, skill, slot, tier),

        Formula::Linear {
            base,
            per_tier,
            slot,
            tier,
        } => Ok(base + per_tier * lookup(build, skill, slot, tier)?),

        Formula::Sum(parts) => parts
            .iter()
            .try_fold(0.0, |acc, f| -> Result<f64, ResolutionError> {
                Ok(acc + evaluate(f, build, skill)?)
            }),

        Formula::Product(parts) => parts
            .iter()
            .try_fold(1.0, |acc, f| -> Result<f64, ResolutionError> {
                Ok(acc * evaluate(f, build, skill)?)
            }),

        Formula::Min(parts) => reduce(parts, build, skill, "min", f64::min),

        Formula::Max(parts) => reduce(parts, build, skill, "max", f64::max),
    }
}

fn lookup<B>(build: &B, skill: &str, slot: &str, tier: &str) -> Result<f64, ResolutionError>
where
    B: BuildOracle + ?Sized,
{
    build
        .value(slot, tier)
        .ok_or_else(|| ResolutionError::MissingBuildValue {
            skill: skill.to_string(),
            slot: slot.to_string(),
            tier: tier.to_string(),
        })
}

fn reduce<B>(
    parts: &[Formula],
    build: &B,
    skill: &str,
    name: &'static str,
    op: fn(f64, f64) -> f64,
) -> Result<f64, ResolutionError>
where
    B: BuildOracle + ?Sized,
{
    let (first, rest) = parts
        .split_first()
        .ok_or_else(|| ResolutionError::EmptyFormula {
            skill: skill.to_string(),
            formula: name,
        })?;

    rest.iter()
        .try_fold(evaluate(first, build, skill)?, |acc, f| -> Result<f64, ResolutionError> {
            Ok(op(acc, evaluate(f, build, skill)?))
        })
}
