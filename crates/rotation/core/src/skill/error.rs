//! Skill resolution errors.

use crate::error::{ErrorSeverity, KernelError};

/// Errors raised while resolving a [`SkillTemplate`](super::SkillTemplate)
/// against the character build.
///
/// Resolution runs before any simulation step, so every variant aborts setup.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResolutionError {
    /// A formula referenced a build scalar that the build does not provide.
    #[error("skill '{skill}': build value '{slot}/{tier}' is missing")]
    MissingBuildValue {
        skill: String,
        slot: String,
        tier: String,
    },

    /// A timing field resolved to a negative or non-finite number.
    #[error("skill '{skill}': {field} resolved to invalid value {value}")]
    InvalidValue {
        skill: String,
        field: &'static str,
        value: f64,
    },

    /// `Min` or `Max` was given no operands.
    #[error("skill '{skill}': {formula} formula has no operands")]
    EmptyFormula {
        skill: String,
        formula: &'static str,
    },
}

impl KernelError for ResolutionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingBuildValue { .. } => ErrorSeverity::Fatal,
            Self::InvalidValue { .. } | Self::EmptyFormula { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingBuildValue { .. } => "RESOLUTION_MISSING_BUILD_VALUE",
            Self::InvalidValue { .. } => "RESOLUTION_INVALID_VALUE",
            Self::EmptyFormula { .. } => "RESOLUTION_EMPTY_FORMULA",
        }
    }
}
