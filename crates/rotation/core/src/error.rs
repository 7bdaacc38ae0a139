//! Common error infrastructure for rotation-core.
//!
//! Domain-specific errors live next to the code that raises them:
//! [`ResolutionError`](crate::skill::ResolutionError) in `skill`,
//! [`CycleError`](crate::graph::CycleError) and
//! [`ConfigurationError`](crate::graph::ConfigurationError) in `graph`, and the
//! [`SimulationError`](crate::engine::SimulationError) umbrella in `engine`.
//!
//! Every one of them is fatal to the run that raised it. "Cannot activate
//! now" outcomes (cooldown, closed gate) are not errors at all; they only
//! show up as a missing activation event.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input data (e.g. a build table that lacks a value).
    Validation,

    /// Wiring bug in the caller's setup code.
    Internal,

    /// Setup cannot complete; no simulation step may run.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error points at a programming mistake.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all rotation-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Return a stable, upper-case code from [`KernelError::error_code`]
pub trait KernelError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier of the variant, for logs and tests.
    fn error_code(&self) -> &'static str;
}
