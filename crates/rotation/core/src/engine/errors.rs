//! Error umbrella for setting up and driving a simulation.

use crate::error::{ErrorSeverity, KernelError};
use crate::graph::{ConfigurationError, CycleError};
use crate::skill::ResolutionError;

/// Any error that prevents a run from starting or finishing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("skill resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("trigger graph rejected: {0}")]
    Cycle(#[from] CycleError),

    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl KernelError for SimulationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Resolution(e) => e.severity(),
            Self::Cycle(e) => e.severity(),
            Self::Configuration(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Resolution(e) => e.error_code(),
            Self::Cycle(e) => e.error_code(),
            Self::Configuration(e) => e.error_code(),
        }
    }
}
