//! Unified error type surfaced by the runtime.
//!
//! Wraps kernel failures, content loading failures and worker coordination
//! so the binary can bubble them up with consistent context.
use rotation_core::{ErrorSeverity, KernelError, SimulationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("content loading failed: {0:#}")]
    Content(anyhow::Error),

    #[error("skill '{name}' is not in the skill book")]
    UnknownSkill { name: String },

    #[error("invalid value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialization failed: {0}")]
    Json(String),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl From<anyhow::Error> for RuntimeError {
    fn from(error: anyhow::Error) -> Self {
        RuntimeError::Content(error)
    }
}

impl KernelError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Simulation(e) => e.severity(),
            Self::Content(_) | Self::InvalidConfig { .. } => ErrorSeverity::Validation,
            Self::UnknownSkill { .. } | Self::WorkerJoin(_) => ErrorSeverity::Internal,
            Self::Io(_) | Self::Json(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Simulation(e) => e.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
            Self::UnknownSkill { .. } => "RUNTIME_UNKNOWN_SKILL",
            Self::InvalidConfig { .. } => "RUNTIME_INVALID_CONFIG",
            Self::Io(_) => "RUNTIME_IO",
            Self::Json(_) => "RUNTIME_JSON",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotation_core::{ConfigurationError, CycleError, SkillId};

    #[test]
    fn kernel_failures_keep_their_code() {
        let err = RuntimeError::from(SimulationError::from(ConfigurationError::UnknownSkill {
            id: SkillId(7),
        }));
        assert_eq!(err.error_code(), "CONFIG_UNKNOWN_SKILL");
        assert!(err.severity().is_internal());

        let err = RuntimeError::from(SimulationError::from(CycleError::SelfLoop {
            skill: "echo".into(),
        }));
        assert_eq!(err.error_code(), "CYCLE_SELF_LOOP");
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn runtime_failures_have_their_own_codes() {
        let err = RuntimeError::InvalidConfig {
            key: "horizon",
            reason: "must be positive".into(),
        };
        assert_eq!(err.error_code(), "RUNTIME_INVALID_CONFIG");
        assert_eq!(err.severity(), ErrorSeverity::Validation);

        let err = RuntimeError::from(anyhow::anyhow!("bad ron"));
        assert_eq!(err.error_code(), "RUNTIME_CONTENT");
    }
}
