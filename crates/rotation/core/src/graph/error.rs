//! Trigger graph validation errors.

use crate::error::{ErrorSeverity, KernelError};
use crate::skill::SkillId;

use super::NodeId;

/// A chain of zero-delay skills that would loop forever inside one timestamp.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    #[error("skill '{skill}' chains into itself with zero delay")]
    SelfLoop { skill: String },

    #[error("zero-delay chain cycle: {}", path.join(" -> "))]
    ZeroDelayCycle { path: Vec<String> },
}

impl KernelError for CycleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SelfLoop { .. } => "CYCLE_SELF_LOOP",
            Self::ZeroDelayCycle { .. } => "CYCLE_ZERO_DELAY",
        }
    }
}

/// Wiring that references something that does not exist or cannot work.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown skill {id}")]
    UnknownSkill { id: SkillId },

    #[error("unknown node {id}")]
    UnknownNode { id: NodeId },

    #[error("tick edge from '{skill}' has a zero interval")]
    ZeroTickInterval { skill: String },

    #[error("{node} repeats zero times")]
    EmptyRepeat { node: NodeId },

    #[error("{node} repeats another node and needs an explicit interval")]
    RepeatNeedsInterval { node: NodeId },

    #[error("graph was built for {graph} skills but the book holds {book}")]
    GraphMismatch { graph: usize, book: usize },
}

impl KernelError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSkill { .. } => "CONFIG_UNKNOWN_SKILL",
            Self::UnknownNode { .. } => "CONFIG_UNKNOWN_NODE",
            Self::ZeroTickInterval { .. } => "CONFIG_ZERO_TICK_INTERVAL",
            Self::EmptyRepeat { .. } => "CONFIG_EMPTY_REPEAT",
            Self::RepeatNeedsInterval { .. } => "CONFIG_REPEAT_NEEDS_INTERVAL",
            Self::GraphMismatch { .. } => "CONFIG_GRAPH_MISMATCH",
        }
    }
}
