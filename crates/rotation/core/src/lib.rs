//! Deterministic skill-rotation simulation kernel.
//!
//! `rotation-core` turns a declarative set of skill definitions and the
//! wiring between them into a timeline of activation events. Definitions and
//! the trigger graph are immutable once built and can be shared across any
//! number of independent runs; every run owns its own [`skill::Roster`] of
//! mutable instances and is driven by [`engine::Simulation`].
//!
//! Modules are organized leaves first:
//! - [`stats`] holds the additive [`Modifier`] algebra
//! - [`skill`] holds templates, definitions, the skill book and instances
//! - [`graph`] holds trigger edges and control-flow nodes
//! - [`engine`] advances the clock and records the timeline
//! - [`env`] describes the external collaborators (build data, rotation policy)
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod graph;
pub mod skill;
pub mod stats;
pub mod time;

pub use config::SimulationConfig;
pub use engine::{ActivationEvent, Simulation, SimulationError, Timeline, TriggerSource};
pub use env::{BuildOracle, BuildTable, PolicyView, RotationPolicy};
pub use error::{ErrorSeverity, KernelError};
pub use graph::{
    ConfigurationError, CycleError, Edge, EdgeKind, Node, NodeId, Predicate, Target, TriggerGraph,
    TriggerGraphBuilder,
};
pub use skill::{
    Activation, ActivationEffect, Cooldown, Formula, InstanceKind, InstanceState, InstanceStatus,
    ResolutionError, Roster, SkillBook, SkillDefinition, SkillId, SkillInstance, SkillKind,
    SkillKindTag, SkillTemplate,
};
pub use stats::{Modifier, StatTag};
pub use time::Millis;
