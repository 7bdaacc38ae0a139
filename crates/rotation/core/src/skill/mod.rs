//! Skill blueprints and their runtime instances.
//!
//! ```text
//! SkillTemplate --resolve(build)--> SkillDefinition --SkillBook--> SkillId
//!                                          │
//!                                          └── Roster (per run) ──> SkillInstance
//! ```
//!
//! Templates carry [`Formula`]s that may depend on the character build.
//! Resolution happens once; afterwards a [`SkillDefinition`] is immutable and
//! shared by reference count across every run that uses the same
//! [`SkillBook`].

mod book;
mod definition;
mod error;
pub mod formula;
mod instance;
mod roster;
mod template;

pub use book::{SkillBook, SkillId};
pub use definition::{Cooldown, SkillDefinition, SkillKind, SkillKindTag};
pub use error::ResolutionError;
pub use formula::Formula;
pub use instance::{
    Activation, ActivationEffect, InstanceKind, InstanceState, InstanceStatus, SkillInstance,
};
pub use roster::Roster;
pub use template::SkillTemplate;
