//! Rotation policies assembled from small behavior nodes.
//!
//! A policy tree is ticked once per policy consultation. Condition nodes
//! read the [`PolicyView`](rotation_core::PolicyView) handed over by the
//! driver, and [`Cast`] leaves record the skill to attempt. The first
//! successful path through the tree decides the pick.
//!
//! - **Stateless**: nodes never remember earlier ticks, so a tree is a pure
//!   function of `(now, view)` and runs stay deterministic
//! - **No Running state**: every node succeeds or fails immediately
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: success or failure
//! - Composite nodes: [`Priority`], [`Sequence`]
//! - Decorator nodes: [`Not`], [`Optional`]
//! - Leaves: [`Cast`], [`Condition`]
//! - [`PolicyTree`] / [`PriorityPolicy`]: adapters to
//!   [`RotationPolicy`](rotation_core::RotationPolicy)

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod context;
pub mod decorator;
pub mod leaf;
pub mod policy;
pub mod status;

pub use behavior::{Behavior, BoxedBehavior};
pub use composite::{Priority, Sequence};
pub use context::PolicyContext;
pub use decorator::{Not, Optional};
pub use leaf::{Cast, Condition};
pub use policy::{PolicyTree, PriorityPolicy};
pub use status::Status;
