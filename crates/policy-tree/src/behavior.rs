//! Core behavior trait.

use crate::{PolicyContext, Status};

/// A policy tree node.
///
/// Nodes are shared between concurrent runs, so they must be `Send + Sync`
/// and keep no per-tick state of their own.
pub trait Behavior: Send + Sync {
    /// Evaluate this node for one policy consultation.
    ///
    /// Leaves that pick a skill record it on the context through
    /// [`PolicyContext::choose`].
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status;
}

/// Owned, type-erased node.
pub type BoxedBehavior = Box<dyn Behavior>;

impl Behavior for BoxedBehavior {
    #[inline]
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        (**self).tick(ctx)
    }
}
