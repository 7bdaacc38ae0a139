//! Composite behavior nodes.
//!
//! [`Priority`] is the classic rotation list: try each entry in order and
//! take the first that works. [`Sequence`] glues conditions to a cast.

use crate::{Behavior, BoxedBehavior, PolicyContext, Status};

/// Ticks children in order until one fails.
///
/// A failing sequence rolls back any pick its earlier children recorded, so
/// `sequence([cast(a), is_active(b)])` never leaks `a` when `b` is inactive.
pub struct Sequence {
    children: Vec<BoxedBehavior>,
}

impl Sequence {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<BoxedBehavior>) -> Self {
        assert!(!children.is_empty(), "Sequence must have at least one child");
        Self { children }
    }
}

impl Behavior for Sequence {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        let before = ctx.choice();
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                ctx.reset_choice(before);
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Ticks children in order until one succeeds.
pub struct Priority {
    children: Vec<BoxedBehavior>,
}

impl Priority {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<BoxedBehavior>) -> Self {
        assert!(!children.is_empty(), "Priority must have at least one child");
        Self { children }
    }
}

impl Behavior for Priority {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
