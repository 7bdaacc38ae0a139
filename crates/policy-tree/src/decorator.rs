//! Decorator behavior nodes.

use crate::{Behavior, BoxedBehavior, PolicyContext, Status};

/// Inverts its child. A cast recorded by the child is rolled back, since a
/// succeeding `Not` means the child did not get its way.
pub struct Not {
    child: BoxedBehavior,
}

impl Not {
    pub fn new(child: BoxedBehavior) -> Self {
        Self { child }
    }
}

impl Behavior for Not {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        let before = ctx.choice();
        let status = self.child.tick(ctx).invert();
        ctx.reset_choice(before);
        status
    }
}

/// Ticks its child and always succeeds.
///
/// Wrap opportunistic casts in a sequence with this, e.g. "cast the buff if
/// it is ready, then continue with the filler".
pub struct Optional {
    child: BoxedBehavior,
}

impl Optional {
    pub fn new(child: BoxedBehavior) -> Self {
        Self { child }
    }
}

impl Behavior for Optional {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        let _ = self.child.tick(ctx);
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{after, cast};
    use rotation_core::{InstanceState, InstanceStatus, Millis, PolicyView, SkillId};

    fn ready(id: u32) -> InstanceStatus {
        InstanceStatus {
            id: SkillId(id),
            state: InstanceState::Idle,
            available: true,
            active: false,
            triggerable: true,
            remaining_duration: Millis::ZERO,
            remaining_cooldown: Millis::ZERO,
            stack_count: None,
        }
    }

    #[test]
    fn not_inverts_conditions() {
        let statuses = [ready(0)];
        let view = PolicyView::new(&statuses, &[]);
        let not = Not::new(after(Millis(1_000)));

        let mut early = PolicyContext::new(Millis(500), view);
        assert_eq!(not.tick(&mut early), Status::Success);
        let mut late = PolicyContext::new(Millis(1_500), view);
        assert_eq!(not.tick(&mut late), Status::Failure);
    }

    #[test]
    fn not_discards_child_cast() {
        let statuses = [ready(0)];
        let view = PolicyView::new(&statuses, &[]);
        let not = Not::new(cast(SkillId(0)));

        let mut ctx = PolicyContext::new(Millis::ZERO, view);
        assert_eq!(not.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.choice(), None);
    }

    #[test]
    fn optional_keeps_successful_cast() {
        let statuses = [ready(0)];
        let view = PolicyView::new(&statuses, &[]);

        let mut ctx = PolicyContext::new(Millis::ZERO, view);
        assert_eq!(Optional::new(cast(SkillId(0))).tick(&mut ctx), Status::Success);
        assert_eq!(ctx.choice(), Some(SkillId(0)));

        let mut ctx = PolicyContext::new(Millis::ZERO, view);
        assert_eq!(Optional::new(cast(SkillId(3))).tick(&mut ctx), Status::Success);
        assert_eq!(ctx.choice(), None);
    }
}
