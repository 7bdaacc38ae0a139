//! Leaf nodes: casts and conditions.

use rotation_core::{Millis, SkillId};

use crate::{Behavior, PolicyContext, Status};

/// Picks a skill if the driver would accept it right now.
///
/// Readiness means available, triggerable by the policy and not refused
/// earlier in this consultation. Constraint edges of the trigger graph are
/// not visible here; the driver enforces them and asks again on refusal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cast(pub SkillId);

impl Behavior for Cast {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        if ctx.view.is_ready(self.0) {
            ctx.choose(self.0);
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Read-only check against the roster or the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    IsActive(SkillId),
    IsNotActive(SkillId),
    IsAvailable(SkillId),
    IsReady(SkillId),
    /// Stacking skill holds at least this many stacks.
    StackAtLeast(SkillId, u32),
    /// Remaining cooldown is at most this long (zero when available).
    CooldownWithin(SkillId, Millis),
    /// `now >= t`
    After(Millis),
    /// `now < t`
    Before(Millis),
}

impl Condition {
    pub fn holds(&self, ctx: &PolicyContext<'_>) -> bool {
        match *self {
            Condition::IsActive(id) => ctx.status(id).is_some_and(|s| s.active),
            Condition::IsNotActive(id) => ctx.status(id).is_some_and(|s| !s.active),
            Condition::IsAvailable(id) => ctx.status(id).is_some_and(|s| s.available),
            Condition::IsReady(id) => ctx.view.is_ready(id),
            Condition::StackAtLeast(id, min) => ctx
                .status(id)
                .and_then(|s| s.stack_count)
                .is_some_and(|count| count >= min),
            Condition::CooldownWithin(id, limit) => ctx
                .status(id)
                .is_some_and(|s| s.available || s.remaining_cooldown <= limit),
            Condition::After(t) => ctx.now >= t,
            Condition::Before(t) => ctx.now < t,
        }
    }
}

impl Behavior for Condition {
    fn tick(&self, ctx: &mut PolicyContext<'_>) -> Status {
        Status::from_bool(self.holds(ctx))
    }
}
