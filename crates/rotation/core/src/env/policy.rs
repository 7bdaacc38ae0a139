//! Rotation policy abstraction.
//!
//! The driver asks the policy what to attempt whenever the caster is free.
//! Policies see a read-only [`PolicyView`] of every instance, so a policy
//! that is a pure function of `(now, view)` keeps the whole run
//! deterministic.

use crate::skill::{InstanceStatus, SkillId};
use crate::time::Millis;

/// Decides which skill the caster should attempt next.
pub trait RotationPolicy {
    /// Returns the skill to attempt at `now`, or `None` to do nothing this step.
    ///
    /// Skills the driver already refused during the current step are listed
    /// in [`PolicyView::skipped`]; returning one of them again ends the step.
    fn next_action(&mut self, now: Millis, view: &PolicyView<'_>) -> Option<SkillId>;
}

/// Closures can act as ad-hoc policies (handy in tests and scripts).
impl<F> RotationPolicy for F
where
    F: FnMut(Millis, &PolicyView<'_>) -> Option<SkillId>,
{
    fn next_action(&mut self, now: Millis, view: &PolicyView<'_>) -> Option<SkillId> {
        self(now, view)
    }
}

/// Read-only snapshot of the roster handed to a [`RotationPolicy`].
#[derive(Clone, Copy, Debug)]
pub struct PolicyView<'a> {
    statuses: &'a [InstanceStatus],
    skipped: &'a [SkillId],
}

impl<'a> PolicyView<'a> {
    pub fn new(statuses: &'a [InstanceStatus], skipped: &'a [SkillId]) -> Self {
        Self { statuses, skipped }
    }

    /// Status of one instance, indexed by its id.
    pub fn status(&self, id: SkillId) -> Option<&'a InstanceStatus> {
        self.statuses.get(id.index())
    }

    pub fn statuses(&self) -> &'a [InstanceStatus] {
        self.statuses
    }

    /// Skills the driver refused earlier in the current step.
    pub fn skipped(&self) -> &'a [SkillId] {
        self.skipped
    }

    pub fn is_skipped(&self, id: SkillId) -> bool {
        self.skipped.contains(&id)
    }

    /// True if `id` can be attempted right now: known, available,
    /// triggerable by the policy and not refused earlier in this step.
    ///
    /// Constraint gates are not visible here; the driver checks them.
    pub fn is_ready(&self, id: SkillId) -> bool {
        self.status(id)
            .is_some_and(|s| s.available && s.triggerable && !self.is_skipped(id))
    }
}
