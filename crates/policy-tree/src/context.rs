//! Blackboard passed through a policy tree tick.

use rotation_core::{InstanceStatus, Millis, PolicyView, SkillId};

/// Read-only roster view plus the pick recorded so far.
pub struct PolicyContext<'a> {
    pub now: Millis,
    pub view: PolicyView<'a>,
    choice: Option<SkillId>,
}

impl<'a> PolicyContext<'a> {
    pub fn new(now: Millis, view: PolicyView<'a>) -> Self {
        Self {
            now,
            view,
            choice: None,
        }
    }

    pub fn status(&self, id: SkillId) -> Option<&'a InstanceStatus> {
        self.view.status(id)
    }

    /// Records `id` as the skill to attempt. A later cast overrides it.
    pub fn choose(&mut self, id: SkillId) {
        self.choice = Some(id);
    }

    /// Rolls the pick back to an earlier value (used by failing branches).
    pub(crate) fn reset_choice(&mut self, choice: Option<SkillId>) {
        self.choice = choice;
    }

    pub fn choice(&self) -> Option<SkillId> {
        self.choice
    }

    pub fn into_choice(self) -> Option<SkillId> {
        self.choice
    }
}
