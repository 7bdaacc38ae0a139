//! Recorded output of a run.

use strum::{Display, IntoStaticStr};

use crate::skill::{SkillId, SkillKindTag};
use crate::stats::Modifier;
use crate::time::Millis;

/// What caused a use attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TriggerSource {
    /// Picked by the rotation policy (or requested directly).
    Policy,
    Chain,
    Tick,
    Repeat,
}

/// One completed activation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivationEvent {
    /// Completion time (use time plus delay).
    pub timestamp: Millis,
    pub skill: SkillId,
    pub name: String,
    /// Sum of every modifier active at `timestamp`.
    pub modifier: Modifier,
    pub hit: u32,
    pub kind: SkillKindTag,
    pub trigger: TriggerSource,
}

/// Ordered activation events of one run over `[0, horizon)`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    pub horizon: Millis,
    pub events: Vec<ActivationEvent>,
}

impl Timeline {
    pub fn new(horizon: Millis) -> Self {
        Self {
            horizon,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[ActivationEvent] {
        &self.events
    }

    pub fn events_for(&self, skill: SkillId) -> impl Iterator<Item = &ActivationEvent> {
        self.events.iter().filter(move |e| e.skill == skill)
    }

    pub fn count_of(&self, skill: SkillId) -> usize {
        self.events_for(skill).count()
    }

    pub fn total_hits(&self) -> u64 {
        self.events.iter().map(|e| u64::from(e.hit)).sum()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
