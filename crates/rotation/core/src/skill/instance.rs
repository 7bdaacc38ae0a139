//! Runtime state machine of a single skill.
//!
//! ```text
//!            use_skill()                  duration over
//!   Idle ───────────────> Active ───────────────────────> CoolingDown ──> Idle
//!    ^                      │   (cooldown still running)                  ^
//!    │                      └───────────────────────────────────────────-─┘
//!    │                            duration over, cooldown already elapsed
//! ```
//!
//! The cooldown starts counting at use, in parallel with the active window,
//! so `CoolingDown` is only observed when the cooldown outlasts the effect.

use std::sync::Arc;

use crate::stats::Modifier;
use crate::time::Millis;

use super::{SkillDefinition, SkillId, SkillKind};

/// Per-variant runtime payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstanceKind {
    Buff,
    Damage,
    Summon,
    /// Counter that scales the modifier; reset by every use.
    Stacking { stack_count: u32, max_stack: u32 },
}

impl InstanceKind {
    fn for_skill(kind: &SkillKind) -> Self {
        match *kind {
            SkillKind::Buff => InstanceKind::Buff,
            SkillKind::Damage => InstanceKind::Damage,
            SkillKind::Summon => InstanceKind::Summon,
            SkillKind::Stacking { max_stack } => InstanceKind::Stacking {
                stack_count: 0,
                max_stack,
            },
        }
    }
}

/// Coarse lifecycle state, derived from the instance flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstanceState {
    Idle,
    Active,
    CoolingDown,
}

/// Outcome of [`SkillInstance::use_skill`].
#[derive(Clone, Debug, PartialEq)]
pub enum ActivationEffect {
    /// Still on cooldown; nothing changed.
    Unavailable,
    Activated(Activation),
}

impl ActivationEffect {
    pub fn activation(&self) -> Option<&Activation> {
        match self {
            ActivationEffect::Activated(activation) => Some(activation),
            ActivationEffect::Unavailable => None,
        }
    }
}

/// Numbers fixed at the moment of a successful use.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    /// Time until the activation completes.
    pub delay: Millis,
    /// Effect duration after completion, with the remain bonus applied.
    pub duration: Millis,
    /// Cooldown started by this use, with the reduction applied.
    pub cooldown: Millis,
    pub modifier: Modifier,
    pub hit: u32,
    /// Activation generation of the instance after this use.
    pub epoch: u32,
}

/// Read-only view of an instance, handed to rotation policies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceStatus {
    pub id: SkillId,
    pub state: InstanceState,
    pub available: bool,
    pub active: bool,
    /// False for skills with [`Cooldown::Untriggerable`](super::Cooldown::Untriggerable).
    pub triggerable: bool,
    pub remaining_duration: Millis,
    pub remaining_cooldown: Millis,
    /// Present on stacking instances only.
    pub stack_count: Option<u32>,
}

/// Mutable runtime wrapper around one [`SkillDefinition`].
#[derive(Clone, Debug)]
pub struct SkillInstance {
    id: SkillId,
    definition: Arc<SkillDefinition>,
    kind: InstanceKind,
    available: bool,
    active: bool,
    remaining_duration: Millis,
    remaining_cooldown: Millis,
    epoch: u32,
}

impl SkillInstance {
    pub fn new(id: SkillId, definition: Arc<SkillDefinition>) -> Self {
        let kind = InstanceKind::for_skill(&definition.kind);
        Self {
            id,
            definition,
            kind,
            available: true,
            active: false,
            remaining_duration: Millis::ZERO,
            remaining_cooldown: Millis::ZERO,
            epoch: 0,
        }
    }

    /// Attempts to use the skill.
    ///
    /// Returns [`ActivationEffect::Unavailable`] without touching any state
    /// while the cooldown runs. Otherwise the instance becomes active for
    /// `delay + effective_duration`, starts its cooldown, resets stacks and
    /// bumps its epoch. Using an available instance that is still active
    /// refreshes its window.
    pub fn use_skill(&mut self, remain_bonus: f64, reduce_bonus: f64) -> ActivationEffect {
        if !self.available {
            return ActivationEffect::Unavailable;
        }

        let duration = self.definition.effective_duration(remain_bonus);
        let cooldown = self.definition.effective_cooldown(reduce_bonus);

        self.active = true;
        self.remaining_duration = self.definition.delay + duration;
        self.remaining_cooldown = cooldown;
        self.available = cooldown.is_zero();
        self.epoch = self.epoch.wrapping_add(1);

        if let InstanceKind::Stacking { stack_count, .. } = &mut self.kind {
            *stack_count = 0;
        }

        ActivationEffect::Activated(Activation {
            delay: self.definition.delay,
            duration,
            cooldown,
            modifier: self.current_modifier(),
            hit: self.definition.hit,
            epoch: self.epoch,
        })
    }

    /// Advances both timers by `elapsed`.
    pub fn tick(&mut self, elapsed: Millis) {
        if elapsed.is_zero() {
            return;
        }

        if self.active {
            self.remaining_duration = self.remaining_duration.saturating_sub(elapsed);
            if self.remaining_duration.is_zero() {
                self.active = false;
            }
        }

        if !self.available {
            self.remaining_cooldown = self.remaining_cooldown.saturating_sub(elapsed);
            if self.remaining_cooldown.is_zero() {
                self.available = true;
            }
        }
    }

    /// Adds stacks, saturating at the maximum.
    ///
    /// Returns false (and does nothing) for non-stacking instances.
    pub fn add_stack(&mut self, amount: u32) -> bool {
        match &mut self.kind {
            InstanceKind::Stacking {
                stack_count,
                max_stack,
            } => {
                *stack_count = stack_count.saturating_add(amount).min(*max_stack);
                true
            }
            _ => false,
        }
    }

    /// Modifier currently granted: identity unless active, scaled by the
    /// stack count for stacking instances.
    pub fn current_modifier(&self) -> Modifier {
        if !self.active {
            return Modifier::IDENTITY;
        }
        match self.kind {
            InstanceKind::Stacking {
                stack_count,
                max_stack,
            } => self
                .definition
                .modifier
                .scale(f64::from(stack_count.min(max_stack))),
            InstanceKind::Buff | InstanceKind::Damage | InstanceKind::Summon => {
                self.definition.modifier
            }
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_not_active(&self) -> bool {
        !self.active
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// False for skills only reachable through trigger edges.
    pub fn is_triggerable(&self) -> bool {
        self.definition.cooldown.is_triggerable()
    }

    pub fn is_stacking(&self) -> bool {
        matches!(self.kind, InstanceKind::Stacking { .. })
    }

    pub fn state(&self) -> InstanceState {
        if self.active {
            InstanceState::Active
        } else if !self.available {
            InstanceState::CoolingDown
        } else {
            InstanceState::Idle
        }
    }

    pub fn stack_count(&self) -> Option<u32> {
        match self.kind {
            InstanceKind::Stacking { stack_count, .. } => Some(stack_count),
            _ => None,
        }
    }

    /// Time until the next state change, if any timer is running.
    pub fn next_boundary(&self) -> Option<Millis> {
        let duration = self.active.then_some(self.remaining_duration);
        let cooldown = (!self.available).then_some(self.remaining_cooldown);
        match (duration, cooldown) {
            (Some(d), Some(c)) => Some(d.min(c)),
            (d, c) => d.or(c),
        }
        .filter(|ms| !ms.is_zero())
    }

    pub fn status(&self) -> InstanceStatus {
        InstanceStatus {
            id: self.id,
            state: self.state(),
            available: self.available,
            active: self.active,
            triggerable: self.is_triggerable(),
            remaining_duration: self.remaining_duration,
            remaining_cooldown: self.remaining_cooldown,
            stack_count: self.stack_count(),
        }
    }

    pub fn id(&self) -> SkillId {
        self.id
    }

    pub fn definition(&self) -> &SkillDefinition {
        &self.definition
    }

    pub fn kind(&self) -> &InstanceKind {
        &self.kind
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn remaining_duration(&self) -> Millis {
        self.remaining_duration
    }

    pub fn remaining_cooldown(&self) -> Millis {
        self.remaining_cooldown
    }
}
