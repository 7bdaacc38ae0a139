//! Immutable, fully numeric skill definitions.

use strum::{Display, IntoStaticStr};

use crate::stats::Modifier;
use crate::time::Millis;

/// Behavioural family of a skill.
///
/// The family decides which variant of [`InstanceKind`](super::InstanceKind)
/// the skill gets at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    /// Grants its modifier while active.
    Buff,

    /// Produces hits; usually instantaneous.
    Damage,

    /// Stays on the field for its duration; attacks come from tick edges.
    Summon,

    /// Buff whose modifier is multiplied by a stack counter.
    Stacking { max_stack: u32 },
}

impl SkillKind {
    pub const fn tag(&self) -> SkillKindTag {
        match self {
            SkillKind::Buff => SkillKindTag::Buff,
            SkillKind::Damage => SkillKindTag::Damage,
            SkillKind::Summon => SkillKindTag::Summon,
            SkillKind::Stacking { .. } => SkillKindTag::Stacking,
        }
    }
}

/// Payload-free discriminant of [`SkillKind`], recorded on activation events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillKindTag {
    Buff,
    Damage,
    Summon,
    Stacking,
}

/// Base cooldown of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cooldown {
    /// Never picked by the rotation policy; only trigger edges can use it.
    Untriggerable,

    /// Waits this long after use before the skill is available again.
    /// Zero means available immediately.
    Fixed(Millis),
}

impl Cooldown {
    pub const NONE: Self = Cooldown::Fixed(Millis::ZERO);

    /// Interprets a raw cooldown where any negative value (conventionally
    /// `-1`) marks a skill that cannot be triggered on its own.
    pub fn from_raw(raw: f64) -> Option<Self> {
        if raw < 0.0 {
            Some(Cooldown::Untriggerable)
        } else {
            Millis::from_f64(raw).map(Cooldown::Fixed)
        }
    }

    /// Base wait; untriggerable skills never wait.
    pub const fn base(&self) -> Millis {
        match self {
            Cooldown::Untriggerable => Millis::ZERO,
            Cooldown::Fixed(ms) => *ms,
        }
    }

    pub const fn is_triggerable(&self) -> bool {
        matches!(self, Cooldown::Fixed(_))
    }
}

/// Immutable blueprint of one ability after build-dependent formulas have
/// been resolved.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub name: String,
    pub kind: SkillKind,

    /// Hits per activation.
    pub hit: u32,

    /// Cast time between use and completion.
    pub delay: Millis,

    /// Effect duration after completion; zero for instantaneous skills.
    pub duration: Millis,

    pub cooldown: Cooldown,

    /// Per-hit damage coefficient, percent. Only damage-producing skills.
    pub damage: Option<f64>,

    /// Granted while the instance is active.
    pub modifier: Modifier,

    /// How strongly the global remain bonus stretches `duration` (0 = immune).
    pub remain_sensitivity: f64,

    /// How strongly the global cooldown reduction shortens `cooldown` (0 = immune).
    pub reduce_sensitivity: f64,
}

impl SkillDefinition {
    /// Creates a definition with no timing, no hits and an identity modifier.
    pub fn new(name: impl Into<String>, kind: SkillKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hit: 0,
            delay: Millis::ZERO,
            duration: Millis::ZERO,
            cooldown: Cooldown::NONE,
            damage: None,
            modifier: Modifier::IDENTITY,
            remain_sensitivity: 1.0,
            reduce_sensitivity: 1.0,
        }
    }

    pub fn buff(name: impl Into<String>) -> Self {
        Self::new(name, SkillKind::Buff)
    }

    pub fn damage(name: impl Into<String>, coefficient: f64, hit: u32) -> Self {
        let mut def = Self::new(name, SkillKind::Damage);
        def.damage = Some(coefficient);
        def.hit = hit;
        def
    }

    pub fn summon(name: impl Into<String>) -> Self {
        Self::new(name, SkillKind::Summon)
    }

    pub fn stacking(name: impl Into<String>, max_stack: u32) -> Self {
        Self::new(name, SkillKind::Stacking { max_stack })
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Millis) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Millis) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Cooldown) -> Self {
        self.cooldown = cooldown;
        self
    }

    #[must_use]
    pub fn with_hit(mut self, hit: u32) -> Self {
        self.hit = hit;
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    #[must_use]
    pub fn with_sensitivity(mut self, remain: f64, reduce: f64) -> Self {
        self.remain_sensitivity = remain;
        self.reduce_sensitivity = reduce;
        self
    }

    /// `duration * (1 + remain_bonus * remain_sensitivity)`, rounded.
    pub fn effective_duration(&self, remain_bonus: f64) -> Millis {
        self.duration
            .scale(1.0 + remain_bonus * self.remain_sensitivity)
    }

    /// `cooldown * (1 - reduce_bonus * reduce_sensitivity)`, rounded and
    /// floored at zero.
    pub fn effective_cooldown(&self, reduce_bonus: f64) -> Millis {
        self.cooldown
            .base()
            .scale(1.0 - reduce_bonus * self.reduce_sensitivity)
    }
}
