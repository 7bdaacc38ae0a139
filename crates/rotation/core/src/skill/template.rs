//! Unresolved skill blueprints.

use tracing::debug;

use crate::env::BuildOracle;
use crate::stats::{Modifier, StatTag};
use crate::time::Millis;

use super::formula::{Formula, evaluate};
use super::{Cooldown, ResolutionError, SkillDefinition, SkillKind};

/// Blueprint whose tier-scaled numbers are still [`Formula`]s.
///
/// ```
/// # use rotation_core::{BuildTable, Formula, Millis, SkillKind, SkillTemplate, StatTag};
/// let build = BuildTable::new().with("vskill", "level", 10.0);
/// let template = SkillTemplate::new("overdrive", SkillKind::Buff)
///     .with_delay(540.0)
///     .with_duration(Formula::linear(30_000.0, 1_000.0, "vskill", "level"))
///     .with_cooldown(120_000.0)
///     .with_stat(StatTag::AttackFlat, Formula::linear(20.0, 2.0, "vskill", "level"));
///
/// let def = template.resolve(&build).unwrap();
/// assert_eq!(def.duration, Millis(40_000));
/// assert_eq!(def.modifier.get(StatTag::AttackFlat), 40.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillTemplate {
    pub name: String,
    pub kind: SkillKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hit: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub delay: Formula,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Formula,
    /// Negative values resolve to [`Cooldown::Untriggerable`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: Formula,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: Option<Formula>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Vec<(StatTag, Formula)>,
    #[cfg_attr(feature = "serde", serde(default = "full_sensitivity"))]
    pub remain_sensitivity: f64,
    #[cfg_attr(feature = "serde", serde(default = "full_sensitivity"))]
    pub reduce_sensitivity: f64,
}

#[cfg(feature = "serde")]
fn full_sensitivity() -> f64 {
    1.0
}

impl SkillTemplate {
    pub fn new(name: impl Into<String>, kind: SkillKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hit: 0,
            delay: Formula::default(),
            duration: Formula::default(),
            cooldown: Formula::default(),
            damage: None,
            stats: Vec::new(),
            remain_sensitivity: 1.0,
            reduce_sensitivity: 1.0,
        }
    }

    #[must_use]
    pub fn with_hit(mut self, hit: u32) -> Self {
        self.hit = hit;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: impl Into<Formula>) -> Self {
        self.delay = delay.into();
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<Formula>) -> Self {
        self.duration = duration.into();
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, cooldown: impl Into<Formula>) -> Self {
        self.cooldown = cooldown.into();
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: impl Into<Formula>) -> Self {
        self.damage = Some(damage.into());
        self
    }

    /// Adds a stat granted while active. Repeated tags add up.
    #[must_use]
    pub fn with_stat(mut self, tag: StatTag, value: impl Into<Formula>) -> Self {
        self.stats.push((tag, value.into()));
        self
    }

    #[must_use]
    pub fn with_sensitivity(mut self, remain: f64, reduce: f64) -> Self {
        self.remain_sensitivity = remain;
        self.reduce_sensitivity = reduce;
        self
    }

    /// Substitutes build values into every formula.
    ///
    /// # Errors
    ///
    /// - `MissingBuildValue` if any formula references an absent build scalar
    /// - `InvalidValue` if delay or duration is negative or non-finite, or
    ///   the cooldown is non-finite
    pub fn resolve<B>(&self, build: &B) -> Result<SkillDefinition, ResolutionError>
    where
        B: BuildOracle + ?Sized,
    {
        let delay = self.resolve_span(&self.delay, build, "delay")?;
        let duration = self.resolve_span(&self.duration, build, "duration")?;

        let raw_cooldown = evaluate(&self.cooldown, build, &self.name)?;
        let cooldown = Cooldown::from_raw(raw_cooldown)
            .ok_or_else(|| self.invalid("cooldown", raw_cooldown))?;

        let damage = self
            .damage
            .as_ref()
            .map(|f| evaluate(f, build, &self.name))
            .transpose()?;

        let modifier = self
            .stats
            .iter()
            .map(|(tag, f)| evaluate(f, build, &self.name).map(|value| (*tag, value)))
            .collect::<Result<Vec<_>, ResolutionError>>()
            .map(Modifier::from_pairs)?;

        debug!(
            skill = %self.name,
            delay = delay.as_u64(),
            duration = duration.as_u64(),
            cooldown = ?cooldown,
            "resolved skill template"
        );

        Ok(SkillDefinition {
            name: self.name.clone(),
            kind: self.kind,
            hit: self.hit,
            delay,
            duration,
            cooldown,
            damage,
            modifier,
            remain_sensitivity: self.remain_sensitivity,
            reduce_sensitivity: self.reduce_sensitivity,
        })
    }

    fn resolve_span<B>(
        &self,
        formula: &Formula,
        build: &B,
        field: &'static str,
    ) -> Result<Millis, ResolutionError>
    where
        B: BuildOracle + ?Sized,
    {
        let value = evaluate(formula, build, &self.name)?;
        Millis::from_f64(value).ok_or_else(|| self.invalid(field, value))
    }

    fn invalid(&self, field: &'static str, value: f64) -> ResolutionError {
        ResolutionError::InvalidValue {
            skill: self.name.clone(),
            field,
            value,
        }
    }
}
