use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Closed set of stats a skill can modify.
///
/// Magnitudes are expressed in the stat's natural unit: flat points for
/// `PrimaryStat`, `SecondaryStat` and `AttackFlat`, percent for everything
/// else (20.0 = +20%).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumCount, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatTag {
    PrimaryStat,
    SecondaryStat,
    AttackFlat,
    DamagePercent,
    BossDamagePercent,
    IndependentDamagePercent,
    ArmorIgnore,
    CriticalRate,
    CriticalDamage,

    /// Extends buff durations (feeds `remain_bonus`).
    BuffRemain,

    /// Shortens cooldowns (feeds `reduce_bonus`).
    CooldownReduce,
}

impl StatTag {
    /// Position of this tag inside a [`Modifier`](super::Modifier).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn indices_are_dense() {
        for (expected, tag) in StatTag::iter().enumerate() {
            assert_eq!(tag.index(), expected);
        }
        assert_eq!(StatTag::iter().count(), StatTag::COUNT);
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(StatTag::BossDamagePercent.to_string(), "boss_damage_percent");
        let code: &'static str = StatTag::CooldownReduce.into();
        assert_eq!(code, "cooldown_reduce");
    }
}
