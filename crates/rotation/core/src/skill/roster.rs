//! Per-run collection of skill instances.

use crate::stats::Modifier;
use crate::time::Millis;

use super::{InstanceStatus, SkillBook, SkillId, SkillInstance};

/// Mutable instances of every skill in a [`SkillBook`], indexed by
/// [`SkillId`].
///
/// A roster is owned by exactly one run; definitions stay shared with the
/// book.
#[derive(Clone, Debug)]
pub struct Roster {
    instances: Vec<SkillInstance>,
}

impl Roster {
    /// One fresh instance per definition.
    pub fn from_book(book: &SkillBook) -> Self {
        let instances = book
            .iter()
            .map(|(id, def)| SkillInstance::new(id, def.clone()))
            .collect();
        Self { instances }
    }

    pub fn get(&self, id: SkillId) -> Option<&SkillInstance> {
        self.instances.get(id.index())
    }

    pub fn get_mut(&mut self, id: SkillId) -> Option<&mut SkillInstance> {
        self.instances.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillInstance> {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Advances every instance by the same span.
    pub fn tick_all(&mut self, elapsed: Millis) {
        for instance in &mut self.instances {
            instance.tick(elapsed);
        }
    }

    /// Sum of every modifier currently granted.
    pub fn snapshot(&self) -> Modifier {
        self.instances
            .iter()
            .map(SkillInstance::current_modifier)
            .sum()
    }

    pub fn statuses(&self) -> Vec<InstanceStatus> {
        self.instances.iter().map(SkillInstance::status).collect()
    }

    /// Shortest time until any instance changes state.
    pub fn next_boundary(&self) -> Option<Millis> {
        self.instances
            .iter()
            .filter_map(SkillInstance::next_boundary)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{Cooldown, SkillDefinition};
    use crate::stats::StatTag;

    fn book() -> SkillBook {
        let mut book = SkillBook::new();
        book.insert(
            SkillDefinition::buff("rage")
                .with_duration(Millis(2_000))
                .with_cooldown(Cooldown::Fixed(Millis(5_000)))
                .with_modifier(Modifier::identity().with(StatTag::DamagePercent, 20.0)),
        );
        book.insert(
            SkillDefinition::buff("focus")
                .with_duration(Millis(4_000))
                .with_modifier(Modifier::identity().with(StatTag::DamagePercent, 10.0)),
        );
        book
    }

    #[test]
    fn snapshot_folds_active_modifiers() {
        let mut roster = Roster::from_book(&book());
        assert!(roster.snapshot().is_identity());

        roster.get_mut(SkillId(0)).unwrap().use_skill(0.0, 0.0);
        roster.get_mut(SkillId(1)).unwrap().use_skill(0.0, 0.0);
        assert_eq!(roster.snapshot().get(StatTag::DamagePercent), 30.0);

        roster.tick_all(Millis(2_000));
        assert_eq!(roster.snapshot().get(StatTag::DamagePercent), 10.0);
    }

    #[test]
    fn next_boundary_is_the_earliest_timer() {
        let mut roster = Roster::from_book(&book());
        assert_eq!(roster.next_boundary(), None);

        roster.get_mut(SkillId(0)).unwrap().use_skill(0.0, 0.0);
        roster.get_mut(SkillId(1)).unwrap().use_skill(0.0, 0.0);
        assert_eq!(roster.next_boundary(), Some(Millis(2_000)));

        roster.tick_all(Millis(2_000));
        assert_eq!(roster.next_boundary(), Some(Millis(2_000)));
        assert_eq!(roster.statuses().len(), 2);
    }
}
