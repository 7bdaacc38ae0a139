//! Adapters from behavior nodes to [`RotationPolicy`].

use rotation_core::{Millis, PolicyView, RotationPolicy, SkillId};
use tracing::trace;

use crate::{Behavior, BoxedBehavior, PolicyContext};

/// Rotation policy backed by a behavior tree.
///
/// Each consultation ticks the root once; the pick recorded by the winning
/// branch is returned. A failing root means "do nothing this step".
pub struct PolicyTree {
    root: BoxedBehavior,
}

impl PolicyTree {
    pub fn new(root: BoxedBehavior) -> Self {
        Self { root }
    }

    /// Evaluates the tree without going through the driver.
    pub fn decide(&self, now: Millis, view: PolicyView<'_>) -> Option<SkillId> {
        let mut ctx = PolicyContext::new(now, view);
        if self.root.tick(&mut ctx).is_success() {
            ctx.into_choice()
        } else {
            None
        }
    }
}

impl RotationPolicy for PolicyTree {
    fn next_action(&mut self, now: Millis, view: &PolicyView<'_>) -> Option<SkillId> {
        let choice = self.decide(now, *view);
        trace!(at = %now, ?choice, "policy tree decided");
        choice
    }
}

/// Fixed priority list: the first ready skill wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriorityPolicy {
    order: Vec<SkillId>,
}

impl PriorityPolicy {
    pub fn new(order: impl IntoIterator<Item = SkillId>) -> Self {
        Self {
            order: order.into_iter().collect(),
        }
    }

    pub fn order(&self) -> &[SkillId] {
        &self.order
    }
}

impl RotationPolicy for PriorityPolicy {
    fn next_action(&mut self, _now: Millis, view: &PolicyView<'_>) -> Option<SkillId> {
        self.order.iter().copied().find(|id| view.is_ready(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{after, cast, cast_buff, cast_when, priority, sequence};
    use crate::Condition;
    use rotation_core::{
        Cooldown, Modifier, Predicate, Simulation, SimulationConfig, SkillBook, SkillDefinition,
        StatTag, TriggerGraph,
    };

    struct Kit {
        book: SkillBook,
        buff: SkillId,
        burst: SkillId,
        filler: SkillId,
    }

    fn kit() -> Kit {
        let mut book = SkillBook::new();
        let buff = book.insert(
            SkillDefinition::buff("war cry")
                .with_delay(Millis(300))
                .with_duration(Millis(10_000))
                .with_cooldown(Cooldown::Fixed(Millis(30_000)))
                .with_modifier(Modifier::identity().with(StatTag::DamagePercent, 25.0)),
        );
        let burst = book.insert(
            SkillDefinition::damage("meteor", 900.0, 8)
                .with_delay(Millis(800))
                .with_cooldown(Cooldown::Fixed(Millis(15_000))),
        );
        let filler = book.insert(SkillDefinition::damage("slash", 120.0, 4).with_delay(Millis(600)));
        Kit {
            book,
            buff,
            burst,
            filler,
        }
    }

    #[test]
    fn tree_casts_buff_before_burst() {
        let Kit {
            book,
            buff,
            burst,
            filler,
        } = kit();
        let graph = TriggerGraph::empty(book.len());
        let mut tree = PolicyTree::new(priority(vec![
            cast_buff(buff),
            cast_when(Condition::IsActive(buff), burst),
            cast(filler),
        ]));

        let timeline = Simulation::new(&book, &graph, SimulationConfig::new().with_horizon(Millis(20_000)))
            .unwrap()
            .run(&mut tree)
            .unwrap();

        let first: Vec<_> = timeline.events().iter().take(2).map(|e| e.skill).collect();
        assert_eq!(first, vec![buff, burst]);
        assert_eq!(timeline.count_of(buff), 1);
        assert_eq!(timeline.count_of(burst), 1);
        assert!(timeline.count_of(filler) > 10);
    }

    #[test]
    fn driver_refusal_falls_through_the_priority_list() {
        let Kit {
            book,
            buff,
            burst,
            filler,
        } = kit();
        let mut builder = TriggerGraph::builder(&book);
        builder.constraint(burst, Predicate::is_active(buff));
        let graph = builder.build().unwrap();

        // Burst is listed first but gated on the buff; the driver refuses it
        // and the policy moves on.
        let mut policy = PriorityPolicy::new([burst, filler, buff]);
        let timeline = Simulation::new(&book, &graph, SimulationConfig::new().with_horizon(Millis(5_000)))
            .unwrap()
            .run(&mut policy)
            .unwrap();

        assert_eq!(timeline.count_of(burst), 0);
        assert_eq!(timeline.count_of(buff), 0);
        assert!(timeline.count_of(filler) > 0);
    }

    #[test]
    fn time_windows_hold_back_casts() {
        let Kit { book, burst, .. } = kit();
        let graph = TriggerGraph::empty(book.len());
        let mut tree = PolicyTree::new(sequence(vec![after(Millis(2_000)), cast(burst)]));

        let timeline = Simulation::new(&book, &graph, SimulationConfig::new().with_horizon(Millis(5_000)))
            .unwrap()
            .run(&mut tree)
            .unwrap();

        let stamps: Vec<_> = timeline.events_for(burst).map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![Millis(2_800)]);
    }
}
