//! Simulation driver.
//!
//! A [`Simulation`] owns the clock, the per-run [`Roster`], the queue of
//! pending work and the recorded [`Timeline`]. It borrows the shared
//! [`SkillBook`] and [`TriggerGraph`], so many simulations can run over the
//! same definitions at once.
//!
//! Each step at time `t`:
//! 1. resolve every queued entry due at `t`, cascading (a completion may
//!    dispatch more work at `t`)
//! 2. if the caster is free, ask the rotation policy for one use
//! 3. resolve entries the policy pick produced at `t`
//! 4. advance to the earliest of: next queued entry, caster free time, next
//!    instance timer boundary, `t + min_step`; capped at the horizon
//!    (or the stop time given to `run_until`)
//!
//! Nothing is resolved at or after the horizon.

mod errors;
mod queue;
mod timeline;

pub use errors::SimulationError;
pub use timeline::{ActivationEvent, Timeline, TriggerSource};

use tracing::{debug, trace};

use crate::config::SimulationConfig;
use crate::env::{PolicyView, RotationPolicy};
use crate::graph::{ConfigurationError, Node, Target, TriggerGraph};
use crate::skill::{ActivationEffect, Roster, SkillBook, SkillId};
use crate::stats::StatTag;
use crate::time::Millis;

use queue::{Pending, Queue};

/// One deterministic run over a shared book and graph.
pub struct Simulation<'a> {
    book: &'a SkillBook,
    graph: &'a TriggerGraph,
    config: SimulationConfig,
    roster: Roster,
    queue: Queue,
    clock: Millis,
    caster_free_at: Millis,
    timeline: Timeline,
}

impl<'a> Simulation<'a> {
    /// Creates a run with a fresh roster at time zero.
    ///
    /// Fails with [`ConfigurationError::GraphMismatch`] when the graph was
    /// built for a different book.
    pub fn new(
        book: &'a SkillBook,
        graph: &'a TriggerGraph,
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        if graph.skill_count() != book.len() {
            return Err(ConfigurationError::GraphMismatch {
                graph: graph.skill_count(),
                book: book.len(),
            }
            .into());
        }

        Ok(Self {
            book,
            graph,
            roster: Roster::from_book(book),
            queue: Queue::default(),
            clock: Millis::ZERO,
            caster_free_at: Millis::ZERO,
            timeline: Timeline::new(config.horizon),
            config,
        })
    }

    pub fn clock(&self) -> Millis {
        self.clock
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }

    pub fn is_finished(&self) -> bool {
        self.clock >= self.config.horizon
    }

    /// Runs to the horizon and returns the recorded timeline.
    pub fn run<P>(mut self, policy: &mut P) -> Result<Timeline, SimulationError>
    where
        P: RotationPolicy + ?Sized,
    {
        debug!(horizon = %self.config.horizon, skills = self.book.len(), "simulation started");
        self.run_until(self.config.horizon, policy)?;
        debug!(events = self.timeline.len(), "simulation finished");
        Ok(self.timeline)
    }

    /// Steps until the clock reaches `until` (or the horizon).
    pub fn run_until<P>(&mut self, until: Millis, policy: &mut P) -> Result<(), SimulationError>
    where
        P: RotationPolicy + ?Sized,
    {
        let until = until.min(self.config.horizon);
        while self.clock < until {
            self.step_until(until, policy)?;
        }
        Ok(())
    }

    /// Resolves everything due now, consults the policy once, then advances
    /// the clock to the next interesting time.
    pub fn step<P>(&mut self, policy: &mut P) -> Result<(), SimulationError>
    where
        P: RotationPolicy + ?Sized,
    {
        self.step_until(self.config.horizon, policy)
    }

    /// [`Simulation::step`] that never moves the clock past `stop`.
    fn step_until<P>(&mut self, stop: Millis, policy: &mut P) -> Result<(), SimulationError>
    where
        P: RotationPolicy + ?Sized,
    {
        if self.is_finished() {
            return Ok(());
        }

        self.resolve_due();
        if self.clock >= self.caster_free_at {
            self.consult(policy)?;
            self.resolve_due();
        }
        self.advance(stop);
        Ok(())
    }

    /// Attempts to use `skill` right now outside the policy, honouring its
    /// constraints. Completions that fall due immediately are resolved.
    ///
    /// Returns whether the use happened.
    pub fn request(&mut self, skill: SkillId) -> Result<bool, SimulationError> {
        if self.roster.get(skill).is_none() {
            return Err(ConfigurationError::UnknownSkill { id: skill }.into());
        }
        let used = self.graph.permits(skill, &self.roster) && self.activate(skill, TriggerSource::Policy);
        self.resolve_due();
        Ok(used)
    }

    /// Global duration extension and cooldown reduction in effect right now.
    fn bonuses(&self) -> (f64, f64) {
        let snapshot = self.roster.snapshot();
        (
            self.config.remain_bonus + snapshot.get(StatTag::BuffRemain) / 100.0,
            self.config.reduce_bonus + snapshot.get(StatTag::CooldownReduce) / 100.0,
        )
    }

    fn schedule(&mut self, at: Millis, pending: Pending) {
        if at < self.config.horizon {
            self.queue.push(at, pending);
        }
    }

    fn consult<P>(&mut self, policy: &mut P) -> Result<(), SimulationError>
    where
        P: RotationPolicy + ?Sized,
    {
        let statuses = self.roster.statuses();
        let mut skipped: Vec<SkillId> = Vec::new();

        for _ in 0..=self.roster.len() {
            let view = PolicyView::new(&statuses, &skipped);
            let Some(id) = policy.next_action(self.clock, &view) else {
                return Ok(());
            };
            if skipped.contains(&id) {
                return Ok(());
            }

            let instance = self
                .roster
                .get(id)
                .ok_or(ConfigurationError::UnknownSkill { id })?;
            let usable = instance.is_triggerable()
                && instance.is_available()
                && self.graph.permits(id, &self.roster);

            if usable && self.activate(id, TriggerSource::Policy) {
                let delay = self.book.get(id).map_or(Millis::ZERO, |def| def.delay);
                self.caster_free_at = self.clock + delay;
                return Ok(());
            }

            trace!(at = %self.clock, skill = self.book.name(id), "policy pick skipped");
            skipped.push(id);
        }
        Ok(())
    }

    /// Uses the instance and queues its completion. Gates are the caller's job.
    fn activate(&mut self, skill: SkillId, trigger: TriggerSource) -> bool {
        let (remain, reduce) = self.bonuses();
        let Some(instance) = self.roster.get_mut(skill) else {
            return false;
        };

        match instance.use_skill(remain, reduce) {
            ActivationEffect::Unavailable => {
                trace!(at = %self.clock, skill = self.book.name(skill), %trigger, "unavailable");
                false
            }
            ActivationEffect::Activated(activation) => {
                debug!(
                    at = %self.clock,
                    skill = self.book.name(skill),
                    %trigger,
                    delay = %activation.delay,
                    duration = %activation.duration,
                    "skill used"
                );
                self.schedule(
                    self.clock + activation.delay,
                    Pending::Complete {
                        skill,
                        epoch: activation.epoch,
                        duration: activation.duration,
                        trigger,
                    },
                );
                true
            }
        }
    }

    fn resolve_due(&mut self) {
        while let Some((at, pending)) = self.queue.pop_due(self.clock) {
            match pending {
                Pending::Complete {
                    skill,
                    epoch,
                    duration,
                    trigger,
                } => self.complete(at, skill, epoch, duration, trigger),
                Pending::Dispatch { target, trigger } => self.dispatch(at, target, trigger),
                Pending::TickFire {
                    source,
                    epoch,
                    target,
                } => {
                    let current = self.roster.get(source).map(|i| i.epoch());
                    if current == Some(epoch) {
                        self.dispatch(at, target, TriggerSource::Tick);
                    } else {
                        trace!(at = %at, source = self.book.name(source), "stale tick dropped");
                    }
                }
            }
        }
    }

    fn complete(
        &mut self,
        at: Millis,
        skill: SkillId,
        epoch: u32,
        duration: Millis,
        trigger: TriggerSource,
    ) {
        let Some(def) = self.book.get(skill) else {
            return;
        };

        self.timeline.events.push(ActivationEvent {
            timestamp: at,
            skill,
            name: def.name.clone(),
            modifier: self.roster.snapshot(),
            hit: def.hit,
            kind: def.kind.tag(),
            trigger,
        });

        let graph = self.graph;
        for target in graph.chain_targets(skill) {
            self.schedule(
                at,
                Pending::Dispatch {
                    target,
                    trigger: TriggerSource::Chain,
                },
            );
        }

        for (target, interval) in graph.tick_edges(skill) {
            let count = duration.as_u64() / interval.as_u64();
            for k in 1..=count {
                let Some(fire_at) = at.checked_add_mul(interval, k) else {
                    break;
                };
                if fire_at >= self.config.horizon {
                    break;
                }
                self.schedule(
                    fire_at,
                    Pending::TickFire {
                        source: skill,
                        epoch,
                        target,
                    },
                );
            }
        }
    }

    fn dispatch(&mut self, at: Millis, target: Target, trigger: TriggerSource) {
        match target {
            Target::Skill(id) => self.dispatch_skill(id, trigger),
            Target::Node(id) => {
                let graph = self.graph;
                let Some(node) = graph.node(id) else {
                    return;
                };
                match node {
                    Node::Branch {
                        predicate,
                        if_true,
                        if_false,
                    } => {
                        let next = if predicate.evaluate(&self.roster) {
                            *if_true
                        } else {
                            *if_false
                        };
                        self.dispatch(at, next, trigger);
                    }
                    Node::Gate { predicate, target } => {
                        if predicate.evaluate(&self.roster) {
                            self.dispatch(at, *target, trigger);
                        } else {
                            trace!(at = %at, node = %id, "gate closed");
                        }
                    }
                    Node::Repeat {
                        target,
                        count,
                        interval,
                    } => {
                        let spacing = interval.unwrap_or_else(|| match target {
                            Target::Skill(skill) => {
                                self.book.get(*skill).map_or(Millis::ZERO, |def| def.delay)
                            }
                            Target::Node(_) => Millis::ZERO,
                        });
                        for k in 0..u64::from(*count) {
                            let Some(fire_at) = at.checked_add_mul(spacing, k) else {
                                trace!(at = %at, node = %id, "repeat offset overflowed");
                                break;
                            };
                            self.schedule(
                                fire_at,
                                Pending::Dispatch {
                                    target: *target,
                                    trigger: TriggerSource::Repeat,
                                },
                            );
                        }
                    }
                }
            }
        }
    }

    fn dispatch_skill(&mut self, id: SkillId, trigger: TriggerSource) {
        if trigger == TriggerSource::Tick {
            if let Some(instance) = self.roster.get_mut(id).filter(|i| i.is_stacking()) {
                instance.add_stack(1);
                trace!(at = %self.clock, skill = self.book.name(id), stacks = ?instance.stack_count(), "stack added");
                return;
            }
        }

        if !self.graph.permits(id, &self.roster) {
            trace!(at = %self.clock, skill = self.book.name(id), %trigger, "constraint failed");
            return;
        }
        self.activate(id, trigger);
    }

    fn advance(&mut self, stop: Millis) {
        let limit = self.config.horizon.min(stop);
        let mut next = self.clock.saturating_add(self.config.step());

        if let Some(at) = self.queue.next_time() {
            next = next.min(at);
        }
        if self.caster_free_at > self.clock {
            next = next.min(self.caster_free_at);
        }
        if let Some(span) = self.roster.next_boundary() {
            next = next.min(self.clock.saturating_add(span));
        }

        let next = next.min(limit).max(self.clock);
        self.roster.tick_all(next.saturating_sub(self.clock));
        self.clock = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Predicate;
    use crate::skill::{Cooldown, SkillDefinition};
    use crate::stats::Modifier;

    fn idle(_: Millis, _: &PolicyView<'_>) -> Option<SkillId> {
        None
    }

    fn config(horizon: u64) -> SimulationConfig {
        SimulationConfig::new().with_horizon(Millis(horizon))
    }

    #[test]
    fn chain_fires_on_completion() {
        let mut book = SkillBook::new();
        let a = book.insert(
            SkillDefinition::damage("a", 100.0, 1)
                .with_delay(Millis(600))
                .with_duration(Millis(200)),
        );
        let b = book.insert(SkillDefinition::damage("b", 50.0, 2));
        let mut builder = TriggerGraph::builder(&book);
        builder.chain(a, b);
        let graph = builder.build().unwrap();

        let mut sim = Simulation::new(&book, &graph, config(10_000)).unwrap();
        assert!(sim.request(a).unwrap());

        sim.run_until(Millis(790), &mut idle).unwrap();
        assert_eq!(sim.clock(), Millis(790));
        assert!(sim.roster().get(a).unwrap().is_active());

        sim.run_until(Millis(800), &mut idle).unwrap();
        assert_eq!(sim.clock(), Millis(800));
        assert!(sim.roster().get(a).unwrap().is_not_active());

        let events = sim.timeline().events();
        assert_eq!(events.len(), 2);
        assert_eq!((events[0].skill, events[0].timestamp), (a, Millis(600)));
        assert_eq!((events[1].skill, events[1].timestamp), (b, Millis(600)));
        assert_eq!(events[1].trigger, TriggerSource::Chain);
        assert_eq!(events[1].hit, 2);
    }

    #[test]
    fn run_until_stops_between_steps() {
        let mut book = SkillBook::new();
        let a = book.insert(
            SkillDefinition::damage("a", 100.0, 1)
                .with_delay(Millis(600))
                .with_duration(Millis(200)),
        );
        let c = book.insert(SkillDefinition::damage("c", 80.0, 1).with_delay(Millis(100)));
        let graph = TriggerGraph::empty(book.len());

        let mut sim = Simulation::new(&book, &graph, config(10_000)).unwrap();
        sim.request(a).unwrap();
        sim.run_until(Millis(795), &mut idle).unwrap();

        assert_eq!(sim.clock(), Millis(795));
        assert!(sim.roster().get(a).unwrap().is_active());

        assert!(sim.request(c).unwrap());
        sim.run_until(Millis(1_000), &mut idle).unwrap();
        let stamps: Vec<_> = sim.timeline().events_for(c).map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![Millis(895)]);
    }

    #[test]
    fn constraint_waits_for_source_to_expire() {
        let mut book = SkillBook::new();
        let a = book.insert(
            SkillDefinition::buff("a")
                .with_duration(Millis(6_000))
                .with_cooldown(Cooldown::Fixed(Millis(30_000))),
        );
        let b = book.insert(SkillDefinition::damage("b", 120.0, 1));
        let mut builder = TriggerGraph::builder(&book);
        builder.constraint(b, Predicate::is_not_active(a));
        let graph = builder.build().unwrap();

        let mut sim = Simulation::new(&book, &graph, config(20_000)).unwrap();
        assert!(sim.request(a).unwrap());
        assert!(!sim.request(b).unwrap());

        sim.run_until(Millis(5_995), &mut idle).unwrap();
        assert!(sim.roster().get(a).unwrap().is_active());
        assert!(!sim.request(b).unwrap());

        sim.run_until(Millis(6_000), &mut idle).unwrap();
        assert!(sim.roster().get(a).unwrap().is_not_active());
        assert!(sim.request(b).unwrap());

        let stamps: Vec<_> = sim.timeline().events_for(b).map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![Millis(6_000)]);
    }

    #[test]
    fn constraint_gates_policy_picks() {
        let mut book = SkillBook::new();
        let aura = book.insert(
            SkillDefinition::buff("aura")
                .with_duration(Millis(5_000))
                .with_cooldown(Cooldown::Fixed(Millis(20_000)))
                .with_modifier(Modifier::identity().with(crate::StatTag::DamagePercent, 30.0)),
        );
        let blast = book.insert(SkillDefinition::damage("blast", 200.0, 1).with_delay(Millis(500)));
        let mut builder = TriggerGraph::builder(&book);
        builder.constraint(blast, Predicate::is_active(aura));
        let graph = builder.build().unwrap();

        let mut policy = |_: Millis, view: &PolicyView<'_>| -> Option<SkillId> {
            [blast, aura].into_iter().find(|id| view.is_ready(*id))
        };
        let timeline = Simulation::new(&book, &graph, config(10_000))
            .unwrap()
            .run(&mut policy)
            .unwrap();

        assert_eq!(timeline.count_of(aura), 1);
        assert_eq!(timeline.count_of(blast), 10);
        assert!(timeline.events_for(blast).all(|e| e.timestamp <= Millis(5_010)));

        // The last cast completes after the aura expired at 5000.
        let damage: Vec<_> = timeline
            .events_for(blast)
            .map(|e| e.modifier.get(crate::StatTag::DamagePercent))
            .collect();
        assert!(damage[..9].iter().all(|d| *d == 30.0));
        assert_eq!(damage[9], 0.0);
    }

    fn summon_book(duration: u64) -> (SkillBook, SkillId, SkillId) {
        let mut book = SkillBook::new();
        let totem = book.insert(SkillDefinition::summon("totem").with_duration(Millis(duration)));
        let zap = book.insert(SkillDefinition::damage("zap", 80.0, 1));
        (book, totem, zap)
    }

    #[test]
    fn tick_count_is_duration_over_interval() {
        for (interval, expected) in [(300, 20), (1_000, 6), (1_500, 4), (7_000, 0)] {
            let (book, totem, zap) = summon_book(6_000);
            let mut builder = TriggerGraph::builder(&book);
            builder.tick(totem, zap, Millis(interval));
            let graph = builder.build().unwrap();

            let mut sim = Simulation::new(&book, &graph, config(60_000)).unwrap();
            sim.request(totem).unwrap();
            let timeline = {
                sim.run_until(Millis(60_000), &mut idle).unwrap();
                sim.into_timeline()
            };
            assert_eq!(timeline.count_of(zap), expected, "interval {interval}");
            assert!(timeline.events_for(zap).all(|e| e.trigger == TriggerSource::Tick));
        }
    }

    #[test]
    fn reuse_rearms_tick_series() {
        let (book, totem, zap) = summon_book(3_000);
        let mut builder = TriggerGraph::builder(&book);
        builder.tick(totem, zap, Millis(1_000));
        let graph = builder.build().unwrap();

        let mut sim = Simulation::new(&book, &graph, config(10_000)).unwrap();
        sim.request(totem).unwrap();
        sim.run_until(Millis(1_500), &mut idle).unwrap();
        sim.request(totem).unwrap();
        sim.run_until(Millis(10_000), &mut idle).unwrap();

        let ticks: Vec<_> = sim.timeline().events_for(zap).map(|e| e.timestamp).collect();
        assert_eq!(ticks, vec![Millis(1_000), Millis(2_500), Millis(3_500), Millis(4_500)]);
    }

    #[test]
    fn ticks_into_stacking_skill_add_stacks() {
        let mut book = SkillBook::new();
        let fury = book.insert(
            SkillDefinition::stacking("fury", 3)
                .with_duration(Millis(10_000))
                .with_modifier(Modifier::identity().with(crate::StatTag::CriticalDamage, 4.0)),
        );
        let totem = book.insert(SkillDefinition::summon("totem").with_duration(Millis(5_000)));
        let mut builder = TriggerGraph::builder(&book);
        builder.tick(totem, fury, Millis(1_000));
        let graph = builder.build().unwrap();

        let mut sim = Simulation::new(&book, &graph, config(10_000)).unwrap();
        sim.request(fury).unwrap();
        sim.request(totem).unwrap();
        sim.run_until(Millis(4_500), &mut idle).unwrap();

        let instance = sim.roster().get(fury).unwrap();
        assert_eq!(instance.stack_count(), Some(3));
        assert_eq!(instance.current_modifier().get(crate::StatTag::CriticalDamage), 12.0);
        assert_eq!(sim.timeline().count_of(fury), 1);
    }

    #[test]
    fn repeat_node_spaces_dispatches_by_delay() {
        let mut book = SkillBook::new();
        let opener = book.insert(SkillDefinition::damage("opener", 100.0, 1));
        let flurry = book.insert(SkillDefinition::damage("flurry", 60.0, 3).with_delay(Millis(200)));
        let mut builder = TriggerGraph::builder(&book);
        let node = builder.repeat(flurry, 3);
        builder.chain(opener, node);
        let graph = builder.build().unwrap();

        let mut sim = Simulation::new(&book, &graph, config(10_000)).unwrap();
        sim.request(opener).unwrap();
        sim.run_until(Millis(2_000), &mut idle).unwrap();

        let stamps: Vec<_> = sim
            .timeline()
            .events_for(flurry)
            .map(|e| (e.timestamp, e.trigger))
            .collect();
        assert_eq!(
            stamps,
            vec![
                (Millis(200), TriggerSource::Repeat),
                (Millis(400), TriggerSource::Repeat),
                (Millis(600), TriggerSource::Repeat),
            ]
        );
        assert_eq!(sim.timeline().total_hits(), 1 + 9);
    }

    #[test]
    fn repeat_drops_offsets_that_overflow() {
        let mut book = SkillBook::new();
        let opener = book.insert(SkillDefinition::damage("opener", 100.0, 1).with_delay(Millis(300)));
        let echo = book.insert(SkillDefinition::damage("echo", 40.0, 1));
        let mut builder = TriggerGraph::builder(&book);
        let node = builder.repeat_every(echo, 3, Millis(u64::MAX / 2 + 1));
        builder.chain(opener, node);
        let graph = builder.build().unwrap();

        let mut sim = Simulation::new(&book, &graph, config(10_000)).unwrap();
        sim.request(opener).unwrap();
        sim.run_until(Millis(10_000), &mut idle).unwrap();

        let stamps: Vec<_> = sim.timeline().events_for(echo).map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![Millis(300)]);
    }

    #[test]
    fn branch_follows_predicate() {
        let mut book = SkillBook::new();
        let stance = book.insert(SkillDefinition::buff("stance").with_duration(Millis(1_000)));
        let strike = book.insert(SkillDefinition::damage("strike", 100.0, 1));
        let heavy = book.insert(SkillDefinition::damage("heavy", 300.0, 1));
        let light = book.insert(SkillDefinition::damage("light", 50.0, 1));
        let mut builder = TriggerGraph::builder(&book);
        let pick = builder.branch(Predicate::is_active(stance), heavy, light);
        builder.chain(strike, pick);
        let graph = builder.build().unwrap();

        let mut sim = Simulation::new(&book, &graph, config(10_000)).unwrap();
        sim.request(strike).unwrap();
        sim.request(stance).unwrap();
        sim.request(strike).unwrap();
        sim.run_until(Millis(2_000), &mut idle).unwrap();
        sim.request(strike).unwrap();

        let timeline = sim.timeline();
        assert_eq!(timeline.count_of(light), 2);
        assert_eq!(timeline.count_of(heavy), 1);
    }

    #[test]
    fn remain_bonus_comes_from_active_modifiers() {
        let mut book = SkillBook::new();
        let extend = book.insert(
            SkillDefinition::buff("extend")
                .with_duration(Millis(10_000))
                .with_modifier(Modifier::identity().with(crate::StatTag::BuffRemain, 50.0)),
        );
        let guard = book.insert(SkillDefinition::buff("guard").with_duration(Millis(1_000)));
        let graph = TriggerGraph::empty(book.len());

        let mut sim = Simulation::new(&book, &graph, config(10_000)).unwrap();
        sim.request(extend).unwrap();
        sim.request(guard).unwrap();
        assert_eq!(sim.roster().get(guard).unwrap().remaining_duration(), Millis(1_500));
    }

    #[test]
    fn nothing_resolves_at_the_horizon() {
        let mut book = SkillBook::new();
        let slow = book.insert(SkillDefinition::damage("slow", 100.0, 1).with_delay(Millis(600)));
        let graph = TriggerGraph::empty(book.len());

        let mut sim = Simulation::new(&book, &graph, config(600)).unwrap();
        sim.request(slow).unwrap();
        sim.run_until(Millis(5_000), &mut idle).unwrap();
        assert!(sim.is_finished());
        assert!(sim.timeline().is_empty());
    }

    #[test]
    fn runs_are_deterministic() {
        let (book, totem, zap) = summon_book(4_000);
        let mut builder = TriggerGraph::builder(&book);
        builder.tick(totem, zap, Millis(700));
        let graph = builder.build().unwrap();

        let run = || {
            let mut policy = |_: Millis, view: &PolicyView<'_>| -> Option<SkillId> {
                [totem, zap].into_iter().find(|id| view.is_ready(*id))
            };
            Simulation::new(&book, &graph, config(20_000))
                .unwrap()
                .run(&mut policy)
                .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn unknown_policy_pick_aborts() {
        let (book, _, _) = summon_book(1_000);
        let graph = TriggerGraph::empty(book.len());
        let mut rogue = |_: Millis, _: &PolicyView<'_>| -> Option<SkillId> { Some(SkillId(42)) };

        let err = Simulation::new(&book, &graph, config(1_000))
            .unwrap()
            .run(&mut rogue)
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::Configuration(ConfigurationError::UnknownSkill { id: SkillId(42) })
        );
    }

    #[test]
    fn graph_must_match_book() {
        let (book, _, _) = summon_book(1_000);
        let graph = TriggerGraph::empty(5);
        assert!(matches!(
            Simulation::new(&book, &graph, config(1_000)),
            Err(SimulationError::Configuration(ConfigurationError::GraphMismatch { graph: 5, book: 2 }))
        ));
    }
}
