//! Trigger graph: how activations of one skill cause or gate others.
//!
//! ```text
//!   chain       source completes      -> dispatch target once
//!   tick        every `interval` while the source's effect lasts -> dispatch target
//!   constraint  before any use of source -> predicate must hold
//! ```
//!
//! Targets are either skills or combinator [`Node`]s (branch, repeat, gate),
//! and nodes may target other nodes. A graph is validated once by
//! [`TriggerGraphBuilder::build`] and is immutable afterwards, so any number
//! of runs can share it.

mod builder;
mod error;
mod node;
mod predicate;
mod validate;

pub use builder::TriggerGraphBuilder;
pub use error::{ConfigurationError, CycleError};
pub use node::{Node, NodeId, Target};
pub use predicate::Predicate;

use crate::skill::{Roster, SkillBook, SkillId};
use crate::time::Millis;

/// One outgoing relation of a skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: SkillId,
    pub kind: EdgeKind,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    /// Fires once when the source's activation completes.
    Chain { target: Target },

    /// Fires every `interval` after completion for as long as the effect lasts.
    Tick { target: Target, interval: Millis },

    /// Must hold before the source may be used.
    Constraint { predicate: Predicate },
}

/// Validated, immutable wiring between the skills of one [`SkillBook`].
#[derive(Clone, Debug, Default)]
pub struct TriggerGraph {
    skill_count: usize,
    edges: Vec<Edge>,
    /// Edge indices per source skill, in insertion order.
    outgoing: Vec<Vec<usize>>,
    nodes: Vec<Node>,
}

impl TriggerGraph {
    pub fn builder(book: &SkillBook) -> TriggerGraphBuilder<'_> {
        TriggerGraphBuilder::new(book)
    }

    /// An edgeless graph for a book of `skill_count` skills.
    pub fn empty(skill_count: usize) -> Self {
        Self {
            skill_count,
            edges: Vec::new(),
            outgoing: vec![Vec::new(); skill_count],
            nodes: Vec::new(),
        }
    }

    pub(crate) fn from_parts(skill_count: usize, edges: Vec<Edge>, nodes: Vec<Node>) -> Self {
        let mut outgoing = vec![Vec::new(); skill_count];
        for (index, edge) in edges.iter().enumerate() {
            if let Some(list) = outgoing.get_mut(edge.source.index()) {
                list.push(index);
            }
        }
        Self {
            skill_count,
            edges,
            outgoing,
            nodes,
        }
    }

    /// Number of skills of the book the graph was built against.
    pub fn skill_count(&self) -> usize {
        self.skill_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Outgoing edges of `source`, in insertion order.
    pub fn outgoing(&self, source: SkillId) -> impl Iterator<Item = &Edge> {
        self.outgoing
            .get(source.index())
            .into_iter()
            .flatten()
            .map(|&index| &self.edges[index])
    }

    pub fn chain_targets(&self, source: SkillId) -> impl Iterator<Item = Target> + '_ {
        self.outgoing(source).filter_map(|edge| match edge.kind {
            EdgeKind::Chain { target } => Some(target),
            _ => None,
        })
    }

    pub fn tick_edges(&self, source: SkillId) -> impl Iterator<Item = (Target, Millis)> + '_ {
        self.outgoing(source).filter_map(|edge| match edge.kind {
            EdgeKind::Tick { target, interval } => Some((target, interval)),
            _ => None,
        })
    }

    pub fn constraints(&self, source: SkillId) -> impl Iterator<Item = &Predicate> {
        self.outgoing(source).filter_map(|edge| match &edge.kind {
            EdgeKind::Constraint { predicate } => Some(predicate),
            _ => None,
        })
    }

    /// True when every constraint on `skill` holds for the current roster.
    pub fn permits(&self, skill: SkillId, roster: &Roster) -> bool {
        self.constraints(skill).all(|p| p.evaluate(roster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SimulationError;
    use crate::skill::SkillDefinition;

    fn book() -> SkillBook {
        let mut book = SkillBook::new();
        book.insert(SkillDefinition::buff("a").with_delay(Millis(600)));
        book.insert(SkillDefinition::damage("b", 100.0, 1));
        book.insert(SkillDefinition::damage("c", 100.0, 1));
        book
    }

    #[test]
    fn edges_are_grouped_by_source() {
        let book = book();
        let (a, b, c) = (SkillId(0), SkillId(1), SkillId(2));
        let mut builder = TriggerGraph::builder(&book);
        builder
            .chain(a, b)
            .tick(a, c, Millis(100))
            .chain(a, c)
            .constraint(b, Predicate::is_active(a));
        let graph = builder.build().unwrap();

        assert_eq!(graph.chain_targets(a).collect::<Vec<_>>(), vec![b.into(), c.into()]);
        assert_eq!(graph.tick_edges(a).collect::<Vec<_>>(), vec![(c.into(), Millis(100))]);
        assert_eq!(graph.constraints(b).count(), 1);
        assert_eq!(graph.outgoing(c).count(), 0);
        assert_eq!(graph.edges().len(), 4);
    }

    #[test]
    fn permits_checks_every_constraint() {
        let book = book();
        let (a, b) = (SkillId(0), SkillId(1));
        let mut builder = TriggerGraph::builder(&book);
        builder
            .constraint(b, Predicate::is_active(a))
            .constraint(b, Predicate::Always);
        let graph = builder.build().unwrap();

        let mut roster = Roster::from_book(&book);
        assert!(!graph.permits(b, &roster));
        assert!(graph.permits(a, &roster));

        roster.get_mut(a).unwrap().use_skill(0.0, 0.0);
        assert!(graph.permits(b, &roster));
    }

    #[test]
    fn zero_delay_self_chain_is_rejected() {
        let book = book();
        let b = SkillId(1);
        let mut builder = TriggerGraph::builder(&book);
        builder.chain(b, b);
        assert!(matches!(
            builder.build(),
            Err(SimulationError::Cycle(CycleError::SelfLoop { ref skill })) if skill == "b"
        ));
    }

    #[test]
    fn delayed_self_chain_is_allowed() {
        let book = book();
        let a = SkillId(0);
        let mut builder = TriggerGraph::builder(&book);
        builder.chain(a, a);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn cycle_through_nodes_is_reported_with_path() {
        let book = book();
        let (b, c) = (SkillId(1), SkillId(2));
        let mut builder = TriggerGraph::builder(&book);
        let gate = builder.gate(Predicate::Always, c);
        builder.chain(b, gate).chain(c, b);

        match builder.build() {
            Err(SimulationError::Cycle(CycleError::ZeroDelayCycle { path })) => {
                assert_eq!(path, vec!["b", "node#0", "c", "b"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn tick_edges_do_not_form_cycles() {
        let book = book();
        let (b, c) = (SkillId(1), SkillId(2));
        let mut builder = TriggerGraph::builder(&book);
        builder.tick(b, c, Millis(50)).chain(c, b);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn invalid_wiring_is_a_configuration_error() {
        let book = book();
        let a = SkillId(0);

        let mut builder = TriggerGraph::builder(&book);
        builder.chain(a, SkillId(9));
        assert!(matches!(
            builder.build(),
            Err(SimulationError::Configuration(ConfigurationError::UnknownSkill { id })) if id == SkillId(9)
        ));

        let mut builder = TriggerGraph::builder(&book);
        builder.tick(a, SkillId(1), Millis::ZERO);
        assert!(matches!(
            builder.build(),
            Err(SimulationError::Configuration(ConfigurationError::ZeroTickInterval { .. }))
        ));

        let mut builder = TriggerGraph::builder(&book);
        let node = builder.repeat(SkillId(1), 0);
        builder.chain(a, node);
        assert!(matches!(
            builder.build(),
            Err(SimulationError::Configuration(ConfigurationError::EmptyRepeat { .. }))
        ));

        let mut builder = TriggerGraph::builder(&book);
        builder.chain(a, NodeId(3));
        assert!(matches!(
            builder.build(),
            Err(SimulationError::Configuration(ConfigurationError::UnknownNode { .. }))
        ));

        let mut builder = TriggerGraph::builder(&book);
        let inner = builder.gate(Predicate::Always, SkillId(1));
        builder.repeat(inner, 2);
        assert!(matches!(
            builder.build(),
            Err(SimulationError::Configuration(ConfigurationError::RepeatNeedsInterval { .. }))
        ));
    }
}
