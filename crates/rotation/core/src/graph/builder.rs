use tracing::debug;

use crate::engine::SimulationError;
use crate::skill::{SkillBook, SkillId};
use crate::time::Millis;

use super::validate::{check_cycles, check_references};
use super::{Edge, EdgeKind, Node, NodeId, Predicate, Target, TriggerGraph};

/// Collects edges and combinator nodes for a [`SkillBook`], then validates
/// them into a [`TriggerGraph`].
///
/// Edge methods chain; node methods return the new [`NodeId`] so it can be
/// used as a target:
///
/// ```
/// use rotation_core::{Millis, Predicate, SkillBook, SkillDefinition, TriggerGraph};
///
/// let mut book = SkillBook::new();
/// let summon = book.insert(SkillDefinition::summon("totem").with_duration(Millis(3_000)));
/// let strike = book.insert(SkillDefinition::damage("strike", 150.0, 2));
/// let burst = book.insert(SkillDefinition::damage("burst", 400.0, 6));
///
/// let mut builder = TriggerGraph::builder(&book);
/// let pick = builder.branch(Predicate::is_available(burst), burst, strike);
/// builder.tick(summon, pick, Millis(1_000));
/// let graph = builder.build()?;
/// assert_eq!(graph.nodes().len(), 1);
/// # Ok::<(), rotation_core::SimulationError>(())
/// ```
pub struct TriggerGraphBuilder<'b> {
    book: &'b SkillBook,
    edges: Vec<Edge>,
    nodes: Vec<Node>,
}

impl<'b> TriggerGraphBuilder<'b> {
    pub fn new(book: &'b SkillBook) -> Self {
        Self {
            book,
            edges: Vec::new(),
            nodes: Vec::new(),
        }
    }

    fn edge(&mut self, source: SkillId, kind: EdgeKind) -> &mut Self {
        self.edges.push(Edge { source, kind });
        self
    }

    fn node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Dispatch `target` once each time `source` completes.
    pub fn chain(&mut self, source: SkillId, target: impl Into<Target>) -> &mut Self {
        self.edge(
            source,
            EdgeKind::Chain {
                target: target.into(),
            },
        )
    }

    /// Dispatch `target` every `interval` while `source`'s effect lasts.
    ///
    /// Ticks aimed directly at a stacking skill add a stack instead.
    pub fn tick(&mut self, source: SkillId, target: impl Into<Target>, interval: Millis) -> &mut Self {
        self.edge(
            source,
            EdgeKind::Tick {
                target: target.into(),
                interval,
            },
        )
    }

    /// Only allow `source` to be used while `predicate` holds.
    pub fn constraint(&mut self, source: SkillId, predicate: Predicate) -> &mut Self {
        self.edge(source, EdgeKind::Constraint { predicate })
    }

    pub fn branch(
        &mut self,
        predicate: Predicate,
        if_true: impl Into<Target>,
        if_false: impl Into<Target>,
    ) -> NodeId {
        self.node(Node::Branch {
            predicate,
            if_true: if_true.into(),
            if_false: if_false.into(),
        })
    }

    /// Repeat `target` `count` times, spaced by the target skill's delay.
    pub fn repeat(&mut self, target: impl Into<Target>, count: u32) -> NodeId {
        self.node(Node::Repeat {
            target: target.into(),
            count,
            interval: None,
        })
    }

    pub fn repeat_every(&mut self, target: impl Into<Target>, count: u32, interval: Millis) -> NodeId {
        self.node(Node::Repeat {
            target: target.into(),
            count,
            interval: Some(interval),
        })
    }

    pub fn gate(&mut self, predicate: Predicate, target: impl Into<Target>) -> NodeId {
        self.node(Node::Gate {
            predicate,
            target: target.into(),
        })
    }

    /// Validates and freezes the graph.
    ///
    /// ## Errors
    /// - [`ConfigurationError`](super::ConfigurationError) for dangling ids,
    ///   zero tick intervals and empty repeats
    /// - [`CycleError`](super::CycleError) for zero-delay chain loops
    pub fn build(self) -> Result<TriggerGraph, SimulationError> {
        check_references(self.book, &self.edges, &self.nodes)?;
        check_cycles(self.book, &self.edges, &self.nodes)?;

        debug!(
            skills = self.book.len(),
            edges = self.edges.len(),
            nodes = self.nodes.len(),
            "trigger graph built"
        );

        Ok(TriggerGraph::from_parts(
            self.book.len(),
            self.edges,
            self.nodes,
        ))
    }
}
