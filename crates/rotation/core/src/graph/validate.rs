//! Structural and cycle checks run by [`TriggerGraphBuilder::build`](super::TriggerGraphBuilder::build).

use crate::skill::{SkillBook, SkillId};

use super::{ConfigurationError, CycleError, Edge, EdgeKind, Node, NodeId, Predicate, Target};

/// Every id referenced by an edge or node must exist, and a node may only
/// point at nodes created before it (which keeps the node graph acyclic).
pub(super) fn check_references(
    book: &SkillBook,
    edges: &[Edge],
    nodes: &[Node],
) -> Result<(), ConfigurationError> {
    let skill = |id: SkillId| {
        if book.contains(id) {
            Ok(())
        } else {
            Err(ConfigurationError::UnknownSkill { id })
        }
    };
    let predicate = |pred: &Predicate| {
        let mut ids = Vec::new();
        pred.referenced(&mut ids);
        ids.into_iter().try_for_each(skill)
    };
    let target = |target: Target, limit: usize| match target {
        Target::Skill(id) => skill(id),
        Target::Node(id) if id.index() < limit => Ok(()),
        Target::Node(id) => Err(ConfigurationError::UnknownNode { id }),
    };

    for (index, node) in nodes.iter().enumerate() {
        let id = NodeId(index as u32);
        for t in node.targets() {
            target(t, index)?;
        }
        if let Some(pred) = node.predicate() {
            predicate(pred)?;
        }
        if let Node::Repeat {
            target: t,
            count,
            interval,
        } = node
        {
            if *count == 0 {
                return Err(ConfigurationError::EmptyRepeat { node: id });
            }
            if matches!(t, Target::Node(_)) && interval.is_none() {
                return Err(ConfigurationError::RepeatNeedsInterval { node: id });
            }
        }
    }

    for edge in edges {
        skill(edge.source)?;
        match &edge.kind {
            EdgeKind::Chain { target: t } => target(*t, nodes.len())?,
            EdgeKind::Tick {
                target: t,
                interval,
            } => {
                target(*t, nodes.len())?;
                if interval.is_zero() {
                    return Err(ConfigurationError::ZeroTickInterval {
                        skill: book.name(edge.source).to_string(),
                    });
                }
            }
            EdgeKind::Constraint { predicate: p } => predicate(p)?,
        }
    }

    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Rejects dispatch loops that would never leave the current timestamp.
///
/// A skill with zero delay completes the moment it is used, so its chain
/// edges fire immediately; combinator nodes forward immediately too. Any
/// cycle made only of such hops is an error. Tick edges always wait at least
/// one interval and never close a cycle.
pub(super) fn check_cycles(
    book: &SkillBook,
    edges: &[Edge],
    nodes: &[Node],
) -> Result<(), CycleError> {
    let mut chains: Vec<Vec<Target>> = vec![Vec::new(); book.len()];
    for edge in edges {
        if let EdgeKind::Chain { target } = edge.kind {
            chains[edge.source.index()].push(target);
        }
    }

    let instant = |id: SkillId| book.get(id).is_some_and(|def| def.delay.is_zero());

    for (index, targets) in chains.iter().enumerate() {
        let id = SkillId(index as u32);
        if instant(id) && targets.contains(&Target::Skill(id)) {
            return Err(CycleError::SelfLoop {
                skill: book.name(id).to_string(),
            });
        }
    }

    let mut search = CycleSearch {
        book,
        nodes,
        chains: &chains,
        skill_marks: vec![Mark::Unvisited; book.len()],
        node_marks: vec![Mark::Unvisited; nodes.len()],
        path: Vec::new(),
    };

    for index in 0..book.len() {
        search.visit(Target::Skill(SkillId(index as u32)))?;
    }
    Ok(())
}

struct CycleSearch<'g> {
    book: &'g SkillBook,
    nodes: &'g [Node],
    chains: &'g [Vec<Target>],
    skill_marks: Vec<Mark>,
    node_marks: Vec<Mark>,
    path: Vec<Target>,
}

impl CycleSearch<'_> {
    fn mark(&mut self, target: Target) -> &mut Mark {
        match target {
            Target::Skill(id) => &mut self.skill_marks[id.index()],
            Target::Node(id) => &mut self.node_marks[id.index()],
        }
    }

    fn successors(&self, target: Target) -> Vec<Target> {
        match target {
            Target::Skill(id) => {
                let instant = self
                    .book
                    .get(id)
                    .is_some_and(|def| def.delay.is_zero());
                if instant {
                    self.chains[id.index()].clone()
                } else {
                    Vec::new()
                }
            }
            Target::Node(id) => self.nodes[id.index()].targets().collect(),
        }
    }

    fn label(&self, target: Target) -> String {
        match target {
            Target::Skill(id) => self.book.name(id).to_string(),
            Target::Node(id) => id.to_string(),
        }
    }

    fn visit(&mut self, target: Target) -> Result<(), CycleError> {
        match *self.mark(target) {
            Mark::Done => return Ok(()),
            Mark::OnPath => {
                let start = self
                    .path
                    .iter()
                    .position(|t| *t == target)
                    .unwrap_or_default();
                let mut path: Vec<String> =
                    self.path[start..].iter().map(|t| self.label(*t)).collect();
                path.push(self.label(target));
                return Err(CycleError::ZeroDelayCycle { path });
            }
            Mark::Unvisited => {}
        }

        *self.mark(target) = Mark::OnPath;
        self.path.push(target);
        for next in self.successors(target) {
            self.visit(next)?;
        }
        self.path.pop();
        *self.mark(target) = Mark::Done;
        Ok(())
    }
}
