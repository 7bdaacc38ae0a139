//! Control-flow combinators reified as graph nodes.

use std::fmt;

use crate::skill::SkillId;
use crate::time::Millis;

use super::Predicate;

/// Handle of a combinator node inside a [`TriggerGraph`](super::TriggerGraph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Where a dispatch goes: straight to a skill, or through a combinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Skill(SkillId),
    Node(NodeId),
}

impl From<SkillId> for Target {
    fn from(id: SkillId) -> Self {
        Target::Skill(id)
    }
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Target::Node(id)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Skill(id) => id.fmt(f),
            Target::Node(id) => id.fmt(f),
        }
    }
}

/// Combinator node. Nodes never hold state; they only route dispatches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Forwards to exactly one of two targets.
    Branch {
        predicate: Predicate,
        if_true: Target,
        if_false: Target,
    },

    /// Dispatches `target` `count` times, `interval` apart. Without an
    /// explicit interval the target skill's delay is used.
    Repeat {
        target: Target,
        count: u32,
        interval: Option<Millis>,
    },

    /// Forwards only while the predicate holds.
    Gate { predicate: Predicate, target: Target },
}

impl Node {
    /// Every target this node can forward to.
    pub fn targets(&self) -> impl Iterator<Item = Target> + '_ {
        let (first, second) = match self {
            Node::Branch {
                if_true, if_false, ..
            } => (*if_true, Some(*if_false)),
            Node::Repeat { target, .. } | Node::Gate { target, .. } => (*target, None),
        };
        std::iter::once(first).chain(second)
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        match self {
            Node::Branch { predicate, .. } | Node::Gate { predicate, .. } => Some(predicate),
            Node::Repeat { .. } => None,
        }
    }
}
