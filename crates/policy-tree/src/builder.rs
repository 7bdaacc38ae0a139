//! Builder utilities for ergonomic policy tree construction.
//!
//! Instead of `Box::new(Sequence::new(vec![...]))`, write
//! `sequence(vec![...])`:
//!
//! ```
//! use policy_tree::builder::{cast, cast_buff, is_active, priority, sequence};
//! use policy_tree::PolicyTree;
//! use rotation_core::SkillId;
//!
//! let (buff, burst, filler) = (SkillId(0), SkillId(1), SkillId(2));
//! let tree = PolicyTree::new(priority(vec![
//!     cast_buff(buff),
//!     sequence(vec![is_active(buff), cast(burst)]),
//!     cast(filler),
//! ]));
//! # let _ = tree;
//! ```

use rotation_core::{Millis, SkillId};

use crate::{BoxedBehavior, Cast, Condition, Not, Optional, Priority, Sequence};

#[inline]
pub fn sequence(children: Vec<BoxedBehavior>) -> BoxedBehavior {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn priority(children: Vec<BoxedBehavior>) -> BoxedBehavior {
    Box::new(Priority::new(children))
}

#[inline]
pub fn not(child: BoxedBehavior) -> BoxedBehavior {
    Box::new(Not::new(child))
}

#[inline]
pub fn optional(child: BoxedBehavior) -> BoxedBehavior {
    Box::new(Optional::new(child))
}

#[inline]
pub fn cast(id: SkillId) -> BoxedBehavior {
    Box::new(Cast(id))
}

/// Casts a buff only while it is not already running.
pub fn cast_buff(id: SkillId) -> BoxedBehavior {
    sequence(vec![is_not_active(id), cast(id)])
}

/// Casts `id` only while `guard` holds.
pub fn cast_when(guard: Condition, id: SkillId) -> BoxedBehavior {
    sequence(vec![Box::new(guard), cast(id)])
}

#[inline]
pub fn condition(condition: Condition) -> BoxedBehavior {
    Box::new(condition)
}

pub fn is_active(id: SkillId) -> BoxedBehavior {
    condition(Condition::IsActive(id))
}

pub fn is_not_active(id: SkillId) -> BoxedBehavior {
    condition(Condition::IsNotActive(id))
}

pub fn is_ready(id: SkillId) -> BoxedBehavior {
    condition(Condition::IsReady(id))
}

pub fn stack_at_least(id: SkillId, stacks: u32) -> BoxedBehavior {
    condition(Condition::StackAtLeast(id, stacks))
}

pub fn after(t: Millis) -> BoxedBehavior {
    condition(Condition::After(t))
}

pub fn before(t: Millis) -> BoxedBehavior {
    condition(Condition::Before(t))
}
