//! Pending work ordered by `(time, insertion sequence)`.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::Target;
use crate::skill::SkillId;
use crate::time::Millis;

use super::TriggerSource;

/// Work item waiting for its timestamp.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Pending {
    /// A use finished its cast: record the event and fire outgoing edges.
    Complete {
        skill: SkillId,
        epoch: u32,
        duration: Millis,
        trigger: TriggerSource,
    },

    /// Route a dispatch to a skill or through a combinator node.
    Dispatch { target: Target, trigger: TriggerSource },

    /// One tick of a periodic series, dropped if the source was re-used.
    TickFire {
        source: SkillId,
        epoch: u32,
        target: Target,
    },
}

#[derive(Debug)]
struct Scheduled {
    at: Millis,
    seq: u64,
    pending: Pending,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        (self.at, self.seq) == (other.at, other.seq)
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.at, self.seq).cmp(&(other.at, other.seq))
    }
}

/// Min-heap of pending work. Entries with equal timestamps come out in
/// insertion order, which keeps runs deterministic.
#[derive(Debug, Default)]
pub(crate) struct Queue {
    heap: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl Queue {
    pub(crate) fn push(&mut self, at: Millis, pending: Pending) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled { at, seq, pending }));
    }

    pub(crate) fn next_time(&self) -> Option<Millis> {
        self.heap.peek().map(|Reverse(entry)| entry.at)
    }

    /// Removes the earliest entry if it is due at or before `now`.
    pub(crate) fn pop_due(&mut self, now: Millis) -> Option<(Millis, Pending)> {
        if self.next_time()? > now {
            return None;
        }
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.at, entry.pending))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
