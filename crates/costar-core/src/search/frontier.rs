//! FIFO work queue for pending search nodes.
//!
//! FIFO order is what makes the search breadth-first: nodes are explored in
//! discovery order, so the first time the target is reached it is along a
//! minimum-hop path. A stack here would still find *a* path, just not the
//! shortest one. Membership is tracked by arrival person id so a person
//! already pending is never enqueued twice.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

/// FIFO queue of arena indices with O(1) pending-person membership.
#[derive(Debug, Default)]
pub struct Frontier {
    /// Pending nodes in discovery order: (arena index, arrival person id).
    queue: VecDeque<(usize, String)>,
    /// Person ids currently queued.
    pending: FxHashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the back of the queue.
    pub fn add(&mut self, node: usize, person_id: &str) {
        self.pending.insert(person_id.to_string());
        self.queue.push_back((node, person_id.to_string()));
    }

    /// Pops the node at the front of the queue.
    ///
    /// Returns `None` once the frontier is exhausted; the search loop
    /// consumes that as its "no connection" terminal state.
    pub fn remove(&mut self) -> Option<usize> {
        let (node, person) = self.queue.pop_front()?;
        self.pending.remove(&person);
        Some(node)
    }

    /// Returns true if a node for this person is already pending.
    #[must_use]
    pub fn contains_person(&self, person_id: &str) -> bool {
        self.pending.contains(person_id)
    }

    /// Returns true if no nodes remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of pending nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
