use super::NodeList;
use crate::{path::Cost, NodeID};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Element(Cost, NodeID);

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed for a min-heap: lowest f first, then earliest discovery
        other.0.cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The open set of a segment search.
///
/// Selection returns the Node with the lowest `f`. Ties go to the Node that was discovered
/// first, which is the same Node a linear scan over an insertion-ordered list would find.
/// Lowering the `f` of a Node keeps its place in that order, since the tie-break uses the
/// [`NodeID`] and not the time of the update.
///
/// Updates push a second entry instead of moving the first one. Outdated entries are recognized
/// by their `f` no longer matching the Node and are skipped on [`pop`](OpenList::pop).
#[derive(Clone, Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<Element>,
    len: usize,
}

impl OpenList {
    /// Creates an empty OpenList
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty OpenList with room for `size_hint` entries
    pub fn with_capacity(size_hint: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(size_hint),
            len: 0,
        }
    }

    /// Number of distinct Nodes in the open set
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the open set is exhausted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a newly discovered Node
    pub fn push(&mut self, id: NodeID, f: Cost) {
        self.heap.push(Element(f, id));
        self.len += 1;
    }

    /// Records that the `f` of an already open Node was lowered
    pub fn decrease(&mut self, id: NodeID, f: Cost) {
        self.heap.push(Element(f, id));
    }

    /// Removes and returns the best Node
    pub fn pop(&mut self, nodes: &NodeList) -> Option<NodeID> {
        while let Some(Element(f, id)) = self.heap.pop() {
            if nodes[id].f == f {
                self.len -= 1;
                return Some(id);
            }
        }
        None
    }
}
