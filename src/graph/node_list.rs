use super::SearchNode;
use crate::{path::Cost, NodeID, Point, PointMap};

/// The arena owning every Node discovered during one segment search.
///
/// Nodes are never removed, so a [`NodeID`] stays valid until the whole list is dropped at the
/// end of the segment. IDs are handed out in discovery order.
#[derive(Clone, Debug, Default)]
pub struct NodeList {
    nodes: Vec<SearchNode>,
    pos_map: PointMap<NodeID>,
}

impl NodeList {
    /// Creates an empty NodeList
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty NodeList with room for `size_hint` Nodes
    pub fn with_capacity(size_hint: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(size_hint),
            pos_map: PointMap::with_capacity(size_hint),
        }
    }

    /// Number of Nodes discovered so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if no Node has been added yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a new Node. There must not be a Node at `pos` already.
    pub fn add_node(&mut self, pos: Point, parent: Option<NodeID>, g: Cost, h: Cost) -> NodeID {
        debug_assert!(!self.pos_map.contains_key(&pos), "duplicate node at {:?}", pos);

        let id = self.nodes.len();
        self.nodes.push(SearchNode::new(pos, parent, g, h));
        self.pos_map.insert(pos, id);
        id
    }

    /// The Node at `pos`, if one was discovered
    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos).copied()
    }

    /// Walks the parent links from `id` back to the root.
    ///
    /// The root itself (the only Node without a parent) is not included. The Points are
    /// returned in travel order, ending with `id`.
    pub fn trace_back(&self, id: NodeID) -> Vec<Point> {
        let mut steps = vec![];
        let mut current = &self[id];
        while let Some(parent) = current.parent {
            steps.push(current.pos);
            current = &self[parent];
        }
        steps.reverse();
        steps
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, index: NodeID) -> &SearchNode {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut SearchNode {
        &mut self.nodes[index]
    }
}

#[test]
fn trace_back() {
    let mut nodes = NodeList::new();
    let root = nodes.add_node((0, 0), None, 0, 40);
    let a = nodes.add_node((1, 1), Some(root), 14, 20);
    let b = nodes.add_node((2, 1), Some(a), 24, 10);
    let _unrelated = nodes.add_node((0, 1), Some(root), 10, 30);

    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes.id_at((2, 1)), Some(b));
    assert_eq!(nodes.id_at((2, 2)), None);
    assert_eq!(nodes[b].f, 34);

    assert_eq!(nodes.trace_back(b), [(1, 1), (2, 1)]);
    assert!(nodes.trace_back(root).is_empty());

    nodes[b].revise(root, 14);
    assert_eq!(nodes[b].f, 24);
    assert_eq!(nodes.trace_back(b), [(2, 1)]);
}
