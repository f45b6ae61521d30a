use crate::{path::Cost, NodeID, Point};

/// The search state of a single cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// The cell this Node stands for
    pub pos: Point,
    /// The Node this one was reached from. Only used to rebuild the Path.
    pub parent: Option<NodeID>,
    /// Accumulated cost from the segment start
    pub g: Cost,
    /// Heuristic estimate to the segment goal
    pub h: Cost,
    /// `g + h`
    pub f: Cost,
}

impl SearchNode {
    /// Creates a new Node with `f` derived from `g` and `h`
    pub fn new(pos: Point, parent: Option<NodeID>, g: Cost, h: Cost) -> SearchNode {
        SearchNode {
            pos,
            parent,
            g,
            h,
            f: g + h,
        }
    }

    /// Re-parents the Node onto a cheaper route
    pub fn revise(&mut self, parent: NodeID, g: Cost) {
        self.parent = Some(parent);
        self.g = g;
        self.f = g + self.h;
    }
}
