use super::Cost;

use std::ops::Index;

/// An ordered list of Points together with the cost of walking it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<P> {
    pub(crate) path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// Creates a new Path
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The cost of the route this Path belongs to
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of Points in the Path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path holds no Points
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The Points as a slice
    pub fn as_slice(&self) -> &[P] {
        &self.path
    }

    /// Iterates over the Points in travel order
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }
}

impl<P> Index<usize> for Path<P> {
    type Output = P;
    #[track_caller]
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}
