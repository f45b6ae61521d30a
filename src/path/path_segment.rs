use super::{Cost, Path};
use crate::Point;

/// The result of one successful segment search of a route.
///
/// `index` is the position of the segment in the route. It doubles as the tag used to
/// color the segment when rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSegment {
    index: usize,
    start: Point,
    end: Point,
    path: Path<Point>,
}

impl PathSegment {
    /// Creates a new segment from `start` to `end`
    pub fn new(index: usize, start: Point, end: Point, path: Path<Point>) -> PathSegment {
        PathSegment {
            index,
            start,
            end,
            path,
        }
    }

    /// Position of this segment in its route
    pub fn index(&self) -> usize {
        self.index
    }

    /// The Waypoint this segment was searched from
    pub fn start(&self) -> Point {
        self.start
    }

    /// The Waypoint this segment was searched to
    pub fn end(&self) -> Point {
        self.end
    }

    /// Cost of walking from `start` to `end`
    pub fn cost(&self) -> Cost {
        self.path.cost()
    }

    /// Number of Points in the segment Path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the segment Path holds no Points
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The segment Path
    pub fn path(&self) -> &Path<Point> {
        &self.path
    }
}
