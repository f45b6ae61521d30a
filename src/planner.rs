use crate::{
    grid::{AStarSearch, GridMap, SearchConfig},
    path::{Cost, PathSegment},
    Error, Point, Result,
};

/// Searches a route through an ordered list of Waypoints, one segment at a time.
///
/// Every consecutive pair of Waypoints gets its own [`AStarSearch`]. Successful segments are
/// tagged on the Grid with [`Cell::SegmentMarker`](crate::grid::Cell::SegmentMarker) and
/// appended to the route. The first segment without a Path ends the planning; the segments
/// found up to that point are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WaypointChainPlanner {
    config: SearchConfig,
}

impl WaypointChainPlanner {
    /// Creates a planner that runs every segment search with `config`
    pub fn new(config: SearchConfig) -> WaypointChainPlanner {
        WaypointChainPlanner { config }
    }

    /// Plans a route visiting `waypoints` in order.
    ///
    /// A segment without a Path is not an error: it is reported through
    /// [`Route::failure`]. Errors are only returned for unusable input, in which case the
    /// Grid is left untouched:
    /// - [`Error::TooFewWaypoints`] for less than 2 Waypoints
    /// - [`Error::OutOfBounds`] or [`Error::OnObstacle`] for the first invalid Waypoint
    pub fn plan(&self, grid: &mut GridMap, waypoints: &[Point]) -> Result<Route> {
        if waypoints.len() < 2 {
            return Err(Error::TooFewWaypoints(waypoints.len()));
        }
        for &point in waypoints {
            grid.validate(point)?;
        }

        let mut route = Route::default();

        for (index, pair) in waypoints.windows(2).enumerate() {
            let (start, goal) = (pair[0], pair[1]);
            trace!("segment {}: {:?} -> {:?}", index, start, goal);

            match AStarSearch::with_config(grid, start, goal, self.config).run() {
                Ok(path) => {
                    let segment = PathSegment::new(index, start, goal, path);
                    grid.mark_segment(&segment);
                    route.path.extend(segment.path().iter().copied());
                    route.segments.push(segment);
                }
                Err(Error::NoPathFound { .. }) => {
                    debug!(
                        "aborting route at segment {} of {}",
                        index,
                        waypoints.len() - 1
                    );
                    route.failure = Some(SegmentFailure { index, start, goal });
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(route)
    }
}

/// The segment that ended a [`Route`] early
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentFailure {
    /// Position of the segment in the route
    pub index: usize,
    /// The Waypoint the segment started at
    pub start: Point,
    /// The Waypoint that could not be reached
    pub goal: Point,
}

impl From<SegmentFailure> for Error {
    fn from(failure: SegmentFailure) -> Error {
        Error::NoPathFound {
            start: failure.start,
            goal: failure.goal,
        }
    }
}

/// The result of [`WaypointChainPlanner::plan`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    path: Vec<Point>,
    segments: Vec<PathSegment>,
    failure: Option<SegmentFailure>,
}

impl Route {
    /// The concatenated Paths of all successful segments
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// The successful segments, in route order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// `true` if every segment found a Path
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// The segment that failed, if any
    pub fn failure(&self) -> Option<SegmentFailure> {
        self.failure
    }

    /// Index of the segment that failed, if any
    pub fn failed_segment(&self) -> Option<usize> {
        self.failure.map(|f| f.index)
    }

    /// Total cost of the successful segments
    pub fn cost(&self) -> Cost {
        self.segments.iter().map(PathSegment::cost).sum()
    }

    /// Converts an incomplete route into the error of its failing segment
    pub fn into_result(self) -> Result<Route> {
        match self.failure {
            Some(failure) => Err(failure.into()),
            None => Ok(self),
        }
    }
}
