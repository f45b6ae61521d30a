#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to route through an ordered list of Waypoints on a Grid.
//!
//! ## Introduction
//! Each consecutive pair of Waypoints is searched with its own A* run on an 8-connected
//! occupancy Grid. Orthogonal steps cost `10`, diagonal steps cost `14` and the Heuristic is the
//! Manhattan distance scaled by `10`. The segment Paths are concatenated in Waypoint order.
//!
//! Since the Heuristic ignores diagonal shortcuts, **the resulting Paths are not guaranteed to be
//! the shortest possible**. They are however fully deterministic: ties between equally promising
//! Nodes are always broken in favor of the Node that was discovered first.
//!
//! A segment search stops as soon as the goal is *adjacent* to the Node being expanded. The
//! returned Path therefore starts one step after the segment start and ends one step before the
//! goal. [`SearchConfig::GOAL_INCLUSIVE`](grid::SearchConfig::GOAL_INCLUSIVE) appends the goal
//! cell for callers that want it.
//!
//! ## Examples
//! Finding a single segment:
//! ```
//! use waypoint_pathfinding::prelude::*;
//!
//! let grid = GridMap::new(3, 3);
//!
//! let path = AStarSearch::new(&grid, (0, 0), (2, 2)).run().unwrap();
//!
//! // the goal (2, 2) is reached diagonally from (1, 1)
//! assert_eq!(path.as_slice(), &[(1, 1)]);
//! assert_eq!(path.cost(), 28);
//! ```
//!
//! Chaining Waypoints:
//! ```
//! use waypoint_pathfinding::prelude::*;
//!
//! let mut grid = GridMap::new(5, 5);
//! grid.fill_rect((0, 2), 4, 1, Cell::Obstacle);
//!
//! let planner = WaypointChainPlanner::default();
//! let route = planner.plan(&mut grid, &[(0, 0), (4, 2), (0, 4)]).unwrap();
//!
//! assert!(route.is_complete());
//! assert_eq!(route.segments().len(), 2);
//! assert_eq!(
//!     route.path().len(),
//!     route.segments().iter().map(|s| s.len()).sum::<usize>()
//! );
//! ```
//!
//! A failing segment does not discard the work that came before it:
//! ```
//! use waypoint_pathfinding::prelude::*;
//!
//! let mut grid = GridMap::new(5, 5);
//! // enclose (4, 4)
//! grid.fill_rect((3, 3), 1, 2, Cell::Obstacle);
//! grid.fill_rect((4, 3), 1, 1, Cell::Obstacle);
//!
//! let route = WaypointChainPlanner::default()
//!     .plan(&mut grid, &[(0, 0), (2, 2), (4, 4)])
//!     .unwrap();
//!
//! assert!(!route.is_complete());
//! assert_eq!(route.failed_segment(), Some(1));
//! assert_eq!(route.segments().len(), 1);
//! ```

/// The Type used to reference a Node in the per-segment arena
pub type NodeID = usize;

/// A shorthand for Points on the grid, as `(row, column)`
pub type Point = (usize, usize);

/// A HashMap keyed by Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

/// A HashSet of Points
pub type PointSet = hashbrown::HashSet<Point>;

// the log crate is optional, these forward to it when it is enabled
#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg: tt)+) => { log::trace!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg: tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}
#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg: tt)+) => { log::debug!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg: tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

mod error;
pub use error::{Error, Result};

pub mod neighbors;

pub mod graph;

pub mod grid;

pub mod path;

mod planner;
pub use planner::{Route, SegmentFailure, WaypointChainPlanner};

pub mod render;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        grid::{AStarSearch, Cell, GridMap, LayoutConfig, SearchConfig, Step},
        neighbors::{MooreNeighborhood, Neighborhood},
        path::{Cost, Path, PathSegment},
        Error, Point, Route, WaypointChainPlanner,
    };
}
