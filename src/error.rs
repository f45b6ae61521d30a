use crate::Point;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while searching, planning or rendering
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The open set ran empty before the goal was reached
    #[error("no path found from {start:?} to {goal:?}")]
    NoPathFound {
        /// Start of the failing segment
        start: Point,
        /// Goal of the failing segment
        goal: Point,
    },

    /// A Waypoint lies outside of the Grid
    #[error("{0:?} is outside of the grid")]
    OutOfBounds(Point),

    /// A Waypoint lies on an obstacle
    #[error("{0:?} is on an obstacle")]
    OnObstacle(Point),

    /// A route needs at least a start and a goal
    #[error("at least 2 waypoints are required, got {0}")]
    TooFewWaypoints(usize),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered image would exceed the maximum image dimensions
    #[cfg(feature = "image")]
    #[error("a {height}x{width} grid with {cell_size} pixel cells is too large to render")]
    ImageTooLarge {
        /// Rows of the grid
        height: usize,
        /// Columns of the grid
        width: usize,
        /// Requested edge length of a cell
        cell_size: u32,
    },

    /// Image encoding error
    #[cfg(feature = "image")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
