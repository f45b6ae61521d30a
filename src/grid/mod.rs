//! The occupancy Grid and the search that runs on it.

mod astar;
pub use astar::{AStarSearch, SearchConfig, Step};

mod layout;
pub use layout::LayoutConfig;

use crate::{neighbors::MooreNeighborhood, path::PathSegment, Error, Point, Result};

use std::ops::{Index, IndexMut};

/// The contents of a single cell.
///
/// Only [`Obstacle`](Cell::Obstacle) blocks the search. All other variants are presentation
/// tags and walkable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    /// Walkable and untagged
    #[default]
    Free,
    /// Blocks movement
    Obstacle,
    /// Start of the route
    Start,
    /// End of the route
    Goal,
    /// An intermediate Waypoint
    Waypoint,
    /// Part of the Path of the segment with the given index
    SegmentMarker(usize),
}

/// A `height` x `width` Grid of [`Cell`]s, indexed by `(row, column)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Creates a Grid where every cell is [`Free`](Cell::Free)
    pub fn new(height: usize, width: usize) -> GridMap {
        GridMap {
            height,
            width,
            cells: vec![Cell::Free; height * width],
        }
    }

    /// Creates a Grid with shelves and an assembly line as described by `config`
    pub fn from_layout(config: &LayoutConfig) -> GridMap {
        let mut grid = GridMap::new(config.height, config.width);
        let (rows, cols) = config.shelf_size;
        for &origin in config.shelves.iter() {
            grid.fill_rect(origin, rows, cols, Cell::Obstacle);
        }
        let (rows, cols) = config.assembly_line_size;
        grid.fill_rect(config.assembly_line, rows, cols, Cell::Obstacle);

        debug!(
            "built {}x{} layout with {} obstacle cells",
            grid.height,
            grid.width,
            grid.cells.iter().filter(|c| **c == Cell::Obstacle).count()
        );
        grid
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The Neighborhood matching the size of this Grid
    pub fn neighborhood(&self) -> MooreNeighborhood {
        MooreNeighborhood::new(self.height, self.width)
    }

    /// `true` if `point` lies on the Grid
    pub fn in_bounds(&self, (row, col): Point) -> bool {
        row < self.height && col < self.width
    }

    /// `true` if the cell at `point` blocks movement.
    ///
    /// ## Panics
    /// if `point` is out of bounds. Check [`in_bounds`](GridMap::in_bounds) first.
    #[track_caller]
    pub fn is_obstacle(&self, point: Point) -> bool {
        self[point] == Cell::Obstacle
    }

    /// The cell at `point`, or `None` if it is out of bounds
    pub fn get(&self, point: Point) -> Option<Cell> {
        if self.in_bounds(point) {
            Some(self[point])
        } else {
            None
        }
    }

    /// Checks that `point` is usable as a Waypoint
    pub fn validate(&self, point: Point) -> Result<()> {
        match self.get(point) {
            None => Err(Error::OutOfBounds(point)),
            Some(Cell::Obstacle) => Err(Error::OnObstacle(point)),
            Some(_) => Ok(()),
        }
    }

    /// Sets every cell of the `rows` x `cols` rectangle at `origin` to `cell`.
    ///
    /// Parts of the rectangle outside of the Grid are ignored.
    pub fn fill_rect(&mut self, (row, col): Point, rows: usize, cols: usize, cell: Cell) {
        let row_end = row.saturating_add(rows).min(self.height);
        let col_end = col.saturating_add(cols).min(self.width);
        for r in row..row_end {
            for c in col..col_end {
                self[(r, c)] = cell;
            }
        }
    }

    /// Tags the start and the goal of a route
    #[track_caller]
    pub fn mark_endpoints(&mut self, start: Point, goal: Point) {
        self[start] = Cell::Start;
        self[goal] = Cell::Goal;
    }

    /// Tags an intermediate Waypoint
    #[track_caller]
    pub fn mark_waypoint(&mut self, point: Point) {
        self[point] = Cell::Waypoint;
    }

    /// Tags every cell on the Path of `segment` with the index of the segment
    pub fn mark_segment(&mut self, segment: &PathSegment) {
        let tag = Cell::SegmentMarker(segment.index());
        for &point in segment.path() {
            self[point] = tag;
        }
    }

    /// Iterates over the rows of the Grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on 0
        self.cells.chunks_exact(self.width.max(1))
    }

    #[track_caller]
    fn offset(&self, (row, col): Point) -> usize {
        assert!(
            self.in_bounds((row, col)),
            "{:?} is out of bounds for a {}x{} grid",
            (row, col),
            self.height,
            self.width
        );
        row * self.width + col
    }
}

impl Index<Point> for GridMap {
    type Output = Cell;
    #[track_caller]
    fn index(&self, point: Point) -> &Cell {
        &self.cells[self.offset(point)]
    }
}

impl IndexMut<Point> for GridMap {
    #[track_caller]
    fn index_mut(&mut self, point: Point) -> &mut Cell {
        let offset = self.offset(point);
        &mut self.cells[offset]
    }
}
