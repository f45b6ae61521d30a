use crate::Point;

/// Options for [`GridMap::from_layout`](super::GridMap::from_layout).
///
/// Describes a warehouse floor: rows of identical shelves plus one assembly line. All
/// rectangles are given by their top-left `(row, column)` and clipped to the Grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Number of rows of the Grid
    pub height: usize,
    /// Number of columns of the Grid
    pub width: usize,
    /// Top-left corners of the shelves
    pub shelves: &'static [Point],
    /// `(rows, columns)` covered by each shelf
    pub shelf_size: (usize, usize),
    /// Top-left corner of the assembly line
    pub assembly_line: Point,
    /// `(rows, columns)` covered by the assembly line
    pub assembly_line_size: (usize, usize),
}

impl LayoutConfig {
    /// The 50 x 100 warehouse floor with six shelves and an assembly line along the bottom.
    ///
    /// ```
    /// use waypoint_pathfinding::grid::{GridMap, LayoutConfig};
    ///
    /// let grid = GridMap::from_layout(&LayoutConfig::WAREHOUSE);
    /// assert_eq!((grid.height(), grid.width()), (50, 100));
    ///
    /// assert!(grid.is_obstacle((5, 10)));
    /// assert!(grid.is_obstacle((8, 74)));
    /// assert!(!grid.is_obstacle((9, 10)));
    /// assert!(grid.is_obstacle((48, 91)));
    /// ```
    pub const WAREHOUSE: LayoutConfig = LayoutConfig {
        height: 50,
        width: 100,
        shelves: &[(5, 10), (12, 10), (19, 10), (26, 10), (33, 10), (40, 10)],
        shelf_size: (4, 65),
        assembly_line: (47, 7),
        assembly_line_size: (2, 85),
    };

    /// An empty floor of the given size
    pub const fn empty(height: usize, width: usize) -> LayoutConfig {
        LayoutConfig {
            height,
            width,
            shelves: &[],
            shelf_size: (0, 0),
            assembly_line: (0, 0),
            assembly_line_size: (0, 0),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig::WAREHOUSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, GridMap};

    #[test]
    fn warehouse_obstacle_count() {
        let grid = GridMap::from_layout(&LayoutConfig::default());
        let obstacles = grid
            .rows()
            .flatten()
            .filter(|c| **c == Cell::Obstacle)
            .count();
        assert_eq!(obstacles, 6 * 4 * 65 + 2 * 85);
    }

    #[test]
    fn aisles_stay_free() {
        let grid = GridMap::from_layout(&LayoutConfig::WAREHOUSE);
        // between the shelves and below the assembly line
        for row in [9, 10, 11, 16, 46, 49] {
            for col in 0..grid.width() {
                assert!(!grid.is_obstacle((row, col)), "{:?}", (row, col));
            }
        }
        // left of the shelves
        assert!(!grid.is_obstacle((5, 9)));
        assert!(!grid.is_obstacle((5, 75)));
    }

    #[test]
    fn clipped_to_small_grid() {
        let config = LayoutConfig {
            height: 6,
            width: 20,
            ..LayoutConfig::WAREHOUSE
        };
        let grid = GridMap::from_layout(&config);
        assert!(grid.is_obstacle((5, 19)));
        assert!(!grid.is_obstacle((4, 19)));
    }

    #[test]
    fn empty_layout() {
        let grid = GridMap::from_layout(&LayoutConfig::empty(3, 3));
        assert_eq!(grid, GridMap::new(3, 3));
    }
}
