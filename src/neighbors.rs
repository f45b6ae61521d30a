//! The Neighborhood decides which cells are adjacent and what moving between them costs.
//!
//! Only the 8-connected [`MooreNeighborhood`] is provided, but the search is generic over
//! [`Neighborhood`] so that other movement models can be plugged in.

use crate::{path::Cost, Point};

/// Cost of a horizontal or vertical step
pub const ORTHOGONAL_COST: Cost = 10;

/// Cost of a diagonal step, `10 * sqrt(2)` rounded down
pub const DIAGONAL_COST: Cost = 14;

/// Defines how the Grid is connected
pub trait Neighborhood {
    /// Pushes all in-bounds neighbors of `point` onto `target`, in a fixed order.
    ///
    /// The order matters: the search breaks ties by discovery order, so it has to be stable
    /// for the results to be deterministic.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);

    /// Estimated cost of moving from `point` to `goal`
    fn heuristic(&self, point: Point, goal: Point) -> Cost;

    /// Cost of moving from `from` to its neighbor `to`
    fn step_cost(&self, from: Point, to: Point) -> Cost;
}

/// Row and column offsets of the 8 neighbors, in expansion order:
/// the four orthogonal directions first, then the diagonals.
const OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A Neighborhood where every cell is connected to the 8 cells around it.
///
/// ```
/// use waypoint_pathfinding::neighbors::{MooreNeighborhood, Neighborhood};
///
/// let neighborhood = MooreNeighborhood::new(3, 3);
///
/// let mut neighbors = vec![];
/// neighborhood.get_all_neighbors((0, 0), &mut neighbors);
/// assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
///
/// assert_eq!(neighborhood.heuristic((0, 0), (2, 2)), 40);
/// assert_eq!(neighborhood.step_cost((0, 0), (1, 1)), 14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
    height: usize,
    width: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood for a Grid of `height` rows and `width` columns
    pub fn new(height: usize, width: usize) -> MooreNeighborhood {
        MooreNeighborhood { height, width }
    }
}

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, (row, col): Point, target: &mut Vec<Point>) {
        for &(d_row, d_col) in OFFSETS.iter() {
            let neighbor = row
                .checked_add_signed(d_row)
                .zip(col.checked_add_signed(d_col));
            if let Some((r, c)) = neighbor {
                if r < self.height && c < self.width {
                    target.push((r, c));
                }
            }
        }
    }

    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        (point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)) * ORTHOGONAL_COST
    }

    fn step_cost(&self, from: Point, to: Point) -> Cost {
        if from.0 != to.0 && from.1 != to.1 {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eight_in_the_middle() {
        let neighborhood = MooreNeighborhood::new(3, 3);
        let mut neighbors = vec![];
        neighborhood.get_all_neighbors((1, 1), &mut neighbors);
        assert_eq!(
            neighbors,
            [
                (2, 1),
                (0, 1),
                (1, 2),
                (1, 0),
                (2, 2),
                (2, 0),
                (0, 2),
                (0, 0)
            ]
        );
    }

    #[test]
    fn clipped_at_far_corner() {
        let neighborhood = MooreNeighborhood::new(2, 4);
        let mut neighbors = vec![];
        neighborhood.get_all_neighbors((1, 3), &mut neighbors);
        assert_eq!(neighbors, [(0, 3), (1, 2), (0, 2)]);
    }

    #[test]
    fn costs() {
        let neighborhood = MooreNeighborhood::new(10, 10);
        assert_eq!(neighborhood.step_cost((4, 4), (5, 4)), 10);
        assert_eq!(neighborhood.step_cost((4, 4), (4, 3)), 10);
        assert_eq!(neighborhood.step_cost((4, 4), (3, 5)), 14);
        assert_eq!(neighborhood.heuristic((4, 4), (4, 4)), 0);
        assert_eq!(neighborhood.heuristic((1, 7), (4, 2)), 80);
    }
}
