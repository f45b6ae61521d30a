use super::GridMap;
use crate::{
    graph::{NodeList, OpenList},
    neighbors::{MooreNeighborhood, Neighborhood},
    path::Path,
    Error, NodeID, Point, PointSet, Result,
};

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

/// Options for an [`AStarSearch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Append the goal cell to the returned Path.
    ///
    /// The search ends when the goal is adjacent to the Node being expanded, so by default the
    /// Path stops one step short of the goal. With this option the goal is added as the last
    /// Point whenever start and goal differ.
    ///
    /// Default: `false`
    pub include_goal: bool,
    /// Number of Nodes to preallocate room for.
    ///
    /// Default: `64`
    pub size_hint: usize,
}

impl SearchConfig {
    /// Reports Paths without the goal cell. This is the default.
    pub const FAITHFUL: SearchConfig = SearchConfig {
        include_goal: false,
        size_hint: 64,
    };
    /// Reports Paths that end on the goal cell.
    pub const GOAL_INCLUSIVE: SearchConfig = SearchConfig {
        include_goal: true,
        size_hint: 64,
    };
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::FAITHFUL
    }
}

/// The outcome of a single [`AStarSearch::step`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The Node at this Point was closed and its neighbors were added to the open set
    Expanded(Point),
    /// The goal was reached
    Found(Path<Point>),
    /// The open set is empty, or the search already finished
    Exhausted,
}

/// A* search between one start and one goal.
///
/// All search state lives in the search itself and is dropped with it. The Grid is only read.
///
/// ```
/// use waypoint_pathfinding::prelude::*;
///
/// let mut grid = GridMap::new(5, 5);
/// grid.fill_rect((0, 2), 4, 1, Cell::Obstacle);
///
/// let mut search = AStarSearch::new(&grid, (0, 0), (0, 4));
/// let path = search.run().unwrap();
///
/// // the only way around the wall
/// assert!(path.iter().any(|&p| p == (4, 2)));
/// assert!(search.expanded() > 0);
/// ```
#[derive(Debug)]
pub struct AStarSearch<'a, N = MooreNeighborhood> {
    grid: &'a GridMap,
    neighborhood: N,
    start: Point,
    goal: Point,
    config: SearchConfig,
    nodes: NodeList,
    open: OpenList,
    closed: PointSet,
    all_neighbors: Vec<Point>,
    finished: bool,
}

impl<'a> AStarSearch<'a, MooreNeighborhood> {
    /// Prepares a search from `start` to `goal` with the default [`SearchConfig`].
    ///
    /// Both Points have to be on the Grid. `start` must not be an obstacle.
    pub fn new(grid: &'a GridMap, start: Point, goal: Point) -> Self {
        Self::with_config(grid, start, goal, SearchConfig::default())
    }

    /// Prepares a search from `start` to `goal`
    pub fn with_config(grid: &'a GridMap, start: Point, goal: Point, config: SearchConfig) -> Self {
        Self::with_neighborhood(grid, grid.neighborhood(), start, goal, config)
    }
}

impl<'a, N: Neighborhood> AStarSearch<'a, N> {
    /// Prepares a search that uses a custom Neighborhood
    pub fn with_neighborhood(
        grid: &'a GridMap,
        neighborhood: N,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Self {
        let mut nodes = NodeList::with_capacity(config.size_hint);
        let mut open = OpenList::with_capacity(config.size_hint);

        let root = nodes.add_node(start, None, 0, neighborhood.heuristic(start, goal));
        open.push(root, nodes[root].f);

        trace!("search setup: start={:?} goal={:?}", start, goal);

        AStarSearch {
            grid,
            neighborhood,
            start,
            goal,
            config,
            nodes,
            open,
            closed: PointSet::with_capacity(config.size_hint),
            all_neighbors: Vec::with_capacity(8),
            finished: false,
        }
    }

    /// Where the search started
    pub fn start(&self) -> Point {
        self.start
    }

    /// Where the search is headed
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Number of Nodes closed so far
    pub fn expanded(&self) -> usize {
        self.closed.len()
    }

    /// `true` if the Node at `point` has been closed
    pub fn is_closed(&self, point: Point) -> bool {
        self.closed.contains(&point)
    }

    /// Number of Nodes waiting in the open set
    pub fn open_len(&self) -> usize {
        if self.finished {
            0
        } else {
            self.open.len()
        }
    }

    /// Selects the most promising open Node, closes it and expands its neighbors.
    pub fn step(&mut self) -> Step {
        if self.finished {
            return Step::Exhausted;
        }
        let current = match self.open.pop(&self.nodes) {
            Some(id) => id,
            None => {
                self.finished = true;
                return Step::Exhausted;
            }
        };
        let pos = self.nodes[current].pos;
        let g = self.nodes[current].g;
        self.closed.insert(pos);

        if pos == self.goal {
            return self.finish(current, false);
        }

        self.all_neighbors.clear();
        self.neighborhood
            .get_all_neighbors(pos, &mut self.all_neighbors);

        for i in 0..self.all_neighbors.len() {
            let neighbor = self.all_neighbors[i];
            if !self.grid.in_bounds(neighbor) {
                continue;
            }
            if neighbor == self.goal {
                return self.finish(current, true);
            }
            if self.closed.contains(&neighbor) || self.grid.is_obstacle(neighbor) {
                continue;
            }

            let other_g = g + self.neighborhood.step_cost(pos, neighbor);
            match self.nodes.id_at(neighbor) {
                Some(other) => {
                    let node = &mut self.nodes[other];
                    if other_g + node.h < node.f {
                        node.revise(current, other_g);
                        let f = node.f;
                        self.open.decrease(other, f);
                    }
                }
                None => {
                    let h = self.neighborhood.heuristic(neighbor, self.goal);
                    let other = self.nodes.add_node(neighbor, Some(current), other_g, h);
                    self.open.push(other, self.nodes[other].f);
                }
            }
        }

        Step::Expanded(pos)
    }

    /// Runs the search to completion.
    ///
    /// Returns [`Error::NoPathFound`] if the open set runs empty first.
    pub fn run(&mut self) -> Result<Path<Point>> {
        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        loop {
            match self.step() {
                Step::Expanded(_) => {}
                Step::Found(path) => {
                    re_trace!("find segment", timer);
                    debug!(
                        "found path {:?} -> {:?}: {} steps, cost {}, {} nodes expanded",
                        self.start,
                        self.goal,
                        path.len(),
                        path.cost(),
                        self.expanded()
                    );
                    return Ok(path);
                }
                Step::Exhausted => {
                    re_trace!("exhaust segment", timer);
                    debug!(
                        "no path {:?} -> {:?} after expanding {} nodes",
                        self.start,
                        self.goal,
                        self.expanded()
                    );
                    return Err(Error::NoPathFound {
                        start: self.start,
                        goal: self.goal,
                    });
                }
            }
        }
    }

    /// Builds the Path ending at `terminal`. If the goal was only seen as a neighbor of
    /// `terminal`, the last step onto the goal is added to the cost.
    fn finish(&mut self, terminal: NodeID, goal_is_neighbor: bool) -> Step {
        self.finished = true;

        let node = &self.nodes[terminal];
        let mut steps = self.nodes.trace_back(terminal);
        let mut cost = node.g;
        if goal_is_neighbor {
            cost += self.neighborhood.step_cost(node.pos, self.goal);
            if self.config.include_goal {
                steps.push(self.goal);
            }
        }

        Step::Found(Path::new(steps, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::path::Cost;

    use nanorand::{Rng, WyRand};

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn random_grid(rng: &mut WyRand, height: usize, width: usize) -> GridMap {
        let mut grid = GridMap::new(height, width);
        for row in 0..height {
            for col in 0..width {
                if rng.generate_range(0..100u32) < 30 {
                    grid[(row, col)] = Cell::Obstacle;
                }
            }
        }
        grid
    }

    fn random_free(rng: &mut WyRand, grid: &GridMap) -> Point {
        loop {
            let p = (
                rng.generate_range(0..grid.height()),
                rng.generate_range(0..grid.width()),
            );
            if !grid.is_obstacle(p) {
                return p;
            }
        }
    }

    /// The whole route: start, the reported Path and the goal (unless the Path already ends there)
    fn full_route(start: Point, goal: Point, path: &Path<Point>) -> Vec<Point> {
        let mut route = vec![start];
        route.extend(path.iter().copied());
        if route.last() != Some(&goal) {
            route.push(goal);
        }
        route
    }

    fn chebyshev(a: Point, b: Point) -> usize {
        a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
    }

    #[test]
    fn diagonal_on_open_grid() {
        init_log();
        let grid = GridMap::new(3, 3);

        let path = AStarSearch::new(&grid, (0, 0), (2, 2)).run().unwrap();

        assert_eq!(path.as_slice(), &[(1, 1)]);
        assert_eq!(path.cost(), 28);
    }

    #[test]
    fn diagonal_on_open_grid_with_goal() {
        let grid = GridMap::new(3, 3);

        let path = AStarSearch::with_config(&grid, (0, 0), (2, 2), SearchConfig::GOAL_INCLUSIVE)
            .run()
            .unwrap();

        assert_eq!(path.as_slice(), &[(1, 1), (2, 2)]);
        assert_eq!(path.cost(), 28);
    }

    #[test]
    fn start_is_goal() {
        let grid = GridMap::new(3, 3);
        for config in [SearchConfig::FAITHFUL, SearchConfig::GOAL_INCLUSIVE] {
            let mut search = AStarSearch::with_config(&grid, (1, 2), (1, 2), config);
            let path = search.run().unwrap();
            assert!(path.is_empty());
            assert_eq!(path.cost(), 0);
            assert_eq!(search.expanded(), 1);
        }
    }

    #[test]
    fn goal_next_to_start() {
        let grid = GridMap::new(3, 3);

        let path = AStarSearch::new(&grid, (0, 0), (0, 1)).run().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), 10);

        let path = AStarSearch::with_config(&grid, (0, 0), (0, 1), SearchConfig::GOAL_INCLUSIVE)
            .run()
            .unwrap();
        assert_eq!(path.as_slice(), &[(0, 1)]);
    }

    #[test]
    fn enclosed_goal() {
        init_log();
        let mut grid = GridMap::new(5, 5);
        grid.fill_rect((1, 1), 3, 3, Cell::Obstacle);
        grid[(2, 2)] = Cell::Free;

        let mut search = AStarSearch::new(&grid, (0, 0), (2, 2));
        let result = search.run();

        assert!(matches!(
            result,
            Err(Error::NoPathFound {
                start: (0, 0),
                goal: (2, 2)
            })
        ));
        // every free cell outside of the ring was visited
        assert_eq!(search.expanded(), 16);
        assert_eq!(search.open_len(), 0);
        assert_eq!(search.step(), Step::Exhausted);
    }

    #[test]
    fn no_cell_is_expanded_twice() {
        let mut rng = WyRand::new_seed(7);
        for _ in 0..20 {
            let grid = random_grid(&mut rng, 15, 25);
            let start = random_free(&mut rng, &grid);
            let goal = random_free(&mut rng, &grid);

            let mut search = AStarSearch::new(&grid, start, goal);
            let mut expanded = vec![];
            loop {
                match search.step() {
                    Step::Expanded(p) => {
                        assert!(search.is_closed(p));
                        expanded.push(p);
                    }
                    Step::Found(_) | Step::Exhausted => break,
                }
            }
            let unique: PointSet = expanded.iter().copied().collect();
            assert_eq!(unique.len(), expanded.len());
            assert!(expanded.iter().all(|&p| !grid.is_obstacle(p)));
        }
    }

    #[test]
    fn paths_are_connected_and_priced() {
        init_log();
        let mut rng = WyRand::new_seed(42);
        let neighborhood = MooreNeighborhood::new(20, 30);
        let mut found = 0;
        for _ in 0..50 {
            let grid = random_grid(&mut rng, 20, 30);
            let start = random_free(&mut rng, &grid);
            let goal = random_free(&mut rng, &grid);

            let path = match AStarSearch::new(&grid, start, goal).run() {
                Ok(path) => path,
                Err(Error::NoPathFound { .. }) => continue,
                Err(e) => panic!("unexpected error {}", e),
            };
            found += 1;

            assert!(!path.iter().any(|&p| p == start));
            assert!(!path.iter().any(|&p| p == goal));
            assert!(path.iter().all(|&p| !grid.is_obstacle(p)));

            if start == goal {
                assert!(path.is_empty());
                continue;
            }
            let route = full_route(start, goal, &path);
            let mut g: Cost = 0;
            for pair in route.windows(2) {
                assert_eq!(chebyshev(pair[0], pair[1]), 1, "{:?}", route);
                let next = g + neighborhood.step_cost(pair[0], pair[1]);
                assert!(next > g);
                g = next;
            }
            assert_eq!(g, path.cost());
        }
        assert!(found > 10);
    }

    #[test]
    fn deterministic() {
        let mut rng = WyRand::new_seed(1234);
        for _ in 0..20 {
            let grid = random_grid(&mut rng, 20, 20);
            let start = random_free(&mut rng, &grid);
            let goal = random_free(&mut rng, &grid);

            let first = AStarSearch::new(&grid, start, goal).run().ok();
            let second = AStarSearch::new(&grid, start, goal).run().ok();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn ties_go_to_first_discovered() {
        // (1, 0) and (0, 1) are equally good, (1, 0) is discovered first
        let grid = GridMap::new(2, 2);
        let mut search = AStarSearch::new(&grid, (0, 0), (1, 1));
        // (1, 1) is a neighbor of the start
        assert_eq!(search.step(), Step::Found(Path::new(vec![], 14)));

        let mut grid = GridMap::new(3, 3);
        grid[(1, 1)] = Cell::Obstacle;
        let mut search = AStarSearch::new(&grid, (0, 0), (2, 2));
        assert_eq!(search.step(), Step::Expanded((0, 0)));
        assert_eq!(search.step(), Step::Expanded((1, 0)));
        assert_eq!(search.run().unwrap().as_slice(), &[(1, 0), (2, 1)]);
    }
}
