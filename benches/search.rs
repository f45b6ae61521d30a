use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waypoint_pathfinding::prelude::*;

const WAYPOINTS: [Point; 5] = [(0, 0), (10, 50), (30, 80), (46, 3), (49, 99)];

fn single_segment(c: &mut Criterion) {
    let grid = GridMap::from_layout(&LayoutConfig::WAREHOUSE);
    c.bench_function("warehouse corner to corner", |b| {
        b.iter(|| {
            AStarSearch::new(&grid, black_box((0, 0)), black_box((49, 99)))
                .run()
                .unwrap()
        })
    });
}

fn waypoint_chain(c: &mut Criterion) {
    let grid = GridMap::from_layout(&LayoutConfig::WAREHOUSE);
    let planner = WaypointChainPlanner::default();
    c.bench_function("warehouse waypoint chain", |b| {
        b.iter(|| {
            let mut grid = grid.clone();
            planner.plan(&mut grid, black_box(&WAYPOINTS)).unwrap()
        })
    });
}

criterion_group!(benches, single_segment, waypoint_chain);
criterion_main!(benches);
