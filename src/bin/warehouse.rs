//! Warehouse Binary
//!
//! Plans a route through waypoints on the warehouse floor and writes the result as text and
//! as an image.
//!
//! Points are read from repeated `--point ROW,COL` arguments (start, stops, goal) or
//! prompted for interactively.

use clap::Parser;
use dialoguer::Input;
use std::path::PathBuf;
use std::time::Instant;
use waypoint_pathfinding::{prelude::*, render};

#[derive(Parser, Debug)]
#[command(about = "Plan a route through waypoints on the warehouse floor")]
struct Args {
    /// Route as ROW,COL points: start, stops in order, goal. Prompts when omitted.
    #[arg(long = "point", value_parser = parse_point)]
    points: Vec<Point>,
    /// Number of stops to prompt for between start and goal
    #[arg(long, default_value_t = 3)]
    stops: usize,
    /// Append the goal cell to every segment
    #[arg(long)]
    include_goal: bool,
    /// Text rendering of the result
    #[arg(long, default_value = "output.txt")]
    text: PathBuf,
    /// Image rendering of the result
    #[arg(long, default_value = "result.png")]
    image: PathBuf,
    /// Edge length of a cell in the image, in pixels
    #[arg(long, default_value_t = 10)]
    cell_size: u32,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row: usize = row.trim().parse().map_err(|e| format!("bad row {:?}: {}", row, e))?;
    let col: usize = col.trim().parse().map_err(|e| format!("bad column {:?}: {}", col, e))?;
    Ok((row, col))
}

fn prompt_point(label: &str, grid: &GridMap) -> anyhow::Result<Point> {
    loop {
        let row: usize = Input::new()
            .with_prompt(format!("{} row (0-{})", label, grid.height() - 1))
            .interact_text()?;
        let col: usize = Input::new()
            .with_prompt(format!("{} column (0-{})", label, grid.width() - 1))
            .interact_text()?;
        match grid.validate((row, col)) {
            Ok(()) => return Ok((row, col)),
            Err(e) => println!("{}, please try again", e),
        }
    }
}

fn waypoints(args: &Args, grid: &GridMap) -> anyhow::Result<Vec<Point>> {
    if !args.points.is_empty() {
        return Ok(args.points.clone());
    }
    let start = prompt_point("start", grid)?;
    let goal = prompt_point("goal", grid)?;
    let mut points = vec![start];
    for i in 0..args.stops {
        points.push(prompt_point(&format!("stop {}", i + 1), grid)?);
    }
    points.push(goal);
    Ok(points)
}

/// Plans the route and tags its Waypoints for rendering.
///
/// The planner validates the points before anything is written to the Grid, so the tags are
/// only set on a successful plan.
fn plan_route(grid: &mut GridMap, points: &[Point], config: SearchConfig) -> anyhow::Result<Route> {
    let route = WaypointChainPlanner::new(config).plan(grid, points)?;
    grid.mark_endpoints(points[0], points[points.len() - 1]);
    for &point in &points[1..points.len() - 1] {
        grid.mark_waypoint(point);
    }
    Ok(route)
}

/// The lines printed for `route`
fn report(route: &Route) -> Vec<String> {
    let mut lines = vec![];
    match route.failure() {
        None => lines.push(format!("Route (cost {}):", route.cost())),
        Some(failure) => {
            lines.push(format!(
                "No path found for segment {}: {:?} -> {:?}",
                failure.index, failure.start, failure.goal
            ));
            if !route.path().is_empty() {
                lines.push(format!("Partial route (cost {}):", route.cost()));
            }
        }
    }
    lines.extend(route.path().iter().map(|(row, col)| format!("({}, {})", row, col)));
    lines
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = GridMap::from_layout(&LayoutConfig::WAREHOUSE);
    let points = waypoints(&args, &grid)?;

    let config = if args.include_goal {
        SearchConfig::GOAL_INCLUSIVE
    } else {
        SearchConfig::FAITHFUL
    };
    let timer = Instant::now();
    let route = plan_route(&mut grid, &points, config)?;
    let elapsed = timer.elapsed();

    for line in report(&route) {
        println!("{}", line);
    }

    render::write_text(&grid, &args.text)?;
    render::export_image(&grid, &args.image, args.cell_size)?;
    println!("Elapsed: {:?}", elapsed);
    Ok(())
}
