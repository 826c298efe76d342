//! Test utilities for coverage planning tests.

#![allow(dead_code)]

use lepa_plan::{
    CoveragePlanner, Obstacle, OccupancyGrid, PlanResult, PlannerConfig, Wall, Waypoint,
};

/// Build a planner with the given resolution and default limits.
pub fn planner(resolution: f64) -> CoveragePlanner {
    CoveragePlanner::new(PlannerConfig {
        resolution,
        ..PlannerConfig::default()
    })
}

/// Plan a wall with obstacles at the given resolution.
pub fn plan(
    width: f64,
    height: f64,
    resolution: f64,
    obstacles: &[Obstacle],
) -> lepa_plan::Result<PlanResult> {
    planner(resolution).plan(&Wall::new(width, height), obstacles)
}

/// Run the pipeline stage by stage, returning the grid and the raw
/// (pre-compaction) path.
pub fn raw_sweep(
    width: f64,
    height: f64,
    resolution: f64,
    obstacles: &[Obstacle],
) -> (OccupancyGrid, Vec<Waypoint>) {
    let config = PlannerConfig {
        resolution,
        ..PlannerConfig::default()
    };
    let grid = lepa_plan::decompose(&Wall::new(width, height), obstacles, &config)
        .expect("decomposition failed");
    let path = lepa_plan::sweep_path(&grid);
    (grid, path)
}

/// Recover the grid cell index a waypoint was emitted from.
pub fn source_cell(wp: &Waypoint, resolution: f64) -> (i64, i64) {
    let x = (wp.x / resolution - 0.5).round() as i64;
    let y = (wp.y / resolution - 0.5).round() as i64;
    (x, y)
}

/// An obstacle's cell-index bounding box, clipped to the grid.
pub fn clipped_index_box(
    obstacle: &Obstacle,
    resolution: f64,
    grid_width: usize,
    grid_height: usize,
) -> (i64, i64, i64, i64) {
    let x0 = ((obstacle.x / resolution).floor() as i64).max(0);
    let y0 = ((obstacle.y / resolution).floor() as i64).max(0);
    let x1 = (((obstacle.x + obstacle.width) / resolution).ceil() as i64).min(grid_width as i64);
    let y1 = (((obstacle.y + obstacle.height) / resolution).ceil() as i64).min(grid_height as i64);
    (x0, y0, x1, y1)
}
