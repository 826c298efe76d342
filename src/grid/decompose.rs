//! Grid decomposition: continuous geometry into an occupancy grid.
//!
//! This is the validation gate for the whole pipeline: every input check
//! happens here, before the grid is allocated, so a failed plan never
//! does partial work.

use log::debug;

use crate::config::PlannerConfig;
use crate::core::{GridCoord, Obstacle, Wall};
use crate::error::{PlanError, Result};
use crate::grid::{CellState, OccupancyGrid};

/// Build the occupancy grid for a wall and its obstacles.
///
/// The grid spans `ceil(width / resolution)` columns by
/// `ceil(height / resolution)` rows, so a wall smaller than one cell in
/// either direction still yields a 1-column or 1-row grid. Each obstacle
/// is rasterized into the cell box `[floor(x/res), ceil((x+w)/res))` by
/// `[floor(y/res), ceil((y+h)/res))`, clipped to the grid; a cell is
/// blocked iff at least one obstacle's box covers it.
///
/// # Errors
///
/// - [`PlanError::InvalidDimension`] for non-positive wall dimensions or
///   resolution
/// - [`PlanError::InvalidObstacle`] for an obstacle with non-positive
///   extents (obstacles merely outside the wall are fine: they clip away)
/// - [`PlanError::GridTooLarge`] when the cell count would exceed
///   `config.max_cells`
pub fn decompose(wall: &Wall, obstacles: &[Obstacle], config: &PlannerConfig) -> Result<OccupancyGrid> {
    let resolution = config.resolution;
    validate(wall, obstacles, resolution)?;

    // Saturating float-to-int casts make oversized inputs land in the
    // cell budget check instead of wrapping.
    let width = (wall.width / resolution).ceil() as usize;
    let height = (wall.height / resolution).ceil() as usize;

    let cells = width as u128 * height as u128;
    if cells > config.max_cells as u128 {
        return Err(PlanError::GridTooLarge {
            cells,
            max_cells: config.max_cells,
        });
    }

    let mut grid = OccupancyGrid::new(width, height, resolution);
    for obstacle in obstacles {
        rasterize(&mut grid, obstacle);
    }

    let counts = grid.counts();
    debug!(
        "decomposed {:.2}x{:.2}m wall into {}x{} grid ({} free, {} blocked)",
        wall.width,
        wall.height,
        grid.width(),
        grid.height(),
        counts.free,
        counts.blocked
    );

    Ok(grid)
}

/// Validate the planning inputs. Runs before any allocation.
fn validate(wall: &Wall, obstacles: &[Obstacle], resolution: f64) -> Result<()> {
    if !wall.is_valid() || !resolution.is_finite() || resolution <= 0.0 {
        return Err(PlanError::InvalidDimension {
            width: wall.width,
            height: wall.height,
            resolution,
        });
    }

    for (index, obstacle) in obstacles.iter().enumerate() {
        if !obstacle.is_valid() {
            return Err(PlanError::InvalidObstacle {
                index,
                width: obstacle.width,
                height: obstacle.height,
            });
        }
    }

    Ok(())
}

/// Mark every cell covered by the obstacle's index box as blocked.
fn rasterize(grid: &mut OccupancyGrid, obstacle: &Obstacle) {
    let resolution = grid.resolution();

    // Cell-index bounding box, then clip to the grid. i64 keeps far
    // out-of-bounds obstacles from wrapping before the clamp.
    let x0 = (obstacle.x / resolution).floor() as i64;
    let y0 = (obstacle.y / resolution).floor() as i64;
    let x1 = (obstacle.max_x() / resolution).ceil() as i64;
    let y1 = (obstacle.max_y() / resolution).ceil() as i64;

    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(grid.width() as i64);
    let y1 = y1.min(grid.height() as i64);

    for y in y0..y1 {
        for x in x0..x1 {
            grid.set(GridCoord::new(x as i32, y as i32), CellState::Blocked);
        }
    }
}
