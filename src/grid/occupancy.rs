//! Occupancy grid storage.
//!
//! The grid is a flat contiguous array in row-major order (`y * width + x`),
//! avoiding per-row allocations and keeping sweeps cache-friendly.

use crate::core::{GridCoord, Waypoint};
use serde::{Deserialize, Serialize};

/// Occupancy state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CellState {
    /// Cell is free space the robot should cover.
    #[default]
    Free = 0,
    /// Cell intersects at least one obstacle.
    Blocked = 1,
}

impl CellState {
    /// Can a waypoint be emitted for this cell?
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, CellState::Free)
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Blocked => '#',
        }
    }
}

/// Cell counts by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Free cells (waypoints will be emitted for these).
    pub free: usize,
    /// Blocked cells.
    pub blocked: usize,
}

impl CellCounts {
    /// Total number of cells.
    #[inline]
    pub fn total(&self) -> usize {
        self.free + self.blocked
    }
}

/// A 2D occupancy grid over the wall surface.
///
/// The grid uses a coordinate system where:
/// - Cell (0, 0) covers the wall's bottom-left corner
/// - Positive X is to the right (column index)
/// - Positive Y is up (row index)
/// - Cell (x, y) covers the area from `(x, y) * resolution` to
///   `(x+1, y+1) * resolution`
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    /// Cell states in row-major order (`y * width + x`).
    cells: Vec<CellState>,
    /// Grid width in cells (columns).
    width: usize,
    /// Grid height in cells (rows).
    height: usize,
    /// Resolution in meters per cell.
    resolution: f64,
}

impl OccupancyGrid {
    /// Create a new grid with every cell free.
    ///
    /// Dimensions are assumed validated by [`decompose`]; this constructor
    /// performs no size or resolution checks of its own.
    ///
    /// [`decompose`]: crate::grid::decompose
    pub fn new(width: usize, height: usize, resolution: f64) -> Self {
        Self {
            cells: vec![CellState::Free; width * height],
            width,
            height,
            resolution,
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolution in meters per cell
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Flat index for a coordinate, or `None` if out of bounds.
    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Get the state of a cell, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Is this cell inside the grid and free? Out-of-bounds cells are not free.
    #[inline]
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.get(coord).is_some_and(CellState::is_free)
    }

    /// Set the state of a cell. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set(&mut self, coord: GridCoord, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
    }

    /// World coordinates of a cell's geometric center, rounded for emission.
    #[inline]
    pub fn cell_center(&self, coord: GridCoord) -> Waypoint {
        Waypoint::rounded(
            (coord.x as f64 + 0.5) * self.resolution,
            (coord.y as f64 + 0.5) * self.resolution,
        )
    }

    /// Count cells by state.
    pub fn counts(&self) -> CellCounts {
        let blocked = self
            .cells
            .iter()
            .filter(|c| matches!(c, CellState::Blocked))
            .count();
        CellCounts {
            free: self.cells.len() - blocked,
            blocked,
        }
    }
}

impl std::fmt::Display for OccupancyGrid {
    /// Render the grid with row 0 at the bottom, `.` free and `#` blocked.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "OccupancyGrid ({}x{}, resolution: {:.3}m)",
            self.width, self.height, self.resolution
        )?;
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let state = self.cells[y * self.width + x];
                write!(f, "{}", state.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_starts_free() {
        let grid = OccupancyGrid::new(4, 3, 0.1);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.counts(), CellCounts { free: 12, blocked: 0 });
        assert!(grid.is_free(GridCoord::new(3, 2)));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = OccupancyGrid::new(4, 3, 0.1);
        grid.set(GridCoord::new(1, 2), CellState::Blocked);
        assert_eq!(grid.get(GridCoord::new(1, 2)), Some(CellState::Blocked));
        assert!(!grid.is_free(GridCoord::new(1, 2)));
        assert_eq!(grid.counts().blocked, 1);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = OccupancyGrid::new(4, 3, 0.1);
        assert_eq!(grid.get(GridCoord::new(-1, 0)), None);
        assert_eq!(grid.get(GridCoord::new(4, 0)), None);
        assert!(!grid.is_free(GridCoord::new(0, 3)));
        // Out-of-bounds writes are silently ignored.
        grid.set(GridCoord::new(9, 9), CellState::Blocked);
        assert_eq!(grid.counts().blocked, 0);
    }

    #[test]
    fn test_cell_center() {
        let grid = OccupancyGrid::new(4, 3, 0.2);
        assert_eq!(grid.cell_center(GridCoord::new(0, 0)), Waypoint::new(0.1, 0.1));
        assert_eq!(grid.cell_center(GridCoord::new(3, 1)), Waypoint::new(0.7, 0.3));
    }

    #[test]
    fn test_display_renders_rows_top_down() {
        let mut grid = OccupancyGrid::new(2, 2, 0.1);
        grid.set(GridCoord::new(0, 0), CellState::Blocked);
        let rendered = format!("{}", grid);
        // Row 1 printed first (top), row 0 last with the blocked cell.
        assert!(rendered.ends_with("#.\n"));
        assert!(rendered.contains("..\n"));
    }
}
