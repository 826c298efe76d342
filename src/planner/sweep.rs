//! Boustrophedon sweep generation.

use crate::core::{GridCoord, Waypoint};
use crate::grid::OccupancyGrid;

/// Generate the raw coverage path for an occupancy grid.
///
/// Rows are visited bottom to top; even rows are traversed left to right
/// and odd rows right to left, so the path snakes across the wall like a
/// lawn mower. Every free cell contributes exactly one waypoint at its
/// center; blocked cells contribute nothing. A fully blocked row emits no
/// waypoints but leaves the alternation of later rows untouched.
///
/// Free cells separated by a blocked run within a row produce consecutive
/// waypoints with no gap marker: the emitted path implies a straight
/// segment across the blocked run. Detouring around such gaps is
/// deliberately out of scope for this planner.
pub fn sweep_path(grid: &OccupancyGrid) -> Vec<Waypoint> {
    let mut path = Vec::with_capacity(grid.counts().free);

    let mut visit = |x: usize, y: usize| {
        let coord = GridCoord::new(x as i32, y as i32);
        if grid.is_free(coord) {
            path.push(grid.cell_center(coord));
        }
    };

    for y in 0..grid.height() {
        if y % 2 == 0 {
            for x in 0..grid.width() {
                visit(x, y);
            }
        } else {
            for x in (0..grid.width()).rev() {
                visit(x, y);
            }
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    #[test]
    fn test_single_cell_grid() {
        let grid = OccupancyGrid::new(1, 1, 1.0);
        assert_eq!(sweep_path(&grid), vec![Waypoint::new(0.5, 0.5)]);
    }

    #[test]
    fn test_rows_alternate_direction() {
        let grid = OccupancyGrid::new(2, 2, 1.0);
        let path = sweep_path(&grid);
        assert_eq!(
            path,
            vec![
                Waypoint::new(0.5, 0.5),
                Waypoint::new(1.5, 0.5),
                Waypoint::new(1.5, 1.5),
                Waypoint::new(0.5, 1.5),
            ]
        );
    }

    #[test]
    fn test_blocked_cells_emit_nothing() {
        let mut grid = OccupancyGrid::new(3, 1, 1.0);
        grid.set(GridCoord::new(1, 0), CellState::Blocked);
        let path = sweep_path(&grid);
        // The gap leaves no trace: the two free centers are adjacent in the path.
        assert_eq!(path, vec![Waypoint::new(0.5, 0.5), Waypoint::new(2.5, 0.5)]);
    }

    #[test]
    fn test_empty_row_preserves_alternation() {
        let mut grid = OccupancyGrid::new(2, 3, 1.0);
        for x in 0..2 {
            grid.set(GridCoord::new(x, 1), CellState::Blocked);
        }
        let path = sweep_path(&grid);
        // Row 2 is even and still runs left to right.
        assert_eq!(
            path,
            vec![
                Waypoint::new(0.5, 0.5),
                Waypoint::new(1.5, 0.5),
                Waypoint::new(0.5, 2.5),
                Waypoint::new(1.5, 2.5),
            ]
        );
    }

    #[test]
    fn test_path_covers_every_free_cell_once() {
        let mut grid = OccupancyGrid::new(7, 5, 0.5);
        grid.set(GridCoord::new(3, 2), CellState::Blocked);
        grid.set(GridCoord::new(4, 2), CellState::Blocked);

        let path = sweep_path(&grid);
        assert_eq!(path.len(), grid.counts().free);

        let unique: std::collections::HashSet<_> = path
            .iter()
            .map(|w| (w.x.to_bits(), w.y.to_bits()))
            .collect();
        assert_eq!(unique.len(), path.len());
    }
}
