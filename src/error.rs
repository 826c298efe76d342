//! Error types for LepaPlan.

use thiserror::Error;

/// Planning error type.
///
/// All variants are raised during input validation, before the occupancy
/// grid is allocated. A failed plan never produces a partial path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Wall dimensions or resolution are non-positive (or not finite).
    #[error(
        "wall dimensions and resolution must be positive and finite \
         (width={width}, height={height}, resolution={resolution})"
    )]
    InvalidDimension {
        /// Wall width in meters.
        width: f64,
        /// Wall height in meters.
        height: f64,
        /// Grid resolution in meters per cell.
        resolution: f64,
    },

    /// An obstacle has non-positive (or not finite) extents.
    #[error("obstacle {index} must have positive finite extents (width={width}, height={height})")]
    InvalidObstacle {
        /// Position of the offending obstacle in the input list.
        index: usize,
        /// Obstacle width in meters.
        width: f64,
        /// Obstacle height in meters.
        height: f64,
    },

    /// The requested grid would exceed the configured cell budget.
    #[error("grid of {cells} cells exceeds the configured maximum of {max_cells}")]
    GridTooLarge {
        /// Number of cells the grid would need.
        cells: u128,
        /// Configured cell budget.
        max_cells: usize,
    },
}

/// LepaPlan result type.
pub type Result<T> = std::result::Result<T, PlanError>;
