//! Occupancy grid storage and decomposition.
//!
//! The grid is an ephemeral entity: [`decompose`] validates the inputs,
//! allocates a grid sized to the wall, rasterizes the obstacles into it,
//! and the planner drops it once the sweep is generated. Nothing here is
//! persisted or mutated across planning calls.

mod decompose;
mod occupancy;

pub use decompose::decompose;
pub use occupancy::{CellCounts, CellState, OccupancyGrid};
