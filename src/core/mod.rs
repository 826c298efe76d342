//! Core types for the LepaPlan library.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer cell indices for occupancy grid access
//! - [`Waypoint`]: Floating-point world coordinates in meters, rounded for emission
//!
//! ### Input Geometry
//! - [`Wall`]: The rectangular surface to cover, origin at its bottom-left corner
//! - [`Obstacle`]: An axis-aligned rectangle to exclude from coverage

mod geometry;
mod point;

pub use geometry::{Obstacle, Wall};
pub use point::{GridCoord, Waypoint};
