//! # LepaPlan
//!
//! Coverage path planner for rectangular surfaces with rectangular
//! obstacles, built for driving a coverage robot (painting, mowing,
//! cleaning) across all reachable free space.
//!
//! ## Overview
//!
//! Planning is a linear, stateless pipeline of three pure stages:
//!
//! 1. **Decomposition** ([`grid::decompose`]) - continuous wall and
//!    obstacle geometry becomes a discrete occupancy grid
//! 2. **Sweep** ([`planner::sweep_path`]) - a boustrophedon traversal
//!    emits one waypoint per free cell, rows alternating direction
//! 3. **Compaction** ([`planner::compact_path`]) - immediately repeated
//!    waypoints collapse to a single instance
//!
//! [`CoveragePlanner`] composes the stages behind one validated entry
//! point. Every call allocates its own grid and shares nothing, so
//! concurrent planning needs no locking.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lepa_plan::{CoveragePlanner, Obstacle, PlannerConfig, Wall};
//!
//! let planner = CoveragePlanner::new(PlannerConfig {
//!     resolution: 0.2,
//!     ..PlannerConfig::default()
//! });
//!
//! let wall = Wall::new(5.0, 5.0);
//! let obstacles = [Obstacle::new(1.0, 1.0, 0.25, 0.25)];
//!
//! let result = planner.plan(&wall, &obstacles)?;
//! println!("{} waypoints, first at {:?}", result.path.len(), result.path[0]);
//! ```
//!
//! ## Coordinate System
//!
//! - Origin at the wall's bottom-left corner
//! - X: right, in meters
//! - Y: up, in meters
//! - Grid row 0 is the wall's bottom edge; waypoints sample cell centers
//!   and are rounded to 4 decimal places

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod grid;
pub mod io;
pub mod planner;

mod error;

pub use config::PlannerConfig;
pub use core::{GridCoord, Obstacle, Wall, Waypoint};
pub use error::{PlanError, Result};
pub use grid::{decompose, CellCounts, CellState, OccupancyGrid};
pub use planner::{compact_path, sweep_path, CoveragePlanner, PlanResult, PlanStats};
