//! Scene input and audit output.
//!
//! - **Scene files**: TOML descriptions of one planning problem (wall,
//!   obstacles, planner overrides)
//! - **SVG export**: audit rendering of the occupancy grid and the
//!   planned path
//!
//! The planner core has no dependency on anything here; these are the
//! collaborators that feed it inputs and consume its output.

pub mod scene;
pub mod svg;

pub use scene::{Scene, SceneError};
pub use svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
