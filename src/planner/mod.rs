//! Coverage planning pipeline.
//!
//! [`CoveragePlanner`] composes the three pipeline stages: grid
//! decomposition, boustrophedon sweep, and path compaction. Each call is
//! independent and side-effect-free; the planner holds only its
//! configuration, so one instance can serve concurrent callers without
//! locking.

mod compact;
mod sweep;

pub use compact::compact_path;
pub use sweep::sweep_path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::core::{Obstacle, Wall, Waypoint};
use crate::error::Result;
use crate::grid::{decompose, CellCounts};

/// Statistics about one planning run.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PlanStats {
    /// Grid width in cells.
    pub grid_width: usize,
    /// Grid height in cells.
    pub grid_height: usize,
    /// Free/blocked cell counts.
    pub cells: CellCounts,
    /// Raw path length before compaction (equals the free cell count).
    pub raw_waypoints: usize,
    /// Final path length after compaction.
    pub waypoints: usize,
}

/// The outcome of a planning run: the coverage path plus its statistics.
#[derive(Clone, Debug, Default)]
pub struct PlanResult {
    /// Ordered coverage path, one waypoint per free cell.
    pub path: Vec<Waypoint>,
    /// Statistics for logging and auditing.
    pub stats: PlanStats,
}

/// Coverage path planner for rectangular surfaces.
#[derive(Clone, Debug, Default)]
pub struct CoveragePlanner {
    config: PlannerConfig,
}

impl CoveragePlanner {
    /// Create a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The planner's configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a coverage path over `wall`, avoiding `obstacles`.
    ///
    /// Inputs are validated up front; on error no partial path is
    /// returned. The result is deterministic: identical inputs always
    /// produce an identical path.
    pub fn plan(&self, wall: &Wall, obstacles: &[Obstacle]) -> Result<PlanResult> {
        let grid = decompose(wall, obstacles, &self.config)?;
        let counts = grid.counts();

        let raw = sweep_path(&grid);
        let raw_waypoints = raw.len();
        debug!("sweep emitted {} waypoints", raw_waypoints);

        let path = compact_path(raw);

        let stats = PlanStats {
            grid_width: grid.width(),
            grid_height: grid.height(),
            cells: counts,
            raw_waypoints,
            waypoints: path.len(),
        };
        info!(
            "planned {} waypoints over a {}x{} grid ({} obstacles, {} blocked cells)",
            stats.waypoints,
            stats.grid_width,
            stats.grid_height,
            obstacles.len(),
            counts.blocked
        );

        Ok(PlanResult { path, stats })
    }
}
