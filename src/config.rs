//! Planner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for coverage planning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Grid resolution in meters per cell edge (default: 0.1 = 10cm).
    #[serde(default = "default_resolution")]
    pub resolution: f64,

    /// Maximum number of grid cells a single plan may allocate
    /// (default: 4,000,000). Inputs that would exceed this are rejected
    /// before allocation with [`PlanError::GridTooLarge`].
    ///
    /// [`PlanError::GridTooLarge`]: crate::PlanError::GridTooLarge
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            max_cells: default_max_cells(),
        }
    }
}

// Default value functions
fn default_resolution() -> f64 {
    0.1
}
fn default_max_cells() -> usize {
    4_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.resolution, 0.1);
        assert_eq!(config.max_cells, 4_000_000);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: PlannerConfig = toml::from_str("resolution = 0.05").unwrap();
        assert_eq!(config.resolution, 0.05);
        assert_eq!(config.max_cells, 4_000_000);
    }
}
