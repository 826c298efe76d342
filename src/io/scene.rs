//! TOML scene files.
//!
//! A scene describes one planning problem:
//!
//! ```toml
//! name = "studio-wall"
//!
//! [wall]
//! width = 5.0
//! height = 5.0
//!
//! [[obstacles]]
//! x = 1.0
//! y = 1.0
//! width = 0.25
//! height = 0.25
//!
//! [planner]
//! resolution = 0.2
//! ```
//!
//! Every section except `[wall]` is optional; missing planner fields use
//! the library defaults.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::PlannerConfig;
use crate::core::{Obstacle, Wall};

/// Scene loading error.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    /// The scene file is not valid TOML (or is missing required fields).
    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A planning problem loaded from a TOML file.
#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
    /// Free-form scene name, carried into outputs as opaque metadata.
    #[serde(default)]
    pub name: String,

    /// The surface to cover.
    pub wall: Wall,

    /// Obstacles to exclude, in input order.
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,

    /// Planner settings; fields not present fall back to defaults.
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Scene {
    /// Load a scene from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse a scene from a TOML string.
    pub fn from_toml(toml: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(toml)?)
    }
}
