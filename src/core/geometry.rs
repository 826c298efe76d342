//! Input geometry: the wall surface and its obstacles.
//!
//! Both types live in the same coordinate frame: meters, origin at the
//! wall's bottom-left corner, x to the right, y upward.

use serde::{Deserialize, Serialize};

/// The rectangular surface to cover.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Width in meters (x extent).
    pub width: f64,
    /// Height in meters (y extent).
    pub height: f64,
}

impl Wall {
    /// Create a new wall surface.
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Are the dimensions usable (positive and finite)?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
    }
}

/// An axis-aligned rectangular obstacle, given by its bottom-left corner
/// and extents.
///
/// Obstacles may overlap each other and may extend outside the wall
/// bounds; the out-of-bounds portion is clipped during decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// X coordinate of the bottom-left corner in meters.
    pub x: f64,
    /// Y coordinate of the bottom-left corner in meters.
    pub y: f64,
    /// Width in meters (x extent).
    pub width: f64,
    /// Height in meters (y extent).
    pub height: f64,
}

impl Obstacle {
    /// Create a new obstacle rectangle.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the top edge.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Is this a well-formed obstacle (finite corner, positive finite extents)?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.width > 0.0
            && self.height.is_finite()
            && self.height > 0.0
    }
}
