//! Coordinate types for the occupancy grid and the emitted path.

use serde::{Deserialize, Serialize};

/// Number of decimal places kept on emitted waypoint coordinates.
const WAYPOINT_DECIMALS: f64 = 10_000.0;

/// Grid coordinates (integer cell indices).
///
/// `x` is the column index and `y` the row index; row 0 is the wall's
/// bottom edge, so `y` increases upward in world space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A path sample point in world coordinates (meters).
///
/// Waypoints are taken at the geometric center of free grid cells and
/// carry coordinates rounded to 4 decimal places (0.1 mm).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Waypoint {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
}

impl Waypoint {
    /// Create a waypoint from already-rounded coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a waypoint, rounding both coordinates to 4 decimal places.
    ///
    /// Ties at the fifth decimal round half away from zero (the behavior
    /// of [`f64::round`] on the scaled value).
    #[inline]
    pub fn rounded(x: f64, y: f64) -> Self {
        Self {
            x: round_coord(x),
            y: round_coord(y),
        }
    }

    /// This waypoint as an `[x, y]` pair, the wire shape consumed by callers.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Round a world coordinate to 4 decimal places, half away from zero.
#[inline]
fn round_coord(value: f64) -> f64 {
    (value * WAYPOINT_DECIMALS).round() / WAYPOINT_DECIMALS
}
