//! Point value types
//!
//! All coordinates are millimeters. Points are plain `Copy` values; every
//! geometry function returns a new point instead of mutating one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the workpiece XY plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
}

impl Point2D {
    /// Create a point from X and Y
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The workpiece zero point
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Distance to another point
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lift onto the given Z level
    pub const fn with_z(self, z: f64) -> Point3D {
        Point3D::new(self.x, self.y, z)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={:.4}, Y={:.4}", self.x, self.y)
    }
}

/// A point in machine space, used where the Z axis is enabled
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Point3D {
    /// Create a point from X, Y and Z
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Drop the Z component
    pub const fn xy(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={:.4}, Y={:.4}, Z={:.4}", self.x, self.y, self.z)
    }
}
