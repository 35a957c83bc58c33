//! End-mill radius compensation.

use serde::{Deserialize, Serialize};
use setupkit_core::{InputError, Point2D, Point3D};

/// Cutting tool, described by its diameter in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndMill {
    diameter: f64,
}

impl EndMill {
    /// Creates an end mill. Rejects negative and non-finite diameters.
    pub fn new(diameter: f64) -> Result<Self, InputError> {
        if !diameter.is_finite() || diameter < 0.0 {
            return Err(InputError::OutOfRange {
                field: "End Mill Diameter".to_string(),
                value: diameter,
            });
        }
        Ok(Self { diameter })
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Shifts a target point by the tool radius on X and Y so the cutting
    /// edge, not the tool center, lands on the computed coordinate.
    pub fn compensate(&self, point: Point2D) -> Point2D {
        let r = self.radius();
        Point2D::new(point.x - r, point.y - r)
    }

    /// As [`compensate`](Self::compensate); Z passes through unchanged.
    pub fn compensate_3d(&self, point: Point3D) -> Point3D {
        self.compensate(point.xy()).with_z(point.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compensation_subtracts_radius() {
        let tool = EndMill::new(10.0).unwrap();
        assert_eq!(tool.radius(), 5.0);
        assert_eq!(tool.compensate(Point2D::new(50.0, 25.0)), Point2D::new(45.0, 20.0));
    }

    #[test]
    fn test_compensation_leaves_z() {
        let tool = EndMill::new(6.0).unwrap();
        assert_eq!(
            tool.compensate_3d(Point3D::new(10.0, 10.0, -4.0)),
            Point3D::new(7.0, 7.0, -4.0)
        );
    }

    #[test]
    fn test_zero_diameter_is_identity() {
        let tool = EndMill::new(0.0).unwrap();
        let p = Point2D::new(1.25, -3.5);
        assert_eq!(tool.compensate(p), p);
    }

    #[test]
    fn test_rejects_invalid_diameter() {
        assert!(EndMill::new(-1.0).is_err());
        assert!(EndMill::new(f64::NAN).is_err());
        assert!(EndMill::new(f64::INFINITY).is_err());
    }
}
