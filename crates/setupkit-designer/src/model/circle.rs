use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use setupkit_core::{GeometryError, Point2D};

use super::{lyon_point, Bounds, PartShape, ShapeType};
use crate::engine;

/// Round stock given by the two ends of its bounding diagonal.
///
/// The diameter is taken from the X span, `|x2 - x1|`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartCircle {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl PartCircle {
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2 }
    }

    pub fn diameter(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn radius(&self) -> f64 {
        self.diameter() / 2.0
    }

    pub fn center(&self) -> Point2D {
        engine::circle_center(self.x1, self.x2, self.y1, self.y2)
    }
}

impl PartShape for PartCircle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.x1, self.x2, self.y1, self.y2)
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(
            lyon_point(self.center()),
            self.radius() as f32,
            Winding::Positive,
        );
        builder.build()
    }

    fn reference_point(&self) -> Result<Point2D, GeometryError> {
        Ok(self.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_diameter() {
        let circle = PartCircle::new(-5.0, 5.0, -5.0, 5.0);
        assert_eq!(circle.center(), Point2D::new(0.0, 0.0));
        assert_eq!(circle.diameter(), 10.0);
        assert_eq!(circle.radius(), 5.0);
    }

    #[test]
    fn test_outline_stays_within_bounds() {
        let circle = PartCircle::new(10.0, 30.0, 0.0, 20.0);
        for event in circle.outline().iter() {
            if let lyon::path::Event::Line { to, .. } | lyon::path::Event::Cubic { to, .. } =
                event
            {
                assert!(to.x >= 9.99 && to.x <= 30.01);
                assert!(to.y >= -0.01 && to.y <= 20.01);
            }
        }
    }
}
