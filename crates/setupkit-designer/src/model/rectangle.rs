use lyon::path::Path;
use serde::{Deserialize, Serialize};

use setupkit_core::{GeometryError, Point2D, Point3D};

use super::{lyon_point, Bounds, PartShape, ShapeType};
use crate::engine;

/// Rectangular stock described by its edges.
///
/// `x1`/`x2` are the left and right edges, `y1`/`y2` the top and bottom
/// edges, `z1`/`z2` the top and bottom faces (both zero when Z is off).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRectangle {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    #[serde(default)]
    pub z1: f64,
    #[serde(default)]
    pub z2: f64,
}

impl PartRectangle {
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self {
            x1,
            x2,
            y1,
            y2,
            z1: 0.0,
            z2: 0.0,
        }
    }

    pub fn with_z(mut self, z1: f64, z2: f64) -> Self {
        self.z1 = z1;
        self.z2 = z2;
        self
    }

    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    /// Center including the Z midpoint.
    pub fn center(&self) -> Point3D {
        engine::rectangle_center(self.x1, self.x2, self.y1, self.y2, self.z1, self.z2)
    }
}

impl PartShape for PartRectangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.x1, self.x2, self.y1, self.y2)
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        builder.begin(lyon_point(Point2D::new(self.x1, self.y1)));
        builder.line_to(lyon_point(Point2D::new(self.x2, self.y1)));
        builder.line_to(lyon_point(Point2D::new(self.x2, self.y2)));
        builder.line_to(lyon_point(Point2D::new(self.x1, self.y2)));
        builder.close();
        builder.build()
    }

    fn reference_point(&self) -> Result<Point2D, GeometryError> {
        Ok(self.center().xy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_with_z() {
        let rect = PartRectangle::new(0.0, 100.0, 0.0, 50.0).with_z(0.0, -20.0);
        assert_eq!(rect.center(), Point3D::new(50.0, 25.0, -10.0));
        assert_eq!(rect.reference_point().unwrap(), Point2D::new(50.0, 25.0));
    }

    #[test]
    fn test_dimensions_ignore_edge_order() {
        let rect = PartRectangle::new(30.0, 10.0, 5.0, -5.0);
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 10.0);
    }

    #[test]
    fn test_outline_is_closed_four_sided() {
        let rect = PartRectangle::new(0.0, 10.0, 0.0, 5.0);
        let events: Vec<_> = rect.outline().iter().collect();
        // Begin + 3 lines + End(close) which carries the closing edge.
        assert_eq!(events.len(), 5);
        assert!(matches!(
            events.last(),
            Some(lyon::path::Event::End { close: true, .. })
        ));
    }
}
