use lyon::path::Path;
use serde::{Deserialize, Serialize};

use setupkit_core::{GeometryError, Point2D};

use super::{lyon_point, Bounds, PartShape, ShapeType};
use crate::engine;

/// Simple (non-self-intersecting) polygonal part, vertices in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartPolygon {
    pub vertices: Vec<Point2D>,
}

impl PartPolygon {
    pub fn new(vertices: Vec<Point2D>) -> Self {
        Self { vertices }
    }

    pub fn signed_area(&self) -> f64 {
        engine::signed_area(&self.vertices)
    }

    pub fn centroid(&self) -> Result<Point2D, GeometryError> {
        engine::polygon_centroid(&self.vertices)
    }
}

impl PartShape for PartPolygon {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.vertices)
            .unwrap_or_else(|| Bounds::from_corners(0.0, 0.0, 0.0, 0.0))
    }

    fn outline(&self) -> Path {
        let mut builder = Path::builder();
        let mut vertices = self.vertices.iter();
        if let Some(first) = vertices.next() {
            builder.begin(lyon_point(*first));
            for v in vertices {
                builder.line_to(lyon_point(*v));
            }
            builder.close();
        }
        builder.build()
    }

    fn reference_point(&self) -> Result<Point2D, GeometryError> {
        self.centroid()
    }
}
