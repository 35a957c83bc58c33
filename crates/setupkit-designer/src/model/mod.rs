use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use setupkit_core::{GeometryError, InputError, Point2D};

mod circle;
mod polygon;
mod rectangle;

pub use circle::PartCircle;
pub use polygon::PartPolygon;
pub use rectangle::PartRectangle;

/// Axis-aligned extent of a part in world millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds spanning two corner coordinates in any order.
    pub fn from_corners(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Smallest bounds containing every point. `None` for an empty slice.
    pub fn from_points(points: &[Point2D]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self::from_corners(first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when either side has zero length; such a part cannot be drawn.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

/// Behaviour shared by every part shape.
pub trait PartShape {
    /// Which selector value produces this shape.
    fn shape_type(&self) -> ShapeType;

    /// Extent used to fit the part onto the drawing surface.
    fn bounds(&self) -> Bounds;

    /// Outline in world millimeters.
    fn outline(&self) -> Path;

    /// Center or centroid before tool compensation.
    fn reference_point(&self) -> Result<Point2D, GeometryError>;
}

/// Shape selector values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Circle,
    Polygon,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Circle => write!(f, "Circle"),
            Self::Polygon => write!(f, "Polygon"),
        }
    }
}

impl FromStr for ShapeType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "circle" => Ok(Self::Circle),
            "polygon" => Ok(Self::Polygon),
            _ => Err(InputError::UnsupportedShape {
                shape: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(PartRectangle),
    Circle(PartCircle),
    Polygon(PartPolygon),
}

impl PartShape for Shape {
    fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(s) => s.shape_type(),
            Shape::Circle(s) => s.shape_type(),
            Shape::Polygon(s) => s.shape_type(),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
        }
    }

    fn outline(&self) -> Path {
        match self {
            Shape::Rectangle(s) => s.outline(),
            Shape::Circle(s) => s.outline(),
            Shape::Polygon(s) => s.outline(),
        }
    }

    fn reference_point(&self) -> Result<Point2D, GeometryError> {
        match self {
            Shape::Rectangle(s) => s.reference_point(),
            Shape::Circle(s) => s.reference_point(),
            Shape::Polygon(s) => s.reference_point(),
        }
    }
}

impl From<PartRectangle> for Shape {
    fn from(s: PartRectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<PartCircle> for Shape {
    fn from(s: PartCircle) -> Self {
        Shape::Circle(s)
    }
}

impl From<PartPolygon> for Shape {
    fn from(s: PartPolygon) -> Self {
        Shape::Polygon(s)
    }
}

/// Converts a world point to the f32 point lyon paths are built from.
pub(crate) fn lyon_point(p: Point2D) -> lyon::math::Point {
    lyon::math::point(p.x as f32, p.y as f32)
}
