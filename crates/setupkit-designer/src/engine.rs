//! Reference point geometry.
//!
//! Pure functions over millimeter coordinates. Callers convert inch input
//! before calling in here and apply end-mill compensation afterwards.

use setupkit_core::{GeometryError, Point2D, Point3D};

/// Signed areas at or below this fraction of the squared part extent are
/// treated as zero.
pub const AREA_EPSILON: f64 = 1e-12;

/// Center of a rectangular part: the mean of each edge pair.
///
/// Pass `z1 = z2 = 0.0` when the Z axis is disabled.
pub fn rectangle_center(x1: f64, x2: f64, y1: f64, y2: f64, z1: f64, z2: f64) -> Point3D {
    Point3D::new((x1 + x2) / 2.0, (y1 + y2) / 2.0, (z1 + z2) / 2.0)
}

/// Center of a round part from the endpoints of its bounding diagonal.
pub fn circle_center(x1: f64, x2: f64, y1: f64, y2: f64) -> Point2D {
    Point2D::new((x1 + x2) / 2.0, (y1 + y2) / 2.0)
}

/// Location measured inward from the right edge (`x2`) and from the top
/// edge (`y1`).
pub fn custom_location(
    _x1: f64,
    x2: f64,
    y1: f64,
    _y2: f64,
    offset_right: f64,
    offset_top: f64,
) -> Point2D {
    Point2D::new(x2 - offset_right, y1 + offset_top)
}

/// Shoelace signed area. Positive for counter-clockwise vertex order in a
/// Y-up frame, negative for clockwise. Fewer than three vertices give zero.
pub fn signed_area(vertices: &[Point2D]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Area-weighted centroid of a simple polygon.
///
/// ```text
/// A  = 1/2 * Σ (x_i*y_{i+1} - x_{i+1}*y_i)
/// cx = 1/(6A) * Σ (x_i + x_{i+1}) * (x_i*y_{i+1} - x_{i+1}*y_i)
/// cy = 1/(6A) * Σ (y_i + y_{i+1}) * (x_i*y_{i+1} - x_{i+1}*y_i)
/// ```
///
/// Indices wrap, so the closing edge from the last vertex back to the first
/// is always included. Vertex order does not matter: reversing it flips the
/// sign of both the area and the moment sums.
///
/// # Errors
/// [`GeometryError::TooFewVertices`] for fewer than three vertices and
/// [`GeometryError::DegeneratePolygon`] when the area is zero (collinear or
/// coincident vertices) or the result is not finite.
pub fn polygon_centroid(vertices: &[Point2D]) -> Result<Point2D, GeometryError> {
    let n = vertices.len();
    if n < 3 {
        return Err(GeometryError::TooFewVertices { count: n });
    }

    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        twice_area += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    let area = twice_area * 0.5;

    let extent = vertex_extent(vertices);
    if area.abs() <= AREA_EPSILON * extent * extent {
        return Err(GeometryError::DegeneratePolygon { area });
    }

    let centroid = Point2D::new(cx / (6.0 * area), cy / (6.0 * area));
    if !centroid.is_finite() {
        return Err(GeometryError::DegeneratePolygon { area });
    }

    tracing::debug!(vertices = n, area, %centroid, "polygon centroid");
    Ok(centroid)
}

fn vertex_extent(vertices: &[Point2D]) -> f64 {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for v in vertices {
        min_x = min_x.min(v.x);
        min_y = min_y.min(v.y);
        max_x = max_x.max(v.x);
        max_y = max_y.max(v.y);
    }
    (max_x - min_x).max(max_y - min_y)
}
