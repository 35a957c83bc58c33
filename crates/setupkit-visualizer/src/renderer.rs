//! Part drawing.
//!
//! Builds a [`Scene`] for one shape: its outline, the center or centroid
//! marker, the zero point, auxiliary points and measurement labels. Labels
//! are shown in the selected display unit; geometry stays in millimeters.

use serde::{Deserialize, Serialize};
use setupkit_core::units::format_length;
use setupkit_core::{MeasurementSystem, Point2D};
use setupkit_designer::{PartCircle, PartPolygon, PartRectangle, PartShape, Shape};

use crate::scene::{Anchor, Color, MarkerKind, Primitive, Scene};
use crate::svg::path_data;
use crate::viewport::{PartViewport, DEFAULT_MARGIN_RATIO};

const LABEL_GAP: f64 = 10.0;
const MEASURE_LINE: f64 = 20.0;

/// Input to the renderer: what to draw, independent of surface size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub shape: Shape,
    /// Extra points to mark, such as the offset location.
    pub points: Vec<Point2D>,
    pub display_units: MeasurementSystem,
}

impl Drawing {
    pub fn new(shape: Shape, display_units: MeasurementSystem) -> Self {
        Self {
            shape,
            points: Vec::new(),
            display_units,
        }
    }

    pub fn with_points(mut self, points: Vec<Point2D>) -> Self {
        self.points = points;
        self
    }
}

/// Renders `drawing` onto a `width` x `height` surface with the default
/// margin. Returns `None` when there is nothing to draw (zero-sized part).
pub fn render(drawing: &Drawing, width: f64, height: f64) -> Option<Scene> {
    render_with_margin(drawing, width, height, DEFAULT_MARGIN_RATIO)
}

/// As [`render`] with an explicit margin ratio.
pub fn render_with_margin(
    drawing: &Drawing,
    width: f64,
    height: f64,
    margin_ratio: f64,
) -> Option<Scene> {
    let bounds = drawing.shape.bounds();
    let Some(viewport) = PartViewport::fit_with_margin(width, height, &bounds, margin_ratio)
    else {
        tracing::debug!(
            width = bounds.width(),
            height = bounds.height(),
            "part has no area on the surface, skipping drawing"
        );
        return None;
    };

    let mut scene = Scene::new(width, height);
    let units = drawing.display_units;

    match &drawing.shape {
        Shape::Rectangle(rect) => draw_rectangle(&mut scene, &viewport, rect, units),
        Shape::Circle(circle) => draw_circle(&mut scene, &viewport, circle, units),
        Shape::Polygon(poly) => draw_polygon(&mut scene, &viewport, poly),
    }

    draw_zero_point(&mut scene, &viewport);

    for p in &drawing.points {
        let (x, y) = viewport.world_point_to_pixel(p);
        scene.push(Primitive::Marker {
            x,
            y,
            kind: MarkerKind::Auxiliary,
        });
    }

    Some(scene)
}

fn draw_rectangle(
    scene: &mut Scene,
    viewport: &PartViewport,
    rect: &PartRectangle,
    units: MeasurementSystem,
) {
    let (sx1, sy1) = viewport.world_to_pixel(rect.x1, rect.y1);
    let (sx2, sy2) = viewport.world_to_pixel(rect.x2, rect.y2);
    scene.push(Primitive::Rectangle {
        x: sx1.min(sx2),
        y: sy1.min(sy2),
        width: (sx2 - sx1).abs(),
        height: (sy2 - sy1).abs(),
        stroke: Color::Blue,
    });

    draw_center(scene, viewport, rect.center().xy(), "Center");

    scene.push(Primitive::Text {
        x: sx1,
        y: sy1 - MEASURE_LINE,
        text: format!("Width: {}", format_length(rect.width(), units)),
        anchor: Anchor::West,
        fill: Color::Blue,
    });
    scene.push(Primitive::Text {
        x: sx1,
        y: sy1 - 2.0 * MEASURE_LINE,
        text: format!("Height: {}", format_length(rect.height(), units)),
        anchor: Anchor::West,
        fill: Color::Blue,
    });
}

fn draw_circle(
    scene: &mut Scene,
    viewport: &PartViewport,
    circle: &PartCircle,
    units: MeasurementSystem,
) {
    let (cx, cy) = viewport.world_point_to_pixel(&circle.center());
    let r = viewport.length_to_pixels(circle.radius());
    scene.push(Primitive::Circle {
        cx,
        cy,
        r,
        stroke: Color::Blue,
    });

    draw_center(scene, viewport, circle.center(), "Center");

    scene.push(Primitive::Text {
        x: cx,
        y: cy + r + MEASURE_LINE,
        text: format!("Diameter: {}", format_length(circle.diameter(), units)),
        anchor: Anchor::North,
        fill: Color::Blue,
    });
}

fn draw_polygon(scene: &mut Scene, viewport: &PartViewport, poly: &PartPolygon) {
    scene.push(Primitive::Path {
        d: path_data(&poly.outline(), viewport),
        stroke: Color::Blue,
    });

    // A degenerate polygon still gets its outline and vertices drawn.
    if let Ok(centroid) = poly.centroid() {
        draw_center(scene, viewport, centroid, "Centroid");
    }

    for v in &poly.vertices {
        let (x, y) = viewport.world_point_to_pixel(v);
        scene.push(Primitive::Marker {
            x,
            y,
            kind: MarkerKind::Auxiliary,
        });
    }
}

fn draw_center(scene: &mut Scene, viewport: &PartViewport, center: Point2D, label: &str) {
    let (x, y) = viewport.world_point_to_pixel(&center);
    scene.push(Primitive::Marker {
        x,
        y,
        kind: MarkerKind::Center,
    });
    scene.push(Primitive::Text {
        x: x + LABEL_GAP,
        y,
        text: label.to_string(),
        anchor: Anchor::West,
        fill: Color::Red,
    });
}

fn draw_zero_point(scene: &mut Scene, viewport: &PartViewport) {
    let (x, y) = viewport.world_point_to_pixel(&Point2D::origin());
    scene.push(Primitive::Marker {
        x,
        y,
        kind: MarkerKind::ZeroPoint,
    });
    scene.push(Primitive::Text {
        x: x - LABEL_GAP,
        y: y - LABEL_GAP,
        text: "Zero Point".to_string(),
        anchor: Anchor::SouthEast,
        fill: Color::Black,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_scene_contents() {
        let drawing = Drawing::new(
            PartRectangle::new(0.0, 100.0, 0.0, 50.0).into(),
            MeasurementSystem::Metric,
        );
        let scene = render(&drawing, 1000.0, 800.0).unwrap();

        let labels: Vec<&str> = scene.labels().collect();
        assert!(labels.contains(&"Center"));
        assert!(labels.contains(&"Zero Point"));
        assert!(labels.contains(&"Width: 100.00 mm"));
        assert!(labels.contains(&"Height: 50.00 mm"));
        assert_eq!(scene.markers(MarkerKind::Center).count(), 1);
        assert_eq!(scene.markers(MarkerKind::ZeroPoint).count(), 1);
    }

    #[test]
    fn test_circle_diameter_label_in_inches() {
        let drawing = Drawing::new(
            PartCircle::new(0.0, 50.8, 0.0, 50.8).into(),
            MeasurementSystem::Imperial,
        );
        let scene = render(&drawing, 600.0, 600.0).unwrap();
        assert!(scene.labels().any(|l| l == "Diameter: 2.00 in"));

        // Radius is drawn from millimeters regardless of display unit.
        let r = scene
            .primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Circle { r, .. } => Some(*r),
                _ => None,
            })
            .unwrap();
        // available 480 px over 50.8 mm -> radius 25.4 mm = 240 px
        assert!((r - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_part_draws_nothing() {
        let drawing = Drawing::new(
            PartRectangle::new(0.0, 0.0, 0.0, 50.0).into(),
            MeasurementSystem::Metric,
        );
        assert!(render(&drawing, 800.0, 600.0).is_none());
    }
}
