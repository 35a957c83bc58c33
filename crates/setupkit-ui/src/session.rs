//! Calculation session.
//!
//! A [`Session`] owns the history and the last drawing. One call to
//! [`Session::calculate`] parses the form, computes the compensated point,
//! renders it and records the result. A failed calculation leaves the
//! session untouched.

use serde::{Deserialize, Serialize};
use setupkit_core::{GeometryError, MeasurementSystem, Point3D, Result};
use setupkit_designer::{custom_location, PartShape, Shape};
use setupkit_settings::{CanvasSettings, Config};
use setupkit_visualizer::{render_with_margin, Drawing, Scene};
use std::fmt;
use std::path::Path;

use crate::form::{CalculationRequest, FormState, TargetMode};
use crate::history::History;

/// What kind of point a result describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultKind {
    RectangleCenter,
    CircleCenter,
    PolygonCentroid,
    CustomLocation,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RectangleCenter => write!(f, "Rectangle Center"),
            Self::CircleCenter => write!(f, "Circle Center"),
            Self::PolygonCentroid => write!(f, "Polygon Centroid"),
            Self::CustomLocation => write!(f, "Custom Location"),
        }
    }
}

/// A compensated machine point. `Display` gives the reported result line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub kind: ResultKind,
    /// Tool-compensated point in millimeters. Z is 0 unless the part is a
    /// rectangle with the Z axis enabled.
    pub point: Point3D,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ResultKind::RectangleCenter => write!(f, "{}: {}", self.kind, self.point),
            _ => write!(f, "{}: {}", self.kind, self.point.xy()),
        }
    }
}

/// Computes the reported point for a parsed request.
///
/// Location mode takes precedence over the shape's own center; in both
/// cases the end-mill radius is subtracted from X and Y.
pub fn evaluate(request: &CalculationRequest) -> std::result::Result<Evaluation, GeometryError> {
    let tool = request.tool;

    let (kind, point) = match (request.target, &request.shape) {
        (
            TargetMode::Location {
                offset_right,
                offset_top,
            },
            _,
        ) => {
            let e = request.edges;
            let location = custom_location(e.x1, e.x2, e.y1, e.y2, offset_right, offset_top);
            (ResultKind::CustomLocation, location.with_z(0.0))
        }
        (TargetMode::ShapeDefault, Shape::Rectangle(rect)) => {
            (ResultKind::RectangleCenter, rect.center())
        }
        (TargetMode::ShapeDefault, Shape::Circle(circle)) => {
            (ResultKind::CircleCenter, circle.center().with_z(0.0))
        }
        (TargetMode::ShapeDefault, Shape::Polygon(poly)) => {
            (ResultKind::PolygonCentroid, poly.centroid()?.with_z(0.0))
        }
    };

    Ok(Evaluation {
        kind,
        point: tool.compensate_3d(point),
    })
}

/// Result of one successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    pub result_text: String,
    pub evaluation: Evaluation,
    /// `None` when the part has no area to draw.
    pub scene: Option<Scene>,
}

#[derive(Debug, Clone)]
pub struct Session {
    history: History,
    canvas: CanvasSettings,
    last_drawing: Option<Drawing>,
    last_result: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            history: History::new(),
            canvas: config.canvas,
            last_drawing: None,
            last_result: None,
        }
    }

    pub fn calculate(&mut self, form: &FormState) -> Result<CalculationOutcome> {
        let request = CalculationRequest::from_form(form).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected form input");
        })?;
        let evaluation = evaluate(&request).inspect_err(|e| {
            tracing::warn!(error = %e, "calculation failed");
        })?;
        let result_text = evaluation.to_string();
        tracing::debug!(result = %result_text, "calculated reference point");

        let drawing = self.drawing_for(&request, &evaluation, form.xyz_units);
        let scene = self.render(&drawing);

        self.history.append(result_text.clone());
        self.last_drawing = Some(drawing);
        self.last_result = Some(result_text.clone());

        Ok(CalculationOutcome {
            result_text,
            evaluation,
            scene,
        })
    }

    /// Re-renders the last drawing on a surface of the new size.
    pub fn redraw(&mut self, width: u32, height: u32) -> Option<Scene> {
        self.canvas.width = width;
        self.canvas.height = height;
        let drawing = self.last_drawing.as_ref()?;
        self.render(drawing)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn save_history(&self, path: &Path) -> Result<()> {
        self.history.export(path)?;
        Ok(())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    pub fn last_drawing(&self) -> Option<&Drawing> {
        self.last_drawing.as_ref()
    }

    fn drawing_for(
        &self,
        request: &CalculationRequest,
        evaluation: &Evaluation,
        units: MeasurementSystem,
    ) -> Drawing {
        Drawing::new(request.shape.clone(), units).with_points(vec![evaluation.point.xy()])
    }

    fn render(&self, drawing: &Drawing) -> Option<Scene> {
        let scene = render_with_margin(
            drawing,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
            self.canvas.margin_ratio,
        );
        if scene.is_none() {
            tracing::debug!(shape = %drawing.shape.shape_type(), "nothing to draw");
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Edges, VertexRow};
    use setupkit_designer::{EndMill, PartCircle, PartPolygon, PartRectangle};
    use setupkit_core::Point2D;

    fn request(shape: Shape, target: TargetMode, diameter: f64) -> CalculationRequest {
        CalculationRequest {
            edges: Edges {
                x1: 0.0,
                x2: 10.0,
                y1: 0.0,
                y2: 20.0,
            },
            shape,
            tool: EndMill::new(diameter).unwrap(),
            target,
        }
    }

    #[test]
    fn test_rectangle_result_includes_z() {
        let shape = PartRectangle::new(0.0, 10.0, 0.0, 20.0).with_z(0.0, -4.0).into();
        let eval = evaluate(&request(shape, TargetMode::ShapeDefault, 2.0)).unwrap();
        assert_eq!(eval.kind, ResultKind::RectangleCenter);
        assert_eq!(eval.to_string(), "Rectangle Center: X=4.0000, Y=9.0000, Z=-2.0000");
    }

    #[test]
    fn test_circle_result() {
        let shape = PartCircle::new(-5.0, 5.0, -5.0, 5.0).into();
        let eval = evaluate(&request(shape, TargetMode::ShapeDefault, 0.0)).unwrap();
        assert_eq!(eval.to_string(), "Circle Center: X=0.0000, Y=0.0000");
    }

    #[test]
    fn test_location_takes_precedence() {
        let shape = PartCircle::new(0.0, 10.0, 0.0, 20.0).into();
        let target = TargetMode::Location {
            offset_right: 2.0,
            offset_top: 3.0,
        };
        let eval = evaluate(&request(shape, target, 0.0)).unwrap();
        assert_eq!(eval.to_string(), "Custom Location: X=8.0000, Y=3.0000");
    }

    #[test]
    fn test_polygon_centroid_compensated() {
        let shape = PartPolygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
            Point2D::new(0.0, 4.0),
        ])
        .into();
        let eval = evaluate(&request(shape, TargetMode::ShapeDefault, 1.0)).unwrap();
        assert_eq!(eval.to_string(), "Polygon Centroid: X=1.5000, Y=1.5000");
    }

    #[test]
    fn test_failed_calculation_commits_nothing() {
        let mut session = Session::default();
        let form = FormState {
            shape: "Polygon".into(),
            end_mill_diameter: "1".into(),
            vertices: vec![
                VertexRow::new("0", "0"),
                VertexRow::new("1", "1"),
                VertexRow::new("2", "2"),
            ],
            ..FormState::default()
        };
        let err = session.calculate(&form).unwrap_err();
        assert!(err.is_geometry_error());
        assert!(session.history().is_empty());
        assert!(session.last_result().is_none());
        assert!(session.last_drawing().is_none());
    }

    #[test]
    fn test_redraw_without_calculation() {
        let mut session = Session::default();
        assert!(session.redraw(640, 480).is_none());
    }
}
