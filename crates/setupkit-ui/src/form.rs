//! Form input and its parsed request.
//!
//! [`FormState`] is what a front end edits: raw text per field plus the
//! selectors and toggles. [`CalculationRequest::from_form`] is the only way
//! to turn it into numbers. Every length in a request is millimeters.

use serde::{Deserialize, Serialize};
use setupkit_core::units::parse_length;
use setupkit_core::{InputError, MeasurementSystem, Point2D};
use setupkit_designer::{EndMill, PartCircle, PartPolygon, PartRectangle, Shape, ShapeType};
use setupkit_settings::Config;

/// One editable polygon vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRow {
    pub x: String,
    pub y: String,
}

impl VertexRow {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Raw form contents, as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub shape: String,
    pub x1: String,
    pub x2: String,
    pub y1: String,
    pub y2: String,
    pub z1: String,
    pub z2: String,
    pub end_mill_diameter: String,
    pub offset_right: String,
    pub offset_top: String,
    pub vertices: Vec<VertexRow>,
    pub xyz_units: MeasurementSystem,
    pub end_mill_units: MeasurementSystem,
    pub z_axis_enabled: bool,
    pub specific_location: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            shape: ShapeType::Rectangle.to_string(),
            x1: String::new(),
            x2: String::new(),
            y1: String::new(),
            y2: String::new(),
            z1: String::new(),
            z2: String::new(),
            end_mill_diameter: String::new(),
            offset_right: String::new(),
            offset_top: String::new(),
            vertices: Vec::new(),
            xyz_units: MeasurementSystem::Metric,
            end_mill_units: MeasurementSystem::Metric,
            z_axis_enabled: false,
            specific_location: false,
        }
    }
}

impl FormState {
    /// Empty form seeded with the configured units and tool diameter.
    pub fn from_config(config: &Config) -> Self {
        let diameter = config
            .units
            .end_mill
            .from_mm(config.tool.end_mill_diameter);
        Self {
            xyz_units: config.units.xyz,
            end_mill_units: config.units.end_mill,
            end_mill_diameter: format_input(diameter),
            ..Self::default()
        }
    }

    pub fn add_vertex(&mut self) {
        self.vertices.push(VertexRow::default());
    }

    /// Removes the last vertex row. Does nothing when there are none.
    pub fn remove_vertex(&mut self) -> Option<VertexRow> {
        self.vertices.pop()
    }
}

/// Shortest text that parses back to exactly `value`.
fn format_input(value: f64) -> String {
    value.to_string()
}

/// Edge coordinates in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Which point the calculation reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetMode {
    /// Center or centroid of the shape
    ShapeDefault,
    /// Location measured in from the right and top edges
    Location { offset_right: f64, offset_top: f64 },
}

/// Parsed form, all lengths in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub edges: Edges,
    pub shape: Shape,
    pub tool: EndMill,
    pub target: TargetMode,
}

impl CalculationRequest {
    pub fn from_form(form: &FormState) -> Result<Self, InputError> {
        let shape_type: ShapeType = form.shape.parse()?;
        let units = form.xyz_units;

        let edges = Edges {
            x1: parse_optional("X1", &form.x1, units)?,
            x2: parse_optional("X2", &form.x2, units)?,
            y1: parse_optional("Y1", &form.y1, units)?,
            y2: parse_optional("Y2", &form.y2, units)?,
        };

        let (z1, z2) = if form.z_axis_enabled {
            (
                parse_required("Z1", &form.z1, units)?,
                parse_required("Z2", &form.z2, units)?,
            )
        } else {
            (0.0, 0.0)
        };

        let diameter = parse_required(
            "End Mill Diameter",
            &form.end_mill_diameter,
            form.end_mill_units,
        )?;
        let tool = EndMill::new(diameter)?;

        let shape = match shape_type {
            ShapeType::Rectangle => {
                PartRectangle::new(edges.x1, edges.x2, edges.y1, edges.y2)
                    .with_z(z1, z2)
                    .into()
            }
            ShapeType::Circle => PartCircle::new(edges.x1, edges.x2, edges.y1, edges.y2).into(),
            ShapeType::Polygon => PartPolygon::new(parse_vertices(&form.vertices, units)?).into(),
        };

        let target = if form.specific_location {
            TargetMode::Location {
                offset_right: parse_required("Offset from Right", &form.offset_right, units)?,
                offset_top: parse_required("Offset from Top", &form.offset_top, units)?,
            }
        } else {
            TargetMode::ShapeDefault
        };

        Ok(Self {
            edges,
            shape,
            tool,
            target,
        })
    }
}

fn parse_vertices(rows: &[VertexRow], units: MeasurementSystem) -> Result<Vec<Point2D>, InputError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let n = i + 1;
            Ok(Point2D::new(
                parse_required(&format!("Vertex {} X", n), &row.x, units)?,
                parse_required(&format!("Vertex {} Y", n), &row.y, units)?,
            ))
        })
        .collect()
}

/// Blank parses as zero.
fn parse_optional(field: &str, raw: &str, units: MeasurementSystem) -> Result<f64, InputError> {
    parse_length(raw, units).map_err(|reason| InputError::InvalidNumber {
        field: field.to_string(),
        reason,
    })
}

fn parse_required(field: &str, raw: &str, units: MeasurementSystem) -> Result<f64, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::MissingField {
            field: field.to_string(),
        });
    }
    parse_optional(field, raw, units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use setupkit_designer::PartShape;

    fn rectangle_form() -> FormState {
        FormState {
            x1: "0".into(),
            x2: "100".into(),
            y1: "0".into(),
            y2: "50".into(),
            end_mill_diameter: "10".into(),
            ..FormState::default()
        }
    }

    #[test]
    fn test_blank_edges_parse_as_zero() {
        let form = FormState {
            x2: "20".into(),
            y2: "10".into(),
            end_mill_diameter: "0".into(),
            ..FormState::default()
        };
        let request = CalculationRequest::from_form(&form).unwrap();
        assert_eq!(request.edges.x1, 0.0);
        assert_eq!(request.edges.y1, 0.0);
    }

    #[test]
    fn test_end_mill_diameter_is_required() {
        let form = FormState {
            end_mill_diameter: "  ".into(),
            ..rectangle_form()
        };
        assert_eq!(
            CalculationRequest::from_form(&form).unwrap_err(),
            InputError::MissingField {
                field: "End Mill Diameter".into()
            }
        );
    }

    #[test]
    fn test_malformed_number_names_field() {
        let form = FormState {
            y2: "5O".into(),
            ..rectangle_form()
        };
        match CalculationRequest::from_form(&form).unwrap_err() {
            InputError::InvalidNumber { field, .. } => assert_eq!(field, "Y2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_z_fields_only_read_when_enabled() {
        let form = FormState {
            z1: "junk".into(),
            ..rectangle_form()
        };
        assert!(CalculationRequest::from_form(&form).is_ok());

        let form = FormState {
            z_axis_enabled: true,
            z1: "-2".into(),
            ..rectangle_form()
        };
        assert_eq!(
            CalculationRequest::from_form(&form).unwrap_err(),
            InputError::MissingField { field: "Z2".into() }
        );
    }

    #[test]
    fn test_imperial_inputs_convert_to_mm() {
        let form = FormState {
            x2: "4".into(),
            y2: "1 1/2".into(),
            end_mill_diameter: "0.25".into(),
            xyz_units: MeasurementSystem::Imperial,
            end_mill_units: MeasurementSystem::Imperial,
            ..FormState::default()
        };
        let request = CalculationRequest::from_form(&form).unwrap();
        assert!((request.edges.x2 - 101.6).abs() < 1e-9);
        assert!((request.edges.y2 - 38.1).abs() < 1e-9);
        assert!((request.tool.diameter() - 6.35).abs() < 1e-9);
    }

    #[test]
    fn test_unit_selectors_are_independent() {
        let form = FormState {
            end_mill_diameter: "0.5".into(),
            end_mill_units: MeasurementSystem::Imperial,
            ..rectangle_form()
        };
        let request = CalculationRequest::from_form(&form).unwrap();
        assert_eq!(request.edges.x2, 100.0);
        assert!((request.tool.diameter() - 12.7).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_shape() {
        let form = FormState {
            shape: "Hexagon".into(),
            ..rectangle_form()
        };
        assert!(matches!(
            CalculationRequest::from_form(&form),
            Err(InputError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_offsets_required_in_location_mode() {
        let form = FormState {
            specific_location: true,
            offset_right: "2".into(),
            ..rectangle_form()
        };
        assert_eq!(
            CalculationRequest::from_form(&form).unwrap_err(),
            InputError::MissingField {
                field: "Offset from Top".into()
            }
        );
    }

    #[test]
    fn test_polygon_vertices_parsed() {
        let mut form = FormState {
            shape: "Polygon".into(),
            end_mill_diameter: "0".into(),
            ..FormState::default()
        };
        for (x, y) in [("0", "0"), ("4", "0"), ("4", "4")] {
            form.vertices.push(VertexRow::new(x, y));
        }
        form.add_vertex();
        assert_eq!(
            CalculationRequest::from_form(&form).unwrap_err(),
            InputError::MissingField {
                field: "Vertex 4 X".into()
            }
        );

        form.remove_vertex();
        let request = CalculationRequest::from_form(&form).unwrap();
        assert_eq!(request.shape.shape_type(), ShapeType::Polygon);
    }

    #[test]
    fn test_negative_diameter_rejected() {
        let form = FormState {
            end_mill_diameter: "-3".into(),
            ..rectangle_form()
        };
        assert!(matches!(
            CalculationRequest::from_form(&form),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_config_seeds_units_and_diameter() {
        let mut config = Config::default();
        config.units.end_mill = MeasurementSystem::Imperial;
        config.tool.end_mill_diameter = 12.7;
        let form = FormState::from_config(&config);
        assert_eq!(form.end_mill_units, MeasurementSystem::Imperial);
        assert_eq!(form.end_mill_diameter, "0.5");
        assert_eq!(form.shape, "Rectangle");
    }

    #[test]
    fn test_format_input() {
        assert_eq!(format_input(6.0), "6");
        assert_eq!(format_input(0.0), "0");
        assert_eq!(format_input(3.175), "3.175");
        let inches = MeasurementSystem::Imperial.from_mm(6.0);
        assert_eq!(format_input(inches).parse::<f64>().unwrap(), inches);
    }

    #[test]
    fn test_seeded_diameter_is_lossless() {
        let mut config = Config::default();
        config.units.end_mill = MeasurementSystem::Imperial;
        config.tool.end_mill_diameter = 6.0;
        let form = FormState {
            x2: "100".into(),
            y2: "50".into(),
            ..FormState::from_config(&config)
        };
        let request = CalculationRequest::from_form(&form).unwrap();
        assert!((request.tool.diameter() - 6.0).abs() < 1e-12);
    }
}
