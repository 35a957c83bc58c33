//! Drawing primitives in surface pixels.

use serde::{Deserialize, Serialize};

/// Stroke and fill colors used on the part drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Part outline and measurements
    Blue,
    /// Center / centroid marker
    Red,
    /// Zero point
    Black,
    /// Auxiliary points (offset location, polygon vertices)
    Green,
}

impl Color {
    pub fn as_svg(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Black => "black",
            Color::Green => "green",
        }
    }
}

/// Which point of the text box sits on the label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// Left edge, vertically centered
    West,
    /// Top edge, horizontally centered
    North,
    /// Bottom-right corner
    SouthEast,
}

impl Anchor {
    pub fn text_anchor(self) -> &'static str {
        match self {
            Anchor::West => "start",
            Anchor::North => "middle",
            Anchor::SouthEast => "end",
        }
    }

    pub fn baseline(self) -> &'static str {
        match self {
            Anchor::West => "middle",
            Anchor::North => "hanging",
            Anchor::SouthEast => "text-after-edge",
        }
    }
}

/// What a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Center,
    ZeroPoint,
    Auxiliary,
}

impl MarkerKind {
    pub fn radius(self) -> f64 {
        match self {
            MarkerKind::Center | MarkerKind::ZeroPoint => 5.0,
            MarkerKind::Auxiliary => 3.0,
        }
    }

    pub fn color(self) -> Color {
        match self {
            MarkerKind::Center => Color::Red,
            MarkerKind::ZeroPoint => Color::Black,
            MarkerKind::Auxiliary => Color::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Axis-aligned rectangle outline from two mapped corners
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: Color,
    },
    /// Circle outline
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        stroke: Color,
    },
    /// Closed outline given as SVG path data
    Path { d: String, stroke: Color },
    /// Filled dot
    Marker { x: f64, y: f64, kind: MarkerKind },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: Anchor,
        fill: Color,
    },
}

/// Everything drawn for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn markers(&self, kind: MarkerKind) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Marker { x, y, kind: k } if *k == kind => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
