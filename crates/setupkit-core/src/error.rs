//! Error handling for SetupKit
//!
//! Every failure a calculation can hit falls into one of these groups:
//! - Input errors (malformed or missing fields, unknown selectors)
//! - Geometry errors (polygons the centroid formula cannot handle)
//! - I/O errors (history export)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Input error type
///
/// Raised at the form boundary before any geometry runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A field holds text that is not a number
    #[error("Invalid number in {field}: {reason}")]
    InvalidNumber {
        /// Label of the offending field.
        field: String,
        /// Parser message.
        reason: String,
    },

    /// A required field was left blank
    #[error("Missing value for {field}")]
    MissingField {
        /// Label of the blank field.
        field: String,
    },

    /// The shape selector holds an unknown value
    #[error("Unsupported shape: {shape}")]
    UnsupportedShape {
        /// The selector text.
        shape: String,
    },

    /// The unit selector holds an unknown value
    #[error("Unknown measurement system: {value}")]
    UnknownUnit {
        /// The selector text.
        value: String,
    },

    /// A parsed value is outside the range the field accepts
    #[error("Value out of range for {field}: {value}")]
    OutOfRange {
        /// Label of the field.
        field: String,
        /// The rejected value.
        value: f64,
    },
}

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polygon needs at least three vertices
    #[error("Polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// Zero signed area: collinear or coincident vertices
    #[error("Degenerate polygon: signed area {area} is too close to zero")]
    DegeneratePolygon {
        /// The signed area that was computed.
        area: f64,
    },
}

/// Main error type for SetupKit
#[derive(Error, Debug)]
pub enum Error {
    /// Input error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an input error
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Input(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
