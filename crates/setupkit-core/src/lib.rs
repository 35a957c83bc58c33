//! # SetupKit Core
//!
//! Core types and utilities for SetupKit.
//! Provides the point value types shared by every crate, millimeter/inch
//! conversion, and the error taxonomy used across the workspace.

pub mod data;
pub mod error;
pub mod units;

pub use data::{Point2D, Point3D};
pub use error::{Error, GeometryError, InputError, Result};
pub use units::{to_imperial, to_metric, MeasurementSystem, MM_PER_INCH};
