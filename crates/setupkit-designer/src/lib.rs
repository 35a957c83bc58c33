//! # SetupKit Designer
//!
//! Workpiece shapes and the geometry that turns edge coordinates into a
//! machine reference point.
//!
//! ## Core Components
//!
//! - **Engine**: pure functions for rectangle and circle centers, the
//!   shoelace polygon centroid, and offset locations measured from the
//!   right and top edges
//! - **Model**: the [`Shape`] variants with their bounds and outline paths
//! - **Tool**: [`EndMill`] radius compensation
//!
//! ## Architecture
//!
//! ```text
//! Shape (Rectangle | Circle | Polygon)
//!   ├── bounds()           -> Bounds for the renderer
//!   ├── outline()          -> lyon Path in world millimeters
//!   └── reference_point()  -> engine::* center / centroid
//!
//! EndMill
//!   └── compensate()       -> final machine point
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use setupkit_designer::{EndMill, PartRectangle, PartShape};
//!
//! let part = PartRectangle::new(0.0, 100.0, 0.0, 50.0);
//! let center = part.reference_point().unwrap();
//! let tool = EndMill::new(10.0).unwrap();
//! let target = tool.compensate(center);
//! assert_eq!((target.x, target.y), (45.0, 20.0));
//! ```

pub mod engine;
pub mod model;
pub mod tool;

pub use engine::{
    circle_center, custom_location, polygon_centroid, rectangle_center, signed_area,
    AREA_EPSILON,
};
pub use model::{Bounds, PartCircle, PartPolygon, PartRectangle, PartShape, Shape, ShapeType};
pub use setupkit_core::{Point2D, Point3D};
pub use tool::EndMill;
