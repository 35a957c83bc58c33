//! # SetupKit
//!
//! Reference point calculator for CNC workpiece setup. Given edge
//! coordinates and an end-mill diameter it reports:
//! - Rectangle and circle centers
//! - Polygon centroids (shoelace formula)
//! - Locations offset from the right and top edges
//!
//! Every point is compensated by the end-mill radius and can be drawn to
//! SVG together with the part outline and the zero point.
//!
//! ## Architecture
//!
//! 1. **setupkit-core** - Points, units, error types
//! 2. **setupkit-designer** - Shapes, geometry engine, tool compensation
//! 3. **setupkit-visualizer** - Viewport fitting, scenes, SVG output
//! 4. **setupkit-settings** - Configuration file handling
//! 5. **setupkit-ui** - Form parsing, view model, calculation session
//! 6. **setupkit** - Command line front end (this crate)

pub mod cli;

pub use setupkit_core::{
    Error, GeometryError, InputError, MeasurementSystem, Point2D, Point3D, Result,
};
pub use setupkit_designer::{EndMill, PartShape, Shape, ShapeType};
pub use setupkit_settings::Config;
pub use setupkit_ui::{
    CalculationOutcome, CalculationRequest, Field, FormState, History, Session, ViewModel,
};
pub use setupkit_visualizer::{to_svg_document, write_svg, Scene};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version line shown by `--version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so results on stdout stay clean. The level
/// defaults to INFO and follows `RUST_LOG` when set.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
