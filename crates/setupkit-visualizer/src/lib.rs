//! # SetupKit Visualizer
//!
//! Draws a part and its reference points on a bounded 2D surface.
//!
//! - [`viewport::PartViewport`] fits the part's bounds into the surface
//!   with a 10% margin per side and maps world millimeters to pixels
//! - [`renderer::render`] builds a [`scene::Scene`] of outline, markers
//!   and labels
//! - [`svg`] writes scenes as SVG documents
//!
//! A part with zero width or height produces no scene; that is not an
//! error.

pub mod renderer;
pub mod scene;
pub mod svg;
pub mod viewport;

pub use renderer::{render, render_with_margin, Drawing};
pub use scene::{Anchor, Color, MarkerKind, Primitive, Scene};
pub use svg::{path_data, to_svg_document, write_svg};
pub use viewport::{PartViewport, DEFAULT_MARGIN_RATIO};
