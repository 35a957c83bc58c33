//! SVG output for part drawings.
//!
//! `path_data` maps a world-space lyon path through the viewport into SVG
//! path commands; `to_svg_document` writes a whole [`Scene`] as a
//! standalone document.

use std::fmt::Write as _;
use std::path::Path as FsPath;

use lyon::path::{Event, Path};

use crate::scene::{Primitive, Scene};
use crate::viewport::PartViewport;

const OUTLINE_WIDTH: f64 = 2.0;

/// Converts a world-space path to SVG path data in surface pixels.
pub fn path_data(path: &Path, viewport: &PartViewport) -> String {
    let px = |p: lyon::math::Point| viewport.world_to_pixel(p.x as f64, p.y as f64);
    let mut d = String::new();

    for event in path.iter() {
        match event {
            Event::Begin { at } => {
                let (x, y) = px(at);
                let _ = write!(d, "M {:.2} {:.2} ", x, y);
            }
            Event::Line { to, .. } => {
                let (x, y) = px(to);
                let _ = write!(d, "L {:.2} {:.2} ", x, y);
            }
            Event::Quadratic { ctrl, to, .. } => {
                let (cx, cy) = px(ctrl);
                let (x, y) = px(to);
                let _ = write!(d, "Q {:.2} {:.2} {:.2} {:.2} ", cx, cy, x, y);
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                let (c1x, c1y) = px(ctrl1);
                let (c2x, c2y) = px(ctrl2);
                let (x, y) = px(to);
                let _ = write!(
                    d,
                    "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2} ",
                    c1x, c1y, c2x, c2y, x, y
                );
            }
            Event::End { close, .. } => {
                if close {
                    d.push_str("Z ");
                }
            }
        }
    }

    d.trim_end().to_string()
}

/// Serializes a scene as a standalone SVG document.
pub fn to_svg_document(scene: &Scene) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#,
        w = scene.width,
        h = scene.height
    );
    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{:.2}" height="{:.2}" fill="white" />"#,
        scene.width, scene.height
    );

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Rectangle {
                x,
                y,
                width,
                height,
                stroke,
            } => {
                let _ = writeln!(
                    svg,
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="{}" />"#,
                    x,
                    y,
                    width,
                    height,
                    stroke.as_svg(),
                    OUTLINE_WIDTH
                );
            }
            Primitive::Circle { cx, cy, r, stroke } => {
                let _ = writeln!(
                    svg,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}" stroke-width="{}" />"#,
                    cx,
                    cy,
                    r,
                    stroke.as_svg(),
                    OUTLINE_WIDTH
                );
            }
            Primitive::Path { d, stroke } => {
                let _ = writeln!(
                    svg,
                    r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" />"#,
                    d,
                    stroke.as_svg(),
                    OUTLINE_WIDTH
                );
            }
            Primitive::Marker { x, y, kind } => {
                let _ = writeln!(
                    svg,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" />"#,
                    x,
                    y,
                    kind.radius(),
                    kind.color().as_svg()
                );
            }
            Primitive::Text {
                x,
                y,
                text,
                anchor,
                fill,
            } => {
                let _ = writeln!(
                    svg,
                    r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" dominant-baseline="{}" fill="{}" font-family="sans-serif" font-size="12">{}</text>"#,
                    x,
                    y,
                    anchor.text_anchor(),
                    anchor.baseline(),
                    fill.as_svg(),
                    escape_text(text)
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes the scene to `path` as an SVG document.
pub fn write_svg(scene: &Scene, path: &FsPath) -> std::io::Result<()> {
    std::fs::write(path, to_svg_document(scene))?;
    tracing::info!(path = %path.display(), "wrote part drawing");
    Ok(())
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
