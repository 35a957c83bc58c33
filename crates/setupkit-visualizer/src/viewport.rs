//! Fit-to-surface coordinate transformation.
//!
//! Maps world millimeters onto a drawing surface measured in pixels. The
//! part's bounding box is scaled uniformly so it fits inside the surface
//! minus a margin on every side.
//!
//! ```text
//! scale    = min(avail_w / part_w, avail_h / part_h)
//! pixel_x  = margin_x - min_x * scale + world_x * scale
//! pixel_y  = margin_y - min_y * scale + world_y * scale
//! ```
//!
//! Pixel Y grows downward and world Y is not flipped, so a part's `y1`
//! (top edge) is drawn above its `y2` (bottom edge) when `y1 < y2`.

use setupkit_core::Point2D;
use setupkit_designer::Bounds;

/// Margin reserved on each side, as a fraction of the surface size.
pub const DEFAULT_MARGIN_RATIO: f64 = 0.1;

/// A fitted transform from world millimeters to surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartViewport {
    canvas_width: f64,
    canvas_height: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl PartViewport {
    /// Fits `bounds` into a `canvas_width` x `canvas_height` surface with the
    /// default 10% margin.
    ///
    /// Returns `None` when the part has zero width or height, or when the
    /// surface has no room left after the margins.
    pub fn fit(canvas_width: f64, canvas_height: f64, bounds: &Bounds) -> Option<Self> {
        Self::fit_with_margin(canvas_width, canvas_height, bounds, DEFAULT_MARGIN_RATIO)
    }

    /// As [`fit`](Self::fit) with an explicit margin ratio in `[0, 0.5)`.
    pub fn fit_with_margin(
        canvas_width: f64,
        canvas_height: f64,
        bounds: &Bounds,
        margin_ratio: f64,
    ) -> Option<Self> {
        if bounds.is_degenerate() || !(0.0..0.5).contains(&margin_ratio) {
            return None;
        }

        let available_width = canvas_width * (1.0 - 2.0 * margin_ratio);
        let available_height = canvas_height * (1.0 - 2.0 * margin_ratio);
        if available_width <= 0.0 || available_height <= 0.0 {
            return None;
        }

        let scale_x = available_width / bounds.width();
        let scale_y = available_height / bounds.height();
        let scale = scale_x.min(scale_y);
        if !scale.is_finite() {
            return None;
        }

        let margin_x = canvas_width * margin_ratio;
        let margin_y = canvas_height * margin_ratio;

        Some(Self {
            canvas_width,
            canvas_height,
            scale,
            offset_x: margin_x - bounds.min_x * scale,
            offset_y: margin_y - bounds.min_y * scale,
        })
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Pixels per millimeter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Converts world coordinates to pixel coordinates.
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            self.offset_x + world_x * self.scale,
            self.offset_y + world_y * self.scale,
        )
    }

    /// Converts world coordinates to pixel coordinates (using Point2D).
    pub fn world_point_to_pixel(&self, point: &Point2D) -> (f64, f64) {
        self.world_to_pixel(point.x, point.y)
    }

    /// Converts pixel coordinates back to world coordinates.
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point2D {
        Point2D::new(
            (pixel_x - self.offset_x) / self.scale,
            (pixel_y - self.offset_y) / self.scale,
        )
    }

    /// Converts a world length to a pixel length.
    pub fn length_to_pixels(&self, length: f64) -> f64 {
        length * self.scale
    }
}
