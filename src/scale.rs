//! Movement-unit to pixel mapping and per-frame stage geometry.
//!
//! # Calibration
//!
//! A swipe is measured in movement units: `eDPI x inches`. The scale is chosen so the
//! calibration point (1600 eDPI over 2 inches, [`REFERENCE_UNITS`]) fills
//! [`REFERENCE_FILL`] of the drawable width. Larger configurations grow past it until
//! they saturate at the full drawable width; lengths never wrap and never go negative.

use embedded_graphics::geometry::Size;

use crate::config::{ORIGIN_X, PADDING, REFERENCE_FILL, REFERENCE_UNITS, RIGHT_RESERVE};

/// Stage geometry derived from the surface size. Recomputed on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    /// X coordinate every swipe starts from.
    pub origin_x: f32,
    /// Vertical centre of the surface; the baseline sits here.
    pub mid_y: f32,
    /// Horizontal extent available to the swipe (never negative).
    pub drawable_width: f32,
}

impl Geometry {
    pub fn from_size(size: Size) -> Self {
        let width = size.width as f32;
        let height = size.height as f32;
        Self {
            width,
            height,
            origin_x: ORIGIN_X,
            mid_y: height / 2.0,
            drawable_width: (width - PADDING * 2.0 - RIGHT_RESERVE).max(0.0),
        }
    }

    /// Right end of the drawable area.
    #[inline]
    pub fn right_edge(&self) -> f32 { self.origin_x + self.drawable_width }
}

/// Map `edpi x inches` to a pixel length inside `drawable_width`.
///
/// Negative inches count as 0. The result is in `[0, drawable_width]`.
pub fn edpi_to_length(edpi: f32, inches: f32, drawable_width: f32) -> f32 {
    let drawable_width = drawable_width.max(0.0);
    let units = (edpi * inches.max(0.0)).max(0.0);
    let target = REFERENCE_FILL * drawable_width;
    let scale = target / REFERENCE_UNITS;
    (units * scale).min(drawable_width)
}
