//! Baseline, crosshair markers and the motion trail.
//!
//! # Trail Fading
//!
//! Trail samples are drawn oldest first. Sample `i` of `len` gets opacity
//! `TRAIL_ALPHA_FLOOR + (i / len) * TRAIL_ALPHA_SPAN`, so the oldest sample sits at the
//! floor and each newer one is a little more opaque.

use embedded_graphics::pixelcolor::Rgb565;

use crate::animations::Trail;
use crate::colors::{BASELINE, END_MARK};
use crate::config::{
    BASELINE_MIN_LENGTH,
    BASELINE_WIDTH,
    CROSSHAIR_ARM,
    CROSSHAIR_WIDTH,
    TRAIL_ALPHA_FLOOR,
    TRAIL_ALPHA_SPAN,
};
use crate::scale::Geometry;
use crate::surface::{LineCap, Pen, PointF, Surface};

const BASELINE_PEN: Pen = Pen::new(BASELINE, BASELINE_WIDTH).with_cap(LineCap::Round);

/// Draw the thick baseline from the origin.
///
/// The drawn length is at least [`BASELINE_MIN_LENGTH`] even when `end_len` is shorter.
pub fn draw_baseline<S: Surface>(surface: &mut S, geometry: &Geometry, end_len: f32) {
    let y = geometry.mid_y;
    let length = end_len.max(BASELINE_MIN_LENGTH);
    surface.stroke(
        PointF::new(geometry.origin_x, y),
        PointF::new(geometry.origin_x + length, y),
        &BASELINE_PEN,
    );
}

/// Draw a crosshair: one horizontal and one vertical stroke crossing at `center`.
pub fn draw_crosshair<S: Surface>(surface: &mut S, center: PointF, color: Rgb565, alpha: f32) {
    let pen = Pen::new(color, CROSSHAIR_WIDTH).with_alpha(alpha);
    let PointF { x, y } = center;
    surface.stroke(PointF::new(x - CROSSHAIR_ARM, y), PointF::new(x + CROSSHAIR_ARM, y), &pen);
    surface.stroke(PointF::new(x, y - CROSSHAIR_ARM), PointF::new(x, y + CROSSHAIR_ARM), &pen);
}

/// Opacity of trail sample `index` out of `len`.
#[inline]
pub fn trail_alpha(index: usize, len: usize) -> f32 {
    if len == 0 {
        return TRAIL_ALPHA_FLOOR;
    }
    TRAIL_ALPHA_FLOOR + (index as f32 / len as f32) * TRAIL_ALPHA_SPAN
}

/// Draw a faded crosshair at every trail position on row `y`.
pub fn draw_trail<S: Surface>(surface: &mut S, trail: &Trail, y: f32) {
    let len = trail.len();
    for (i, x) in trail.iter().enumerate() {
        draw_crosshair(surface, PointF::new(x, y), END_MARK, trail_alpha(i, len));
    }
}
