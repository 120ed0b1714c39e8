//! Reference ruler beneath the baseline.
//!
//! The ruler spans the drawable width. Ticks mark where 400, 800 and 1600 eDPI end up
//! after exactly one inch, through the same [`edpi_to_length`] mapping as the swipe, so
//! the current swipe can be read against familiar configurations.

use core::fmt::Write;

use heapless::String;

use crate::colors::{RULER, RULER_LABEL, RULER_TICK};
use crate::config::{RULER_LABEL_DX, RULER_LABEL_DY, RULER_MARKS, RULER_OFFSET_Y, RULER_TICK_HALF, RULER_WIDTH};
use crate::scale::{Geometry, edpi_to_length};
use crate::surface::{Font, Label, Pen, PointF, Surface};

const RULER_PEN: Pen = Pen::new(RULER, RULER_WIDTH);
const TICK_PEN: Pen = Pen::new(RULER_TICK, RULER_WIDTH);
const TICK_LABEL: Label = Label::new(Font::Label, RULER_LABEL);

/// Row the ruler is drawn on.
#[inline]
pub fn ruler_y(geometry: &Geometry) -> f32 { geometry.mid_y + RULER_OFFSET_Y }

/// Draw the ruler line, its ticks and tick labels.
pub fn draw_ruler<S: Surface>(surface: &mut S, geometry: &Geometry) {
    let y = ruler_y(geometry);

    surface.stroke(
        PointF::new(geometry.origin_x, y),
        PointF::new(geometry.right_edge(), y),
        &RULER_PEN,
    );

    for mark in RULER_MARKS {
        let x = geometry.origin_x + edpi_to_length(mark as f32, 1.0, geometry.drawable_width);
        surface.stroke(
            PointF::new(x, y - RULER_TICK_HALF),
            PointF::new(x, y + RULER_TICK_HALF),
            &TICK_PEN,
        );

        let mut label: String<8> = String::new();
        let _ = write!(label, "{mark}");
        surface.text(&label, PointF::new(x + RULER_LABEL_DX, y + RULER_LABEL_DY), &TICK_LABEL);
    }
}
