//! Input status line along the bottom of the visualizer.
//!
//! The simulator has no form widgets, so the raw text of both fields, the focused field
//! and the inches control are echoed here after every stage frame, together with a key
//! reminder.
//!
//! ```text
//! DPI [800_]  Sens 1  In 1.0   F1-F5 presets  Space swipe  R reset  Y debug
//! ```

use core::fmt::Write;

use heapless::String;

use crate::colors::{GRAY, RULER_LABEL};
use crate::controls::{Controls, Field};
use crate::surface::{Font, Label, PointF, Surface};

/// Distance of the status baseline above the bottom edge.
const STATUS_BOTTOM_INSET: f32 = 8.0;

const STATUS_X: f32 = 6.0;

/// Horizontal gap between the field echo and the key hints.
const HINT_GAP: f32 = 18.0;

/// Advance of one [`Font::Label`] character.
const CHAR_WIDTH: f32 = 6.0;

const FIELDS: Label = Label::new(Font::Label, RULER_LABEL);
const HINTS: Label = Label::new(Font::Label, GRAY);

const KEY_HINTS: &str = "F1-F5 presets  Space swipe  R reset  Y debug";

/// Build the field echo; the focused field is bracketed with a cursor.
pub fn format_fields(controls: &Controls) -> String<64> {
    let mut line = String::new();
    let (dpi_open, dpi_close, sens_open, sens_close) = match controls.focus() {
        Field::Dpi => ("[", "_]", "", ""),
        Field::Sens => ("", "", "[", "_]"),
    };
    let _ = write!(
        line,
        "DPI {dpi_open}{}{dpi_close}  Sens {sens_open}{}{sens_close}  In {:.1}",
        controls.dpi_text(),
        controls.sens_text(),
        controls.inches()
    );
    line
}

/// Draw the status line at the bottom of the surface.
pub fn draw_status_line<S: Surface>(surface: &mut S, controls: &Controls) {
    let y = surface.size().height as f32 - STATUS_BOTTOM_INSET;
    let fields = format_fields(controls);

    surface.text(&fields, PointF::new(STATUS_X, y), &FIELDS);

    let hints_x = STATUS_X + fields.len() as f32 * CHAR_WIDTH + HINT_GAP;
    surface.text(KEY_HINTS, PointF::new(hints_x, y), &HINTS);
}
