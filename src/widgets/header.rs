//! Title line.
//!
//! Formatted into a `heapless::String` with `core::fmt::Write`, so a frame never
//! allocates. Numbers use their shortest representation (`800`, `0.5`), eDPI is rounded
//! to a whole number and inches get one decimal place, with ties rounded up:
//!
//! ```text
//! DPI 800 x Sens 2 -> eDPI 1600 | Inches 1.0
//! ```

use core::fmt::Write;

use heapless::String;

use crate::colors::TITLE;
use crate::config::TITLE_Y;
use crate::scale::Geometry;
use crate::state::State;
use crate::surface::{Font, Label, PointF, Surface};

/// Capacity of the title buffer. Longer titles are truncated.
pub const TITLE_CAPACITY: usize = 96;

const TITLE_LABEL: Label = Label::new(Font::Title, TITLE);

/// Build the title text for a state.
pub fn format_title(state: &State) -> String<TITLE_CAPACITY> {
    let mut title = String::new();
    let _ = write!(
        title,
        "DPI {} x Sens {} -> eDPI {} | Inches {:.1}",
        state.dpi(),
        state.sens(),
        state.edpi().round() as u32,
        round_tenths_half_up(state.inches())
    );
    title
}

/// Round to one decimal place, ties away from zero for the non-negative inches.
///
/// `{:.1}` alone rounds exact ties to even (`0.25` to `0.2`).
fn round_tenths_half_up(value: f32) -> f64 { (f64::from(value) * 10.0 + 0.5).floor() / 10.0 }

/// Draw the title line at the swipe origin.
pub fn draw_title<S: Surface>(surface: &mut S, state: &State, geometry: &Geometry) {
    let title = format_title(state);
    surface.text(&title, PointF::new(geometry.origin_x, TITLE_Y), &TITLE_LABEL);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_title() {
        let title = format_title(&State::new(800.0, 2.0, 1.0));
        assert_eq!(title.as_str(), "DPI 800 x Sens 2 -> eDPI 1600 | Inches 1.0");
    }

    #[test]
    fn test_format_title_fractional_values() {
        let title = format_title(&State::new(1600.0, 0.5, 0.24));
        assert_eq!(title.as_str(), "DPI 1600 x Sens 0.5 -> eDPI 800 | Inches 0.2");

        let title = format_title(&State::new(450.0, 1.1, 2.96));
        assert_eq!(title.as_str(), "DPI 450 x Sens 1.1 -> eDPI 495 | Inches 3.0");
    }

    #[test]
    fn test_format_title_inches_ties_round_up() {
        let title = format_title(&State::new(800.0, 1.0, 0.25));
        assert_eq!(title.as_str(), "DPI 800 x Sens 1 -> eDPI 800 | Inches 0.3");

        let title = format_title(&State::new(800.0, 1.0, 1.25));
        assert_eq!(title.as_str(), "DPI 800 x Sens 1 -> eDPI 800 | Inches 1.3");

        let title = format_title(&State::new(800.0, 1.0, 0.0));
        assert!(title.ends_with("Inches 0.0"), "{title}");
    }

    #[test]
    fn test_format_title_clamped_input() {
        let title = format_title(&State::from_raw("-5", "99", 0.0));
        assert_eq!(title.as_str(), "DPI 100 x Sens 5 -> eDPI 500 | Inches 0.0");
    }
}
