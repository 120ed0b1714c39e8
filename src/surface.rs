//! Drawing-surface capability used by the renderer.
//!
//! The renderer never touches a display type directly. It draws through [`Surface`]:
//! clear, stroke a line segment with a [`Pen`], draw text with a [`Label`], and query
//! the current size. This keeps the core free of any global display and lets tests use
//! a recording fake.
//!
//! [`DisplaySurface`] adapts any `embedded-graphics` `DrawTarget<Color = Rgb565>` (the
//! simulator display, a framebuffer, `MockDisplay`) to the trait:
//!
//! - Coordinates are rounded to the pixel grid.
//! - Opacity is pre-blended toward [`BACKGROUND`] (Rgb565 has no alpha).
//! - Round caps are filled circles at both ends of the segment.
//! - [`Font`] maps to the mono fonts in [`crate::styles`].

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::Text;

use crate::colors::{BACKGROUND, blend_rgb565};
use crate::styles::font_for;

// =============================================================================
// Drawing Vocabulary
// =============================================================================

/// Sub-pixel position on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Nearest pixel.
    #[inline]
    pub fn to_point(self) -> Point { Point::new(self.x.round() as i32, self.y.round() as i32) }
}

/// Shape of a stroke's ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Stroke settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Rgb565,
    pub width: f32,
    pub cap: LineCap,
    /// Opacity in `[0.0, 1.0]`.
    pub alpha: f32,
}

impl Pen {
    /// Opaque pen with butt caps.
    pub const fn new(color: Rgb565, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub const fn with_cap(self, cap: LineCap) -> Self { Self { cap, ..self } }

    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self { Self { alpha, ..self } }
}

/// Fonts the stage uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    /// Title line (~14 px).
    Title,
    /// Ruler tick labels and debug text (~12 px).
    Label,
}

/// Text settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub font: Font,
    pub color: Rgb565,
}

impl Label {
    pub const fn new(font: Font, color: Rgb565) -> Self { Self { font, color } }
}

// =============================================================================
// Surface Capability
// =============================================================================

/// 2D drawing capability the renderer requires.
///
/// Implementations take the current size as given; device-pixel-ratio fitting happens
/// outside before a render.
pub trait Surface {
    /// Current drawable size in pixels.
    fn size(&self) -> Size;

    /// Clear the whole surface to the background.
    fn clear(&mut self);

    /// Stroke a straight segment.
    fn stroke(&mut self, from: PointF, to: PointF, pen: &Pen);

    /// Draw a line of text with its alphabetic baseline at `at`.
    fn text(&mut self, text: &str, at: PointF, label: &Label);
}

// =============================================================================
// embedded-graphics Adapter
// =============================================================================

/// [`Surface`] over an `embedded-graphics` draw target.
pub struct DisplaySurface<'a, D> {
    display: &'a mut D,
}

impl<'a, D> DisplaySurface<'a, D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    pub const fn new(display: &'a mut D) -> Self { Self { display } }
}

impl<D> Surface for DisplaySurface<'_, D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn size(&self) -> Size { self.display.size() }

    fn clear(&mut self) { self.display.clear(BACKGROUND).ok(); }

    fn stroke(&mut self, from: PointF, to: PointF, pen: &Pen) {
        let color = blend_rgb565(BACKGROUND, pen.color, pen.alpha);
        let width = pen.width.round().max(1.0) as u32;
        let (start, end) = (from.to_point(), to.to_point());

        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(self.display)
            .ok();

        if pen.cap == LineCap::Round && width > 1 {
            let cap_style = PrimitiveStyle::with_fill(color);
            for center in [start, end] {
                Circle::with_center(center, width)
                    .into_styled(cap_style)
                    .draw(self.display)
                    .ok();
            }
        }
    }

    fn text(&mut self, text: &str, at: PointF, label: &Label) {
        let style = MonoTextStyle::new(font_for(label.font), label.color);
        Text::new(text, at.to_point(), style).draw(self.display).ok();
    }
}

// =============================================================================
// Recording Fake (tests)
// =============================================================================

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One recorded surface call.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear,
        Stroke { from: PointF, to: PointF, pen: Pen },
        Text { text: String, at: PointF, label: Label },
    }

    /// Surface that records every call instead of drawing.
    pub struct RecordingSurface {
        pub size: Size,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                ops: Vec::new(),
            }
        }

        pub fn strokes(&self) -> impl Iterator<Item = (PointF, PointF, Pen)> + '_ {
            self.ops.iter().filter_map(|op| match op {
                Op::Stroke { from, to, pen } => Some((*from, *to, *pen)),
                _ => None,
            })
        }

        pub fn texts(&self) -> impl Iterator<Item = (&str, PointF)> + '_ {
            self.ops.iter().filter_map(|op| match op {
                Op::Text { text, at, .. } => Some((text.as_str(), *at)),
                _ => None,
            })
        }

        pub fn clears(&self) -> usize { self.ops.iter().filter(|op| **op == Op::Clear).count() }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Size { self.size }

        fn clear(&mut self) { self.ops.push(Op::Clear); }

        fn stroke(&mut self, from: PointF, to: PointF, pen: &Pen) {
            self.ops.push(Op::Stroke { from, to, pen: *pen });
        }

        fn text(&mut self, text: &str, at: PointF, label: &Label) {
            self.ops.push(Op::Text {
                text: text.into(),
                at,
                label: *label,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::{END_MARK, TITLE, WHITE};

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn test_point_rounding() {
        assert_eq!(PointF::new(1.4, 2.6).to_point(), Point::new(1, 3));
        assert_eq!(PointF::new(-0.6, 0.5).to_point(), Point::new(-1, 1));
    }

    #[test]
    fn test_pen_builders() {
        let pen = Pen::new(WHITE, 2.0).with_cap(LineCap::Round).with_alpha(0.5);
        assert_eq!(pen.cap, LineCap::Round);
        assert_eq!(pen.alpha, 0.5);
        assert_eq!(Pen::new(WHITE, 1.0).cap, LineCap::Butt);
    }

    #[test]
    fn test_display_surface_reports_size() {
        let mut display = mock();
        let surface = DisplaySurface::new(&mut display);
        assert_eq!(surface.size(), Size::new(64, 64));
    }

    #[test]
    fn test_display_surface_clear_fills_background() {
        let mut display = mock();
        DisplaySurface::new(&mut display).clear();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BACKGROUND));
        assert_eq!(display.get_pixel(Point::new(63, 63)), Some(BACKGROUND));
    }

    #[test]
    fn test_display_surface_opaque_stroke() {
        let mut display = mock();
        DisplaySurface::new(&mut display).stroke(
            PointF::new(2.0, 10.0),
            PointF::new(20.0, 10.0),
            &Pen::new(END_MARK, 1.0),
        );
        assert_eq!(display.get_pixel(Point::new(10, 10)), Some(END_MARK));
        assert_eq!(display.get_pixel(Point::new(10, 20)), None);
    }

    #[test]
    fn test_display_surface_translucent_stroke_is_blended() {
        let mut display = mock();
        DisplaySurface::new(&mut display).stroke(
            PointF::new(2.0, 10.0),
            PointF::new(20.0, 10.0),
            &Pen::new(END_MARK, 1.0).with_alpha(0.3),
        );
        let expected = blend_rgb565(BACKGROUND, END_MARK, 0.3);
        assert_ne!(expected, END_MARK);
        assert_eq!(display.get_pixel(Point::new(10, 10)), Some(expected));
    }

    #[test]
    fn test_display_surface_round_cap_extends_past_end() {
        let mut display = mock();
        DisplaySurface::new(&mut display).stroke(
            PointF::new(10.0, 30.0),
            PointF::new(40.0, 30.0),
            &Pen::new(WHITE, 8.0).with_cap(LineCap::Round),
        );
        // Butt caps stop at x = 40; the round cap reaches a few pixels further.
        assert_eq!(display.get_pixel(Point::new(42, 30)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(8, 30)), Some(WHITE));
    }

    #[test]
    fn test_display_surface_text_draws_pixels() {
        let mut display = mock();
        DisplaySurface::new(&mut display).text("8", PointF::new(4.0, 20.0), &Label::new(Font::Label, TITLE));
        let drawn = (0..64)
            .flat_map(|x| (0..64).map(move |y| Point::new(x, y)))
            .filter(|p| display.get_pixel(*p) == Some(TITLE))
            .count();
        assert!(drawn > 0, "text should set some pixels");
    }
}
