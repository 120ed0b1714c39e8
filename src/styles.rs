//! Font references for stage and debug text.
//!
//! All text goes through [`Surface::text`](crate::surface::Surface::text) with a
//! [`Font`] tag; [`font_for`] resolves the tag to a concrete mono font at compile time.

use embedded_graphics::mono_font::{MonoFont, ascii::FONT_6X10};
use profont::PROFONT_12_POINT;

use crate::surface::Font;

// =============================================================================
// Font References
// =============================================================================

/// Title font (`ProFont` 12pt, ~15 px line height).
pub const TITLE_FONT: &MonoFont = &PROFONT_12_POINT;

/// Small label font (6x10 pixels). Ruler labels and the debug page.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Resolve a surface font tag.
#[inline]
pub const fn font_for(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Title => TITLE_FONT,
        Font::Label => LABEL_FONT,
    }
}
