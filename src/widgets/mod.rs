//! Stage components drawn by [`render`](crate::render::render).
//!
//! - [`header`]: Title line with the current DPI, sensitivity, eDPI and inches
//! - [`primitives`]: Baseline, crosshair markers and the fading motion trail
//! - [`ruler`]: Reference ruler with 400/800/1600 eDPI ticks at one inch
//!
//! Every widget draws through [`Surface`](crate::surface::Surface) and takes the
//! per-frame [`Geometry`](crate::scale::Geometry) instead of reading layout globals, so
//! the stage follows the surface size.

mod header;
mod primitives;
mod ruler;

pub use header::{TITLE_CAPACITY, draw_title, format_title};
pub use primitives::{draw_baseline, draw_crosshair, draw_trail, trail_alpha};
pub use ruler::{draw_ruler, ruler_y};
