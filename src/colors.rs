//! Color palette and opacity blending.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue. The palette
//! below is the stage's CSS palette converted by dropping the low bits of each channel
//! (`r >> 3`, `g >> 2`, `b >> 3`).
//!
//! # Opacity
//!
//! Rgb565 carries no alpha channel. Strokes with an opacity below 1.0 are drawn in a
//! color pre-blended toward [`BACKGROUND`] with [`blend_rgb565`], which is exact for
//! the stage because every translucent element is drawn over the cleared background.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Stage Colors
// =============================================================================

/// Stage background (#0b1020).
pub const BACKGROUND: Rgb565 = Rgb565::new(1, 4, 4);

/// Title text (#cfd6ff).
pub const TITLE: Rgb565 = Rgb565::new(25, 53, 31);

/// Baseline stroke (#223059).
pub const BASELINE: Rgb565 = Rgb565::new(4, 12, 11);

/// Start crosshair (#6ee7ff).
pub const START_MARK: Rgb565 = Rgb565::new(13, 57, 31);

/// End crosshair and trail (#8b80ff).
pub const END_MARK: Rgb565 = Rgb565::new(17, 32, 31);

/// Ruler line (#27305a).
pub const RULER: Rgb565 = Rgb565::new(4, 12, 11);

/// Ruler ticks (#ff6b6b).
pub const RULER_TICK: Rgb565 = Rgb565::new(31, 26, 13);

/// Ruler tick labels (#ffb4b4).
pub const RULER_LABEL: Rgb565 = Rgb565::new(31, 45, 22);

// =============================================================================
// Debug Page Colors
// =============================================================================

pub const BLACK: Rgb565 = Rgb565::BLACK;
pub const WHITE: Rgb565 = Rgb565::WHITE;
pub const GREEN: Rgb565 = Rgb565::GREEN;
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Orange log text. RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for dividers and section headers. RGB565: (8, 16, 8).
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

// =============================================================================
// Blending
// =============================================================================

/// Blend `over` on top of `under` with the given opacity.
///
/// `alpha` is clamped to `[0.0, 1.0]`; 0.0 returns `under`, 1.0 returns `over`.
/// Uses 8-bit fixed-point per channel.
pub fn blend_rgb565(under: Rgb565, over: Rgb565, alpha: f32) -> Rgb565 {
    let a = (alpha.clamp(0.0, 1.0) * 256.0) as i32;

    let (ur, ug, ub) = channels(under);
    let (or, og, ob) = channels(over);

    let mix = |u: i32, o: i32| u + (((o - u) * a) >> 8);

    Rgb565::new(
        mix(ur, or).clamp(0, 31) as u8,
        mix(ug, og).clamp(0, 63) as u8,
        mix(ub, ob).clamp(0, 31) as u8,
    )
}

/// Split a color into its raw 5-6-5 channels.
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_alpha_zero_is_under() {
        assert_eq!(blend_rgb565(BLACK, WHITE, 0.0), BLACK);
    }

    #[test]
    fn test_blend_alpha_one_is_over() {
        assert_eq!(blend_rgb565(BLACK, WHITE, 1.0), WHITE);
        assert_eq!(blend_rgb565(BACKGROUND, END_MARK, 1.0), END_MARK);
    }

    #[test]
    fn test_blend_alpha_clamped() {
        assert_eq!(blend_rgb565(BLACK, WHITE, 3.0), WHITE);
        assert_eq!(blend_rgb565(BLACK, WHITE, -1.0), BLACK);
    }

    #[test]
    fn test_blend_midpoint() {
        let (r, g, b) = channels(blend_rgb565(BLACK, WHITE, 0.5));
        assert!((14..=16).contains(&r), "red {r} should be near 15");
        assert!((30..=32).contains(&g), "green {g} should be near 31");
        assert!((14..=16).contains(&b), "blue {b} should be near 15");
    }

    #[test]
    fn test_blend_fainter_is_closer_to_background() {
        let faint = blend_rgb565(BACKGROUND, END_MARK, 0.15);
        let strong = blend_rgb565(BACKGROUND, END_MARK, 0.5);
        let (fr, ..) = channels(faint);
        let (sr, ..) = channels(strong);
        assert!(fr < sr, "lower alpha should stay closer to the background");
    }
}
