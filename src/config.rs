//! Application configuration constants.
//!
//! Everything the visualizer needs to know about layout, input bounds, calibration and
//! animation timing lives here as `const`. Values that depend on the current surface size
//! (drawable width, vertical centre) are derived per frame by
//! [`Geometry`](crate::scale::Geometry) from these constants.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Simulator display width in pixels.
pub const SCREEN_WIDTH: u32 = 640;

/// Simulator display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Simulator window scale factor.
pub const WINDOW_SCALE: u32 = 2;

// =============================================================================
// Layout Configuration
// =============================================================================

/// Inner padding on both sides of the stage.
pub const PADDING: f32 = 28.0;

/// Fixed margin between the padding and the swipe origin.
pub const LEFT_MARGIN: f32 = 20.0;

/// X coordinate where every swipe starts.
pub const ORIGIN_X: f32 = PADDING + LEFT_MARGIN;

/// Extra width reserved to the right of the drawable area (on top of both paddings).
pub const RIGHT_RESERVE: f32 = 40.0;

/// Baseline of the title text.
pub const TITLE_Y: f32 = 28.0;

/// Baseline is never drawn shorter than this, so a zero-movement state is still visible.
/// Crosshairs and the ruler are not subject to it.
pub const BASELINE_MIN_LENGTH: f32 = 40.0;

/// Baseline stroke width.
pub const BASELINE_WIDTH: f32 = 8.0;

/// Half length of each crosshair stroke.
pub const CROSSHAIR_ARM: f32 = 10.0;

/// Crosshair stroke width.
pub const CROSSHAIR_WIDTH: f32 = 2.0;

/// Crosshair opacity for the start and end markers.
pub const CROSSHAIR_ALPHA: f32 = 0.95;

/// Trail opacity of the oldest sample.
pub const TRAIL_ALPHA_FLOOR: f32 = 0.15;

/// Opacity added across the trail from oldest to newest.
pub const TRAIL_ALPHA_SPAN: f32 = 0.35;

/// Vertical distance from the baseline down to the ruler.
pub const RULER_OFFSET_Y: f32 = 70.0;

/// Ruler line width.
pub const RULER_WIDTH: f32 = 1.5;

/// Half height of each ruler tick.
pub const RULER_TICK_HALF: f32 = 8.0;

/// Tick label offset relative to the tick (left, down).
pub const RULER_LABEL_DX: f32 = -12.0;
pub const RULER_LABEL_DY: f32 = 20.0;

/// Reference ticks on the ruler, as eDPI evaluated at exactly one inch.
pub const RULER_MARKS: [u32; 3] = [400, 800, 1600];

// =============================================================================
// Input Bounds
// =============================================================================

pub const DPI_MIN: f32 = 100.0;
pub const DPI_MAX: f32 = 6400.0;

pub const SENS_MIN: f32 = 0.01;
pub const SENS_MAX: f32 = 5.0;

/// Inches have no upper bound in the state model; this bounds the host's inches control.
pub const INCHES_CONTROL_MAX: f32 = 4.0;

/// Step of the host's inches control.
pub const INCHES_CONTROL_STEP: f32 = 0.1;

/// Inches value restored by the reset action.
pub const RESET_INCHES: f32 = 1.0;

// =============================================================================
// Scale Calibration
// =============================================================================

/// eDPI of the "typical high" calibration point.
pub const REFERENCE_EDPI: f32 = 1600.0;

/// Swipe length of the calibration point in inches.
pub const REFERENCE_INCHES: f32 = 2.0;

/// Movement units (eDPI x inches) of the calibration point.
pub const REFERENCE_UNITS: f32 = REFERENCE_EDPI * REFERENCE_INCHES;

/// Fraction of the drawable width the calibration point fills.
pub const REFERENCE_FILL: f32 = 0.85;

// =============================================================================
// Animation Configuration
// =============================================================================

/// Length of one simulated swipe.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(900);

/// Distance of the simulated swipe in inches.
pub const SWIPE_INCHES: f32 = 1.0;

/// Number of recent positions kept in the motion trail.
pub const TRAIL_CAPACITY: usize = 20;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The simulator loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

// =============================================================================
// Presets
// =============================================================================

/// A `(dpi, sens)` pair offered by the preset buttons. Presets leave inches untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub label: &'static str,
    pub dpi: f32,
    pub sens: f32,
}

pub const PRESETS: [Preset; 5] = [
    Preset { label: "400 x 2", dpi: 400.0, sens: 2.0 },
    Preset { label: "800 x 1", dpi: 800.0, sens: 1.0 },
    Preset { label: "1600 x 0.5", dpi: 1600.0, sens: 0.5 },
    Preset { label: "3200 x 0.25", dpi: 3200.0, sens: 0.25 },
    Preset { label: "800 x 2", dpi: 800.0, sens: 2.0 },
];
