//! Debug/profiling page rendering.
//!
//! Displays frame timing, stage and swipe counters, and the debug log terminal.
//! Accessible by pressing `Y` to toggle from the visualizer.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ DEBUG VIEW                              UP 00:12:34       62 FPS │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ TIMING              │ STAGE             │ SWIPES                 │
//! │ Frame:  16.1ms      │ Frames: 12847     │ Started:   12          │
//! │ Render: 0.5ms       │ Redraws: 431      │ Completed: 9           │
//! │ Sleep:  15.6ms      │ eDPI:   1600      │ Canceled:  3           │
//! │ Min:    16.0ms      │ Inches: 1.0       │ Stale:     2           │
//! │ Max:    25.1ms      │                   │ Active:    no          │
//! │ Avg:    16.2ms      │                   │                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ > Swipe #12 started                                              │
//! │ > Page: Debug                                                    │
//! │ > _                                                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, GREEN, ORANGE, WHITE, YELLOW};
use crate::profiling::{DebugLog, ProfilingMetrics};
use crate::state::State;
use crate::surface::{Font, Label, Pen, PointF, Surface};

// =============================================================================
// Layout Constants
// =============================================================================

const HEADER_Y: f32 = 14.0;
const HEADER_DIVIDER_Y: f32 = 22.0;
const SECTION_HEADER_Y: f32 = 38.0;
const STATS_Y: f32 = 54.0;
const STAT_LINE_HEIGHT: f32 = 14.0;
const LOG_DIVIDER_Y: f32 = 150.0;
const LOG_Y: f32 = 168.0;
const LOG_LINE_HEIGHT: f32 = 14.0;

const COL1_X: f32 = 6.0;
const COL2_X: f32 = 220.0;
const COL3_X: f32 = 430.0;

const UPTIME_X: f32 = 400.0;
const FPS_X: f32 = 560.0;

/// Left inset of the log text after the prompt.
const LOG_TEXT_DX: f32 = 12.0;

// =============================================================================
// Styles
// =============================================================================

const fn label(color: Rgb565) -> Label { Label::new(Font::Label, color) }

const HEADER: Label = label(GREEN);
const SECTION: Label = label(GRAY);
const VALUE: Label = label(WHITE);
const HIGHLIGHT: Label = label(YELLOW);
const LOG_PROMPT: Label = label(GREEN);
const LOG_TEXT: Label = label(ORANGE);

const DIVIDER_PEN: Pen = Pen::new(GRAY, 1.0);

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Everything the debug page shows besides metrics and the log.
#[derive(Clone, Copy, Debug)]
pub struct DebugSnapshot {
    /// Current input snapshot.
    pub state: State,
    /// Whether a swipe is running.
    pub swipe_active: bool,
}

/// Draw the debug/profiling page.
pub fn draw_debug_page<S: Surface>(surface: &mut S, metrics: &ProfilingMetrics, log: &DebugLog, snapshot: &DebugSnapshot) {
    surface.clear();

    let width = surface.size().width as f32;

    draw_header(surface, metrics);
    draw_divider(surface, HEADER_DIVIDER_Y, width);

    for (title, x) in [("TIMING", COL1_X), ("STAGE", COL2_X), ("SWIPES", COL3_X)] {
        surface.text(title, PointF::new(x, SECTION_HEADER_Y), &SECTION);
    }

    draw_timing_column(surface, metrics);
    draw_stage_column(surface, metrics, &snapshot.state);
    draw_swipe_column(surface, metrics, snapshot.swipe_active);

    draw_divider(surface, LOG_DIVIDER_Y, width);
    draw_log_terminal(surface, log);
}

fn draw_header<S: Surface>(surface: &mut S, metrics: &ProfilingMetrics) {
    surface.text("DEBUG VIEW", PointF::new(COL1_X, HEADER_Y), &HEADER);

    let mut uptime: String<24> = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    surface.text(&uptime, PointF::new(UPTIME_X, HEADER_Y), &VALUE);

    let mut fps: String<12> = String::new();
    let _ = write!(fps, "{:.0} FPS", metrics.fps());
    surface.text(&fps, PointF::new(FPS_X, HEADER_Y), &VALUE);
}

/// Draw one stat line per entry, top to bottom from [`STATS_Y`].
fn draw_column<S: Surface>(surface: &mut S, x: f32, lines: &[(&String<24>, &Label)]) {
    for (row, (text, style)) in lines.iter().enumerate() {
        surface.text(text, PointF::new(x, STATS_Y + row as f32 * STAT_LINE_HEIGHT), style);
    }
}

fn ms(us: u32) -> f32 { us as f32 / 1000.0 }

fn draw_timing_column<S: Surface>(surface: &mut S, metrics: &ProfilingMetrics) {
    let min_us = if metrics.frame_time_min_us == u32::MAX { 0 } else { metrics.frame_time_min_us };

    let mut frame: String<24> = String::new();
    let _ = write!(frame, "Frame:  {:.1}ms", ms(metrics.frame_time_us));
    let mut render: String<24> = String::new();
    let _ = write!(render, "Render: {:.1}ms", ms(metrics.render_time_us));
    let mut sleep: String<24> = String::new();
    let _ = write!(sleep, "Sleep:  {:.1}ms", ms(metrics.sleep_time_us));
    let mut min: String<24> = String::new();
    let _ = write!(min, "Min:    {:.1}ms", ms(min_us));
    let mut max: String<24> = String::new();
    let _ = write!(max, "Max:    {:.1}ms", ms(metrics.frame_time_max_us));
    let mut avg: String<24> = String::new();
    let _ = write!(avg, "Avg:    {:.1}ms", ms(metrics.frame_time_avg_us()));

    draw_column(
        surface,
        COL1_X,
        &[
            (&frame, &VALUE),
            (&render, &VALUE),
            (&sleep, &VALUE),
            (&min, &HIGHLIGHT),
            (&max, &HIGHLIGHT),
            (&avg, &HIGHLIGHT),
        ],
    );
}

fn draw_stage_column<S: Surface>(surface: &mut S, metrics: &ProfilingMetrics, state: &State) {
    let mut frames: String<24> = String::new();
    let _ = write!(frames, "Frames:  {}", metrics.total_frames);
    let mut redraws: String<24> = String::new();
    let _ = write!(redraws, "Redraws: {}", metrics.stage_redraws);
    let mut edpi: String<24> = String::new();
    let _ = write!(edpi, "eDPI:    {}", state.edpi().round() as u32);
    let mut inches: String<24> = String::new();
    let _ = write!(inches, "Inches:  {:.2}", state.inches());

    draw_column(
        surface,
        COL2_X,
        &[(&frames, &VALUE), (&redraws, &VALUE), (&edpi, &HIGHLIGHT), (&inches, &HIGHLIGHT)],
    );
}

fn draw_swipe_column<S: Surface>(surface: &mut S, metrics: &ProfilingMetrics, active: bool) {
    let mut started: String<24> = String::new();
    let _ = write!(started, "Started:   {}", metrics.runs_started);
    let mut completed: String<24> = String::new();
    let _ = write!(completed, "Completed: {}", metrics.runs_completed);
    let mut canceled: String<24> = String::new();
    let _ = write!(canceled, "Canceled:  {}", metrics.runs_canceled);
    let mut stale: String<24> = String::new();
    let _ = write!(stale, "Stale:     {}", metrics.stale_steps);
    let mut running: String<24> = String::new();
    let _ = write!(running, "Active:    {}", if active { "yes" } else { "no" });

    draw_column(
        surface,
        COL3_X,
        &[
            (&started, &VALUE),
            (&completed, &VALUE),
            (&canceled, &VALUE),
            (&stale, &VALUE),
            (&running, &HIGHLIGHT),
        ],
    );
}

fn draw_log_terminal<S: Surface>(surface: &mut S, log: &DebugLog) {
    let mut y = LOG_Y;

    for line in log.iter() {
        surface.text(">", PointF::new(COL1_X, y), &LOG_PROMPT);
        surface.text(line, PointF::new(COL1_X + LOG_TEXT_DX, y), &LOG_TEXT);
        y += LOG_LINE_HEIGHT;
    }

    surface.text("> _", PointF::new(COL1_X, y), &LOG_PROMPT);
}

fn draw_divider<S: Surface>(surface: &mut S, y: f32, width: f32) {
    surface.stroke(PointF::new(2.0, y), PointF::new(width - 2.0, y), &DIVIDER_PEN);
}
