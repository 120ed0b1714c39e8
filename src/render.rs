//! Frame rendering and redraw tracking.
//!
//! [`render`] draws one complete frame of the stage, back to front:
//!
//! | Layer | Widget | Position |
//! |-------|--------|----------|
//! | 1 | clear | full surface |
//! | 2 | title | `(origin_x, 28)` |
//! | 3 | baseline | origin to `origin + max(40, length)` on the vertical centre |
//! | 4 | start / end crosshairs | origin and `origin + length` |
//! | 5 | trail (optional) | each trail x, fading with age |
//! | 6 | ruler | 70 px below the baseline |
//!
//! Geometry comes from the surface size on every call, so a resized surface is picked up
//! by the next frame without any cached layout.
//!
//! # Redraw Tracking
//!
//! The stage only changes when its input changes. [`RenderState`] remembers what was last
//! put on screen so the host loop redraws only when the snapshot or the page differs,
//! after an explicit [`invalidate`](RenderState::invalidate), or on the first frame.

use crate::animations::Trail;
use crate::colors::{END_MARK, START_MARK};
use crate::config::CROSSHAIR_ALPHA;
use crate::pages::Page;
use crate::scale::{Geometry, edpi_to_length};
use crate::state::State;
use crate::surface::{PointF, Surface};
use crate::widgets::{draw_baseline, draw_crosshair, draw_ruler, draw_title, draw_trail};

/// Draw one complete frame for `state`, with an optional motion trail.
pub fn render<S: Surface>(surface: &mut S, state: &State, trail: Option<&Trail>) {
    let geometry = Geometry::from_size(surface.size());

    surface.clear();

    draw_title(surface, state, &geometry);

    let y = geometry.mid_y;
    let end_len = edpi_to_length(state.edpi(), state.inches(), geometry.drawable_width);

    draw_baseline(surface, &geometry, end_len);

    draw_crosshair(surface, PointF::new(geometry.origin_x, y), START_MARK, CROSSHAIR_ALPHA);
    draw_crosshair(surface, PointF::new(geometry.origin_x + end_len, y), END_MARK, CROSSHAIR_ALPHA);

    if let Some(trail) = trail.filter(|trail| !trail.is_empty()) {
        draw_trail(surface, trail, y);
    }

    draw_ruler(surface, &geometry);
}

// =============================================================================
// Redraw Tracking
// =============================================================================

/// Remembers the last frame put on screen.
pub struct RenderState {
    last_state: Option<State>,
    last_page: Option<Page>,
    /// Set by [`invalidate`](Self::invalidate); cleared by the next dirty check.
    forced: bool,
}

impl RenderState {
    /// Fresh tracker; the first check always reports dirty.
    pub const fn new() -> Self {
        Self {
            last_state: None,
            last_page: None,
            forced: false,
        }
    }

    /// Whether `state` on `page` differs from what is on screen. Records it as drawn.
    pub fn check_dirty(&mut self, state: &State, page: Page) -> bool {
        let dirty = self.forced || self.last_state.as_ref() != Some(state) || self.last_page != Some(page);
        self.mark_drawn(state, page);
        dirty
    }

    /// Record a frame drawn outside [`check_dirty`](Self::check_dirty) (an animation step).
    pub fn mark_drawn(&mut self, state: &State, page: Page) {
        self.last_state = Some(*state);
        self.last_page = Some(page);
        self.forced = false;
    }

    /// Force the next check to report dirty (display cleared externally, reset action).
    pub const fn invalidate(&mut self) { self.forced = true; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BASELINE, RULER_TICK};
    use crate::config::BASELINE_MIN_LENGTH;
    use crate::surface::recording::{Op, RecordingSurface};

    fn close(a: f32, b: f32) -> bool { (a - b).abs() < 0.01 }

    // -------------------------------------------------------------------------
    // render
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_starts_with_clear_and_title() {
        let mut surface = RecordingSurface::new(640, 320);
        render(&mut surface, &State::new(800.0, 2.0, 1.0), None);

        assert_eq!(surface.ops[0], Op::Clear);
        assert_eq!(surface.clears(), 1);
        let (title, at) = surface.texts().next().unwrap();
        assert_eq!(title, "DPI 800 x Sens 2 -> eDPI 1600 | Inches 1.0");
        assert_eq!(at, PointF::new(48.0, 28.0));
    }

    #[test]
    fn test_render_layer_order() {
        let mut surface = RecordingSurface::new(640, 320);
        let mut trail = Trail::new();
        trail.push(100.0);
        render(&mut surface, &State::new(800.0, 2.0, 1.0), Some(&trail));

        let strokes: Vec<_> = surface.strokes().collect();
        // baseline, 2 start, 2 end, 2 trail, ruler line, 3 ticks
        assert_eq!(strokes.len(), 1 + 2 + 2 + 2 + 1 + 3);
        assert_eq!(strokes[0].2.color, BASELINE);
        assert_eq!(strokes[1].2.color, START_MARK);
        assert_eq!(strokes[3].2.color, END_MARK);
        assert_eq!(strokes[5].2.color, END_MARK);
        assert!(strokes[5].2.alpha < CROSSHAIR_ALPHA);
        assert_eq!(strokes.last().unwrap().2.color, RULER_TICK);
    }

    #[test]
    fn test_render_scenario_800_x_2_over_two_inches() {
        // Drawable width of 1000 px.
        let mut surface = RecordingSurface::new(1096, 400);
        render(&mut surface, &State::new(800.0, 2.0, 2.0), None);

        let strokes: Vec<_> = surface.strokes().collect();
        let (from, to, _) = strokes[0];
        assert!(close(to.x - from.x, 850.0), "baseline length {}", to.x - from.x);

        // End crosshair's vertical stroke sits at origin + length.
        let (end_v, ..) = strokes[4];
        assert!(close(end_v.x, 48.0 + 850.0));
        assert_eq!(end_v.y, 200.0 - 10.0);
    }

    #[test]
    fn test_render_zero_length_keeps_visible_baseline_only() {
        let mut surface = RecordingSurface::new(640, 320);
        render(&mut surface, &State::new(800.0, 1.0, 0.0), None);

        let strokes: Vec<_> = surface.strokes().collect();
        let (from, to, _) = strokes[0];
        assert_eq!(to.x - from.x, BASELINE_MIN_LENGTH);

        // End crosshair is not moved by the baseline minimum.
        let (end_v, ..) = strokes[4];
        assert_eq!(end_v.x, 48.0);
    }

    #[test]
    fn test_render_saturated_length_stays_on_stage() {
        let mut surface = RecordingSurface::new(640, 320);
        render(&mut surface, &State::new(6400.0, 5.0, 40.0), None);

        let geometry = Geometry::from_size(surface.size());
        for (from, to, _) in surface.strokes() {
            assert!(from.x <= geometry.right_edge() + 10.0);
            assert!(to.x <= geometry.right_edge() + 10.0);
        }
    }

    #[test]
    fn test_render_empty_trail_draws_nothing_extra() {
        let mut with_empty = RecordingSurface::new(640, 320);
        let mut without = RecordingSurface::new(640, 320);
        let state = State::new(400.0, 1.0, 1.0);

        render(&mut with_empty, &state, Some(&Trail::new()));
        render(&mut without, &state, None);

        assert_eq!(with_empty.ops, without.ops);
    }

    // -------------------------------------------------------------------------
    // RenderState
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_check_is_dirty() {
        let mut rs = RenderState::new();
        assert!(rs.check_dirty(&State::new(800.0, 1.0, 1.0), Page::Visualizer));
    }

    #[test]
    fn test_unchanged_state_is_clean() {
        let mut rs = RenderState::new();
        let state = State::new(800.0, 1.0, 1.0);
        rs.check_dirty(&state, Page::Visualizer);
        assert!(!rs.check_dirty(&state, Page::Visualizer));
    }

    #[test]
    fn test_changed_state_or_page_is_dirty() {
        let mut rs = RenderState::new();
        let state = State::new(800.0, 1.0, 1.0);
        rs.check_dirty(&state, Page::Visualizer);

        assert!(rs.check_dirty(&state.with_inches(1.5), Page::Visualizer));
        assert!(rs.check_dirty(&state.with_inches(1.5), Page::Debug));
    }

    #[test]
    fn test_invalidate_forces_one_redraw() {
        let mut rs = RenderState::new();
        let state = State::new(800.0, 1.0, 1.0);
        rs.check_dirty(&state, Page::Visualizer);

        rs.invalidate();
        assert!(rs.check_dirty(&state, Page::Visualizer));
        assert!(!rs.check_dirty(&state, Page::Visualizer));
    }

    #[test]
    fn test_mark_drawn_suppresses_redraw() {
        let mut rs = RenderState::new();
        let state = State::new(800.0, 1.0, 0.42);
        rs.mark_drawn(&state, Page::Visualizer);
        assert!(!rs.check_dirty(&state, Page::Visualizer));
    }
}
