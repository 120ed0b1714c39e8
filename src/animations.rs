//! One-inch swipe animation and its motion trail.
//!
//! # Run Lifecycle
//!
//! ```text
//!   Idle --start()--> Running --step() at dt = 1--> Idle
//!                        |
//!                        +--start() / cancel()--> (run invalidated)
//! ```
//!
//! [`AnimationController::start`] freezes the current DPI and sensitivity, records the
//! start time and returns a [`RunId`]. The host's frame loop then calls
//! [`AnimationController::step`] once per frame with that token. Each step:
//!
//! 1. computes `dt = clamp((now - start) / duration, 0, 1)`
//! 2. eases it with [`ease_out_cubic`] to get the swiped inches (`1.0 x eased`)
//! 3. maps the inches to a pixel position and pushes it onto the [`Trail`]
//! 4. renders the frame with the trail
//!
//! and returns [`Step::Continue`] with the token to call next frame, or
//! [`Step::Finished`] once `dt` reaches 1 (the last frame is at exactly 1.0 inch).
//!
//! # Cancellation
//!
//! Only one run is active at a time. Starting a new run or calling
//! [`AnimationController::cancel`] drops the active run; any continuation token the host
//! still holds for it is stale, and stepping a stale token is a no-op that returns
//! [`Step::Stale`] without touching the surface.

use std::time::Instant;

use heapless::Deque;

use crate::config::{ANIMATION_DURATION, SWIPE_INCHES, TRAIL_CAPACITY};
use crate::render::render;
use crate::scale::{Geometry, edpi_to_length};
use crate::state::State;
use crate::surface::Surface;

// =============================================================================
// Easing
// =============================================================================

/// Cubic ease-out: fast start, decelerating to a stop. `t` is clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// =============================================================================
// Trail
// =============================================================================

/// Bounded history of recent swipe positions (pixel x), oldest first.
///
/// Holds at most [`TRAIL_CAPACITY`] samples; pushing onto a full trail drops the oldest.
#[derive(Debug)]
pub struct Trail {
    positions: Deque<f32, TRAIL_CAPACITY>,
}

impl Trail {
    pub const fn new() -> Self { Self { positions: Deque::new() } }

    /// Append the newest position.
    pub fn push(&mut self, x: f32) {
        if self.positions.is_full() {
            self.positions.pop_front();
        }
        self.positions.push_back(x).ok();
    }

    /// Positions from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ { self.positions.iter().copied() }

    /// Most recent position.
    pub fn latest(&self) -> Option<f32> { self.positions.back().copied() }

    #[inline]
    pub fn len(&self) -> usize { self.positions.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }
}

impl Default for Trail {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Animation Run
// =============================================================================

/// Identity token of one animation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunId(u32);

impl RunId {
    /// Sequence number of the run (starts at 1).
    #[inline]
    pub const fn get(self) -> u32 { self.0 }
}

/// Outcome of one animation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Frame rendered; call `step` again next frame with `next`.
    Continue { next: RunId, state: State },
    /// Final frame rendered at the full swipe distance; the controller is idle.
    Finished { state: State },
    /// The token does not belong to the active run. Nothing was rendered.
    Stale,
}

/// An in-flight run. Owned only by the controller.
struct AnimationRun {
    id: RunId,
    /// DPI and sensitivity captured at start; inches is replaced every step.
    frozen: State,
    started: Instant,
    /// Highest progress reached so far, so a late-arriving timestamp never moves backwards.
    progress: f32,
    trail: Trail,
}

impl AnimationRun {
    fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / ANIMATION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Drives the swipe animation. Holds at most one active run.
pub struct AnimationController {
    next_id: u32,
    active: Option<AnimationRun>,
}

impl AnimationController {
    pub const fn new() -> Self {
        Self {
            next_id: 1,
            active: None,
        }
    }

    /// Start a new run from `state`'s DPI and sensitivity, canceling any active run.
    pub fn start(&mut self, state: &State, now: Instant) -> RunId {
        self.cancel();

        let id = RunId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);

        self.active = Some(AnimationRun {
            id,
            frozen: state.with_inches(0.0),
            started: now,
            progress: 0.0,
            trail: Trail::new(),
        });
        id
    }

    /// Invalidate the active run, if any. Returns its token.
    pub fn cancel(&mut self) -> Option<RunId> { self.active.take().map(|run| run.id) }

    /// Token of the active run.
    #[inline]
    pub fn active_run(&self) -> Option<RunId> { self.active.as_ref().map(|run| run.id) }

    #[inline]
    pub const fn is_running(&self) -> bool { self.active.is_some() }

    /// Advance the run identified by `token` to `now` and render the frame.
    pub fn step<S: Surface>(&mut self, token: RunId, now: Instant, surface: &mut S) -> Step {
        let Some(run) = self.active.as_mut().filter(|run| run.id == token) else {
            return Step::Stale;
        };

        run.progress = run.progress.max(run.progress_at(now));
        let inches = SWIPE_INCHES * ease_out_cubic(run.progress);
        let state = run.frozen.with_inches(inches);

        let geometry = Geometry::from_size(surface.size());
        let length = edpi_to_length(state.edpi(), inches, geometry.drawable_width);
        run.trail.push(geometry.origin_x + length);

        render(surface, &state, Some(&run.trail));

        if run.progress < 1.0 {
            Step::Continue { next: token, state }
        } else {
            self.active = None;
            Step::Finished { state }
        }
    }
}

impl Default for AnimationController {
    fn default() -> Self { Self::new() }
}
