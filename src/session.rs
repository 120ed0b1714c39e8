//! Host session: everything the simulator frame loop carries between iterations.
//!
//! The window, keyboard mapping and frame pacing stay in the binary. [`Session`] owns the
//! rest: the input controls, the animation controller and its pending continuation, the
//! current page, redraw tracking, metrics and the debug log.
//!
//! # Per Frame
//!
//! 1. [`Session::handle_input`] for every decoded key press
//! 2. [`Session::draw`] once
//!
//! On the visualizer page `draw` steps the pending swipe if there is one (the step
//! renders), otherwise redraws the static stage when the input snapshot changed. The
//! debug page redraws every frame.
//!
//! # Cancellation
//!
//! - Restart: the active swipe is canceled and replaced; its token is dropped.
//! - Reset: the swipe is canceled but the pending token is kept. The next `draw` steps
//!   it, gets [`Step::Stale`], counts and logs it, and falls through to a static redraw.
//! - Page switch: the swipe is canceled and the pending token dropped.

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

use crate::animations::{AnimationController, RunId, Step};
use crate::controls::{Controls, Input, Response};
use crate::pages::Page;
use crate::profiling::{DebugLog, LOG_LINE_LENGTH, ProfilingMetrics};
use crate::render::{RenderState, render};
use crate::screens::{DebugSnapshot, draw_debug_page, draw_status_line};
use crate::state::State;
use crate::surface::Surface;

/// Host-side state of the visualizer.
pub struct Session {
    controls: Controls,
    controller: AnimationController,
    /// Continuation token for the next swipe step, if one is due.
    pending: Option<RunId>,
    page: Page,
    render_state: RenderState,
    metrics: ProfilingMetrics,
    log: DebugLog,
}

impl Session {
    pub fn new() -> Self {
        let mut log = DebugLog::new();
        log.push("System started");
        Self {
            controls: Controls::new(),
            controller: AnimationController::new(),
            pending: None,
            page: Page::default(),
            render_state: RenderState::new(),
            metrics: ProfilingMetrics::new(),
            log,
        }
    }

    #[inline]
    pub const fn controls(&self) -> &Controls { &self.controls }

    #[inline]
    pub const fn page(&self) -> Page { self.page }

    #[inline]
    pub const fn metrics(&self) -> &ProfilingMetrics { &self.metrics }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    /// Token the next [`draw`](Self::draw) will step, if any.
    #[inline]
    pub const fn pending(&self) -> Option<RunId> { self.pending }

    #[inline]
    pub const fn is_swiping(&self) -> bool { self.controller.is_running() }

    /// Record loop timing for the debug page.
    pub fn record_frame(&mut self, total_time: Duration, render_time: Duration, sleep_time: Duration) {
        self.metrics.record_frame(total_time, render_time, sleep_time);
    }

    /// Apply one decoded key press at time `now`.
    pub fn handle_input(&mut self, input: Input, now: Instant) {
        // Only the page toggle works on the debug page.
        if self.page == Page::Debug && input != Input::TogglePage {
            return;
        }

        match self.controls.handle(input) {
            Response::Ignored => {}
            // Field text and focus are echoed on the status line even when the state is unchanged.
            Response::Changed => self.render_state.invalidate(),
            Response::PresetApplied(preset) => {
                self.render_state.invalidate();
                let mut line: String<LOG_LINE_LENGTH> = String::new();
                let _ = write!(line, "Preset: {}", preset.label);
                self.log.push(&line);
            }
            Response::Animate => {
                self.cancel_swipe("restarted");
                let token = self.controller.start(&self.controls.state(), now);
                self.pending = Some(token);
                self.metrics.inc_runs_started();

                let mut line: String<LOG_LINE_LENGTH> = String::new();
                let _ = write!(line, "Swipe #{} started", token.get());
                self.log.push(&line);
            }
            Response::Reset => {
                // The pending continuation is kept; it comes back stale and is dropped.
                self.cancel_swipe("reset");
                self.render_state.invalidate();
                self.log.push("Reset: inches 1.0");
            }
            Response::TogglePage => {
                self.page = self.page.toggle();
                self.cancel_swipe("page switch");
                self.pending = None;

                let mut line: String<LOG_LINE_LENGTH> = String::new();
                let _ = write!(line, "Page: {}", self.page.name());
                self.log.push(&line);
            }
        }
    }

    fn cancel_swipe(&mut self, reason: &str) {
        if let Some(run) = self.controller.cancel() {
            self.metrics.inc_runs_canceled();

            let mut line: String<LOG_LINE_LENGTH> = String::new();
            let _ = write!(line, "Swipe #{} canceled ({reason})", run.get());
            self.log.push(&line);
        }
    }

    /// Draw the current page for time `now`.
    pub fn draw<S: Surface>(&mut self, surface: &mut S, now: Instant) {
        match self.page {
            Page::Visualizer => {
                let mut drawn = false;
                if let Some(token) = self.pending.take() {
                    drawn = self.step_swipe(token, surface, now);
                }
                if !drawn && self.render_state.check_dirty(&self.controls.state(), self.page) {
                    render(surface, &self.controls.state(), None);
                    self.metrics.inc_stage_redraws();
                    drawn = true;
                }
                if drawn {
                    draw_status_line(surface, &self.controls);
                }
            }
            Page::Debug => {
                let snapshot = DebugSnapshot {
                    state: self.controls.state(),
                    swipe_active: self.controller.is_running(),
                };
                draw_debug_page(surface, &self.metrics, &self.log, &snapshot);
                self.render_state.mark_drawn(&snapshot.state, self.page);
            }
        }
    }

    /// Advance the pending swipe. Returns whether a frame was rendered.
    fn step_swipe<S: Surface>(&mut self, token: RunId, surface: &mut S, now: Instant) -> bool {
        match self.controller.step(token, now, surface) {
            Step::Continue { next, state } => {
                self.mirror_step(&state);
                self.pending = Some(next);
                true
            }
            Step::Finished { state } => {
                self.mirror_step(&state);
                self.metrics.inc_runs_completed();

                let mut line: String<LOG_LINE_LENGTH> = String::new();
                let _ = write!(line, "Swipe #{} completed", token.get());
                self.log.push(&line);
                true
            }
            Step::Stale => {
                self.metrics.inc_stale_steps();

                let mut line: String<LOG_LINE_LENGTH> = String::new();
                let _ = write!(line, "Stale step for #{} dropped", token.get());
                self.log.push(&line);
                false
            }
        }
    }

    /// Write the animated inches back into the inches control and record the frame.
    fn mirror_step(&mut self, state: &State) {
        self.controls.set_inches(state.inches());
        self.render_state.mark_drawn(state, self.page);
        self.metrics.inc_stage_redraws();
    }
}

impl Default for Session {
    fn default() -> Self { Self::new() }
}
