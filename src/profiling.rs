//! Profiling metrics and debug logging.
//!
//! Provides frame timing statistics, stage and animation counters, and a ring buffer
//! for debug messages displayed on the debug page.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//! let mut log = DebugLog::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... render work ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//!
//! // Log events:
//! log.push("Swipe started");
//! ```

use std::time::{Duration, Instant};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 64;

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing and stage statistics.
///
/// Updated every frame in the simulator loop.
pub struct ProfilingMetrics {
    // Frame timing (microseconds for precision)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent rendering
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    /// Minimum frame time observed
    pub frame_time_min_us: u32,
    /// Maximum frame time observed
    pub frame_time_max_us: u32,
    /// Rolling average frame time (exponential moving average)
    frame_time_avg_us: f32,

    // Counters
    /// Total loop iterations since startup
    pub total_frames: u64,
    /// Full stage redraws (static renders plus animation steps)
    pub stage_redraws: u32,
    /// Swipes started
    pub runs_started: u32,
    /// Swipes that reached one inch
    pub runs_completed: u32,
    /// Swipes dropped by a restart, reset or page switch
    pub runs_canceled: u32,
    /// Continuations that arrived for a run that was no longer active
    pub stale_steps: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Create new profiling metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            stage_redraws: 0,
            runs_started: 0,
            runs_completed: 0,
            runs_canceled: 0,
            stale_steps: 0,
            start_time: Instant::now(),
        }
    }

    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    /// Record frame timing for this frame.
    pub fn record_frame(&mut self, total_time: Duration, render_time: Duration, sleep_time: Duration) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Frames per second derived from the average frame time.
    pub fn fps(&self) -> f32 {
        if self.frame_time_avg_us > 0.0 {
            1_000_000.0 / self.frame_time_avg_us
        } else {
            0.0
        }
    }

    /// Uptime since metrics were created.
    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }

    #[inline]
    pub const fn inc_stage_redraws(&mut self) { self.stage_redraws += 1; }

    #[inline]
    pub const fn inc_runs_started(&mut self) { self.runs_started += 1; }

    #[inline]
    pub const fn inc_runs_completed(&mut self) { self.runs_completed += 1; }

    #[inline]
    pub const fn inc_runs_canceled(&mut self) { self.runs_canceled += 1; }

    #[inline]
    pub const fn inc_stale_steps(&mut self) { self.stale_steps += 1; }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer for debug log messages.
///
/// Stores the last [`LOG_BUFFER_SIZE`] messages; the oldest is dropped when full.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a log message, truncated to fit a line.
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Format whole seconds as zero-padded HH:MM:SS.
fn format_hms(total_secs: u64) -> String<12> {
    let hours = (total_secs / 3600).min(u64::from(u32::MAX)) as u32;
    let mins = ((total_secs % 3600) / 60) as u32;
    let secs = (total_secs % 60) as u32;

    let mut s = String::new();
    for (i, part) in [hours, mins, secs].into_iter().enumerate() {
        if i > 0 {
            s.push(':').ok();
        }
        if part < 10 {
            s.push('0').ok();
        }
        push_u32(&mut s, part);
    }
    s
}

/// Push a u32 value to a heapless string (no format! machinery).
fn push_u32<const N: usize>(s: &mut String<N>, mut val: u32) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
