//! Screens and overlays outside the visualizer stage itself.
//!
//! - **Debug Page** ([`debug`]): frame timing, swipe counters and the debug log terminal
//!   (toggled with `Y` at runtime)
//! - **Status Line** ([`status`]): echo of the input fields drawn over each stage frame

mod debug;
mod status;

pub use debug::{DebugSnapshot, draw_debug_page};
pub use status::{draw_status_line, format_fields};
