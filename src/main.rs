// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->u32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32->f32 in graphics calculations

//! eDPI swipe visualizer, desktop simulator.
//!
//! Shows how far a given mouse DPI and in-game sensitivity move the crosshair for a
//! physical swipe, against a ruler of familiar 400/800/1600 eDPI configurations, and
//! animates a one-inch swipe with a fading trail.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `Tab` | Switch focused field (DPI / Sens) |
//! | `0`-`9`, `.` | Type into the focused field |
//! | `Backspace` | Delete from the focused field |
//! | `Up` / `Down` | Nudge the focused field (DPI +-50, Sens +-0.05) |
//! | `Left` / `Right` | Inches -0.1 / +0.1 (0 to 4) |
//! | `F1`-`F5` | Presets (400 x 2, 800 x 1, 1600 x 0.5, 3200 x 0.25, 800 x 2) |
//! | `Space` | Animate a one-inch swipe |
//! | `R` | Reset inches to 1.0 (cancels a running swipe) |
//! | `Y` | Switch between Visualizer and Debug page |
//!
//! Key repeat only applies to editing and stepping keys, so holding a toggle does not
//! spam it.
//!
//! # Frame Loop
//!
//! Each iteration handles window events, then either advances the running swipe (one
//! render per step) or redraws the static stage when the input snapshot changed. The
//! debug page redraws every frame. The loop sleeps out the rest of [`FRAME_TIME`].

use std::thread;
use std::time::Instant;

use edpi_swipe_visualizer::colors::BACKGROUND;
use edpi_swipe_visualizer::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use edpi_swipe_visualizer::controls::Input;
use edpi_swipe_visualizer::session::Session;
use edpi_swipe_visualizer::surface::DisplaySurface;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("eDPI Swipe Visualizer", &output_settings);

    display.clear(BACKGROUND).ok();
    // Window must be updated once before events are available.
    window.update(&display);

    let mut session = Session::new();

    loop {
        let frame_start = Instant::now();

        // ======================================================================
        // Input Handling
        // ======================================================================

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if let Some(input) = key_to_input(keycode)
                        && (!repeat || repeats(input))
                    {
                        session.handle_input(input, Instant::now());
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Rendering
        // ======================================================================

        {
            let mut surface = DisplaySurface::new(&mut display);
            session.draw(&mut surface, Instant::now());
        }

        let render_time = frame_start.elapsed();
        window.update(&display);

        // ======================================================================
        // Frame Timing and Profiling
        // ======================================================================

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        session.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}

// =============================================================================
// Keyboard Mapping
// =============================================================================

fn key_to_input(keycode: Keycode) -> Option<Input> {
    let input = match keycode {
        Keycode::Tab => Input::FocusNext,
        Keycode::Backspace => Input::Backspace,
        Keycode::Period | Keycode::KpPeriod => Input::Type('.'),
        Keycode::Up => Input::Nudge(1),
        Keycode::Down => Input::Nudge(-1),
        Keycode::Right => Input::StepInches(1),
        Keycode::Left => Input::StepInches(-1),
        Keycode::F1 => Input::Preset(0),
        Keycode::F2 => Input::Preset(1),
        Keycode::F3 => Input::Preset(2),
        Keycode::F4 => Input::Preset(3),
        Keycode::F5 => Input::Preset(4),
        Keycode::Space => Input::Animate,
        Keycode::R => Input::Reset,
        Keycode::Y => Input::TogglePage,
        other => return digit(other).map(Input::Type),
    };
    Some(input)
}

fn digit(keycode: Keycode) -> Option<char> {
    let c = match keycode {
        Keycode::Num0 | Keycode::Kp0 => '0',
        Keycode::Num1 | Keycode::Kp1 => '1',
        Keycode::Num2 | Keycode::Kp2 => '2',
        Keycode::Num3 | Keycode::Kp3 => '3',
        Keycode::Num4 | Keycode::Kp4 => '4',
        Keycode::Num5 | Keycode::Kp5 => '5',
        Keycode::Num6 | Keycode::Kp6 => '6',
        Keycode::Num7 | Keycode::Kp7 => '7',
        Keycode::Num8 | Keycode::Kp8 => '8',
        Keycode::Num9 | Keycode::Kp9 => '9',
        _ => return None,
    };
    Some(c)
}

/// Inputs that follow key repeat while held.
const fn repeats(input: Input) -> bool {
    matches!(
        input,
        Input::Type(_) | Input::Backspace | Input::Nudge(_) | Input::StepInches(_)
    )
}
