//! Host input controls: the DPI and sensitivity text fields and the inches control.
//!
//! The fields hold raw text exactly as typed. Nothing is validated here;
//! [`Controls::state`] hands the text to [`State::from_raw`], which coerces and clamps.
//! Keyboard mapping lives in the simulator binary, which translates key presses into
//! [`Input`]s.
//!
//! # Inputs
//!
//! | Input | Effect |
//! |-------|--------|
//! | `FocusNext` | switch the focused field (DPI / Sens) |
//! | `Type(c)` | append a digit or `.` to the focused field |
//! | `Backspace` | delete the last character of the focused field |
//! | `Nudge(n)` | step the focused field by `n` x 50 DPI or `n` x 0.05 sens |
//! | `StepInches(n)` | step the inches control by `n` x 0.1 within `[0, 4]` |
//! | `Preset(i)` | load preset `i` into both fields |
//! | `Animate` | ask the host to start a swipe |
//! | `Reset` | inches back to 1.0; the host cancels any swipe |
//! | `TogglePage` | ask the host to switch page |

use core::fmt::Write;

use heapless::String;

use crate::config::{
    DPI_MAX,
    DPI_MIN,
    INCHES_CONTROL_MAX,
    INCHES_CONTROL_STEP,
    PRESETS,
    Preset,
    RESET_INCHES,
    SENS_MAX,
    SENS_MIN,
};
use crate::state::{State, parse_or_zero};

/// Maximum characters in a text field.
pub const FIELD_CAPACITY: usize = 10;

/// DPI change per nudge.
pub const DPI_NUDGE: f32 = 50.0;

/// Sensitivity change per nudge.
pub const SENS_NUDGE: f32 = 0.05;

const INITIAL_DPI: &str = "800";
const INITIAL_SENS: &str = "1";

/// Text field with keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Dpi,
    Sens,
}

impl Field {
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Dpi => Self::Sens,
            Self::Sens => Self::Dpi,
        }
    }
}

/// One user input, already decoded from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    FocusNext,
    Type(char),
    Backspace,
    Nudge(i8),
    StepInches(i8),
    Preset(usize),
    Animate,
    Reset,
    TogglePage,
}

/// What the host has to do after an input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Response {
    /// Input had no effect.
    Ignored,
    /// A field or the inches control changed.
    Changed,
    /// A preset was loaded.
    PresetApplied(Preset),
    /// Start a swipe.
    Animate,
    /// Inches were reset; cancel any swipe.
    Reset,
    /// Switch page.
    TogglePage,
}

/// State of the input controls.
pub struct Controls {
    dpi: String<FIELD_CAPACITY>,
    sens: String<FIELD_CAPACITY>,
    inches: f32,
    focus: Field,
}

impl Controls {
    /// Controls with the initial field values and inches at 1.0.
    pub fn new() -> Self {
        let mut controls = Self {
            dpi: String::new(),
            sens: String::new(),
            inches: RESET_INCHES,
            focus: Field::Dpi,
        };
        controls.dpi.push_str(INITIAL_DPI).ok();
        controls.sens.push_str(INITIAL_SENS).ok();
        controls
    }

    /// Current snapshot of the controls, validated.
    pub fn state(&self) -> State { State::from_raw(&self.dpi, &self.sens, self.inches) }

    #[inline]
    pub fn dpi_text(&self) -> &str { &self.dpi }

    #[inline]
    pub fn sens_text(&self) -> &str { &self.sens }

    #[inline]
    pub const fn inches(&self) -> f32 { self.inches }

    #[inline]
    pub const fn focus(&self) -> Field { self.focus }

    /// Mirror an externally driven inches value (the animated swipe) into the control.
    pub fn set_inches(&mut self, inches: f32) { self.inches = clamp_inches(inches); }

    /// Apply one input.
    pub fn handle(&mut self, input: Input) -> Response {
        match input {
            Input::FocusNext => {
                self.focus = self.focus.next();
                Response::Changed
            }
            Input::Type(c) => changed_if(self.type_char(c)),
            Input::Backspace => changed_if(self.focused_mut().pop().is_some()),
            Input::Nudge(steps) => {
                self.nudge(steps);
                Response::Changed
            }
            Input::StepInches(steps) => {
                let stepped = self.inches + f32::from(steps) * INCHES_CONTROL_STEP;
                // Snap to the control's step grid so repeated steps do not drift.
                self.inches = clamp_inches((stepped / INCHES_CONTROL_STEP).round() * INCHES_CONTROL_STEP);
                Response::Changed
            }
            Input::Preset(index) => match PRESETS.get(index) {
                Some(preset) => {
                    self.apply_preset(preset);
                    Response::PresetApplied(*preset)
                }
                None => Response::Ignored,
            },
            Input::Animate => Response::Animate,
            Input::Reset => {
                self.inches = RESET_INCHES;
                Response::Reset
            }
            Input::TogglePage => Response::TogglePage,
        }
    }

    fn focused_mut(&mut self) -> &mut String<FIELD_CAPACITY> {
        match self.focus {
            Field::Dpi => &mut self.dpi,
            Field::Sens => &mut self.sens,
        }
    }

    fn type_char(&mut self, c: char) -> bool {
        let field = self.focused_mut();
        match c {
            '0'..='9' => field.push(c).is_ok(),
            '.' if !field.contains('.') => field.push(c).is_ok(),
            _ => false,
        }
    }

    fn nudge(&mut self, steps: i8) {
        let steps = f32::from(steps);
        match self.focus {
            Field::Dpi => {
                let value = (parse_or_zero(&self.dpi) + steps * DPI_NUDGE).clamp(DPI_MIN, DPI_MAX);
                set_number(&mut self.dpi, value.round());
            }
            Field::Sens => {
                let value = (parse_or_zero(&self.sens) + steps * SENS_NUDGE).clamp(SENS_MIN, SENS_MAX);
                set_number(&mut self.sens, (value * 100.0).round() / 100.0);
            }
        }
    }

    fn apply_preset(&mut self, preset: &Preset) {
        set_number(&mut self.dpi, preset.dpi);
        set_number(&mut self.sens, preset.sens);
    }
}

impl Default for Controls {
    fn default() -> Self { Self::new() }
}

#[inline]
const fn changed_if(changed: bool) -> Response {
    if changed { Response::Changed } else { Response::Ignored }
}

#[inline]
fn clamp_inches(inches: f32) -> f32 {
    if inches.is_nan() { 0.0 } else { inches.clamp(0.0, INCHES_CONTROL_MAX) }
}

/// Replace a field's text with the shortest representation of `value`.
fn set_number(field: &mut String<FIELD_CAPACITY>, value: f32) {
    field.clear();
    let _ = write!(field, "{value}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(controls: &mut Controls, text: &str) {
        for c in text.chars() {
            controls.handle(Input::Type(c));
        }
    }

    fn clear_focused(controls: &mut Controls) {
        while controls.handle(Input::Backspace) == Response::Changed {}
    }

    #[test]
    fn test_initial_state() {
        let controls = Controls::new();
        assert_eq!(controls.dpi_text(), "800");
        assert_eq!(controls.sens_text(), "1");
        assert_eq!(controls.focus(), Field::Dpi);
        assert_eq!(controls.state(), State::new(800.0, 1.0, 1.0));
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut controls = Controls::new();
        clear_focused(&mut controls);
        type_str(&mut controls, "1600");
        assert_eq!(controls.dpi_text(), "1600");

        controls.handle(Input::FocusNext);
        clear_focused(&mut controls);
        type_str(&mut controls, "0.5");
        assert_eq!(controls.sens_text(), "0.5");
        assert_eq!(controls.state().edpi(), 800.0);
    }

    #[test]
    fn test_typing_rejects_other_chars_and_second_point() {
        let mut controls = Controls::new();
        controls.handle(Input::FocusNext);
        assert_eq!(controls.handle(Input::Type('x')), Response::Ignored);
        assert_eq!(controls.handle(Input::Type('.')), Response::Changed);
        assert_eq!(controls.handle(Input::Type('.')), Response::Ignored);
        assert_eq!(controls.sens_text(), "1.");
    }

    #[test]
    fn test_field_capacity() {
        let mut controls = Controls::new();
        type_str(&mut controls, "99999999999999");
        assert_eq!(controls.dpi_text().len(), FIELD_CAPACITY);
        // Huge values are clamped by the state, not by the field.
        assert_eq!(controls.state().dpi(), DPI_MAX);
    }

    #[test]
    fn test_empty_field_clamps_to_minimum() {
        let mut controls = Controls::new();
        clear_focused(&mut controls);
        assert_eq!(controls.dpi_text(), "");
        assert_eq!(controls.handle(Input::Backspace), Response::Ignored);
        assert_eq!(controls.state().dpi(), DPI_MIN);
    }

    #[test]
    fn test_nudge_dpi_and_sens() {
        let mut controls = Controls::new();
        controls.handle(Input::Nudge(1));
        assert_eq!(controls.dpi_text(), "850");
        controls.handle(Input::Nudge(-2));
        assert_eq!(controls.dpi_text(), "750");

        controls.handle(Input::FocusNext);
        controls.handle(Input::Nudge(1));
        assert_eq!(controls.sens_text(), "1.05");
        controls.handle(Input::Nudge(-3));
        assert_eq!(controls.sens_text(), "0.9");
    }

    #[test]
    fn test_nudge_stays_in_bounds() {
        let mut controls = Controls::new();
        clear_focused(&mut controls);
        controls.handle(Input::Nudge(-1));
        assert_eq!(controls.dpi_text(), "100");

        controls.handle(Input::FocusNext);
        for _ in 0..200 {
            controls.handle(Input::Nudge(1));
        }
        assert_eq!(controls.sens_text(), "5");
    }

    #[test]
    fn test_step_inches_snaps_and_bounds() {
        let mut controls = Controls::new();
        for _ in 0..3 {
            controls.handle(Input::StepInches(1));
        }
        assert!((controls.inches() - 1.3).abs() < 1e-6, "inches {}", controls.inches());

        for _ in 0..100 {
            controls.handle(Input::StepInches(1));
        }
        assert_eq!(controls.inches(), INCHES_CONTROL_MAX);

        for _ in 0..100 {
            controls.handle(Input::StepInches(-1));
        }
        assert_eq!(controls.inches(), 0.0);
    }

    #[test]
    fn test_preset_keeps_inches() {
        let mut controls = Controls::new();
        controls.handle(Input::StepInches(5));

        let response = controls.handle(Input::Preset(2));
        assert_eq!(response, Response::PresetApplied(PRESETS[2]));
        assert_eq!(controls.dpi_text(), "1600");
        assert_eq!(controls.sens_text(), "0.5");
        assert!((controls.inches() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_preset_ignored() {
        let mut controls = Controls::new();
        assert_eq!(controls.handle(Input::Preset(PRESETS.len())), Response::Ignored);
        assert_eq!(controls.dpi_text(), "800");
    }

    #[test]
    fn test_reset_restores_inches() {
        let mut controls = Controls::new();
        controls.handle(Input::StepInches(-7));
        assert_eq!(controls.handle(Input::Reset), Response::Reset);
        assert_eq!(controls.inches(), RESET_INCHES);
    }

    #[test]
    fn test_host_commands_pass_through() {
        let mut controls = Controls::new();
        assert_eq!(controls.handle(Input::Animate), Response::Animate);
        assert_eq!(controls.handle(Input::TogglePage), Response::TogglePage);
        assert_eq!(controls.state(), Controls::new().state());
    }

    #[test]
    fn test_set_inches_mirrors_animation() {
        let mut controls = Controls::new();
        controls.set_inches(0.42);
        assert_eq!(controls.state().inches(), 0.42);
        controls.set_inches(f32::NAN);
        assert_eq!(controls.inches(), 0.0);
    }
}
