//! Validated input snapshot: DPI, sensitivity, inches and the derived eDPI.
//!
//! A [`State`] is built from raw host input every time it is needed and never cached
//! beyond one frame. Invalid input never fails: unparseable text counts as 0 and every
//! value is then clamped to its bound, so downstream code (scale mapping, rendering,
//! animation) only ever sees values inside the valid domain.
//!
//! eDPI is not a field. It is always recomputed from `dpi` and `sens` through
//! [`State::edpi`], so no code path can make it disagree with its inputs.

use crate::config::{DPI_MAX, DPI_MIN, SENS_MAX, SENS_MIN};

/// Validated `(dpi, sens, inches)` snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct State {
    dpi: f32,
    sens: f32,
    inches: f32,
}

impl State {
    /// Build a state from numeric input, clamping every value to its bound.
    ///
    /// NaN counts as 0 before clamping.
    pub fn new(dpi: f32, sens: f32, inches: f32) -> Self {
        Self {
            dpi: zero_if_nan(dpi).clamp(DPI_MIN, DPI_MAX),
            sens: zero_if_nan(sens).clamp(SENS_MIN, SENS_MAX),
            inches: zero_if_nan(inches).max(0.0),
        }
    }

    /// Build a state from the text of the DPI and sensitivity fields.
    pub fn from_raw(dpi: &str, sens: &str, inches: f32) -> Self {
        Self::new(parse_or_zero(dpi), parse_or_zero(sens), inches)
    }

    #[inline]
    pub const fn dpi(&self) -> f32 { self.dpi }

    #[inline]
    pub const fn sens(&self) -> f32 { self.sens }

    #[inline]
    pub const fn inches(&self) -> f32 { self.inches }

    /// Effective DPI (`dpi x sens`).
    #[inline]
    pub fn edpi(&self) -> f32 { self.dpi * self.sens }

    /// Same DPI and sensitivity with a different swipe distance.
    #[must_use]
    pub fn with_inches(self, inches: f32) -> Self {
        Self {
            inches: zero_if_nan(inches).max(0.0),
            ..self
        }
    }
}

/// Parse the leading number of `raw`, or 0 when there is none.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"800dpi"` reads as 800
/// and `"1.5x"` as 1.5. Works on the longest prefix made of sign, digits, one decimal
/// point and an optional exponent. A leading (optionally signed) `Infinity` reads as
/// infinity, which the state then clamps.
pub fn parse_or_zero(raw: &str) -> f32 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') { f32::NEG_INFINITY } else { f32::INFINITY };
    }

    let mut digits = 0;
    let mut seen_point = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f32>().map_or(0.0, zero_if_nan)
}

#[inline]
fn zero_if_nan(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value }
}
