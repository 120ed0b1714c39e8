//! eDPI swipe visualizer - testable core for the desktop simulator.
//!
//! Maps mouse DPI x sensitivity (eDPI) and a physical swipe distance to an on-screen
//! length, draws it against a reference ruler and animates a one-inch swipe with a
//! fading trail. The binary (`main.rs`, feature `simulator`) adds the window, keyboard
//! and frame loop on top of this library.
//!
//! # Data Flow
//!
//! ```text
//! Controls --state()--> State --render()--> Surface
//!                         |
//!                         +--start()--> AnimationController --step()--> render() + Trail
//! ```
//!
//! - [`state`]: validated `(dpi, sens, inches)` snapshot, eDPI derived on demand
//! - [`scale`]: eDPI x inches to pixels, per-frame stage geometry
//! - [`render`]: one complete frame, redraw tracking
//! - [`animations`]: eased one-inch swipe with cancellable run tokens
//! - [`surface`]: drawing capability and the `embedded-graphics` adapter
//! - [`session`]: input, swipe and page state driven by the frame loop
//!
//! # Testing
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! The library does not depend on the simulator crate, so tests build without SDL2.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Configuration
pub mod colors;
pub mod config;
pub mod styles;

// Core model
pub mod animations;
pub mod scale;
pub mod state;

// Rendering
pub mod render;
pub mod screens;
pub mod surface;
pub mod widgets;

// Host
pub mod controls;
pub mod pages;
pub mod profiling;
pub mod session;
