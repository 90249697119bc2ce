//! Tamagotchi pet for the Halcyon Elora TFT
//!
//! Glue between QMK and the board-agnostic crates. QMK owns the main loop,
//! the timer and the display driver; this crate only answers two hooks:
//!
//! - `module_post_init_user`: once after start-up, builds the pet and draws
//!   the first frame
//! - `display_module_housekeeping_task_user`: every main-loop pass, ticks
//!   the simulation at most every 100 ms and redraws what changed
//!
//! Everything except the `ffi` module is plain Rust and host-testable.

#![cfg_attr(feature = "qmk", no_std)]

#[macro_use]
mod fmt;

#[cfg(feature = "qmk")]
pub mod ffi;
pub mod lifecycle;
pub mod settings;
pub mod timing;

pub use lifecycle::Tamagotchi;
pub use settings::{DisplaySide, Settings};
