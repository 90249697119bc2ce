//! Display abstraction and dirty-rect renderer for the tamagotchi pet
//!
//! This crate provides:
//! - `DisplayBackend` trait for the pixel-fill and flush primitives
//! - `Rect` geometry with the fixed screen regions
//! - `Painter`, which turns sprites into as few fill primitives as possible
//! - `render`, which repaints only what changed since the last frame
//!
//! # Architecture
//!
//! The display sits behind a slow serial bus, so every fill primitive
//! costs real time. The renderer keeps its own `RenderCache` of what is
//! currently on screen and compares the simulation state against it each
//! tick. Only rectangles that changed are cleared and repainted, and sprite
//! rows are painted as runs of equal color rather than single pixels.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod backend;
pub mod cache;
pub mod geometry;
pub mod hud;
pub mod overlay;
pub mod paint;
#[cfg(any(test, feature = "std"))]
pub mod recording;
pub mod renderer;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use cache::RenderCache;
pub use geometry::Rect;
pub use paint::Painter;
pub use renderer::render;
