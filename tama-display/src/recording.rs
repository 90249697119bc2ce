//! Recording backend for host tests
//!
//! Keeps every primitive it is asked to issue, plus a framebuffer of the
//! final pixels so tests can check what is actually on screen.

use tama_core::layout::{SCR_H, SCR_W};
use tama_core::palette::Hsv;

use crate::backend::{DisplayBackend, DisplayError};
use crate::geometry::{Rect, SCREEN};

/// In-memory display that records fills and flushes
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    fills: Vec<(Rect, Hsv)>,
    flushes: usize,
    pixels: Vec<Hsv>,
    /// When set, the next `fill_rect` fails with this error
    fail_next: Option<DisplayError>,
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            fills: Vec::new(),
            flushes: 0,
            pixels: vec![Hsv::BLACK; (SCR_W as usize) * (SCR_H as usize)],
            fail_next: None,
        }
    }

    /// Every fill issued since the last `reset_counts`
    pub fn fills(&self) -> &[(Rect, Hsv)] {
        &self.fills
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Forget recorded primitives, keep the framebuffer
    pub fn reset_counts(&mut self) {
        self.fills.clear();
        self.flushes = 0;
    }

    /// Make the next fill fail
    pub fn fail_next(&mut self, err: DisplayError) {
        self.fail_next = Some(err);
    }

    /// Color currently at a pixel; black outside the screen
    pub fn pixel(&self, x: i16, y: i16) -> Hsv {
        if x < 0 || y < 0 || x >= SCR_W || y >= SCR_H {
            return Hsv::BLACK;
        }
        self.pixels[y as usize * SCR_W as usize + x as usize]
    }

    /// Final framebuffer, row-major
    pub fn pixels(&self) -> &[Hsv] {
        &self.pixels
    }

    /// Whether any pixel inside `rect` is not black
    pub fn any_lit(&self, rect: Rect) -> bool {
        (rect.y0..=rect.y1).any(|y| (rect.x0..=rect.x1).any(|x| self.pixel(x, y) != Hsv::BLACK))
    }
}

impl DisplayBackend for RecordingDisplay {
    fn fill_rect(&mut self, rect: Rect, color: Hsv) -> Result<(), DisplayError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.fills.push((rect, color));
        if let Some(r) = rect.clipped(&SCREEN) {
            for y in r.y0..=r.y1 {
                let row = y as usize * SCR_W as usize;
                for x in r.x0..=r.x1 {
                    self.pixels[row + x as usize] = color;
                }
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushes += 1;
        Ok(())
    }
}
