//! Display backend trait
//!
//! Defines the two primitives the renderer needs from the display driver.

use tama_core::palette::Hsv;

use crate::geometry::Rect;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Implementations draw into an off-screen surface; nothing reaches the
/// panel until `flush` is called.
pub trait DisplayBackend {
    /// Fill a rectangle (inclusive corners) with a solid color
    ///
    /// Pixels outside the drawable area are silently dropped.
    fn fill_rect(&mut self, rect: Rect, color: Hsv) -> Result<(), DisplayError>;

    /// Push the composited surface to the physical display
    ///
    /// Blocks for as long as the bus transfer takes.
    fn flush(&mut self) -> Result<(), DisplayError>;
}

impl<T: DisplayBackend + ?Sized> DisplayBackend for &mut T {
    fn fill_rect(&mut self, rect: Rect, color: Hsv) -> Result<(), DisplayError> {
        (**self).fill_rect(rect, color)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        (**self).flush()
    }
}
