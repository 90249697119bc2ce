//! Collaborator traits
//!
//! These traits define the interface between the pet and the keyboard
//! framework it runs inside. The firmware crate implements them on top of
//! the framework's C API; tests implement them with scripted values.

use crate::timer::Millis;

/// Monotonic millisecond clock
pub trait Clock {
    /// Current timestamp
    fn now_ms(&self) -> Millis;
}

/// Live typing-speed telemetry
pub trait TypingMeter {
    /// Current typing speed in words per minute
    ///
    /// Sampled once per tick.
    fn typing_speed(&self) -> u8;
}

/// Which half of a split keyboard this code runs on
pub trait SplitSide {
    /// True on the left half
    fn is_left(&self) -> bool;
}
