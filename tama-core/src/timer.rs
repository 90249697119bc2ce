//! Millisecond timestamps
//!
//! Timestamps come straight from the keyboard's 32-bit millisecond timer
//! and wrap roughly every 49.7 days. Differences are taken with wrapping
//! arithmetic so that wraparound is invisible to the simulation.

/// Milliseconds since boot, as reported by the host timer
pub type Millis = u32;

/// Milliseconds elapsed from `since` to `now`
#[inline]
pub const fn elapsed_ms(now: Millis, since: Millis) -> u32 {
    now.wrapping_sub(since)
}
