//! Build-time settings
//!
//! There is no storage to load from, so settings come from Cargo features
//! for the keyboard build and are constructed directly in tests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tama_core::Tuning;

/// Which half of the split keyboard drives the pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplaySide {
    #[default]
    Left,
    Right,
}

impl DisplaySide {
    /// Whether a half reporting `is_left` owns the pet display
    pub const fn owns(self, is_left: bool) -> bool {
        match self {
            DisplaySide::Left => is_left,
            DisplaySide::Right => !is_left,
        }
    }
}

/// Settings for one keyboard build
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    pub side: DisplaySide,
    /// Draw the render time of each frame in the level bar
    pub frame_timing: bool,
    pub tuning: Tuning,
}

impl Settings {
    /// Settings selected by the `right-side` and `frame-timing` features
    pub fn from_features() -> Self {
        Self {
            side: if cfg!(feature = "right-side") {
                DisplaySide::Right
            } else {
                DisplaySide::Left
            },
            frame_timing: cfg!(feature = "frame-timing"),
            tuning: Tuning::default(),
        }
    }
}
