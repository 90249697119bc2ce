//! Colors
//!
//! All colors are HSV with every channel (hue included) scaled to 0-255,
//! which is what the display driver takes directly.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// HSV color, all channels 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const BLACK: Hsv = Hsv::new(0, 0, 0);

    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Same hue and saturation with value scaled by `brightness / 255`
    pub const fn dimmed(self, brightness: u8) -> Self {
        let v = (self.v as u16 * brightness as u16 / 255) as u8;
        Self { v, ..self }
    }
}

/// Four-entry palette for 2-bit cat bitmaps; entry 0 is transparent
pub type CatPalette = [Hsv; 4];

/// Grey house cat
pub const CAT_PALETTE: CatPalette = [
    Hsv::new(0, 0, 0),
    Hsv::new(0, 0, 46),
    Hsv::new(0, 0, 181),
    Hsv::new(0, 0, 224),
];

/// Orange intruder
pub const RIVAL_PALETTE: CatPalette = [
    Hsv::new(0, 0, 0),
    Hsv::new(12, 255, 55),
    Hsv::new(16, 240, 190),
    Hsv::new(20, 200, 235),
];

pub const HEART_FILL: Hsv = Hsv::new(0, 255, 220);
pub const HEART_OUTLINE: Hsv = Hsv::new(0, 0, 60);

pub const ZZZ: Hsv = Hsv::new(0, 0, 180);
pub const QUESTION: Hsv = Hsv::new(0, 0, 200);
pub const DEAD_TEXT: Hsv = Hsv::new(0, 255, 220);

pub const XP_BAR_BACKGROUND: Hsv = Hsv::new(0, 0, 30);

/// WPM digits while typing
pub const WPM_ACTIVE: Hsv = Hsv::new(0, 0, 200);
/// WPM digits while idle
pub const WPM_IDLE: Hsv = Hsv::new(0, 0, 80);

/// Level bar hue for a level tier
pub const fn level_hue(level: u16) -> u8 {
    match level {
        0..=9 => 85,
        10..=49 => 128,
        50..=99 => 170,
        100..=499 => 200,
        _ => 32,
    }
}
