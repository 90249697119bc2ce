//! Screen rectangles

use tama_core::layout::{GAME_Y, LVL_Y, SCR_H, SCR_W};

/// Rectangle with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x0: i16,
    pub y0: i16,
    pub x1: i16,
    pub y1: i16,
}

/// Whole screen
pub const SCREEN: Rect = Rect::new(0, 0, SCR_W - 1, SCR_H - 1);
/// WPM readout and hearts
pub const TOP_BAR: Rect = Rect::new(0, 0, SCR_W - 1, GAME_Y - 1);
/// Where the cats and collectibles live
pub const PLAY_FIELD: Rect = Rect::new(0, GAME_Y, SCR_W - 1, LVL_Y - 1);
/// Level readout and XP bar
pub const LEVEL_BAR: Rect = Rect::new(0, LVL_Y, SCR_W - 1, SCR_H - 1);

impl Rect {
    pub const fn new(x0: i16, y0: i16, x1: i16, y1: i16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle from a top-left corner and a size
    pub const fn from_size(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self::new(x, y, x + w - 1, y + h - 1)
    }

    pub const fn width(&self) -> i16 {
        self.x1 - self.x0 + 1
    }

    pub const fn height(&self) -> i16 {
        self.y1 - self.y0 + 1
    }

    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Whether the two rectangles share at least one pixel
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// The part of this rectangle inside `bounds`, if any
    pub fn clipped(&self, bounds: &Rect) -> Option<Rect> {
        let r = Rect::new(
            self.x0.max(bounds.x0),
            self.y0.max(bounds.y0),
            self.x1.min(bounds.x1),
            self.y1.min(bounds.y1),
        );
        (!r.is_empty()).then_some(r)
    }
}
