//! What is currently on screen
//!
//! The renderer compares each frame against this record to decide what
//! must be cleared and repainted. `None` means nothing is drawn there (or
//! that the screen content is unknown), which forces a repaint.

use tama_core::layout::{CAT_H, CAT_W, ICON_H, ICON_W};
use tama_core::sprite::{IconKind, Pose};
use tama_core::state::MAX_ICONS;

use crate::geometry::Rect;
use crate::overlay::Overlay;

/// A cat as it was painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawnCat {
    pub pose: Pose,
    pub x: i16,
    /// Including any bounce offset
    pub y: i16,
    pub facing_left: bool,
    pub brightness: u8,
}

impl DrawnCat {
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.x, self.y, CAT_W, CAT_H)
    }
}

/// A collectible as it was painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawnIcon {
    pub x: i16,
    pub y: i16,
    pub kind: IconKind,
}

impl DrawnIcon {
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.x, self.y, ICON_W, ICON_H)
    }
}

/// Previous-frame record, mutated only by the renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderCache {
    pub pet: Option<DrawnCat>,
    pub rival: Option<DrawnCat>,
    pub icons: [Option<DrawnIcon>; MAX_ICONS],
    pub overlay: Option<Overlay>,
    pub wpm: Option<u8>,
    pub half_hearts: Option<u8>,
    pub level: Option<u16>,
    pub bar_fill: Option<u8>,
    /// Screen content is unknown after a failed frame; repaint everything
    pub stale: bool,
}

impl RenderCache {
    /// Cache for a screen with nothing drawn on it
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything, so the next frame repaints all of it
    ///
    /// Call after clearing the whole screen.
    pub fn invalidate(&mut self) {
        *self = Self::new();
    }
}
