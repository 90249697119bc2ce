//! Pet and collectible state

use crate::config::{xp_for_level, MAX_HEALTH};
use crate::layout::{CAT_H, CAT_W, GAME_H, GAME_Y, ICON_H, ICON_W, SCR_W};
use crate::sprite::IconKind;
use crate::timer::Millis;

use super::rival::Rival;

/// Number of collectible slots
pub const MAX_ICONS: usize = 3;

/// What the pet is doing, derived every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimState {
    /// Standing at its target, tail wag
    #[default]
    Idle,
    /// Walking toward its target
    Walk,
    /// Sitting, waiting for typing (idle < sleep threshold)
    Sit,
    /// Lying down after a long idle period
    Sleep,
    /// Lying down, dimmed
    Dead,
    /// Running away
    Flee,
}

/// A collectible slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Collectible {
    pub x: i16,
    pub y: i16,
    /// Horizontal velocity (sign toward the pet)
    pub dx: i8,
    /// Vertical velocity (sign toward the pet)
    pub dy: i8,
    pub kind: IconKind,
    pub active: bool,
}

impl Collectible {
    /// Center point on screen
    pub const fn center(&self) -> (i16, i16) {
        (self.x + ICON_W / 2, self.y + ICON_H / 2)
    }
}

/// The complete simulation state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimState {
    /// Top-left corner of the pet
    pub x: i16,
    pub y: i16,
    /// Where the pet is walking to
    pub target_x: i16,
    pub target_y: i16,
    /// Mirrors the sprite; rendering only
    pub facing_left: bool,
    pub dead: bool,
    /// 0-100
    pub health: u8,
    pub anim: AnimState,
    /// Frame counter, drives animation and the tired stutter
    pub frame: u16,
    pub level: u16,
    pub xp: u32,
    /// Cached `xp_for_level(level)`
    pub xp_next: u32,
    pub icons: [Collectible; MAX_ICONS],
    pub next_icon: IconKind,
    /// Frames remaining of the eat bounce
    pub bounce_timer: u8,
    /// Typing speed sampled this tick
    pub wpm: u8,
    pub last_drain: Millis,
    /// Last tick with typing activity
    pub last_active: Millis,
    pub last_icon_spawn: Millis,
    pub rival: Rival,
}

impl SimState {
    /// Fresh pet in the middle of the play field at full health
    pub fn new(now: Millis) -> Self {
        let x = (SCR_W - CAT_W) / 2;
        let y = GAME_Y + (GAME_H - CAT_H) / 2;
        Self {
            x,
            y,
            target_x: x,
            target_y: y,
            facing_left: false,
            dead: false,
            health: MAX_HEALTH,
            anim: AnimState::Idle,
            frame: 0,
            level: 1,
            xp: 0,
            xp_next: xp_for_level(1),
            icons: [Collectible::default(); MAX_ICONS],
            next_icon: IconKind::Fish,
            bounce_timer: 0,
            wpm: 0,
            last_drain: now,
            last_active: now,
            last_icon_spawn: now,
            rival: Rival::new(now),
        }
    }

    /// Center point of the pet on screen
    pub const fn center(&self) -> (i16, i16) {
        (self.x + CAT_W / 2, self.y + CAT_H / 2)
    }

    /// Health in half hearts (0-10)
    pub const fn half_hearts(&self) -> u8 {
        self.health / 10
    }

    /// True while the rival is mad or chasing, when the pet faces it down
    pub fn is_confronted(&self) -> bool {
        self.rival.phase.is_confrontation()
    }

    /// Number of active collectibles
    pub fn active_icons(&self) -> usize {
        self.icons.iter().filter(|icon| icon.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pet_is_centered_and_healthy() {
        let st = SimState::new(1234);
        assert_eq!(st.x, 43);
        assert_eq!(st.y, GAME_Y + 72);
        assert_eq!(st.health, 100);
        assert_eq!(st.half_hearts(), 10);
        assert_eq!(st.level, 1);
        assert_eq!(st.xp_next, 50_000);
        assert_eq!(st.last_active, 1234);
        assert_eq!(st.active_icons(), 0);
        assert!(!st.dead);
    }

    #[test]
    fn test_centers() {
        let st = SimState::new(0);
        assert_eq!(st.center(), (st.x + 24, st.y + 24));
        let icon = Collectible { x: 10, y: 50, ..Default::default() };
        assert_eq!(icon.center(), (18, 58));
    }
}
