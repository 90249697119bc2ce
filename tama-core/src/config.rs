//! Gameplay tuning
//!
//! Every timing and balance constant of the pet in one place. The defaults
//! are what ships on the keyboard; tests shrink the intervals.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Health ceiling
pub const MAX_HEALTH: u8 = 100;

/// XP per unit of `level * (level + 1)`
pub const XP_PER_LEVEL_UNIT: u32 = 25_000;

/// Largest `level * (level + 1)` before the threshold is capped
pub const XP_LEVEL_PRODUCT_CAP: u32 = 170_000;

/// Threshold used once the quadratic would overflow (~level 414)
pub const XP_THRESHOLD_CAP: u32 = 4_250_000_000;

/// XP needed to advance from `level` to `level + 1`
pub const fn xp_for_level(level: u16) -> u32 {
    let n = level as u32 * (level as u32 + 1);
    if n > XP_LEVEL_PRODUCT_CAP {
        XP_THRESHOLD_CAP
    } else {
        n * XP_PER_LEVEL_UNIT
    }
}

/// Window the next collectible spawn delay is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpawnWindow {
    /// Shortest delay
    pub min_ms: u32,
    /// Random extra delay, drawn from `0..range_ms`
    pub range_ms: u32,
}

impl SpawnWindow {
    /// Spawn window for a typing speed; faster typing spawns more often
    pub const fn for_wpm(wpm: u8) -> Self {
        let (min_ms, range_ms) = match wpm {
            0..=20 => (8000, 4000),
            21..=50 => (4000, 4000),
            51..=80 => (2000, 2000),
            _ => (1000, 1000),
        };
        Self { min_ms, range_ms }
    }
}

/// Gameplay tuning parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuning {
    /// Minimum time between frames (10 FPS)
    pub frame_ms: u32,
    /// One health point is lost per interval (~3 h from full to dead)
    pub drain_ms: u32,
    /// Idle time after which the pet falls asleep
    pub idle_sleep_ms: u32,
    /// Health after being revived by typing
    pub revive_health: u8,
    /// Health gained per eaten collectible
    pub icon_hp_gain: u8,
    /// Frames of eat bounce after a capture
    pub bounce_frames: u8,
    /// Walking speed in px per frame
    pub move_speed: i16,
    /// Speed while pouncing on a nearby collectible
    pub pounce_speed: i16,
    /// Manhattan distance at which the pet pounces
    pub pounce_dist: i16,
    /// Half-size of the capture box around the pet center
    pub capture_box: i16,
    /// Below this health the pet crawls at 1 px per frame
    pub weak_health: u8,
    /// Below this health the pet stutters and sometimes sits down
    pub tired_health: u8,
    /// One-in-N chance per frame that a tired pet sits down
    pub tired_sit_odds: u32,
    /// How often the rival spawn roll happens
    pub rival_check_ms: u32,
    /// Percent chance per roll that the rival shows up
    pub rival_spawn_pct: u32,
    /// How long the rival stares before getting mad
    pub rival_idle_ms: u32,
    /// How long the rival stays mad
    pub rival_mad_ms: u32,
    /// Rival speed while running off
    pub rival_chase_speed: i16,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frame_ms: 100,
            drain_ms: 108_000,
            idle_sleep_ms: 600_000,
            revive_health: 20,
            icon_hp_gain: 5,
            bounce_frames: 3,
            move_speed: 2,
            pounce_speed: 3,
            pounce_dist: 40,
            capture_box: 16,
            weak_health: 30,
            tired_health: 60,
            tired_sit_odds: 8,
            rival_check_ms: 30_000,
            rival_spawn_pct: 10,
            rival_idle_ms: 1500,
            rival_mad_ms: 2000,
            rival_chase_speed: 4,
        }
    }
}
