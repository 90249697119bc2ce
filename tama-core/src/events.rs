//! Notable things that happened during a tick

use crate::state::RivalPhase;

/// Events reported by the engine for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Periodic health drain, with the health left
    Drained(u8),
    /// Health reached zero
    Died,
    /// Typing brought the pet back to life
    Revived,
    /// A collectible appeared in a slot
    Spawned(u8),
    /// The pet ate the collectible in a slot, with the health after eating
    Captured { slot: u8, health: u8 },
    /// New level reached
    LevelUp(u16),
    /// The rival encounter moved to a new phase
    Rival(RivalPhase),
}
