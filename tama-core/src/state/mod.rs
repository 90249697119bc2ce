//! Simulation state
//!
//! One `SimState` exists per process. The engine is the only writer and
//! the renderer the only reader; render bookkeeping lives in the display
//! crate, not here.

pub mod pet;
pub mod rival;

pub use pet::{AnimState, Collectible, SimState, MAX_ICONS};
pub use rival::{Rival, RivalPhase};
