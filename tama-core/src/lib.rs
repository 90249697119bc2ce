//! Board-agnostic core logic for the tamagotchi pet display
//!
//! This crate contains everything about the pet that does not depend on
//! the keyboard framework or the display hardware:
//!
//! - Sprite and palette tables (cat poses, icons, hearts, glyphs)
//! - Screen layout constants shared by simulation and renderer
//! - Simulation state (pet, collectibles, rival encounter)
//! - The simulation engine that advances the state once per tick
//! - Tuning configuration and collaborator traits

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod events;
pub mod layout;
pub mod palette;
pub mod sprite;
pub mod state;
pub mod timer;
pub mod traits;

pub use config::Tuning;
pub use engine::{Engine, TickReport};
pub use events::Event;
pub use state::{AnimState, Collectible, Rival, RivalPhase, SimState};
