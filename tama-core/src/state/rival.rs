//! Rival encounter
//!
//! An orange cat occasionally wanders in from a screen edge, stares at the
//! pet, gets mad and then runs off again. The encounter is a strict cycle
//! driven by elapsed time and position:
//!
//! ```text
//! None -> Enter -> Idle -> Mad -> Chase -> None
//! ```

use rand::Rng;

use crate::config::Tuning;
use crate::layout::{CAT_H, CAT_W, GAME_H, GAME_Y, SCR_W};
use crate::timer::{elapsed_ms, Millis};

/// Encounter phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RivalPhase {
    /// No rival on screen; a spawn roll happens periodically
    #[default]
    None,
    /// Walking in from an edge
    Enter,
    /// Pausing, looking at the pet
    Idle,
    /// Angry standoff
    Mad,
    /// Running off through the nearer edge
    Chase,
}

impl RivalPhase {
    /// Phases during which the pet faces the rival and looks angry
    pub const fn is_confrontation(self) -> bool {
        matches!(self, RivalPhase::Mad | RivalPhase::Chase)
    }
}

/// Rival cat state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rival {
    pub phase: RivalPhase,
    pub x: i16,
    pub y: i16,
    /// Where the rival stops after walking in
    pub target_x: i16,
    pub facing_left: bool,
    /// Animation counter, advanced on every tick of an encounter
    pub frame: u16,
    /// When the current phase started
    pub phase_since: Millis,
    /// Last spawn roll
    pub last_check: Millis,
}

impl Rival {
    pub const fn new(now: Millis) -> Self {
        Self {
            phase: RivalPhase::None,
            x: -CAT_W,
            y: GAME_Y,
            target_x: 0,
            facing_left: false,
            frame: 0,
            phase_since: now,
            last_check: now,
        }
    }

    /// True while any part of the rival is on screen
    pub const fn is_visible(&self) -> bool {
        !matches!(self.phase, RivalPhase::None) && self.x > -CAT_W && self.x < SCR_W
    }

    /// Advance the encounter by one tick
    ///
    /// `pet_x` is the main pet's horizontal position. Returns the new phase
    /// when a transition happened.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        now: Millis,
        pet_x: i16,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<RivalPhase> {
        if self.phase == RivalPhase::None {
            if elapsed_ms(now, self.last_check) < tuning.rival_check_ms {
                return None;
            }
            self.last_check = now;
            if rng.gen_range(0..100u32) >= tuning.rival_spawn_pct {
                return None;
            }
            self.enter(now, rng);
            return Some(self.phase);
        }

        self.frame = self.frame.wrapping_add(1);

        let next = match self.phase {
            RivalPhase::None => None,
            RivalPhase::Enter => {
                let dx = self.target_x - self.x;
                let speed = tuning.move_speed;
                if dx != 0 {
                    self.x += dx.clamp(-speed, speed);
                    self.facing_left = dx < 0;
                }
                (dx.abs() <= speed).then_some(RivalPhase::Idle)
            }
            RivalPhase::Idle => {
                self.facing_left = pet_x < self.x;
                if elapsed_ms(now, self.phase_since) >= tuning.rival_idle_ms {
                    self.frame = 0;
                    Some(RivalPhase::Mad)
                } else {
                    None
                }
            }
            RivalPhase::Mad => {
                (elapsed_ms(now, self.phase_since) >= tuning.rival_mad_ms)
                    .then_some(RivalPhase::Chase)
            }
            RivalPhase::Chase => {
                let speed = tuning.rival_chase_speed;
                if self.x < SCR_W / 2 {
                    self.x -= speed;
                    self.facing_left = true;
                } else {
                    self.x += speed;
                    self.facing_left = false;
                }
                (self.x <= -CAT_W || self.x >= SCR_W).then_some(RivalPhase::None)
            }
        };

        if let Some(phase) = next {
            self.phase = phase;
            self.phase_since = now;
        }
        next
    }

    fn enter<R: Rng + ?Sized>(&mut self, now: Millis, rng: &mut R) {
        let from_left = rng.gen::<bool>();
        self.y = GAME_Y + 20 + rng.gen_range(0..GAME_H - CAT_H - 40);
        if from_left {
            self.x = -CAT_W;
            self.target_x = 10 + rng.gen_range(0..30);
            self.facing_left = false;
        } else {
            self.x = SCR_W;
            self.target_x = SCR_W - CAT_W - 10 - rng.gen_range(0..30);
            self.facing_left = true;
        }
        self.frame = 0;
        self.phase = RivalPhase::Enter;
        self.phase_since = now;
    }
}
