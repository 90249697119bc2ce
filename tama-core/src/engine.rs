//! Simulation engine
//!
//! Advances the `SimState` by one tick: health drain and revival, animation
//! state selection, movement, collectibles, XP and the rival encounter.
//!
//! The engine owns the pseudo-random generator so that every random
//! decision of the pet comes from a single stream seeded at start-up.

use heapless::Vec;
use rand::{Rng, RngCore};

use crate::config::{xp_for_level, SpawnWindow, Tuning, MAX_HEALTH};
use crate::events::Event;
use crate::layout::{GAME_H, GAME_Y, ICON_H, ICON_W, SCR_W, TARGET_X_SPAN, TARGET_Y_SPAN};
use crate::state::{AnimState, RivalPhase, SimState, MAX_ICONS};
use crate::timer::{elapsed_ms, Millis};

/// Maximum events recorded per tick; extras are dropped
pub const MAX_TICK_EVENTS: usize = 16;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub events: Vec<Event, MAX_TICK_EVENTS>,
}

impl TickReport {
    fn push(&mut self, event: Event) {
        let _ = self.events.push(event);
    }

    /// True if `event` was reported
    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }
}

/// Advances the simulation
pub struct Engine<R> {
    tuning: Tuning,
    rng: R,
}

impl<R: RngCore> Engine<R> {
    pub fn new(tuning: Tuning, rng: R) -> Self {
        Self { tuning, rng }
    }

    /// Fresh state with a first movement target picked
    pub fn spawn(&mut self, now: Millis) -> SimState {
        let mut st = SimState::new(now);
        self.pick_new_target(&mut st);
        st
    }

    /// Advance `st` by one tick
    ///
    /// # Arguments
    /// - `wpm`: Typing speed sampled for this tick
    /// - `now`: Current timestamp
    pub fn advance(&mut self, st: &mut SimState, wpm: u8, now: Millis) -> TickReport {
        let mut report = TickReport::default();
        st.wpm = wpm;

        self.drain(st, now, &mut report);

        if wpm > 0 {
            st.last_active = now;
            if st.dead {
                self.revive(st, now);
                report.push(Event::Revived);
            }
        } else {
            // The spawn timer only runs while typing, dead or alive
            st.last_icon_spawn = now;
        }

        st.anim = self.derive_anim(st, wpm, now);

        if st.dead {
            st.frame = st.frame.wrapping_add(1);
            return report;
        }

        let had_rival = st.rival.phase != RivalPhase::None;
        if let Some(phase) = st.rival.step(now, st.x, &self.tuning, &mut self.rng) {
            report.push(Event::Rival(phase));
            if had_rival && phase == RivalPhase::None {
                self.pick_new_target(st);
            }
        }

        if st.is_confronted() {
            st.facing_left = st.rival.x < st.x;
        }

        if matches!(st.anim, AnimState::Walk | AnimState::Idle) {
            self.move_pet(st);
        }

        if wpm > 0 {
            let window = SpawnWindow::for_wpm(wpm);
            let delay = window.min_ms + self.rng.gen_range(0..window.range_ms.max(1));
            if elapsed_ms(now, st.last_icon_spawn) >= delay {
                if let Some(slot) = self.spawn_icon(st) {
                    report.push(Event::Spawned(slot));
                }
                st.last_icon_spawn = now;
            }
        }

        self.update_icons(st, &mut report);
        st.bounce_timer = st.bounce_timer.saturating_sub(1);

        if wpm > 0 {
            for level in gain_xp(st, wpm as u32) {
                report.push(Event::LevelUp(level));
            }
        }

        st.frame = st.frame.wrapping_add(1);
        report
    }

    fn drain(&mut self, st: &mut SimState, now: Millis, report: &mut TickReport) {
        if elapsed_ms(now, st.last_drain) < self.tuning.drain_ms {
            return;
        }
        st.last_drain = now;
        if st.health > 0 {
            st.health -= 1;
            report.push(Event::Drained(st.health));
            if st.health == 0 {
                st.dead = true;
                report.push(Event::Died);
            }
        }
    }

    fn revive(&mut self, st: &mut SimState, now: Millis) {
        st.dead = false;
        st.health = self.tuning.revive_health;
        st.last_drain = now;
        self.pick_new_target(st);
    }

    fn derive_anim(&mut self, st: &mut SimState, wpm: u8, now: Millis) -> AnimState {
        let idle_ms = elapsed_ms(now, st.last_active);
        if st.dead {
            AnimState::Dead
        } else if wpm == 0 && idle_ms >= self.tuning.idle_sleep_ms {
            AnimState::Sleep
        } else if wpm == 0 && idle_ms > 0 {
            AnimState::Sit
        } else {
            let speed = self.tuning.move_speed;
            let dx = st.target_x - st.x;
            let dy = st.target_y - st.y;
            if dx.abs() <= speed && dy.abs() <= speed {
                self.pick_new_target(st);
                AnimState::Idle
            } else {
                AnimState::Walk
            }
        }
    }

    fn move_pet(&mut self, st: &mut SimState) {
        let (tx, ty, mut speed) = match nearest_icon(st, self.tuning.pounce_dist) {
            Some(slot) => {
                st.anim = AnimState::Walk;
                let icon = &st.icons[slot];
                (icon.x, icon.y, self.tuning.pounce_speed)
            }
            None => (st.target_x, st.target_y, self.tuning.move_speed),
        };

        // Low health slows the pet down; the stutter shares the frame
        // counter with the animation
        if st.health < self.tuning.weak_health {
            speed = 1;
        } else if st.health < self.tuning.tired_health && st.frame % 2 == 1 {
            speed = 0;
        }

        if speed > 0 {
            let (dx, dy) = (tx - st.x, ty - st.y);
            let (sx, sy) = (step_toward(dx, speed), step_toward(dy, speed));
            if sx != 0 {
                st.facing_left = sx < 0;
            }
            st.x += sx;
            st.y += sy;
        }

        if st.health < self.tuning.tired_health && self.rng.gen_ratio(1, self.tuning.tired_sit_odds) {
            st.anim = AnimState::Sit;
        }
    }

    /// Put a new collectible in the first free slot
    fn spawn_icon(&mut self, st: &mut SimState) -> Option<u8> {
        let slot = st.icons.iter().position(|icon| !icon.active)?;
        let kind = st.next_icon;
        st.next_icon = kind.next();

        let (x, y) = match self.rng.gen_range(0..4u8) {
            0 => (self.rng.gen_range(0..SCR_W - ICON_W), GAME_Y),
            1 => (self.rng.gen_range(0..SCR_W - ICON_W), GAME_Y + GAME_H - ICON_H),
            2 => (0, GAME_Y + self.rng.gen_range(0..GAME_H - ICON_H)),
            _ => (SCR_W - ICON_W, GAME_Y + self.rng.gen_range(0..GAME_H - ICON_H)),
        };

        let (cx, cy) = st.center();
        let icon = &mut st.icons[slot];
        icon.x = x;
        icon.y = y;
        icon.kind = kind;
        icon.active = true;

        let (ix, iy) = icon.center();
        icon.dx = (cx - ix).signum() as i8;
        icon.dy = (cy - iy).signum() as i8;
        if icon.dx == 0 && icon.dy == 0 {
            icon.dy = -1;
        }
        Some(slot as u8)
    }

    /// Steer collectibles toward the pet and eat the ones that arrive
    fn update_icons(&mut self, st: &mut SimState, report: &mut TickReport) {
        let (cx, cy) = st.center();
        let speed = self.tuning.move_speed;
        let reach = self.tuning.capture_box;

        for slot in 0..MAX_ICONS {
            let icon = &mut st.icons[slot];
            if !icon.active {
                continue;
            }
            let (ix, iy) = icon.center();
            icon.dx = (cx - ix).signum() as i8;
            icon.dy = (cy - iy).signum() as i8;
            icon.x += icon.dx as i16 * speed;
            icon.y += icon.dy as i16 * speed;

            let (ix, iy) = icon.center();
            if (cx - ix).abs() < reach && (cy - iy).abs() < reach {
                icon.active = false;
                st.health = st.health.saturating_add(self.tuning.icon_hp_gain).min(MAX_HEALTH);
                st.bounce_timer = self.tuning.bounce_frames;
                report.push(Event::Captured {
                    slot: slot as u8,
                    health: st.health,
                });
            }
        }
    }

    fn pick_new_target(&mut self, st: &mut SimState) {
        st.target_x = self.rng.gen_range(0..TARGET_X_SPAN);
        st.target_y = GAME_Y + self.rng.gen_range(0..TARGET_Y_SPAN);
    }
}

/// Per-axis step of at most `speed` that never passes the target
pub fn step_toward(delta: i16, speed: i16) -> i16 {
    delta.clamp(-speed, speed)
}

/// Closest active collectible within `max_dist` (Manhattan, exclusive)
fn nearest_icon(st: &SimState, max_dist: i16) -> Option<usize> {
    st.icons
        .iter()
        .enumerate()
        .filter(|(_, icon)| icon.active)
        .map(|(slot, icon)| (slot, (st.x - icon.x).abs() + (st.y - icon.y).abs()))
        .filter(|&(_, dist)| dist < max_dist)
        .min_by_key(|&(_, dist)| dist)
        .map(|(slot, _)| slot)
}

/// Add XP and apply any level-ups it earns
///
/// Returns every level reached, in order.
pub fn gain_xp(st: &mut SimState, gain: u32) -> Vec<u16, MAX_TICK_EVENTS> {
    let mut reached = Vec::new();
    st.xp = st.xp.saturating_add(gain);
    while st.xp >= st.xp_next {
        st.xp -= st.xp_next;
        st.level = st.level.saturating_add(1);
        st.xp_next = xp_for_level(st.level);
        let _ = reached.push(st.level);
    }
    reached
}
