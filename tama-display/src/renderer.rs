//! Dirty-rect renderer
//!
//! Each call compares the simulation state against the `RenderCache` and
//! touches only what changed:
//!
//! 1. Clear the previous bounds of every drawable that moved, changed pose
//!    or disappeared, and note them as damaged.
//! 2. Repaint the top bar and level bar if what they show changed.
//! 3. Paint the layers bottom to top (rival, collectibles, overlay, pet). A
//!    layer is painted if it changed or if it overlaps damage from this
//!    frame; once painted, its bounds count as damage for the layers above.
//! 4. Flush once.
//!
//! Rendering a state that has not changed issues no fills at all.

use core::array;

use heapless::Vec;
use tama_core::layout::{CAT_H, CAT_W, ICON_SCALE};
use tama_core::palette::{CatPalette, CAT_PALETTE, RIVAL_PALETTE};
use tama_core::sprite::{Pose, SpriteSet};
use tama_core::state::MAX_ICONS;
use tama_core::{AnimState, Rival, RivalPhase, SimState};

use crate::backend::{DisplayBackend, DisplayError};
use crate::cache::{DrawnCat, DrawnIcon, RenderCache};
use crate::geometry::{Rect, PLAY_FIELD};
use crate::hud;
use crate::overlay::Overlay;
use crate::paint::Painter;

/// Vertical offsets of the eat bounce, first frame first
const BOUNCE_OFFSETS: [i16; 3] = [-4, -6, -2];

const DEAD_BRIGHTNESS: u8 = 80;
const WEAK_BRIGHTNESS: u8 = 140;
const FULL_BRIGHTNESS: u8 = 255;
/// Health below which the pet is drawn dimmed
const WEAK_HEALTH: u8 = 30;

/// Damage rectangles tracked per frame
const MAX_DAMAGE: usize = 16;

/// Pose of the main pet for this frame
///
/// The angry set replaces the normal one during a confrontation, except
/// when the pet is dead, which always shows the sleep set.
pub fn pet_pose(st: &SimState) -> Pose {
    if st.is_confronted() && !st.dead {
        return Pose::animated(SpriteSet::Angry, st.frame, 3);
    }
    let (set, divisor) = match st.anim {
        AnimState::Walk => (SpriteSet::Trot, 3),
        AnimState::Flee => (SpriteSet::Trot, 2),
        AnimState::Sit => (SpriteSet::Walk, 12),
        AnimState::Sleep | AnimState::Dead => (SpriteSet::Sleep, 8),
        AnimState::Idle => (SpriteSet::Sit, 6),
    };
    Pose::animated(set, st.frame, divisor)
}

/// Pose of the rival for this frame
pub fn rival_pose(rival: &Rival) -> Pose {
    let (set, divisor) = match rival.phase {
        RivalPhase::Chase => (SpriteSet::Trot, 2),
        RivalPhase::Mad => (SpriteSet::Walk, 8),
        RivalPhase::Idle => (SpriteSet::Walk, 10),
        RivalPhase::Enter | RivalPhase::None => (SpriteSet::Trot, 3),
    };
    Pose::animated(set, rival.frame, divisor)
}

pub fn pet_brightness(st: &SimState) -> u8 {
    if st.dead {
        DEAD_BRIGHTNESS
    } else if st.health < WEAK_HEALTH {
        WEAK_BRIGHTNESS
    } else {
        FULL_BRIGHTNESS
    }
}

/// Vertical offset for the remaining bounce frames
pub fn bounce_offset(bounce_timer: u8) -> i16 {
    match bounce_timer {
        0 => 0,
        t => {
            let idx = BOUNCE_OFFSETS.len().saturating_sub(t as usize);
            BOUNCE_OFFSETS[idx]
        }
    }
}

/// Everything one frame wants on screen
struct Frame {
    pet: DrawnCat,
    rival: Option<DrawnCat>,
    icons: [Option<DrawnIcon>; MAX_ICONS],
    overlay: Option<Overlay>,
    wpm: u8,
    half_hearts: u8,
    level: u16,
    bar_fill: u8,
}

impl Frame {
    fn capture(st: &SimState) -> Self {
        let pet = DrawnCat {
            pose: pet_pose(st),
            x: st.x,
            y: st.y + bounce_offset(st.bounce_timer),
            facing_left: st.facing_left,
            brightness: pet_brightness(st),
        };
        let rival = st.rival.is_visible().then(|| DrawnCat {
            pose: rival_pose(&st.rival),
            x: st.rival.x,
            y: st.rival.y,
            facing_left: st.rival.facing_left,
            brightness: FULL_BRIGHTNESS,
        });
        let icons = array::from_fn(|i| {
            let icon = &st.icons[i];
            icon.active.then_some(DrawnIcon {
                x: icon.x,
                y: icon.y,
                kind: icon.kind,
            })
        });
        Self {
            pet,
            rival,
            icons,
            overlay: Overlay::for_state(st),
            wpm: st.wpm,
            half_hearts: st.half_hearts(),
            level: st.level,
            bar_fill: hud::xp_bar_fill(st.xp, st.xp_next),
        }
    }
}

/// Regions of the play field overwritten so far this frame
struct Damage {
    rects: Vec<Rect, MAX_DAMAGE>,
    overflowed: bool,
}

impl Damage {
    fn new() -> Self {
        Self {
            rects: Vec::new(),
            overflowed: false,
        }
    }

    fn note(&mut self, rect: Rect) {
        if self.rects.push(rect).is_err() {
            self.overflowed = true;
        }
    }

    fn hits(&self, rect: &Rect) -> bool {
        self.overflowed || self.rects.iter().any(|d| d.intersects(rect))
    }
}

/// Draw the frame for `st`, touching only what changed since `cache`
///
/// On error the cache is marked stale so the next call repaints everything.
pub fn render<D: DisplayBackend + ?Sized>(
    st: &SimState,
    cache: &mut RenderCache,
    display: &mut D,
) -> Result<(), DisplayError> {
    let frame = Frame::capture(st);
    let result = paint_frame(&frame, cache, display);
    match result {
        Ok(()) => {
            cache.pet = Some(frame.pet);
            cache.rival = frame.rival;
            cache.icons = frame.icons;
            cache.overlay = frame.overlay;
            cache.wpm = Some(frame.wpm);
            cache.half_hearts = Some(frame.half_hearts);
            cache.level = Some(frame.level);
            cache.bar_fill = Some(frame.bar_fill);
            cache.stale = false;
        }
        Err(_) => cache.stale = true,
    }
    result
}

fn paint_frame<D: DisplayBackend + ?Sized>(
    frame: &Frame,
    cache: &RenderCache,
    display: &mut D,
) -> Result<(), DisplayError> {
    let stale = cache.stale;
    let mut pet_dirty = stale || cache.pet != Some(frame.pet);
    let mut rival_dirty = stale || cache.rival != frame.rival;
    if let Some(rival) = frame.rival {
        let close = (frame.pet.x - rival.x).abs() < CAT_W * 2
            && (frame.pet.y - rival.y).abs() < CAT_H * 2;
        if close && (pet_dirty || rival_dirty) {
            pet_dirty = true;
            rival_dirty = true;
        }
    }
    let mut icon_dirty = [false; MAX_ICONS];
    for (i, dirty) in icon_dirty.iter_mut().enumerate() {
        *dirty = stale || cache.icons[i] != frame.icons[i];
    }
    let overlay_dirty = stale || cache.overlay != frame.overlay;

    let mut painter = Painter::new(display);
    let mut damage = Damage::new();

    // Clear what moved away
    painter.set_clip(PLAY_FIELD);
    let mut cleared = Vec::<Rect, MAX_DAMAGE>::new();
    if pet_dirty {
        if let Some(prev) = cache.pet {
            let _ = cleared.push(prev.bounds());
        }
    }
    if rival_dirty {
        if let Some(prev) = cache.rival {
            let _ = cleared.push(prev.bounds());
        }
    }
    for (prev, dirty) in cache.icons.iter().zip(icon_dirty) {
        if let (Some(prev), true) = (prev, dirty) {
            let _ = cleared.push(prev.bounds());
        }
    }
    if overlay_dirty {
        if let Some(prev) = cache.overlay {
            let _ = cleared.push(prev.bounds());
        }
    }
    for rect in cleared {
        painter.clear(rect)?;
        damage.note(rect);
    }

    if stale
        || cache.wpm != Some(frame.wpm)
        || cache.half_hearts != Some(frame.half_hearts)
    {
        hud::draw_status_bar(&mut painter, frame.wpm, frame.half_hearts)?;
    }
    if stale || cache.level != Some(frame.level) || cache.bar_fill != Some(frame.bar_fill) {
        hud::draw_level_bar(&mut painter, frame.level, frame.bar_fill)?;
    }

    painter.set_clip(PLAY_FIELD);

    if let Some(rival) = frame.rival {
        if rival_dirty || damage.hits(&rival.bounds()) {
            paint_cat(&mut painter, &rival, &RIVAL_PALETTE)?;
            damage.note(rival.bounds());
        }
    }

    for (icon, dirty) in frame.icons.iter().zip(icon_dirty) {
        let Some(icon) = icon else { continue };
        if dirty || damage.hits(&icon.bounds()) {
            painter.mono(icon.x, icon.y, icon.kind.bitmap(), ICON_SCALE, icon.kind.color())?;
            damage.note(icon.bounds());
        }
    }

    if let Some(overlay) = frame.overlay {
        if overlay_dirty || damage.hits(&overlay.bounds()) {
            overlay.paint(&mut painter)?;
            damage.note(overlay.bounds());
        }
    }

    if pet_dirty || damage.hits(&frame.pet.bounds()) {
        paint_cat(&mut painter, &frame.pet, &CAT_PALETTE)?;
    }

    painter.flush()
}

fn paint_cat<D: DisplayBackend + ?Sized>(
    painter: &mut Painter<'_, D>,
    cat: &DrawnCat,
    palette: &CatPalette,
) -> Result<(), DisplayError> {
    painter.cat(
        cat.x,
        cat.y,
        cat.pose.bitmap(),
        cat.facing_left,
        cat.brightness,
        palette,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LEVEL_BAR, SCREEN, TOP_BAR};
    use crate::recording::RecordingDisplay;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use tama_core::layout::GAME_Y;
    use tama_core::{Engine, Tuning};

    fn first_frame(st: &SimState) -> (RenderCache, RecordingDisplay) {
        let mut cache = RenderCache::new();
        let mut display = RecordingDisplay::new();
        render(st, &mut cache, &mut display).unwrap();
        (cache, display)
    }

    #[test]
    fn test_first_frame_draws_everything() {
        let st = SimState::new(0);
        let (cache, display) = first_frame(&st);
        assert_eq!(display.flushes(), 1);
        assert!(display.any_lit(TOP_BAR));
        assert!(display.any_lit(LEVEL_BAR));
        assert!(display.any_lit(Rect::from_size(st.x, st.y, CAT_W, CAT_H)));
        assert_eq!(cache.wpm, Some(0));
        assert_eq!(cache.level, Some(1));
        assert!(cache.pet.is_some());
    }

    #[test]
    fn test_repeat_render_is_free() {
        let st = SimState::new(0);
        let (mut cache, mut display) = first_frame(&st);
        display.reset_counts();
        render(&st, &mut cache, &mut display).unwrap();
        assert!(display.fills().is_empty());
        assert_eq!(display.flushes(), 1);
    }

    #[test]
    fn test_moving_pet_clears_old_position() {
        let mut st = SimState::new(0);
        let (mut cache, mut display) = first_frame(&st);
        let old = Rect::from_size(st.x, st.y, CAT_W, CAT_H);
        st.x += CAT_W + 10;
        render(&st, &mut cache, &mut display).unwrap();
        assert!(!display.any_lit(old));
        assert!(display.any_lit(Rect::from_size(st.x, st.y, CAT_W, CAT_H)));
    }

    #[test]
    fn test_status_bar_only_on_change() {
        let mut st = SimState::new(0);
        st.health = 95;
        let (mut cache, mut display) = first_frame(&st);
        display.reset_counts();
        st.health = 91;
        render(&st, &mut cache, &mut display).unwrap();
        // 95 and 91 both give nine half hearts
        assert!(display.fills().is_empty());
        st.health = 89;
        render(&st, &mut cache, &mut display).unwrap();
        assert_eq!(display.fills()[0], (TOP_BAR, tama_core::palette::Hsv::BLACK));
        assert!(display.fills().iter().all(|(r, _)| TOP_BAR.intersects(r)));
    }

    #[test]
    fn test_bounce_offsets() {
        assert_eq!(bounce_offset(0), 0);
        assert_eq!(bounce_offset(3), -4);
        assert_eq!(bounce_offset(2), -6);
        assert_eq!(bounce_offset(1), -2);
        assert_eq!(bounce_offset(9), -4);
    }

    #[test]
    fn test_pose_selection() {
        let mut st = SimState::new(0);
        st.frame = 12;
        assert_eq!(pet_pose(&st), Pose::new(SpriteSet::Sit, 2));
        st.anim = AnimState::Walk;
        assert_eq!(pet_pose(&st), Pose::new(SpriteSet::Trot, 4));
        st.anim = AnimState::Sit;
        assert_eq!(pet_pose(&st), Pose::new(SpriteSet::Walk, 1));
        st.rival.phase = RivalPhase::Mad;
        assert_eq!(pet_pose(&st), Pose::new(SpriteSet::Angry, 4));
        st.dead = true;
        st.anim = AnimState::Dead;
        assert_eq!(pet_pose(&st), Pose::new(SpriteSet::Sleep, 1));
    }

    #[test]
    fn test_brightness_tiers() {
        let mut st = SimState::new(0);
        assert_eq!(pet_brightness(&st), 255);
        st.health = 29;
        assert_eq!(pet_brightness(&st), 140);
        st.dead = true;
        assert_eq!(pet_brightness(&st), 80);
    }

    #[test]
    fn test_rival_leaving_is_cleared() {
        let mut st = SimState::new(0);
        st.rival.phase = RivalPhase::Idle;
        st.rival.x = 5;
        st.rival.y = GAME_Y + 130;
        let rival_rect = Rect::from_size(5, GAME_Y + 130, CAT_W, CAT_H);
        let (mut cache, mut display) = first_frame(&st);
        assert!(display.any_lit(rival_rect));

        st.rival.phase = RivalPhase::None;
        render(&st, &mut cache, &mut display).unwrap();
        assert!(!display.any_lit(rival_rect));
        assert_eq!(cache.rival, None);
    }

    #[test]
    fn test_icon_capture_clears_icon() {
        let mut st = SimState::new(0);
        st.icons[1].active = true;
        st.icons[1].x = 100;
        st.icons[1].y = GAME_Y + 10;
        let rect = Rect::from_size(100, GAME_Y + 10, 16, 16);
        let (mut cache, mut display) = first_frame(&st);
        assert!(display.any_lit(rect));
        st.icons[1].active = false;
        render(&st, &mut cache, &mut display).unwrap();
        assert!(!display.any_lit(rect));
    }

    #[test]
    fn test_error_marks_cache_stale() {
        let mut st = SimState::new(0);
        let (mut cache, mut display) = first_frame(&st);
        st.x += 5;
        display.fail_next(DisplayError::Communication);
        assert_eq!(
            render(&st, &mut cache, &mut display),
            Err(DisplayError::Communication)
        );
        assert!(cache.stale);

        let mut fresh = RecordingDisplay::new();
        render(&st, &mut RenderCache::new(), &mut fresh).unwrap();
        render(&st, &mut cache, &mut display).unwrap();
        assert!(!cache.stale);
        assert_eq!(display.pixels(), fresh.pixels());
    }

    fn busy_tuning() -> Tuning {
        Tuning {
            drain_ms: 150,
            rival_check_ms: 1_000,
            rival_spawn_pct: 60,
            idle_sleep_ms: 5_000,
            ..Tuning::default()
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_incremental_matches_full_repaint(seed in any::<u64>(), ticks in 50usize..400) {
            let mut engine = Engine::new(busy_tuning(), SmallRng::seed_from_u64(seed));
            let mut script = SmallRng::seed_from_u64(seed ^ 0x5eed);
            let mut st = engine.spawn(0);
            let mut cache = RenderCache::new();
            let mut display = RecordingDisplay::new();
            render(&st, &mut cache, &mut display).unwrap();

            let mut wpm = 0u8;
            for tick in 1..=ticks {
                if tick % 20 == 0 {
                    wpm = if script.gen_ratio(1, 3) { 0 } else { script.gen_range(1..120) };
                }
                engine.advance(&mut st, wpm, tick as u32 * 100);
                render(&st, &mut cache, &mut display).unwrap();
            }

            let mut full = RecordingDisplay::new();
            render(&st, &mut RenderCache::new(), &mut full).unwrap();
            prop_assert!(display.pixels() == full.pixels());

            display.reset_counts();
            render(&st, &mut cache, &mut display).unwrap();
            prop_assert!(display.fills().is_empty());
            prop_assert_eq!(display.flushes(), 1);
        }
    }

    #[test]
    fn test_nothing_drawn_outside_screen() {
        let mut st = SimState::new(0);
        st.rival.phase = RivalPhase::Enter;
        st.rival.x = -20;
        st.y = GAME_Y;
        st.bounce_timer = 2;
        let (_, display) = first_frame(&st);
        assert!(display.fills().iter().all(|(r, _)| r.clipped(&SCREEN) == Some(*r)));
        assert!(display
            .fills()
            .iter()
            .filter(|(r, _)| r.y1 >= GAME_Y && r.y0 < tama_core::layout::LVL_Y)
            .all(|(r, _)| r.y0 >= GAME_Y));
    }
}
