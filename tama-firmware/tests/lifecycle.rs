//! Lifecycle tests against a fake keyboard host

use std::cell::Cell;

use proptest::prelude::*;
use tama_core::timer::Millis;
use tama_core::traits::{Clock, SplitSide, TypingMeter};
use tama_core::AnimState;
use tama_display::geometry::SCREEN;
use tama_display::recording::RecordingDisplay;
use tama_display::DisplayError;
use tama_firmware::{DisplaySide, Settings, Tamagotchi};

struct FakeHost {
    now: Cell<Millis>,
    wpm: Cell<u8>,
    left: bool,
}

impl FakeHost {
    fn new(left: bool) -> Self {
        Self {
            now: Cell::new(1_000),
            wpm: Cell::new(0),
            left,
        }
    }

    fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for FakeHost {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

impl TypingMeter for FakeHost {
    fn typing_speed(&self) -> u8 {
        self.wpm.get()
    }
}

impl SplitSide for FakeHost {
    fn is_left(&self) -> bool {
        self.left
    }
}

fn started(settings: Settings) -> (Tamagotchi, FakeHost, RecordingDisplay) {
    let host = FakeHost::new(true);
    let mut display = RecordingDisplay::new();
    let mut tama = Tamagotchi::new(settings);
    assert!(tama.post_init(&host, &mut display));
    (tama, host, display)
}

/// Run housekeeping every 100 ms for `ms`
fn run_for(tama: &mut Tamagotchi, host: &FakeHost, display: &mut RecordingDisplay, ms: u32) {
    for _ in 0..ms / 100 {
        host.advance(100);
        assert!(tama.housekeeping(host, display, false));
    }
}

#[test]
fn test_other_half_stays_inactive() {
    let host = FakeHost::new(false);
    let mut display = RecordingDisplay::new();
    let mut tama = Tamagotchi::new(Settings::default());

    assert!(tama.post_init(&host, &mut display));
    assert!(!tama.is_active());
    assert!(display.fills().is_empty());

    host.advance(500);
    assert!(!tama.housekeeping(&host, &mut display, false));
    assert_eq!(display.flushes(), 0);
}

#[test]
fn test_right_side_setting() {
    let host = FakeHost::new(false);
    let mut display = RecordingDisplay::new();
    let mut tama = Tamagotchi::new(Settings {
        side: DisplaySide::Right,
        ..Settings::default()
    });
    assert!(tama.post_init(&host, &mut display));
    assert!(tama.is_active());
}

#[test]
fn test_startup_clears_and_draws_first_frame() {
    let (tama, _, display) = started(Settings::default());
    assert!(tama.is_active());
    assert_eq!(display.fills()[0].0, SCREEN);
    assert_eq!(display.flushes(), 1);

    let st = tama.state().unwrap();
    assert_eq!(st.health, 100);
    assert_eq!(st.level, 1);
    assert!(!st.dead);
}

#[test]
fn test_second_display_pass_is_skipped() {
    let (mut tama, host, mut display) = started(Settings::default());
    display.reset_counts();
    host.advance(500);
    assert!(tama.housekeeping(&host, &mut display, true));
    assert_eq!(display.flushes(), 0);
    assert_eq!(tama.state().unwrap().frame, 0);
}

#[test]
fn test_ticks_are_throttled() {
    let (mut tama, host, mut display) = started(Settings::default());
    display.reset_counts();

    host.advance(50);
    assert!(tama.housekeeping(&host, &mut display, false));
    assert_eq!(display.flushes(), 0);

    host.advance(50);
    assert!(tama.housekeeping(&host, &mut display, false));
    assert_eq!(display.flushes(), 1);
    assert_eq!(tama.state().unwrap().frame, 1);

    // Immediately again: still inside the interval
    assert!(tama.housekeeping(&host, &mut display, false));
    assert_eq!(display.flushes(), 1);
}

#[test]
fn test_display_error_keeps_pet_running() {
    let (mut tama, host, mut display) = started(Settings::default());
    host.wpm.set(40);
    display.fail_next(DisplayError::Communication);
    host.advance(100);
    assert!(tama.housekeeping(&host, &mut display, false));
    assert!(tama.is_active());

    display.reset_counts();
    host.advance(100);
    assert!(tama.housekeeping(&host, &mut display, false));
    assert_eq!(display.flushes(), 1);
    assert!(!display.fills().is_empty());
}

#[test]
fn test_idle_sleep_then_wake() {
    let (mut tama, host, mut display) = started(Settings::default());
    run_for(&mut tama, &host, &mut display, 600_100);
    let st = tama.state().unwrap();
    assert_eq!(st.anim, AnimState::Sleep);
    assert!(!st.dead);

    // The spawn timer last restarted on this quiet tick
    let quiet = host.now_ms();
    host.wpm.set(30);
    host.advance(100);
    assert!(tama.housekeeping(&host, &mut display, false));
    let st = tama.state().unwrap();
    assert!(matches!(st.anim, AnimState::Walk | AnimState::Idle));
    assert_eq!(st.last_active, host.now_ms());

    // At 30 wpm the first collectible arrives 4 to 8 seconds in
    let mut spawned_at = None;
    for _ in 0..90 {
        host.advance(100);
        tama.housekeeping(&host, &mut display, false);
        let st = tama.state().unwrap();
        if st.icons.iter().any(|i| i.active) || st.bounce_timer > 0 {
            spawned_at = Some(host.now_ms().wrapping_sub(quiet));
            break;
        }
    }
    let spawned_at = spawned_at.unwrap();
    assert!((4_000..8_000).contains(&spawned_at), "spawned after {} ms", spawned_at);
}

#[test]
fn test_frame_timing_adds_flush() {
    let (mut tama, host, mut display) = started(Settings {
        frame_timing: true,
        ..Settings::default()
    });
    display.reset_counts();
    host.advance(100);
    tama.housekeeping(&host, &mut display, false);
    // Frame plus the readout
    assert_eq!(display.flushes(), 2);

    display.reset_counts();
    host.advance(100);
    tama.housekeeping(&host, &mut display, false);
    // Same reading, nothing new to show
    assert_eq!(display.flushes(), 1);
}

#[test]
fn test_clock_wraparound() {
    let host = FakeHost::new(true);
    host.now.set(u32::MAX - 150);
    let mut display = RecordingDisplay::new();
    let mut tama = Tamagotchi::new(Settings::default());
    tama.post_init(&host, &mut display);
    display.reset_counts();

    host.advance(200);
    assert!(tama.housekeeping(&host, &mut display, false));
    assert_eq!(display.flushes(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ticks_respect_frame_interval(gaps in prop::collection::vec(1u32..250, 1..200)) {
        let (mut tama, host, mut display) = started(Settings::default());
        let frame_ms = tama.settings().tuning.frame_ms;
        let mut last_tick = host.now_ms();
        let mut frame = tama.state().unwrap().frame;

        for gap in gaps {
            host.advance(gap);
            prop_assert!(tama.housekeeping(&host, &mut display, false));
            let now_frame = tama.state().unwrap().frame;
            let since = host.now_ms().wrapping_sub(last_tick);
            if now_frame != frame {
                prop_assert_eq!(now_frame, frame.wrapping_add(1));
                prop_assert!(since >= frame_ms);
                last_tick = host.now_ms();
                frame = now_frame;
            } else {
                prop_assert!(since < frame_ms);
            }
        }
    }
}
