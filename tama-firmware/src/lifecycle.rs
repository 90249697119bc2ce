//! Pet lifecycle
//!
//! Start-up and per-pass housekeeping, independent of how the host is
//! reached. The QMK bindings in `ffi` wrap this with the real timer,
//! typing meter and display.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tama_core::engine::TickReport;
use tama_core::timer::{elapsed_ms, Millis};
use tama_core::traits::{Clock, SplitSide, TypingMeter};
use tama_core::{Engine, Event, RivalPhase, SimState};
use tama_display::geometry::SCREEN;
use tama_display::{render, DisplayBackend, DisplayError, Painter, RenderCache};

use crate::settings::Settings;
use crate::timing::FrameTiming;

/// State that exists only on the half driving the display
struct Active {
    engine: Engine<SmallRng>,
    state: SimState,
    cache: RenderCache,
    timing: FrameTiming,
    last_frame: Millis,
}

/// The pet and everything needed to keep it on screen
pub struct Tamagotchi {
    settings: Settings,
    active: Option<Active>,
}

impl Tamagotchi {
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings,
            active: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// True once started on the display-owning half
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current simulation state, when active
    pub fn state(&self) -> Option<&SimState> {
        self.active.as_ref().map(|a| &a.state)
    }

    /// Start-up hook
    ///
    /// On the half that does not own the display this does nothing. On the
    /// owning half it creates the pet, clears the screen and shows the
    /// first frame. Returns true in both cases.
    pub fn post_init<H, D>(&mut self, host: &H, display: &mut D) -> bool
    where
        H: Clock + TypingMeter + SplitSide,
        D: DisplayBackend + ?Sized,
    {
        let is_left = host.is_left();
        if !self.settings.side.owns(is_left) {
            info!("Pet display is on the other half, staying inactive");
            return true;
        }
        if self.active.is_some() {
            warn!("Pet already started");
            return true;
        }

        let now = host.now_ms();
        let mut engine = Engine::new(
            self.settings.tuning.clone(),
            SmallRng::seed_from_u64(now as u64),
        );
        let mut state = engine.spawn(now);
        state.wpm = host.typing_speed();

        let mut cache = RenderCache::new();
        if let Err(e) = draw_initial(&state, &mut cache, display) {
            warn!("First frame failed: {}", e);
        }

        info!("Pet started on the {} half", if is_left { "left" } else { "right" });
        self.active = Some(Active {
            engine,
            state,
            cache,
            timing: FrameTiming::new(),
            last_frame: now,
        });
        true
    }

    /// Per-pass hook
    ///
    /// Returns true when the host should skip its own display update. That
    /// is the case whenever the pet is active, including passes for the
    /// second display and passes inside the tick interval where nothing is
    /// drawn.
    pub fn housekeeping<H, D>(&mut self, host: &H, display: &mut D, second_display: bool) -> bool
    where
        H: Clock + TypingMeter,
        D: DisplayBackend + ?Sized,
    {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if second_display {
            return true;
        }

        let now = host.now_ms();
        if elapsed_ms(now, active.last_frame) < self.settings.tuning.frame_ms {
            return true;
        }
        active.last_frame = now;

        let report = active.engine.advance(&mut active.state, host.typing_speed(), now);
        log_events(&report);

        let level_bar = (active.cache.level, active.cache.bar_fill, active.cache.stale);
        let started = host.now_ms();
        if let Err(e) = render(&active.state, &mut active.cache, display) {
            warn!("Frame failed: {}", e);
        }

        if self.settings.frame_timing {
            let after = (active.cache.level, active.cache.bar_fill, active.cache.stale);
            if after != level_bar || level_bar.2 {
                // The level bar was repainted over the readout
                active.timing.invalidate();
            }
            let took = elapsed_ms(host.now_ms(), started);
            if let Err(e) = active.timing.show(took, display) {
                warn!("Frame timing readout failed: {}", e);
            }
        }
        true
    }
}

/// Black screen, then a full first frame
fn draw_initial<D: DisplayBackend + ?Sized>(
    state: &SimState,
    cache: &mut RenderCache,
    display: &mut D,
) -> Result<(), DisplayError> {
    Painter::new(&mut *display).clear(SCREEN)?;
    cache.invalidate();
    render(state, cache, display)
}

fn log_events(report: &TickReport) {
    for event in &report.events {
        match *event {
            Event::Died => info!("Pet died"),
            Event::Revived => info!("Pet revived"),
            Event::LevelUp(level) => info!("Level up: {}", level),
            Event::Rival(RivalPhase::Enter) => info!("A rival wanders in"),
            Event::Rival(phase) => debug!("Rival phase: {}", phase),
            Event::Captured { slot, health } => debug!("Captured icon {}, health {}", slot, health),
            Event::Drained(_) | Event::Spawned(_) => {}
        }
    }
}
