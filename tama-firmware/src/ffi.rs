//! QMK bindings
//!
//! Exposes the two user hooks the Halcyon module framework calls and binds
//! the handful of QMK functions the pet needs: WPM, timer, split side and
//! the Quantum Painter surface.
//!
//! Drawing goes to `lcd_surface` (an off-screen framebuffer); a flush
//! copies the surface to `lcd` and pushes it over SPI.

use core::cell::RefCell;
use core::ffi::c_void;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use tama_core::palette::Hsv;
use tama_core::timer::Millis;
use tama_core::traits::{Clock, SplitSide, TypingMeter};
use tama_display::geometry::{Rect, SCREEN};
use tama_display::{DisplayBackend, DisplayError};
use {cortex_m as _, defmt_rtt as _, panic_probe as _};

use crate::lifecycle::Tamagotchi;
use crate::settings::Settings;

/// Quantum Painter device handle
type PainterDevice = *mut c_void;

extern "C" {
    fn get_current_wpm() -> u8;
    fn timer_read32() -> u32;
    fn is_keyboard_left() -> bool;

    fn qp_rect(
        device: PainterDevice,
        left: u16,
        top: u16,
        right: u16,
        bottom: u16,
        hue: u8,
        sat: u8,
        val: u8,
        filled: bool,
    ) -> bool;
    fn qp_surface_draw(
        surface: PainterDevice,
        target: PainterDevice,
        x: u16,
        y: u16,
        entire_surface: bool,
    ) -> bool;
    fn qp_flush(device: PainterDevice) -> bool;

    static lcd: PainterDevice;
    static lcd_surface: PainterDevice;
}

/// Timer, WPM counter and split side
struct QmkHost;

impl Clock for QmkHost {
    fn now_ms(&self) -> Millis {
        unsafe { timer_read32() }
    }
}

impl TypingMeter for QmkHost {
    fn typing_speed(&self) -> u8 {
        unsafe { get_current_wpm() }
    }
}

impl SplitSide for QmkHost {
    fn is_left(&self) -> bool {
        unsafe { is_keyboard_left() }
    }
}

/// The TFT through its Quantum Painter surface
struct QmkDisplay {
    surface: PainterDevice,
    panel: PainterDevice,
    /// Copy the whole surface on the next flush, not just dirty regions
    full_blit: bool,
}

impl QmkDisplay {
    fn new(full_blit: bool) -> Result<Self, DisplayError> {
        let (surface, panel) = unsafe { (lcd_surface, lcd) };
        if surface.is_null() || panel.is_null() {
            return Err(DisplayError::NotInitialized);
        }
        Ok(Self {
            surface,
            panel,
            full_blit,
        })
    }
}

impl DisplayBackend for QmkDisplay {
    fn fill_rect(&mut self, rect: Rect, color: Hsv) -> Result<(), DisplayError> {
        let Some(r) = rect.clipped(&SCREEN) else {
            return Ok(());
        };
        let ok = unsafe {
            qp_rect(
                self.surface,
                r.x0 as u16,
                r.y0 as u16,
                r.x1 as u16,
                r.y1 as u16,
                color.h,
                color.s,
                color.v,
                true,
            )
        };
        if ok {
            Ok(())
        } else {
            Err(DisplayError::Communication)
        }
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        let entire = core::mem::replace(&mut self.full_blit, false);
        let ok = unsafe {
            qp_surface_draw(self.surface, self.panel, 0, 0, entire) && qp_flush(self.panel)
        };
        if ok {
            Ok(())
        } else {
            Err(DisplayError::Communication)
        }
    }
}

static TAMAGOTCHI: Mutex<CriticalSectionRawMutex, RefCell<Option<Tamagotchi>>> =
    Mutex::new(RefCell::new(None));

/// Run `f` on the instance with interrupts enabled
///
/// The instance is taken out of the mutex for the duration, so a frame
/// render never runs inside a critical section.
fn with_instance<T>(f: impl FnOnce(&mut Tamagotchi) -> T) -> Option<T> {
    let mut tama = TAMAGOTCHI.lock(|cell| cell.borrow_mut().take())?;
    let out = f(&mut tama);
    TAMAGOTCHI.lock(|cell| *cell.borrow_mut() = Some(tama));
    Some(out)
}

/// Start-up hook, called once by the module framework
#[no_mangle]
pub extern "C" fn module_post_init_user() -> bool {
    TAMAGOTCHI.lock(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(Tamagotchi::new(Settings::from_features()));
        }
    });

    with_instance(|tama| match QmkDisplay::new(true) {
        Ok(mut display) => tama.post_init(&QmkHost, &mut display),
        Err(e) => {
            warn!("Display not ready at start-up: {}", e);
            true
        }
    })
    .unwrap_or(true)
}

/// Main-loop hook
///
/// Returns false to stop the framework from running its own display update
/// and flush, which would overwrite the pet.
#[no_mangle]
pub extern "C" fn display_module_housekeeping_task_user(second_display: bool) -> bool {
    let skip = with_instance(|tama| match QmkDisplay::new(false) {
        Ok(mut display) => tama.housekeeping(&QmkHost, &mut display, second_display),
        Err(_) => tama.is_active(),
    })
    .unwrap_or(false);
    !skip
}
