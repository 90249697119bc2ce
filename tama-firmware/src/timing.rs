//! Frame-timing readout
//!
//! Render time in milliseconds, drawn small at the right end of the level
//! bar. Red once a frame takes longer than half the tick interval.

use tama_core::layout::{GLYPH_PITCH, LVL_Y, SCR_W};
use tama_core::palette::Hsv;
use tama_display::geometry::{Rect, LEVEL_BAR};
use tama_display::hud::{digits, draw_number};
use tama_display::{DisplayBackend, DisplayError, Painter};

const SCALE: i16 = 2;
/// Above this the readout turns red
const SLOW_MS: u8 = 50;
/// Room for three digits
const AREA: Rect = Rect::new(SCR_W - 30, LVL_Y, SCR_W - 1, LVL_Y + 9);

#[derive(Debug, Default)]
pub struct FrameTiming {
    shown: Option<u8>,
}

impl FrameTiming {
    pub const fn new() -> Self {
        Self { shown: None }
    }

    /// Forget the shown value, e.g. after the level bar was repainted
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `elapsed_ms` if it differs from what is on screen
    ///
    /// Flushes on its own, since the frame has already been pushed.
    pub fn show<D: DisplayBackend + ?Sized>(
        &mut self,
        elapsed_ms: u32,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        let ms = elapsed_ms.min(u8::MAX as u32) as u8;
        if self.shown == Some(ms) {
            return Ok(());
        }

        let mut painter = Painter::new(display);
        painter.set_clip(LEVEL_BAR);
        painter.clear(AREA)?;

        let color = if ms > SLOW_MS {
            Hsv::new(0, 200, 255)
        } else {
            Hsv::new(85, 200, 120)
        };
        let count = digits(ms as u16).len() as i16;
        let x = SCR_W - count * GLYPH_PITCH * SCALE;
        draw_number(&mut painter, x, LVL_Y, ms as u16, SCALE, color)?;
        painter.flush()?;

        self.shown = Some(ms);
        Ok(())
    }
}
