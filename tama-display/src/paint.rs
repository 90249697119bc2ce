//! Sprite painting
//!
//! Every sprite row is scanned for runs of equal color, and each run is
//! issued as one scaled rectangle. A 16-pixel cat row at 3x scale usually
//! costs three or four fills instead of sixteen.

use tama_core::layout::{CAT_BMP_H, CAT_BMP_W, CAT_SCALE, HEART_BMP, HEART_SCALE};
use tama_core::palette::{CatPalette, Hsv, HEART_FILL, HEART_OUTLINE};
use tama_core::sprite::{CatBitmap, MonoBitmap, HEART_EMPTY, HEART_FULL};

use crate::backend::{DisplayBackend, DisplayError};
use crate::geometry::{Rect, SCREEN};

/// How much of a heart is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeartFill {
    Empty,
    /// Left four columns red, rest outlined
    Half,
    Full,
}

impl HeartFill {
    /// Fill level of heart `index` (0-based) for a half-heart count
    pub const fn for_index(half_hearts: u8, index: u8) -> Self {
        if half_hearts >= (index + 1) * 2 {
            HeartFill::Full
        } else if half_hearts > index * 2 {
            HeartFill::Half
        } else {
            HeartFill::Empty
        }
    }
}

/// Columns of a half heart painted in the fill color
const HALF_HEART_COLS: u8 = 4;

/// Draws sprites onto a backend, clipped to a region
pub struct Painter<'a, D: DisplayBackend + ?Sized> {
    display: &'a mut D,
    clip: Rect,
}

impl<'a, D: DisplayBackend + ?Sized> Painter<'a, D> {
    pub fn new(display: &'a mut D) -> Self {
        Self { display, clip: SCREEN }
    }

    /// Restrict subsequent drawing to `clip`
    pub fn set_clip(&mut self, clip: Rect) {
        self.clip = clip;
    }

    /// Solid fill, clipped; nothing is issued when fully outside
    pub fn fill(&mut self, rect: Rect, color: Hsv) -> Result<(), DisplayError> {
        match rect.clipped(&self.clip) {
            Some(r) => self.display.fill_rect(r, color),
            None => Ok(()),
        }
    }

    /// Paint a rectangle with the background color
    pub fn clear(&mut self, rect: Rect) -> Result<(), DisplayError> {
        self.fill(rect, Hsv::BLACK)
    }

    pub fn flush(&mut self) -> Result<(), DisplayError> {
        self.display.flush()
    }

    /// Paint one bitmap row as merged runs
    ///
    /// `color_at` maps a column to its color, `None` for transparent.
    fn row_runs<F>(
        &mut self,
        x: i16,
        y: i16,
        width: u8,
        scale: i16,
        color_at: F,
    ) -> Result<(), DisplayError>
    where
        F: Fn(u8) -> Option<Hsv>,
    {
        let mut col = 0u8;
        while col < width {
            let Some(color) = color_at(col) else {
                col += 1;
                continue;
            };
            let mut run = 1u8;
            while col + run < width && color_at(col + run) == Some(color) {
                run += 1;
            }
            let px = x + col as i16 * scale;
            self.fill(
                Rect::new(px, y, px + run as i16 * scale - 1, y + scale - 1),
                color,
            )?;
            col += run;
        }
        Ok(())
    }

    /// Paint a 2bpp cat at 3x scale
    ///
    /// Palette index 0 is transparent. `brightness` scales the value
    /// channel of every palette entry.
    pub fn cat(
        &mut self,
        x: i16,
        y: i16,
        bitmap: &CatBitmap,
        mirror: bool,
        brightness: u8,
        palette: &CatPalette,
    ) -> Result<(), DisplayError> {
        let last_col = (CAT_BMP_W - 1) as usize;
        for row in 0..CAT_BMP_H as usize {
            if bitmap.row(row) == 0 {
                continue;
            }
            let py = y + row as i16 * CAT_SCALE;
            if py + CAT_SCALE <= self.clip.y0 || py > self.clip.y1 {
                continue;
            }
            self.row_runs(x, py, CAT_BMP_W as u8, CAT_SCALE, |col| {
                let src = if mirror { last_col - col as usize } else { col as usize };
                match bitmap.pixel(row, src) {
                    0 => None,
                    idx => Some(palette[idx as usize].dimmed(brightness)),
                }
            })?;
        }
        Ok(())
    }

    /// Paint a one-color bitmap (icon or glyph) at `scale`
    pub fn mono(
        &mut self,
        x: i16,
        y: i16,
        bitmap: MonoBitmap,
        scale: i16,
        color: Hsv,
    ) -> Result<(), DisplayError> {
        for (row, bits) in bitmap.rows().iter().enumerate() {
            if *bits == 0 {
                continue;
            }
            let py = y + row as i16 * scale;
            self.row_runs(x, py, bitmap.width(), scale, |col| {
                bitmap.is_set(row, col).then_some(color)
            })?;
        }
        Ok(())
    }

    /// Paint one heart at 2x scale
    pub fn heart(&mut self, x: i16, y: i16, fill: HeartFill) -> Result<(), DisplayError> {
        for row in 0..HEART_BMP as usize {
            let py = y + row as i16 * HEART_SCALE;
            self.row_runs(x, py, HEART_BMP as u8, HEART_SCALE, |col| {
                let solid = HEART_FULL.is_set(row, col);
                let outline = HEART_EMPTY.is_set(row, col);
                match fill {
                    HeartFill::Full => solid.then_some(HEART_FILL),
                    HeartFill::Half if col < HALF_HEART_COLS && solid => Some(HEART_FILL),
                    HeartFill::Half | HeartFill::Empty => outline.then_some(HEART_OUTLINE),
                }
            })?;
        }
        Ok(())
    }
}
