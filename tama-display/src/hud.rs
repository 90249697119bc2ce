//! Status bar and level bar
//!
//! The top bar shows the typing speed and health hearts; the bottom bar
//! shows the level and progress towards the next one. Both are repainted
//! as a whole, and only when what they show has changed.

use heapless::Vec;
use tama_core::layout::{
    DIGIT_SCALE, GLYPH_PITCH, HEARTS_X, HEARTS_Y, HEART_COUNT, HEART_PITCH, LVL_SCALE, LVL_Y,
    SCR_H, SCR_W, WPM_Y, XP_BAR_H, XP_BAR_PAD, XP_BAR_W,
};
use tama_core::palette::{level_hue, Hsv, WPM_ACTIVE, WPM_IDLE, XP_BAR_BACKGROUND};
use tama_core::sprite::{digit_glyph, GLYPH_L, GLYPH_V};

use crate::backend::{DisplayBackend, DisplayError};
use crate::geometry::{Rect, LEVEL_BAR, TOP_BAR};
use crate::paint::{HeartFill, Painter};

/// Decimal digits of `n`, most significant first
pub fn digits(mut n: u16) -> Vec<u8, 5> {
    let mut out = Vec::new();
    loop {
        // At most five digits for a u16
        let _ = out.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    out
}

/// Width of `count` 3x5 glyphs at `scale`, one blank column between each
pub const fn text_width(count: i16, scale: i16) -> i16 {
    if count == 0 {
        0
    } else {
        count * GLYPH_PITCH * scale - scale
    }
}

/// XP bar fill in pixels
///
/// Steps of `xp_next / bar width`, so a full bar means the level-up is
/// imminent rather than exactly reached.
pub fn xp_bar_fill(xp: u32, xp_next: u32) -> u8 {
    let step = (xp_next / XP_BAR_W as u32).max(1);
    (xp / step).min(XP_BAR_W as u32) as u8
}

/// Row of digits starting at `x`
pub fn draw_number<D: DisplayBackend + ?Sized>(
    painter: &mut Painter<'_, D>,
    mut x: i16,
    y: i16,
    value: u16,
    scale: i16,
    color: Hsv,
) -> Result<(), DisplayError> {
    for d in digits(value) {
        if let Some(glyph) = digit_glyph(d) {
            painter.mono(x, y, glyph, scale, color)?;
        }
        x += GLYPH_PITCH * scale;
    }
    Ok(())
}

/// Clear and repaint the WPM readout and hearts
pub fn draw_status_bar<D: DisplayBackend + ?Sized>(
    painter: &mut Painter<'_, D>,
    wpm: u8,
    half_hearts: u8,
) -> Result<(), DisplayError> {
    painter.set_clip(TOP_BAR);
    painter.clear(TOP_BAR)?;

    let count = digits(wpm as u16).len() as i16;
    let x = (SCR_W - text_width(count, DIGIT_SCALE)) / 2;
    let color = if wpm > 0 { WPM_ACTIVE } else { WPM_IDLE };
    draw_number(painter, x, WPM_Y, wpm as u16, DIGIT_SCALE, color)?;

    for i in 0..HEART_COUNT {
        let hx = HEARTS_X + i as i16 * HEART_PITCH;
        painter.heart(hx, HEARTS_Y, HeartFill::for_index(half_hearts, i))?;
    }
    Ok(())
}

/// Clear and repaint the level readout and XP bar
pub fn draw_level_bar<D: DisplayBackend + ?Sized>(
    painter: &mut Painter<'_, D>,
    level: u16,
    bar_fill: u8,
) -> Result<(), DisplayError> {
    painter.set_clip(LEVEL_BAR);
    painter.clear(LEVEL_BAR)?;

    let hue = level_hue(level);
    let count = 2 + digits(level).len() as i16;
    let mut x = (SCR_W - text_width(count, LVL_SCALE)) / 2;
    let label = Hsv::new(hue, 180, 200);
    painter.mono(x, LVL_Y, GLYPH_L, LVL_SCALE, label)?;
    x += GLYPH_PITCH * LVL_SCALE;
    painter.mono(x, LVL_Y, GLYPH_V, LVL_SCALE, label)?;
    x += GLYPH_PITCH * LVL_SCALE;
    draw_number(painter, x, LVL_Y, level, LVL_SCALE, Hsv::new(hue, 200, 220))?;

    let bar_y = SCR_H - XP_BAR_H;
    painter.fill(
        Rect::from_size(XP_BAR_PAD, bar_y, XP_BAR_W, XP_BAR_H),
        XP_BAR_BACKGROUND,
    )?;
    if bar_fill > 0 {
        let fill = bar_fill as i16;
        painter.fill(
            Rect::from_size(XP_BAR_PAD, bar_y, fill, XP_BAR_H),
            Hsv::new(hue, 220, 180),
        )?;
        if fill < XP_BAR_W {
            let tip = XP_BAR_PAD + fill - 1;
            painter.fill(Rect::new(tip, bar_y, tip, SCR_H - 1), Hsv::new(hue, 100, 255))?;
        }
    }
    Ok(())
}
