//! Screen layout
//!
//! Portrait 135x240 TFT. Top rows hold the WPM readout and hearts, the
//! bottom rows hold the level bar, the play field sits in between.

/// Screen width in pixels
pub const SCR_W: i16 = 135;
/// Screen height in pixels
pub const SCR_H: i16 = 240;

/// Cat bitmap scale factor
pub const CAT_SCALE: i16 = 3;
/// Icon bitmap scale factor
pub const ICON_SCALE: i16 = 2;
/// WPM digit scale factor
pub const DIGIT_SCALE: i16 = 3;
/// Horizontal advance of a 3x5 glyph in bitmap pixels
pub const GLYPH_PITCH: i16 = 4;

/// Cat bitmap width (source pixels)
pub const CAT_BMP_W: i16 = 16;
/// Cat bitmap height (source pixels)
pub const CAT_BMP_H: i16 = 16;
/// Icon bitmap width (source pixels)
pub const ICON_BMP_W: i16 = 8;
/// Icon bitmap height (source pixels)
pub const ICON_BMP_H: i16 = 8;

/// Cat sprite width on screen
pub const CAT_W: i16 = CAT_BMP_W * CAT_SCALE;
/// Cat sprite height on screen
pub const CAT_H: i16 = CAT_BMP_H * CAT_SCALE;
/// Icon sprite width on screen
pub const ICON_W: i16 = ICON_BMP_W * ICON_SCALE;
/// Icon sprite height on screen
pub const ICON_H: i16 = ICON_BMP_H * ICON_SCALE;

pub const WPM_Y: i16 = 2;
pub const HEARTS_Y: i16 = 20;
/// First row of the play field
pub const GAME_Y: i16 = 34;
pub const LVL_H: i16 = 14;
/// First row of the level bar
pub const LVL_Y: i16 = SCR_H - LVL_H;
/// Play field height
pub const GAME_H: i16 = LVL_Y - GAME_Y;

pub const HEART_BMP: i16 = 7;
pub const HEART_SCALE: i16 = 2;
pub const HEART_DISP: i16 = HEART_BMP * HEART_SCALE;
pub const HEART_COUNT: u8 = 5;
pub const HEART_GAP: i16 = 3;
pub const HEART_PITCH: i16 = HEART_DISP + HEART_GAP;
pub const HEARTS_W: i16 = HEART_COUNT as i16 * HEART_DISP + (HEART_COUNT as i16 - 1) * HEART_GAP;
pub const HEARTS_X: i16 = (SCR_W - HEARTS_W) / 2;

pub const LVL_SCALE: i16 = 2;
pub const XP_BAR_H: i16 = 3;
pub const XP_BAR_PAD: i16 = 4;
/// XP bar width in pixels (also the maximum fill value)
pub const XP_BAR_W: i16 = SCR_W - 2 * XP_BAR_PAD;

/// Space above the cat reserved for the zzz / ? overlays
pub const OVERLAY_PAD: i16 = 16;

/// Top-left corner of the "DEAD" caption
pub const DEAD_TEXT_X: i16 = (SCR_W - 45) / 2;
pub const DEAD_TEXT_Y: i16 = SCR_H / 2 + 20;
/// Scale of the "DEAD" caption glyphs
pub const DEAD_TEXT_SCALE: i16 = 3;

/// Largest x a cat target may take (exclusive)
pub const TARGET_X_SPAN: i16 = SCR_W - CAT_W;
/// Vertical span a cat target may take (exclusive), offset by `GAME_Y`
pub const TARGET_Y_SPAN: i16 = GAME_H - CAT_H;
