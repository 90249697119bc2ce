//! Text overlays around the pet
//!
//! A sleeping pet gets three floating z's, a sitting one a bobbing question
//! mark, and a dead one the "DEAD" caption. At most one overlay is shown at
//! a time.

use tama_core::layout::{
    CAT_W, DEAD_TEXT_SCALE, DEAD_TEXT_X, DEAD_TEXT_Y, GAME_Y, GLYPH_PITCH,
};
use tama_core::palette::{DEAD_TEXT, QUESTION, ZZZ};
use tama_core::sprite::{GLYPH_A, GLYPH_D, GLYPH_E, GLYPH_H, GLYPH_QUESTION, GLYPH_W, GLYPH_Z};
use tama_core::{AnimState, SimState};

use crate::backend::{DisplayBackend, DisplayError};
use crate::geometry::Rect;
use crate::paint::Painter;

const OVERLAY_SCALE: i16 = 2;
const GLYPH_PX_W: i16 = GLYPH_W * OVERLAY_SCALE;
const GLYPH_PX_H: i16 = GLYPH_H * OVERLAY_SCALE;
const ZZZ_COUNT: i16 = 3;
const ZZZ_SPACING: i16 = 8;
const ZZZ_CYCLE: u16 = 6;

/// Overlay currently shown, with enough detail to tell frames apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Overlay {
    /// Anchored at the pet's top-left corner
    Zzz { x: i16, y: i16, bob: u8 },
    Question { x: i16, y: i16, bob: u8 },
    Dead,
}

impl Overlay {
    /// Overlay for the current state, if any
    ///
    /// Anchored to the pet's resting position, not its bounce offset.
    pub fn for_state(st: &SimState) -> Option<Self> {
        match st.anim {
            AnimState::Sleep => Some(Overlay::Zzz {
                x: st.x,
                y: st.y,
                bob: ((st.frame / 3) % ZZZ_CYCLE) as u8,
            }),
            AnimState::Sit => Some(Overlay::Question {
                x: st.x,
                y: st.y,
                bob: ((st.frame / 4) % 3) as u8,
            }),
            _ if st.dead => Some(Overlay::Dead),
            _ => None,
        }
    }

    /// Bounding box of everything this overlay can paint
    ///
    /// Independent of the bob phase, so clearing it always removes the
    /// previous frame.
    pub fn bounds(&self) -> Rect {
        match *self {
            Overlay::Zzz { x, y, .. } => {
                let x0 = zzz_x(x, 0);
                let top = y - 8 - (ZZZ_CYCLE as i16 - 1);
                Rect::new(
                    x0,
                    top,
                    zzz_x(x, ZZZ_COUNT - 1) + GLYPH_PX_W - 1,
                    y - 8 + GLYPH_PX_H - 1,
                )
            }
            Overlay::Question { x, y, .. } => {
                let qx = x + CAT_W / 2 - 3;
                Rect::new(qx, y - 14, qx + GLYPH_PX_W - 1, y - 12 + GLYPH_PX_H - 1)
            }
            Overlay::Dead => Rect::from_size(
                DEAD_TEXT_X,
                DEAD_TEXT_Y,
                4 * GLYPH_PITCH * DEAD_TEXT_SCALE - DEAD_TEXT_SCALE,
                GLYPH_H * DEAD_TEXT_SCALE,
            ),
        }
    }

    pub fn paint<D: DisplayBackend + ?Sized>(
        &self,
        painter: &mut Painter<'_, D>,
    ) -> Result<(), DisplayError> {
        match *self {
            Overlay::Zzz { x, y, bob } => {
                for i in 0..ZZZ_COUNT {
                    let offset = (bob as i16 + 2 * i) % ZZZ_CYCLE as i16;
                    let zy = y - 8 - offset;
                    if zy >= GAME_Y {
                        painter.mono(zzz_x(x, i), zy, GLYPH_Z, OVERLAY_SCALE, ZZZ)?;
                    }
                }
            }
            Overlay::Question { x, y, bob } => {
                let qy = y - 12 - bob as i16;
                if qy >= GAME_Y {
                    painter.mono(x + CAT_W / 2 - 3, qy, GLYPH_QUESTION, OVERLAY_SCALE, QUESTION)?;
                }
            }
            Overlay::Dead => {
                let advance = GLYPH_PITCH * DEAD_TEXT_SCALE;
                for (i, glyph) in [GLYPH_D, GLYPH_E, GLYPH_A, GLYPH_D].into_iter().enumerate() {
                    let gx = DEAD_TEXT_X + i as i16 * advance;
                    painter.mono(gx, DEAD_TEXT_Y, glyph, DEAD_TEXT_SCALE, DEAD_TEXT)?;
                }
            }
        }
        Ok(())
    }
}

const fn zzz_x(x: i16, i: i16) -> i16 {
    x + CAT_W / 2 - 4 + i * ZZZ_SPACING
}
