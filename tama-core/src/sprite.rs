//! Sprite store
//!
//! Cat bitmaps are 16x16 at 2 bits per pixel, one `u32` per row with column
//! 0 in bits 31:30. Index 0 is transparent, 1 the dark outline, 2 the body
//! and 3 the light fill. Icons, hearts and glyphs are 1 bit per pixel with
//! column 0 in the highest used bit.

use crate::palette::Hsv;

/// One 16x16 cat frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatBitmap(pub [u32; 16]);

impl CatBitmap {
    /// Packed bits of one row
    pub const fn row(&self, row: usize) -> u32 {
        self.0[row]
    }

    /// Palette index (0-3) of the pixel at `row`, `col`
    pub const fn pixel(&self, row: usize, col: usize) -> u8 {
        ((self.0[row] >> (2 * (15 - col))) & 3) as u8
    }
}

/// Animation sets available for cats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpriteSet {
    /// Standing pose, used while the pet sits and for the rival's stare
    Walk,
    /// Full trot cycle
    Trot,
    /// Sitting with a tail wag, used while the pet idles
    Sit,
    /// Lying on its side
    Sleep,
    /// Arched back and hissing
    Angry,
}

impl SpriteSet {
    /// All frames of this set
    pub fn frames(self) -> &'static [CatBitmap] {
        match self {
            SpriteSet::Walk => &WALK,
            SpriteSet::Trot => &TROT,
            SpriteSet::Sit => &SIT,
            SpriteSet::Sleep => &SLEEP,
            SpriteSet::Angry => &ANGRY,
        }
    }

    pub fn frame_count(self) -> u8 {
        self.frames().len() as u8
    }

    /// Frame `index`, wrapping past the end of the set
    pub fn frame(self, index: u8) -> &'static CatBitmap {
        let frames = self.frames();
        &frames[index as usize % frames.len()]
    }
}

/// A single frame of a sprite set
///
/// Two poses compare equal exactly when they paint the same bitmap, so the
/// renderer can use this for change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pose {
    pub set: SpriteSet,
    pub frame: u8,
}

impl Pose {
    pub fn new(set: SpriteSet, frame: u8) -> Self {
        Self {
            set,
            frame: frame % set.frame_count(),
        }
    }

    /// Pick a frame from a monotonically increasing counter
    ///
    /// The frame advances every `divisor` ticks and wraps around the set.
    pub fn animated(set: SpriteSet, counter: u16, divisor: u16) -> Self {
        let index = (counter / divisor.max(1)) % set.frame_count() as u16;
        Self::new(set, index as u8)
    }

    pub fn bitmap(&self) -> &'static CatBitmap {
        self.set.frame(self.frame)
    }
}

/// 1-bit bitmap up to 8 pixels wide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonoBitmap {
    width: u8,
    rows: &'static [u8],
}

impl MonoBitmap {
    pub const fn new(width: u8, rows: &'static [u8]) -> Self {
        Self { width, rows }
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> u8 {
        self.rows.len() as u8
    }

    pub fn rows(&self) -> &'static [u8] {
        self.rows
    }

    /// Whether the pixel at `row`, `col` is set
    pub fn is_set(&self, row: usize, col: u8) -> bool {
        col < self.width && (self.rows[row] >> (self.width - 1 - col)) & 1 == 1
    }
}

/// Collectible kinds, spawned round-robin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconKind {
    #[default]
    Fish,
    Droplet,
    Lightning,
}

impl IconKind {
    /// The kind spawned after this one
    pub const fn next(self) -> Self {
        match self {
            IconKind::Fish => IconKind::Droplet,
            IconKind::Droplet => IconKind::Lightning,
            IconKind::Lightning => IconKind::Fish,
        }
    }

    pub const fn bitmap(self) -> MonoBitmap {
        match self {
            IconKind::Fish => ICON_FISH,
            IconKind::Droplet => ICON_DROPLET,
            IconKind::Lightning => ICON_LIGHTNING,
        }
    }

    pub const fn color(self) -> Hsv {
        match self {
            IconKind::Fish => Hsv::new(20, 200, 255),
            IconKind::Droplet => Hsv::new(140, 200, 255),
            IconKind::Lightning => Hsv::new(42, 255, 255),
        }
    }
}

pub const ICON_FISH: MonoBitmap =
    MonoBitmap::new(8, &[0x00, 0x18, 0x3E, 0x7F, 0x7F, 0x3E, 0x18, 0x00]);
pub const ICON_DROPLET: MonoBitmap =
    MonoBitmap::new(8, &[0x10, 0x10, 0x38, 0x7C, 0x7C, 0xFE, 0x7C, 0x38]);
pub const ICON_LIGHTNING: MonoBitmap =
    MonoBitmap::new(8, &[0x08, 0x18, 0x30, 0x7E, 0x1C, 0x18, 0x30, 0x20]);

pub const HEART_FULL: MonoBitmap = MonoBitmap::new(7, &[0x36, 0x7F, 0x7F, 0x7F, 0x3E, 0x1C, 0x08]);
pub const HEART_EMPTY: MonoBitmap = MonoBitmap::new(7, &[0x36, 0x41, 0x41, 0x41, 0x22, 0x14, 0x08]);

/// Width of the 3x5 font
pub const GLYPH_W: i16 = 3;
/// Height of the 3x5 font
pub const GLYPH_H: i16 = 5;

const DIGITS: [MonoBitmap; 10] = [
    MonoBitmap::new(3, &[0x07, 0x05, 0x05, 0x05, 0x07]),
    MonoBitmap::new(3, &[0x02, 0x06, 0x02, 0x02, 0x07]),
    MonoBitmap::new(3, &[0x07, 0x01, 0x07, 0x04, 0x07]),
    MonoBitmap::new(3, &[0x07, 0x01, 0x07, 0x01, 0x07]),
    MonoBitmap::new(3, &[0x05, 0x05, 0x07, 0x01, 0x01]),
    MonoBitmap::new(3, &[0x07, 0x04, 0x07, 0x01, 0x07]),
    MonoBitmap::new(3, &[0x07, 0x04, 0x07, 0x05, 0x07]),
    MonoBitmap::new(3, &[0x07, 0x01, 0x02, 0x02, 0x02]),
    MonoBitmap::new(3, &[0x07, 0x05, 0x07, 0x05, 0x07]),
    MonoBitmap::new(3, &[0x07, 0x05, 0x07, 0x01, 0x07]),
];

/// 3x5 glyph for a decimal digit, `None` above 9
pub fn digit_glyph(digit: u8) -> Option<MonoBitmap> {
    DIGITS.get(digit as usize).copied()
}

pub const GLYPH_Z: MonoBitmap = MonoBitmap::new(3, &[0x07, 0x01, 0x02, 0x04, 0x07]);
pub const GLYPH_QUESTION: MonoBitmap = MonoBitmap::new(3, &[0x06, 0x01, 0x02, 0x00, 0x02]);
pub const GLYPH_L: MonoBitmap = MonoBitmap::new(3, &[0x04, 0x04, 0x04, 0x04, 0x07]);
pub const GLYPH_V: MonoBitmap = MonoBitmap::new(3, &[0x05, 0x05, 0x05, 0x05, 0x02]);
pub const GLYPH_D: MonoBitmap = MonoBitmap::new(3, &[0x06, 0x05, 0x05, 0x05, 0x06]);
pub const GLYPH_E: MonoBitmap = MonoBitmap::new(3, &[0x07, 0x04, 0x07, 0x04, 0x07]);
pub const GLYPH_A: MonoBitmap = MonoBitmap::new(3, &[0x02, 0x05, 0x07, 0x05, 0x05]);

// Extracted from the cat sprite sheet: walk is row 2, trot row 5, sleep
// row 6, sit row 7 and angry row 9.

static WALK: [CatBitmap; 4] = [
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0005_0140, 0x0006_5640, 0x0006_FF40, 0x0006_5940,
        0x0006_FF40, 0x0006_AA40, 0x001A_F540, 0x001A_DBD0,
        0x001B_D540, 0x056B_7400, 0x1A6B_7400, 0x1555_5400,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0005_0140, 0x0006_5640, 0x0006_FF40,
        0x0006_5940, 0x0006_FF40, 0x001A_F540, 0x001A_9BD0,
        0x001B_D540, 0x056B_7400, 0x1A6B_7400, 0x1555_5400,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0014_1400, 0x0019_5500, 0x0006_5900,
        0x0006_FF40, 0x0006_FF40, 0x001A_A540, 0x001A_DBD0,
        0x001B_D540, 0x056B_7400, 0x1A6B_7400, 0x1555_5400,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0014_1400, 0x0019_5500, 0x0006_5900, 0x0006_FF40,
        0x0006_FF40, 0x0006_AA40, 0x001A_F540, 0x001A_DBD0,
        0x001B_D540, 0x056B_7400, 0x1A6B_7400, 0x1555_5400,
    ]),
];

static TROT: [CatBitmap; 8] = [
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_5050, 0x0140_6550, 0x0740_6FD0,
        0x0740_6DA4, 0x0740_6FF4, 0x0755_6AA4, 0x01FF_FFD0,
        0x01FF_FFD0, 0x01DF_DED0, 0x0195_5DD0, 0x0145_1450,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0001_4140, 0x0501_9540, 0x1D00_6FD0, 0x1D00_6DA4,
        0x0740_6FF4, 0x0755_6AA4, 0x05FF_F595, 0x1FFF_FF7D,
        0x1555_5554, 0x0000_0000, 0x0000_0000, 0x0000_0000,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0001_4140,
        0x4001_9540, 0xD000_6FD0, 0x7400_6DA4, 0x1D00_6FF4,
        0x0555_65A5, 0x1FFF_FF55, 0x15FF_F554, 0x0055_5000,
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0001_4140, 0x5001_9540, 0x7400_6FD0, 0x1D00_6DA4,
        0x0740_6FF4, 0x0155_6AA4, 0x05FF_F595, 0x1FFF_FF7D,
        0x1555_5554, 0x0000_0000, 0x0000_0000, 0x0000_0000,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x0000_5050, 0x0500_6550,
        0x1F40_6FD0, 0x05D0_6DA4, 0x01D0_6FF4, 0x0155_6AA4,
        0x01FF_FFD0, 0x01DF_DED0, 0x0065_7740, 0x0055_5140,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0001_4140, 0x0541_9550, 0x1FD0_6FD0,
        0x05D0_6DA4, 0x0155_6FF4, 0x01FF_EAA4, 0x01F7_FF50,
        0x01FD_DD40, 0x005F_57D0, 0x0005_4140, 0x0000_0000,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0051_4140, 0x01D1_9550, 0x01D0_6FD0, 0x0740_6DA4,
        0x0755_6FF4, 0x01FF_EAA4, 0x01F5_FF50, 0x01FF_5D50,
        0x0055_5550, 0x0000_0000, 0x0000_0000, 0x0000_0000,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0141_4140, 0x0741_9550, 0x0740_6FD0,
        0x0740_6DA4, 0x0755_6FF4, 0x01FF_EAA4, 0x01F7_FF50,
        0x01FD_DD40, 0x005F_57D0, 0x0005_4140, 0x0000_0000,
    ]),
];

static SIT: [CatBitmap; 4] = [
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0001_4140, 0x0501_9540, 0x1D01_BF40,
        0x1D01_BF40, 0x1D01_B690, 0x1D55_AA90, 0x07FF_FF40,
        0x07FF_FF40, 0x077F_7B40, 0x0655_7740, 0x0514_5140,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0500, 0x0000_1900, 0x0505_1D00, 0x1D06_7F40,
        0x1D06_FD40, 0x1D06_DA40, 0x1D56_AA50, 0x07FF_FFE4,
        0x07FF_FD54, 0x077F_7400, 0x0655_7400, 0x0514_5000,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0500, 0x0000_1900, 0x0005_1D00, 0x0146_7F40,
        0x0746_FD40, 0x1D06_DA40, 0x1D56_AA40, 0x1FFF_FD00,
        0x07FF_FF40, 0x077F_76D0, 0x0655_7550, 0x0514_5000,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0500, 0x0000_1900, 0x0505_1D00, 0x1D06_7F40,
        0x1D06_FD40, 0x0746_DA40, 0x0756_AA40, 0x07FF_FD00,
        0x07FF_FF40, 0x077F_76D0, 0x0655_7550, 0x0514_5000,
    ]),
];

static SLEEP: [CatBitmap; 4] = [
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_5014, 0x0000_6564, 0x0005_7FF4, 0x005F_5654,
        0x01FF_7FF4, 0x157F_5594, 0x7F9D_BF7D, 0x5555_5555,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_5014, 0x0000_6564, 0x0015_7FF4, 0x017F_5654,
        0x07FF_7FF4, 0x157F_5594, 0x7F9D_BF7D, 0x5555_5555,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_5014, 0x0000_6564, 0x0055_7FF4, 0x01FF_5654,
        0x07FF_7FF4, 0x157F_5594, 0x7F9D_BF7D, 0x5555_5555,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_5014, 0x0000_6564, 0x0015_7FF4, 0x017F_5654,
        0x07FF_7FF4, 0x157F_5594, 0x7F9D_BF7D, 0x5555_5555,
    ]),
];

static ANGRY: [CatBitmap; 8] = [
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_5050, 0x0140_6550, 0x0740_6FD0,
        0x0740_6DA4, 0x0740_6FF4, 0x0755_6AA4, 0x01FF_FFD0,
        0x01FF_FFD0, 0x01DF_DED0, 0x0195_5DD0, 0x0145_1450,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x1400_1414, 0x1D00_1954,
        0x1D00_59F4, 0x1D05_D969, 0x1B5F_DBFD, 0x05FF_DAA9,
        0x01FF_FFD4, 0x01D5_5ED0, 0x0195_1DD0, 0x0141_1450,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x1400_1414, 0x1D00_1954,
        0x1D05_59F4, 0x1D1F_D969, 0x1B7F_DBFD, 0x05FF_DAA9,
        0x01FF_FFD4, 0x01D5_5ED0, 0x0195_1DD0, 0x0141_1450,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x1400_1414, 0x1D15_5954,
        0x1D7F_D9F4, 0x1D7F_D969, 0x1BFF_DBFD, 0x05FF_DAA9,
        0x01F5_7FD4, 0x01D5_5ED0, 0x0195_1DD0, 0x0141_1450,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x4000_0000, 0xD000_1414, 0x7415_5954,
        0x1D7F_D9F4, 0x07FF_D969, 0x01FF_DBFD, 0x01FF_DAA9,
        0x01F5_7FD4, 0x01D5_5ED0, 0x0195_1DD0, 0x0141_1450,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x4000_0000, 0xD000_1414, 0x7415_5954,
        0x1D7F_D9F4, 0x07FF_D969, 0x01FF_DBFD, 0x01FF_DAA9,
        0x01F5_7FD4, 0x01D5_5ED0, 0x0195_1DD0, 0x0141_1450,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_0000, 0x1400_1414, 0x1D00_1954,
        0x1D05_59F4, 0x1D5F_D969, 0x1BFF_DBFD, 0x05FF_DAA9,
        0x01FF_FFD4, 0x01D5_5ED0, 0x0195_1DD0, 0x0141_1450,
    ]),
    CatBitmap([
        0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
        0x0000_0000, 0x0000_5050, 0x0140_6550, 0x0740_6FD0,
        0x0740_6DA4, 0x0740_6FF4, 0x0755_6AA4, 0x01FF_FFD0,
        0x01FF_FFD0, 0x01DF_DED0, 0x0195_5DD0, 0x0145_1450,
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_counts() {
        assert_eq!(SpriteSet::Walk.frame_count(), 4);
        assert_eq!(SpriteSet::Trot.frame_count(), 8);
        assert_eq!(SpriteSet::Sit.frame_count(), 4);
        assert_eq!(SpriteSet::Sleep.frame_count(), 4);
        assert_eq!(SpriteSet::Angry.frame_count(), 8);
    }

    #[test]
    fn test_pixel_unpacking() {
        // Last row of the walk pose: 0x15555400 -> 0,1,1,1,1,1,1,1,1,1,1,0,...
        let bmp = SpriteSet::Walk.frame(0);
        assert_eq!(bmp.pixel(15, 0), 0);
        assert_eq!(bmp.pixel(15, 1), 1);
        assert_eq!(bmp.pixel(15, 10), 1);
        assert_eq!(bmp.pixel(15, 11), 0);
        // 0x1A6B7400 starts 0,1,2,2
        assert_eq!(bmp.pixel(14, 2), 2);
        assert_eq!(bmp.pixel(14, 5), 2);
        assert_eq!(bmp.pixel(14, 7), 3);
    }

    #[test]
    fn test_animated_pose_wraps() {
        assert_eq!(Pose::animated(SpriteSet::Trot, 0, 3).frame, 0);
        assert_eq!(Pose::animated(SpriteSet::Trot, 5, 3).frame, 1);
        assert_eq!(Pose::animated(SpriteSet::Trot, 24, 3).frame, 0);
        assert_eq!(Pose::animated(SpriteSet::Sleep, 33, 8).frame, 0);
        assert_eq!(Pose::animated(SpriteSet::Sleep, 31, 8).frame, 3);
    }

    #[test]
    fn test_mono_bits() {
        assert!(HEART_FULL.is_set(0, 1));
        assert!(!HEART_FULL.is_set(0, 0));
        assert!(!HEART_FULL.is_set(0, 7));
        assert!(GLYPH_L.is_set(4, 2));
        assert!(!GLYPH_L.is_set(0, 2));
        assert_eq!(GLYPH_Z.height(), 5);
    }

    #[test]
    fn test_icon_kinds_cycle() {
        let kind = IconKind::Fish;
        assert_eq!(kind.next().next().next(), kind);
        assert_eq!(digit_glyph(10), None);
        assert!(digit_glyph(8).is_some());
    }
}
