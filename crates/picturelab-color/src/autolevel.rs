//! Autolevel contrast redistribution
//!
//! A two-pass variant of the classic auto-level: the first pass finds the
//! darkest and brightest pixels by lightness, the second stretches every
//! channel so that the darkest pixel's channel maps to 0 and the
//! brightest pixel's channel maps to 255.
//!
//! # Seeding
//!
//! The running extrema start at the midpoint [`LIGHTNESS_SEED`] rather
//! than at the first pixel. A pixel only becomes the white point if its
//! lightness is strictly above everything seen so far (starting from
//! 127), and only becomes the black point if it is strictly below. The
//! two checks are exclusive: a pixel that raises the maximum is never
//! considered for the minimum in the same step.
//!
//! # Out-of-range results
//!
//! The black and white points are chosen by lightness, not per channel,
//! so a channel of an ordinary pixel may lie outside its
//! `[min, max]` bounds. [`redistribute_channel`] returns such results
//! unclamped; they saturate to `0..=255` only when stored back into an
//! 8-bit pixel.

use picturelab_core::{Pixel, PixelAccess, Rgb};

/// Starting value for the lightness and channel extrema.
pub const LIGHTNESS_SEED: u8 = 127;

/// Black and white points found by the first autolevel pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels {
    /// Lightness of the darkest pixel found (or the seed)
    pub min_lightness: u8,
    /// Lightness of the brightest pixel found (or the seed)
    pub max_lightness: u8,
    /// Channels of the darkest pixel found
    pub black_point: Rgb,
    /// Channels of the brightest pixel found
    pub white_point: Rgb,
}

impl Default for Levels {
    fn default() -> Self {
        let s = LIGHTNESS_SEED;
        Self {
            min_lightness: s,
            max_lightness: s,
            black_point: (s, s, s),
            white_point: (s, s, s),
        }
    }
}

/// First pass: find the black and white points.
pub fn find_levels<G: PixelAccess>(grid: &G) -> Levels {
    let mut levels = Levels::default();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let pix = grid.pixel(row, col);
            let lightness = pix.lightness();
            if lightness > levels.max_lightness {
                levels.max_lightness = lightness;
                levels.white_point = pix.get_color();
            } else if lightness < levels.min_lightness {
                levels.min_lightness = lightness;
                levels.black_point = pix.get_color();
            }
        }
    }
    levels
}

/// Map `value` proportionally from `[min, max]` onto `[0, 255]`.
///
/// Uses truncating integer division. When `min == max` the result is
/// `min`. The result is not clamped.
#[inline]
pub fn redistribute_channel(value: u8, min: u8, max: u8) -> i32 {
    let (value, min, max) = (value as i32, min as i32, max as i32);
    if max == min {
        return min;
    }
    (255 * (value - min)) / (max - min)
}

#[inline]
fn store(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Redistribute every channel of one pixel between the given levels.
pub fn redistribute_pixel(pix: &mut Pixel, levels: &Levels) {
    let (r, g, b) = pix.get_color();
    let (min_r, min_g, min_b) = levels.black_point;
    let (max_r, max_g, max_b) = levels.white_point;
    pix.set_color((
        store(redistribute_channel(r, min_r, max_r)),
        store(redistribute_channel(g, min_g, max_g)),
        store(redistribute_channel(b, min_b, max_b)),
    ));
}

/// Stretch the contrast of a grid in place.
///
/// The darkest and brightest pixels become black and white and every
/// other pixel is redistributed proportionally between them. Returns
/// the levels that were used.
pub fn fix_underwater<G: PixelAccess>(grid: &mut G) -> Levels {
    let levels = find_levels(grid);
    log::debug!(
        "autolevel: black point {:?} (lightness {}), white point {:?} (lightness {})",
        levels.black_point,
        levels.min_lightness,
        levels.white_point,
        levels.max_lightness
    );
    grid.for_each_pixel_mut(|pix| redistribute_pixel(pix, &levels));
    levels
}
