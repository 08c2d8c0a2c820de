//! Simple per-pixel color adjustments
//!
//! Every function here visits each pixel once in row-major order and
//! rewrites it from its own channels only.

use picturelab_core::{Channel, PixelAccess};

/// Convert to gray by setting every channel to `(r + g + b) / 3`.
pub fn grayscale<G: PixelAccess>(grid: &mut G) {
    grid.for_each_pixel_mut(|pix| {
        let shade = pix.lightness();
        pix.set_color((shade, shade, shade));
    });
}

/// Replace every channel value `c` with `255 - c`.
pub fn negate<G: PixelAccess>(grid: &mut G) {
    grid.for_each_pixel_mut(|pix| {
        let (r, g, b) = pix.get_color();
        pix.set_color((255 - r, 255 - g, 255 - b));
    });
}

/// Set one channel to 0 everywhere.
pub fn zero_channel<G: PixelAccess>(grid: &mut G, channel: Channel) {
    grid.for_each_pixel_mut(|pix| pix.set_channel(channel, 0));
}

/// Set every channel except `channel` to 0.
pub fn keep_only_channel<G: PixelAccess>(grid: &mut G, channel: Channel) {
    grid.for_each_pixel_mut(|pix| {
        for other in Channel::ALL {
            if other != channel {
                pix.set_channel(other, 0);
            }
        }
    });
}

/// Shorthand for `zero_channel(grid, Channel::Blue)`.
pub fn zero_blue<G: PixelAccess>(grid: &mut G) {
    zero_channel(grid, Channel::Blue);
}

/// Shorthand for `keep_only_channel(grid, Channel::Blue)`.
pub fn keep_only_blue<G: PixelAccess>(grid: &mut G) {
    keep_only_channel(grid, Channel::Blue);
}

#[cfg(test)]
mod tests {
    use super::*;
    use picturelab_core::Grid;

    fn sample() -> Grid {
        Grid::from_fn(2, 2, |r, c| (10 + r as u8, 100 + c as u8, 200)).unwrap()
    }

    #[test]
    fn test_grayscale_uses_truncated_mean() {
        let mut grid = Grid::filled(1, 1, (10, 20, 31)).unwrap();
        grayscale(&mut grid);
        assert_eq!(grid.get_color(0, 0), (20, 20, 20));
    }

    #[test]
    fn test_negate_twice_is_identity() {
        let original = sample();
        let mut grid = original.clone();
        negate(&mut grid);
        assert_eq!(grid.get_color(0, 0), (245, 155, 55));
        negate(&mut grid);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_zero_blue() {
        let mut grid = sample();
        zero_blue(&mut grid);
        assert_eq!(grid.get_color(1, 1), (11, 101, 0));
    }

    #[test]
    fn test_keep_only_blue() {
        let mut grid = sample();
        keep_only_blue(&mut grid);
        assert_eq!(grid.get_color(1, 0), (0, 0, 200));
    }

    #[test]
    fn test_keep_only_red() {
        let mut grid = sample();
        keep_only_channel(&mut grid, Channel::Red);
        assert_eq!(grid.get_color(1, 1), (11, 0, 0));
    }

    #[test]
    fn test_zero_green() {
        let mut grid = sample();
        zero_channel(&mut grid, Channel::Green);
        assert_eq!(grid.get_color(0, 1), (10, 0, 200));
    }
}
