//! Pixel - a single RGB cell
//!
//! A `Pixel` stores three 8-bit channels and is always owned by the grid
//! cell it lives in. Setters perform no validation beyond what `u8`
//! already guarantees.

use crate::color::{self, Rgb};

/// A color channel of an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl Channel {
    /// All channels in `(red, green, blue)` order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// A single RGB pixel.
///
/// # Examples
///
/// ```
/// use picturelab_core::Pixel;
///
/// let mut pix = Pixel::new(10, 20, 30);
/// pix.set_blue(0);
/// assert_eq!(pix.get_color(), (10, 20, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
}

impl Pixel {
    /// Create a pixel from its three channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a pixel from a color triple.
    #[inline]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self::new(rgb.0, rgb.1, rgb.2)
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    #[inline]
    pub fn set_red(&mut self, value: u8) {
        self.red = value;
    }

    #[inline]
    pub fn set_green(&mut self, value: u8) {
        self.green = value;
    }

    #[inline]
    pub fn set_blue(&mut self, value: u8) {
        self.blue = value;
    }

    /// Get a single channel value.
    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Set a single channel value.
    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    /// Read all three channels at once.
    #[inline]
    pub fn get_color(&self) -> Rgb {
        (self.red, self.green, self.blue)
    }

    /// Write all three channels at once.
    #[inline]
    pub fn set_color(&mut self, rgb: Rgb) {
        self.red = rgb.0;
        self.green = rgb.1;
        self.blue = rgb.2;
    }

    /// Unweighted mean of the channels, `(r + g + b) / 3` truncated.
    #[inline]
    pub fn lightness(&self) -> u8 {
        color::lightness(self.get_color())
    }

    /// Euclidean distance to another pixel in RGB space.
    #[inline]
    pub fn color_distance(&self, other: &Pixel) -> f64 {
        color::distance(self.get_color(), other.get_color())
    }
}

impl From<Rgb> for Pixel {
    fn from(rgb: Rgb) -> Self {
        Pixel::from_rgb(rgb)
    }
}

impl From<Pixel> for Rgb {
    fn from(pix: Pixel) -> Self {
        pix.get_color()
    }
}
