//! Collage composition
//!
//! A [`Collage`] is an ordered list of [`Layer`]s copied onto a canvas,
//! followed by optional finishing [`Adjustment`]s applied to the canvas
//! itself. Layers are drawn in insertion order, so later layers cover
//! earlier ones.
//!
//! # Examples
//!
//! ```
//! use picturelab_core::{Channel, Grid, PixelAccess};
//! use picturelab_transform::{Adjustment, Collage, Layer};
//!
//! let flower = Grid::filled(2, 4, (200, 100, 50)).unwrap();
//! let mut canvas = Grid::new(6, 4).unwrap();
//!
//! Collage::new()
//!     .layer(Layer::new(&flower, 0, 0))
//!     .layer(Layer::new(&flower, 2, 0).adjust(Adjustment::ZeroChannel(Channel::Blue)))
//!     .layer(Layer::new(&flower, 4, 0).adjust(Adjustment::Negate))
//!     .compose(&mut canvas)
//!     .unwrap();
//!
//! assert_eq!(canvas.get_color(3, 1), (200, 100, 0));
//! assert_eq!(canvas.get_color(5, 3), (55, 155, 205));
//! ```

use crate::copy::copy_region;
use crate::mirror::{mirror_horizontal, mirror_vertical};
use crate::{TransformError, TransformResult};
use picturelab_color::{grayscale, keep_only_channel, negate, zero_channel};
use picturelab_core::{Channel, Grid, PixelAccess, Rect};

/// In-place operation applied to a layer copy or to the finished canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjustment {
    /// Set one channel to 0
    ZeroChannel(Channel),
    /// Set every channel except one to 0
    KeepOnlyChannel(Channel),
    /// Invert every channel
    Negate,
    /// Replace every channel with the channel average
    Grayscale,
    /// Mirror left half onto right half
    MirrorVertical,
    /// Mirror top half onto bottom half
    MirrorHorizontal,
}

impl Adjustment {
    /// Apply the adjustment to `grid` in place.
    pub fn apply<G: PixelAccess>(&self, grid: &mut G) {
        match *self {
            Adjustment::ZeroChannel(channel) => zero_channel(grid, channel),
            Adjustment::KeepOnlyChannel(channel) => keep_only_channel(grid, channel),
            Adjustment::Negate => negate(grid),
            Adjustment::Grayscale => grayscale(grid),
            Adjustment::MirrorVertical => mirror_vertical(grid),
            Adjustment::MirrorHorizontal => mirror_horizontal(grid),
        }
    }
}

/// One source grid placed on the canvas.
#[derive(Debug, Clone)]
pub struct Layer<'a> {
    source: &'a Grid,
    region: Option<Rect>,
    to_row: u32,
    to_col: u32,
    adjustments: Vec<Adjustment>,
}

impl<'a> Layer<'a> {
    /// Place all of `source` with its top-left at `(to_row, to_col)`.
    pub fn new(source: &'a Grid, to_row: u32, to_col: u32) -> Self {
        Self {
            source,
            region: None,
            to_row,
            to_col,
            adjustments: Vec::new(),
        }
    }

    /// Copy only `rect` of the source.
    pub fn region(mut self, rect: Rect) -> Self {
        self.region = Some(rect);
        self
    }

    /// Append an adjustment. Adjustments run in order on a copy of the
    /// source; the source itself is never modified.
    pub fn adjust(mut self, adjustment: Adjustment) -> Self {
        self.adjustments.push(adjustment);
        self
    }

    fn source_rect(&self) -> TransformResult<Rect> {
        let whole = Rect::covering(self.source.height(), self.source.width());
        match self.region {
            None => Ok(whole),
            Some(rect) => rect.intersect(&whole).ok_or_else(|| {
                TransformError::InvalidParameters(format!(
                    "layer region {:?} lies outside its {}x{} source",
                    rect,
                    self.source.height(),
                    self.source.width()
                ))
            }),
        }
    }

    /// Draw the layer onto `canvas`, returning the number of cells written.
    fn draw<D: PixelAccess>(&self, canvas: &mut D) -> TransformResult<usize> {
        let rect = self.source_rect()?;
        if self.adjustments.is_empty() {
            return Ok(copy_region(canvas, self.source, rect, self.to_row, self.to_col));
        }
        let mut adjusted = self.source.clone();
        for adjustment in &self.adjustments {
            adjustment.apply(&mut adjusted);
        }
        Ok(copy_region(canvas, &adjusted, rect, self.to_row, self.to_col))
    }
}

/// Ordered layers plus finishing adjustments.
#[derive(Debug, Clone, Default)]
pub struct Collage<'a> {
    layers: Vec<Layer<'a>>,
    finish: Vec<Adjustment>,
}

impl<'a> Collage<'a> {
    /// Create an empty collage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer on top of the existing ones.
    pub fn layer(mut self, layer: Layer<'a>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Append a finishing adjustment, run on the canvas after all layers.
    pub fn finish_with(mut self, adjustment: Adjustment) -> Self {
        self.finish.push(adjustment);
        self
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check whether the collage has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Draw every layer onto `canvas`, then apply the finishing
    /// adjustments. Returns the total number of cells copied from layers.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] if a layer region does
    /// not overlap its source. Layers before the failing one have already
    /// been drawn.
    pub fn compose<D: PixelAccess>(&self, canvas: &mut D) -> TransformResult<usize> {
        let mut written = 0;
        for layer in &self.layers {
            written += layer.draw(canvas)?;
        }
        for adjustment in &self.finish {
            adjustment.apply(canvas);
        }
        log::debug!(
            "collage: {} layers, {} cells copied onto {}x{} canvas",
            self.layers.len(),
            written,
            canvas.height(),
            canvas.width()
        );
        Ok(written)
    }
}
