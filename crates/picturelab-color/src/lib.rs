//! picturelab-color - Per-pixel color processing
//!
//! This crate provides color operations that mutate a grid in place:
//!
//! - **Adjustments** ([`adjust`]): grayscale, negation, channel isolation
//! - **Autolevel** ([`autolevel`]): black/white point contrast redistribution

pub mod adjust;
pub mod autolevel;

// Re-export core types
pub use picturelab_core;

pub use adjust::{grayscale, keep_only_blue, keep_only_channel, negate, zero_blue, zero_channel};
pub use autolevel::{
    LIGHTNESS_SEED, Levels, find_levels, fix_underwater, redistribute_channel, redistribute_pixel,
};
