//! Error types for picturelab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics.

use thiserror::Error;

/// Picturelab core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Coordinate outside the grid bounds
    #[error("coordinate ({row}, {col}) out of range for {height}x{width} grid")]
    OutOfRange {
        row: i64,
        col: i64,
        height: u32,
        width: u32,
    },

    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {height}x{width}")]
    InvalidDimension { height: u32, width: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for picturelab core operations
pub type Result<T> = std::result::Result<T, Error>;
