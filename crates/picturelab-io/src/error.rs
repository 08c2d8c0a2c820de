//! Errors raised while reading or writing image files

use std::fmt::Display;
use thiserror::Error;

/// Failure while loading or saving a grid.
#[derive(Error, Debug)]
pub enum IoError {
    /// The file could not be opened, read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown format, or a format whose Cargo feature is off
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Header or sample data that does not follow the format
    #[error("malformed image: {0}")]
    Malformed(String),

    /// The codec crate refused the input
    #[error("{format} decode failed: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    /// The codec crate refused the grid or its parameters
    #[error("{format} encode failed: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// Decoded dimensions rejected by [`picturelab_core::Grid`]
    #[error("core error: {0}")]
    Core(#[from] picturelab_core::Error),
}

impl IoError {
    pub(crate) fn decode(format: &'static str, message: impl Display) -> Self {
        IoError::Decode {
            format,
            message: message.to_string(),
        }
    }

    pub(crate) fn encode(format: &'static str, message: impl Display) -> Self {
        IoError::Encode {
            format,
            message: message.to_string(),
        }
    }
}

/// Result of an image I/O operation.
pub type IoResult<T> = Result<T, IoError>;
