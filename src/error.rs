//! Error types for the toroidal Game of Life.
//!
//! Every failure is a precondition violation by the caller and is returned
//! at the point of the offending call.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("Cell ({x}, {y}) is out of bounds for grid {width}x{height}")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Density {0} is out of range [0.0, 1.0]")]
    InvalidDensity(f64),

    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;
