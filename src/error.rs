//! Error taxonomy for the pixel pipelines.
//!
//! Every failure raised by the core is a caller-contract violation detected
//! before any output buffer is allocated. Retrying with corrected arguments is
//! always safe.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("buffer length {actual} does not match {width}x{height}x4 = {expected}")]
    BufferLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("kernel size {size} is not a positive odd number")]
    KernelSize { size: usize },

    #[error("kernel of size {size} needs {expected} coefficients, got {actual}")]
    KernelCoefficients {
        size: usize,
        expected: usize,
        actual: usize,
    },

    #[error("parameter `{name}` must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("parameter `{name}` = {value} is out of range: {expected}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl Error {
    /// All core errors are invalid-input failures; there is no internal error class.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject NaN and infinities for a named real parameter.
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { name, value })
    }
}
