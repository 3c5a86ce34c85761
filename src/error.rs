//! Error types for chfourier.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use thiserror::Error;

/// Errors reported by transforms, fields and filters.
///
/// A call that fails never writes to its output buffer.
#[derive(Error, Debug)]
pub enum FftError {
    /// The transform length was zero.
    #[error("length must be non-zero")]
    ZeroLength,

    /// The transform length exceeds the configured capacity.
    #[error("length {len} exceeds the maximum supported size {max}")]
    ExceedsCapacity {
        /// Requested length.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The fast transform only handles power-of-two lengths.
    #[error("length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// `width * height` does not fit in `usize`.
    #[error("field dimensions {width}x{height} overflow usize")]
    DimensionOverflow {
        /// Width supplied.
        width: usize,
        /// Height supplied.
        height: usize,
    },

    /// A destination buffer does not have the source length.
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length required by the source.
        expected: usize,
        /// Length of the buffer supplied.
        actual: usize,
    },

    /// Two fields (or a field and its sample buffer) disagree on shape.
    #[error("shape mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    ShapeMismatch {
        /// Expected width.
        expected_width: usize,
        /// Expected height.
        expected_height: usize,
        /// Width supplied.
        width: usize,
        /// Height supplied.
        height: usize,
    },

    /// The Gaussian parameter must be finite and positive.
    #[error("invalid sigma: {0}")]
    InvalidSigma(f64),

    /// Configuration values out of range.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FftError {
    /// Returns `true` for the length errors: zero, over capacity, not a power of two,
    /// or field dimensions whose product overflows.
    pub fn is_invalid_length(&self) -> bool {
        matches!(
            self,
            FftError::ZeroLength
                | FftError::ExceedsCapacity { .. }
                | FftError::NotPowerOfTwo(_)
                | FftError::DimensionOverflow { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FftError>;

/// Validates a transform length against `max`, optionally requiring a power of two.
pub(crate) fn check_len(len: usize, max: usize, pow2: bool) -> Result<()> {
    if len == 0 {
        Err(FftError::ZeroLength)
    } else if len > max {
        Err(FftError::ExceedsCapacity { len, max })
    } else if pow2 && !len.is_power_of_two() {
        Err(FftError::NotPowerOfTwo(len))
    } else {
        Ok(())
    }
}

pub(crate) fn check_dest(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(FftError::LengthMismatch { expected, actual })
    }
}
