//! Chalharu's Fourier transforms and frequency-domain filters.
//!
//! Provides a naive discrete Fourier transform, a radix-2 fast Fourier
//! transform in one and two dimensions, and Gaussian low-pass and high-pass
//! filters that operate on a transformed field.
//!
//! # Example
//!
//! ```rust
//! use chfourier::{fft_forward_2d, fft_inverse_2d, filter_lp, Field2D};
//!
//! let pixels = (0..64).map(|i| (i % 8) as f64 / 8.0).collect::<Vec<_>>();
//! let mut field = Field2D::from_real(8, 8, &pixels).unwrap();
//!
//! fft_forward_2d(&mut field).unwrap();
//! let mut smoothed = filter_lp(&field);
//! fft_inverse_2d(&mut smoothed).unwrap();
//!
//! let output = smoothed.to_real();
//! assert_eq!(output.len(), 64);
//! ```
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

#[doc(hidden)]
#[macro_use]
pub mod nearly_eq;

mod cfft1d;
mod cfft2d;
mod config;
mod error;
mod field;
mod filter;
mod nft1d;
mod precompute_utils;

pub use crate::cfft1d::{fft_forward, fft_inverse, CFft1D};
pub use crate::cfft2d::{fft_forward_2d, fft_inverse_2d, CFft2D};
pub use crate::config::{Config, MAX_SIZE, SIGMA};
pub use crate::error::{FftError, Result};
pub use crate::field::Field2D;
pub use crate::filter::{filter_hp, filter_lp, FilterMode, GaussianFilter};
pub use crate::nft1d::{nft_forward, nft_inverse, Nft1D};

/// Direction of a transform.
///
/// The two directions differ only in the sign of the exponent and in the
/// \\(\frac 1 n\\) normalization applied by the inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Spatial or time domain to frequency domain; exponent sign `-1`.
    Forward,
    /// Frequency domain back to spatial domain; exponent sign `+1`.
    Inverse,
}

impl Direction {
    /// `-1` for `Forward`, `+1` for `Inverse`.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => -1,
            Direction::Inverse => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_sign() {
        assert_eq!(Direction::Forward.sign(), -1);
        assert_eq!(Direction::Inverse.sign(), 1);
    }
}
