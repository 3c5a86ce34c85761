//! Naive O(n²) discrete Fourier transform.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::config::{Config, MAX_SIZE};
use crate::error::{check_dest, check_len, Result};
use crate::precompute_utils;
use crate::Direction;
use log::debug;
use num_complex::Complex;
use num_traits::float::{Float, FloatConst};
use num_traits::identities::zero;
use num_traits::NumAssign;

/// Evaluate the discrete Fourier transform straight from its definition
///
/// \\[ Y_k = \sum_{j=0}\^{n-1} X_j e\^{\mp \frac {2 \pi i j k}{n}} \\]
///
/// Any non-zero length within capacity is accepted. This is the reference the fast
/// transform is checked against; it is not meant for large inputs.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex;
/// use chfourier::Nft1D;
///
/// let input = [Complex::new(1.0, 0.0), Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)];
///
/// let mut nft = Nft1D::<f64>::with_len(input.len()).unwrap();
/// let output = nft.forward(&input).unwrap();
/// assert!((output[0].re - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Nft1D<T> {
    len: usize,
    max_size: usize,
    scaler_n: T,
    omega: Vec<Complex<T>>,
    omega_back: Vec<Complex<T>>,
}

impl<T: Float + FloatConst + NumAssign> Nft1D<T> {
    /// Returns an unplanned instance; the first call plans for its length.
    pub fn new() -> Self {
        Self {
            len: 0,
            max_size: MAX_SIZE,
            scaler_n: zero(),
            omega: Vec::new(),
            omega_back: Vec::new(),
        }
    }

    /// Returns an instance planned for `len`.
    pub fn with_len(len: usize) -> Result<Self> {
        let mut ret = Self::new();
        ret.setup(len)?;
        Ok(ret)
    }

    /// Returns an unplanned instance bounded by `config.max_size`.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new().with_max_size(config.max_size))
    }

    /// Replaces the capacity bound (`MAX_SIZE` by default).
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Reinitialize length
    pub fn setup(&mut self, len: usize) -> Result<()> {
        check_len(len, self.max_size, false)?;
        debug!("planning naive transform of length {}", len);
        self.len = len;
        self.scaler_n = T::one() / precompute_utils::cast_usize(len);
        self.omega = precompute_utils::calc_omega(len);
        self.omega_back = precompute_utils::calc_omega_back(&self.omega);
        Ok(())
    }

    /// Unnormalized transform of `source` into `dest` in the given direction.
    ///
    /// `dest` must have the length of `source`; it is left untouched on error.
    pub fn convert_into(
        &mut self,
        source: &[Complex<T>],
        dest: &mut [Complex<T>],
        direction: Direction,
    ) -> Result<()> {
        self.transform_into(source, dest, direction, false)
    }

    /// The 1 scaling factor forward transform
    pub fn forward(&mut self, source: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(source, Direction::Forward, false)
    }

    /// The \\(\frac 1 n\\) scaling factor backward transform
    pub fn backward(&mut self, source: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(source, Direction::Inverse, true)
    }

    /// The 1 scaling factor backward transform
    pub fn backward0(&mut self, source: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(source, Direction::Inverse, false)
    }

    fn transform(
        &mut self,
        source: &[Complex<T>],
        direction: Direction,
        normalize: bool,
    ) -> Result<Vec<Complex<T>>> {
        let mut dest = vec![zero(); source.len()];
        self.transform_into(source, &mut dest, direction, normalize)?;
        Ok(dest)
    }

    fn transform_into(
        &mut self,
        source: &[Complex<T>],
        dest: &mut [Complex<T>],
        direction: Direction,
        normalize: bool,
    ) -> Result<()> {
        let len = source.len();
        check_len(len, self.max_size, false)?;
        check_dest(len, dest.len())?;
        if len != self.len {
            self.setup(len)?;
        }

        let omega = match direction {
            Direction::Forward => &self.omega,
            Direction::Inverse => &self.omega_back,
        };
        for (k, d) in dest.iter_mut().enumerate() {
            let mut acc: Complex<T> = zero();
            // (k * j) mod len, advanced incrementally
            let mut pos = 0;
            for &s in source {
                acc += s * omega[pos];
                pos += k;
                if pos >= len {
                    pos -= len;
                }
            }
            *d = acc;
        }

        if normalize {
            let scaler = self.scaler_n;
            for d in dest.iter_mut() {
                *d = d.scale(scaler);
            }
        }
        Ok(())
    }
}

impl<T: Float + FloatConst + NumAssign> Default for Nft1D<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Naive forward transform of `signal`.
pub fn nft_forward<T: Float + FloatConst + NumAssign>(
    signal: &[Complex<T>],
) -> Result<Vec<Complex<T>>> {
    Nft1D::new().forward(signal)
}

/// Naive inverse transform of `spectrum`, normalized by `1/n`.
pub fn nft_inverse<T: Float + FloatConst + NumAssign>(
    spectrum: &[Complex<T>],
) -> Result<Vec<Complex<T>>> {
    Nft1D::new().backward(spectrum)
}
