//! Gaussian low-pass and high-pass filtering in the frequency domain.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::config::{Config, MAX_SIZE, SIGMA};
use crate::error::{FftError, Result};
use crate::precompute_utils::cast_usize;
use crate::{CFft2D, Field2D};
use log::trace;
use num_complex::Complex;
use num_traits::cast;
use num_traits::float::{Float, FloatConst};
use num_traits::NumAssign;

/// Which side of the spectrum the filter keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep frequencies near DC; weight `g`.
    LowPass,
    /// Keep frequencies far from DC; weight `1 - g`.
    HighPass,
}

/// Radially symmetric Gaussian weighting of a 2D spectrum.
///
/// For bin `(x, y)` of a `width` by `height` spectrum the wrapped offsets from the
/// origin are `dx = width/2 - (x + width/2) mod width` (likewise `dy`), and the
/// low-pass weight is
///
/// \\[ g = e\^{- \frac {dx\^2 + dy\^2} {2 \sigma\^2}} \\]
///
/// Bins are ordered as the forward transform leaves them, with DC at `(0, 0)`, so the
/// weight is 1 at the origin and falls off towards the middle of the field.
///
/// # Example
///
/// ```rust
/// use chfourier::{FilterMode, GaussianFilter};
///
/// let filter = GaussianFilter::<f64>::new(2.0).unwrap();
/// assert_eq!(filter.weight(0, 0, 8, 8, FilterMode::LowPass), 1.0);
/// assert_eq!(filter.weight(0, 0, 8, 8, FilterMode::HighPass), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianFilter<T> {
    sigma: T,
    max_size: usize,
}

impl<T: Float + FloatConst + NumAssign> GaussianFilter<T> {
    /// `sigma` must be positive, and `2σ²` must be a normal float of type `T`.
    pub fn new(sigma: T) -> Result<Self> {
        let two_variance = sigma * sigma + sigma * sigma;
        if sigma > T::zero() && two_variance.is_normal() {
            Ok(Self {
                sigma,
                max_size: MAX_SIZE,
            })
        } else {
            Err(FftError::InvalidSigma(sigma.to_f64().unwrap_or(f64::NAN)))
        }
    }

    /// Takes both the standard deviation and the transform capacity from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let sigma = cast(config.sigma).ok_or(FftError::InvalidSigma(config.sigma))?;
        Ok(Self::new(sigma)?.with_max_size(config.max_size))
    }

    /// Replaces the capacity bound used by `process`.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn sigma(&self) -> T {
        self.sigma
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Weight of bin `(x, y)` in a `width` by `height` spectrum.
    pub fn weight(&self, x: usize, y: usize, width: usize, height: usize, mode: FilterMode) -> T {
        let dx = wrapped_offset(x, width);
        let dy = wrapped_offset(y, height);
        let d: T = cast_usize(dx * dx + dy * dy);

        let variance = -(self.sigma * self.sigma + self.sigma * self.sigma);
        let g = (d / variance).exp();
        match mode {
            FilterMode::LowPass => g,
            FilterMode::HighPass => T::one() - g,
        }
    }

    /// Writes the weighted `input` spectrum into `output`.
    ///
    /// The two fields must have the same dimensions; `output` is untouched otherwise.
    pub fn apply(
        &self,
        input: &Field2D<T>,
        output: &mut Field2D<T>,
        mode: FilterMode,
    ) -> Result<()> {
        input.check_same_shape(output)?;
        let (width, height) = input.dimensions();
        trace!("{:?} over {}x{} spectrum", mode, width, height);

        for (y, (src, dst)) in input.rows().zip(output.rows_mut()).enumerate() {
            for (x, (s, d)) in src.iter().zip(dst.iter_mut()).enumerate() {
                *d = s.scale(self.weight(x, y, width, height, mode));
            }
        }
        Ok(())
    }

    /// Weights `field` in place.
    pub fn apply_inplace(&self, field: &mut Field2D<T>, mode: FilterMode) {
        let (width, height) = field.dimensions();
        trace!("{:?} over {}x{} spectrum, in place", mode, width, height);

        for (y, row) in field.rows_mut().enumerate() {
            for (x, c) in row.iter_mut().enumerate() {
                *c = c.scale(self.weight(x, y, width, height, mode));
            }
        }
    }

    pub fn low_pass(&self, input: &Field2D<T>) -> Field2D<T> {
        let mut output = input.clone();
        self.apply_inplace(&mut output, FilterMode::LowPass);
        output
    }

    pub fn high_pass(&self, input: &Field2D<T>) -> Field2D<T> {
        let mut output = input.clone();
        self.apply_inplace(&mut output, FilterMode::HighPass);
        output
    }

    /// Filters a spatial field: forward 2D transform, weighting, inverse 2D transform.
    ///
    /// The field is left untouched if its dimensions are rejected by the transform.
    ///
    /// ```rust
    /// use chfourier::{Field2D, FilterMode, GaussianFilter};
    ///
    /// let image = Field2D::from_real(8, 8, &[0.5f64; 64]).unwrap();
    /// let mut blurred = image.clone();
    /// GaussianFilter::new(1.5).unwrap().process(&mut blurred, FilterMode::LowPass).unwrap();
    ///
    /// // a flat image only has a DC component, which the low-pass keeps
    /// for (a, b) in image.to_real().iter().zip(blurred.to_real()) {
    ///     assert!((a - b).abs() < 1e-12);
    /// }
    /// ```
    pub fn process(&self, field: &mut Field2D<T>, mode: FilterMode) -> Result<()> {
        let mut fft = CFft2D::new().with_max_size(self.max_size);
        fft.forward(field)?;
        self.apply_inplace(field, mode);
        fft.backward(field)
    }
}

impl<T: Float + FloatConst + NumAssign> Default for GaussianFilter<T> {
    /// A filter with the default `SIGMA`.
    fn default() -> Self {
        Self {
            sigma: cast(SIGMA).unwrap_or_else(T::one),
            max_size: MAX_SIZE,
        }
    }
}

/// `center - (coord + center) mod size`, with `center = size / 2`.
///
/// Zero at `coord == 0`, and `|offset|` is the periodic distance to 0.
#[inline]
fn wrapped_offset(coord: usize, size: usize) -> usize {
    let center = size / 2;
    let shifted = (coord + center) % size;
    if shifted > center {
        shifted - center
    } else {
        center - shifted
    }
}

/// Low-pass filters the spectrum `field` with the default `SIGMA`.
pub fn filter_lp<T: Float + FloatConst + NumAssign>(field: &Field2D<T>) -> Field2D<T> {
    GaussianFilter::default().low_pass(field)
}

/// High-pass filters the spectrum `field` with the default `SIGMA`.
pub fn filter_hp<T: Float + FloatConst + NumAssign>(field: &Field2D<T>) -> Field2D<T> {
    GaussianFilter::default().high_pass(field)
}
