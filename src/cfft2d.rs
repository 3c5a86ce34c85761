//! Separable two-dimensional fast Fourier transform.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::config::{Config, MAX_SIZE};
use crate::error::{check_len, Result};
use crate::{CFft1D, Direction, Field2D};
use log::trace;
use num_complex::Complex;
use num_traits::float::{Float, FloatConst};
use num_traits::identities::zero;
use num_traits::NumAssign;

/// Perform a complex-to-complex two-dimensional Fourier transform in place
///
/// Every row is transformed first, then every column of the result. Width and
/// height must each be a power of two within the capacity bound. The backward
/// transform is normalized by \\(\frac 1 {width \cdot height}\\).
///
/// # Example
///
/// ```rust
/// use num_complex::Complex;
/// use chfourier::{CFft2D, Field2D};
///
/// fn main() {
///     let mut field = Field2D::from_real(4, 2, &[
///         2.0, 1.0, 0.0, 2.0,
///         5.0, 3.0, 2.0, 2.0,
///     ]).unwrap();
///
///     let mut fft = CFft2D::<f64>::with_len(field.width(), field.height()).unwrap();
///
///     fft.forward(&mut field).unwrap();
///     assert!((field[(0, 0)] - Complex::new(17.0, 0.0)).norm() < 1e-12);
///
///     fft.backward(&mut field).unwrap();
///     assert!((field[(1, 0)] - Complex::new(5.0, 0.0)).norm() < 1e-12);
/// }
/// ```
#[derive(Debug)]
pub struct CFft2D<T> {
    width: usize,
    height: usize,
    max_size: usize,
    fft_row: CFft1D<T>,
    fft_column: CFft1D<T>,
    row: Vec<Complex<T>>,
    column: Vec<Complex<T>>,
    column_out: Vec<Complex<T>>,
}

impl<T: Float + FloatConst + NumAssign> CFft2D<T> {
    /// Returns a instances to execute FFT
    ///
    /// ```rust
    /// use chfourier::CFft2D;
    /// let mut fft = CFft2D::<f64>::new();
    /// ```
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            max_size: MAX_SIZE,
            fft_row: CFft1D::new(),
            fft_column: CFft1D::new(),
            row: Vec::new(),
            column: Vec::new(),
            column_out: Vec::new(),
        }
    }

    /// Returns a instances to execute length initialized FFT
    ///
    /// ```rust
    /// use chfourier::CFft2D;
    /// let mut fft = CFft2D::<f64>::with_len(1024, 512).unwrap();
    /// ```
    pub fn with_len(width: usize, height: usize) -> Result<Self> {
        let mut ret = Self::new();
        ret.setup(width, height)?;
        Ok(ret)
    }

    /// Returns an unplanned instance bounded by `config.max_size`.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new().with_max_size(config.max_size))
    }

    /// Replaces the capacity bound for both dimensions; drops any existing plan.
    pub fn with_max_size(self, max_size: usize) -> Self {
        Self {
            max_size,
            fft_row: CFft1D::new().with_max_size(max_size),
            fft_column: CFft1D::new().with_max_size(max_size),
            ..Self::new()
        }
    }

    /// Reinitialize length
    ///
    /// Both dimensions are validated before anything is replanned.
    ///
    /// ```rust
    /// use chfourier::CFft2D;
    /// let mut fft = CFft2D::<f64>::with_len(1024, 1024).unwrap();
    ///
    /// // reinitialize
    /// fft.setup(2048, 256).unwrap();
    /// assert!(fft.setup(256, 100).is_err());
    /// ```
    pub fn setup(&mut self, width: usize, height: usize) -> Result<()> {
        check_len(width, self.max_size, true)?;
        check_len(height, self.max_size, true)?;
        if width == self.width && height == self.height {
            return Ok(());
        }
        self.fft_row.setup(width)?;
        self.fft_column.setup(height)?;
        self.width = width;
        self.height = height;
        self.row = vec![zero(); width];
        self.column = vec![zero(); height];
        self.column_out = vec![zero(); height];
        Ok(())
    }

    /// The 1 scaling factor forward transform, in place
    pub fn forward(&mut self, field: &mut Field2D<T>) -> Result<()> {
        self.convert(field, Direction::Forward)
    }

    /// The \\(\frac 1 {width \cdot height}\\) scaling factor backward transform, in place
    pub fn backward(&mut self, field: &mut Field2D<T>) -> Result<()> {
        self.convert(field, Direction::Inverse)
    }

    fn convert(&mut self, field: &mut Field2D<T>, direction: Direction) -> Result<()> {
        let (width, height) = field.dimensions();
        self.setup(width, height)?;

        trace!("{:?} pass over {} rows of width {}", direction, height, width);
        for row in field.rows_mut() {
            self.row.copy_from_slice(row);
            match direction {
                Direction::Forward => self.fft_row.forward_into(&self.row, row)?,
                Direction::Inverse => self.fft_row.backward_into(&self.row, row)?,
            }
        }

        trace!("{:?} pass over {} columns of height {}", direction, width, height);
        for x in 0..width {
            field.gather_column(x, &mut self.column);
            match direction {
                Direction::Forward => self
                    .fft_column
                    .forward_into(&self.column, &mut self.column_out)?,
                Direction::Inverse => self
                    .fft_column
                    .backward_into(&self.column, &mut self.column_out)?,
            }
            field.scatter_column(x, &self.column_out);
        }
        Ok(())
    }
}

impl<T: Float + FloatConst + NumAssign> Default for CFft2D<T> {
    /// Returns a instances to execute FFT
    ///
    /// ```rust
    /// use chfourier::CFft2D;
    /// let mut fft = CFft2D::<f64>::default();
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

/// Forward 2D transform of `field`, in place.
pub fn fft_forward_2d<T: Float + FloatConst + NumAssign>(field: &mut Field2D<T>) -> Result<()> {
    CFft2D::new().forward(field)
}

/// Inverse 2D transform of `field`, in place, normalized by `1/(width·height)`.
pub fn fft_inverse_2d<T: Float + FloatConst + NumAssign>(field: &mut Field2D<T>) -> Result<()> {
    CFft2D::new().backward(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_nearly_eq;
    use crate::error::FftError;
    use num_traits::identities::one;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn convert(source: &Field2D<f64>) -> Field2D<f64> {
        let (width, height) = source.dimensions();
        let mut ret = Field2D::zeros(width, height);
        for y in 0..height {
            for x in 0..width {
                ret[(y, x)] = (0..height).fold(zero(), |acc: Complex<f64>, j| {
                    acc + (0..width).fold(zero(), |acc: Complex<f64>, l| {
                        acc + source[(j, l)]
                            * Complex::from_polar(
                                one(),
                                -2.0 * std::f64::consts::PI
                                    * ((y * j) as f64 / height as f64 + (x * l) as f64 / width as f64),
                            )
                    })
                });
            }
        }
        ret
    }

    fn random_field(rng: &mut XorShiftRng, width: usize, height: usize) -> Field2D<f64> {
        let data = (0..width * height)
            .map(|_| Complex::new(rng.gen::<f64>(), rng.gen::<f64>()))
            .collect();
        Field2D::from_vec(width, height, data).unwrap()
    }

    fn test_with_len(fft: &mut CFft2D<f64>, width: usize, height: usize) {
        let mut rng = XorShiftRng::from_seed([
            0xDA, 0xE1, 0x4B, 0x0B, 0xFF, 0xC2, 0xFE, 0x64, 0x23, 0xFE, 0x3F, 0x51, 0x6D, 0x3E,
            0xA2, 0xF3,
        ]);

        for _ in 0..5 {
            let source = random_field(&mut rng, width, height);
            let expected = convert(&source);

            let mut actual = source.clone();
            fft.forward(&mut actual).unwrap();
            assert_nearly_eq!(expected, actual);

            fft.backward(&mut actual).unwrap();
            assert_nearly_eq!(source, actual);
        }
    }

    #[test]
    fn f64_new() {
        for i in 0..5 {
            for j in 0..5 {
                test_with_len(&mut CFft2D::new(), 1 << i, 1 << j);
            }
        }
    }

    #[test]
    fn f64_with_len() {
        for i in 0..5 {
            for j in 0..5 {
                let (width, height) = (1 << i, 1 << j);
                test_with_len(&mut CFft2D::with_len(width, height).unwrap(), width, height);
            }
        }
    }

    #[test]
    fn f32_round_trip() {
        let mut rng = XorShiftRng::seed_from_u64(11);
        let data = (0..32 * 16)
            .map(|_| Complex::new(rng.gen::<f32>(), rng.gen::<f32>()))
            .collect();
        let source = Field2D::from_vec(32, 16, data).unwrap();
        let mut actual = source.clone();
        fft_forward_2d(&mut actual).unwrap();
        fft_inverse_2d(&mut actual).unwrap();
        assert_nearly_eq!(source, actual);
    }

    #[test]
    fn impulse_transforms_to_ones() {
        let mut field = Field2D::<f64>::zeros(4, 4);
        field[(0, 0)] = Complex::new(1.0, 0.0);
        fft_forward_2d(&mut field).unwrap();
        let ones = Field2D::from_real(4, 4, &[1.0; 16]).unwrap();
        assert_nearly_eq!(field, ones);
    }

    #[test]
    fn capacity_from_config() {
        let config = Config {
            max_size: 8192,
            ..Config::default()
        };
        let mut fft = CFft2D::<f64>::from_config(&config).unwrap();
        let mut field = Field2D::zeros(8192, 2);
        field[(0, 0)] = Complex::new(1.0, 0.0);
        fft.forward(&mut field).unwrap();
        assert_nearly_eq!(field[(1, 4095)], Complex::new(1.0, 0.0));
    }

    #[test]
    fn rejects_bad_dimensions_without_mutation() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        for &(width, height) in &[(3, 4), (4, 6), (0, 4)] {
            let original = random_field(&mut rng, width, height);
            let mut field = original.clone();
            let err = fft_forward_2d(&mut field).unwrap_err();
            assert!(err.is_invalid_length());
            assert_eq!(field, original);
        }

        let mut fft = CFft2D::<f64>::new().with_max_size(8);
        let mut field = Field2D::zeros(16, 4);
        assert!(matches!(
            fft.forward(&mut field),
            Err(FftError::ExceedsCapacity { len: 16, max: 8 })
        ));
    }
}
