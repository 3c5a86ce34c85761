//! Row-major two-dimensional complex field.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use crate::error::{FftError, Result};
use num_complex::Complex;
use num_traits::{Num, Zero};
use std::ops::{Index, IndexMut};

/// A `width` by `height` grid of complex samples, stored row after row.
///
/// Cells are addressed as `(row, column)`, that is `(y, x)`.
///
/// # Example
///
/// ```rust
/// use chfourier::Field2D;
/// use num_complex::Complex;
///
/// let mut field = Field2D::<f64>::zeros(4, 2);
/// field[(1, 3)] = Complex::new(1.0, 0.0);
/// assert_eq!(field.row(1)[3], Complex::new(1.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field2D<T> {
    width: usize,
    height: usize,
    data: Vec<Complex<T>>,
}

impl<T> Field2D<T> {
    /// Wraps `data` (row-major, `width * height` samples).
    pub fn from_vec(width: usize, height: usize, data: Vec<Complex<T>>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(FftError::DimensionOverflow { width, height })?;
        if data.len() != expected {
            return Err(FftError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex<T>] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<Complex<T>> {
        self.data
    }

    pub fn row(&self, y: usize) -> &[Complex<T>] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Complex<T>] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Complex<T>]> {
        self.data.chunks_exact(self.width.max(1))
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Complex<T>]> {
        self.data.chunks_exact_mut(self.width.max(1))
    }

    pub(crate) fn check_same_shape<U>(&self, other: &Field2D<U>) -> Result<()> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(FftError::ShapeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: other.width,
                height: other.height,
            })
        }
    }
}

impl<T: Copy> Field2D<T> {
    /// Copies column `x` into `dest` (length `height`).
    pub fn gather_column(&self, x: usize, dest: &mut [Complex<T>]) {
        for (d, s) in dest
            .iter_mut()
            .zip(self.data.iter().skip(x).step_by(self.width.max(1)))
        {
            *d = *s;
        }
    }

    /// Writes `source` (length `height`) into column `x`.
    pub fn scatter_column(&mut self, x: usize, source: &[Complex<T>]) {
        let width = self.width.max(1);
        for (d, s) in self.data.iter_mut().skip(x).step_by(width).zip(source) {
            *d = *s;
        }
    }

    /// The real part of every sample, row-major.
    pub fn to_real(&self) -> Vec<T> {
        self.data.iter().map(|c| c.re).collect()
    }
}

impl<T: Clone + Num> Field2D<T> {
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn zeros(width: usize, height: usize) -> Self {
        let len = match width.checked_mul(height) {
            Some(len) => len,
            None => panic!("field dimensions {}x{} overflow usize", width, height),
        };
        Self {
            width,
            height,
            data: vec![Complex::zero(); len],
        }
    }

    /// Builds a field from real samples; every imaginary part is zero.
    pub fn from_real(width: usize, height: usize, samples: &[T]) -> Result<Self> {
        let data = samples
            .iter()
            .map(|re| Complex::new(re.clone(), T::zero()))
            .collect::<Vec<_>>();
        Self::from_vec(width, height, data)
    }
}

impl<T> Index<(usize, usize)> for Field2D<T> {
    type Output = Complex<T>;

    fn index(&self, (y, x): (usize, usize)) -> &Complex<T> {
        assert!(x < self.width, "column {} out of bounds", x);
        &self.data[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Field2D<T> {
    fn index_mut(&mut self, (y, x): (usize, usize)) -> &mut Complex<T> {
        assert!(x < self.width, "column {} out of bounds", x);
        &mut self.data[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Field2D<f64> {
        let data = (0..6).map(|i| Complex::new(i as f64, 0.0)).collect();
        Field2D::from_vec(3, 2, data).unwrap()
    }

    #[test]
    fn indexing_is_row_major() {
        let field = sample();
        assert_eq!(field[(0, 2)].re, 2.0);
        assert_eq!(field[(1, 0)].re, 3.0);
        assert_eq!(field.row(1), &field.as_slice()[3..6]);
        assert_eq!(field.rows().count(), 2);
    }

    #[test]
    fn columns_round_trip() {
        let mut field = sample();
        let mut column = vec![Complex::zero(); 2];
        field.gather_column(1, &mut column);
        assert_eq!(column, vec![Complex::new(1.0, 0.0), Complex::new(4.0, 0.0)]);

        field.scatter_column(2, &[Complex::new(-1.0, 1.0), Complex::new(-2.0, 2.0)]);
        assert_eq!(field[(0, 2)], Complex::new(-1.0, 1.0));
        assert_eq!(field[(1, 2)], Complex::new(-2.0, 2.0));
        assert_eq!(field[(1, 1)], Complex::new(4.0, 0.0));
    }

    #[test]
    fn real_boundary() {
        let field = Field2D::from_real(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(field.as_slice().iter().all(|c| c.im == 0.0));
        assert_eq!(field.to_real(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn rejects_wrong_sample_count() {
        assert!(matches!(
            Field2D::from_real(2, 2, &[1.0, 2.0, 3.0]),
            Err(FftError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        let err = Field2D::<f64>::from_vec(usize::MAX, 2, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            FftError::DimensionOverflow {
                width: usize::MAX,
                height: 2
            }
        ));
        assert!(err.is_invalid_length());
        assert!(matches!(
            Field2D::from_real(3, usize::MAX / 2, &[1.0_f64]),
            Err(FftError::DimensionOverflow { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "overflow usize")]
    fn zeros_panics_on_overflowing_dimensions() {
        let _ = Field2D::<f64>::zeros(3, usize::MAX / 2);
    }

    #[test]
    fn shape_check() {
        let a = Field2D::<f64>::zeros(4, 2);
        let b = Field2D::<f64>::zeros(2, 4);
        assert!(a.check_same_shape(&a.clone()).is_ok());
        assert!(matches!(
            a.check_same_shape(&b),
            Err(FftError::ShapeMismatch { .. })
        ));
    }
}
