//! Radix-2 complex-to-complex fast Fourier transform.
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

/// Perform a complex-to-complex one-dimensional Fourier transform
///
/// <script type="text/javascript" src="http://cdn.mathjax.org/mathjax/latest/MathJax.js?config=TeX-AMS_CHTML"></script>
/// When X is input array and Y is output array,
/// the forward discrete Fourier transform of the one-dimensional array is
///
/// \\[ \Large Y_k = \sum_{j=0}\^{n-1} X_j e\^{- \frac {2 \pi i j k}{n}} \\]
///
/// also, the backward discrete Fourier transform of the one-dimensional array is
///
/// \\[ \Large Y_k = \sum_{j=0}\^{n-1} X_j e\^{\frac {2 \pi i j k}{n}} \\]
///
/// The length must be a power of two no larger than the capacity bound.
/// Out-of-place transforms use recursive decimation in time; the in-place
/// ones (`forwardi`, `backwardi`) run the iterative butterfly schedule.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex;
/// use chfourier::CFft1D;
///
/// fn main() {
///     let input = [Complex::new(2.0, 0.0), Complex::new(1.0, 1.0),
///                  Complex::new(0.0, 3.0), Complex::new(2.0, 4.0)];
///
///     let mut fft = CFft1D::<f64>::with_len(input.len()).unwrap();
///
///     let output = fft.forward(&input).unwrap();
///
///     println!("the transform of {:?} is {:?}", input, output);
/// }
/// ```
#[derive(Debug)]
pub struct CFft1D<T> {
    len: usize,
    max_size: usize,
    scaler_n: T,
    omega: Vec<Complex<T>>,
    omega_back: Vec<Complex<T>>,
    ids: Vec<usize>,
}

impl<T: Float + FloatConst + NumAssign> CFft1D<T> {
    /// Returns a instances to execute FFT
    ///
    /// ```rust
    /// use chfourier::CFft1D;
    /// let mut fft = CFft1D::<f64>::new();
    /// ```
    pub fn new() -> Self {
        Self {
            len: 0,
            max_size: MAX_SIZE,
            scaler_n: zero(),
            omega: Vec::new(),
            omega_back: Vec::new(),
            ids: Vec::new(),
        }
    }

    /// Returns a instances to execute length initialized FFT
    ///
    /// ```rust
    /// use chfourier::CFft1D;
    /// let mut fft = CFft1D::<f64>::with_len(1024).unwrap();
    /// ```
    pub fn with_len(len: usize) -> Result<Self> {
        let mut ret = Self::new();
        ret.setup(len)?;
        Ok(ret)
    }

    /// Returns an unplanned instance bounded by `config.max_size`.
    ///
    /// ```rust
    /// use chfourier::{CFft1D, Config};
    /// let config = Config::from_json(r#"{ "max_size": 8192 }"#).unwrap();
    /// let mut fft = CFft1D::<f64>::from_config(&config).unwrap();
    /// assert!(fft.setup(8192).is_ok());
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new().with_max_size(config.max_size))
    }

    /// Replaces the capacity bound (`MAX_SIZE` by default).
    ///
    /// ```rust
    /// use chfourier::CFft1D;
    /// let mut fft = CFft1D::<f64>::new().with_max_size(1 << 16);
    /// assert!(fft.setup(1 << 15).is_ok());
    /// ```
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reinitialize length
    ///
    /// ```rust
    /// use chfourier::CFft1D;
    /// let mut fft = CFft1D::<f64>::with_len(1024).unwrap();
    ///
    /// // reinitialize
    /// fft.setup(2048).unwrap();
    /// assert!(fft.setup(1000).is_err());
    /// ```
    pub fn setup(&mut self, len: usize) -> Result<()> {
        check_len(len, self.max_size, true)?;
        if len == self.len {
            return Ok(());
        }
        debug!("planning radix-2 transform of length {}", len);
        self.len = len;
        self.scaler_n = T::one() / precompute_utils::cast_usize(len);

        // ωの事前計算
        self.omega = precompute_utils::calc_omega(len);
        self.omega_back = precompute_utils::calc_omega_back(&self.omega);
        self.ids = precompute_utils::calc_bitreverse(len);
        Ok(())
    }

    #[inline]
    fn table(&self, direction: Direction) -> &[Complex<T>] {
        match direction {
            Direction::Forward => &self.omega,
            Direction::Inverse => &self.omega_back,
        }
    }

    fn transform_into(
        &mut self,
        source: &[Complex<T>],
        dest: &mut [Complex<T>],
        direction: Direction,
        normalize: bool,
    ) -> Result<()> {
        self.setup(source.len())?;
        check_dest(source.len(), dest.len())?;

        fft_recursive(source, 0, 1, dest, self.table(direction));

        if normalize {
            let scaler = self.scaler_n;
            for d in dest.iter_mut() {
                *d = d.scale(scaler);
            }
        }
        Ok(())
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

    fn transform_inplace(
        &mut self,
        source: &mut [Complex<T>],
        direction: Direction,
        normalize: bool,
    ) -> Result<()> {
        self.setup(source.len())?;

        // 入力の並び替え
        for (i, &r) in self.ids.iter().enumerate() {
            if i < r {
                source.swap(i, r);
            }
        }
        fft_butterflies(source, self.table(direction));

        if normalize {
            let scaler = self.scaler_n;
            for s in source.iter_mut() {
                *s = s.scale(scaler);
            }
        }
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
    ///
    /// ```rust
    /// use chfourier::CFft1D;
    /// use num_complex::Complex;
    ///
    /// let input = [Complex::new(2.0, 0.0), Complex::new(1.0, 1.0),
    ///              Complex::new(0.0, 3.0), Complex::new(2.0, 4.0)];
    ///
    /// let mut fft = CFft1D::<f64>::with_len(input.len()).unwrap();
    /// let output = fft.forward(&input).unwrap();
    /// ```
    pub fn forward(&mut self, source: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(source, Direction::Forward, false)
    }

    /// The \\(\frac 1 n\\) scaling factor backward transform
    ///
    /// ```rust
    /// use chfourier::CFft1D;
    /// use num_complex::Complex;
    ///
    /// let input = [Complex::new(2.0, 0.0), Complex::new(1.0, 1.0),
    ///              Complex::new(0.0, 3.0), Complex::new(2.0, 4.0)];
    ///
    /// let mut fft = CFft1D::<f64>::with_len(input.len()).unwrap();
    /// let output = fft.backward(&input).unwrap();
    /// ```
    pub fn backward(&mut self, source: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(source, Direction::Inverse, true)
    }

    /// The 1 scaling factor backward transform
    pub fn backward0(&mut self, source: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(source, Direction::Inverse, false)
    }

    /// The 1 scaling factor forward transform into a caller-supplied buffer
    pub fn forward_into(&mut self, source: &[Complex<T>], dest: &mut [Complex<T>]) -> Result<()> {
        self.transform_into(source, dest, Direction::Forward, false)
    }

    /// The \\(\frac 1 n\\) scaling factor backward transform into a caller-supplied buffer
    pub fn backward_into(&mut self, source: &[Complex<T>], dest: &mut [Complex<T>]) -> Result<()> {
        self.transform_into(source, dest, Direction::Inverse, true)
    }

    /// The 1 scaling factor and in-place forward transform
    ///
    /// ```rust
    /// use chfourier::CFft1D;
    /// use num_complex::Complex;
    ///
    /// let mut input = [Complex::new(2.0, 0.0), Complex::new(1.0, 1.0),
    ///              Complex::new(0.0, 3.0), Complex::new(2.0, 4.0)];
    ///
    /// let mut fft = CFft1D::<f64>::with_len(input.len()).unwrap();
    /// fft.forwardi(&mut input).unwrap();
    /// ```
    pub fn forwardi(&mut self, source: &mut [Complex<T>]) -> Result<()> {
        self.transform_inplace(source, Direction::Forward, false)
    }

    /// The \\(\frac 1 n\\) scaling factor and in-place backward transform
    pub fn backwardi(&mut self, source: &mut [Complex<T>]) -> Result<()> {
        self.transform_inplace(source, Direction::Inverse, true)
    }
}

impl<T: Float + FloatConst + NumAssign> Default for CFft1D<T> {
    /// Returns a instances to execute FFT
    ///
    /// ```rust
    /// use chfourier::CFft1D;
    /// let mut fft = CFft1D::<f64>::default();
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

/// Decimation in time over the strided view `source[offset + k * stride]`.
///
/// `omega` is the root table of the full plan length, so the twiddle
/// `exp(±2πi·i/n)` of a length-`n` sub-transform sits at `omega[i * stride]`.
fn fft_recursive<T: Float + NumAssign>(
    source: &[Complex<T>],
    offset: usize,
    stride: usize,
    dest: &mut [Complex<T>],
    omega: &[Complex<T>],
) {
    let len = dest.len();
    if len == 1 {
        dest[0] = source[offset];
        return;
    }

    let (lower, upper) = dest.split_at_mut(len >> 1);
    fft_recursive(source, offset, stride << 1, lower, omega);
    fft_recursive(source, offset + stride, stride << 1, upper, omega);

    for (i, (e, o)) in lower.iter_mut().zip(upper.iter_mut()).enumerate() {
        let z = *o * omega[i * stride];
        *o = *e - z;
        *e += z;
    }
}

/// Radix-2 butterfly stages over bit-reversed input.
fn fft_butterflies<T: Float + NumAssign>(source: &mut [Complex<T>], omega: &[Complex<T>]) {
    let len = source.len();
    let mut half = 1;
    while half < len {
        let size = half << 1;
        let rad = len / size;
        for chunk in source.chunks_exact_mut(size) {
            let (lower, upper) = chunk.split_at_mut(half);
            for (k, (a, b)) in lower.iter_mut().zip(upper.iter_mut()).enumerate() {
                let z = *b * omega[k * rad];
                *b = *a - z;
                *a += z;
            }
        }
        half = size;
    }
}

/// Fast forward transform of `signal`; the length must be a power of two.
///
/// ```rust
/// use chfourier::fft_forward;
/// use num_complex::Complex;
///
/// let spectrum = fft_forward(&[Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)]).unwrap();
/// assert_eq!(spectrum, vec![Complex::new(2.0, 0.0), Complex::new(0.0, 0.0)]);
/// ```
pub fn fft_forward<T: Float + FloatConst + NumAssign>(
    signal: &[Complex<T>],
) -> Result<Vec<Complex<T>>> {
    CFft1D::new().forward(signal)
}

/// Fast inverse transform of `spectrum`, normalized by `1/n`.
pub fn fft_inverse<T: Float + FloatConst + NumAssign>(
    spectrum: &[Complex<T>],
) -> Result<Vec<Complex<T>>> {
    CFft1D::new().backward(spectrum)
}
