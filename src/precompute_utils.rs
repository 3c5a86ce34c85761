//! Twiddle tables and index permutations shared by the transforms.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use num_complex::Complex;
use num_traits::cast;
use num_traits::float::{Float, FloatConst};
use num_traits::identities::one;

/// Lossless for every length the capacity check lets through.
#[inline]
pub fn cast_usize<T: Float>(value: usize) -> T {
    cast(value).unwrap_or_else(T::nan)
}

#[inline]
pub fn calc_omega_item<T: Float + FloatConst>(len: usize, position: usize) -> Complex<T> {
    let two: T = cast_usize(2);
    Complex::from_polar(
        one(),
        -two * T::PI() * cast_usize::<T>(position) / cast_usize::<T>(len),
    )
}

/// Forward roots of unity `exp(-2πik/len)` for `k` in `0..=len`.
///
/// The table has `len + 1` entries so that reversing it yields the inverse roots
/// `exp(+2πik/len)` at the same indices.
pub fn calc_omega<T: Float + FloatConst>(len: usize) -> Vec<Complex<T>> {
    let mut omega = Vec::with_capacity(len + 1);
    omega.push(one());
    if len.trailing_zeros() >= 2 {
        let q = len >> 2;
        let h = len >> 1;
        for i in 1..q {
            omega.push(calc_omega_item(len, i));
        }
        // second quarter: rotate by -i
        for i in q..h {
            let tmp: Complex<T> = omega[i - q];
            omega.push(Complex::new(tmp.im, -tmp.re));
        }
        // second half: negate
        for i in h..len {
            let tmp = omega[i - h];
            omega.push(-tmp);
        }
    } else if len == 2 {
        omega.push(Complex::new(-T::one(), T::zero()));
    } else {
        for i in 1..len {
            omega.push(calc_omega_item(len, i));
        }
    }
    if len > 0 {
        omega.push(one());
    }
    omega
}

/// The inverse table, `exp(+2πik/len)` for `k` in `0..=len`.
pub fn calc_omega_back<T: Float + FloatConst>(omega: &[Complex<T>]) -> Vec<Complex<T>> {
    omega.iter().rev().copied().collect()
}

/// Bit-reversal permutation for a power-of-two `len`.
pub fn calc_bitreverse(len: usize) -> Vec<usize> {
    if len <= 1 {
        return vec![0; len];
    }
    let bits = len.trailing_zeros();
    (0..len)
        .map(|i| i.reverse_bits() >> (usize::BITS - bits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_nearly_eq;

    #[test]
    fn omega_matches_direct_evaluation() {
        for &len in &[1_usize, 2, 3, 4, 6, 8, 12, 64] {
            let omega = calc_omega::<f64>(len);
            assert_eq!(omega.len(), len + 1);
            let expected = (0..=len)
                .map(|k| calc_omega_item::<f64>(len, k % len))
                .collect::<Vec<_>>();
            assert_nearly_eq!(omega, expected);
        }
    }

    #[test]
    fn omega_back_is_conjugate() {
        let omega = calc_omega::<f64>(16);
        let back = calc_omega_back(&omega);
        let conj = omega.iter().map(|w| w.conj()).collect::<Vec<_>>();
        assert_nearly_eq!(back, conj);
    }

    #[test]
    fn bitreverse() {
        assert_eq!(calc_bitreverse(1), vec![0]);
        assert_eq!(calc_bitreverse(2), vec![0, 1]);
        assert_eq!(calc_bitreverse(8), vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }
}
