//! Approximate equality for floats, complex samples and fields.
//!
//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

mod complex;
mod field;

#[macro_use]
mod assert;

/// Element-wise comparison within an absolute tolerance.
pub trait NearlyEq<Rhs: ?Sized = Self, Diff: ?Sized = Self> {
    /// Tolerance used when none is given.
    fn eps() -> Diff;

    /// `true` when every component differs by less than `eps`.
    fn nearly_eq(&self, other: &Rhs, eps: &Diff) -> bool;
}

impl NearlyEq for f32 {
    fn eps() -> f32 {
        1e-2
    }

    fn nearly_eq(&self, other: &f32, eps: &f32) -> bool {
        *self == *other || (*self - *other).abs() < *eps
    }
}

impl NearlyEq for f64 {
    fn eps() -> f64 {
        1e-9
    }

    fn nearly_eq(&self, other: &f64, eps: &f64) -> bool {
        *self == *other || (*self - *other).abs() < *eps
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<[A], B> for [C] {
    fn eps() -> B {
        C::eps()
    }

    fn nearly_eq(&self, other: &[A], eps: &B) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.nearly_eq(b, eps))
    }
}

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Vec<A>, B> for Vec<C> {
    fn eps() -> B {
        C::eps()
    }

    fn nearly_eq(&self, other: &Vec<A>, eps: &B) -> bool {
        self.as_slice().nearly_eq(other.as_slice(), eps)
    }
}

#[doc(hidden)]
#[inline]
pub fn nearly_eq_default<A: ?Sized, B, C: NearlyEq<A, B> + ?Sized>(a: &C, b: &A) -> bool {
    a.nearly_eq(b, &C::eps())
}

#[doc(hidden)]
#[inline]
pub fn nearly_eq_with<A: ?Sized, B, C: NearlyEq<A, B> + ?Sized>(a: &C, b: &A, eps: &B) -> bool {
    a.nearly_eq(b, eps)
}
