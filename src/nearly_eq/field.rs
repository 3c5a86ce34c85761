//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

use super::NearlyEq;
use crate::Field2D;
use num_complex::Complex;

impl<A, B, C: NearlyEq<A, B>> NearlyEq<Field2D<A>, B> for Field2D<C>
where
    Complex<C>: NearlyEq<Complex<A>, B>,
{
    fn eps() -> B {
        C::eps()
    }

    fn nearly_eq(&self, other: &Field2D<A>, eps: &B) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.as_slice().nearly_eq(other.as_slice(), eps)
    }
}
