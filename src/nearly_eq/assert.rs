//! # Licensing
//! This Source Code is subject to the terms of the Mozilla Public License
//! version 2.0 (the "License"). You can obtain a copy of the License at
//! http://mozilla.org/MPL/2.0/ .

/// Asserts that two values are equal within the type's default tolerance,
/// or within an explicit one.
///
/// ```rust
/// use chfourier::assert_nearly_eq;
///
/// assert_nearly_eq!(1.0_f64, 1.0 + 1e-12);
/// assert_nearly_eq!(vec![1.0_f64, 2.0], vec![1.05, 2.0], 0.1);
/// ```
#[macro_export]
macro_rules! assert_nearly_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => assert!(
                $crate::nearly_eq::nearly_eq_default(a, b),
                "assertion failed: `(left ~= right)` (left: `{:?}`, right: `{:?}`)",
                *a,
                *b
            ),
        }
    };
    ($a:expr, $b:expr, $eps:expr) => {
        match (&$a, &$b, &$eps) {
            (a, b, eps) => assert!(
                $crate::nearly_eq::nearly_eq_with(a, b, eps),
                "assertion failed: `(left ~= right)` (left: `{:?}`, right: `{:?}`, eps: `{:?}`)",
                *a,
                *b,
                *eps
            ),
        }
    };
}
