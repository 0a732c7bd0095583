//! Factories deducing one value type from a value and two bounds
//!
//! All three arguments share one type parameter, so they must have the
//! exact same type. Mixing types is a compile error rather than a silent
//! conversion:
//!
//! ```rust,compile_fail
//! use tidemark::make_bounded;
//!
//! let n = make_bounded(1_i32, 0_i32, 5.0_f64);
//! ```
//!
//! ```rust,compile_fail
//! use tidemark::make_clamped;
//!
//! let n = make_clamped(1_u8, 0_u8, 255_u16);
//! ```

use std::fmt;

use crate::aliases::{BoundedClosed, BoundedOpen, ClampedType};
use crate::constrained::Constrained;
use crate::constraint::{ClosedInterval, OpenInterval};
use crate::error::ConstraintViolation;

/// Wrap `value` in the closed interval `[lower, upper]`, rejecting it if
/// it lies outside.
///
/// # Example
///
/// ```rust
/// use tidemark::make_bounded;
///
/// let n = make_bounded(3, 1, 5).unwrap();
/// assert_eq!(*n.get(), 3);
/// assert_eq!(*n.get_lower_bound(), 1);
/// assert_eq!(*n.get_upper_bound(), 5);
///
/// assert!(make_bounded(6, 1, 5).is_err());
/// ```
pub fn make_bounded<T>(
    value: T,
    lower: T,
    upper: T,
) -> Result<BoundedClosed<T>, ConstraintViolation<T>>
where
    T: PartialOrd + fmt::Debug,
{
    Constrained::new(value, ClosedInterval::<T>::new(lower, upper))
}

/// Wrap `value` in the open interval `(lower, upper)`, rejecting it if it
/// lies outside or on a bound.
///
/// # Example
///
/// ```rust
/// use tidemark::make_bounded_exclusive;
///
/// assert!(make_bounded_exclusive(3, 2, 5).is_ok());
/// assert!(make_bounded_exclusive(2, 2, 5).is_err());
/// assert!(make_bounded_exclusive(5, 2, 5).is_err());
/// ```
pub fn make_bounded_exclusive<T>(
    value: T,
    lower: T,
    upper: T,
) -> Result<BoundedOpen<T>, ConstraintViolation<T>>
where
    T: PartialOrd + fmt::Debug,
{
    Constrained::new(value, OpenInterval::<T>::new(lower, upper))
}

/// Wrap `value` in the closed interval `[lower, upper]`, clamping it into
/// range if it lies outside.
///
/// `lower` must not exceed `upper`. An inverted interval accepts no value,
/// so the wrapper ends up holding one of the bounds without satisfying it;
/// see [`clamp`](crate::clamp).
///
/// # Example
///
/// ```rust
/// use tidemark::make_clamped;
///
/// assert_eq!(*make_clamped(6, 1, 5).get(), 5);
/// assert_eq!(*make_clamped(0, 1, 5).get(), 1);
/// assert_eq!(*make_clamped(4, 1, 5).get(), 4);
/// ```
pub fn make_clamped<T>(value: T, lower: T, upper: T) -> ClampedType<T>
where
    T: PartialOrd + Clone,
{
    Constrained::clamped(value, ClosedInterval::<T>::new(lower, upper))
}
