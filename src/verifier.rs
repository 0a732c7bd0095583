//! Verifiers: what happens when a value violates its constraint
//!
//! - [`Reject`]: the value is refused with a [`ConstraintViolation`]
//! - [`Clamping`]: the value is rewritten to the nearest valid bound
//!
//! Clamping only exists for [`LessEqual`], [`GreaterEqual`] and closed
//! intervals. An open edge has no nearest valid value to rewrite to, so
//! clamping against one does not compile:
//!
//! ```rust,compile_fail
//! use tidemark::clamp;
//! use tidemark::constraint::OpenInterval;
//!
//! let v = clamp(&OpenInterval::<i32>::new(2, 5), 10);
//! ```
//!
//! ```rust,compile_fail
//! use tidemark::constraint::Less;
//! use tidemark::{Clamping, Verifier};
//!
//! let v = Clamping::verify(10, &Less::new(5));
//! ```
//!
//! [`LessEqual`]: crate::constraint::LessEqual
//! [`GreaterEqual`]: crate::constraint::GreaterEqual

use std::convert::Infallible;

use crate::constraint::{BoundPredicate, Bounded, Constraint, Inclusive, LowerBound, UpperBound};
use crate::error::ConstraintViolation;

/// Strategy applied to every value entering a
/// [`Constrained`](crate::Constrained).
///
/// `verify` returns the value to store, or an error if the value cannot
/// be accepted.
pub trait Verifier<T, C> {
    /// Error returned for values that cannot be accepted
    type Error;

    /// Accept, rewrite or reject `value`.
    fn verify(value: T, constraint: &C) -> Result<T, Self::Error>;
}

/// Refuse values that violate the constraint.
///
/// # Example
///
/// ```rust
/// use tidemark::constraint::less;
/// use tidemark::{Reject, Verifier};
///
/// assert_eq!(Reject::verify(3, &less(5)), Ok(3));
/// assert!(Reject::verify(7, &less(5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reject;

impl<T, C: Constraint<T>> Verifier<T, C> for Reject {
    type Error = ConstraintViolation<T>;

    fn verify(value: T, constraint: &C) -> Result<T, Self::Error> {
        if constraint.check(&value) {
            return Ok(value);
        }

        let description = constraint.description();
        #[cfg(feature = "tracing")]
        tracing::debug!(constraint = %description, "value rejected");
        Err(ConstraintViolation::new(value, description))
    }
}

/// Rewrite values that violate the constraint to the nearest bound.
///
/// # Example
///
/// ```rust
/// use tidemark::constraint::{closed, greater_equal, less_equal};
/// use tidemark::{Clamping, Verifier};
///
/// assert_eq!(Clamping::verify(12, &less_equal(10)), Ok(10));
/// assert_eq!(Clamping::verify(-4, &greater_equal(0)), Ok(0));
/// assert_eq!(Clamping::verify(10, &closed(2, 5)), Ok(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clamping;

impl<T, P> Verifier<T, P> for Clamping
where
    T: PartialOrd + Clone,
    P: BoundPredicate<T> + Inclusive,
{
    type Error = Infallible;

    fn verify(value: T, predicate: &P) -> Result<T, Self::Error> {
        if predicate.test(&value) {
            Ok(value)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!("value clamped to bound");
            Ok(predicate.get_bound().clone())
        }
    }
}

impl<T, Lo, Hi> Verifier<T, Bounded<T, Lo, Hi>> for Clamping
where
    T: PartialOrd + Clone,
    Lo: LowerBound<T> + Inclusive,
    Hi: UpperBound<T, Kind = Lo::Kind> + Inclusive,
{
    type Error = Infallible;

    fn verify(value: T, interval: &Bounded<T, Lo, Hi>) -> Result<T, Self::Error> {
        if interval.test(&value) {
            return Ok(value);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("value clamped into interval");
        Ok(clamp(interval, value))
    }
}

/// Move `value` into a closed interval.
///
/// Values below the lower bound become the lower bound, values above the
/// upper bound become the upper bound, anything else is returned as is.
/// A value unordered against the lower bound, such as `f64::NAN`, becomes
/// the lower bound.
///
/// The interval is expected to be ordered. When its lower bound exceeds its
/// upper bound no value satisfies it, and the result is one of the two
/// bounds rather than a value inside the interval.
///
/// # Example
///
/// ```rust
/// use tidemark::clamp;
/// use tidemark::constraint::closed;
///
/// let interval = closed(2, 5);
/// assert_eq!(clamp(&interval, 10), 5);
/// assert_eq!(clamp(&interval, -1), 2);
/// assert_eq!(clamp(&interval, 3), 3);
/// ```
pub fn clamp<T, Lo, Hi>(interval: &Bounded<T, Lo, Hi>, value: T) -> T
where
    T: PartialOrd + Clone,
    Lo: LowerBound<T> + Inclusive,
    Hi: UpperBound<T, Kind = Lo::Kind> + Inclusive,
{
    // Edges are inclusive: failing an edge's test covers unordered values too.
    if !interval.lower().test(&value) {
        interval.get_lower_bound().clone()
    } else if !interval.upper().test(&value) {
        interval.get_upper_bound().clone()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{
        closed, greater, greater_equal, less_equal, ClosedInterval, ConstI32, GreaterEqual,
        LessEqual,
    };

    #[test]
    fn test_reject_accepts_valid() {
        assert_eq!(Reject::verify(3, &closed(1, 5)), Ok(3));
        assert_eq!(Reject::verify(1, &greater_equal(1)), Ok(1));
    }

    #[test]
    fn test_reject_refuses_invalid() {
        let err = Reject::verify(6, &closed(1, 5)).unwrap_err();
        assert_eq!(*err.value(), 6);
        assert_eq!(err.constraint(), "[1, 5]");

        let err = Reject::verify(0, &greater(0)).unwrap_err();
        assert_eq!(err.constraint(), "> 0");
    }

    #[test]
    fn test_clamp_less_equal() {
        assert_eq!(Clamping::verify(11, &less_equal(10)), Ok(10));
        assert_eq!(Clamping::verify(10, &less_equal(10)), Ok(10));
        assert_eq!(Clamping::verify(-3, &less_equal(10)), Ok(-3));
    }

    #[test]
    fn test_clamp_greater_equal() {
        assert_eq!(Clamping::verify(-1, &greater_equal(0)), Ok(0));
        assert_eq!(Clamping::verify(4, &greater_equal(0)), Ok(4));
    }

    #[test]
    fn test_clamp_static_predicates() {
        let ceiling = LessEqual::<i32, ConstI32<100>>::fixed();
        assert_eq!(Clamping::verify(250, &ceiling), Ok(100));

        let floor = GreaterEqual::<i32, ConstI32<0>>::fixed();
        assert_eq!(Clamping::verify(-250, &floor), Ok(0));
    }

    #[test]
    fn test_clamp_interval() {
        let interval = closed(2, 5);
        assert_eq!(clamp(&interval, 10), 5);
        assert_eq!(clamp(&interval, -1), 2);
        assert_eq!(clamp(&interval, 3), 3);
        assert_eq!(clamp(&interval, 2), 2);
        assert_eq!(clamp(&interval, 5), 5);
        assert_eq!(Clamping::verify(10, &interval), Ok(5));
    }

    #[test]
    fn test_clamp_static_interval() {
        let interval = ClosedInterval::<i32, ConstI32<-10>, ConstI32<10>>::fixed();
        assert_eq!(clamp(&interval, 11), 10);
        assert_eq!(clamp(&interval, -11), -10);
    }

    #[test]
    fn test_clamp_floats() {
        let interval = closed(0.0, 1.0);
        assert_eq!(clamp(&interval, 1.5), 1.0);
        assert_eq!(clamp(&interval, -0.1), 0.0);
        assert_eq!(clamp(&interval, 0.25), 0.25);
    }

    #[test]
    fn test_clamp_nan_lands_on_lower_bound() {
        let interval = closed(0.0, 1.0);
        let clamped = clamp(&interval, f64::NAN);
        assert_eq!(clamped, 0.0);
        assert!(interval.check(&clamped));

        let verified = Clamping::verify(f64::NAN, &interval).unwrap();
        assert!(interval.check(&verified));
    }

    #[test]
    fn test_clamp_nan_against_single_bound() {
        assert_eq!(Clamping::verify(f64::NAN, &less_equal(1.0)), Ok(1.0));
        assert_eq!(Clamping::verify(f64::NAN, &greater_equal(0.0)), Ok(0.0));
    }

    #[test]
    fn test_clamp_inverted_interval_leaves_range() {
        let inverted = closed(5, 2);
        assert_eq!(clamp(&inverted, 3), 5);
        assert_eq!(clamp(&inverted, 9), 2);
        assert!(!inverted.check(&clamp(&inverted, 3)));
    }

    #[test]
    fn test_clamp_non_copy() {
        let interval = closed(String::from("b"), String::from("d"));
        assert_eq!(clamp(&interval, String::from("a")), "b");
        assert_eq!(clamp(&interval, String::from("z")), "d");
        assert_eq!(clamp(&interval, String::from("c")), "c");
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_rejection_is_logged() {
            let _ = Reject::verify(9, &closed(1, 5));
            assert!(logs_contain("value rejected"));
            assert!(logs_contain("[1, 5]"));
        }

        #[test]
        #[traced_test]
        fn test_clamping_is_logged() {
            let _ = Clamping::verify(9, &closed(1, 5));
            assert!(logs_contain("value clamped into interval"));
        }

        #[test]
        #[traced_test]
        fn test_valid_value_is_not_logged() {
            let _ = Clamping::verify(3, &closed(1, 5));
            assert!(!logs_contain("clamped"));
        }
    }
}
