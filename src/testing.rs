//! Testing utilities for constrained values
//!
//! This module provides assertion macros for constraints and, with the
//! `proptest` feature, strategies generating intervals and the values
//! inside them.
//!
//! # Assertion Macros
//!
//! ```rust
//! use tidemark::constraint::closed;
//! use tidemark::{assert_satisfies, assert_violates};
//!
//! let digit = closed(0, 9);
//! assert_satisfies!(digit, 5);
//! assert_violates!(digit, 10);
//! ```

/// Assert that a value satisfies a constraint.
///
/// This macro will panic with the constraint's description if the
/// value violates it.
///
/// # Example
///
/// ```rust
/// use tidemark::assert_satisfies;
/// use tidemark::constraint::less;
///
/// assert_satisfies!(less(10), 9);
/// ```
#[macro_export]
macro_rules! assert_satisfies {
    ($constraint:expr, $value:expr) => {
        match (&$constraint, &$value) {
            (constraint, value) => {
                if !$crate::constraint::Constraint::check(constraint, value) {
                    panic!(
                        "Expected {:?} to satisfy {}",
                        value,
                        $crate::constraint::Constraint::description(constraint)
                    );
                }
            }
        }
    };
}

/// Assert that a value violates a constraint.
///
/// This macro will panic if the value satisfies it.
///
/// # Example
///
/// ```rust
/// use tidemark::assert_violates;
/// use tidemark::constraint::less;
///
/// assert_violates!(less(10), 10);
/// ```
#[macro_export]
macro_rules! assert_violates {
    ($constraint:expr, $value:expr) => {
        match (&$constraint, &$value) {
            (constraint, value) => {
                if $crate::constraint::Constraint::check(constraint, value) {
                    panic!(
                        "Expected {:?} to violate {}",
                        value,
                        $crate::constraint::Constraint::description(constraint)
                    );
                }
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use strategies::{closed_intervals, values_in};

#[cfg(feature = "proptest")]
mod strategies {
    use std::fmt;
    use std::ops::RangeInclusive;

    use proptest::prelude::*;

    use crate::constraint::{Bounded, ClosedInterval, Inclusive, LowerBound, UpperBound};

    /// Generate closed intervals whose bounds are drawn from `range`.
    ///
    /// The lower bound never exceeds the upper bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use proptest::prelude::*;
    /// use tidemark::testing::closed_intervals;
    ///
    /// proptest!(|(interval in closed_intervals(-100..=100_i32))| {
    ///     prop_assert!(interval.get_lower_bound() <= interval.get_upper_bound());
    /// });
    /// ```
    pub fn closed_intervals<T>(range: RangeInclusive<T>) -> impl Strategy<Value = ClosedInterval<T>>
    where
        T: PartialOrd + Clone + fmt::Debug + 'static,
        RangeInclusive<T>: Strategy<Value = T>,
    {
        (range.clone(), range).prop_map(|(a, b)| {
            if a <= b {
                ClosedInterval::new(a, b)
            } else {
                ClosedInterval::new(b, a)
            }
        })
    }

    /// Strategy for the values inside a closed interval.
    ///
    /// # Example
    ///
    /// ```rust
    /// use proptest::prelude::*;
    /// use tidemark::constraint::closed;
    /// use tidemark::testing::values_in;
    ///
    /// let digit = closed(0, 9);
    /// proptest!(|(d in values_in(&digit))| {
    ///     prop_assert!(digit.test(&d));
    /// });
    /// ```
    pub fn values_in<T, Lo, Hi>(interval: &Bounded<T, Lo, Hi>) -> RangeInclusive<T>
    where
        T: Clone,
        Lo: LowerBound<T> + Inclusive,
        Hi: UpperBound<T, Kind = Lo::Kind> + Inclusive,
    {
        interval.get_lower_bound().clone()..=interval.get_upper_bound().clone()
    }
}
