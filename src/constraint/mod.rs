//! Ordering constraints over scalar values
//!
//! This module provides:
//! - the four bound predicates [`Less`], [`LessEqual`], [`Greater`] and
//!   [`GreaterEqual`], each with a static or dynamic bound
//! - [`Bounded`], the composition of a lower and an upper predicate into
//!   an interval, with the [`OpenInterval`] and [`ClosedInterval`] aliases
//! - the [`Constraint`] trait consumed by [`Constrained`](crate::Constrained)
//!   and the verifiers
//!
//! # Example
//!
//! ```rust
//! use tidemark::constraint::*;
//!
//! // Bound known at run time
//! let below_ten = Less::new(10);
//! assert!(below_ten.test(&9));
//! assert!(!below_ten.test(&10));
//!
//! // Bound known at build time, no storage
//! let non_negative = GreaterEqual::<i32, ConstI32<0>>::fixed();
//! assert!(non_negative.test(&0));
//!
//! // Interval
//! let digit = ClosedInterval::<i32>::new(0, 9);
//! assert!(digit.test(&5));
//! assert!(!digit.test(&10));
//! ```

pub mod bound;
mod interval;
mod predicates;

pub use bound::{
    BoundKind, BoundSource, ConstBool, ConstBound, ConstChar, ConstI128, ConstI16, ConstI32,
    ConstI64, ConstI8, ConstIsize, ConstU128, ConstU16, ConstU32, ConstU64, ConstU8, ConstUsize,
    Dynamic, DynamicKind, StaticKind,
};
pub use interval::{
    closed, open, Bounded, ClosedInterval, LeftOpenInterval, OpenInterval, RightOpenInterval,
};
pub use predicates::{
    greater, greater_equal, less, less_equal, Greater, GreaterEqual, Less, LessEqual,
};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A constraint that values of type `T` either satisfy or violate.
///
/// Unlike a bound predicate, a constraint is checked against `T` itself;
/// it is the shape [`Verifier`](crate::Verifier)s and
/// [`Constrained`](crate::Constrained) work with.
///
/// # Example
///
/// ```rust
/// use tidemark::constraint::Constraint;
///
/// struct Even;
///
/// impl Constraint<i32> for Even {
///     fn check(&self, value: &i32) -> bool {
///         value % 2 == 0
///     }
/// }
///
/// assert!(Even.check(&4));
/// assert!(!Even.check(&3));
/// ```
pub trait Constraint<T> {
    /// Check if the value satisfies the constraint.
    fn check(&self, value: &T) -> bool;

    /// Human-readable form of the constraint, used in error messages
    fn description(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// A single ordering relation against one bound.
///
/// Implemented by the four predicates of this module.
pub trait BoundPredicate<T> {
    /// Whether the bound is static or dynamic
    type Kind: BoundKind;

    /// The bound this predicate compares against
    fn get_bound(&self) -> &T;

    /// Compare a candidate against the bound.
    fn test<U>(&self, candidate: &U) -> bool
    where
        U: PartialOrd<T> + ?Sized;
}

/// A predicate usable as the lower edge of a [`Bounded`] interval.
pub trait LowerBound<T>: BoundPredicate<T> {
    /// Whether the bound itself satisfies the predicate
    const INCLUSIVE: bool;
}

/// A predicate usable as the upper edge of a [`Bounded`] interval.
pub trait UpperBound<T>: BoundPredicate<T> {
    /// Whether the bound itself satisfies the predicate
    const INCLUSIVE: bool;
}

/// Construction from a run-time bound.
///
/// Only predicates with a [`Dynamic`] bound implement this.
pub trait FromBound<T> {
    /// Build the predicate around `bound`.
    fn from_bound(bound: T) -> Self;
}

/// Marker for predicates whose bound is itself a valid value.
///
/// Clamping is only defined for these: rewriting a value to an
/// excluded bound would still violate the predicate.
pub trait Inclusive: sealed::Sealed {}
