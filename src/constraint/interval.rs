//! Intervals composed from a lower and an upper bound predicate
//!
//! [`Bounded<T, Lo, Hi>`] holds a lower predicate ([`Greater`] or
//! [`GreaterEqual`]) and an upper predicate ([`Less`] or [`LessEqual`]).
//! The choice of predicate decides whether each edge is inclusive, the
//! predicate's bound source decides whether it is static or dynamic.
//!
//! Both edges must share one representation. Mixing a static and a
//! dynamic edge does not type-check:
//!
//! ```rust,compile_fail
//! use tidemark::constraint::{ClosedInterval, ConstI32, Dynamic};
//!
//! fn digit(_: ClosedInterval<i32, ConstI32<0>, Dynamic>) {}
//! ```
//!
//! # Example
//!
//! ```rust
//! use tidemark::constraint::{ClosedInterval, ConstI32, OpenInterval};
//!
//! let closed = ClosedInterval::<i32>::new(2, 5);
//! assert!(closed.test(&2) && closed.test(&5));
//!
//! let open = OpenInterval::<i32>::new(2, 5);
//! assert!(!open.test(&2) && !open.test(&5) && open.test(&3));
//!
//! // Both edges static: no storage at all
//! let percent = ClosedInterval::<i32, ConstI32<0>, ConstI32<100>>::fixed();
//! assert_eq!(std::mem::size_of_val(&percent), 0);
//! assert_eq!(*percent.get_upper_bound(), 100);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::bound::Dynamic;
use super::predicates::{Greater, GreaterEqual, Less, LessEqual};
use super::{Constraint, FromBound, LowerBound, UpperBound};

/// A value is valid if it lies between a lower and an upper bound.
///
/// The lower predicate is checked first; the upper one is skipped when
/// the lower one fails.
pub struct Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T>,
    Hi: UpperBound<T, Kind = Lo::Kind>,
{
    lower: Lo,
    upper: Hi,
    _value: PhantomData<fn() -> T>,
}

/// Both bounds excluded: `(lower, upper)`
pub type OpenInterval<T, L = Dynamic, U = Dynamic> = Bounded<T, Greater<T, L>, Less<T, U>>;

/// Both bounds included: `[lower, upper]`
pub type ClosedInterval<T, L = Dynamic, U = Dynamic> =
    Bounded<T, GreaterEqual<T, L>, LessEqual<T, U>>;

/// Lower bound excluded, upper included: `(lower, upper]`
pub type LeftOpenInterval<T, L = Dynamic, U = Dynamic> = Bounded<T, Greater<T, L>, LessEqual<T, U>>;

/// Lower bound included, upper excluded: `[lower, upper)`
pub type RightOpenInterval<T, L = Dynamic, U = Dynamic> =
    Bounded<T, GreaterEqual<T, L>, Less<T, U>>;

impl<T, Lo, Hi> Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T> + FromBound<T>,
    Hi: UpperBound<T, Kind = Lo::Kind> + FromBound<T>,
{
    /// Create an interval from bounds chosen at run time.
    ///
    /// The bounds are not ordered against each other; an interval whose
    /// lower bound exceeds its upper bound accepts nothing.
    pub fn new(lower: T, upper: T) -> Self {
        Self {
            lower: Lo::from_bound(lower),
            upper: Hi::from_bound(upper),
            _value: PhantomData,
        }
    }
}

impl<T, Lo, Hi> Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T> + Default,
    Hi: UpperBound<T, Kind = Lo::Kind> + Default,
{
    /// Create an interval whose bounds are both fixed at build time.
    pub fn fixed() -> Self {
        Self {
            lower: Lo::default(),
            upper: Hi::default(),
            _value: PhantomData,
        }
    }
}

impl<T, Lo, Hi> Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T>,
    Hi: UpperBound<T, Kind = Lo::Kind>,
{
    /// Check the lower edge, then the upper edge.
    #[inline]
    pub fn test<U>(&self, candidate: &U) -> bool
    where
        U: PartialOrd<T> + ?Sized,
    {
        self.lower.test(candidate) && self.upper.test(candidate)
    }

    /// The lower bound
    #[inline]
    pub fn get_lower_bound(&self) -> &T {
        self.lower.get_bound()
    }

    /// The upper bound
    #[inline]
    pub fn get_upper_bound(&self) -> &T {
        self.upper.get_bound()
    }

    /// The lower edge predicate
    pub fn lower(&self) -> &Lo {
        &self.lower
    }

    /// The upper edge predicate
    pub fn upper(&self) -> &Hi {
        &self.upper
    }

    /// Whether the lower bound itself is a valid value
    pub fn is_lower_inclusive(&self) -> bool {
        Lo::INCLUSIVE
    }

    /// Whether the upper bound itself is a valid value
    pub fn is_upper_inclusive(&self) -> bool {
        Hi::INCLUSIVE
    }

    fn brackets() -> (char, char) {
        (
            if Lo::INCLUSIVE { '[' } else { '(' },
            if Hi::INCLUSIVE { ']' } else { ')' },
        )
    }
}

impl<T, Lo, Hi> Constraint<T> for Bounded<T, Lo, Hi>
where
    T: PartialOrd + fmt::Debug,
    Lo: LowerBound<T>,
    Hi: UpperBound<T, Kind = Lo::Kind>,
{
    fn check(&self, value: &T) -> bool {
        self.test(value)
    }

    fn description(&self) -> String {
        let (open, close) = Self::brackets();
        format!(
            "{}{:?}, {:?}{}",
            open,
            self.get_lower_bound(),
            self.get_upper_bound(),
            close
        )
    }
}

impl<T, Lo, Hi> Default for Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T> + Default,
    Hi: UpperBound<T, Kind = Lo::Kind> + Default,
{
    fn default() -> Self {
        Self::fixed()
    }
}

impl<T, Lo, Hi> Clone for Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T> + Clone,
    Hi: UpperBound<T, Kind = Lo::Kind> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            lower: self.lower.clone(),
            upper: self.upper.clone(),
            _value: PhantomData,
        }
    }
}

impl<T, Lo, Hi> Copy for Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T> + Copy,
    Hi: UpperBound<T, Kind = Lo::Kind> + Copy,
{
}

impl<T, Lo, Hi> PartialEq for Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T> + PartialEq,
    Hi: UpperBound<T, Kind = Lo::Kind> + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<T, Lo, Hi> Eq for Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T> + Eq,
    Hi: UpperBound<T, Kind = Lo::Kind> + Eq,
{
}

impl<T, Lo, Hi> fmt::Debug for Bounded<T, Lo, Hi>
where
    Lo: LowerBound<T> + fmt::Debug,
    Hi: UpperBound<T, Kind = Lo::Kind> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bounded")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T, Lo, Hi> fmt::Display for Bounded<T, Lo, Hi>
where
    T: fmt::Display,
    Lo: LowerBound<T>,
    Hi: UpperBound<T, Kind = Lo::Kind>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = Self::brackets();
        write!(
            f,
            "{}{}, {}{}",
            open,
            self.get_lower_bound(),
            self.get_upper_bound(),
            close
        )
    }
}

/// Create a closed interval `[lower, upper]`.
///
/// # Example
///
/// ```rust
/// use tidemark::constraint::closed;
///
/// let p = closed(0, 100);
/// assert!(p.test(&0));
/// assert!(p.test(&100));
/// assert!(!p.test(&101));
/// ```
pub fn closed<T>(lower: T, upper: T) -> ClosedInterval<T> {
    ClosedInterval::new(lower, upper)
}

/// Create an open interval `(lower, upper)`.
///
/// # Example
///
/// ```rust
/// use tidemark::constraint::open;
///
/// let p = open(0.0, 1.0);
/// assert!(p.test(&0.5));
/// assert!(!p.test(&0.0));
/// assert!(!p.test(&1.0));
/// ```
pub fn open<T>(lower: T, upper: T) -> OpenInterval<T> {
    OpenInterval::new(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::bound::{ConstI32, ConstU8};
    use crate::static_bound;
    use std::cell::Cell;
    use std::cmp::Ordering;
    use std::mem::size_of;

    static_bound! {
        Low: f64 = -0.5;
        High: f64 = 0.5;
    }

    type Digit = ClosedInterval<i32, ConstI32<0>, ConstI32<9>>;

    #[test]
    fn test_closed_interval() {
        let p = closed(2, 5);
        assert!(p.test(&2));
        assert!(p.test(&5));
        assert!(p.test(&3));
        assert!(!p.test(&1));
        assert!(!p.test(&6));
    }

    #[test]
    fn test_open_interval() {
        let p = open(2, 5);
        assert!(!p.test(&2));
        assert!(!p.test(&5));
        assert!(p.test(&3));
        assert!(!p.test(&1));
        assert!(!p.test(&6));
    }

    #[test]
    fn test_half_open_intervals() {
        let left = LeftOpenInterval::<i32>::new(2, 5);
        assert!(!left.test(&2));
        assert!(left.test(&5));

        let right = RightOpenInterval::<i32>::new(2, 5);
        assert!(right.test(&2));
        assert!(!right.test(&5));
    }

    #[test]
    fn test_static_interval() {
        let digit = Digit::fixed();
        assert!(digit.test(&0));
        assert!(digit.test(&9));
        assert!(!digit.test(&10));
        assert!(!digit.test(&-1));
        assert_eq!(*digit.get_lower_bound(), 0);
        assert_eq!(*digit.get_upper_bound(), 9);
    }

    #[test]
    fn test_static_float_interval() {
        let p = OpenInterval::<f64, Low, High>::default();
        assert!(p.test(&0.0));
        assert!(!p.test(&0.5));
        assert!(!p.test(&-0.5));
    }

    #[test]
    fn test_mixed_edge_kinds_with_same_representation() {
        type Percent = LeftOpenInterval<u8, ConstU8<0>, ConstU8<100>>;
        let p = Percent::fixed();
        assert!(!p.test(&0));
        assert!(p.test(&100));
    }

    #[test]
    fn test_bounds_match_predicates() {
        let p = closed(-3, 7);
        assert_eq!(p.get_lower_bound(), p.lower().get_bound());
        assert_eq!(p.get_upper_bound(), p.upper().get_bound());
        assert_eq!(*p.get_lower_bound(), -3);
        assert_eq!(*p.get_upper_bound(), 7);
    }

    #[test]
    fn test_inclusivity() {
        let p = LeftOpenInterval::<i32>::new(0, 1);
        assert!(!p.is_lower_inclusive());
        assert!(p.is_upper_inclusive());
    }

    #[test]
    fn test_empty_interval_accepts_nothing() {
        let p = closed(5, 2);
        for x in 0..8 {
            assert!(!p.test(&x));
        }
    }

    #[test]
    fn test_short_circuit() {
        struct Probe<'a> {
            value: i32,
            comparisons: &'a Cell<u32>,
        }

        impl PartialEq<i32> for Probe<'_> {
            fn eq(&self, other: &i32) -> bool {
                self.value == *other
            }
        }

        impl PartialOrd<i32> for Probe<'_> {
            fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
                self.comparisons.set(self.comparisons.get() + 1);
                self.value.partial_cmp(other)
            }
        }

        let comparisons = Cell::new(0);
        let p = closed(2, 5);

        assert!(!p.test(&Probe {
            value: 1,
            comparisons: &comparisons,
        }));
        assert_eq!(comparisons.get(), 1);

        comparisons.set(0);
        assert!(p.test(&Probe {
            value: 3,
            comparisons: &comparisons,
        }));
        assert_eq!(comparisons.get(), 2);
    }

    #[test]
    fn test_storage_size() {
        assert_eq!(size_of::<Digit>(), 0);
        assert_eq!(size_of::<OpenInterval<f64, Low, High>>(), 0);
        assert_eq!(size_of::<ClosedInterval<i32>>(), 2 * size_of::<i32>());
    }

    #[test]
    fn test_description() {
        assert_eq!(closed(2, 5).description(), "[2, 5]");
        assert_eq!(open(2, 5).description(), "(2, 5)");
        assert_eq!(LeftOpenInterval::<i32>::new(2, 5).description(), "(2, 5]");
        assert_eq!(RightOpenInterval::<i32>::new(2, 5).description(), "[2, 5)");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Digit::fixed()), "[0, 9]");
        assert_eq!(format!("{}", open(0.5, 1.5)), "(0.5, 1.5)");
    }

    #[test]
    fn test_clone_eq() {
        let p = closed(1, 2);
        let q = p;
        assert_eq!(p, q);
        assert_ne!(p, closed(1, 3));
        assert_eq!(Digit::fixed(), Digit::default());
    }

    #[test]
    fn test_debug() {
        let debug = format!("{:?}", closed(1, 2));
        assert!(debug.contains("Bounded"));
        assert!(debug.contains("GreaterEqual"));
        assert!(debug.contains("LessEqual"));
    }
}
