//! Values that always satisfy their constraint
//!
//! [`Constrained<T, C, V>`] owns a value of type `T` together with the
//! constraint `C` it must satisfy. Every value entering the wrapper, at
//! construction or on reassignment, goes through the verifier `V`:
//! - [`Reject`] refuses invalid values with a
//!   [`ConstraintViolation`](crate::ConstraintViolation)
//! - [`Clamping`] rewrites them to the nearest valid bound
//!
//! # Example
//!
//! ```rust
//! use tidemark::constraint::closed;
//! use tidemark::{Clamping, Constrained, Reject};
//!
//! let mut level = Constrained::<i32, _, Reject>::new(3, closed(1, 5)).unwrap();
//! assert_eq!(*level.get(), 3);
//! assert!(level.set(9).is_err());
//! assert_eq!(*level.get(), 3);
//!
//! let mut volume = Constrained::<i32, _, Clamping>::clamped(30, closed(0, 11));
//! assert_eq!(*volume.get(), 11);
//! volume.assign(-2);
//! assert_eq!(*volume.get(), 0);
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::constraint::{Bounded, LowerBound, UpperBound};
use crate::verifier::{Clamping, Reject, Verifier};

/// A value of type `T` guaranteed to satisfy the constraint `C`.
///
/// # Memory Layout
///
/// The verifier is a zero-sized type parameter. With a fully static
/// constraint the wrapper has the same size as `T`:
///
/// ```rust
/// use tidemark::aliases::Percentage;
///
/// assert_eq!(std::mem::size_of::<Percentage>(), 1);
/// ```
pub struct Constrained<T, C, V = Reject> {
    value: T,
    constraint: C,
    _verifier: PhantomData<fn() -> V>,
}

impl<T, C, V: Verifier<T, C>> Constrained<T, C, V> {
    /// Create a constrained value, passing it through the verifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::constraint::greater;
    /// use tidemark::Constrained;
    ///
    /// let positive = Constrained::<_, _>::new(4, greater(0));
    /// assert!(positive.is_ok());
    ///
    /// let not_positive = Constrained::<_, _>::new(0, greater(0));
    /// assert!(not_positive.is_err());
    /// ```
    pub fn new(value: T, constraint: C) -> Result<Self, V::Error> {
        let value = V::verify(value, &constraint)?;
        Ok(Self {
            value,
            constraint,
            _verifier: PhantomData,
        })
    }

    /// Replace the value, passing the new one through the verifier.
    ///
    /// On error the previous value is kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::make_bounded;
    ///
    /// let mut n = make_bounded(3, 1, 5).unwrap();
    /// assert!(n.set(5).is_ok());
    /// assert!(n.set(6).is_err());
    /// assert_eq!(*n.get(), 5);
    /// ```
    pub fn set(&mut self, value: T) -> Result<(), V::Error> {
        self.value = V::verify(value, &self.constraint)?;
        Ok(())
    }

    /// Map the inner value, passing the result through the verifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::make_bounded;
    ///
    /// let n = make_bounded(2, 1, 5).unwrap();
    /// assert_eq!(*n.try_map(|x| x * 2).unwrap().get(), 4);
    ///
    /// let n = make_bounded(3, 1, 5).unwrap();
    /// assert!(n.try_map(|x| x * 2).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, V::Error>
    where
        F: FnOnce(T) -> T,
    {
        let Self {
            value, constraint, ..
        } = self;
        Self::new(f(value), constraint)
    }
}

impl<T, C: Default, V: Verifier<T, C>> Constrained<T, C, V> {
    /// Create a constrained value whose constraint is built from
    /// build-time bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::aliases::Port;
    ///
    /// assert!(Port::fixed(8080).is_ok());
    /// assert!(Port::fixed(0).is_err());
    /// ```
    pub fn fixed(value: T) -> Result<Self, V::Error> {
        Self::new(value, C::default())
    }
}

impl<T, C> Constrained<T, C, Clamping>
where
    Clamping: Verifier<T, C, Error = Infallible>,
{
    /// Create a clamped value; out-of-range input is corrected, never
    /// rejected.
    pub fn clamped(value: T, constraint: C) -> Self {
        match Self::new(value, constraint) {
            Ok(clamped) => clamped,
            Err(never) => match never {},
        }
    }

    /// Replace the value, clamping it into range.
    pub fn assign(&mut self, value: T) {
        match self.set(value) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<T, C: Default> Constrained<T, C, Clamping>
where
    Clamping: Verifier<T, C, Error = Infallible>,
{
    /// Create a clamped value against build-time bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::aliases::UnitInterval;
    ///
    /// assert_eq!(*UnitInterval::clamped_fixed(1.7).get(), 1.0);
    /// assert_eq!(*UnitInterval::clamped_fixed(0.3).get(), 0.3);
    /// ```
    pub fn clamped_fixed(value: T) -> Self {
        Self::clamped(value, C::default())
    }
}

impl<T, C, V> Constrained<T, C, V> {
    /// Get a reference to the inner value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the wrapper, returning the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// The constraint the value satisfies
    #[inline]
    pub fn constraint(&self) -> &C {
        &self.constraint
    }
}

impl<T, Lo, Hi, V> Constrained<T, Bounded<T, Lo, Hi>, V>
where
    Lo: LowerBound<T>,
    Hi: UpperBound<T, Kind = Lo::Kind>,
{
    /// Lower bound of the interval the value lies in
    pub fn get_lower_bound(&self) -> &T {
        self.constraint.get_lower_bound()
    }

    /// Upper bound of the interval the value lies in
    pub fn get_upper_bound(&self) -> &T {
        self.constraint.get_upper_bound()
    }
}

impl<T: fmt::Debug, C: fmt::Debug, V> fmt::Debug for Constrained<T, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constrained")
            .field("value", &self.value)
            .field("constraint", &self.constraint)
            .field("verifier", &std::any::type_name::<V>())
            .finish()
    }
}

impl<T: Clone, C: Clone, V> Clone for Constrained<T, C, V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            constraint: self.constraint.clone(),
            _verifier: PhantomData,
        }
    }
}

impl<T: Copy, C: Copy, V> Copy for Constrained<T, C, V> {}

// Comparisons and hashing look at the value only

impl<T: PartialEq, C, V> PartialEq for Constrained<T, C, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, C, V> Eq for Constrained<T, C, V> {}

impl<T: PartialOrd, C, V> PartialOrd for Constrained<T, C, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, C, V> Ord for Constrained<T, C, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, C, V> Hash for Constrained<T, C, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, C, V> AsRef<T> for Constrained<T, C, V> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, C, V> std::ops::Deref for Constrained<T, C, V> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, C, V> fmt::Display for Constrained<T, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{
        closed, greater_equal, less_equal, open, ClosedInterval, ConstI32, GreaterEqual,
    };

    type Level = Constrained<i32, ClosedInterval<i32>>;
    type Volume = Constrained<i32, ClosedInterval<i32>, Clamping>;
    type Digit = Constrained<i32, ClosedInterval<i32, ConstI32<0>, ConstI32<9>>>;

    #[test]
    fn test_new_success() {
        let n = Level::new(3, closed(1, 5)).unwrap();
        assert_eq!(*n.get(), 3);
        assert_eq!(*n.get_lower_bound(), 1);
        assert_eq!(*n.get_upper_bound(), 5);
    }

    #[test]
    fn test_new_failure() {
        let err = Level::new(6, closed(1, 5)).unwrap_err();
        assert_eq!(err.into_value(), 6);
    }

    #[test]
    fn test_set_keeps_previous_value_on_error() {
        let mut n = Level::new(3, closed(1, 5)).unwrap();
        assert!(n.set(0).is_err());
        assert_eq!(*n.get(), 3);
        n.set(1).unwrap();
        assert_eq!(*n.get(), 1);
    }

    #[test]
    fn test_clamped() {
        let mut v = Volume::clamped(12, closed(0, 10));
        assert_eq!(*v.get(), 10);
        v.assign(-5);
        assert_eq!(*v.get(), 0);
        v.assign(7);
        assert_eq!(*v.get(), 7);
    }

    #[test]
    fn test_clamped_one_sided() {
        let ceiling = Constrained::<i32, _, Clamping>::clamped(200, less_equal(100));
        assert_eq!(*ceiling, 100);

        let floor = Constrained::<i32, _, Clamping>::clamped(-3, greater_equal(0));
        assert_eq!(*floor, 0);
    }

    #[test]
    fn test_reject_with_open_interval() {
        let n = Constrained::<i32, _>::new(2, open(2, 5));
        assert!(n.is_err());
        let n = Constrained::<i32, _>::new(3, open(2, 5));
        assert!(n.is_ok());
    }

    #[test]
    fn test_reject_with_single_predicate() {
        let floor = GreaterEqual::<i32, ConstI32<0>>::fixed();
        assert!(Constrained::<i32, _>::new(-1, floor).is_err());
        assert!(Constrained::<i32, _>::new(0, floor).is_ok());
    }

    #[test]
    fn test_fixed() {
        let d = Digit::fixed(7).unwrap();
        assert_eq!(*d, 7);
        assert_eq!(*d.get_upper_bound(), 9);
        assert!(Digit::fixed(10).is_err());
        assert_eq!(std::mem::size_of::<Digit>(), std::mem::size_of::<i32>());
    }

    #[test]
    fn test_try_map() {
        let n = Level::new(2, closed(1, 5)).unwrap();
        let n = n.try_map(|x| x + 3).unwrap();
        assert_eq!(*n.get(), 5);
        assert!(n.try_map(|x| x + 1).is_err());
    }

    #[test]
    fn test_into_inner() {
        let n = Level::new(4, closed(1, 5)).unwrap();
        assert_eq!(n.into_inner(), 4);
    }

    #[test]
    fn test_constraint_access() {
        let n = Level::new(4, closed(1, 5)).unwrap();
        assert_eq!(*n.constraint(), closed(1, 5));
    }

    #[test]
    fn test_ord_and_eq() {
        let a = Level::new(2, closed(1, 5)).unwrap();
        let b = Level::new(4, closed(0, 9)).unwrap();
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a, Level::new(2, closed(2, 2)).unwrap());
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Level::new(2, closed(1, 5)).unwrap());
        set.insert(Level::new(2, closed(1, 5)).unwrap());
        set.insert(Level::new(3, closed(1, 5)).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_deref_and_as_ref() {
        let n = Level::new(4, closed(1, 5)).unwrap();
        assert_eq!(*n, 4);
        let r: &i32 = n.as_ref();
        assert_eq!(*r, 4);
    }

    #[test]
    fn test_display() {
        let n = Level::new(4, closed(1, 5)).unwrap();
        assert_eq!(format!("{}", n), "4");
    }

    #[test]
    fn test_debug() {
        let n = Volume::clamped(4, closed(1, 5));
        let debug = format!("{:?}", n);
        assert!(debug.contains("Constrained"));
        assert!(debug.contains("Clamping"));
        assert!(debug.contains('4'));
    }

    #[test]
    fn test_clone() {
        let n = Level::new(4, closed(1, 5)).unwrap();
        let m = n;
        assert_eq!(n, m);
        let s = Constrained::<String, _>::new(
            String::from("m"),
            closed(String::from("a"), String::from("z")),
        )
        .unwrap();
        assert_eq!(s.clone(), s);
    }
}
