//! The four bound predicates
//!
//! Each predicate is generated by one macro and is generic over its bound
//! source (see [`bound`](super::bound)):
//! - [`Less`]: candidate < bound
//! - [`LessEqual`]: candidate <= bound
//! - [`Greater`]: candidate > bound
//! - [`GreaterEqual`]: candidate >= bound
//!
//! A dynamic predicate is built with `new(bound)`, a static one with
//! `fixed()` or `Default`. The other constructor does not exist:
//!
//! ```rust,compile_fail
//! use tidemark::constraint::{ConstI32, Less};
//!
//! let p = Less::<i32, ConstI32<5>>::new(5);
//! ```
//!
//! ```rust,compile_fail
//! use tidemark::constraint::Less;
//!
//! let p = Less::<i32>::fixed();
//! ```
//!
//! A static bound must have the predicate's value type exactly:
//!
//! ```rust,compile_fail
//! use tidemark::constraint::{ConstI32, Less};
//!
//! let p = Less::<i64, ConstI32<5>>::fixed();
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::bound::{BoundSource, ConstBound, Dynamic};
use super::{sealed, BoundPredicate, Constraint, FromBound, Inclusive, LowerBound, UpperBound};

macro_rules! bound_predicate {
    ($(#[$meta:meta])* $name:ident, $op:tt, $symbol:literal) => {
        $(#[$meta])*
        pub struct $name<T, B: BoundSource<T> = Dynamic> {
            bound: B::Storage,
            _value: PhantomData<fn() -> T>,
        }

        impl<T> $name<T, Dynamic> {
            /// Create the predicate with a bound chosen at run time.
            #[inline]
            pub fn new(bound: T) -> Self {
                Self {
                    bound,
                    _value: PhantomData,
                }
            }
        }

        impl<T, C> $name<T, C>
        where
            C: ConstBound<Value = T>,
        {
            /// Create the predicate with its build-time bound.
            #[inline]
            pub fn fixed() -> Self {
                Self {
                    bound: C::default(),
                    _value: PhantomData,
                }
            }
        }

        impl<T, B: BoundSource<T>> $name<T, B> {
            /// The bound candidates are compared against.
            #[inline]
            pub fn get_bound(&self) -> &T {
                B::bound(&self.bound)
            }

            #[doc = concat!("Returns `candidate ", $symbol, " bound`.")]
            #[inline]
            pub fn test<U>(&self, candidate: &U) -> bool
            where
                U: PartialOrd<T> + ?Sized,
            {
                candidate $op self.get_bound()
            }
        }

        impl<T, B: BoundSource<T>> BoundPredicate<T> for $name<T, B> {
            type Kind = B::Kind;

            #[inline]
            fn get_bound(&self) -> &T {
                B::bound(&self.bound)
            }

            #[inline]
            fn test<U>(&self, candidate: &U) -> bool
            where
                U: PartialOrd<T> + ?Sized,
            {
                candidate $op B::bound(&self.bound)
            }
        }

        impl<T, B> Constraint<T> for $name<T, B>
        where
            T: PartialOrd + fmt::Debug,
            B: BoundSource<T>,
        {
            fn check(&self, value: &T) -> bool {
                self.test(value)
            }

            fn description(&self) -> String {
                format!(concat!($symbol, " {:?}"), self.get_bound())
            }
        }

        impl<T> FromBound<T> for $name<T, Dynamic> {
            #[inline]
            fn from_bound(bound: T) -> Self {
                Self::new(bound)
            }
        }

        impl<T, C> Default for $name<T, C>
        where
            C: ConstBound<Value = T>,
        {
            fn default() -> Self {
                Self::fixed()
            }
        }

        impl<T, B> Clone for $name<T, B>
        where
            B: BoundSource<T>,
            B::Storage: Clone,
        {
            fn clone(&self) -> Self {
                Self {
                    bound: self.bound.clone(),
                    _value: PhantomData,
                }
            }
        }

        impl<T, B> Copy for $name<T, B>
        where
            B: BoundSource<T>,
            B::Storage: Copy,
        {
        }

        impl<T: fmt::Debug, B: BoundSource<T>> fmt::Debug for $name<T, B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("bound", self.get_bound())
                    .finish()
            }
        }

        impl<T: fmt::Display, B: BoundSource<T>> fmt::Display for $name<T, B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($symbol, " {}"), self.get_bound())
            }
        }

        impl<T: PartialEq, B: BoundSource<T>> PartialEq for $name<T, B> {
            fn eq(&self, other: &Self) -> bool {
                self.get_bound() == other.get_bound()
            }
        }

        impl<T: Eq, B: BoundSource<T>> Eq for $name<T, B> {}
    };
}

bound_predicate!(
    /// A value is valid if it is less than the bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::constraint::{ConstU32, Less};
    ///
    /// let p = Less::<u32, ConstU32<8>>::fixed();
    /// assert!(p.test(&7));
    /// assert!(!p.test(&8));
    /// assert_eq!(*p.get_bound(), 8);
    /// ```
    Less, <, "<"
);

bound_predicate!(
    /// A value is valid if it is less than or equal to the bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::constraint::LessEqual;
    ///
    /// let p = LessEqual::new(8);
    /// assert!(p.test(&8));
    /// assert!(!p.test(&9));
    /// ```
    LessEqual, <=, "<="
);

bound_predicate!(
    /// A value is valid if it is greater than the bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::constraint::Greater;
    ///
    /// let p = Greater::new(0.0);
    /// assert!(p.test(&0.5));
    /// assert!(!p.test(&0.0));
    /// ```
    Greater, >, ">"
);

bound_predicate!(
    /// A value is valid if it is greater than or equal to the bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidemark::constraint::{ConstI64, GreaterEqual};
    ///
    /// let p = GreaterEqual::<i64, ConstI64<-1>>::default();
    /// assert!(p.test(&-1));
    /// assert!(!p.test(&-2));
    /// ```
    GreaterEqual, >=, ">="
);

impl<T, B: BoundSource<T>> LowerBound<T> for Greater<T, B> {
    const INCLUSIVE: bool = false;
}

impl<T, B: BoundSource<T>> LowerBound<T> for GreaterEqual<T, B> {
    const INCLUSIVE: bool = true;
}

impl<T, B: BoundSource<T>> UpperBound<T> for Less<T, B> {
    const INCLUSIVE: bool = false;
}

impl<T, B: BoundSource<T>> UpperBound<T> for LessEqual<T, B> {
    const INCLUSIVE: bool = true;
}

impl<T, B: BoundSource<T>> sealed::Sealed for LessEqual<T, B> {}
impl<T, B: BoundSource<T>> sealed::Sealed for GreaterEqual<T, B> {}

impl<T, B: BoundSource<T>> Inclusive for LessEqual<T, B> {}
impl<T, B: BoundSource<T>> Inclusive for GreaterEqual<T, B> {}

/// Create a predicate that checks if a value is less than `bound`.
///
/// # Example
///
/// ```rust
/// use tidemark::constraint::less;
///
/// assert!(less(5).test(&4));
/// assert!(!less(5).test(&5));
/// ```
pub fn less<T>(bound: T) -> Less<T> {
    Less::new(bound)
}

/// Create a predicate that checks if a value is less than or equal to `bound`.
pub fn less_equal<T>(bound: T) -> LessEqual<T> {
    LessEqual::new(bound)
}

/// Create a predicate that checks if a value is greater than `bound`.
pub fn greater<T>(bound: T) -> Greater<T> {
    Greater::new(bound)
}

/// Create a predicate that checks if a value is greater than or equal to `bound`.
pub fn greater_equal<T>(bound: T) -> GreaterEqual<T> {
    GreaterEqual::new(bound)
}
