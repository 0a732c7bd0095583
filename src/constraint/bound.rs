//! Bound representations: static (zero-sized) or dynamic (stored)
//!
//! Every predicate is generic over a bound source `B`:
//! - [`Dynamic`]: the bound is chosen at run time and stored inline
//! - any [`ConstBound`] type: the bound is fixed at build time and the
//!   predicate carries no runtime storage for it
//!
//! # Example
//!
//! ```rust
//! use std::mem::size_of;
//! use tidemark::constraint::{ConstI32, Dynamic, Less};
//!
//! assert_eq!(size_of::<Less<i32, ConstI32<10>>>(), 0);
//! assert_eq!(size_of::<Less<i32, Dynamic>>(), size_of::<i32>());
//! ```
//!
//! Constants that cannot be const generic parameters (floats, for
//! instance) are declared with [`static_bound!`](crate::static_bound):
//!
//! ```rust
//! use tidemark::constraint::LessEqual;
//! use tidemark::static_bound;
//!
//! static_bound!(pub Limit: f64 = 2.5);
//!
//! let p = LessEqual::<f64, Limit>::fixed();
//! assert!(p.test(&2.5));
//! assert!(!p.test(&2.6));
//! ```

mod sealed {
    pub trait Sealed {}
}

/// Marker for bounds supplied at run time.
///
/// This is the default bound source of every predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dynamic;

/// Representation kind of a bound known at build time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StaticKind;

/// Representation kind of a bound stored at run time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DynamicKind;

/// The two representation kinds. Intervals require both edges to share one.
pub trait BoundKind: sealed::Sealed {
    /// Whether bounds of this kind are stored at run time
    const IS_DYNAMIC: bool;
}

impl sealed::Sealed for StaticKind {}
impl sealed::Sealed for DynamicKind {}

impl BoundKind for StaticKind {
    const IS_DYNAMIC: bool = false;
}

impl BoundKind for DynamicKind {
    const IS_DYNAMIC: bool = true;
}

/// A bound value fixed at build time.
///
/// Implementors are zero-sized; the value lives in static memory.
/// Use [`static_bound!`](crate::static_bound) or the `Const*` types
/// instead of implementing this by hand.
pub trait ConstBound: Copy + Default + 'static {
    /// Type of the bound
    type Value: 'static;

    /// The bound itself
    fn value() -> &'static Self::Value;
}

/// Selects how a predicate holds its bound.
///
/// Implemented by [`Dynamic`] (storage is `T` itself) and by every
/// [`ConstBound`] whose value type is `T` (storage is the zero-sized
/// constant type).
pub trait BoundSource<T> {
    /// Static or dynamic
    type Kind: BoundKind;

    /// What the predicate stores to answer `get_bound`
    type Storage;

    /// Read the bound out of its storage.
    fn bound(storage: &Self::Storage) -> &T;
}

impl<T> BoundSource<T> for Dynamic {
    type Kind = DynamicKind;
    type Storage = T;

    #[inline]
    fn bound(storage: &T) -> &T {
        storage
    }
}

impl<C: ConstBound> BoundSource<C::Value> for C {
    type Kind = StaticKind;
    type Storage = C;

    #[inline]
    fn bound(_storage: &C) -> &C::Value {
        C::value()
    }
}

/// Declare zero-sized build-time bounds.
///
/// # Example
///
/// ```rust
/// use tidemark::constraint::{ConstBound, GreaterEqual};
/// use tidemark::static_bound;
///
/// static_bound! {
///     /// Smallest valid temperature
///     pub AbsoluteZero: f64 = -273.15;
///     pub Capacity: usize = 64;
/// }
///
/// assert_eq!(*AbsoluteZero::value(), -273.15);
/// assert_eq!(std::mem::size_of::<AbsoluteZero>(), 0);
///
/// let p = GreaterEqual::<f64, AbsoluteZero>::fixed();
/// assert!(p.test(&0.0));
/// assert!(!p.test(&-300.0));
/// ```
#[macro_export]
macro_rules! static_bound {
    ($($(#[$meta:meta])* $vis:vis $name:ident : $ty:ty = $value:expr);+ $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $name;

            impl $crate::constraint::bound::ConstBound for $name {
                type Value = $ty;

                #[inline]
                fn value() -> &'static $ty {
                    static VALUE: $ty = $value;
                    &VALUE
                }
            }
        )+
    };
}

// Const generic bounds for every type usable as a const parameter
macro_rules! impl_const_bounds {
    ($($name:ident: $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("A `", stringify!($ty), "` bound fixed at build time through a const parameter.")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name<const N: $ty>;

            impl<const N: $ty> ConstBound for $name<N> {
                type Value = $ty;

                #[inline]
                fn value() -> &'static $ty {
                    &N
                }
            }
        )+
    };
}

impl_const_bounds!(
    ConstI8: i8,
    ConstI16: i16,
    ConstI32: i32,
    ConstI64: i64,
    ConstI128: i128,
    ConstIsize: isize,
    ConstU8: u8,
    ConstU16: u16,
    ConstU32: u32,
    ConstU64: u64,
    ConstU128: u128,
    ConstUsize: usize,
    ConstChar: char,
    ConstBool: bool,
);
