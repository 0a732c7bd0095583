//! Type aliases for common constrained types
//!
//! # Example
//!
//! ```rust
//! use tidemark::aliases::{Percentage, Port, UnitInterval};
//!
//! let pct = Percentage::fixed(75).unwrap();
//! assert_eq!(*pct, 75);
//! assert!(Percentage::fixed(101).is_err());
//!
//! assert!(Port::fixed(443).is_ok());
//!
//! let gain = UnitInterval::clamped_fixed(1.25);
//! assert_eq!(*gain, 1.0);
//! ```

use crate::constrained::Constrained;
use crate::constraint::{Bounded, ClosedInterval, ConstU16, ConstU8, Dynamic, OpenInterval};
use crate::verifier::{Clamping, Reject};

crate::static_bound! {
    /// `0.0` as a build-time `f64` bound
    pub ZeroF64: f64 = 0.0;
    /// `1.0` as a build-time `f64` bound
    pub OneF64: f64 = 1.0;
}

// ============================================================================
// Interval-backed wrappers
// ============================================================================

/// A value inside an interval, rejected when out of range
pub type BoundedType<T, Lo, Hi> = Constrained<T, Bounded<T, Lo, Hi>, Reject>;

/// A value inside `[lower, upper]`, rejected when out of range
pub type BoundedClosed<T, L = Dynamic, U = Dynamic> =
    Constrained<T, ClosedInterval<T, L, U>, Reject>;

/// A value inside `(lower, upper)`, rejected when out of range
pub type BoundedOpen<T, L = Dynamic, U = Dynamic> = Constrained<T, OpenInterval<T, L, U>, Reject>;

/// A value inside `[lower, upper]`, clamped into range
pub type ClampedType<T, L = Dynamic, U = Dynamic> =
    Constrained<T, ClosedInterval<T, L, U>, Clamping>;

// ============================================================================
// Common domain aliases
// ============================================================================

/// A percentage value (0-100 inclusive)
pub type Percentage = BoundedClosed<u8, ConstU8<0>, ConstU8<100>>;

/// A network port number (1-65535)
pub type Port = BoundedClosed<u16, ConstU16<1>, ConstU16<65535>>;

/// A factor in `[0.0, 1.0]`, clamped into range
pub type UnitInterval = ClampedType<f64, ZeroF64, OneF64>;
