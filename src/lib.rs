//! # Tidemark
//!
//! Scalar values that carry their own bounds.
//!
//! A bound is either known at build time, in which case it costs no
//! storage, or supplied at run time and stored inline. Predicates over one
//! bound compose into intervals, and a [`Constrained`] value re-checks its
//! interval on every construction and assignment.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidemark::aliases::Percentage;
//! use tidemark::constraint::{ClosedInterval, ConstI32, Less};
//! use tidemark::{make_bounded, make_clamped};
//!
//! // Run-time bound
//! let below_ten = Less::new(10);
//! assert!(below_ten.test(&3));
//!
//! // Build-time interval, zero bytes
//! let digit = ClosedInterval::<i32, ConstI32<0>, ConstI32<9>>::fixed();
//! assert!(digit.test(&7));
//! assert_eq!(std::mem::size_of_val(&digit), 0);
//!
//! // Values that keep their invariant
//! let volume = make_bounded(7, 0, 11).unwrap();
//! assert_eq!(*volume, 7);
//! assert!(make_bounded(12, 0, 11).is_err());
//!
//! let gain = make_clamped(1.5, 0.0, 1.0);
//! assert_eq!(*gain, 1.0);
//!
//! let pct = Percentage::fixed(42).unwrap();
//! assert_eq!(pct.to_string(), "42");
//! ```
//!
//! ## Mixed representations
//!
//! Both edges of an interval must use the same bound representation.
//! Pairing a build-time lower bound with a run-time upper bound is
//! rejected when the program is built:
//!
//! ```rust,compile_fail
//! use tidemark::constraint::{Bounded, ConstI32, Dynamic, GreaterEqual, LessEqual};
//!
//! type Mixed = Bounded<i32, GreaterEqual<i32, ConstI32<0>>, LessEqual<i32, Dynamic>>;
//! let _ = std::mem::size_of::<Mixed>();
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug` events when a value is rejected or clamped
//! - `proptest`: strategies for generating intervals in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aliases;
pub mod constrained;
pub mod constraint;
pub mod error;
pub mod factory;
pub mod testing;
pub mod verifier;

// Re-exports
pub use constrained::Constrained;
pub use error::ConstraintViolation;
pub use factory::{make_bounded, make_bounded_exclusive, make_clamped};
pub use verifier::{clamp, Clamping, Reject, Verifier};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aliases::{BoundedClosed, BoundedOpen, BoundedType, ClampedType};
    pub use crate::constrained::Constrained;
    pub use crate::constraint::{
        closed, greater, greater_equal, less, less_equal, open, BoundPredicate, Bounded,
        ClosedInterval, Constraint, Dynamic, Greater, GreaterEqual, Less, LessEqual, OpenInterval,
    };
    pub use crate::error::ConstraintViolation;
    pub use crate::factory::{make_bounded, make_bounded_exclusive, make_clamped};
    pub use crate::verifier::{clamp, Clamping, Reject, Verifier};
}
