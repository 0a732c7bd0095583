//! Error returned when a value violates its constraint

use std::fmt;

/// A value was rejected by its constraint.
///
/// Carries the rejected value back to the caller together with a
/// description of the constraint it failed.
///
/// # Example
///
/// ```rust
/// use tidemark::make_bounded;
///
/// let err = make_bounded(6, 1, 5).unwrap_err();
/// assert_eq!(*err.value(), 6);
/// assert_eq!(err.constraint(), "[1, 5]");
/// assert_eq!(err.to_string(), "value 6 violates constraint [1, 5]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation<T> {
    value: T,
    constraint: String,
}

impl<T> ConstraintViolation<T> {
    /// Create a violation for `value` against the described constraint.
    pub fn new(value: T, constraint: impl Into<String>) -> Self {
        Self {
            value,
            constraint: constraint.into(),
        }
    }

    /// The rejected value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Description of the violated constraint
    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    /// Take the rejected value back.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Display for ConstraintViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {:?} violates constraint {}",
            self.value, self.constraint
        )
    }
}

impl<T: fmt::Debug> std::error::Error for ConstraintViolation<T> {}
