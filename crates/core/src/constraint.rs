//! Type-level numeric constraints.
//!
//! A [`Constrained<T, C>`] value is checked once, when it is built, and can be
//! trusted everywhere after that. The marker type `C` names the invariant:
//!
//! - [`NonNegative`]: Zero or greater
//! - [`NonZero`]: Not equal to zero
//!
//! Both markers also provide an associated `new()` constructor, so
//! `NonNegative::new(x)` reads better than `Constrained::<_, NonNegative>::new(x)`.
//!
//! # Extending
//!
//! Custom invariants are zero-sized marker types implementing [`Constraint<T>`].

mod non_negative;
mod non_zero;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use non_zero::NonZero;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use pedal_core::{Constrained, NonZero};
///
/// let n = Constrained::<_, NonZero>::new(11_u32).unwrap();
/// assert_eq!(n.into_inner(), 11);
///
/// assert!(Constrained::<_, NonZero>::new(0_u32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    pub fn get(&self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
