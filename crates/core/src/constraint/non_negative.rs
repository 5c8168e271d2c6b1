use std::{cmp::Ordering, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Works with any type implementing [`PartialOrd`] and [`Zero`], including
/// primitive numbers and `uom` quantities such as `Length`.
///
/// # Examples
///
/// ```
/// use pedal_core::{ConstraintError, NonNegative};
///
/// let x = NonNegative::new(1.5).unwrap();
/// assert_eq!(x.into_inner(), 1.5);
///
/// assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
/// assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Fails if the value is negative or not a number.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative values.
///
/// The sum of two non-negative values is non-negative for the numeric types
/// used here. The invariant is checked in debug builds.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.into_inner() + rhs.into_inner();
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative invariant"
        );
        Self {
            value,
            _marker: std::marker::PhantomData,
        }
    }
}
