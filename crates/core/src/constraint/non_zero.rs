use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is not equal to zero.
///
/// # Examples
///
/// ```
/// use pedal_core::{ConstraintError, NonZero};
///
/// let cog = NonZero::new(11_u32).unwrap();
/// assert_eq!(cog.into_inner(), 11);
///
/// assert_eq!(NonZero::new(0_u32), Err(ConstraintError::Zero));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero or not a number.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(_) => Ok(()),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
