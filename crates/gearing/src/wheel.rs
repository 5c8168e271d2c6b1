use std::f64::consts::PI;

use pedal_core::{Constrained, ConstraintError, NonNegative};
use uom::si::f64::Length;

/// A collaborator with a diameter.
///
/// [`Gear::gear_inches_with`](crate::Gear::gear_inches_with) only needs this
/// one capability, so anything that rolls can stand in for a [`Wheel`].
pub trait Diameter {
    /// Returns the outer diameter.
    fn diameter(&self) -> Length;
}

/// A bicycle wheel described by its rim diameter and tire width.
///
/// Both dimensions are non-negative, which is checked when the wheel is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    rim: Constrained<Length, NonNegative>,
    tire: Constrained<Length, NonNegative>,
}

impl Wheel {
    /// Creates a wheel from a rim diameter and a tire width.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if either dimension is negative or NaN.
    pub fn new(rim: Length, tire: Length) -> Result<Self, ConstraintError> {
        Ok(Self {
            rim: NonNegative::new(rim)?,
            tire: NonNegative::new(tire)?,
        })
    }

    /// Builds one wheel per `(rim, tire)` pair, in order.
    ///
    /// # Errors
    ///
    /// Returns the error for the first pair that is not a valid wheel.
    pub fn from_pairs<I>(pairs: I) -> Result<Vec<Self>, ConstraintError>
    where
        I: IntoIterator<Item = (Length, Length)>,
    {
        pairs
            .into_iter()
            .map(|(rim, tire)| Self::new(rim, tire))
            .collect()
    }

    /// Returns the rim diameter.
    pub fn rim(&self) -> Length {
        self.rim.get()
    }

    /// Returns the tire width.
    pub fn tire(&self) -> Length {
        self.tire.get()
    }

    /// Returns the outer diameter: the rim plus the tire on both sides.
    pub fn diameter(&self) -> Length {
        (self.rim + self.tire + self.tire).into_inner()
    }

    /// Returns the distance covered by one revolution of the wheel.
    pub fn circumference(&self) -> Length {
        PI * self.diameter()
    }
}

impl Diameter for Wheel {
    fn diameter(&self) -> Length {
        Wheel::diameter(self)
    }
}

/// Returns the diameter of each wheel, in order.
pub fn diameters<'a, D, I>(wheels: I) -> Vec<Length>
where
    D: Diameter + 'a,
    I: IntoIterator<Item = &'a D>,
{
    wheels.into_iter().map(|wheel| wheel.diameter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{inch, millimeter};

    fn inches(value: f64) -> Length {
        Length::new::<inch>(value)
    }

    #[test]
    fn mountain_bike_wheel() {
        let wheel = Wheel::new(inches(26.0), inches(1.5)).unwrap();

        assert_relative_eq!(wheel.rim().get::<inch>(), 26.0, epsilon = 1e-12);
        assert_relative_eq!(wheel.tire().get::<inch>(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(wheel.diameter().get::<inch>(), 29.0, epsilon = 1e-12);
        assert_relative_eq!(
            wheel.circumference().get::<inch>(),
            91.106_186_954_104,
            epsilon = 1e-9
        );
    }

    #[test]
    fn road_wheel_in_millimeters() {
        let wheel = Wheel::new(
            Length::new::<millimeter>(622.0),
            Length::new::<millimeter>(25.0),
        )
        .unwrap();

        assert_relative_eq!(wheel.diameter().get::<millimeter>(), 672.0, epsilon = 1e-9);
    }

    #[test]
    fn bare_rim_has_rim_diameter() {
        let wheel = Wheel::new(inches(20.0), inches(0.0)).unwrap();
        assert_relative_eq!(wheel.diameter().get::<inch>(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert_eq!(
            Wheel::new(inches(-26.0), inches(1.5)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            Wheel::new(inches(26.0), inches(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn diameters_from_pairs() {
        let wheels = Wheel::from_pairs([
            (inches(622.0 / 25.4), inches(20.0 / 25.4)),
            (inches(26.0), inches(1.5)),
            (inches(20.0), inches(2.125)),
        ])
        .unwrap();

        let diameters = diameters(&wheels);

        assert_eq!(diameters.len(), 3);
        assert_relative_eq!(diameters[0].get::<millimeter>(), 662.0, epsilon = 1e-9);
        assert_relative_eq!(diameters[1].get::<inch>(), 29.0, epsilon = 1e-12);
        assert_relative_eq!(diameters[2].get::<inch>(), 24.25, epsilon = 1e-12);
    }

    #[test]
    fn from_pairs_stops_at_first_invalid_pair() {
        let result = Wheel::from_pairs([
            (inches(26.0), inches(1.5)),
            (inches(26.0), inches(-1.0)),
            (inches(f64::NAN), inches(1.0)),
        ]);

        assert_eq!(result, Err(ConstraintError::Negative));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn wheel_is_send_sync() {
        assert_send_sync::<Wheel>();
    }
}
