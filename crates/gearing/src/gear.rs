use pedal_core::{Constrained, ConstraintError, NonZero};
use thiserror::Error;
use tracing::debug;
use uom::si::f64::Length;

use crate::{
    config::GearConfig,
    wheel::{Diameter, Wheel},
};

/// A bicycle gear: a chainring driving a cog, optionally on a wheel.
///
/// The ratio only needs tooth counts. Gear inches also need the diameter of
/// the wheel the gear drives, so asking for them on a gear without a wheel
/// returns [`GearError::MissingCollaborator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gear {
    chainring: u32,
    cog: Constrained<u32, NonZero>,
    wheel: Option<Wheel>,
}

/// Errors that can occur when building or using a [`Gear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GearError {
    /// The cog has no teeth, so the ratio is undefined.
    #[error("cog must have at least one tooth")]
    ZeroCog,

    /// A calculation needs a collaborator the gear was built without.
    #[error("gear has no {collaborator}")]
    MissingCollaborator { collaborator: &'static str },

    /// The configured wheel has invalid dimensions.
    #[error("invalid wheel: {0}")]
    InvalidWheel(#[from] ConstraintError),
}

impl Gear {
    /// Creates a gear without a wheel.
    ///
    /// # Errors
    ///
    /// Returns [`GearError::ZeroCog`] if `cog` is zero.
    pub fn new(chainring: u32, cog: u32) -> Result<Self, GearError> {
        let cog = NonZero::new(cog).map_err(|_| GearError::ZeroCog)?;
        Ok(Self {
            chainring,
            cog,
            wheel: None,
        })
    }

    /// Builds a gear, and its wheel if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`GearError::ZeroCog`] for a zero cog, or
    /// [`GearError::InvalidWheel`] if the wheel dimensions are invalid.
    pub fn from_config(config: GearConfig) -> Result<Self, GearError> {
        let GearConfig {
            chainring,
            cog,
            wheel,
        } = config;
        debug!(chainring, cog, has_wheel = wheel.is_some(), "building gear");

        let gear = Self::new(chainring, cog)?;
        match wheel {
            Some(wheel) => Ok(gear.with_wheel(Wheel::new(wheel.rim, wheel.tire)?)),
            None => Ok(gear),
        }
    }

    /// Returns this gear with `wheel` as its wheel.
    #[must_use]
    pub fn with_wheel(self, wheel: Wheel) -> Self {
        Self {
            wheel: Some(wheel),
            ..self
        }
    }

    /// Returns the chainring tooth count.
    pub fn chainring(&self) -> u32 {
        self.chainring
    }

    /// Returns the cog tooth count, which is never zero.
    pub fn cog(&self) -> u32 {
        self.cog.get()
    }

    /// Returns the wheel this gear drives, if any.
    pub fn wheel(&self) -> Option<&Wheel> {
        self.wheel.as_ref()
    }

    /// Returns the gear ratio, chainring teeth over cog teeth.
    ///
    /// Both counts are converted to `f64` before dividing, so `1 / 2` is `0.5`.
    pub fn ratio(&self) -> f64 {
        f64::from(self.chainring) / f64::from(self.cog.get())
    }

    /// Returns the gear inches: the ratio times the wheel diameter.
    ///
    /// The result is a length; read it in inches for the conventional figure.
    ///
    /// # Errors
    ///
    /// Returns [`GearError::MissingCollaborator`] if the gear has no wheel.
    pub fn gear_inches(&self) -> Result<Length, GearError> {
        let wheel = self.wheel.as_ref().ok_or(GearError::MissingCollaborator {
            collaborator: "wheel",
        })?;
        Ok(self.gear_inches_with(wheel))
    }

    /// Returns the gear inches against any collaborator with a diameter.
    pub fn gear_inches_with<D: Diameter + ?Sized>(&self, collaborator: &D) -> Length {
        self.ratio() * collaborator.diameter()
    }
}

impl TryFrom<GearConfig> for Gear {
    type Error = GearError;

    fn try_from(config: GearConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{inch, millimeter};

    use crate::WheelConfig;

    fn mountain_wheel() -> Wheel {
        Wheel::new(Length::new::<inch>(26.0), Length::new::<inch>(1.5)).unwrap()
    }

    #[test]
    fn ratio_without_a_wheel() {
        let gear = Gear::new(52, 11).unwrap();
        assert_relative_eq!(gear.ratio(), 4.727_272_727_272_73, epsilon = 1e-12);
        assert!(gear.wheel().is_none());
    }

    #[test]
    fn ratio_uses_float_division() {
        let gear = Gear::new(1, 2).unwrap();
        assert_relative_eq!(gear.ratio(), 0.5);

        let gear = Gear::new(30, 27).unwrap();
        assert_relative_eq!(gear.ratio(), 1.111_111_111_111_1, epsilon = 1e-12);
    }

    #[test]
    fn gear_inches_with_a_wheel() {
        let gear = Gear::new(52, 11).unwrap().with_wheel(mountain_wheel());

        let gear_inches = gear.gear_inches().unwrap();

        assert_relative_eq!(
            gear_inches.get::<inch>(),
            137.090_909_090_909,
            epsilon = 1e-9
        );
        assert_eq!(gear.wheel(), Some(&mountain_wheel()));
    }

    #[test]
    fn gear_inches_without_a_wheel_fails() {
        let gear = Gear::new(52, 11).unwrap();

        assert_eq!(
            gear.gear_inches(),
            Err(GearError::MissingCollaborator {
                collaborator: "wheel"
            })
        );
        assert_eq!(
            gear.gear_inches().unwrap_err().to_string(),
            "gear has no wheel"
        );
    }

    #[test]
    fn zero_cog_is_rejected() {
        assert_eq!(Gear::new(52, 0), Err(GearError::ZeroCog));
    }

    #[test]
    fn zero_chainring_is_a_zero_ratio() {
        let gear = Gear::new(0, 11).unwrap().with_wheel(mountain_wheel());
        assert_relative_eq!(gear.ratio(), 0.0);
        assert_relative_eq!(gear.gear_inches().unwrap().get::<inch>(), 0.0);
    }

    #[test]
    fn gear_inches_with_any_diameter() {
        struct Roller;

        impl Diameter for Roller {
            fn diameter(&self) -> Length {
                Length::new::<inch>(10.0)
            }
        }

        let gear = Gear::new(40, 20).unwrap();
        assert_relative_eq!(
            gear.gear_inches_with(&Roller).get::<inch>(),
            20.0,
            epsilon = 1e-12
        );

        let boxed: Box<dyn Diameter> = Box::new(mountain_wheel());
        assert_relative_eq!(
            gear.gear_inches_with(boxed.as_ref()).get::<inch>(),
            58.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn from_config_builds_the_wheel() {
        let config = GearConfig {
            chainring: 52,
            cog: 11,
            wheel: Some(WheelConfig {
                rim: Length::new::<millimeter>(622.0),
                tire: Length::new::<millimeter>(25.0),
            }),
        };

        let gear = Gear::try_from(config).unwrap();

        assert_eq!(gear.chainring(), 52);
        assert_eq!(gear.cog(), 11);
        assert_relative_eq!(
            gear.gear_inches().unwrap().get::<millimeter>(),
            52.0 / 11.0 * 672.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn from_config_defaults() {
        let gear = Gear::from_config(GearConfig::default()).unwrap();

        assert_eq!(gear.chainring(), 40);
        assert_eq!(gear.cog(), 18);
        assert!(gear.wheel().is_none());
    }

    #[test]
    fn from_config_rejects_bad_values() {
        let zero_cog = GearConfig {
            cog: 0,
            ..GearConfig::default()
        };
        assert_eq!(Gear::from_config(zero_cog), Err(GearError::ZeroCog));

        let negative_tire = GearConfig {
            wheel: Some(WheelConfig {
                rim: Length::new::<inch>(26.0),
                tire: Length::new::<inch>(-1.5),
            }),
            ..GearConfig::default()
        };
        assert_eq!(
            Gear::from_config(negative_tire),
            Err(GearError::InvalidWheel(ConstraintError::Negative))
        );
    }
}
