//! Bicycle gearing models.
//!
//! - [`Wheel`] — rim and tire dimensions, with derived diameter and circumference
//! - [`Gear`] — chainring and cog tooth counts, with derived ratio and gear inches
//! - [`GearConfig`] — named, defaulted settings used to build a [`Gear`]
//!
//! All lengths are [`uom`] quantities, so a wheel can be described in
//! millimeters and its gear inches read back in inches.
//!
//! # Example
//!
//! ```
//! use pedal_gearing::{Gear, Wheel};
//! use uom::si::{f64::Length, length::inch};
//!
//! let wheel = Wheel::new(Length::new::<inch>(26.0), Length::new::<inch>(1.5)).unwrap();
//! let gear = Gear::new(52, 11).unwrap().with_wheel(wheel);
//!
//! let gear_inches = gear.gear_inches().unwrap().get::<inch>();
//! assert!((gear_inches - 137.090_909).abs() < 1e-6);
//! ```

mod config;
mod gear;
mod wheel;

pub use config::{ConfigError, GearConfig, WheelConfig};
pub use gear::{Gear, GearError};
pub use wheel::{Diameter, Wheel, diameters};
