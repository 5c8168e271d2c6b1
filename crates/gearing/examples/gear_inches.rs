//! # Gear Inches
//!
//! Builds a few gears from TOML and prints their ratios and gear inches.
//! The last gear has no wheel, so its gear inches cannot be computed.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run -p pedal-gearing --example gear_inches
//! ```

use pedal_gearing::{Gear, GearConfig, GearError, Wheel, diameters};
use tracing::{info, warn};
use uom::si::{f64::Length, length::inch};

const GEARS: [&str; 3] = [
    r#"
    chainring = 52
    cog = 11

    [wheel]
    rim = "26 in"
    tire = "1.5 in"
    "#,
    r#"
    chainring = 30
    cog = 27

    [wheel]
    rim = "622 mm"
    tire = "28 mm"
    "#,
    "cog = 11",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .compact()
        .init();

    for text in GEARS {
        let gear = Gear::from_config(GearConfig::from_toml_str(text)?)?;
        match gear.gear_inches() {
            Ok(gear_inches) => info!(
                "{}/{}: ratio {:.3}, {:.1} gear inches",
                gear.chainring(),
                gear.cog(),
                gear.ratio(),
                gear_inches.get::<inch>()
            ),
            Err(err @ GearError::MissingCollaborator { .. }) => warn!(
                "{}/{}: ratio {:.3}, {err}",
                gear.chainring(),
                gear.cog(),
                gear.ratio()
            ),
            Err(err) => return Err(err.into()),
        }
    }

    let wheels = Wheel::from_pairs([
        (Length::new::<inch>(26.0), Length::new::<inch>(1.5)),
        (Length::new::<inch>(20.0), Length::new::<inch>(2.125)),
    ])?;
    for (wheel, diameter) in wheels.iter().zip(diameters(&wheels)) {
        info!(
            "diameter {:.2} in, circumference {:.2} in",
            diameter.get::<inch>(),
            wheel.circumference().get::<inch>()
        );
    }

    Ok(())
}
