use serde::{Deserialize, Deserializer};
use thiserror::Error;
use uom::si::f64::Length;

/// Settings used to build a [`Gear`](crate::Gear).
///
/// Every field is optional when deserializing; missing fields take the
/// values from [`GearConfig::default`]: a 40 tooth chainring, an 18 tooth
/// cog, and no wheel.
///
/// # Example
///
/// ```
/// use pedal_gearing::{Gear, GearConfig};
///
/// let config = GearConfig::from_toml_str(
///     r#"
///     chainring = 52
///     cog = 11
///
///     [wheel]
///     rim = "26 in"
///     tire = "1.5 in"
///     "#,
/// )
/// .unwrap();
///
/// let gear = Gear::from_config(config).unwrap();
/// assert_eq!(gear.chainring(), 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GearConfig {
    /// Number of teeth on the chainring.
    pub chainring: u32,

    /// Number of teeth on the cog.
    pub cog: u32,

    /// The wheel driven by the gear, if any.
    pub wheel: Option<WheelConfig>,
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            chainring: 40,
            cog: 18,
            wheel: None,
        }
    }
}

/// Settings used to build a [`Wheel`](crate::Wheel).
///
/// Lengths are written as a number and a unit abbreviation, like `"26 in"`
/// or `"622 mm"`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WheelConfig {
    /// The rim diameter.
    #[serde(deserialize_with = "deserialize_length")]
    pub rim: Length,

    /// The tire width.
    #[serde(deserialize_with = "deserialize_length")]
    pub tire: Length,
}

/// Errors that can occur when reading a [`GearConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse gear config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GearConfig {
    /// Parses a gear configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not valid TOML, has
    /// unknown fields, or contains a length that cannot be parsed.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

fn deserialize_length<'de, D>(deserializer: D) -> Result<Length, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<Length>()
        .map_err(|e| serde::de::Error::custom(format!("Failed to parse length {s:?}: {e}")))
}
