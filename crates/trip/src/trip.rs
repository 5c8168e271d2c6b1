use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{Checklist, Preparers};

/// A bicycle taken on a trip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Bicycle {
    name: String,
}

/// A customer going on a trip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Customer {
    name: String,
}

/// The vehicle that carries a trip's bicycles and customers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Vehicle {
    name: String,
}

impl Bicycle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Vehicle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Bicycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A trip: the bicycles, customers and vehicle that need to be ready.
///
/// A trip is read-only once built. Its one behavior is [`Trip::prepare`].
///
/// Trips can be read from TOML, where each member is written by name:
///
/// ```
/// use pedal_trip::Trip;
///
/// let trip = Trip::from_toml_str(
///     r#"
///     bicycles = ["road #1", "mountain #2"]
///     customers = ["Ada"]
///     vehicle = "van"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(trip.bicycles().len(), 2);
/// assert_eq!(trip.vehicle().name(), "van");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Trip {
    #[serde(default)]
    bicycles: Vec<Bicycle>,
    #[serde(default)]
    customers: Vec<Customer>,
    vehicle: Vehicle,
}

/// Errors that can occur when reading a [`Trip`].
#[derive(Debug, Error)]
pub enum TripError {
    #[error("failed to parse trip: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Trip {
    /// Creates a trip.
    pub fn new(bicycles: Vec<Bicycle>, customers: Vec<Customer>, vehicle: Vehicle) -> Self {
        Self {
            bicycles,
            customers,
            vehicle,
        }
    }

    /// Parses a trip from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::Toml`] if the text is not a valid trip.
    pub fn from_toml_str(s: &str) -> Result<Self, TripError> {
        Ok(toml::from_str(s)?)
    }

    /// Returns the bicycles.
    pub fn bicycles(&self) -> &[Bicycle] {
        &self.bicycles
    }

    /// Returns the customers.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Returns the vehicle.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Hands this trip to every preparer, in registration order.
    ///
    /// Each preparer is called exactly once. The returned checklist holds
    /// the tasks of the first preparer, then the second, and so on.
    pub fn prepare(&self, preparers: &Preparers) -> Checklist {
        let mut checklist = Checklist::default();

        for (index, preparer) in preparers.iter().enumerate() {
            let tasks = preparer.prepare_trip(self);
            trace!(index, tasks = tasks.len(), "preparer finished");
            checklist.extend(tasks);
        }

        debug!(
            preparers = preparers.len(),
            tasks = checklist.len(),
            "trip prepared"
        );
        checklist
    }
}
