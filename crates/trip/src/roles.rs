//! The preparers that come with the crate.
//!
//! Each one looks at a different part of the trip and nothing else.

use crate::{Preparer, Task, Trip};

/// Tunes every bicycle on the trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mechanic;

/// Buys food for everyone going on the trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripCoordinator;

/// Gets the vehicle ready: gas first, then water.
#[derive(Debug, Clone, Copy, Default)]
pub struct Driver;

impl Preparer for Mechanic {
    fn prepare_trip(&self, trip: &Trip) -> Vec<Task> {
        trip.bicycles()
            .iter()
            .map(|bicycle| Task::TuneBicycle {
                bicycle: bicycle.name().to_string(),
            })
            .collect()
    }
}

impl Preparer for TripCoordinator {
    fn prepare_trip(&self, trip: &Trip) -> Vec<Task> {
        if trip.customers().is_empty() {
            return Vec::new();
        }

        let customers = trip
            .customers()
            .iter()
            .map(|customer| customer.name().to_string())
            .collect();
        vec![Task::BuyFood { customers }]
    }
}

impl Preparer for Driver {
    fn prepare_trip(&self, trip: &Trip) -> Vec<Task> {
        let vehicle = trip.vehicle().name();
        vec![
            Task::GasUp {
                vehicle: vehicle.to_string(),
            },
            Task::FillWaterTank {
                vehicle: vehicle.to_string(),
            },
        ]
    }
}
