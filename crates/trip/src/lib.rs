//! Trip preparation through interchangeable preparers.
//!
//! A [`Trip`] knows its bicycles, customers and vehicle, and nothing about who
//! gets it ready. Anything implementing [`Preparer`] can be registered in a
//! [`Preparers`] list; [`Trip::prepare`] hands the trip to each of them in
//! registration order and collects what they did into a [`Checklist`].
//!
//! Each preparer pulls only the data it needs:
//!
//! - [`Mechanic`] — tunes every bicycle
//! - [`TripCoordinator`] — buys food for the customers
//! - [`Driver`] — gasses up the vehicle and fills its water tank
//!
//! # Example
//!
//! ```
//! use pedal_trip::{Bicycle, Customer, Driver, Mechanic, Preparers, Task, Trip, TripCoordinator, Vehicle};
//!
//! let trip = Trip::new(
//!     vec![Bicycle::new("road #1")],
//!     vec![Customer::new("Ada")],
//!     Vehicle::new("van"),
//! );
//!
//! let preparers = Preparers::new()
//!     .register(Mechanic)
//!     .register(TripCoordinator)
//!     .register(Driver);
//!
//! let checklist = trip.prepare(&preparers);
//! assert_eq!(checklist.len(), 4);
//! assert_eq!(
//!     checklist.tasks()[0],
//!     Task::TuneBicycle { bicycle: "road #1".to_string() },
//! );
//! ```

mod preparer;
mod roles;
mod task;
mod trip;

pub use preparer::{Preparer, Preparers};
pub use roles::{Driver, Mechanic, TripCoordinator};
pub use task::{Checklist, Task};
pub use trip::{Bicycle, Customer, Trip, TripError, Vehicle};
