//! # Prepare a Trip
//!
//! Reads a trip from TOML, registers the built-in preparers plus an ad-hoc
//! closure, and prints the resulting checklist.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run -p pedal-trip --example prepare_trip
//! ```

use pedal_trip::{Driver, Mechanic, Preparers, Task, Trip, TripCoordinator};
use tracing::info;

const TRIP: &str = r#"
bicycles = ["road #1", "road #2", "mountain #1"]
customers = ["Ada", "Grace", "Barbara"]
vehicle = "van"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .compact()
        .init();

    let trip = Trip::from_toml_str(TRIP)?;

    let preparers = Preparers::new()
        .register(Mechanic)
        .register(TripCoordinator)
        .register(Driver)
        .register(|trip: &Trip| -> Vec<Task> {
            // A second tank for long trips with many riders.
            if trip.customers().len() > 2 {
                vec![Task::FillWaterTank {
                    vehicle: trip.vehicle().name().to_string(),
                }]
            } else {
                Vec::new()
            }
        });

    let checklist = trip.prepare(&preparers);
    for (number, task) in checklist.iter().enumerate() {
        info!("{}. {task}", number + 1);
    }

    Ok(())
}
