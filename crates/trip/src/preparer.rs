use std::fmt;

use crate::{Task, Trip};

/// The one capability a trip needs from whoever gets it ready.
///
/// A preparer reads whatever it needs from the trip and returns the tasks it
/// performed. The trip never learns the preparer's concrete type.
///
/// Closures taking `&Trip` and returning `Vec<Task>` are preparers too:
///
/// ```
/// use pedal_trip::{Preparer, Task, Trip, Vehicle};
///
/// let inspector = |trip: &Trip| vec![Task::GasUp { vehicle: trip.vehicle().name().to_string() }];
///
/// let trip = Trip::new(vec![], vec![], Vehicle::new("van"));
/// assert_eq!(inspector.prepare_trip(&trip).len(), 1);
/// ```
pub trait Preparer {
    /// Prepares the trip and returns the tasks that were performed, in order.
    fn prepare_trip(&self, trip: &Trip) -> Vec<Task>;
}

impl<F> Preparer for F
where
    F: Fn(&Trip) -> Vec<Task>,
{
    fn prepare_trip(&self, trip: &Trip) -> Vec<Task> {
        self(trip)
    }
}

/// An ordered list of preparers.
///
/// Preparers are called in the order they were registered.
#[derive(Default)]
pub struct Preparers {
    preparers: Vec<Box<dyn Preparer>>,
}

impl Preparers {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this list with `preparer` appended.
    #[must_use]
    pub fn register(mut self, preparer: impl Preparer + 'static) -> Self {
        self.push(preparer);
        self
    }

    /// Appends `preparer` to the list.
    pub fn push(&mut self, preparer: impl Preparer + 'static) {
        self.preparers.push(Box::new(preparer));
    }

    /// Returns the number of registered preparers.
    pub fn len(&self) -> usize {
        self.preparers.len()
    }

    /// Returns `true` if no preparers are registered.
    pub fn is_empty(&self) -> bool {
        self.preparers.is_empty()
    }

    /// Iterates over the preparers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Preparer> {
        self.preparers.iter().map(|preparer| &**preparer)
    }
}

impl FromIterator<Box<dyn Preparer>> for Preparers {
    fn from_iter<I: IntoIterator<Item = Box<dyn Preparer>>>(iter: I) -> Self {
        Self {
            preparers: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Preparers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preparers")
            .field("len", &self.preparers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Driver, Mechanic, Vehicle};

    #[test]
    fn register_keeps_order() {
        let preparers = Preparers::new()
            .register(|_: &Trip| vec![Task::GasUp {
                vehicle: "first".to_string(),
            }])
            .register(|_: &Trip| vec![Task::GasUp {
                vehicle: "second".to_string(),
            }]);

        let trip = Trip::new(vec![], vec![], Vehicle::new("van"));
        let tasks: Vec<_> = preparers
            .iter()
            .flat_map(|preparer| preparer.prepare_trip(&trip))
            .collect();

        assert_eq!(preparers.len(), 2);
        assert_eq!(
            tasks,
            [
                Task::GasUp {
                    vehicle: "first".to_string()
                },
                Task::GasUp {
                    vehicle: "second".to_string()
                },
            ]
        );
    }

    #[test]
    fn push_and_collect() {
        let mut preparers = Preparers::new();
        assert!(preparers.is_empty());

        preparers.push(Mechanic);
        assert_eq!(preparers.len(), 1);

        let collected: Preparers = [
            Box::new(Mechanic) as Box<dyn Preparer>,
            Box::new(Driver),
        ]
        .into_iter()
        .collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(format!("{collected:?}"), "Preparers { len: 2 }");
    }
}
