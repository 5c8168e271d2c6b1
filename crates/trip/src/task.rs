use std::fmt;

/// A piece of work a preparer performed for a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// A bicycle was tuned.
    TuneBicycle { bicycle: String },

    /// Food was bought for the listed customers.
    BuyFood { customers: Vec<String> },

    /// The vehicle was gassed up.
    GasUp { vehicle: String },

    /// The vehicle's water tank was filled.
    FillWaterTank { vehicle: String },
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TuneBicycle { bicycle } => write!(f, "tune {bicycle}"),
            Self::BuyFood { customers } => write!(f, "buy food for {}", customers.join(", ")),
            Self::GasUp { vehicle } => write!(f, "gas up {vehicle}"),
            Self::FillWaterTank { vehicle } => write!(f, "fill water tank of {vehicle}"),
        }
    }
}

/// The tasks performed while preparing a trip, in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    tasks: Vec<Task>,
}

impl Checklist {
    /// Returns the tasks in order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if nothing was done.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over the tasks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl Extend<Task> for Checklist {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        self.tasks.extend(iter);
    }
}

impl FromIterator<Task> for Checklist {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Checklist {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Checklist {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
