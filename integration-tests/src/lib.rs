//! Shared fixtures for the cross-crate tests.

pub mod gears {
    /// A mountain bike: 52/11 on a 26 x 1.5 in wheel.
    pub const MOUNTAIN: &str = r#"
        chainring = 52
        cog = 11

        [wheel]
        rim = "26 in"
        tire = "1.5 in"
    "#;

    /// A road bike in metric units: 50/25 on a 622 mm rim with 25 mm tires.
    pub const ROAD: &str = r#"
        chainring = 50
        cog = 25

        [wheel]
        rim = "622 mm"
        tire = "25 mm"
    "#;

    /// A bare gear with no wheel.
    pub const NO_WHEEL: &str = r"
        chainring = 52
        cog = 11
    ";
}

pub mod preparers {
    use std::{cell::RefCell, rc::Rc};

    use pedal_trip::{Preparer, Task, Trip};

    /// A shared log of which preparer ran, in call order.
    pub type CallLog = Rc<RefCell<Vec<&'static str>>>;

    /// A preparer that writes its name to a [`CallLog`] and does nothing else.
    pub struct Recording {
        name: &'static str,
        log: CallLog,
    }

    impl Recording {
        pub fn new(name: &'static str, log: &CallLog) -> Self {
            Self {
                name,
                log: Rc::clone(log),
            }
        }
    }

    impl Preparer for Recording {
        fn prepare_trip(&self, _trip: &Trip) -> Vec<Task> {
            self.log.borrow_mut().push(self.name);
            Vec::new()
        }
    }

    /// Wraps another preparer and records its name before delegating.
    pub struct Logged<P> {
        inner: P,
        recorder: Recording,
    }

    impl<P: Preparer> Logged<P> {
        pub fn new(name: &'static str, inner: P, log: &CallLog) -> Self {
            Self {
                inner,
                recorder: Recording::new(name, log),
            }
        }
    }

    impl<P: Preparer> Preparer for Logged<P> {
        fn prepare_trip(&self, trip: &Trip) -> Vec<Task> {
            self.recorder.prepare_trip(trip);
            self.inner.prepare_trip(trip)
        }
    }
}
