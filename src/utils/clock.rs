use chrono::Utc;

pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
pub mod testing {
    use super::Clock;
    use std::cell::Cell;

    /// Manually advanced clock for deterministic tests.
    #[derive(Default)]
    pub struct ManualClock {
        now: Cell<i64>,
    }

    impl ManualClock {
        pub fn at(millis: i64) -> Self {
            Self { now: Cell::new(millis) }
        }

        pub fn advance(&self, millis: i64) {
            self.now.set(self.now.get() + millis);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> i64 {
            self.now.get()
        }
    }
}
