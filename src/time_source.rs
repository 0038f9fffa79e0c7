use std::cell::Cell;

use embassy_time::Instant;

/// Supplies the timestamps a gauge stores as epoch bookkeeping.
pub trait TimeSource {
    /// Milliseconds since some fixed origin.
    fn now_millis(&self) -> u64;
}

/// Monotonic clock backed by the embassy time driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl TimeSource for EmbassyClock {
    fn now_millis(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        ManualClock {
            millis: Cell::new(start_millis),
        }
    }

    pub fn set(&self, millis: u64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get().saturating_add(millis));
    }
}

impl TimeSource for ManualClock {
    fn now_millis(&self) -> u64 {
        self.millis.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}
