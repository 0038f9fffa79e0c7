use crate::api::commands::GaugeStatus;
use crate::coupling::PercentDriven;
use crate::line_sink::{LineSink, LogSink};
use crate::time_source::{EmbassyClock, TimeSource};

/// A bounded, rate-limited integer quantity such as a pot reading or a servo angle.
///
/// Every update is measured against the value before the last accepted change
/// (`last_value`), quantized to `increment` and clamped into `[min, max]`:
///
/// - a request further than one increment away moves exactly one increment,
/// - a request closer than one increment is dropped,
/// - a request exactly one increment away passes through.
///
/// Each accepted change prints `"<name>: <old> --> <new>"` to the line sink.
#[derive(Debug)]
pub struct GaugedValue<S = LogSink, T = EmbassyClock> {
    name: String,
    current: i32,
    last_value: i32,
    min: i32,
    max: i32,
    increment: i32,
    changed: bool,
    last_changed_epoch: u64,
    last_printed_epoch: u64,
    sink: S,
    clock: T,
}

impl GaugedValue {
    /// Gauge that logs through `log` and timestamps with the embassy clock.
    ///
    /// `min` and `max` are overwritten with zero before this returns, call
    /// [`GaugedValue::set_min_max`] afterwards to give the gauge a range.
    pub fn new(name: impl Into<String>, min: i32, max: i32, increment: i32) -> Self {
        Self::with_parts(name, min, max, increment, LogSink, EmbassyClock)
    }
}

impl<S: LineSink, T: TimeSource> GaugedValue<S, T> {
    pub fn with_parts(
        name: impl Into<String>,
        min: i32,
        max: i32,
        increment: i32,
        sink: S,
        clock: T,
    ) -> Self {
        let mut gauge = GaugedValue {
            name: name.into(),
            current: 0,
            last_value: 0,
            min,
            max,
            increment,
            changed: false,
            last_changed_epoch: 0,
            last_printed_epoch: 0,
            sink,
            clock,
        };

        // Every gauge starts with an empty range, whatever bounds were passed in.
        gauge.set_min_max(0, 0);
        gauge
    }

    pub fn is_initialized(&self) -> bool {
        let magnitude = i64::from(self.current).abs()
            + i64::from(self.min).abs()
            + i64::from(self.max).abs();
        magnitude != 0
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn delta(&self) -> i32 {
        self.current.wrapping_sub(self.last_value)
    }

    /// Feed a new requested value through the quantizer. Returns whether the
    /// gauge accepted a change.
    pub fn set_current(&mut self, new_value: i32) -> bool {
        let right_now = self.clock.now_millis();
        self.changed = false;

        let last_value = i64::from(self.last_value);
        let increment = i64::from(self.increment);
        let diff = i64::from(new_value) - last_value;

        let mut new_value = i64::from(new_value);
        if diff.abs() > increment.abs() {
            // too large of a jump, take a single increment towards it.
            // signum keeps a zero diff at zero instead of dividing by it.
            new_value = last_value + diff.signum() * increment;
        } else if diff.abs() < increment.abs() {
            new_value = last_value;
        }

        let new_value = self.clamp_to_bounds(new_value);

        if new_value != self.last_value {
            self.changed = true;

            let previous = self.current;
            self.last_value = previous;
            self.current = new_value;
            self.last_changed_epoch = right_now;

            let line = format!("{}: {:4} --> {:4}", self.name, previous, new_value);
            self.sink.println(&line);
            self.last_printed_epoch = right_now;
        }

        self.changed
    }

    pub fn set_min_max(&mut self, min: i32, max: i32) {
        self.min = min;
        self.max = max;
    }

    pub fn set_min(&mut self, min: i32) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: i32) {
        self.max = max;
    }

    /// `current` as a percentage of the range width. Non-finite when `min == max`.
    pub fn current_percent(&self) -> f32 {
        100.0 * self.current as f32 / self.range_width() as f32
    }

    /// Size of the last accepted move as a percentage of the range width.
    /// Non-finite when `min == max`.
    pub fn last_delta_percent(&self) -> f32 {
        let moved = i64::from(self.current) - i64::from(self.last_value);
        (100.0 * moved as f64 / self.range_width() as f64) as f32
    }

    pub fn add_delta_to_current(&mut self, delta: i32) -> bool {
        self.set_current(self.current.saturating_add(delta))
    }

    /// Translate a percentage of this gauge's range into an absolute delta,
    /// truncated towards zero, and add it to `current`.
    pub fn apply_delta_percent(&mut self, delta_percent: f32) -> bool {
        let delta = f64::from(delta_percent) / 100.0 * self.range_width() as f64;
        self.add_delta_to_current(delta as i32)
    }

    /// Push this gauge's last relative move onto `other`, scaled to `other`'s range.
    pub fn apply_my_delta_to<P: PercentDriven + ?Sized>(&self, other: &mut P) -> bool {
        other.apply_delta_percent(self.last_delta_percent())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_value(&self) -> i32 {
        self.last_value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn increment(&self) -> i32 {
        self.increment
    }

    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn last_changed_epoch(&self) -> u64 {
        self.last_changed_epoch
    }

    pub fn last_printed_epoch(&self) -> u64 {
        self.last_printed_epoch
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn status(&self) -> GaugeStatus {
        GaugeStatus {
            name: self.name.clone(),
            current: self.current,
            last_value: self.last_value,
            min: self.min,
            max: self.max,
            increment: self.increment,
            changed: self.changed,
            initialized: self.is_initialized(),
        }
    }

    fn range_width(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }

    // Not `i64::clamp`, which panics on inverted bounds. `max` is checked first.
    fn clamp_to_bounds(&self, value: i64) -> i32 {
        if value > i64::from(self.max) {
            self.max
        } else if value < i64::from(self.min) {
            self.min
        } else {
            // between two i32 bounds, so it fits
            value as i32
        }
    }
}

impl<S: LineSink, T: TimeSource> PercentDriven for GaugedValue<S, T> {
    fn apply_delta_percent(&mut self, delta_percent: f32) -> bool {
        GaugedValue::<S, T>::apply_delta_percent(self, delta_percent)
    }
}
