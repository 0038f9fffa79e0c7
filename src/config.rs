use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::gauged_value::GaugedValue;
use crate::line_sink::LineSink;
use crate::time_source::TimeSource;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeConfig {
    pub name: String,
    pub min: i32,
    pub max: i32,
    pub increment: i32,
    /// Re-apply `min`/`max` after construction. Off by default, which leaves
    /// the gauge with the zero range every fresh gauge gets.
    #[serde(default)]
    pub keep_bounds: bool,
}

impl GaugeConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse gauge config")
    }

    pub fn build(&self) -> GaugedValue {
        let mut gauge = GaugedValue::new(self.name.clone(), self.min, self.max, self.increment);
        self.restore_bounds(&mut gauge);
        gauge
    }

    pub fn build_with<S: LineSink, T: TimeSource>(&self, sink: S, clock: T) -> GaugedValue<S, T> {
        let mut gauge = GaugedValue::with_parts(
            self.name.clone(),
            self.min,
            self.max,
            self.increment,
            sink,
            clock,
        );
        self.restore_bounds(&mut gauge);
        gauge
    }

    fn restore_bounds<S: LineSink, T: TimeSource>(&self, gauge: &mut GaugedValue<S, T>) {
        if self.keep_bounds {
            log::debug!("{}: keeping bounds {}..={}", self.name, self.min, self.max);
            gauge.set_min_max(self.min, self.max);
        }
    }
}

/// A sensor gauge driving an actuator gauge, polled at a fixed interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigConfig {
    pub sensor: GaugeConfig,
    pub actuator: GaugeConfig,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl RigConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse rig config")
    }
}
