pub mod api;
pub mod config;
pub mod control;
pub mod coupling;
pub mod gauged_value;
pub mod line_sink;
pub mod logging;
pub mod time_source;

pub use api::commands::{parse_command, GaugeCommand, GaugeStatus};
pub use config::{GaugeConfig, RigConfig};
pub use coupling::{couple, PercentDriven};
pub use gauged_value::GaugedValue;
pub use line_sink::{LineSink, LogSink};
pub use time_source::{EmbassyClock, ManualClock, TimeSource};
