use crate::api::commands::{GaugeCommand, GaugeStatus};
use crate::gauged_value::GaugedValue;
use crate::line_sink::LineSink;
use crate::time_source::TimeSource;

pub fn handle_command<S: LineSink, T: TimeSource>(
    command: GaugeCommand,
    gauge: &mut GaugedValue<S, T>,
) -> GaugeStatus {
    log::debug!("{}: handling {:?}", gauge.name(), command);

    match command {
        GaugeCommand::SetCurrent { value } => {
            gauge.set_current(value);
        }
        GaugeCommand::AddDelta { delta } => {
            gauge.add_delta_to_current(delta);
        }
        GaugeCommand::ApplyDeltaPercent { percent } => {
            gauge.apply_delta_percent(percent);
        }
        GaugeCommand::SetMinMax { min, max } => gauge.set_min_max(min, max),
        GaugeCommand::SetMin { min } => gauge.set_min(min),
        GaugeCommand::SetMax { max } => gauge.set_max(max),
    }

    gauge.status()
}
