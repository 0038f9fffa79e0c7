use crate::gauged_value::GaugedValue;
use crate::line_sink::LineSink;
use crate::time_source::TimeSource;

/// Anything that can be moved by a percentage of its own range.
pub trait PercentDriven {
    fn apply_delta_percent(&mut self, delta_percent: f32) -> bool;
}

/// Drive `target` by the last relative move of `source`.
///
/// The source is only read. If the target refuses the move (below its
/// increment, already at a bound) nothing is rolled back on either side.
pub fn couple<S, T, P>(source: &GaugedValue<S, T>, target: &mut P) -> bool
where
    S: LineSink,
    T: TimeSource,
    P: PercentDriven + ?Sized,
{
    let percent = source.last_delta_percent();
    log::debug!("{}: coupling {:.2}% of range", source.name(), percent);
    target.apply_delta_percent(percent)
}
