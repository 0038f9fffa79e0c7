use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;

use gauged_value::{couple, logging, RigConfig};

const RIG_CONFIG: &str = include_str!("rig_config.json");
const SWEEP_STEP: i32 = 40;

fn main() -> anyhow::Result<()> {
    logging::init(LevelFilter::Info)?;

    let config = RigConfig::from_json(RIG_CONFIG).context("Embedded rig config is broken")?;
    let mut sensor = config.sensor.build();
    let mut actuator = config.actuator.build();

    log::info!(
        "Driving {} ({}..={}) from {} ({}..={})",
        actuator.name(),
        actuator.min(),
        actuator.max(),
        sensor.name(),
        sensor.min(),
        sensor.max()
    );

    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    for raw in sweep(sensor.min(), sensor.max(), SWEEP_STEP) {
        if sensor.set_current(raw) {
            couple(&sensor, &mut actuator);

            log::info!(
                "raw: {raw} sensor: {:.1}% servo: {}",
                sensor.current_percent(),
                actuator.current()
            );
        }
        std::thread::sleep(poll_interval);
    }

    log::info!("Sweep done, servo at {}", actuator.current());
    Ok(())
}

/// Simulated pot: up from `min` to `max` and back down again.
fn sweep(min: i32, max: i32, step: i32) -> impl Iterator<Item = i32> {
    let up = (min..=max).step_by(step as usize);
    let down = (min..=max).rev().step_by(step as usize);
    up.chain(down)
}
