use anyhow::Context;
use log::LevelFilter;

/// Install the stdout logger, the host stand-in for the board's serial console.
/// `RUST_LOG` overrides `level`. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .try_init()
        .context("Failed to install logger")
}
