use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

/// Send logs to a file. Level comes from `RUST_LOG`, `info` by default.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}
