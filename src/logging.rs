//! Process-wide file logging.

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;

pub const LOG_FILE: &str = "xtoolbox.log";

/// Starts appending timestamped lines to `path`.
///
/// Records at info and above are kept until [`set_level`] applies the
/// configured level, so config loading is logged before that level is known.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(LevelFilter::Trace, config, file).map_err(std::io::Error::other)?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
