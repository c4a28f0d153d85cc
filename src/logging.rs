//! File logging.
//!
//! The terminal is in raw mode behind the UI, so log output goes to a file.

use crate::config::GameConfig;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;

/// Install the global logger writing to `config.log_file`.
///
/// Fails if the file cannot be created or a logger is already installed.
pub fn init(config: &GameConfig) -> io::Result<()> {
    let level = config.log_level_filter()?;
    let file = File::create(&config.log_file)?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, log_config, file)
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
