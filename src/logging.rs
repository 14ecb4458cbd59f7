//! log4rs set-up.
//!
//! A log4rs YAML file wins when present; otherwise logs go to stderr so they
//! never mix with command output.

use crate::config::{DEFAULT_LOG_CONFIG, LOG_CONFIG_ENV, LOG_PATTERN};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;

/// Level for the console logger: `warn` by default, each `-v` one step louder.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Path of the log4rs config file, from `IPAM_LOG_CONFIG` or the default.
pub fn config_file() -> PathBuf {
    std::env::var_os(LOG_CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG))
}

/// Build the stderr console config used when no config file exists.
pub fn console_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialise the global logger. Call once, before any command runs.
pub fn init(verbose: u8, quiet: bool) -> Result<(), Box<dyn Error>> {
    let config_file = config_file();
    if config_file.exists() {
        log4rs::init_file(&config_file, Default::default())?;
        log::debug!("Logging configured from {}", config_file.display());
        return Ok(());
    }
    log4rs::init_config(console_config(level_filter(verbose, quiet))?)?;
    Ok(())
}
