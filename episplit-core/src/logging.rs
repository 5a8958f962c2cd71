//! Centralized logging configuration for episplit
//!
//! Sets up console logging with consistent formatting for both the
//! library and the CLI, and provides small helpers used around
//! external command execution.

use log::{LevelFilter, debug};
use std::io::Write;
use std::process::Command;

/// Initialize the logger for episplit
///
/// Sets up an env_logger with appropriate formatting and log level
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    init_with_level(level);
}

/// Initialize the logger with a specific log level
pub fn init_with_level(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };

            writeln!(
                buf,
                "{} {} {}",
                buf.timestamp(),
                level_str,
                record.args()
            )
        })
        .filter(None, level)
        .init();

    debug!("Logger initialized with level: {}", level);
}

/// Log a command being executed
pub fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();

    debug!("Executing command: {} {}", program, args.join(" "));
}
