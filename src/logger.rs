//! Logging to stderr. Stdout carries the wire protocol, so every
//! diagnostic line has to go to the other stream or the engine will try to
//! parse it as a command.

use std::env;

use log::{set_logger, set_max_level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// Installs the stderr logger. `RUST_LOG` overrides the level when it
/// parses as one; the default is debug, which the match harness captures
/// into the replay for later reading.
pub fn init() {
    let level = env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);
    let _ = set_logger(&LOGGER).map(|()| set_max_level(level));
}
