//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer.
//! On wasm32 every record is also mirrored to the browser console.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Circular buffer logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut buf) = self.buffer.lock() {
            if buf.len() == self.capacity {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let msg = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::info_1(&msg),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}

/// Parse a level name ("debug", "info", ...), falling back to Info
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the global logger. Later calls keep the first configuration.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Buffered lines of the global logger, oldest first
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

/// Most recent buffered line
pub fn last() -> Option<String> {
    LOGGER.get().and_then(|logger| logger.lines().pop())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_at(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(&Record::builder().args(format_args!("{}", msg)).level(level).target("test").build());
    }

    #[test]
    fn test_buffer_keeps_latest_records() {
        let logger = RollingLogger::new(LevelFilter::Debug, 3);
        for i in 0..5 {
            log_at(&logger, Level::Info, &format!("message {}", i));
        }

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("message 2"));
        assert!(lines[2].ends_with("message 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        log_at(&logger, Level::Info, "dropped");
        log_at(&logger, Level::Warn, "kept");

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    // The only test that installs the global logger
    #[test]
    fn test_global_buffer_exposes_records() {
        init(LevelFilter::Debug, 4).unwrap();
        log::info!("first");
        log::debug!("second");

        let lines = recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert_eq!(last(), lines.last().cloned());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        log_at(&logger, Level::Info, "a");
        log_at(&logger, Level::Info, "b");
        assert_eq!(logger.lines().len(), 1);
    }
}
