//! Console Ring Logger
//!
//! `log` backend for WASM frontends. Every accepted record is written to the
//! matching browser `console` method and the most recent lines are kept in a
//! circular buffer so they can be pulled from devtools after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Lines kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 200;

static INSTALLED: OnceLock<&'static RingLogger<ConsoleSink>> = OnceLock::new();

/// Destination for formatted log lines
pub trait LogSink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// Writes to `console.error` / `warn` / `info` / `debug` / `log`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: Level, line: &str) {
        let value = JsValue::from_str(line);
        match level {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug => web_sys::console::debug_1(&value),
            Level::Trace => web_sys::console::log_1(&value),
        }
    }
}

/// Logger with a bounded history of formatted lines
pub struct RingLogger<S: LogSink> {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
    sink: S,
}

impl<S: LogSink> RingLogger<S> {
    pub fn new(sink: S, level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            sink,
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn remember(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl<S: LogSink> Log for RingLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        self.sink.write(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// `LEVEL target: message`
pub fn format_line(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger: &'static RingLogger<ConsoleSink> =
        Box::leak(Box::new(RingLogger::new(ConsoleSink, level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = INSTALLED.set(logger);
    Ok(())
}

/// Buffered lines of the installed logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    INSTALLED.get().map(|logger| logger.recent()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct VecSink {
        written: Mutex<Vec<(Level, String)>>,
    }

    impl LogSink for &'static VecSink {
        fn write(&self, level: Level, line: &str) {
            self.written.lock().unwrap().push((level, line.to_string()));
        }
    }

    fn sink() -> &'static VecSink {
        Box::leak(Box::new(VecSink::default()))
    }

    fn emit(logger: &impl Log, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("commune")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_ring_keeps_latest_lines() {
        let logger = RingLogger::new(sink(), LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("line 2"));
        assert!(recent[2].ends_with("line 4"));
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let out = sink();
        let logger = RingLogger::new(out, LevelFilter::Warn, 10);

        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Warn, "careful");
        emit(&logger, Level::Error, "broken");

        let written = out.written.lock().unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].0, Level::Warn);
        assert_eq!(logger.recent().len(), 2);
    }

    #[test]
    fn test_line_format() {
        let logger = RingLogger::new(sink(), LevelFilter::Info, 1);
        emit(&logger, Level::Info, "voted");
        assert_eq!(logger.recent(), vec!["INFO  commune: voted".to_string()]);
    }

    #[test]
    fn test_zero_capacity_still_keeps_one_line() {
        let logger = RingLogger::new(sink(), LevelFilter::Info, 0);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
