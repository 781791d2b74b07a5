//! Console Logger
//!
//! `log` backend for the browser. Every record is formatted with a local
//! timestamp, written to the developer console (stderr off-wasm) and kept in
//! a bounded ring buffer so the UI can show recent problems.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records retained by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

/// A single formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Render as `[HH:MM:SS.mmm] LEVEL app/target: message`
    pub fn format(&self, app_name: &str) -> String {
        format!(
            "[{}] {:<5} {}/{}: {}",
            self.timestamp, self.level, app_name, self.target, self.message
        )
    }
}

/// Fixed-capacity circular buffer of log entries (oldest evicted first)
#[derive(Debug)]
pub struct LogBuffer {
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries at or above `level` severity, oldest-first
    pub fn at_least(&self, level: Level) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.level <= level)
            .cloned()
            .collect()
    }
}

struct ConsoleLogger {
    app_name: String,
    buffer: Mutex<LogBuffer>,
}

impl ConsoleLogger {
    fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            buffer: Mutex::new(LogBuffer::new(DEFAULT_CAPACITY)),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_line(entry.level, &entry.format(&self.app_name));
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(entry);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the console logger as the global `log` backend.
///
/// The first call wins; the app name of later calls is ignored.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent records captured by the global logger at or above `level`
/// severity, oldest-first
pub fn recent_at_least(level: Level) -> Vec<LogEntry> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.at_least(level)))
        .unwrap_or_default()
}
