//! File logger for operation reports
//!
//! Commands write their reports through a [`Logger`]. The same type can be
//! installed as the global `log` backend, in which case every record goes
//! to the file and is echoed to stderr.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger writing one line per message to a file
pub struct Logger {
    file: Mutex<Option<File>>,
    level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated on creation
    ///
    /// # Returns
    ///
    /// A new Logger or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: Level::Debug,
        })
    }

    /// Logger that discards everything, for callers without a report file
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: Level::Error,
        }
    }

    /// Appends one line to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Writes a titled block of `key: value` lines
    ///
    /// # Arguments
    ///
    /// * `title` - Heading line
    /// * `entries` - Pairs written indented under the heading
    pub fn log_section(&self, title: &str, entries: &[(&str, String)]) -> io::Result<()> {
        self.log(&format!("{}:", title))?;
        for (key, value) in entries {
            self.log(&format!("  {}: {}", key, value))?;
        }
        Ok(())
    }

    /// Installs a file logger as the global `log` backend
    pub fn init_global_logger(log_file: &str) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {}
}
