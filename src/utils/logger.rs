//! Logger for the command-line tool
//!
//! Routes records from the `log` facade to a log file and echoes them to
//! the console. The library itself only emits through the facade.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use log::{LevelFilter, Log, Metadata, Record};

/// File-and-console logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level written
    level: LevelFilter,
    /// Whether records are echoed to stderr
    echo: bool,
}

impl Logger {
    /// Creates a logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated on open
    /// * `level` - Most verbose level to record
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
            echo: true,
        })
    }

    /// Disables the console echo
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Writes one line to the log file
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Installs a logger for `log_file` as the global `log` backend
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file, level)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            let _ = self.write_line(&message);

            if self.echo {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Each line is flushed as it is written
    }
}
