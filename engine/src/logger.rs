use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stdout,
    Stderr,
    File(String),
}

enum Sink {
    Off,
    Stdout,
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: Sink,
}

impl Logger {
    fn new(prefix: Option<String>, target: &LogTarget) -> Result<Self, String> {
        let sink = match target {
            LogTarget::Off => Sink::Off,
            LogTarget::Stdout => Sink::Stdout,
            LogTarget::Stderr => Sink::Stderr,
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;
                Sink::File(Mutex::new(file))
            }
        };
        Ok(Self { prefix, sink })
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        match &self.sink {
            Sink::Off => {}
            Sink::Stdout => println!("{}", self.format_line(file, line, message)),
            Sink::Stderr => eprintln!("{}", self.format_line(file, line, message)),
            Sink::File(file_sink) => {
                if let Ok(mut out) = file_sink.lock() {
                    let _ = writeln!(out, "{}", self.format_line(file, line, message));
                }
            }
        }
    }
}

/// Installs the process-wide logger. Only the first call has an effect.
pub fn init_logger(prefix: Option<String>, target: &LogTarget) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::new(prefix, target)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Lines logged before `init_logger` are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
