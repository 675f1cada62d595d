use std::{fs::File, io::Write, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

struct SimpleLogger<W: Write + Sync + Send> {
    level: Option<Level>,
    log_file: Option<Mutex<W>>,
}

impl<W> SimpleLogger<W>
where
    W: Write + Sync + Send,
{
    fn new(level: LevelFilter, log_file: Option<W>) -> Self {
        Self {
            level: level.to_level(),
            log_file: log_file.map(Mutex::new),
        }
    }
}

impl<W> log::Log for SimpleLogger<W>
where
    W: Write + Sync + Send,
{
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Some(level) = self.level {
            if record.metadata().level() <= level {
                println!("{}", record.args());
            }
        }
        // the log-file gets everything, regardless of setting
        if let Some(log_file) = &self.log_file {
            let now = Local::now();
            let mut log_file = match log_file.lock() {
                Ok(log_file) => log_file,
                Err(poisoned) => {
                    println!("log-file lock was poisoned: {}", poisoned);
                    poisoned.into_inner()
                }
            };
            let err = write!(
                &mut log_file,
                "{} {:<5} {}\r\n",
                now.format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            );
            if let Err(err) = err {
                println!("error writing to log-file: {}", err);
            }
        }
    }

    fn flush(&self) {
        if let Some(log_file) = &self.log_file {
            let mut log_file = match log_file.lock() {
                Ok(log_file) => log_file,
                Err(poisoned) => {
                    println!("log-file lock was poisoned: {}", poisoned);
                    poisoned.into_inner()
                }
            };
            if let Err(err) = log_file.flush() {
                println!("error flushing log-file: {}", err);
            }
        }
    }
}

/// Initializes the logging feature with the given log-level.
/// If a log-file path is given, the full log is written there as well.
pub fn init<P: AsRef<Path>>(level: LevelFilter, log_file_path: Option<P>) -> Result<()> {
    let file = match log_file_path {
        Some(path) => Some(File::create(path).context("could not create log file")?),
        None => None,
    };
    let max_level = if file.is_some() {
        // the log-file records everything, so nothing may be filtered out early
        LevelFilter::Trace
    } else {
        level
    };
    let logger = SimpleLogger::new(level, file);
    log::set_boxed_logger(Box::new(logger)).context("could not set logger")?;
    log::set_max_level(max_level);
    Ok(())
}
