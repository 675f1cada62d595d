use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};
use log::LevelFilter;

/// Holds the runtime configuration for the program.
/// Only concerns logging, the sample evaluations are fixed.
pub struct Config {
    pub log_folder: Option<String>,
    pub verbose: bool,
}

impl Config {
    /// Read command line arguments and flags to generate the runtime configuration.
    pub fn new() -> Result<Self> {
        const VERBOSE: (&str, &str, &str) = (
            "verbose",
            "v",
            "if set, all logging output is printed",
        );
        const LOG_FOLDER: (&str, &str, &str) = (
            "log-folder",
            "l",
            "if set, the full log is also written to a timestamped file in this folder",
        );
        use clap::{App, Arg};
        let matches = App::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .arg(
                Arg::with_name(VERBOSE.0)
                    .short(VERBOSE.1)
                    .long(VERBOSE.0)
                    .help(VERBOSE.2)
                    .takes_value(false),
            )
            .arg(
                Arg::with_name(LOG_FOLDER.0)
                    .short(LOG_FOLDER.1)
                    .long(LOG_FOLDER.0)
                    .help(LOG_FOLDER.2)
                    .takes_value(true),
            )
            .get_matches();

        Ok(Self {
            log_folder: matches.value_of(LOG_FOLDER.0).map(str::to_string),
            verbose: matches.is_present(VERBOSE.0),
        })
    }

    /// Level of the log output printed to stdout.
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        }
    }

    /// Path of the log-file for a run started at `started`, if a log folder is set.
    pub fn log_file_path(&self, started: DateTime<Local>) -> Option<PathBuf> {
        self.log_folder.as_ref().map(|log_folder| {
            Path::new(log_folder).join(started.format("%Y-%m-%d_%H-%M-%S.log").to_string())
        })
    }
}
