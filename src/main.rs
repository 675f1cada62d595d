mod logging;
mod runtime_config;

use anyhow::{Context, Result};
use chrono::Local;
use runtime_config::Config;
use upsample_coords::mapping::{self, AxisMapping};

/// (name, destination index, source extent, destination extent) of the sample evaluations
const SAMPLES: [(&str, f64, f64, f64); 2] =
    [("cascade0", 2.0, 1.0, 4.0), ("cascade1", 2.0, 1.0, 8.0)];

fn main() -> Result<()> {
    // get command line flags
    let config = Config::new().context("could not parse command line flags")?;

    // logging setup
    if let Some(log_folder) = &config.log_folder {
        std::fs::create_dir_all(log_folder).context("could not create log folder")?;
    }
    let log_file_path = config.log_file_path(Local::now());
    logging::init(config.level(), log_file_path).context("could not set up logging")?;

    for &(name, destination_index, size, size_up) in SAMPLES.iter() {
        let result = evaluate(destination_index, size, size_up);
        println!("{}: {}", name, result);
    }

    log::logger().flush();
    Ok(())
}

fn evaluate(destination_index: f64, source_extent: f64, destination_extent: f64) -> AxisMapping {
    log::debug!(
        "mapping destination index {} from extent {} onto extent {}",
        destination_index,
        destination_extent,
        source_extent
    );
    let result = mapping::upper(destination_index, source_extent, destination_extent);
    if !result.is_finite() {
        log::warn!(
            "non-finite mapping for destination index {}: {}",
            destination_index,
            result
        );
    }
    result
}
