//! Convert the ipinfo country/continent CSV into named groups of IP ranges.
//!
//! Rows are classified into group keys (continents, with China and a merged
//! Singapore/Malaysia/Indonesia/Thailand group pulled out), optionally
//! filtered by a want-list, and applied to a [`container::Container`].
//!
//! # Modules
//! - [`models`] - ranges, entries and run options
//! - [`source`] - CSV row source
//! - [`processing`] - classification, aggregation and apply
//! - [`container`] - container trait and in-memory implementation
//! - [`converter`] - input converters and registry
//! - [`config`] - job configuration
//! - [`output`] - CSV, JSON and text output

pub mod config;
pub mod container;
pub mod converter;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

use config::{Config, OutputConfig, OutputFormat};
use container::MemoryContainer;
use converter::Registry;
use std::path::PathBuf;

pub use error::{ConvertError, Result};

/// Run every configured input, in order, against one fresh container.
///
/// The first failing input stops the job.
pub fn run(config: &Config, registry: &Registry) -> Result<MemoryContainer> {
    let mut container = MemoryContainer::new();
    for (i, input) in config.input.iter().enumerate() {
        let converter = registry.create(&input.kind, &input.action, input.args.as_ref())?;
        log::info!(
            "input #{i}: {} ({}) action={}",
            converter.kind(),
            converter.description(),
            converter.action()
        );
        converter.input(&mut container)?;
    }
    log::info!("Job done, container has {} groups", container.len());
    Ok(container)
}

/// Write the container in the configured format.
pub fn write_output(container: &MemoryContainer, output: &OutputConfig) -> Result<Vec<PathBuf>> {
    match output.format {
        OutputFormat::Text => output::write_text(container, &output.dir),
        OutputFormat::Csv => Ok(vec![output::write_csv(container, &output.dir)?]),
        OutputFormat::Json => Ok(vec![output::write_json(container, &output.dir)?]),
    }
}
