use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::io::ext_repr::ExtInstance;

pub mod cli;
pub mod ext_repr;
pub mod output;
pub mod svg_export;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect instance file format")
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, output)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to {}", path.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {}", path.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!(
        "time: {}",
        humantime::format_rfc3339_seconds(std::time::SystemTime::now())
    );
    Ok(())
}
