//! Output formatting and persistence for calculation reports.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::classify::{Level, classify};
use crate::analyzers::types::{CalculationType, CgpaAggregate};
use crate::analyzers::utility::format_points;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// A timestamped record of one calculation, appended to CSV or printed as
/// JSON.
#[derive(Debug, Serialize)]
pub struct CalcReport {
    pub timestamp: DateTime<Utc>,
    pub metric: String,
    pub value: String,
    pub calculation_type: Option<CalculationType>,
    pub level: Level,
}

impl CalcReport {
    /// Builds a report for a semester average.
    pub fn sgpa(value: f64) -> Self {
        CalcReport {
            timestamp: Utc::now(),
            metric: "sgpa".to_string(),
            value: format_points(value),
            calculation_type: None,
            level: classify(value),
        }
    }

    /// Builds a report for a cumulative average.
    pub fn cgpa(aggregate: &CgpaAggregate) -> Self {
        CalcReport {
            timestamp: Utc::now(),
            metric: "cgpa".to_string(),
            value: format_points(aggregate.value),
            calculation_type: Some(aggregate.calculation_type),
            level: classify(aggregate.value),
        }
    }
}

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &CalcReport) {
    debug!("{:#?}", report);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &CalcReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends a [`CalcReport`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, report: &CalcReport) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(report)?;
    writer.flush()?;

    Ok(())
}
