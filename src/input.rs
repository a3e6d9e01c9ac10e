//! Row ingestion and entry-time sanitization.
//!
//! Raw records arrive as strings (CSV cells or form fields) and are converted
//! to typed entries here, before aggregation: grade symbols outside the fixed
//! table are logged and dropped, SGPA values are clamped to [0, 10], and
//! non-numeric decimals become blanks.

use anyhow::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use tracing::warn;

use crate::analyzers::types::{GradeEntry, SemesterEntry};
use crate::grades::GradeSymbol;

/// A single subject row as read from a CSV file (`name,grade,credits`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SubjectRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub credits: String,
}

/// A single semester row as read from a CSV file (`semester,sgpa,credits`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SemesterRecord {
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub sgpa: String,
    #[serde(default)]
    pub credits: String,
}

/// Parses a decimal field, treating blanks and non-numeric text as absent.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Clamps an SGPA value to the [0, 10] scale.
pub fn clamp_sgpa(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

impl SubjectRecord {
    /// Converts the raw row into a typed [`GradeEntry`].
    ///
    /// An unrecognized grade symbol is reported and the row becomes a
    /// no-grade row, which the aggregator ignores.
    pub fn to_entry(&self) -> GradeEntry {
        let raw_grade = self.grade.trim();
        let grade = if raw_grade.is_empty() {
            None
        } else {
            let parsed = GradeSymbol::parse(raw_grade);
            if parsed.is_none() {
                warn!(subject = %self.name, grade = raw_grade, "Unknown grade symbol, row ignored");
            }
            parsed
        };

        GradeEntry {
            name: self.name.trim().to_string(),
            grade,
            credits: parse_decimal(&self.credits),
        }
    }
}

impl SemesterRecord {
    /// Converts the raw row into a typed [`SemesterEntry`], clamping the
    /// SGPA to [0, 10].
    pub fn to_entry(&self) -> SemesterEntry {
        SemesterEntry {
            semester: self.semester.trim().to_string(),
            sgpa: parse_decimal(&self.sgpa).map(clamp_sgpa),
            credits: parse_decimal(&self.credits),
        }
    }
}

/// Reads subject rows from CSV data with a `name,grade,credits` header.
pub fn parse_subject_rows<R: Read>(reader: R) -> Result<Vec<SubjectRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: SubjectRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}

/// Reads semester rows from CSV data with a `semester,sgpa,credits` header.
pub fn parse_semester_rows<R: Read>(reader: R) -> Result<Vec<SemesterRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: SemesterRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}

/// Loads subject rows from a CSV file.
pub fn load_subject_rows(path: &str) -> Result<Vec<SubjectRecord>> {
    let file = File::open(path)?;
    parse_subject_rows(file)
}

/// Loads semester rows from a CSV file.
pub fn load_semester_rows(path: &str) -> Result<Vec<SemesterRecord>> {
    let file = File::open(path)?;
    parse_semester_rows(file)
}
