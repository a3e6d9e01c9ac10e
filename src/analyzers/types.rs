//! Data types consumed and produced by the aggregation pass.

use serde::Serialize;
use std::fmt;

use crate::grades::GradeSymbol;

/// A sanitized subject row ready for SGPA aggregation.
///
/// `grade` is `None` when the user left the row blank or entered a symbol
/// outside the fixed table; `credits` is `None` when blank or non-numeric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeEntry {
    pub name: String,
    pub grade: Option<GradeSymbol>,
    pub credits: Option<f64>,
}

/// A sanitized semester row ready for CGPA aggregation.
///
/// `sgpa` has been clamped to [0, 10] at entry time; a `None` means the
/// field was blank or non-numeric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemesterEntry {
    pub semester: String,
    pub sgpa: Option<f64>,
    pub credits: Option<f64>,
}

/// How a CGPA value was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationType {
    CreditWeighted,
    SimpleAverage,
}

impl CalculationType {
    pub fn as_str(self) -> &'static str {
        match self {
            CalculationType::CreditWeighted => "credit-weighted",
            CalculationType::SimpleAverage => "simple-average",
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful CGPA aggregation: the two-decimal value and how it was
/// obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CgpaAggregate {
    pub value: f64,
    pub calculation_type: CalculationType,
}
