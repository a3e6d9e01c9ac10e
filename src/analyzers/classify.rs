use serde::Serialize;
use std::fmt;

/// Qualitative performance band for a grade-point average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Outstanding,
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Satisfactory,
    #[serde(rename = "Improvement Needed")]
    ImprovementNeeded,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Outstanding => "Outstanding",
            Level::Excellent => "Excellent",
            Level::VeryGood => "Very Good",
            Level::Good => "Good",
            Level::Satisfactory => "Satisfactory",
            Level::ImprovementNeeded => "Improvement Needed",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a grade-point average (0–10 scale) into a qualitative [`Level`].
///
/// | Range    | Level              |
/// |----------|--------------------|
/// | >= 9.5   | Outstanding        |
/// | >= 9     | Excellent          |
/// | >= 8     | Very Good          |
/// | >= 7     | Good               |
/// | >= 6     | Satisfactory       |
/// | < 6      | Improvement Needed |
///
/// Total over any input; out-of-range values (and NaN) fall through to the
/// lowest band.
pub fn classify(value: f64) -> Level {
    match value {
        v if v >= 9.5 => Level::Outstanding,
        v if v >= 9.0 => Level::Excellent,
        v if v >= 8.0 => Level::VeryGood,
        v if v >= 7.0 => Level::Good,
        v if v >= 6.0 => Level::Satisfactory,
        _ => Level::ImprovementNeeded,
    }
}
