//! The fixed letter-grade table.
//!
//! Symbols and their grade-point values are constant data, never mutated at
//! runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade from the fixed ordered symbol set.
///
/// | Symbol | Points |
/// |--------|--------|
/// | A++    | 10     |
/// | A+     | 10     |
/// | A      | 9      |
/// | B+     | 8      |
/// | B      | 7      |
/// | C+     | 6      |
/// | C      | 5      |
/// | D+     | 4.5    |
/// | D      | 4      |
/// | E+     | 3      |
/// | F      | 0      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeSymbol {
    #[serde(rename = "A++")]
    APlusPlus,
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
    #[serde(rename = "E+")]
    EPlus,
    F,
}

impl GradeSymbol {
    /// All symbols in descending grade order, for menus and help output.
    pub const ALL: [GradeSymbol; 11] = [
        GradeSymbol::APlusPlus,
        GradeSymbol::APlus,
        GradeSymbol::A,
        GradeSymbol::BPlus,
        GradeSymbol::B,
        GradeSymbol::CPlus,
        GradeSymbol::C,
        GradeSymbol::DPlus,
        GradeSymbol::D,
        GradeSymbol::EPlus,
        GradeSymbol::F,
    ];

    /// Grade-point value for this symbol.
    pub fn points(self) -> f64 {
        match self {
            GradeSymbol::APlusPlus => 10.0,
            GradeSymbol::APlus => 10.0,
            GradeSymbol::A => 9.0,
            GradeSymbol::BPlus => 8.0,
            GradeSymbol::B => 7.0,
            GradeSymbol::CPlus => 6.0,
            GradeSymbol::C => 5.0,
            GradeSymbol::DPlus => 4.5,
            GradeSymbol::D => 4.0,
            GradeSymbol::EPlus => 3.0,
            GradeSymbol::F => 0.0,
        }
    }

    /// Textual symbol as entered by users.
    pub fn as_str(self) -> &'static str {
        match self {
            GradeSymbol::APlusPlus => "A++",
            GradeSymbol::APlus => "A+",
            GradeSymbol::A => "A",
            GradeSymbol::BPlus => "B+",
            GradeSymbol::B => "B",
            GradeSymbol::CPlus => "C+",
            GradeSymbol::C => "C",
            GradeSymbol::DPlus => "D+",
            GradeSymbol::D => "D",
            GradeSymbol::EPlus => "E+",
            GradeSymbol::F => "F",
        }
    }

    /// Parses a textual symbol. Matching is case-insensitive on the letter.
    pub fn parse(raw: &str) -> Option<GradeSymbol> {
        let raw = raw.trim();
        GradeSymbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for GradeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeSymbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeSymbol::parse(s).ok_or_else(|| format!("unknown grade symbol: {s}"))
    }
}
