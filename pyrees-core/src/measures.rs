//! The eight style measures and their conversion table.

use crate::curve::CurveParams;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the eight style measures, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Mean stripped length of non-blank lines
    AvgLineLength,
    /// Percentage of lines carrying a comment
    CommentPercentage,
    /// Percentage of non-blank lines that start with whitespace
    IndentPercentage,
    /// Percentage of blank lines
    BlankPercentage,
    /// Percentage of spaces inside stripped lines
    EmbeddedSpacePercentage,
    /// Non-blank lines per module (function or top level)
    ModuleLength,
    /// Distinct reserved words used
    ReservedWordsCount,
    /// Mean length of programmer-defined names
    AvgIdentifierLength,
}

/// Built-in conversion table, indexed in [`Measure::ALL`] order.
const CURVES: [CurveParams; 8] = [
    CurveParams::from_parts(15.0, 40.0, 50.0, 70.0, 90.0),
    CurveParams::from_parts(10.0, 5.0, 10.0, 20.0, 30.0),
    CurveParams::from_parts(12.0, 30.0, 40.0, 60.0, 70.0),
    CurveParams::from_parts(5.0, 2.0, 5.0, 10.0, 15.0),
    CurveParams::from_parts(8.0, 5.0, 7.0, 12.0, 15.0),
    CurveParams::from_parts(20.0, 5.0, 10.0, 20.0, 30.0),
    CurveParams::from_parts(10.0, 5.0, 8.0, 15.0, 20.0),
    CurveParams::from_parts(20.0, 5.0, 7.0, 15.0, 20.0),
];

impl Measure {
    pub const ALL: [Measure; 8] = [
        Measure::AvgLineLength,
        Measure::CommentPercentage,
        Measure::IndentPercentage,
        Measure::BlankPercentage,
        Measure::EmbeddedSpacePercentage,
        Measure::ModuleLength,
        Measure::ReservedWordsCount,
        Measure::AvgIdentifierLength,
    ];

    /// Snake-case name used in reports and config files
    pub fn name(self) -> &'static str {
        match self {
            Measure::AvgLineLength => "avg_line_length",
            Measure::CommentPercentage => "comment_percentage",
            Measure::IndentPercentage => "indent_percentage",
            Measure::BlankPercentage => "blank_percentage",
            Measure::EmbeddedSpacePercentage => "embedded_space_percentage",
            Measure::ModuleLength => "module_length",
            Measure::ReservedWordsCount => "reserved_words_count",
            Measure::AvgIdentifierLength => "avg_identifier_length",
        }
    }

    /// The built-in conversion curve for this measure
    pub fn curve(self) -> CurveParams {
        CURVES[self as usize]
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Measure::ALL.iter().map(|m| m.name()).collect();
                format!("Unknown measure '{}'. Valid measures: {}", s, valid.join(", "))
            })
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value for every measure, kept in [`Measure::ALL`] order.
///
/// Used both for raw measurements and for the marks derived from them.
/// Only constructible with all eight entries present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MeasureVector(IndexMap<Measure, f64>);

impl MeasureVector {
    /// Build a vector by evaluating `f` once per measure, in order.
    pub fn from_fn(mut f: impl FnMut(Measure) -> f64) -> Self {
        Self(Measure::ALL.iter().map(|&m| (m, f(m))).collect())
    }

    pub fn get(&self, measure: Measure) -> f64 {
        self.0.get(&measure).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        self.0.iter().map(|(&m, &v)| (m, v))
    }

    /// Plain sum of all entries, no rounding
    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }
}

/// Per-measure conversion curves used by the scorer.
///
/// `Default` is the built-in table; overrides never touch the constants.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTable {
    curves: [CurveParams; 8],
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self { curves: CURVES }
    }
}

impl ScoringTable {
    pub fn curve(&self, measure: Measure) -> CurveParams {
        self.curves[measure as usize]
    }

    /// Replace the curve for one measure
    #[must_use]
    pub fn with_override(mut self, measure: Measure, params: CurveParams) -> Self {
        self.curves[measure as usize] = params;
        self
    }

    /// Sum of the maximum marks, i.e. the best attainable score
    pub fn max_total(&self) -> f64 {
        self.curves.iter().map(CurveParams::max_mark).sum()
    }

    /// Convert every raw measurement into its mark
    pub fn marks(&self, raw: &MeasureVector) -> MeasureVector {
        MeasureVector::from_fn(|m| self.curve(m).convert(raw.get(m)))
    }
}
