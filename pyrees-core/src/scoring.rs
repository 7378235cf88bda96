//! Style scoring pipeline
//!
//! ```text
//! text ──split──▶ SourceText ──extract──▶ raw measures
//!                                            │ convert (one curve per measure)
//!                                            ▼
//!                                  marks ──sum──▶ total (0-100)
//! ```
//!
//! Nothing is cached between calls, so the same text always yields a
//! bit-identical report.

use crate::extract::extract;
use crate::frontend::Frontend;
use crate::measures::{MeasureVector, ScoringTable};
use crate::python::PythonFrontend;
use crate::source::SourceText;
use serde::Serialize;
use tracing::{debug, info};

/// Result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleReport {
    /// Raw measurements
    pub raw: MeasureVector,
    /// Mark awarded for each measurement
    pub marks: MeasureVector,
    /// Sum of all marks, unrounded
    pub total: f64,
}

/// Scores source text with a front-end and a conversion table.
pub struct Analyzer {
    frontend: Box<dyn Frontend>,
    table: ScoringTable,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Box::new(PythonFrontend::new()), ScoringTable::default())
    }
}

impl Analyzer {
    pub fn new(frontend: Box<dyn Frontend>, table: ScoringTable) -> Self {
        Self { frontend, table }
    }

    /// Python front-end with a custom conversion table
    pub fn with_table(table: ScoringTable) -> Self {
        Self::new(Box::new(PythonFrontend::new()), table)
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    /// Measure `text` and convert the measurements into a style score.
    pub fn analyze(&self, text: &str) -> StyleReport {
        let source = SourceText::new(text);
        let raw = extract(&source, self.frontend.as_ref());
        let marks = self.table.marks(&raw);
        let total = marks.sum();

        for (measure, value) in raw.iter() {
            debug!("{}: raw={:.2} mark={:.2}", measure, value, marks.get(measure));
        }
        info!(
            "Style score: {:.2} / {:.0} ({} frontend)",
            total,
            self.table.max_total(),
            self.frontend.name()
        );

        StyleReport { raw, marks, total }
    }
}

/// Score Python source with the built-in conversion table.
pub fn analyze(text: &str) -> StyleReport {
    Analyzer::default().analyze(text)
}
