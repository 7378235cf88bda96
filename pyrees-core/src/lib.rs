//! Rees-style style scoring for Python source
//!
//! Eight lexical and structural statistics are measured over a source file,
//! each one is mapped onto a bounded mark by a trapezoidal conversion curve,
//! and the marks are summed into a score out of 100.
//!
//! ```
//! let report = pyrees_core::analyze("x = 1\n");
//! assert_eq!(report.raw.get(pyrees_core::Measure::AvgLineLength), 5.0);
//! assert_eq!(report.total, 0.0);
//! ```

pub mod curve;
mod errors;
pub mod extract;
pub mod frontend;
pub mod measures;
pub mod python;
mod scoring;
pub mod source;

pub use curve::{convert, CurveParams};
pub use errors::{CurveError, FrontendError};
pub use frontend::{Frontend, Token, TokenKind};
pub use measures::{Measure, MeasureVector, ScoringTable};
pub use python::PythonFrontend;
pub use scoring::{analyze, Analyzer, StyleReport};
pub use source::SourceText;
