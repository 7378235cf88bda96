//! Text (terminal) reporter
//!
//! ```text
//! Style Analysis Breakdown:
//!   avg_line_length               : 52.40
//!   ...
//!
//! Marks for each measure:
//!   avg_line_length               : 15.00
//!   ...
//!
//! Overall Style Mark: 71.25 / 100
//! ```
//!
//! With several files each block is preceded by a `==> path <==` header.

use super::{FileReport, RenderOptions};
use anyhow::Result;
use pyrees_core::{Measure, MeasureVector, ScoringTable, StyleReport};
use std::fmt::Write;

fn write_vector(out: &mut String, vector: &MeasureVector) -> std::fmt::Result {
    for (measure, value) in vector.iter() {
        writeln!(out, "  {:30}: {:.2}", measure.name(), value)?;
    }
    Ok(())
}

/// The breakdown for one report
fn write_report(out: &mut String, report: &StyleReport) -> std::fmt::Result {
    writeln!(out, "Style Analysis Breakdown:")?;
    write_vector(out, &report.raw)?;
    writeln!(out, "\nMarks for each measure:")?;
    write_vector(out, &report.marks)?;
    writeln!(out, "\nOverall Style Mark: {:.2} / 100", report.total)
}

fn write_curves(out: &mut String, table: &ScoringTable) -> std::fmt::Result {
    writeln!(out, "\nConversion curves (max_mark, lo, lotol, hitol, hi):")?;
    for measure in Measure::ALL {
        let c = table.curve(measure);
        writeln!(
            out,
            "  {:30}: ({}, {}, {}, {}, {})",
            measure.name(),
            c.max_mark(),
            c.lo(),
            c.lotol(),
            c.hitol(),
            c.hi()
        )?;
    }
    Ok(())
}

/// Render reports as formatted terminal output
pub fn render(reports: &[FileReport], options: RenderOptions<'_>) -> Result<String> {
    let mut out = String::new();
    let multiple = reports.len() > 1;

    for (i, file) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if multiple {
            writeln!(out, "==> {} <==", file.path.display())?;
        }
        write_report(&mut out, &file.report)?;
    }

    if let Some(table) = options.explain {
        write_curves(&mut out, table)?;
    }

    Ok(out)
}
