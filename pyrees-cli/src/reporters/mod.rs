//! Output reporters for pyrees results
//!
//! Supports two output formats:
//! - `text` - The classic breakdown: raw measures, marks, overall mark
//! - `json` - Machine-readable JSON

mod json;
mod text;

use anyhow::{anyhow, Result};
use pyrees_core::{ScoringTable, StyleReport};
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Style report for one analysed file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub report: StyleReport,
}

/// Render options shared by all formats
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Append the conversion curves used (text only)
    pub explain: Option<&'a ScoringTable>,
}

/// Render file reports in the given format
pub fn report(reports: &[FileReport], format: OutputFormat, options: RenderOptions<'_>) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(reports, options),
        OutputFormat::Json => json::render(reports),
    }
}
