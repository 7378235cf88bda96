//! Project-level configuration support
//!
//! Loads optional configuration from `pyrees.toml` in the working directory,
//! or from the file passed with `--config`.
//!
//! # Configuration Format
//!
//! ```toml
//! # pyrees.toml
//!
//! [defaults]
//! format = "json"
//! workers = 4
//!
//! # Replace the conversion curve of one measure
//! [curves.avg_line_length]
//! max_mark = 15.0
//! lo = 40.0
//! lotol = 50.0
//! hitol = 80.0
//! hi = 100.0
//! ```
//!
//! Measures without an entry keep their built-in curve.

use anyhow::{Context, Result};
use pyrees_core::{CurveParams, Measure, ScoringTable};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "pyrees.toml";

/// Project-level configuration loaded from pyrees.toml
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,

    /// Conversion curve overrides keyed by measure name
    #[serde(default)]
    pub curves: BTreeMap<String, CurveOverride>,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Default number of workers
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Replacement curve for one measure; every field is required
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveOverride {
    pub max_mark: f64,
    pub lo: f64,
    pub lotol: f64,
    pub hitol: f64,
    pub hi: f64,
}

impl ProjectConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the scoring table: built-in curves with the overrides applied.
    ///
    /// Unknown measure names and curves that break
    /// `lo <= lotol <= hitol <= hi` are errors.
    pub fn scoring_table(&self) -> Result<ScoringTable> {
        let mut table = ScoringTable::default();
        for (name, curve) in &self.curves {
            let measure: Measure = name.parse().map_err(anyhow::Error::msg)?;
            let params = CurveParams::new(curve.max_mark, curve.lo, curve.lotol, curve.hitol, curve.hi)
                .with_context(|| format!("Invalid curve for {}", measure))?;
            debug!("Overriding curve for {}: {:?}", measure, params);
            table = table.with_override(measure, params);
        }
        Ok(table)
    }
}

/// Load project configuration.
///
/// An explicit path must load cleanly. Otherwise `pyrees.toml` in `dir` is
/// used if present; a broken discovered file is reported and ignored.
/// Returns default configuration if no config file is found.
pub fn load_project_config(explicit: Option<&Path>, dir: &Path) -> Result<ProjectConfig> {
    if let Some(path) = explicit {
        let config = load_toml_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        debug!("Loaded project config from {}", path.display());
        return Ok(config);
    }

    let toml_path = dir.join(CONFIG_FILE_NAME);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return Ok(config);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    Ok(ProjectConfig::default())
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    ProjectConfig::from_toml(&content)
}
