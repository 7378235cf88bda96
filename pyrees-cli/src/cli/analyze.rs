//! Analyze command implementation
//!
//! 1. Load project config (curve overrides, defaults)
//! 2. Read every source file as UTF-8
//! 3. Score the files, in parallel when there are several
//! 4. Render the reports (text, json)

use crate::config::load_project_config;
use crate::reporters::{self, FileReport, OutputFormat, RenderOptions};

use anyhow::{Context, Result};
use pyrees_core::Analyzer;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Options for one analysis run, already parsed from the command line
#[derive(Debug)]
pub struct AnalyzeOptions<'a> {
    pub files: &'a [PathBuf],
    pub format: Option<&'a str>,
    pub config: Option<&'a Path>,
    pub explain: bool,
    pub workers: Option<usize>,
}

/// Read a source file, rejecting anything that is not UTF-8
pub fn read_source(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    String::from_utf8(bytes)
        .with_context(|| format!("Failed to decode {} as UTF-8", path.display()))
}

/// Score every file and render the result in the requested format
pub fn run(options: &AnalyzeOptions<'_>) -> Result<String> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_project_config(options.config, &cwd)?;

    // Flag beats config beats default
    let format_name = options
        .format
        .or(config.defaults.format.as_deref())
        .unwrap_or("text");
    let format = OutputFormat::from_str(format_name)?;
    let workers = options.workers.or(config.defaults.workers).unwrap_or(1);

    let analyzer = Analyzer::with_table(config.scoring_table()?);

    let sources = options
        .files
        .iter()
        .map(|path| Ok((path.clone(), read_source(path)?)))
        .collect::<Result<Vec<(PathBuf, String)>>>()?;

    debug!("Scoring {} file(s) with {} worker(s)", sources.len(), workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to build worker pool")?;

    let reports: Vec<FileReport> = pool.install(|| {
        sources
            .into_par_iter()
            .map(|(path, source)| {
                let report = analyzer.analyze(&source);
                info!("{}: {:.2} / 100", path.display(), report.total);
                FileReport { path, report }
            })
            .collect()
    });

    let render_options = RenderOptions {
        explain: options.explain.then(|| analyzer.table()),
    };
    reporters::report(&reports, format, render_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("nope.py")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_source_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.py");
        std::fs::write(&path, b"name = '\xe9t\xe9'\n").unwrap();
        let err = read_source(&path).unwrap_err();
        assert!(err.to_string().contains("as UTF-8"));
    }

    #[test]
    fn test_run_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.py");
        let second = dir.path().join("second.py");
        std::fs::write(&first, "x = 1\n").unwrap();
        std::fs::write(&second, "def f():\n    return 2\n").unwrap();
        let files = vec![first, second];

        let output = run(&AnalyzeOptions {
            files: &files,
            format: Some("json"),
            config: None,
            explain: false,
            workers: Some(4),
        })
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let entries = parsed.as_array().unwrap();
        assert!(entries[0]["path"].as_str().unwrap().ends_with("first.py"));
        assert!(entries[1]["path"].as_str().unwrap().ends_with("second.py"));
        assert_eq!(entries[1]["raw"]["module_length"], 1.0);
    }

    #[test]
    fn test_run_applies_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("one.py");
        std::fs::write(&source, "x = 1\n").unwrap();
        let config = dir.path().join("style.toml");
        std::fs::write(
            &config,
            "[curves.avg_line_length]\nmax_mark = 15.0\nlo = 0.0\nlotol = 1.0\nhitol = 100.0\nhi = 200.0\n",
        )
        .unwrap();
        let files = vec![source];

        let output = run(&AnalyzeOptions {
            files: &files,
            format: Some("text"),
            config: Some(&config),
            explain: true,
            workers: None,
        })
        .unwrap();

        assert!(output.contains("Overall Style Mark: 15.00 / 100"));
        assert!(output.contains("  avg_line_length               : (15, 0, 1, 100, 200)"));
    }
}
