//! CLI definition and handler

pub(crate) mod analyze;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// pyrees - Style scoring for Python source
#[derive(Parser, Debug)]
#[command(name = "pyrees")]
#[command(
    version,
    about = "Score the lexical style of Python source files out of 100",
    long_about = "pyrees measures eight style statistics of a Python file (line length, \
comment density, indentation, blank lines, embedded spaces, module length, keyword \
variety and identifier length), converts each into a mark with a trapezoidal curve, \
and sums the marks into a style score out of 100.",
    after_help = "\
Examples:
  pyrees app.py                        Score one file
  pyrees src/*.py --format json        JSON output for scripting
  pyrees app.py --explain              Also print the conversion curves
  pyrees app.py --config style.toml    Use custom conversion curves"
)]
pub struct Cli {
    /// Python source file(s) to score
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format: text, json (default: text, or `defaults.format` in pyrees.toml)
    #[arg(long, short = 'f', value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Config file (default: ./pyrees.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the conversion curves after the report (text format)
    #[arg(long)]
    pub explain: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers when scoring several files (1-64)
    #[arg(long, value_parser = parse_workers)]
    pub workers: Option<usize>,
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    let output = analyze::run(&analyze::AnalyzeOptions {
        files: &cli.files,
        format: cli.format.as_deref(),
        config: cli.config.as_deref(),
        explain: cli.explain,
        workers: cli.workers,
    })?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_workers() {
        assert_eq!(parse_workers("4"), Ok(4));
        assert!(parse_workers("0").is_err());
        assert!(parse_workers("65").is_err());
        assert!(parse_workers("many").is_err());
    }

    #[test]
    fn test_file_argument_required() {
        assert!(Cli::try_parse_from(["pyrees"]).is_err());
        let cli = Cli::try_parse_from(["pyrees", "a.py", "b.py", "--format", "json"]).unwrap();
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["pyrees", "a.py", "--format", "sarif"]).is_err());
    }
}
