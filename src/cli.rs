//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::report::ReportStyle;
use clap::Parser;
use std::path::PathBuf;

/// cro-report - turn CRO audit findings into an interactive HTML report
///
/// Reads the structured audit JSON (pages, scored findings, action plan)
/// and writes a single self-contained HTML file with charts, screenshots
/// and a prioritized action plan.
///
/// Examples:
///   cro-report --input audit_data.json --output report.html
///   cro-report -i audit_data.json --style tables
///   cro-report -i audit_data.json --no-screenshots --title "Checkout Review"
///   cro-report --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the audit data JSON file
    #[arg(short, long, value_name = "FILE", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Output HTML file path
    ///
    /// Defaults to the config file's `general.output` (cro_audit_report.html).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Analytics style (charts, tables)
    ///
    /// `charts` uses Chart.js; `tables` renders static HTML with no external scripts.
    #[arg(short, long, value_name = "STYLE", env = "CRO_REPORT_STYLE")]
    pub style: Option<ReportStyle>,

    /// Report heading
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Do not embed screenshots
    #[arg(long)]
    pub no_screenshots: bool,

    /// Path to configuration file
    ///
    /// If not specified, looks for .croreport.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .croreport.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        match self.input {
            Some(ref input) if !input.exists() => {
                return Err(format!("Input file does not exist: {}", input.display()));
            }
            Some(ref input) if !input.is_file() => {
                return Err(format!("Input path is not a file: {}", input.display()));
            }
            Some(_) => {}
            None => return Err("An --input file is required".to_string()),
        }

        if let Some(ref output) = self.output {
            if output.is_dir() {
                return Err(format!("Output path is a directory: {}", output.display()));
            }
        }

        if let Some(ref title) = self.title {
            if title.trim().is_empty() {
                return Err("Title must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_args(input: Option<PathBuf>) -> Args {
        Args {
            input,
            output: None,
            style: None,
            title: None,
            no_screenshots: false,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_missing_input() {
        let args = make_args(Some(PathBuf::from("/no/such/audit.json")));
        assert!(args.validate().is_err());

        let args = make_args(None);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_existing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("audit.json");
        std::fs::write(&input, "{}").unwrap();

        let mut args = make_args(Some(input));
        assert!(args.validate().is_ok());

        args.output = Some(dir.path().to_path_buf());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args(None);
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());

        args.init_config = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_parse_style() {
        let args = Args::parse_from(["cro-report", "-i", "a.json", "--style", "tables"]);
        assert_eq!(args.style, Some(ReportStyle::Tables));
        assert_eq!(args.input, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args(None);
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
