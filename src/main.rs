//! cro-report - CRO audit findings to interactive HTML
//!
//! A CLI tool that reads structured conversion-rate audit data and
//! renders a single self-contained HTML report.
//!
//! Exit codes:
//!   0 - Report written
//!   1 - Invalid arguments, unreadable or malformed input, write failure

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod report;

use analysis::Aggregates;
use anyhow::{Context, Result};
use chrono::Local;
use cli::Args;
use config::{Config, CONFIG_FILE_NAME};
use error::ReportError;
use models::AuditDocument;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("cro-report v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run_report(args) {
        error!("Report generation failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .croreport.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to change the report style, title, fonts and screenshot handling.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Load the audit, render it and write the report.
fn run_report(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let input = args
        .input
        .clone()
        .context("An --input file is required")?;
    let output = PathBuf::from(&config.general.output);

    info!("Reading audit data from {}", input.display());
    let document = AuditDocument::load(&input)?;

    let audit_date = match document.audit_date.as_deref().map(str::trim) {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => {
            debug!("No audit_date in input, using today's date");
            Local::now().format("%Y-%m-%d").to_string()
        }
    };

    let options = config.render_options(input.parent());
    debug!("Render options: {:?}", options);

    let html = report::render_report(&document, &audit_date, &options);

    std::fs::write(&output, &html).map_err(|source| ReportError::Write {
        path: output.clone(),
        source,
    })?;
    info!("Wrote {} bytes", html.len());

    if !args.quiet {
        let stats = Aggregates::from_document(&document);
        println!("📊 Audit Summary:");
        println!("   Site: {}", document.display_name());
        println!(
            "   Pages: {} | Findings: {} ({} critical/high) | Actions: {}",
            stats.total_pages,
            stats.score_distribution.total(),
            stats.urgent_findings,
            document.action_plan.total()
        );
    }
    println!("✅ Report generated: {}", output.display());

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
