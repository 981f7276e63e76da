//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.croreport.toml` files.

use crate::report::{
    RenderOptions, ReportStyle, DEFAULT_CHART_JS_URL, DEFAULT_FONT_CSS_URL, DEFAULT_GENERATOR,
    DEFAULT_TITLE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".croreport.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Report presentation settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "cro_audit_report.html".to_string()
}

/// Report presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Analytics style: "charts" or "tables".
    #[serde(default)]
    pub style: ReportStyle,

    /// Report heading.
    #[serde(default = "default_title")]
    pub title: String,

    /// Name credited in the footer.
    #[serde(default = "default_generator")]
    pub generator: String,

    /// Chart.js bundle URL (charts style only).
    #[serde(default = "default_chart_js_url")]
    pub chart_js_url: String,

    /// Web font stylesheet; empty to use system fonts.
    #[serde(default = "default_font_css_url")]
    pub font_css_url: String,

    /// Embed screenshots as base64 data URIs.
    #[serde(default = "default_true")]
    pub embed_screenshots: bool,

    /// Directory for relative screenshot paths.
    /// Defaults to the input document's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            style: ReportStyle::default(),
            title: default_title(),
            generator: default_generator(),
            chart_js_url: default_chart_js_url(),
            font_css_url: default_font_css_url(),
            embed_screenshots: true,
            screenshot_dir: None,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_generator() -> String {
    DEFAULT_GENERATOR.to_string()
}

fn default_chart_js_url() -> String {
    DEFAULT_CHART_JS_URL.to_string()
}

fn default_font_css_url() -> String {
    DEFAULT_FONT_CSS_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }
        if let Some(style) = args.style {
            self.report.style = style;
        }
        if let Some(ref title) = args.title {
            self.report.title = title.clone();
        }
        if args.no_screenshots {
            self.report.embed_screenshots = false;
        }
    }

    /// Build renderer options.
    ///
    /// `input_dir` is the screenshot root when none is configured.
    pub fn render_options(&self, input_dir: Option<&Path>) -> RenderOptions {
        let font_css_url = Some(self.report.font_css_url.trim())
            .filter(|url| !url.is_empty())
            .map(String::from);

        RenderOptions {
            style: self.report.style,
            title: self.report.title.clone(),
            generator: self.report.generator.clone(),
            chart_js_url: self.report.chart_js_url.clone(),
            font_css_url,
            embed_screenshots: self.report.embed_screenshots,
            screenshot_root: self
                .report
                .screenshot_dir
                .clone()
                .or_else(|| input_dir.map(Path::to_path_buf)),
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.output, "cro_audit_report.html");
        assert_eq!(config.report.style, ReportStyle::Charts);
        assert!(config.report.embed_screenshots);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output = "audit.html"

[report]
style = "tables"
title = "Checkout Review"
font_css_url = ""
screenshot_dir = "shots"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output, "audit.html");
        assert_eq!(config.report.style, ReportStyle::Tables);
        assert_eq!(config.report.title, "Checkout Review");
        assert_eq!(config.report.generator, "cro-report");

        let options = config.render_options(Some(Path::new("/data")));
        assert_eq!(options.font_css_url, None);
        assert_eq!(options.screenshot_root, Some(PathBuf::from("shots")));
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config: Config = toml::from_str("[report]\nstyle = \"tables\"\n").unwrap();
        let args = Args::parse_from([
            "cro-report",
            "--input",
            "audit.json",
            "--style",
            "charts",
            "--title",
            "Q3 Audit",
            "--no-screenshots",
            "-o",
            "out.html",
        ]);

        config.merge_with_args(&args);
        assert_eq!(config.report.style, ReportStyle::Charts);
        assert_eq!(config.report.title, "Q3 Audit");
        assert!(!config.report.embed_screenshots);
        assert_eq!(config.general.output, "out.html");

        let options = config.render_options(Some(Path::new("/data")));
        assert_eq!(options.screenshot_root, Some(PathBuf::from("/data")));
        assert!(options.font_css_url.is_some());
    }

    #[test]
    fn test_default_config_matches_default_render_options() {
        let options = Config::default().render_options(None);
        let defaults = RenderOptions::default();

        assert_eq!(options.style, defaults.style);
        assert_eq!(options.title, defaults.title);
        assert_eq!(options.generator, defaults.generator);
        assert_eq!(options.chart_js_url, defaults.chart_js_url);
        assert_eq!(options.font_css_url, defaults.font_css_url);
        assert_eq!(options.embed_screenshots, defaults.embed_screenshots);
        assert_eq!(options.screenshot_root, defaults.screenshot_root);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("style = \"charts\""));

        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.report.title, "CRO Audit Report");
    }
}
