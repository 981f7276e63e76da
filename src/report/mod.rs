//! HTML report generation.

pub mod assets;
pub mod html;
pub mod markup;
pub mod style;

pub use html::render_report;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Heading used when none is configured.
pub const DEFAULT_TITLE: &str = "CRO Audit Report";

/// Name credited in the footer by default.
pub const DEFAULT_GENERATOR: &str = "cro-report";

pub const DEFAULT_CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

pub const DEFAULT_FONT_CSS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap";

/// How the analytics panels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Interactive Chart.js charts (default)
    #[default]
    Charts,
    /// Static HTML tables, no external scripts
    Tables,
}

/// Presentation settings resolved from config and CLI.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub style: ReportStyle,
    /// Main heading of the report.
    pub title: String,
    /// Name credited in the footer.
    pub generator: String,
    /// Chart.js bundle loaded by the charts style.
    pub chart_js_url: String,
    /// Web font stylesheet; `None` falls back to system fonts.
    pub font_css_url: Option<String>,
    pub embed_screenshots: bool,
    /// Extra directory for resolving relative screenshot paths.
    pub screenshot_root: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: ReportStyle::Charts,
            title: DEFAULT_TITLE.to_string(),
            generator: DEFAULT_GENERATOR.to_string(),
            chart_js_url: DEFAULT_CHART_JS_URL.to_string(),
            font_css_url: Some(DEFAULT_FONT_CSS_URL.to_string()),
            embed_screenshots: true,
            screenshot_root: None,
        }
    }
}
