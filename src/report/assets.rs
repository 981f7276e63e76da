//! Presentation lookups and inline assets.
//!
//! Score bands, screenshot embedding and the small SVG widgets used across
//! the report. Priority and lens lookups live on their model types.

use crate::analysis::PriorityDistribution;
use crate::models::Priority;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Five-step quality ramp for 1-5 scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Acceptable,
    NeedsWork,
    Critical,
}

impl ScoreBand {
    /// Band for a score: >=4.5, >=3.5, >=2.5, >=1.5, else critical.
    pub fn of(score: f64) -> Self {
        if score >= 4.5 {
            ScoreBand::Excellent
        } else if score >= 3.5 {
            ScoreBand::Good
        } else if score >= 2.5 {
            ScoreBand::Acceptable
        } else if score >= 1.5 {
            ScoreBand::NeedsWork
        } else {
            ScoreBand::Critical
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#16a34a",
            ScoreBand::Good => "#65a30d",
            ScoreBand::Acceptable => "#ca8a04",
            ScoreBand::NeedsWork => "#ea580c",
            ScoreBand::Critical => "#dc2626",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Acceptable => "Acceptable",
            ScoreBand::NeedsWork => "Needs Work",
            ScoreBand::Critical => "Critical",
        }
    }
}

pub fn score_color(score: f64) -> &'static str {
    ScoreBand::of(score).color()
}

pub fn score_label(score: f64) -> &'static str {
    ScoreBand::of(score).label()
}

/// Format a finding score the way auditors write it: `3`, `3.5`.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        let s = format!("{:.2}", score);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Embed a local image as a `data:` URI.
///
/// Relative paths are tried as given, then under `root`. Returns an empty
/// string when the path is blank or no readable file is found.
pub fn encode_image(path: &str, root: Option<&Path>) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }

    let given = PathBuf::from(path);
    let mut candidates = vec![given.clone()];
    if given.is_relative() {
        if let Some(root) = root {
            candidates.push(root.join(&given));
        }
    }

    for candidate in &candidates {
        match std::fs::read(candidate) {
            Ok(bytes) => {
                debug!("Embedding screenshot {} ({} bytes)", candidate.display(), bytes.len());
                return format!(
                    "data:{};base64,{}",
                    image_mime(candidate),
                    BASE64_STANDARD.encode(bytes)
                );
            }
            Err(e) => debug!("Screenshot {} not readable: {}", candidate.display(), e),
        }
    }

    String::new()
}

fn image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "image/png",
    }
}

/// Circular gauge with the score printed in the middle.
///
/// `light_track` is for white backgrounds; the default suits the dark header.
pub fn svg_score_gauge(score: f64, size: u32, light_track: bool) -> String {
    let size_f = f64::from(size);
    let stroke = (size_f * 0.09).max(4.0);
    let center = size_f / 2.0;
    let radius = (size_f - stroke) / 2.0;
    let circumference = 2.0 * PI * radius;
    let offset = circumference * (1.0 - (score / 5.0).clamp(0.0, 1.0));
    let (track, text) = if light_track {
        ("#e5e7eb", "#0f172a")
    } else {
        ("rgba(255,255,255,0.15)", "#ffffff")
    };

    format!(
        concat!(
            r#"<svg class="score-gauge" width="{size}" height="{size}" viewBox="0 0 {size} {size}" role="img" aria-label="Score {score:.1} out of 5">"#,
            r#"<circle cx="{c:.2}" cy="{c:.2}" r="{r:.2}" fill="none" stroke="{track}" stroke-width="{sw:.2}"/>"#,
            r#"<circle class="gauge-arc" cx="{c:.2}" cy="{c:.2}" r="{r:.2}" fill="none" stroke="{color}" stroke-width="{sw:.2}" stroke-linecap="round" stroke-dasharray="{circ:.2}" stroke-dashoffset="{off:.2}" transform="rotate(-90 {c:.2} {c:.2})" style="--gauge-circumference:{circ:.2}"/>"#,
            r#"<text x="{c:.2}" y="{c:.2}" text-anchor="middle" dominant-baseline="central" font-size="{fs:.1}" font-weight="700" fill="{text}">{score:.1}</text>"#,
            "</svg>"
        ),
        size = size,
        score = score,
        c = center,
        r = radius,
        track = track,
        sw = stroke,
        color = score_color(score),
        circ = circumference,
        off = offset,
        fs = size_f * 0.26,
        text = text,
    )
}

/// Small progress ring used in the page navigation.
pub fn svg_score_ring(score: f64, size: u32) -> String {
    let size_f = f64::from(size);
    let stroke = (size_f * 0.15).max(2.0);
    let center = size_f / 2.0;
    let radius = (size_f - stroke) / 2.0;
    let circumference = 2.0 * PI * radius;
    let filled = circumference * (score / 5.0).clamp(0.0, 1.0);

    format!(
        concat!(
            r#"<svg class="score-ring" width="{size}" height="{size}" viewBox="0 0 {size} {size}" aria-hidden="true">"#,
            r##"<circle cx="{c:.2}" cy="{c:.2}" r="{r:.2}" fill="none" stroke="#e5e7eb" stroke-width="{sw:.2}"/>"##,
            r#"<circle cx="{c:.2}" cy="{c:.2}" r="{r:.2}" fill="none" stroke="{color}" stroke-width="{sw:.2}" stroke-dasharray="{filled:.2} {circ:.2}" transform="rotate(-90 {c:.2} {c:.2})"/>"#,
            "</svg>"
        ),
        size = size,
        c = center,
        r = radius,
        sw = stroke,
        color = score_color(score),
        filled = filled,
        circ = circumference,
    )
}

/// Horizontal 0-5 bar.
pub fn svg_score_bar(score: f64, width: u32) -> String {
    let width_f = f64::from(width);
    let filled = width_f * (score / 5.0).clamp(0.0, 1.0);

    format!(
        concat!(
            r#"<svg class="score-bar" width="{w}" height="6" viewBox="0 0 {w} 6" aria-hidden="true">"#,
            r##"<rect width="{w}" height="6" rx="3" fill="#e5e7eb"/>"##,
            r#"<rect width="{filled:.2}" height="6" rx="3" fill="{color}"/>"#,
            "</svg>"
        ),
        w = width,
        filled = filled,
        color = score_color(score),
    )
}

/// Donut of findings per priority tier, with a legend.
pub fn svg_priority_donut(distribution: &PriorityDistribution, size: u32) -> String {
    let size_f = f64::from(size);
    let stroke = size_f * 0.16;
    let center = size_f / 2.0;
    let radius = (size_f - stroke) / 2.0;
    let circumference = 2.0 * PI * radius;
    let total = distribution.total();

    let mut svg = format!(
        concat!(
            r#"<svg class="priority-donut" width="{size}" height="{size}" viewBox="0 0 {size} {size}" role="img" aria-label="{total} findings by priority">"#,
            r##"<circle cx="{c:.2}" cy="{c:.2}" r="{r:.2}" fill="none" stroke="#f3f4f6" stroke-width="{sw:.2}"/>"##
        ),
        size = size,
        total = total,
        c = center,
        r = radius,
        sw = stroke,
    );

    if total > 0 {
        let mut start = 0.0;
        for (priority, count) in distribution.iter().filter(|(_, count)| *count > 0) {
            let length = circumference * count as f64 / total as f64;
            svg.push_str(&format!(
                r#"<circle cx="{c:.2}" cy="{c:.2}" r="{r:.2}" fill="none" stroke="{color}" stroke-width="{sw:.2}" stroke-dasharray="{len:.2} {rest:.2}" stroke-dashoffset="{off:.2}" transform="rotate(-90 {c:.2} {c:.2})"/>"#,
                c = center,
                r = radius,
                color = priority.color(),
                sw = stroke,
                len = length,
                rest = circumference - length,
                off = 0.0 - start,
            ));
            start += length;
        }
    }

    svg.push_str(&format!(
        r##"<text x="{c:.2}" y="{c:.2}" text-anchor="middle" dominant-baseline="central" font-size="{fs:.1}" font-weight="700" fill="#0f172a">{total}</text></svg>"##,
        c = center,
        fs = size_f * 0.2,
        total = total,
    ));

    let mut legend = String::from(r#"<div class="donut-legend">"#);
    for priority in Priority::ALL {
        legend.push_str(&format!(
            r#"<div class="legend-row"><span class="legend-swatch" style="background:{}"></span>{} &middot; {}<span class="legend-count">{}</span></div>"#,
            priority.color(),
            priority.as_str(),
            priority.label(),
            distribution.get(priority),
        ));
    }
    legend.push_str("</div>");

    svg + &legend
}
