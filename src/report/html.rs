//! HTML report rendering.
//!
//! This module turns an audit document and its aggregates into a single
//! self-contained HTML page. Rendering is pure apart from reading screenshot
//! files: the same input always produces the same bytes.

use super::assets::{
    encode_image, format_score, score_color, score_label, svg_priority_donut, svg_score_bar,
    svg_score_gauge, svg_score_ring, ScoreBand,
};
use super::markup::{escape, safe_url, script_json, unique_anchors};
use super::style::{CHART_SCRIPT, CSS, NAV_SCRIPT};
use super::{RenderOptions, ReportStyle};
use crate::analysis::Aggregates;
use crate::models::{
    ActionItem, AuditDocument, CrossCuttingIssue, Finding, Lens, Page, Tier, TopFinding,
};
use serde_json::json;

/// Maximum number of headline findings shown.
pub const TOP_FINDINGS_LIMIT: usize = 5;

/// Render the complete report.
///
/// `audit_date` is the date printed in the header; callers substitute today
/// when the document has none.
pub fn render_report(doc: &AuditDocument, audit_date: &str, options: &RenderOptions) -> String {
    let aggregates = Aggregates::from_document(doc);
    let labels: Vec<String> = doc
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| page.label(i))
        .collect();
    let anchors = unique_anchors(&labels);

    let mut output = String::new();

    output.push_str(&generate_head(doc, options));
    output.push_str("<body>\n<div class=\"container\">\n");
    output.push_str(&generate_header(doc, audit_date, &aggregates, options));
    output.push_str(&generate_executive_summary(&doc.executive_summary));
    output.push_str(&generate_analytics(doc, &labels, &aggregates, options.style));
    output.push_str(&generate_top_findings(&doc.top_findings));
    output.push_str(&generate_page_nav(&doc.pages, &labels, &anchors));

    for (i, page) in doc.pages.iter().enumerate() {
        output.push_str(&generate_page_section(page, &labels[i], &anchors[i], options));
    }

    output.push_str(&generate_cross_cutting(&doc.cross_cutting_issues));
    output.push_str(&generate_action_plan(doc));
    output.push_str(&generate_footer(&options.generator));
    output.push_str("</div>\n");
    output.push_str(&generate_scripts(options.style));
    output.push_str("</body>\n</html>\n");

    output
}

/// Document head: metadata, fonts, chart library and stylesheet.
fn generate_head(doc: &AuditDocument, options: &RenderOptions) -> String {
    let mut head = String::new();

    head.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    head.push_str("<meta charset=\"UTF-8\">\n");
    head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    head.push_str(&format!(
        "<title>{} &mdash; {}</title>\n",
        escape(&options.title),
        escape(doc.display_name())
    ));

    if let Some(ref font_url) = options.font_css_url {
        head.push_str("<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n");
        head.push_str(&format!(
            "<link href=\"{}\" rel=\"stylesheet\">\n",
            safe_url(font_url)
        ));
    }

    if options.style == ReportStyle::Charts {
        head.push_str(&format!(
            "<script src=\"{}\"></script>\n",
            safe_url(&options.chart_js_url)
        ));
    }

    head.push_str("<style>");
    head.push_str(CSS);
    head.push_str("</style>\n</head>\n");

    head
}

/// Header with the overall score gauge and headline counts.
fn generate_header(
    doc: &AuditDocument,
    audit_date: &str,
    aggregates: &Aggregates,
    options: &RenderOptions,
) -> String {
    let mut meta = vec![escape(doc.display_name())];
    if !doc.site_url.trim().is_empty() {
        meta.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            safe_url(&doc.site_url),
            escape(doc.site_url.trim())
        ));
    }
    meta.push(escape(doc.display_platform()));
    meta.push(escape(audit_date));

    let mut header = String::new();

    header.push_str("<div class=\"header-accent\"></div>\n<header>\n<div class=\"header-inner\">\n");
    header.push_str(&format!(
        "<div class=\"header-gauge\">{}</div>\n",
        svg_score_gauge(doc.overall_score, 130, false)
    ));
    header.push_str("<div class=\"header-info\">\n");
    header.push_str(&format!("<h1>{}</h1>\n", escape(&options.title)));
    header.push_str(&format!(
        "<div class=\"header-meta\">{}</div>\n",
        meta.join(" &bull; ")
    ));
    header.push_str("<div class=\"header-stats\">\n");
    for (value, label) in [
        (aggregates.total_pages, "Pages"),
        (aggregates.total_findings, "Findings"),
        (aggregates.urgent_findings, "Critical/High"),
    ] {
        header.push_str(&format!(
            "<div class=\"header-stat\"><span class=\"stat-value\">{}</span><span class=\"stat-label\">{}</span></div>\n",
            value, label
        ));
    }
    header.push_str("</div>\n</div>\n</div>\n</header>\n");

    header
}

fn generate_executive_summary(summary: &str) -> String {
    if summary.trim().is_empty() {
        return String::new();
    }

    format!(
        "<div class=\"section-card executive-summary animate-in\">\n<div class=\"section-title\">Executive Summary</div>\n<p>{}</p>\n</div>\n",
        escape(summary.trim())
    )
}

/// The four analytics panels, drawn according to the report style.
fn generate_analytics(
    doc: &AuditDocument,
    labels: &[String],
    aggregates: &Aggregates,
    style: ReportStyle,
) -> String {
    let (page_panel, lens_panel, score_panel) = match style {
        ReportStyle::Charts => (
            "<div class=\"chart-wrapper\"><canvas id=\"chartPageScores\"></canvas></div>".to_string(),
            "<div class=\"chart-wrapper\"><canvas id=\"chartLensRadar\"></canvas></div>".to_string(),
            "<div class=\"chart-wrapper\"><canvas id=\"chartScoreDist\"></canvas></div>".to_string(),
        ),
        ReportStyle::Tables => (
            page_scores_table(&doc.pages, labels),
            lens_table(aggregates),
            score_distribution_table(aggregates),
        ),
    };

    let mut section = String::new();

    section.push_str("<div class=\"analytics-grid\">\n");
    section.push_str(&chart_card(
        "Page Scores",
        "Conversion optimization score per page type",
        &page_panel,
    ));
    section.push_str(&chart_card(
        "LIFT Lens Analysis",
        "Average score across the 6 optimization lenses",
        &lens_panel,
    ));
    section.push_str(&chart_card(
        "Score Distribution",
        "How findings spread across 1-5 severity levels",
        &score_panel,
    ));
    section.push_str(&chart_card(
        "Priority Breakdown",
        "Findings by priority level (P0-P3)",
        &format!(
            "<div class=\"donut-wrapper\">{}</div>",
            svg_priority_donut(&aggregates.priority_distribution, 120)
        ),
    ));
    section.push_str("</div>\n");

    if style == ReportStyle::Charts {
        section.push_str(&format!(
            "<script id=\"report_data\" type=\"application/json\">{}</script>\n",
            chart_data(doc, labels, aggregates)
        ));
    }

    section
}

fn chart_card(title: &str, subtitle: &str, body: &str) -> String {
    format!(
        "<div class=\"chart-card animate-in\">\n<h3>{}</h3>\n<p class=\"chart-subtitle\">{}</p>\n{}\n</div>\n",
        title, subtitle, body
    )
}

/// Inline JSON consumed by the chart script.
fn chart_data(doc: &AuditDocument, labels: &[String], aggregates: &Aggregates) -> String {
    let page_scores: Vec<f64> = doc.pages.iter().map(|p| p.page_score).collect();
    let page_colors: Vec<&str> = page_scores.iter().map(|&s| score_color(s)).collect();
    let lens_labels: Vec<&str> = aggregates.lens_averages.iter().map(|(l, _)| l.name()).collect();
    let lens_values: Vec<f64> = aggregates.lens_averages.iter().map(|(_, v)| v).collect();
    let score_labels: Vec<String> = (1..=5u8).map(score_bucket_label).collect();
    let score_counts: Vec<usize> = aggregates.score_distribution.iter().map(|(_, c)| c).collect();
    let score_colors: Vec<&str> = (1..=5u8).map(|s| score_color(f64::from(s))).collect();

    script_json(&json!({
        "pageLabels": labels,
        "pageScores": page_scores,
        "pageColors": page_colors,
        "lensLabels": lens_labels,
        "lensValues": lens_values,
        "scoreLabels": score_labels,
        "scoreCounts": score_counts,
        "scoreColors": score_colors,
    }))
}

fn score_bucket_label(score: u8) -> String {
    format!("{} - {}", score, ScoreBand::of(f64::from(score)).label())
}

fn table_bar(fraction: f64, color: &str) -> String {
    format!(
        "<div class=\"table-bar\"><span style=\"width:{:.1}%;background:{}\"></span></div>",
        fraction.clamp(0.0, 1.0) * 100.0,
        color
    )
}

fn page_scores_table(pages: &[Page], labels: &[String]) -> String {
    if pages.is_empty() {
        return "<p class=\"muted\">No pages audited.</p>".to_string();
    }

    let mut table = String::from(
        "<table class=\"data-table\"><thead><tr><th>Page</th><th></th><th class=\"num\">Score</th></tr></thead><tbody>",
    );
    for (page, label) in pages.iter().zip(labels) {
        let color = score_color(page.page_score);
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"num\" style=\"color:{}\">{:.1}</td></tr>",
            escape(label),
            table_bar(page.page_score / 5.0, color),
            color,
            page.page_score
        ));
    }
    table.push_str("</tbody></table>");

    table
}

fn lens_table(aggregates: &Aggregates) -> String {
    let mut table = String::from(
        "<table class=\"data-table\"><thead><tr><th>Lens</th><th></th><th class=\"num\">Average</th></tr></thead><tbody>",
    );
    for (lens, average) in aggregates.lens_averages.iter() {
        let color = score_color(average);
        table.push_str(&format!(
            "<tr><td>{} {}</td><td>{}</td><td class=\"num\" style=\"color:{}\">{:.2}</td></tr>",
            lens.icon(),
            lens.name(),
            table_bar(average / 5.0, color),
            color,
            average
        ));
    }
    table.push_str("</tbody></table>");

    table
}

fn score_distribution_table(aggregates: &Aggregates) -> String {
    let max = aggregates
        .score_distribution
        .iter()
        .map(|(_, count)| count)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut table = String::from(
        "<table class=\"data-table\"><thead><tr><th>Score</th><th></th><th class=\"num\">Findings</th></tr></thead><tbody>",
    );
    for (score, count) in aggregates.score_distribution.iter() {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td></tr>",
            score_bucket_label(score),
            table_bar(count as f64 / max as f64, score_color(f64::from(score))),
            count
        ));
    }
    table.push_str("</tbody></table>");

    table
}

/// The first [`TOP_FINDINGS_LIMIT`] headline findings, in input order.
fn generate_top_findings(findings: &[TopFinding]) -> String {
    if findings.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("<div class=\"section-card animate-in\">\n<div class=\"section-title\">Top Priority Findings</div>\n");
    for finding in findings.iter().take(TOP_FINDINGS_LIMIT) {
        let color = finding.priority.color();
        section.push_str(&format!(
            "<div class=\"finding-card top-finding\" style=\"border-left-color:{}\">\n",
            color
        ));
        section.push_str(&format!(
            "<div class=\"finding-header\"><span class=\"priority-badge\" style=\"background:{}\">{} &middot; {}</span><strong>{}</strong>{}</div>\n",
            color,
            finding.priority,
            finding.priority.label(),
            escape(&finding.title),
            finding
                .impact
                .map(|impact| tier_tag("Impact", Some(impact), impact_class(Some(impact))))
                .unwrap_or_default()
        ));
        section.push_str(&format!(
            "<p class=\"finding-description\">{}</p>\n</div>\n",
            escape(&finding.description)
        ));
    }
    section.push_str("</div>\n");

    section
}

/// Sticky navigation with one link per page.
fn generate_page_nav(pages: &[Page], labels: &[String], anchors: &[String]) -> String {
    if pages.is_empty() {
        return String::new();
    }

    let mut nav = String::from("<nav class=\"page-nav\">");
    for ((page, label), anchor) in pages.iter().zip(labels).zip(anchors) {
        nav.push_str(&format!(
            "<a href=\"#{anchor}\" class=\"page-nav-link\" data-target=\"{anchor}\">{} {} <span class=\"nav-score\" style=\"color:{}\">{:.1}</span></a>",
            svg_score_ring(page.page_score, 20),
            escape(label),
            score_color(page.page_score),
            page.page_score,
            anchor = anchor,
        ));
    }
    nav.push_str("</nav>\n");

    nav
}

/// One page: gauge, URL, screenshots and findings.
fn generate_page_section(page: &Page, label: &str, anchor: &str, options: &RenderOptions) -> String {
    let mut section = String::new();

    section.push_str(&format!(
        "<section id=\"{}\" class=\"page-section animate-in\">\n",
        anchor
    ));
    section.push_str(&format!(
        "<div class=\"page-header\"><h2>{}</h2>{}</div>\n",
        escape(label),
        svg_score_gauge(page.page_score, 70, true)
    ));
    if !page.url.trim().is_empty() {
        section.push_str(&format!(
            "<p class=\"page-url\"><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></p>\n",
            safe_url(&page.url),
            escape(page.url.trim())
        ));
    }
    section.push_str(&generate_screenshots(page, label, anchor, options));

    section.push_str("<div class=\"section-title\" style=\"margin-top:1.5rem;\">Findings</div>\n");
    section.push_str("<div class=\"findings-list\">\n");
    if page.findings.is_empty() {
        section.push_str("<p class=\"muted\">No findings for this page.</p>\n");
    }
    for finding in &page.findings {
        section.push_str(&generate_finding_item(finding));
    }
    section.push_str("</div>\n</section>\n");

    section
}

/// Desktop/mobile screenshots: tabs when both exist, a lone panel otherwise.
fn generate_screenshots(page: &Page, label: &str, anchor: &str, options: &RenderOptions) -> String {
    if !options.embed_screenshots {
        return String::new();
    }

    let root = options.screenshot_root.as_deref();
    let load = |path: &Option<String>| {
        path.as_deref()
            .map(|p| encode_image(p, root))
            .unwrap_or_default()
    };
    let desktop = load(&page.desktop_screenshot_path);
    let mobile = load(&page.mobile_screenshot_path);

    let mut panels: Vec<(&str, &str, String)> = Vec::new();
    if !desktop.is_empty() {
        panels.push((
            "desktop",
            "Desktop",
            format!(
                "<div class=\"device-frame\"><div class=\"device-chrome\"><span class=\"device-dot red\"></span><span class=\"device-dot yellow\"></span><span class=\"device-dot green\"></span></div><img src=\"{}\" alt=\"{} desktop view\" loading=\"lazy\"></div>",
                desktop,
                escape(label)
            ),
        ));
    }
    if !mobile.is_empty() {
        panels.push((
            "mobile",
            "Mobile",
            format!(
                "<div class=\"device-frame mobile\"><div class=\"device-chrome\"></div><img src=\"{}\" alt=\"{} mobile view\" loading=\"lazy\"></div>",
                mobile,
                escape(label)
            ),
        ));
    }

    if panels.is_empty() {
        return String::new();
    }

    let mut html = String::new();

    if panels.len() > 1 {
        html.push_str("<div class=\"screenshot-tabs\">");
        for (i, (kind, name, _)) in panels.iter().enumerate() {
            html.push_str(&format!(
                "<button class=\"screenshot-tab{}\" onclick=\"switchScreenshot(this, 'shot_{}_{}')\">{}</button>",
                if i == 0 { " active" } else { "" },
                anchor,
                kind,
                name
            ));
        }
        html.push_str("</div>\n");
    }

    for (i, (kind, _, frame)) in panels.iter().enumerate() {
        html.push_str(&format!(
            "<div id=\"shot_{}_{}\" class=\"screenshot-panel{}\">{}</div>\n",
            anchor,
            kind,
            if i == 0 { " active" } else { "" },
            frame
        ));
    }

    html
}

fn generate_finding_item(finding: &Finding) -> String {
    let score = finding.score_value();
    let color = finding.priority.color();
    let criterion = [finding.criterion_id.trim(), finding.criterion_name.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| escape(part))
        .collect::<Vec<_>>()
        .join(" &mdash; ");
    let lens = finding
        .lens
        .map(|lens| format!("{} {}", lens.icon(), lens.name()))
        .unwrap_or_default();

    let mut item = String::new();

    item.push_str(&format!(
        "<div class=\"finding-item\" style=\"border-left-color:{}\">\n",
        color
    ));
    item.push_str("<div class=\"finding-item-header\">");
    item.push_str(&format!(
        "<div class=\"finding-score-wrap\">{}<span class=\"finding-score-num\" style=\"color:{}\" title=\"{}\">{}</span></div>",
        svg_score_bar(score, 60),
        score_color(score),
        score_label(score),
        format_score(score)
    ));
    item.push_str(&format!("<span class=\"finding-criterion\">{}</span>", criterion));
    item.push_str(&format!(
        "<span class=\"finding-lens\" data-lens=\"{}\">{}</span>",
        finding.lens.map(Lens::as_str).unwrap_or("none"),
        lens
    ));
    item.push_str(&format!(
        "<span class=\"priority-badge badge-end\" style=\"background:{}\">{}</span>",
        color, finding.priority
    ));
    item.push_str("</div>\n");
    item.push_str(&format!(
        "<div class=\"finding-issue\">{}</div>\n",
        escape(&finding.issue)
    ));
    item.push_str(&format!(
        "<div class=\"finding-rec\"><strong>Recommendation:</strong> {}</div>\n",
        escape(&finding.recommendation)
    ));
    item.push_str("</div>\n");

    item
}

fn generate_cross_cutting(issues: &[CrossCuttingIssue]) -> String {
    if issues.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("<div class=\"section-card animate-in\">\n<div class=\"section-title\">Cross-Cutting Issues</div>\n");
    for issue in issues {
        let color = issue.priority.color();
        let affected = issue
            .affected_pages
            .iter()
            .map(|p| escape(p))
            .collect::<Vec<_>>()
            .join(", ");
        section.push_str(&format!(
            "<div class=\"finding-card\" style=\"border-left-color:{}\">\n",
            color
        ));
        section.push_str(&format!(
            "<div class=\"finding-header\"><span class=\"priority-badge\" style=\"background:{}\">{}</span><strong>{}</strong><span class=\"affected-pages\">Affects: {}</span></div>\n",
            color,
            issue.priority,
            escape(&issue.title),
            affected
        ));
        section.push_str(&format!(
            "<p class=\"finding-description\">{}</p>\n</div>\n",
            escape(&issue.description)
        ));
    }
    section.push_str("</div>\n");

    section
}

/// The three action plan buckets, each always present.
fn generate_action_plan(doc: &AuditDocument) -> String {
    let plan = &doc.action_plan;
    let buckets: [(&str, &str, &str, &[ActionItem]); 3] = [
        ("&#9889; Quick Wins", "&mdash; High Impact, Low Effort", "#22c55e", &plan.quick_wins),
        ("&#128736; Medium-Term Improvements", "", "#3b82f6", &plan.medium_term),
        ("&#127919; Strategic Initiatives", "&mdash; High Impact, High Effort", "#8b5cf6", &plan.strategic),
    ];

    let mut section = String::new();

    section.push_str("<div class=\"section-card animate-in\">\n<div class=\"section-title\">Prioritized Action Plan</div>\n");
    for (title, hint, border, items) in buckets {
        section.push_str(&format!("<div class=\"action-section-title\">{}", title));
        if !hint.is_empty() {
            section.push_str(&format!(" <span class=\"action-hint\">{}</span>", hint));
        }
        section.push_str("</div>\n");
        section.push_str(&generate_action_list(items, border));
    }
    section.push_str("</div>\n");

    section
}

fn generate_action_list(items: &[ActionItem], border: &str) -> String {
    if items.is_empty() {
        return "<p class=\"muted\">None identified.</p>\n".to_string();
    }

    let mut list = String::from("<div class=\"action-list\">\n");
    for item in items {
        list.push_str(&format!(
            "<div class=\"action-item\" style=\"border-left-color:{}\"><div class=\"action-text\">{}</div><span class=\"action-page\">{}</span>{}{}</div>\n",
            border,
            escape(&item.action),
            escape(&item.page),
            tier_tag("Impact", item.impact, impact_class(item.impact)),
            tier_tag("Effort", item.effort, effort_class(item.effort)),
        ));
    }
    list.push_str("</div>\n");

    list
}

/// High impact is good news.
fn impact_class(tier: Option<Tier>) -> &'static str {
    match tier {
        Some(Tier::High) => "tag-good",
        Some(Tier::Medium) => "tag-fair",
        _ => "tag-poor",
    }
}

/// Low effort is good news.
fn effort_class(tier: Option<Tier>) -> &'static str {
    match tier {
        Some(Tier::Low) => "tag-good",
        Some(Tier::Medium) => "tag-fair",
        _ => "tag-poor",
    }
}

fn tier_tag(kind: &str, tier: Option<Tier>, class: &str) -> String {
    format!(
        "<span class=\"action-tag {}\">{}: {}</span>",
        class,
        kind,
        tier.map(Tier::as_str).unwrap_or("n/a")
    )
}

fn generate_footer(generator: &str) -> String {
    format!(
        "<footer>\n<p>Generated by <strong>{}</strong> &bull; LIFT Model + Baymard Heuristics &bull; 1-5 Scoring</p>\n<p>Scores reflect UX/CRO analysis at time of audit. Results may vary with traffic source, user segment, and device.</p>\n</footer>\n",
        escape(generator)
    )
}

fn generate_scripts(style: ReportStyle) -> String {
    let mut scripts = String::from("<script>");
    scripts.push_str(NAV_SCRIPT);
    if style == ReportStyle::Charts {
        scripts.push_str(CHART_SCRIPT);
    }
    scripts.push_str("</script>\n");

    scripts
}
