//! Data models for CRO audit documents.
//!
//! This module contains the typed schema of the audit JSON consumed by the
//! report generator. Every field is optional on the wire: absent and `null`
//! values decode to the documented defaults so that a partially filled
//! audit still renders.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Priority tier of a finding or issue, P0 being the most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "Option<Value>")]
pub enum Priority {
    /// Critical - blocks conversions, fix immediately
    P0,
    /// High - significant conversion loss
    P1,
    /// Medium - the default for unknown or missing tiers
    #[default]
    P2,
    /// Low - polish
    P3,
}

impl Priority {
    /// All tiers, most severe first.
    pub const ALL: [Priority; 4] = [Priority::P0, Priority::P1, Priority::P2, Priority::P3];

    /// Parse a tier such as `"P1"` or `"p1"`; anything else is P2.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "P0" => Priority::P0,
            "P1" => Priority::P1,
            "P3" => Priority::P3,
            _ => Priority::P2,
        }
    }

    /// Position in [`Priority::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }

    /// Human readable severity label.
    pub fn label(self) -> &'static str {
        match self {
            Priority::P0 => "Critical",
            Priority::P1 => "High",
            Priority::P2 => "Medium",
            Priority::P3 => "Low",
        }
    }

    /// Badge color.
    pub fn color(self) -> &'static str {
        match self {
            Priority::P0 => "#dc2626",
            Priority::P1 => "#ea580c",
            Priority::P2 => "#ca8a04",
            Priority::P3 => "#64748b",
        }
    }

    /// Whether the tier counts towards the header's critical/high total.
    pub fn is_urgent(self) -> bool {
        matches!(self, Priority::P0 | Priority::P1)
    }
}

impl From<Option<Value>> for Priority {
    fn from(value: Option<Value>) -> Self {
        value
            .as_ref()
            .and_then(Value::as_str)
            .map(Priority::parse)
            .unwrap_or_default()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the six LIFT evaluation lenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lens {
    Clarity,
    Relevance,
    Friction,
    Anxiety,
    Urgency,
    Technical,
}

impl Lens {
    /// Canonical display order.
    pub const ALL: [Lens; 6] = [
        Lens::Clarity,
        Lens::Relevance,
        Lens::Friction,
        Lens::Anxiety,
        Lens::Urgency,
        Lens::Technical,
    ];

    /// Case-insensitive lookup; unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clarity" => Some(Lens::Clarity),
            "relevance" => Some(Lens::Relevance),
            "friction" => Some(Lens::Friction),
            "anxiety" => Some(Lens::Anxiety),
            "urgency" => Some(Lens::Urgency),
            "technical" => Some(Lens::Technical),
            _ => None,
        }
    }

    /// Position in [`Lens::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lens::Clarity => "clarity",
            Lens::Relevance => "relevance",
            Lens::Friction => "friction",
            Lens::Anxiety => "anxiety",
            Lens::Urgency => "urgency",
            Lens::Technical => "technical",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Lens::Clarity => "Clarity",
            Lens::Relevance => "Relevance",
            Lens::Friction => "Friction",
            Lens::Anxiety => "Anxiety",
            Lens::Urgency => "Urgency",
            Lens::Technical => "Technical",
        }
    }

    /// Glyph shown next to the lens name.
    pub fn icon(self) -> &'static str {
        match self {
            Lens::Clarity => "🔍",
            Lens::Relevance => "🎯",
            Lens::Friction => "⚙️",
            Lens::Anxiety => "😟",
            Lens::Urgency => "⏱️",
            Lens::Technical => "🛠️",
        }
    }
}

impl fmt::Display for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Impact or effort estimate attached to actions and top findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Tier::High),
            "medium" => Some(Tier::Medium),
            "low" => Some(Tier::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete audit document as produced by the auditing step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub site_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub site_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    /// Audit date as written by the auditor; the caller supplies today's
    /// date when absent.
    #[serde(default)]
    pub audit_date: Option<String>,
    /// Overall score on the 0-5 scale.
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub executive_summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_findings: Vec<TopFinding>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: Vec<Page>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cross_cutting_issues: Vec<CrossCuttingIssue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action_plan: ActionPlan,
}

impl AuditDocument {
    /// Read and decode an audit document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Display name of the audited site: `site_name`, then `site_url`, then "Unknown".
    pub fn display_name(&self) -> &str {
        non_empty(&self.site_name)
            .or_else(|| non_empty(&self.site_url))
            .unwrap_or("Unknown")
    }

    /// Platform, or "Unknown" when not recorded.
    pub fn display_platform(&self) -> &str {
        non_empty(&self.platform).unwrap_or("Unknown")
    }

    /// Iterate over every finding on every page, in document order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.pages.iter().flat_map(|p| p.findings.iter())
    }
}

/// Headline finding shown near the top of the report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopFinding {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient_tier")]
    pub impact: Option<Tier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// One audited page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_score: f64,
    #[serde(default)]
    pub desktop_screenshot_path: Option<String>,
    #[serde(default)]
    pub mobile_screenshot_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub findings: Vec<Finding>,
}

impl Page {
    /// Page type, or `"Page N"` (1-based) when unnamed.
    pub fn label(&self, index: usize) -> String {
        match non_empty(&self.page_type) {
            Some(name) => name.to_string(),
            None => format!("Page {}", index + 1),
        }
    }
}

/// A single scored observation against an audit criterion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Finding {
    #[serde(default, deserialize_with = "null_as_default")]
    pub criterion_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub criterion_name: String,
    /// Score on the 1-5 scale.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendation: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient_lens")]
    pub lens: Option<Lens>,
}

impl Finding {
    /// Score used for averages and display; a missing score counts as 0.
    pub fn score_value(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// An issue spanning several pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrossCuttingIssue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub affected_pages: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
}

/// Recommended actions grouped by impact and effort.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionPlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub quick_wins: Vec<ActionItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium_term: Vec<ActionItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strategic: Vec<ActionItem>,
}

impl ActionPlan {
    pub fn total(&self) -> usize {
        self.quick_wins.len() + self.medium_term.len() + self.strategic.len()
    }
}

/// A single recommended action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: String,
    #[serde(default, deserialize_with = "lenient_tier")]
    pub impact: Option<Tier>,
    #[serde(default, deserialize_with = "lenient_tier")]
    pub effort: Option<Tier>,
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lens names that are not strings or not recognised decode as no lens.
fn lenient_lens<'de, D>(deserializer: D) -> std::result::Result<Option<Lens>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Lens::parse))
}

fn lenient_tier<'de, D>(deserializer: D) -> std::result::Result<Option<Tier>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Tier::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::P0 < Priority::P1);
        assert!(Priority::P1 < Priority::P2);
        assert!(Priority::P2 < Priority::P3);
    }

    #[test]
    fn test_priority_parse_defaults_to_p2() {
        assert_eq!(Priority::parse("P0"), Priority::P0);
        assert_eq!(Priority::parse(" p3 "), Priority::P3);
        assert_eq!(Priority::parse("P7"), Priority::P2);
        assert_eq!(Priority::parse(""), Priority::P2);
        assert_eq!(Priority::from(None::<Value>), Priority::P2);
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::P0.label(), "Critical");
        assert_eq!(Priority::P3.label(), "Low");
        assert!(Priority::P1.is_urgent());
        assert!(!Priority::P2.is_urgent());
    }

    #[test]
    fn test_lens_parse() {
        assert_eq!(Lens::parse("Clarity"), Some(Lens::Clarity));
        assert_eq!(Lens::parse("TECHNICAL"), Some(Lens::Technical));
        assert_eq!(Lens::parse("delight"), None);
        assert_eq!(Lens::ALL[Lens::Anxiety.index()], Lens::Anxiety);
    }

    #[test]
    fn test_decode_with_missing_and_null_fields() {
        let json = r#"{
            "site_url": "https://shop.example",
            "platform": null,
            "overall_score": null,
            "top_findings": [{"title": "Slow hero", "priority": "P9", "impact": "HIGH"}],
            "pages": [{
                "url": "https://shop.example/",
                "findings": [
                    {"criterion_id": "H1", "score": 2, "priority": "p0", "lens": "Friction"},
                    {"criterion_id": "H2", "lens": "vibes", "issue": null}
                ]
            }],
            "action_plan": {"quick_wins": [{"action": "Compress images", "effort": "tiny"}]}
        }"#;

        let doc: AuditDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.display_name(), "https://shop.example");
        assert_eq!(doc.display_platform(), "Unknown");
        assert_eq!(doc.overall_score, 0.0);
        assert!(doc.audit_date.is_none());

        assert_eq!(doc.top_findings[0].priority, Priority::P2);
        assert_eq!(doc.top_findings[0].impact, Some(Tier::High));

        let page = &doc.pages[0];
        assert_eq!(page.label(0), "Page 1");
        assert_eq!(page.findings[0].priority, Priority::P0);
        assert_eq!(page.findings[0].lens, Some(Lens::Friction));
        assert_eq!(page.findings[1].lens, None);
        assert_eq!(page.findings[1].priority, Priority::P2);
        assert_eq!(page.findings[1].score_value(), 0.0);
        assert_eq!(page.findings[1].issue, "");

        assert_eq!(doc.action_plan.quick_wins[0].effort, None);
        assert_eq!(doc.action_plan.total(), 1);
        assert!(doc.cross_cutting_issues.is_empty());
    }

    #[test]
    fn test_decode_non_string_tiers_and_lenses() {
        let json = r#"{
            "top_findings": [{"title": "Hero", "priority": 0, "impact": 3}],
            "pages": [{"findings": [
                {"score": 3, "priority": 1, "lens": "clarity"},
                {"score": 4, "priority": "P1", "lens": 7},
                {"score": 2, "priority": ["P0"], "lens": {"name": "urgency"}}
            ]}],
            "cross_cutting_issues": [{"title": "Trust", "priority": false}],
            "action_plan": {"strategic": [{"action": "Rebuild", "impact": 3, "effort": "high"}]}
        }"#;

        let doc: AuditDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.top_findings[0].priority, Priority::P2);
        assert_eq!(doc.top_findings[0].impact, None);

        let findings = &doc.pages[0].findings;
        assert_eq!(findings[0].priority, Priority::P2);
        assert_eq!(findings[0].lens, Some(Lens::Clarity));
        assert_eq!(findings[1].priority, Priority::P1);
        assert_eq!(findings[1].lens, None);
        assert_eq!(findings[2].priority, Priority::P2);
        assert_eq!(findings[2].lens, None);

        assert_eq!(doc.cross_cutting_issues[0].priority, Priority::P2);
        assert_eq!(doc.action_plan.strategic[0].impact, None);
        assert_eq!(doc.action_plan.strategic[0].effort, Some(Tier::High));
    }

    #[test]
    fn test_display_name_prefers_site_name() {
        let doc = AuditDocument {
            site_name: "Example Store".to_string(),
            site_url: "https://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(doc.display_name(), "Example Store");
        assert_eq!(AuditDocument::default().display_name(), "Unknown");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.json");
        std::fs::write(&path, "{\"pages\": [").unwrap();

        let err = AuditDocument::load(&path).unwrap_err();
        assert!(matches!(err, ReportError::Parse { .. }));

        let missing = AuditDocument::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ReportError::Read { .. }));
    }
}
