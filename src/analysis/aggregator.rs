//! Finding aggregation and statistics.
//!
//! This module computes the derived metrics shown in the report's analytics
//! panels and header: per-lens averages, the score histogram and the priority
//! histogram. All functions are pure and tolerate missing values.

use crate::models::{AuditDocument, Lens, Page, Priority};

/// Average score per lens, in [`Lens::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LensAverages {
    values: [f64; 6],
}

impl LensAverages {
    pub fn get(&self, lens: Lens) -> f64 {
        self.values[lens.index()]
    }

    /// Iterate in canonical display order.
    pub fn iter(&self) -> impl Iterator<Item = (Lens, f64)> + '_ {
        Lens::ALL.iter().map(move |&lens| (lens, self.get(lens)))
    }
}

/// Number of findings per integer score 1-5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDistribution {
    counts: [usize; 5],
}

impl ScoreDistribution {
    /// Count for a bucket in 1..=5; other values have no bucket and yield 0.
    pub fn get(&self, score: u8) -> usize {
        match score {
            1..=5 => self.counts[usize::from(score) - 1],
            _ => 0,
        }
    }

    /// `(score, count)` pairs from 1 to 5.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (1..=5u8).map(move |score| (score, self.get(score)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Number of findings per priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityDistribution {
    counts: [usize; 4],
}

impl PriorityDistribution {
    pub fn get(&self, priority: Priority) -> usize {
        self.counts[priority.index()]
    }

    /// Iterate from P0 to P3.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, usize)> + '_ {
        Priority::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Everything the renderer needs besides the document itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub lens_averages: LensAverages,
    pub score_distribution: ScoreDistribution,
    pub priority_distribution: PriorityDistribution,
    pub total_pages: usize,
    pub total_findings: usize,
    /// Findings at P0 or P1.
    pub urgent_findings: usize,
}

impl Aggregates {
    pub fn from_document(doc: &AuditDocument) -> Self {
        let pages = doc.pages.as_slice();
        let priority_distribution = priority_distribution(pages);

        Self {
            lens_averages: lens_averages(pages),
            score_distribution: score_distribution(pages),
            priority_distribution,
            total_pages: pages.len(),
            total_findings: doc.findings().count(),
            urgent_findings: priority_distribution
                .iter()
                .filter(|(priority, _)| priority.is_urgent())
                .map(|(_, count)| count)
                .sum(),
        }
    }
}

/// Average the scores of all findings tagged with each lens.
///
/// Averages are rounded to two decimals; a lens with no findings is 0.
pub fn lens_averages(pages: &[Page]) -> LensAverages {
    let mut totals = [0.0f64; 6];
    let mut counts = [0usize; 6];

    for finding in pages.iter().flat_map(|p| &p.findings) {
        if let Some(lens) = finding.lens {
            totals[lens.index()] += finding.score_value();
            counts[lens.index()] += 1;
        }
    }

    let mut values = [0.0f64; 6];
    for (i, value) in values.iter_mut().enumerate() {
        if counts[i] > 0 {
            *value = round2(totals[i] / counts[i] as f64);
        }
    }

    LensAverages { values }
}

/// Count findings per rounded score.
///
/// A missing score is bucketed as 3.
pub fn score_distribution(pages: &[Page]) -> ScoreDistribution {
    let mut counts = [0usize; 5];

    for finding in pages.iter().flat_map(|p| &p.findings) {
        let bucket = score_bucket(finding.score.unwrap_or(3.0));
        counts[usize::from(bucket) - 1] += 1;
    }

    ScoreDistribution { counts }
}

/// Count findings per priority tier (unknown tiers were decoded as P2).
pub fn priority_distribution(pages: &[Page]) -> PriorityDistribution {
    let mut counts = [0usize; 4];

    for finding in pages.iter().flat_map(|p| &p.findings) {
        counts[finding.priority.index()] += 1;
    }

    PriorityDistribution { counts }
}

/// Map a score onto the 1-5 histogram.
///
/// Halves round to the even neighbour (2.5 -> 2, 3.5 -> 4) before clamping.
pub fn score_bucket(score: f64) -> u8 {
    if score.is_nan() {
        return 1;
    }
    score.round_ties_even().clamp(1.0, 5.0) as u8
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Finding;

    fn create_test_finding(score: Option<f64>, priority: Priority, lens: Option<Lens>) -> Finding {
        Finding {
            criterion_id: "H1".to_string(),
            criterion_name: "Hero".to_string(),
            score,
            issue: "Issue".to_string(),
            recommendation: "Fix it".to_string(),
            priority,
            lens,
        }
    }

    fn page_with(findings: Vec<Finding>) -> Page {
        Page {
            page_type: "Homepage".to_string(),
            findings,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_pages_are_all_zero() {
        let pages: Vec<Page> = Vec::new();

        assert_eq!(lens_averages(&pages), LensAverages::default());
        assert_eq!(score_distribution(&pages).total(), 0);
        assert_eq!(priority_distribution(&pages).total(), 0);
    }

    #[test]
    fn test_lens_averages_across_pages() {
        let pages = vec![
            page_with(vec![
                create_test_finding(Some(2.0), Priority::P1, Some(Lens::Clarity)),
                create_test_finding(Some(3.0), Priority::P2, Some(Lens::Clarity)),
            ]),
            page_with(vec![
                create_test_finding(Some(5.0), Priority::P3, Some(Lens::Clarity)),
                create_test_finding(Some(4.0), Priority::P2, Some(Lens::Urgency)),
                create_test_finding(Some(1.0), Priority::P0, None),
            ]),
        ];

        let averages = lens_averages(&pages);
        assert_eq!(averages.get(Lens::Clarity), 3.33);
        assert_eq!(averages.get(Lens::Urgency), 4.0);
        assert_eq!(averages.get(Lens::Friction), 0.0);

        let order: Vec<Lens> = averages.iter().map(|(lens, _)| lens).collect();
        assert_eq!(order, Lens::ALL.to_vec());
    }

    #[test]
    fn test_score_bucket_rounds_half_to_even() {
        assert_eq!(score_bucket(2.5), 2);
        assert_eq!(score_bucket(3.5), 4);
        assert_eq!(score_bucket(4.4), 4);
        assert_eq!(score_bucket(0.0), 1);
        assert_eq!(score_bucket(7.0), 5);
        assert_eq!(score_bucket(f64::NAN), 1);
    }

    #[test]
    fn test_score_and_priority_distribution() {
        let pages = vec![page_with(vec![
            create_test_finding(Some(1.0), Priority::P0, None),
            create_test_finding(Some(5.0), Priority::P3, None),
        ])];

        let scores = score_distribution(&pages);
        assert_eq!(scores.get(1), 1);
        assert_eq!(scores.get(5), 1);
        assert_eq!(scores.get(2) + scores.get(3) + scores.get(4), 0);

        let priorities = priority_distribution(&pages);
        assert_eq!(priorities.get(Priority::P0), 1);
        assert_eq!(priorities.get(Priority::P3), 1);
        assert_eq!(priorities.get(Priority::P1), 0);
        assert_eq!(priorities.get(Priority::P2), 0);
    }

    #[test]
    fn test_distribution_sums_to_finding_count() {
        let findings: Vec<Finding> = [None, Some(0.2), Some(2.5), Some(3.5), Some(9.0), Some(4.6)]
            .into_iter()
            .map(|s| create_test_finding(s, Priority::P2, None))
            .collect();
        let pages = vec![page_with(findings)];

        let scores = score_distribution(&pages);
        assert_eq!(scores.total(), 6);
        assert_eq!(scores.get(3), 1);
    }

    #[test]
    fn test_aggregates_from_document() {
        let doc = AuditDocument {
            pages: vec![
                page_with(vec![
                    create_test_finding(Some(1.0), Priority::P0, Some(Lens::Anxiety)),
                    create_test_finding(Some(2.0), Priority::P1, Some(Lens::Anxiety)),
                ]),
                page_with(vec![create_test_finding(Some(4.0), Priority::P2, None)]),
            ],
            ..Default::default()
        };

        let aggregates = Aggregates::from_document(&doc);
        assert_eq!(aggregates.total_pages, 2);
        assert_eq!(aggregates.total_findings, 3);
        assert_eq!(aggregates.urgent_findings, 2);
        assert_eq!(aggregates.lens_averages.get(Lens::Anxiety), 1.5);
    }
}
