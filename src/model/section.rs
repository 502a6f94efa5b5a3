//! Section types produced by segmentation and ranking.

use serde::{Deserialize, Serialize};

/// A contiguous, titled span of document text produced by the segmenter.
///
/// Invariant: `body` is never blank — the segmenter only flushes a section
/// once it has accumulated non-blank content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title (the heading line, or "Introduction" for leading text)
    pub title: String,

    /// Body text: the section's non-blank lines joined with newlines.
    /// For heading-started sections the heading line is the first body
    /// line, so title keywords also match against the body.
    pub body: String,

    /// Page of the section's first line (1-indexed); constant 1 when the
    /// caller supplies no page information
    pub page: usize,
}

impl Section {
    /// Create a section.
    pub fn new(title: impl Into<String>, body: impl Into<String>, page: usize) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            page,
        }
    }
}

/// A section after scoring and ranking, enriched with paragraph insights.
///
/// Built by explicit construction from a [`Section`] rather than in-place
/// mutation; the scorer sets `score` and `rank`, the subsection analyzer
/// fills `subsection_analysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSection {
    /// Section title
    pub title: String,

    /// Section body text
    #[serde(rename = "content")]
    pub body: String,

    /// Page of the section's first line (1-indexed, best effort)
    pub page: usize,

    /// Relevance score against the persona profile and job
    pub score: i64,

    /// 1-based position after descending-score stable sort
    pub rank: usize,

    /// Paragraph-level insights, capped by the analyzer
    pub subsection_analysis: Vec<SubsectionInsight>,
}

impl RankedSection {
    /// Construct from a segmenter section plus score and rank.
    pub fn from_section(section: Section, score: i64, rank: usize) -> Self {
        Self {
            title: section.title,
            body: section.body,
            page: section.page,
            score,
            rank,
            subsection_analysis: Vec::new(),
        }
    }

    /// Return a copy carrying the given insights.
    pub fn with_insights(self, insights: Vec<SubsectionInsight>) -> Self {
        Self {
            subsection_analysis: insights,
            ..self
        }
    }
}

/// A bounded, paragraph-level excerpt with extracted key points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsectionInsight {
    /// 1-based index among retained paragraphs (not original positions)
    pub paragraph: usize,

    /// Excerpt of the paragraph, truncated with a trailing `...` when it
    /// exceeds the display length
    #[serde(rename = "content")]
    pub excerpt: String,

    /// Leading sentences of the paragraph that pass the length threshold
    pub key_points: Vec<String>,

    /// Relevance score under the configured policy
    pub relevance_score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_section_construction() {
        let section = Section::new("MENU", "MENU\nrecipe ingredients", 2);
        let ranked = RankedSection::from_section(section, 7, 1);
        assert_eq!(ranked.title, "MENU");
        assert_eq!(ranked.page, 2);
        assert_eq!(ranked.score, 7);
        assert_eq!(ranked.rank, 1);
        assert!(ranked.subsection_analysis.is_empty());
    }

    #[test]
    fn test_with_insights_replaces_list() {
        let ranked = RankedSection::from_section(Section::new("T", "body", 1), 0, 1);
        let insight = SubsectionInsight {
            paragraph: 1,
            excerpt: "body".to_string(),
            key_points: vec![],
            relevance_score: 0,
        };
        let enriched = ranked.with_insights(vec![insight]);
        assert_eq!(enriched.subsection_analysis.len(), 1);
    }

    #[test]
    fn test_section_serializes_body_as_content() {
        let ranked = RankedSection::from_section(Section::new("T", "the body", 1), 3, 2);
        let json = serde_json::to_string(&ranked).unwrap();
        assert!(json.contains("\"content\":\"the body\""));
        assert!(!json.contains("\"body\""));
    }
}
