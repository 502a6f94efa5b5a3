//! Extraction of bounded paragraph insights from section bodies.

use crate::model::{PersonaProfile, SubsectionInsight};

/// How a paragraph's relevance score is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelevancePolicy {
    /// Score = number of extracted key points (canonical).
    #[default]
    KeyPointCount,
    /// Score = persona keywords present in the lowercased paragraph.
    KeywordHits,
}

/// Options for subsection analysis.
#[derive(Debug, Clone)]
pub struct SubsectionOptions {
    /// Paragraphs shorter than this are discarded (characters)
    pub min_paragraph_len: usize,

    /// At most this many paragraphs are retained per section
    pub max_paragraphs: usize,

    /// Excerpts longer than this are truncated with a `...` suffix
    pub max_excerpt_len: usize,

    /// At most this many key-point sentences per paragraph
    pub max_key_points: usize,

    /// Sentences shorter than this (trimmed) are not key points
    pub min_sentence_len: usize,

    /// Relevance scoring policy
    pub policy: RelevancePolicy,
}

impl SubsectionOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retained-paragraph cap.
    pub fn with_max_paragraphs(mut self, max: usize) -> Self {
        self.max_paragraphs = max;
        self
    }

    /// Set the excerpt display length.
    pub fn with_max_excerpt_len(mut self, len: usize) -> Self {
        self.max_excerpt_len = len;
        self
    }

    /// Set the relevance scoring policy.
    pub fn with_policy(mut self, policy: RelevancePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for SubsectionOptions {
    fn default() -> Self {
        Self {
            min_paragraph_len: 50,
            max_paragraphs: 3,
            max_excerpt_len: 150,
            max_key_points: 2,
            min_sentence_len: 20,
            policy: RelevancePolicy::default(),
        }
    }
}

/// Extracts a bounded list of paragraph-level insights from a section body.
#[derive(Debug, Default)]
pub struct SubsectionAnalyzer {
    options: SubsectionOptions,
}

impl SubsectionAnalyzer {
    /// Create an analyzer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with explicit options.
    pub fn with_options(options: SubsectionOptions) -> Self {
        Self { options }
    }

    /// Analyze a section body.
    ///
    /// The body is split into paragraphs on blank-line boundaries; short
    /// paragraphs are discarded and at most `max_paragraphs` survivors are
    /// analyzed, so the returned list is always bounded no matter how long
    /// the body is. Insight indices are 1-based positions among retained
    /// paragraphs, not original paragraph numbers.
    pub fn analyze(&self, body: &str, profile: &PersonaProfile) -> Vec<SubsectionInsight> {
        body.split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty() && p.chars().count() >= self.options.min_paragraph_len)
            .take(self.options.max_paragraphs)
            .enumerate()
            .map(|(i, paragraph)| {
                let key_points = self.key_points(paragraph);
                let relevance_score = match self.options.policy {
                    RelevancePolicy::KeyPointCount => key_points.len() as i64,
                    RelevancePolicy::KeywordHits => {
                        profile.hits_in(&paragraph.to_lowercase()) as i64
                    }
                };
                SubsectionInsight {
                    paragraph: i + 1,
                    excerpt: truncate_excerpt(paragraph, self.options.max_excerpt_len),
                    key_points,
                    relevance_score,
                }
            })
            .collect()
    }

    /// Leading sentences of the paragraph that pass the length threshold.
    fn key_points(&self, paragraph: &str) -> Vec<String> {
        paragraph
            .split(". ")
            .take(self.options.max_key_points)
            .map(str::trim)
            .filter(|s| s.chars().count() > self.options.min_sentence_len)
            .map(|s| s.to_string())
            .collect()
    }
}

/// Truncate to `max_len` characters with a `...` suffix, on a char boundary.
fn truncate_excerpt(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut excerpt: String = text.chars().take(max_len).collect();
    excerpt.push_str("...");
    excerpt
}
