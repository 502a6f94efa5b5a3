//! Heading detection heuristics.

use regex::Regex;

/// Line length at and above which a line is never treated as a heading.
const MAX_HEADING_LEN: usize = 100;

/// Structural keywords that mark a line as a heading when it starts with one.
const STRUCTURAL_KEYWORDS: &[&str] = &[
    "Chapter",
    "Section",
    "Part",
    "Introduction",
    "Conclusion",
    "Summary",
];

/// Classifies whether a line of text looks like a section heading.
///
/// The classifier is a pure, stateless predicate; the struct only exists
/// to hold the compiled enumerator patterns.
#[derive(Debug)]
pub struct HeadingClassifier {
    numeric_re: Regex,
    roman_re: Regex,
}

impl HeadingClassifier {
    /// Create a classifier with compiled enumerator patterns.
    pub fn new() -> Self {
        Self {
            numeric_re: Regex::new(r"^\d+\.").unwrap(),
            roman_re: Regex::new(r"^[IVXLCDM]+\.").unwrap(),
        }
    }

    /// Decide whether a trimmed line looks like a section heading.
    ///
    /// A non-blank line shorter than 100 characters is a heading if any of:
    /// - it consists entirely of upper-case letters and whitespace, with at
    ///   least one letter;
    /// - it starts with a numeric (`3.`) or roman (`IV.`) enumerator;
    /// - it ends with `:`;
    /// - it starts with a structural keyword (Chapter, Section, Part,
    ///   Introduction, Conclusion, Summary).
    ///
    /// A line with no alphanumeric character is never a heading, so
    /// punctuation runs like `----:` do not open sections.
    pub fn is_heading(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() || line.chars().count() >= MAX_HEADING_LEN {
            return false;
        }
        if !line.chars().any(|c| c.is_alphanumeric()) {
            return false;
        }

        self.is_all_caps(line)
            || self.numeric_re.is_match(line)
            || self.roman_re.is_match(line)
            || line.ends_with(':')
            || STRUCTURAL_KEYWORDS.iter().any(|kw| line.starts_with(kw))
    }

    /// Entirely upper-case letters and whitespace, with at least one letter.
    fn is_all_caps(&self, line: &str) -> bool {
        line.chars().any(|c| c.is_alphabetic())
            && line.chars().all(|c| c.is_whitespace() || c.is_uppercase())
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper constructing a classifier per call.
///
/// For line streams prefer holding a [`HeadingClassifier`] so the patterns
/// compile once.
pub fn is_heading(line: &str) -> bool {
    HeadingClassifier::new().is_heading(line)
}
