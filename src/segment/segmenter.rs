//! Section extraction from ordered line streams.

use super::HeadingClassifier;
use crate::model::Section;

/// Default title for leading text that appears before any heading.
const DEFAULT_TITLE: &str = "Introduction";

/// Splits a document's lines into ordered, titled sections.
///
/// Each heading line closes the current section (if it has accumulated any
/// non-blank content) and opens a new one; the heading line itself becomes
/// the first body line of its own section so title keywords participate in
/// body matching. Blank lines are skipped. Output order equals input
/// order, and no emitted section has a blank body.
#[derive(Debug, Default)]
pub struct Segmenter {
    classifier: HeadingClassifier,
}

impl Segmenter {
    /// Create a segmenter.
    pub fn new() -> Self {
        Self {
            classifier: HeadingClassifier::new(),
        }
    }

    /// Segment a block of text without page information.
    ///
    /// All sections get the placeholder page 1.
    pub fn segment(&self, text: &str) -> Vec<Section> {
        self.segment_lines(text.lines().map(|line| (1, line)))
    }

    /// Segment an ordered stream of (page, line) pairs.
    ///
    /// Each section carries the page of its first line.
    pub fn segment_lines<'a, I>(&self, lines: I) -> Vec<Section>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut sections = Vec::new();
        let mut current_title = DEFAULT_TITLE.to_string();
        let mut current_page = 1;
        let mut accumulator: Vec<&str> = Vec::new();

        for (page, raw_line) in lines {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if self.classifier.is_heading(line) {
                if !accumulator.is_empty() {
                    sections.push(Section::new(
                        std::mem::replace(&mut current_title, line.to_string()),
                        accumulator.join("\n"),
                        current_page,
                    ));
                } else {
                    current_title = line.to_string();
                }
                // heading text opens its own section's body
                accumulator = vec![line];
                current_page = page;
            } else {
                if accumulator.is_empty() {
                    current_page = page;
                }
                accumulator.push(line);
            }
        }

        if !accumulator.is_empty() {
            sections.push(Section::new(
                current_title,
                accumulator.join("\n"),
                current_page,
            ));
        }

        log::debug!("segmented into {} sections", sections.len());
        sections
    }
}
