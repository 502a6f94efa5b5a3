//! Raw input document.

use serde::{Deserialize, Serialize};

/// A document as delivered by the content extractor: a filename plus the
/// ordered raw text of each page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Source filename (basename, not a full path)
    pub filename: String,

    /// Ordered page texts
    pub pages: Vec<String>,
}

impl RawDocument {
    /// Create a document from ordered page texts.
    pub fn new(filename: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            filename: filename.into(),
            pages,
        }
    }

    /// Create a single-page document from one block of text.
    pub fn from_text(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            pages: vec![text.into()],
        }
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Concatenated text of all pages, separated by newlines.
    pub fn full_text(&self) -> String {
        self.pages.join("\n")
    }

    /// Concatenated text of at most the first `max_pages` pages.
    ///
    /// `None` means all pages are considered.
    pub fn text_up_to(&self, max_pages: Option<usize>) -> String {
        match max_pages {
            Some(n) => self.pages[..self.pages.len().min(n)].join("\n"),
            None => self.full_text(),
        }
    }

    /// Check whether the document has no text at all.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.trim().is_empty())
    }

    /// Ordered (page number, line) pairs, 1-indexed pages, blank lines included.
    pub fn numbered_lines(&self, max_pages: Option<usize>) -> Vec<(usize, &str)> {
        let limit = match max_pages {
            Some(n) => self.pages.len().min(n),
            None => self.pages.len(),
        };
        self.pages[..limit]
            .iter()
            .enumerate()
            .flat_map(|(i, page)| page.lines().map(move |line| (i + 1, line)))
            .collect()
    }
}
