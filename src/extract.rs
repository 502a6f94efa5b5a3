//! Content extractor seam.
//!
//! Real document parsing (PDF or otherwise) is an external collaborator:
//! the pipeline only needs ordered page texts plus opaque tables and image
//! references. Implementations live behind [`ContentExtractor`]; the
//! pipeline degrades any extraction failure to a fallback result instead
//! of propagating it.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{ImageRef, TableData};

/// What a content extractor delivers for one document.
#[derive(Debug, Clone, Default)]
pub struct ExtractedContent {
    /// Ordered raw page texts
    pub pages: Vec<String>,

    /// Tables found in the document, passed through untouched
    pub tables: Vec<TableData>,

    /// Image references, passed through untouched
    pub images: Vec<ImageRef>,
}

impl ExtractedContent {
    /// Text-only content with one entry per page.
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }
}

/// External collaborator that turns a document reference into raw content.
///
/// Implementations must return page texts in document order. Errors are
/// allowed; callers inside this crate never let them abort a batch.
pub trait ContentExtractor: Sync {
    /// Extract the content of the document at `path`.
    fn extract(&self, path: &Path) -> Result<ExtractedContent>;
}

/// Extractor for pre-extracted plain text files.
///
/// Reads the file as UTF-8 and splits pages on form feed (`\x0c`), the
/// conventional page separator of text dumps. Produces no tables or
/// images.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a plain text extractor.
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedContent> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| Error::Encoding(format!("{}: {e}", path.display())))?;
        let pages = text.split('\x0c').map(|p| p.to_string()).collect();
        Ok(ExtractedContent::from_pages(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_text_extractor_splits_pages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "page one text\x0cpage two text").unwrap();

        let content = PlainTextExtractor::new().extract(file.path()).unwrap();
        assert_eq!(content.pages.len(), 2);
        assert_eq!(content.pages[0], "page one text");
        assert!(content.tables.is_empty());
        assert!(content.images.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PlainTextExtractor::new().extract(Path::new("/nonexistent/file.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, 0x00]).unwrap();

        let result = PlainTextExtractor::new().extract(file.path());
        assert!(matches!(result, Err(Error::Encoding(_))));
    }
}
