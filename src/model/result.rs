//! Final analysis record and its pass-through companions.

use serde::{Deserialize, Serialize};

use super::RankedSection;

/// A table extracted by the external content extractor.
///
/// Passed through to the output untouched; the pipeline never inspects
/// the cell grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Page the table was found on (1-indexed)
    pub page: usize,

    /// Grid of cell strings, row-major
    pub data: Vec<Vec<String>>,
}

/// A reference to an image extracted by the external content extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Page the image was found on (1-indexed)
    pub page: usize,

    /// Path-like reference to the extracted image file
    pub image_file: String,
}

/// Metadata attached to every analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Persona role the ranking was computed for
    pub persona: String,

    /// Task description the ranking was computed for
    pub job_to_be_done: String,

    /// Number of sections in the result
    pub total_sections: usize,

    /// Processing tag: "completed" for a normal run, "degraded" when the
    /// extractor failed and a fallback result was produced
    pub processing_time: String,
}

/// The ranked, persona-relevant outline of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Source filename
    pub filename: String,

    /// Full raw text, truncated to the configured character budget
    pub content: String,

    /// Sections in descending score order, ties in document order
    pub sections: Vec<RankedSection>,

    /// Tables passed through from the extractor
    pub tables: Vec<TableData>,

    /// Image references passed through from the extractor
    pub images: Vec<ImageRef>,

    /// Persona/job metadata
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Whether this result came from a degraded (fallback) run.
    pub fn is_degraded(&self) -> bool {
        self.metadata.processing_time == "degraded"
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
