//! Final result assembly.

use crate::model::{
    AnalysisMetadata, AnalysisResult, ImageRef, JobSpec, PersonaProfile, RankedSection, TableData,
};

/// Processing tag for a normal run.
const TAG_COMPLETED: &str = "completed";

/// Processing tag for a degraded (fallback) run.
const TAG_DEGRADED: &str = "degraded";

/// Merges ranked sections, pass-through tables/images and metadata into
/// the final output record.
///
/// Assembly never fails: empty sections, tables or images are valid and
/// simply carried as empty collections.
#[derive(Debug, Default)]
pub struct ResultAssembler {
    content_budget: usize,
}

impl ResultAssembler {
    /// Create an assembler with the given truncated-content budget.
    pub fn new(content_budget: usize) -> Self {
        Self { content_budget }
    }

    /// Assemble the result for a completed run.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        &self,
        filename: &str,
        full_text: &str,
        sections: Vec<RankedSection>,
        tables: Vec<TableData>,
        images: Vec<ImageRef>,
        profile: &PersonaProfile,
        job: &JobSpec,
    ) -> AnalysisResult {
        let total_sections = sections.len();
        AnalysisResult {
            filename: filename.to_string(),
            content: truncate_chars(full_text, self.content_budget),
            sections,
            tables,
            images,
            metadata: AnalysisMetadata {
                persona: profile.role.clone(),
                job_to_be_done: job.task.clone(),
                total_sections,
                processing_time: TAG_COMPLETED.to_string(),
            },
        }
    }

    /// Assemble the degraded result for a document whose extraction
    /// failed: a single fallback section and empty pass-through lists.
    pub fn assemble_fallback(
        &self,
        filename: &str,
        profile: &PersonaProfile,
        job: &JobSpec,
    ) -> AnalysisResult {
        let fallback = RankedSection {
            title: "Document".to_string(),
            body: "No text could be extracted from this document.".to_string(),
            page: 1,
            score: 0,
            rank: 1,
            subsection_analysis: Vec::new(),
        };
        AnalysisResult {
            filename: filename.to_string(),
            content: String::new(),
            sections: vec![fallback],
            tables: Vec::new(),
            images: Vec::new(),
            metadata: AnalysisMetadata {
                persona: profile.role.clone(),
                job_to_be_done: job.task.clone(),
                total_sections: 1,
                processing_time: TAG_DEGRADED.to_string(),
            },
        }
    }
}

/// Truncate to `max_len` characters on a char boundary, no marker.
fn truncate_chars(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        text.chars().take(max_len).collect()
    }
}
