//! The per-document analysis driver.

use std::path::Path;

use crate::analyze::SubsectionAnalyzer;
use crate::extract::{ContentExtractor, ExtractedContent};
use crate::model::{AnalysisResult, JobSpec, PersonaProfile, RankedSection, RawDocument};
use crate::rank::RelevanceScorer;
use crate::segment::Segmenter;

use super::{PipelineOptions, ResultAssembler, RunConfig};

/// The segmentation → ranking → subsection-analysis → assembly pipeline.
///
/// Stateless between documents: every run creates its entities fresh and
/// consumes them once, so documents can be processed in parallel with no
/// coordination.
#[derive(Debug, Default)]
pub struct Pipeline {
    options: PipelineOptions,
    segmenter: Segmenter,
}

impl Pipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    /// Create a pipeline with explicit options.
    pub fn with_options(options: PipelineOptions) -> Self {
        Self {
            options,
            segmenter: Segmenter::new(),
        }
    }

    /// The options this pipeline runs with.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Analyze a raw document that carries no tables or images.
    pub fn run(
        &self,
        doc: &RawDocument,
        profile: &PersonaProfile,
        job: &JobSpec,
    ) -> AnalysisResult {
        self.run_extracted(doc, Vec::new(), Vec::new(), profile, job)
    }

    /// Analyze a raw document together with extractor-supplied tables and
    /// images.
    pub fn run_extracted(
        &self,
        doc: &RawDocument,
        tables: Vec<crate::model::TableData>,
        images: Vec<crate::model::ImageRef>,
        profile: &PersonaProfile,
        job: &JobSpec,
    ) -> AnalysisResult {
        let sections = self
            .segmenter
            .segment_lines(doc.numbered_lines(self.options.max_pages));

        let scorer = RelevanceScorer::with_options(self.options.scoring.clone());
        let ranked = scorer.rank(sections, profile, job);

        let analyzer = SubsectionAnalyzer::with_options(self.options.subsection.clone());
        let enriched: Vec<RankedSection> = ranked
            .into_iter()
            .map(|section| {
                let insights = analyzer.analyze(&section.body, profile);
                section.with_insights(insights)
            })
            .collect();

        let tables = if self.options.include_tables {
            tables
        } else {
            Vec::new()
        };
        let images = if self.options.include_images {
            images
        } else {
            Vec::new()
        };

        ResultAssembler::new(self.options.content_budget).assemble(
            &doc.filename,
            &doc.text_up_to(self.options.max_pages),
            enriched,
            tables,
            images,
            profile,
            job,
        )
    }

    /// Extract and analyze the document at `path`.
    ///
    /// Extraction failure never surfaces: it degrades to a single
    /// fallback section and a "degraded" metadata tag.
    pub fn process_file(
        &self,
        extractor: &dyn ContentExtractor,
        path: &Path,
        config: &RunConfig,
    ) -> AnalysisResult {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let (profile, job) = config.resolve();

        match extractor.extract(path) {
            Ok(content) => {
                log::debug!(
                    "extracted {} pages from {}",
                    content.pages.len(),
                    filename
                );
                let ExtractedContent {
                    pages,
                    tables,
                    images,
                } = content;
                let doc = RawDocument::new(filename, pages);
                self.run_extracted(&doc, tables, images, &profile, &job)
            }
            Err(e) => {
                log::warn!("extraction failed for {filename}, degrading: {e}");
                ResultAssembler::new(self.options.content_budget)
                    .assemble_fallback(&filename, &profile, &job)
            }
        }
    }
}
