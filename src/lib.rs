//! # docrank
//!
//! Persona-relevant document outlining for Rust.
//!
//! docrank turns a document's raw extracted text into a ranked outline:
//! it splits the text into titled sections, scores each section against a
//! persona's interest profile and a stated task, and extracts bounded
//! paragraph-level insights per section.
//!
//! ## Quick Start
//!
//! ```
//! use docrank::{analyze_text, render, JsonFormat};
//!
//! fn main() -> docrank::Result<()> {
//!     let text = "MENU\nrecipe ingredients breakfast\nTRAVEL\nflight hotel";
//!     let result = analyze_text("doc.txt", text, "Food Contractor", "Plan lunch menu");
//!
//!     assert_eq!(result.sections[0].title, "MENU");
//!     let json = render::to_json(&result, JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading-based segmentation**: deterministic heuristics, document
//!   order preserved
//! - **Persona ranking**: keyword-driven scoring with stable tie-breaking
//! - **Subsection insights**: bounded excerpts with extracted key points
//! - **Depth policy**: one pipeline, parameterized from instant to full
//! - **Parallel batches**: independent documents fan out over Rayon
//! - **Degraded-never-failed**: extraction errors yield fallback results

pub mod analyze;
pub mod batch;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod rank;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use analyze::{RelevancePolicy, SubsectionAnalyzer, SubsectionOptions};
pub use batch::{process_batch, BatchSummary};
pub use error::{Error, Result};
pub use extract::{ContentExtractor, ExtractedContent, PlainTextExtractor};
pub use model::{
    AnalysisMetadata, AnalysisResult, ImageRef, JobSpec, PersonaProfile, RankedSection,
    RawDocument, Section, SubsectionInsight, TableData,
};
pub use pipeline::{Depth, JobDescriptor, PersonaDescriptor, Pipeline, PipelineOptions, RunConfig};
pub use rank::{keywords_for, RelevanceScorer, ScoreOptions};
pub use render::{to_json, JsonFormat};
pub use segment::{is_heading, HeadingClassifier, Segmenter};

use std::path::Path;

/// Analyze a block of raw text for a persona and job.
///
/// # Example
///
/// ```
/// use docrank::analyze_text;
///
/// let result = analyze_text("notes.txt", "MENU\nrecipe list", "Food Contractor", "Plan lunch");
/// assert_eq!(result.metadata.persona, "Food Contractor");
/// ```
pub fn analyze_text(
    filename: &str,
    text: &str,
    persona: &str,
    job: &str,
) -> model::AnalysisResult {
    let doc = RawDocument::from_text(filename, text);
    Pipeline::new().run(&doc, &PersonaProfile::named(persona), &JobSpec::new(job))
}

/// Analyze ordered page texts for a persona and job.
pub fn analyze_pages(
    filename: &str,
    pages: Vec<String>,
    persona: &str,
    job: &str,
) -> model::AnalysisResult {
    let doc = RawDocument::new(filename, pages);
    Pipeline::new().run(&doc, &PersonaProfile::named(persona), &JobSpec::new(job))
}

/// Analyze a pre-extracted text file for a persona and job.
///
/// Reads the file with [`PlainTextExtractor`]; an unreadable file yields
/// a degraded fallback result rather than an error.
pub fn analyze_file<P: AsRef<Path>>(path: P, persona: &str, job: &str) -> model::AnalysisResult {
    let config = RunConfig::new(persona, job);
    Pipeline::new().process_file(&PlainTextExtractor::new(), path.as_ref(), &config)
}

/// Builder for configuring and running document analysis.
///
/// # Example
///
/// ```
/// use docrank::{Analyzer, Depth, RelevancePolicy};
///
/// let result = Analyzer::new()
///     .with_depth(Depth::Fast)
///     .with_persona("Student")
///     .with_job("Summarize lecture notes")
///     .with_relevance_policy(RelevancePolicy::KeyPointCount)
///     .analyze_text("notes.txt", "Chapter 1\nstudy material for the course");
/// assert_eq!(result.metadata.persona, "Student");
/// ```
pub struct Analyzer {
    options: PipelineOptions,
    config: RunConfig,
}

impl Analyzer {
    /// Create a new analyzer builder with default options.
    pub fn new() -> Self {
        Self {
            options: PipelineOptions::default(),
            config: RunConfig::default(),
        }
    }

    /// Apply a named depth preset.
    ///
    /// Only the depth-controlled fields change; settings made by other
    /// builder calls survive regardless of call order.
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.options = self.options.apply_depth(depth);
        self
    }

    /// Set the persona role.
    pub fn with_persona(mut self, role: impl Into<String>) -> Self {
        self.config.persona = Some(PersonaDescriptor::Role(role.into()));
        self
    }

    /// Set the job description.
    pub fn with_job(mut self, task: impl Into<String>) -> Self {
        self.config.job_to_be_done = Some(JobDescriptor::Task(task.into()));
        self
    }

    /// Set the full run configuration (persona and job descriptors).
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit the number of pages considered.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.options = self.options.with_max_pages(max_pages);
        self
    }

    /// Enable or disable the section length bonus.
    pub fn with_length_bonus(mut self, enabled: bool) -> Self {
        self.options = self.options.with_length_bonus(enabled);
        self
    }

    /// Set the subsection relevance policy.
    pub fn with_relevance_policy(mut self, policy: RelevancePolicy) -> Self {
        self.options = self.options.with_relevance_policy(policy);
        self
    }

    /// Set the truncated-content character budget.
    pub fn with_content_budget(mut self, budget: usize) -> Self {
        self.options = self.options.with_content_budget(budget);
        self
    }

    /// Analyze a block of raw text.
    pub fn analyze_text(&self, filename: &str, text: &str) -> model::AnalysisResult {
        let (profile, job) = self.config.resolve();
        let doc = RawDocument::from_text(filename, text);
        Pipeline::with_options(self.options.clone()).run(&doc, &profile, &job)
    }

    /// Analyze a file via the given extractor.
    pub fn analyze_with<P: AsRef<Path>>(
        &self,
        extractor: &dyn ContentExtractor,
        path: P,
    ) -> model::AnalysisResult {
        Pipeline::with_options(self.options.clone()).process_file(
            extractor,
            path.as_ref(),
            &self.config,
        )
    }

    /// Build the configured pipeline for repeated use.
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::with_options(self.options.clone())
    }

    /// The run configuration this analyzer resolves personas with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
